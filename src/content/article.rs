//! Article metadata extraction.
//!
//! An [`Article`] is derived entirely from its markdown file: the first
//! `#` heading becomes the title, the first paragraph the excerpt, and a
//! numeric prefix (in the title or filename) the sort order. The parent
//! directory name becomes the tag.

use crate::utils::slug::slugify;
use regex::Regex;
use serde::Serialize;
use std::{path::PathBuf, sync::LazyLock};

/// Sort-order sentinel for articles without a numeric prefix.
/// Unordered articles sort after every explicitly ordered one.
pub const UNORDERED: u32 = 9999;

/// Maximum excerpt length in characters.
const EXCERPT_MAX_CHARS: usize = 180;

static TITLE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*#\s+(?P<title>.+?)\s*$").unwrap());

static ORDER_PREFIX_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*(?P<num>\d{1,3})\s*[.\-:]?\s*").unwrap());

/// A blog post's metadata record pointing to an external markdown file.
///
/// Serialized field names match the `data/articles.json` output format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    /// Unique identifier: `<tag>__<file-stem>`, slugified.
    pub id: String,

    /// Display title (first `#` heading, or the file stem).
    pub title: String,

    /// Publication date; free-form, possibly empty.
    pub date: String,

    /// Topic tag derived from the parent directory name.
    pub tag: String,

    /// First paragraph of the article, truncated for card display.
    pub excerpt: String,

    /// Path to the markdown source, relative to the site root.
    pub markdown_file: PathBuf,

    /// Optional card image URL.
    pub image: Option<String>,

    /// Sort key; [`UNORDERED`] when no numeric prefix exists.
    pub order: u32,
}

impl Article {
    /// Build an article record from markdown source.
    ///
    /// `stem` is the file stem, `tag` the parent directory name, and
    /// `markdown_file` the source path relative to the site root.
    pub fn from_markdown(text: &str, stem: &str, tag: &str, markdown_file: PathBuf) -> Self {
        let title = read_title(text).unwrap_or_else(|| stem.to_owned());
        let order = parse_order(&title, stem);

        Self {
            id: format!("{}__{}", slugify(tag), slugify(stem)),
            title,
            date: String::new(),
            tag: tag.to_owned(),
            excerpt: read_excerpt(text),
            markdown_file,
            image: None,
            order,
        }
    }
}

/// Extract the first `#` heading from markdown text.
fn read_title(text: &str) -> Option<String> {
    text.lines()
        .find_map(|line| TITLE_RE.captures(line))
        .map(|caps| caps["title"].trim().to_owned())
}

/// Extract the first paragraph after the title as an excerpt.
///
/// Whitespace is collapsed and the result truncated to
/// [`EXCERPT_MAX_CHARS`] characters with a trailing ellipsis.
fn read_excerpt(text: &str) -> String {
    let mut lines = text.lines().peekable();

    // Skip leading blank lines and the title heading
    while lines.peek().is_some_and(|l| l.trim().is_empty()) {
        lines.next();
    }
    if lines.peek().is_some_and(|l| TITLE_RE.is_match(l)) {
        lines.next();
    }

    // Collect the first non-empty run of lines
    let mut para: Vec<&str> = Vec::new();
    for line in lines {
        let line = line.trim();
        if line.is_empty() {
            if !para.is_empty() {
                break;
            }
            continue;
        }
        para.push(line);
    }

    let text = para.join(" ");
    let chars: Vec<char> = text.chars().collect();
    if chars.len() > EXCERPT_MAX_CHARS {
        let truncated: String = chars[..EXCERPT_MAX_CHARS - 1].iter().collect();
        format!("{}…", truncated.trim_end())
    } else {
        text
    }
}

/// Determine the sort order from a numeric prefix.
///
/// The title prefix (`"02. Something"`) wins over the filename prefix
/// (`"02-something"`); without either, returns [`UNORDERED`].
fn parse_order(title: &str, stem: &str) -> u32 {
    ORDER_PREFIX_RE
        .captures(title)
        .or_else(|| ORDER_PREFIX_RE.captures(stem))
        .and_then(|caps| caps["num"].parse().ok())
        .unwrap_or(UNORDERED)
}
