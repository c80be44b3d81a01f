//! Markdown to HTML conversion.
//!
//! Wraps `pulldown-cmark` behind the [`MarkdownConverter`] trait so the
//! article loader can be exercised with stub converters in tests.
//!
//! Code blocks go through [`code_block`], which emits a
//! `language-<lang>` class for client-side syntax highlighting and falls
//! back to a plain `<pre><code>` when no language is given.

use crate::utils::html::escape_html;
use anyhow::Result;
use pulldown_cmark::{CodeBlockKind, Event, Options, Parser, Tag, TagEnd};
use std::fmt::Write;

/// Stable conversion contract: `convert(markdown) -> html`.
pub trait MarkdownConverter: Sync {
    fn convert(&self, markdown: &str) -> Result<String>;
}

/// The default converter, backed by `pulldown-cmark`.
///
/// Enabled extensions: tables, strikethrough, task lists. Soft line
/// breaks render as `<br>` to match the original article formatting.
#[derive(Debug, Default)]
pub struct CmarkConverter;

impl MarkdownConverter for CmarkConverter {
    fn convert(&self, markdown: &str) -> Result<String> {
        let mut options = Options::empty();
        options.insert(Options::ENABLE_TABLES);
        options.insert(Options::ENABLE_STRIKETHROUGH);
        options.insert(Options::ENABLE_TASKLISTS);

        let parser = Parser::new_ext(markdown, options);

        // Rewrite code blocks and soft breaks; pass everything else
        // through to the html writer untouched.
        let mut events: Vec<Event> = Vec::new();
        let mut code: Option<(Option<String>, String)> = None;

        for event in parser {
            match event {
                Event::Start(Tag::CodeBlock(kind)) => {
                    let language = match &kind {
                        CodeBlockKind::Fenced(info) => {
                            let lang = info.split_whitespace().next().unwrap_or_default();
                            (!lang.is_empty()).then(|| lang.to_owned())
                        }
                        CodeBlockKind::Indented => None,
                    };
                    code = Some((language, String::new()));
                }
                Event::Text(text) if code.is_some() => {
                    if let Some((_, buf)) = code.as_mut() {
                        buf.push_str(&text);
                    }
                }
                Event::End(TagEnd::CodeBlock) => {
                    if let Some((language, buf)) = code.take() {
                        events.push(Event::Html(code_block(language.as_deref(), &buf).into()));
                    }
                }
                Event::SoftBreak => events.push(Event::HardBreak),
                other => events.push(other),
            }
        }

        let mut html = String::with_capacity(markdown.len() * 2);
        pulldown_cmark::html::push_html(&mut html, events.into_iter());
        Ok(html)
    }
}

/// Render a fenced code block.
///
/// With a language, the code is tagged `language-<lang>` for the page's
/// highlighter; without one, the block degrades to plain escaped code.
pub fn code_block(language: Option<&str>, code: &str) -> String {
    let mut out = String::with_capacity(code.len() + 64);
    match language {
        Some(lang) => write!(
            out,
            r#"<pre><code class="language-{}">{}</code></pre>"#,
            escape_html(lang),
            escape_html(code)
        )
        .unwrap(),
        None => write!(out, "<pre><code>{}</code></pre>", escape_html(code)).unwrap(),
    }
    out
}
