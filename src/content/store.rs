//! The article content store.
//!
//! Scans the articles directory once at build start and exposes pure
//! lookups over the resulting records. The store is never written after
//! load; absence is an `Option`, not an error.

use super::article::Article;
use anyhow::{Context, Result};
use std::path::Path;
use walkdir::WalkDir;

/// Static, read-only collection of [`Article`] records.
///
/// Articles are held in display order: grouped by tag, then by `order`
/// key, then by title, all case-insensitive.
#[derive(Debug, Default)]
pub struct ContentStore {
    articles: Vec<Article>,
}

impl ContentStore {
    /// Build a store from pre-made records (sorted on the way in).
    pub fn from_articles(mut articles: Vec<Article>) -> Self {
        articles.sort_by(|a, b| {
            a.tag
                .to_lowercase()
                .cmp(&b.tag.to_lowercase())
                .then_with(|| a.order.cmp(&b.order))
                .then_with(|| a.title.to_lowercase().cmp(&b.title.to_lowercase()))
        });
        Self { articles }
    }

    /// Scan `articles_dir` for markdown files and extract metadata.
    ///
    /// - files named `_*.md` are skipped
    /// - the tag is the parent directory name
    /// - `markdown_file` paths are stored relative to `site_root`
    pub fn scan(articles_dir: &Path, site_root: &Path) -> Result<Self> {
        let mut articles = Vec::new();

        for entry in WalkDir::new(articles_dir)
            .sort_by_file_name()
            .into_iter()
            .filter_map(Result::ok)
            .filter(|e| e.file_type().is_file())
        {
            let path = entry.path();
            if path.extension().is_none_or(|ext| ext != "md") {
                continue;
            }

            let stem = match path.file_stem().and_then(|s| s.to_str()) {
                Some(stem) if !stem.starts_with('_') => stem,
                _ => continue,
            };
            let tag = path
                .parent()
                .and_then(|p| p.file_name())
                .and_then(|n| n.to_str())
                .unwrap_or_default();

            let text = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read {}", path.display()))?;
            let rel = path.strip_prefix(site_root).unwrap_or(path).to_path_buf();

            articles.push(Article::from_markdown(&text, stem, tag, rel));
        }

        Ok(Self::from_articles(articles))
    }

    /// All articles in display order.
    pub fn articles(&self) -> &[Article] {
        &self.articles
    }

    /// Look up a single article by its unique id.
    pub fn article_by_id(&self, id: &str) -> Option<&Article> {
        self.articles.iter().find(|a| a.id == id)
    }

    /// All articles with the given tag, order preserved.
    pub fn articles_by_tag(&self, tag: &str) -> Vec<&Article> {
        self.articles.iter().filter(|a| a.tag == tag).collect()
    }

    /// Serialize the article index as pretty JSON.
    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(&self.articles).unwrap_or_else(|_| "[]".to_string())
    }

    pub fn is_empty(&self) -> bool {
        self.articles.is_empty()
    }

    pub fn len(&self) -> usize {
        self.articles.len()
    }
}
