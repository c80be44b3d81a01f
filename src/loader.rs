//! Article page loading.
//!
//! Turns an article id into a rendered page fragment. Conceptually a
//! load passes through idle and loading phases, but the static build
//! has no async gap, so only the three terminal outcomes are modeled:
//! `Success`, `NotFound`, `Error`. Every failure is caught here and
//! rendered as an error view instead of propagating.

use crate::content::ContentStore;
use crate::markdown::MarkdownConverter;
use crate::render::article as views;
use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

// ============================================================================
// Collaborators
// ============================================================================

/// Where article markdown comes from. A trait so tests can stub reads.
pub trait ArticleSource: Sync {
    fn fetch(&self, path: &Path) -> Result<String>;
}

/// Default source: reads markdown files relative to the site root.
pub struct FsSource {
    root: PathBuf,
}

impl FsSource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl ArticleSource for FsSource {
    fn fetch(&self, path: &Path) -> Result<String> {
        let full = self.root.join(path);
        fs::read_to_string(&full)
            .with_context(|| format!("Failed to load article: {}", full.display()))
    }
}

// ============================================================================
// States
// ============================================================================

/// Terminal loader states. Each has exactly one rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadState {
    Success,
    NotFound,
    Error,
}

/// The result of loading one article id: a terminal state, the fragment
/// to inject into the article container, and the page title when the
/// article resolved.
pub struct LoadOutcome {
    pub state: LoadState,
    pub html: String,
    pub page_title: Option<String>,
}

// ============================================================================
// Loader
// ============================================================================

pub struct ArticleLoader<'a> {
    store: &'a ContentStore,
    source: &'a dyn ArticleSource,
    converter: &'a dyn MarkdownConverter,
    author: &'a str,
}

impl<'a> ArticleLoader<'a> {
    pub fn new(
        store: &'a ContentStore,
        source: &'a dyn ArticleSource,
        converter: &'a dyn MarkdownConverter,
        author: &'a str,
    ) -> Self {
        Self {
            store,
            source,
            converter,
            author,
        }
    }

    /// Resolve an id to its final state and rendering.
    ///
    /// Unknown ids short-circuit to `NotFound` without touching the
    /// source. Fetch or conversion failures become the `Error` view with
    /// the failure message; nothing is retried.
    pub fn load(&self, id: &str) -> LoadOutcome {
        let Some(article) = self.store.article_by_id(id) else {
            return LoadOutcome {
                state: LoadState::NotFound,
                html: views::not_found(),
                page_title: None,
            };
        };

        let body = self
            .source
            .fetch(&article.markdown_file)
            .and_then(|markdown| self.converter.convert(&markdown));

        match body {
            Ok(html) => LoadOutcome {
                state: LoadState::Success,
                html: views::detail(article, &html),
                page_title: Some(format!("{} - {}", article.title, self.author)),
            },
            Err(err) => LoadOutcome {
                state: LoadState::Error,
                html: views::load_error(&format!("{err:#}")),
                page_title: None,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::{Article, ContentStore, UNORDERED};
    use anyhow::bail;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct StubSource(&'static str);

    impl ArticleSource for StubSource {
        fn fetch(&self, _path: &Path) -> Result<String> {
            Ok(self.0.to_owned())
        }
    }

    struct FailingSource(AtomicUsize);

    impl ArticleSource for FailingSource {
        fn fetch(&self, path: &Path) -> Result<String> {
            self.0.fetch_add(1, Ordering::SeqCst);
            bail!("Failed to load article: {} (404 Not Found)", path.display())
        }
    }

    /// Converter that uppercases its input, to make the conversion step
    /// observable in assertions.
    struct UppercaseConverter;

    impl MarkdownConverter for UppercaseConverter {
        fn convert(&self, markdown: &str) -> Result<String> {
            Ok(markdown.to_uppercase())
        }
    }

    struct FailingConverter;

    impl MarkdownConverter for FailingConverter {
        fn convert(&self, _markdown: &str) -> Result<String> {
            bail!("converter unavailable")
        }
    }

    fn sample_store() -> ContentStore {
        ContentStore::from_articles(vec![Article {
            id: "domain-driven-design__01-introduction".to_owned(),
            title: "01. Introduction to Domain-Driven Desing".to_owned(),
            date: "2024-01-15".to_owned(),
            tag: "domain-driven-design".to_owned(),
            excerpt: "DDD is an approach.".to_owned(),
            markdown_file: PathBuf::from(
                "content/articles/domain-driven-design/01-introduction.md",
            ),
            image: None,
            order: 1,
        }])
    }

    #[test]
    fn test_success_renders_meta_title_and_converted_body() {
        let store = sample_store();
        let source = StubSource("it works");
        let converter = UppercaseConverter;
        let loader = ArticleLoader::new(&store, &source, &converter, "Igor Caetano Diniz");

        let outcome = loader.load("domain-driven-design__01-introduction");

        assert_eq!(outcome.state, LoadState::Success);
        assert!(outcome.html.contains("2024-01-15"));
        assert!(outcome.html.contains("domain-driven-design"));
        assert!(outcome
            .html
            .contains("01. Introduction to Domain-Driven Desing"));
        assert!(outcome.html.contains("IT WORKS"));
        assert_eq!(
            outcome.page_title.as_deref(),
            Some("01. Introduction to Domain-Driven Desing - Igor Caetano Diniz")
        );
    }

    #[test]
    fn test_fetch_failure_becomes_error_state() {
        let store = sample_store();
        let source = FailingSource(AtomicUsize::new(0));
        let converter = UppercaseConverter;
        let loader = ArticleLoader::new(&store, &source, &converter, "Author");

        let outcome = loader.load("domain-driven-design__01-introduction");

        assert_eq!(outcome.state, LoadState::Error);
        assert!(outcome.html.contains("Failed to load article"));
        assert!(outcome.page_title.is_none());
        // The article title never appears in an error rendering
        assert!(!outcome.html.contains("Domain-Driven"));
    }

    #[test]
    fn test_converter_failure_becomes_error_state() {
        let store = sample_store();
        let source = StubSource("# hi");
        let converter = FailingConverter;
        let loader = ArticleLoader::new(&store, &source, &converter, "Author");

        let outcome = loader.load("domain-driven-design__01-introduction");

        assert_eq!(outcome.state, LoadState::Error);
        assert!(outcome.html.contains("converter unavailable"));
    }

    #[test]
    fn test_unknown_id_is_not_found_without_fetch() {
        let store = sample_store();
        let source = FailingSource(AtomicUsize::new(0));
        let converter = UppercaseConverter;
        let loader = ArticleLoader::new(&store, &source, &converter, "Author");

        let outcome = loader.load("nonexistent__id");

        assert_eq!(outcome.state, LoadState::NotFound);
        assert!(outcome.html.contains("Article not found"));
        assert_eq!(source.0.load(Ordering::SeqCst), 0, "no fetch for unknown id");
    }

    #[test]
    fn test_unordered_sentinel_articles_still_load() {
        let store = ContentStore::from_articles(vec![Article {
            id: "misc__notes".to_owned(),
            title: "Notes".to_owned(),
            date: String::new(),
            tag: "misc".to_owned(),
            excerpt: String::new(),
            markdown_file: PathBuf::from("content/articles/misc/notes.md"),
            image: None,
            order: UNORDERED,
        }]);
        let source = StubSource("body");
        let converter = UppercaseConverter;
        let loader = ArticleLoader::new(&store, &source, &converter, "Author");

        let outcome = loader.load("misc__notes");
        assert_eq!(outcome.state, LoadState::Success);
    }
}
