//! Site building orchestration.
//!
//! # Architecture
//!
//! ```text
//! build_site()
//!     │
//!     ├── load site.toml ──► SiteData
//!     ├── scan articles  ──► ContentStore
//!     │
//!     ├── render index + blog listing
//!     ├── render article pages (parallel)
//!     │       └── a failing article renders its error page,
//!     │           the rest of the build continues
//!     │
//!     ├── write data/articles.json
//!     └── copy assets
//! ```

use crate::{
    config::SiteConfig,
    content::{ContentStore, SiteData},
    loader::{ArticleLoader, FsSource},
    log,
    markdown::CmarkConverter,
    render::{blog, page, sections},
    utils::minify::{MinifyType, minify},
};
use anyhow::{Context, Result};
use rayon::prelude::*;
use std::{fs, path::Path};
use walkdir::WalkDir;

/// Build the entire site into the output directory.
///
/// Returns the article store so feed generation can reuse it. If
/// `config.build.clean` is true, clears the output directory first.
pub fn build_site(config: &SiteConfig) -> Result<ContentStore> {
    let output = &config.build.output;
    prepare_output(output, config.build.clean)?;

    let site_data = SiteData::from_path(&config.build.site_data)?;
    let store = ContentStore::scan(&config.build.articles_dir(), config.get_root())?;
    log!("build"; "found {} articles", store.len());

    write_index(config, &site_data, output)?;
    write_blog(config, &store, output)?;
    write_article_pages(config, &store, output)?;
    write_articles_json(config, &store, output)?;
    copy_assets(config, output)?;

    log!("build"; "done");
    Ok(store)
}

/// Ensure the output directory exists, clearing it first when asked.
fn prepare_output(output: &Path, clean: bool) -> Result<()> {
    if clean && output.exists() {
        fs::remove_dir_all(output)
            .with_context(|| format!("Failed to clear output directory: {}", output.display()))?;
    }
    fs::create_dir_all(output)
        .with_context(|| format!("Failed to create output directory: {}", output.display()))?;
    Ok(())
}

/// Render the portfolio homepage: every section injected into its
/// container.
fn write_index(config: &SiteConfig, data: &SiteData, output: &Path) -> Result<()> {
    let mut html = page::with_title(page::INDEX_SHELL, &config.base.title);
    for (container, fragment) in [
        ("heroSection", sections::hero(data)),
        ("aboutSection", sections::about(data)),
        ("experienceSection", sections::experience(data)),
        ("projectsSection", sections::projects(data)),
        ("skillsSection", sections::skills(data)),
        ("educationSection", sections::education(data)),
        ("contactSection", sections::contact(data)),
    ] {
        html = page::inject(&html, container, &fragment);
    }

    write_page(&output.join("index.html"), &html, config)?;
    log!("build"; "index.html");
    Ok(())
}

/// Render the blog listing page.
fn write_blog(config: &SiteConfig, store: &ContentStore, output: &Path) -> Result<()> {
    let title = format!("Blog - {}", config.base.title);
    let html = page::inject(
        &page::with_title(page::BLOG_SHELL, &title),
        "articlesGrid",
        &blog::article_grid(store.articles()),
    );

    write_page(&output.join("blog").join("index.html"), &html, config)?;
    log!("build"; "blog/index.html");
    Ok(())
}

/// Render one page per article, in parallel, plus the 404 page.
///
/// An article whose markdown fails to read or convert gets its error
/// page written; only filesystem failures abort the build.
fn write_article_pages(config: &SiteConfig, store: &ContentStore, output: &Path) -> Result<()> {
    let source = FsSource::new(config.get_root());
    let converter = CmarkConverter;
    let loader = ArticleLoader::new(store, &source, &converter, &config.base.author);

    store.articles().par_iter().try_for_each(|article| {
        let outcome = loader.load(&article.id);
        let title = outcome
            .page_title
            .unwrap_or_else(|| config.base.title.clone());
        let html = page::inject(
            &page::with_title(page::ARTICLE_SHELL, &title),
            "articleWrapper",
            &outcome.html,
        );

        let path = output.join("blog").join(&article.id).join("index.html");
        write_page(&path, &html, config)?;
        log!("build"; "blog/{}/index.html", article.id);
        Ok::<(), anyhow::Error>(())
    })?;

    // Not-found page, served for unknown article ids
    let html = page::inject(
        &page::with_title(page::ARTICLE_SHELL, &config.base.title),
        "articleWrapper",
        &crate::render::article::not_found(),
    );
    write_page(&output.join("404.html"), &html, config)
}

/// Emit the article index as JSON for external consumers.
fn write_articles_json(config: &SiteConfig, store: &ContentStore, output: &Path) -> Result<()> {
    let dir = output.join(&config.build.data);
    fs::create_dir_all(&dir)?;
    fs::write(dir.join("articles.json"), store.to_json())?;
    Ok(())
}

/// Copy the assets directory into the output, preserving layout.
fn copy_assets(config: &SiteConfig, output: &Path) -> Result<()> {
    let assets = &config.build.assets;
    if !assets.exists() {
        return Ok(());
    }

    let dest_root = output.join("assets");
    let mut count = 0usize;
    for entry in WalkDir::new(assets).into_iter().filter_map(Result::ok) {
        if !entry.file_type().is_file() {
            continue;
        }
        let rel = entry
            .path()
            .strip_prefix(assets)
            .context("asset path outside assets directory")?;
        let dest = dest_root.join(rel);
        if let Some(parent) = dest.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::copy(entry.path(), &dest)
            .with_context(|| format!("Failed to copy asset: {}", entry.path().display()))?;
        count += 1;
    }

    if count > 0 {
        log!("build"; "copied {count} assets");
    }
    Ok(())
}

/// Write a rendered page, minified when enabled.
fn write_page(path: &Path, html: &str, config: &SiteConfig) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let bytes = minify(MinifyType::Html(html.as_bytes()), config);
    fs::write(path, &*bytes).with_context(|| format!("Failed to write {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn site_fixture() -> (TempDir, SiteConfig) {
        let dir = TempDir::new().unwrap();
        let root = dir.path();

        fs::create_dir_all(root.join("content/articles/rust")).unwrap();
        fs::write(
            root.join("content/articles/rust/01-ownership.md"),
            "# 01. Ownership\n\nMoves and borrows.\n",
        )
        .unwrap();
        fs::write(root.join("site.toml"), include_str!("embed/site.toml")).unwrap();

        let mut config = SiteConfig::default();
        config.base.title = "Test Site".into();
        config.set_root(root);
        config.build.content = root.join("content");
        config.build.output = root.join("public");
        config.build.assets = root.join("assets");
        config.build.site_data = root.join("site.toml");

        (dir, config)
    }

    #[test]
    fn test_build_site_writes_all_pages() {
        let (_dir, config) = site_fixture();
        let store = build_site(&config).unwrap();

        assert_eq!(store.len(), 1);
        let output = &config.build.output;
        assert!(output.join("index.html").exists());
        assert!(output.join("blog/index.html").exists());
        assert!(output.join("blog/rust__01-ownership/index.html").exists());
        assert!(output.join("404.html").exists());
        assert!(output.join("data/articles.json").exists());
    }

    #[test]
    fn test_article_page_contains_converted_body() {
        let (_dir, config) = site_fixture();
        build_site(&config).unwrap();

        let html = fs::read_to_string(
            config
                .build
                .output
                .join("blog/rust__01-ownership/index.html"),
        )
        .unwrap();
        assert!(html.contains("01. Ownership"));
        assert!(html.contains("Moves and borrows."));
    }

    #[test]
    fn test_unreadable_article_gets_error_page() {
        let (_dir, config) = site_fixture();
        // Scan the store, then delete the markdown before pages render
        let store = ContentStore::scan(&config.build.articles_dir(), config.get_root()).unwrap();
        fs::remove_file(
            config
                .get_root()
                .join("content/articles/rust/01-ownership.md"),
        )
        .unwrap();

        prepare_output(&config.build.output, false).unwrap();
        write_article_pages(&config, &store, &config.build.output).unwrap();

        let html = fs::read_to_string(
            config
                .build
                .output
                .join("blog/rust__01-ownership/index.html"),
        )
        .unwrap();
        assert!(html.contains("Failed to load article"));
    }

    #[test]
    fn test_clean_removes_stale_files() {
        let (_dir, mut config) = site_fixture();
        fs::create_dir_all(&config.build.output).unwrap();
        fs::write(config.build.output.join("stale.html"), "old").unwrap();

        config.build.clean = true;
        build_site(&config).unwrap();

        assert!(!config.build.output.join("stale.html").exists());
        assert!(config.build.output.join("index.html").exists());
    }

    #[test]
    fn test_assets_copied_into_output() {
        let (_dir, config) = site_fixture();
        fs::create_dir_all(config.build.assets.join("styles")).unwrap();
        fs::write(config.build.assets.join("styles/main.css"), "body{}").unwrap();

        build_site(&config).unwrap();

        assert!(config
            .build
            .output
            .join("assets/styles/main.css")
            .exists());
    }
}
