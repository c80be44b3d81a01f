//! rss feed generation.
//!
//! Turns the article store into an rss feed at `build.rss.path`.

use crate::{
    config::SiteConfig,
    content::{Article, ContentStore},
    log,
    utils::{
        date,
        minify::{MinifyType, minify},
    },
};
use anyhow::{Result, anyhow};
use regex::Regex;
use rss::{ChannelBuilder, GuidBuilder, ItemBuilder, validation::Validate};
use std::{fs, sync::LazyLock};

// ============================================================================
// Public API
// ============================================================================

/// Build rss feed if enabled in config.
pub fn build_rss(config: &SiteConfig, store: &ContentStore) -> Result<()> {
    if config.build.rss.enable {
        RssFeed::new(config, store).write(config)?;
    }
    Ok(())
}

// ============================================================================
// RssFeed Implementation
// ============================================================================

/// rss feed builder
struct RssFeed<'a> {
    config: &'a SiteConfig,
    store: &'a ContentStore,
}

impl<'a> RssFeed<'a> {
    fn new(config: &'a SiteConfig, store: &'a ContentStore) -> Self {
        Self { config, store }
    }

    /// Generate rss xml string
    fn into_xml(self) -> Result<String> {
        let items: Vec<_> = self
            .store
            .articles()
            .iter()
            .map(|article| article_to_rss_item(article, self.config))
            .collect();

        let channel = ChannelBuilder::default()
            .title(&self.config.base.title)
            .link(self.config.base.url.as_deref().unwrap_or_default())
            .description(&self.config.base.description)
            .language(self.config.base.language.clone())
            .generator("folio".to_string())
            .items(items)
            .build();

        channel
            .validate()
            .map_err(|e| anyhow!("rss validation failed: {e}"))?;
        Ok(channel.to_string())
    }

    /// Write rss feed to file
    fn write(self, config: &SiteConfig) -> Result<()> {
        let xml = self.into_xml()?;
        let xml = minify(MinifyType::Xml(xml.as_bytes()), config);
        let rss_path = config.build.output.join(&config.build.rss.path);

        if let Some(parent) = rss_path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&rss_path, &*xml)?;

        log!("rss"; "{}", rss_path.file_name().unwrap_or_default().to_string_lossy());
        Ok(())
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

/// Convert an article to an rss item.
///
/// Articles without a parseable date are still included, just without a
/// pub_date.
fn article_to_rss_item(article: &Article, config: &SiteConfig) -> rss::Item {
    let link = format!(
        "{}/blog/{}/",
        config.base.url.as_deref().unwrap_or_default().trim_end_matches('/'),
        urlencoding::encode(&article.id),
    );

    ItemBuilder::default()
        .title(Some(article.title.clone()))
        .link(Some(link.clone()))
        .guid(GuidBuilder::default().permalink(true).value(link).build())
        .description(Some(article.excerpt.clone()))
        .pub_date(date::to_rfc2822(&article.date))
        .author(normalize_rss_author(config))
        .build()
}

/// Normalize the site author to rss format: "email@example.com (Name)"
///
/// Uses `base.author` directly when it already has that shape, otherwise
/// combines `base.email` and `base.author`.
fn normalize_rss_author(config: &SiteConfig) -> Option<String> {
    static RE_VALID_AUTHOR: LazyLock<Regex> = LazyLock::new(|| {
        Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}[ \t]*\([^)]+\)$").unwrap()
    });

    let site_author = &config.base.author;
    if RE_VALID_AUTHOR.is_match(site_author) {
        return Some(site_author.clone());
    }

    Some(format!("{} ({})", config.base.email, site_author))
}
