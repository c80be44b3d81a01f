//! `[build]` section configuration.
//!
//! Contains build paths and output options.

use super::defaults;
use educe::Educe;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// `[build]` section in folio.toml - build paths and options.
///
/// # Example
/// ```toml
/// [build]
/// content = "content"
/// output = "public"
/// minify = true
///
/// [build.rss]
/// enable = true
/// ```
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct BuildConfig {
    /// Project root directory. Set from CLI, not from the config file.
    #[serde(skip)]
    #[educe(Default = defaults::build::root())]
    pub root: Option<PathBuf>,

    /// Content directory (markdown articles live below it).
    #[serde(default = "defaults::build::content")]
    #[educe(Default = defaults::build::content())]
    pub content: PathBuf,

    /// Output directory for the generated site.
    #[serde(default = "defaults::build::output")]
    #[educe(Default = defaults::build::output())]
    pub output: PathBuf,

    /// Static assets directory, copied verbatim into the output.
    #[serde(default = "defaults::build::assets")]
    #[educe(Default = defaults::build::assets())]
    pub assets: PathBuf,

    /// Articles directory, relative to `content`.
    #[serde(default = "defaults::build::articles")]
    #[educe(Default = defaults::build::articles())]
    pub articles: PathBuf,

    /// Site profile file (personal info, experience, projects, ...).
    #[serde(default = "defaults::build::site_data")]
    #[educe(Default = defaults::build::site_data())]
    pub site_data: PathBuf,

    /// Directory under the output for generated data files
    /// (e.g. `data/articles.json`).
    #[serde(default = "defaults::build::data")]
    #[educe(Default = defaults::build::data())]
    pub data: PathBuf,

    /// Minify generated HTML/XML.
    #[serde(default = "defaults::r#false")]
    #[educe(Default = false)]
    pub minify: bool,

    /// Clear the output directory completely before building.
    #[serde(default = "defaults::r#false")]
    #[educe(Default = false)]
    pub clean: bool,

    /// rss feed generation settings.
    #[serde(default)]
    pub rss: RssConfig,
}

/// `[build.rss]` subsection.
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct RssConfig {
    /// Enable rss feed generation.
    #[serde(default = "defaults::r#false")]
    #[educe(Default = false)]
    pub enable: bool,

    /// Feed path relative to the output directory.
    #[serde(default = "defaults::build::rss::path")]
    #[educe(Default = defaults::build::rss::path())]
    pub path: PathBuf,
}

impl BuildConfig {
    /// Absolute path of the articles directory (`content/articles`).
    pub fn articles_dir(&self) -> PathBuf {
        self.content.join(&self.articles)
    }
}

#[cfg(test)]
mod tests {
    use super::super::SiteConfig;
    use std::path::PathBuf;

    #[test]
    fn test_build_config_defaults() {
        let config = r#"
            [base]
            title = "Test"
            description = "Test site"
        "#;
        let config: SiteConfig = toml::from_str(config).unwrap();

        assert_eq!(config.build.content, PathBuf::from("content"));
        assert_eq!(config.build.output, PathBuf::from("public"));
        assert_eq!(config.build.assets, PathBuf::from("assets"));
        assert_eq!(config.build.articles, PathBuf::from("articles"));
        assert_eq!(config.build.site_data, PathBuf::from("site.toml"));
        assert!(!config.build.minify);
        assert!(!config.build.clean);
        assert!(!config.build.rss.enable);
        assert_eq!(config.build.rss.path, PathBuf::from("feed.xml"));
    }

    #[test]
    fn test_build_config_overrides() {
        let config = r#"
            [base]
            title = "Test"
            description = "Test site"

            [build]
            content = "src-content"
            output = "dist"
            minify = true

            [build.rss]
            enable = true
            path = "rss.xml"
        "#;
        let config: SiteConfig = toml::from_str(config).unwrap();

        assert_eq!(config.build.content, PathBuf::from("src-content"));
        assert_eq!(config.build.output, PathBuf::from("dist"));
        assert!(config.build.minify);
        assert!(config.build.rss.enable);
        assert_eq!(config.build.rss.path, PathBuf::from("rss.xml"));
    }

    #[test]
    fn test_articles_dir_joined_under_content() {
        let config = r#"
            [base]
            title = "Test"
            description = "Test site"
        "#;
        let config: SiteConfig = toml::from_str(config).unwrap();

        assert_eq!(
            config.build.articles_dir(),
            PathBuf::from("content/articles")
        );
    }

    #[test]
    fn test_unknown_field_rejection() {
        let config = r#"
            [base]
            title = "Test"
            description = "Test site"

            [build]
            typo_field = true
        "#;
        let result: Result<SiteConfig, _> = toml::from_str(config);

        assert!(result.is_err());
    }
}
