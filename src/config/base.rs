//! `[base]` section configuration.
//!
//! Contains basic site information like title, author, description, etc.

use super::defaults;
use educe::Educe;
use serde::{Deserialize, Serialize};

/// `[base]` section in folio.toml - basic site metadata.
///
/// # Example
/// ```toml
/// [base]
/// title = "Igor Caetano Diniz"
/// description = "Machine Learning Engineer"
/// author = "Igor Caetano Diniz"
/// url = "https://example.com"
/// ```
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct BaseConfig {
    /// Site title displayed in browser tab and headers.
    pub title: String,

    /// Author name, appended to article page titles and used in rss.
    #[serde(default = "defaults::base::author")]
    #[educe(Default = defaults::base::author())]
    pub author: String,

    /// Author email for rss feed.
    #[serde(default = "defaults::base::email")]
    #[educe(Default = defaults::base::email())]
    pub email: String,

    /// Site description for meta tags.
    pub description: String,

    /// Base URL for absolute links in the rss feed.
    /// Required when `[build.rss].enable = true`.
    #[serde(default = "defaults::base::url")]
    #[educe(Default = defaults::base::url())]
    pub url: Option<String>,

    /// BCP 47 language code (e.g., "en-US", "pt-BR").
    #[serde(default = "defaults::base::language")]
    #[educe(Default = defaults::base::language())]
    pub language: String,
}

#[cfg(test)]
mod tests {
    use super::super::SiteConfig;

    #[test]
    fn test_base_config_full() {
        let config = r#"
            [base]
            title = "Igor Caetano Diniz"
            description = "ML engineering notes"
            url = "https://example.com"
            language = "pt-BR"
            author = "Igor Caetano Diniz"
            email = "igor@example.com"
        "#;
        let config: SiteConfig = toml::from_str(config).unwrap();

        assert_eq!(config.base.title, "Igor Caetano Diniz");
        assert_eq!(config.base.description, "ML engineering notes");
        assert_eq!(config.base.url, Some("https://example.com".to_string()));
        assert_eq!(config.base.language, "pt-BR");
        assert_eq!(config.base.author, "Igor Caetano Diniz");
        assert_eq!(config.base.email, "igor@example.com");
    }

    #[test]
    fn test_base_config_defaults() {
        let config = r#"
            [base]
            title = "Test"
            description = "Test site"
        "#;
        let config: SiteConfig = toml::from_str(config).unwrap();

        assert_eq!(config.base.author, "<YOUR_NAME>");
        assert_eq!(config.base.email, "user@noreply.folio");
        assert_eq!(config.base.language, "en-US");
        assert_eq!(config.base.url, None);
    }

    #[test]
    fn test_unknown_field_rejection() {
        let config = r#"
            [base]
            title = "Test"
            description = "Test site"
            unknown_field = "should_fail"
        "#;
        let result: Result<SiteConfig, _> = toml::from_str(config);

        assert!(result.is_err());
        let err = result.unwrap_err().to_string();
        assert!(err.contains("unknown field"));
    }

    #[test]
    fn test_base_config_unicode() {
        let config = r#"
            [base]
            title = "Notas de ML 🚀"
            description = "Engenharia de dados"
            author = "René"
        "#;
        let config: SiteConfig = toml::from_str(config).unwrap();

        assert_eq!(config.base.title, "Notas de ML 🚀");
        assert_eq!(config.base.author, "René");
    }
}
