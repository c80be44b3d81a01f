//! Site profile data (`site.toml`).
//!
//! A single static aggregate holding everything the portfolio sections
//! render: personal info, about, experience, projects, skills, education,
//! and contact entries. Loaded once, read many times, never written.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::{fs, path::Path};

/// The full site profile as parsed from `site.toml`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteData {
    pub personal: Personal,
    pub about: About,
    pub experience: Vec<Experience>,
    pub projects: Vec<Project>,
    pub skills: Vec<SkillGroup>,
    pub education: Vec<Education>,
    pub contact: Vec<Contact>,
}

/// `[personal]` - name, role, and profile links.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Personal {
    pub name: String,
    pub title: String,
    pub subtitle: String,
    pub location: String,
    pub email: String,
    pub phone: String,
    pub linkedin: String,
    pub github: String,
}

/// `[about]` - summary plus highlight cards and achievement list.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct About {
    pub summary: String,
    pub highlights: Vec<Highlight>,
    pub achievements: Vec<String>,
}

/// One highlight card in the about section.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Highlight {
    pub icon: String,
    pub title: String,
    pub description: String,
}

/// `[[experience]]` - one position with bullet-point descriptions.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Experience {
    pub title: String,
    pub company: String,
    pub period: String,
    pub description: Vec<String>,
}

/// `[[projects]]` - one project card with nested metrics.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Project {
    pub number: String,
    pub title: String,
    pub company: String,
    pub description: String,
    pub metrics: Vec<Metric>,
}

/// A value/label pair displayed on a project card.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Metric {
    pub value: String,
    pub label: String,
}

/// `[[skills]]` - one skill category with its tag list.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SkillGroup {
    pub category: String,
    pub tags: Vec<String>,
}

/// `[[education]]` - one timeline entry.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Education {
    pub degree: String,
    pub school: String,
    pub period: String,
    pub details: String,
}

/// `[[contact]]` - one contact card.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Contact {
    pub icon: String,
    pub label: String,
    pub value: String,
    pub link: String,
}

impl SiteData {
    /// Parse site data from TOML string.
    pub fn from_str(content: &str) -> Result<Self> {
        toml::from_str(content).context("Failed to parse site data")
    }

    /// Load site data from file path.
    pub fn from_path(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read site data: {}", path.display()))?;
        Self::from_str(&content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// The scaffolded starter profile must always parse.
    #[test]
    fn test_starter_site_data_parses() {
        let data = SiteData::from_str(include_str!("../embed/site.toml")).unwrap();

        assert!(!data.personal.name.is_empty());
        assert!(!data.about.highlights.is_empty());
        assert!(!data.experience.is_empty());
        assert!(!data.projects.is_empty());
        assert!(data.projects.iter().all(|p| !p.metrics.is_empty()));
        assert!(!data.skills.is_empty());
        assert!(!data.education.is_empty());
        assert!(!data.contact.is_empty());
    }

    #[test]
    fn test_site_data_minimal() {
        let data = SiteData::from_str(
            r#"
            [personal]
            name = "Alice"
            title = "Engineer"
        "#,
        )
        .unwrap();

        assert_eq!(data.personal.name, "Alice");
        assert!(data.experience.is_empty());
        assert!(data.contact.is_empty());
    }

    #[test]
    fn test_site_data_nested_metrics() {
        let data = SiteData::from_str(
            r#"
            [[projects]]
            number = "01"
            title = "Anomaly Detection System"
            company = "Petrobras"
            description = "Ensemble anomaly detection for well time series."

            [[projects.metrics]]
            value = "80%+"
            label = "Detection Rate"
        "#,
        )
        .unwrap();

        assert_eq!(data.projects.len(), 1);
        assert_eq!(data.projects[0].metrics[0].value, "80%+");
    }

    #[test]
    fn test_site_data_unknown_field_rejected() {
        let result = SiteData::from_str(
            r#"
            [personal]
            nmae = "typo"
        "#,
        );
        assert!(result.is_err());
    }
}
