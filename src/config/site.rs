//! Site configuration (_config.yml)

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Which entry of a page's dates is shown as "the" date
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DateType {
    #[default]
    Created,
    Modified,
    Published,
}

/// Main site configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    // Site
    #[serde(alias = "pageTitle")]
    pub page_title: Option<String>,
    pub locale: String,
    #[serde(alias = "baseUrl")]
    pub base_url: Option<String>,

    // Dates
    #[serde(alias = "defaultDateType")]
    pub default_date_type: DateType,

    // Reading time
    pub words_per_minute: u32,

    // Directory
    pub source_dir: String,
    pub public_dir: String,

    // Publishing
    /// Only pages with `publish: true` in their front-matter are generated
    #[serde(alias = "explicitPublish")]
    pub explicit_publish: bool,

    // Components
    pub feedback: PartialFeedbackOptions,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            page_title: None,
            locale: "en-US".to_string(),
            base_url: None,

            default_date_type: DateType::Created,

            words_per_minute: 200,

            source_dir: "content".to_string(),
            public_dir: "public".to_string(),

            explicit_publish: true,

            feedback: PartialFeedbackOptions::default(),
        }
    }
}

impl SiteConfig {
    /// Load configuration from a file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content =
            fs::read_to_string(path).with_context(|| format!("Failed to read {:?}", path))?;
        let config: SiteConfig = serde_yaml::from_str(&content)
            .with_context(|| format!("Invalid site configuration in {:?}", path))?;
        tracing::debug!("Loaded site configuration from {:?}", path);
        Ok(config)
    }

    /// Fully populated options for the feedback link
    pub fn feedback_options(&self) -> FeedbackOptions {
        FeedbackOptions::merge(FeedbackOptions::default(), &self.feedback)
    }
}

/// Options of the email feedback component
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FeedbackOptions {
    /// Destination address of the generated mail link
    pub email: String,
}

impl Default for FeedbackOptions {
    fn default() -> Self {
        Self {
            email: "contact@example.com".to_string(),
        }
    }
}

impl FeedbackOptions {
    /// Overlay a sparse set of overrides on top of `defaults`, field by field
    pub fn merge(defaults: FeedbackOptions, overrides: &PartialFeedbackOptions) -> Self {
        Self {
            email: overrides.email.clone().unwrap_or(defaults.email),
        }
    }
}

/// Caller-supplied feedback options; every field may be left out
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PartialFeedbackOptions {
    pub email: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SiteConfig::default();
        assert_eq!(config.page_title, None);
        assert_eq!(config.locale, "en-US");
        assert_eq!(config.default_date_type, DateType::Created);
        assert_eq!(config.words_per_minute, 200);
        assert!(config.explicit_publish);
    }

    #[test]
    fn test_explicit_publish_can_be_disabled() {
        let config: SiteConfig = serde_yaml::from_str("explicit_publish: false\n").unwrap();
        assert!(!config.explicit_publish);
        let config: SiteConfig = serde_yaml::from_str("explicitPublish: false\n").unwrap();
        assert!(!config.explicit_publish);
    }

    #[test]
    fn test_parse_config() {
        let yaml = r#"
page_title: My Garden
locale: fr-FR
default_date_type: modified
feedback:
  email: me@garden.org
"#;
        let config: SiteConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.page_title.as_deref(), Some("My Garden"));
        assert_eq!(config.locale, "fr-FR");
        assert_eq!(config.default_date_type, DateType::Modified);
        assert_eq!(config.feedback_options().email, "me@garden.org");
        assert_eq!(config.source_dir, "content");
    }

    #[test]
    fn test_parse_camel_case_aliases() {
        let yaml = r#"
pageTitle: Notes
defaultDateType: published
"#;
        let config: SiteConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.page_title.as_deref(), Some("Notes"));
        assert_eq!(config.default_date_type, DateType::Published);
    }

    #[test]
    fn test_feedback_merge_keeps_default_when_omitted() {
        let merged = FeedbackOptions::merge(
            FeedbackOptions::default(),
            &PartialFeedbackOptions::default(),
        );
        assert_eq!(merged.email, "contact@example.com");
    }

    #[test]
    fn test_feedback_merge_overrides_email() {
        let overrides = PartialFeedbackOptions {
            email: Some("editor@example.org".to_string()),
        };
        let merged = FeedbackOptions::merge(FeedbackOptions::default(), &overrides);
        assert_eq!(merged.email, "editor@example.org");
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("_config.yml");
        fs::write(&path, "page_title: Loaded\n").unwrap();
        let config = SiteConfig::load(&path).unwrap();
        assert_eq!(config.page_title.as_deref(), Some("Loaded"));
    }
}
