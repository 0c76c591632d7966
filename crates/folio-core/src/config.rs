//! Site configuration management.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, Result};

/// Main configuration structure for folio.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Owner and SEO settings shown across the site.
    pub site: SiteSettings,

    /// Where the record collections live.
    #[serde(default)]
    pub content: ContentConfig,
}

/// Site-wide settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteSettings {
    /// Portfolio owner's display name.
    pub name: String,

    /// Short biography for the About page.
    #[serde(default)]
    pub bio: String,

    /// Contact address.
    #[serde(default)]
    pub email: String,

    #[serde(default)]
    pub social_links: SocialLinks,

    #[serde(default)]
    pub seo: SeoSettings,
}

/// Profile links; each is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialLinks {
    #[serde(default)]
    pub twitter: Option<String>,
    #[serde(default)]
    pub linkedin: Option<String>,
    #[serde(default)]
    pub github: Option<String>,
    #[serde(default)]
    pub instagram: Option<String>,
    #[serde(default)]
    pub behance: Option<String>,
    #[serde(default)]
    pub dribbble: Option<String>,
}

/// Search engine metadata.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SeoSettings {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub keywords: Vec<String>,
}

/// Content location.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContentConfig {
    /// Content root holding `case-studies/`, `projects/`, `artwork/` and
    /// `writings/`. Relative paths resolve against the config file's directory.
    #[serde(default = "default_content_root")]
    pub root: PathBuf,
}

fn default_content_root() -> PathBuf {
    PathBuf::from("content")
}

fn default_site_name() -> String {
    "Portfolio".to_string()
}

impl Default for SiteSettings {
    fn default() -> Self {
        Self {
            name: default_site_name(),
            bio: String::new(),
            email: String::new(),
            social_links: SocialLinks::default(),
            seo: SeoSettings::default(),
        }
    }
}

impl Default for ContentConfig {
    fn default() -> Self {
        Self {
            root: default_content_root(),
        }
    }
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(CoreError::config(format!(
                "Configuration file not found: {}",
                path.display()
            )));
        }

        let content = std::fs::read_to_string(path)?;
        let mut config: Config = toml::from_str(&content).map_err(|e| {
            CoreError::config_with_source(
                format!("Failed to parse config file: {}", path.display()),
                e,
            )
        })?;

        config.validate()?;

        if config.content.root.is_relative()
            && let Some(base) = path.parent()
        {
            config.content.root = base.join(&config.content.root);
        }

        Ok(config)
    }

    /// Validate the configuration.
    fn validate(&self) -> Result<()> {
        if self.site.name.trim().is_empty() {
            return Err(CoreError::config("site.name cannot be empty"));
        }

        if !self.site.email.is_empty() && !self.site.email.contains('@') {
            tracing::warn!(email = %self.site.email, "site.email does not look like an address");
        }

        Ok(())
    }

    /// The resolved content root.
    pub fn content_root(&self) -> &Path {
        &self.content.root
    }
}
