//! Site configuration (_config.yml)

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Main site configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    // Site
    pub title: String,
    pub description: String,
    pub keywords: Vec<String>,
    pub default_author: String,

    // URL
    pub url: String,
    pub default_og_image: String,
    pub routing: RoutingMode,

    // Directory
    pub public_dir: String,

    // Content API
    #[serde(default)]
    pub api: ApiConfig,

    // Rendering
    #[serde(default)]
    pub features: FeaturesConfig,
    #[serde(default)]
    pub render: RenderConfig,
    #[serde(default)]
    pub og_image: OgImageConfig,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: "HardYards".to_string(),
            description: "Read the latest articles and stories from HardYards.".to_string(),
            keywords: vec![
                "HardYards articles".to_string(),
                "news stories".to_string(),
                "sports coverage".to_string(),
                "urban stories".to_string(),
                "rural news".to_string(),
                "lifestyle articles".to_string(),
            ],
            default_author: "HardYards Team".to_string(),

            url: "https://hardyards.org".to_string(),
            default_og_image: "/default-og-image.jpg".to_string(),
            routing: RoutingMode::Path,

            public_dir: "public".to_string(),

            api: ApiConfig::default(),

            features: FeaturesConfig::default(),
            render: RenderConfig::default(),
            og_image: OgImageConfig::default(),
        }
    }
}

impl SiteConfig {
    /// Load configuration from a file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        let config: SiteConfig = serde_yaml::from_str(&content)?;
        Ok(config)
    }
}

/// How article links are built
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoutingMode {
    /// `/post/<slug>`
    #[default]
    Path,
    /// `post.html#<slug>`
    Hash,
}

/// Hosted content API configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    pub project_id: String,
    pub dataset: String,
    pub api_version: String,
    pub timeout_secs: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            project_id: "cfblwn37".to_string(),
            dataset: "production".to_string(),
            api_version: "v2023-07-14".to_string(),
            timeout_secs: 10,
        }
    }
}

/// Optional page features
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FeaturesConfig {
    /// Show the photo credit line under the article image
    pub photo_credit: bool,
}

/// Rich-text rendering options
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// HTML-escape body span text
    pub escape_text: bool,
}

/// Social preview image size
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OgImageConfig {
    pub width: u32,
    pub height: u32,
}

impl Default for OgImageConfig {
    fn default() -> Self {
        Self {
            width: 1200,
            height: 630,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SiteConfig::default();
        assert_eq!(config.title, "HardYards");
        assert_eq!(config.routing, RoutingMode::Path);
        assert_eq!(config.api.dataset, "production");
        assert_eq!(config.og_image.width, 1200);
        assert!(!config.render.escape_text);
    }

    #[test]
    fn test_parse_config() {
        let yaml = r#"
title: My Paper
routing: hash
api:
  project_id: abc123
features:
  photo_credit: true
render:
  escape_text: true
"#;
        let config: SiteConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.title, "My Paper");
        assert_eq!(config.routing, RoutingMode::Hash);
        assert_eq!(config.api.project_id, "abc123");
        assert_eq!(config.api.dataset, "production");
        assert!(config.features.photo_credit);
        assert!(config.render.escape_text);
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("_config.yml");
        fs::write(&path, "url: https://example.com\n").unwrap();

        let config = SiteConfig::load(&path).unwrap();
        assert_eq!(config.url, "https://example.com");
        assert_eq!(config.default_author, "HardYards Team");
    }
}
