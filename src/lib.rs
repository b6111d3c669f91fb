//! hardyards-rs: article rendering and social previews for the HardYards news site
//!
//! Articles live in a hosted CMS. This crate fetches them over its query API,
//! renders rich-text bodies and listings to HTML, works out previous/next
//! navigation, and serves the server-rendered article route that carries
//! social-sharing meta tags.

pub mod api;
pub mod commands;
pub mod config;
pub mod content;
pub mod helpers;
pub mod pages;
pub mod server;

use anyhow::Result;
use std::path::Path;

use crate::api::ContentClient;
use crate::content::{locate, NavError};
use crate::pages::{HomeFragments, Section};

/// Number of articles fetched for the home page
const HOME_ARTICLE_LIMIT: usize = 10;

/// The main site application
#[derive(Clone, Debug)]
pub struct Site {
    /// Site configuration
    pub config: config::SiteConfig,
    /// Base directory
    pub base_dir: std::path::PathBuf,
    /// Static files directory
    pub public_dir: std::path::PathBuf,
    /// Content API client
    pub client: ContentClient,
}

impl Site {
    /// Create a new site from a directory
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        let config_path = base_dir.join("_config.yml");

        let config = if config_path.exists() {
            config::SiteConfig::load(&config_path)?
        } else {
            tracing::debug!("No _config.yml in {:?}, using defaults", base_dir);
            config::SiteConfig::default()
        };

        Self::with_config(base_dir, config)
    }

    /// Create a site from an already loaded configuration
    pub fn with_config<P: AsRef<Path>>(base_dir: P, config: config::SiteConfig) -> Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        let public_dir = base_dir.join(&config.public_dir);
        let client = ContentClient::new(&config.api)?;

        Ok(Self {
            config,
            base_dir,
            public_dir,
            client,
        })
    }

    /// Article detail fragment with previous/next navigation
    ///
    /// `target` is a decoded slug, or a title for legacy links. Returns
    /// `None` when the article does not exist.
    pub async fn article_fragment(&self, target: &str) -> api::Result<Option<String>> {
        let summaries = self.client.all_summaries().await?;

        let nav = match locate(&summaries, target) {
            Ok(nav) => nav,
            Err(NavError::NotFound(_)) => {
                tracing::info!("Article {:?} not in listing", target);
                return Ok(None);
            }
        };

        let Some(article) = self.client.article(target).await? else {
            tracing::info!("Article {:?} listed but could not be fetched", target);
            return Ok(None);
        };

        Ok(Some(pages::article_html(&article, Some(&nav), &self.config)))
    }

    /// Social preview document for `/post/<slug>`
    pub async fn share_document(
        &self,
        slug: &str,
        host: Option<&str>,
    ) -> api::Result<Option<String>> {
        let article = self.client.share_preview(slug).await?;
        Ok(article.map(|a| pages::share_page(&a, slug, &self.config, host)))
    }

    /// Home page containers
    pub async fn home(&self) -> api::Result<HomeFragments> {
        let articles = self.client.latest(HOME_ARTICLE_LIMIT).await?;
        Ok(pages::home_fragments(&articles, &self.config))
    }

    /// Section page body
    pub async fn section(
        &self,
        section: Section,
        subcategory: Option<&str>,
    ) -> api::Result<String> {
        let articles = self.client.section(section, subcategory).await?;
        tracing::debug!("{} articles in {}", articles.len(), section.title());
        Ok(pages::section_html(
            &articles,
            section,
            subcategory,
            &self.config,
        ))
    }
}
