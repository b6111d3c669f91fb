//! Content API client
//!
//! Thin async wrapper over the hosted CMS query endpoint. Queries are built in
//! [`query`]; responses are decoded from the `{ "result": ... }` envelope.

pub mod query;

use serde::de::DeserializeOwned;
use std::time::Duration;
use thiserror::Error;

use crate::config::ApiConfig;
use crate::content::{ArticleSummary, FullArticle, QueryResponse};
use crate::helpers::encode_component;
use crate::pages::Section;

/// Content API errors
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Content API error: status {0}")]
    Status(u16),

    #[error("Decode error: {0}")]
    Decode(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ApiError>;

/// Client for the content query API
#[derive(Clone)]
pub struct ContentClient {
    http: reqwest::Client,
    endpoint: String,
}

impl std::fmt::Debug for ContentClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ContentClient")
            .field("endpoint", &self.endpoint)
            .finish()
    }
}

impl ContentClient {
    /// Create a client for the configured project and dataset
    pub fn new(config: &ApiConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            endpoint: endpoint(config),
        })
    }

    /// Full request URL for a query
    pub fn query_url(&self, groq: &str) -> String {
        format!("{}?query={}", self.endpoint, encode_component(groq))
    }

    /// Run a query and decode its `result`
    pub async fn query<T: DeserializeOwned>(&self, groq: &str) -> Result<Option<T>> {
        let url = self.query_url(groq);
        tracing::debug!("Querying content API: {}", groq);

        let response = self.http.get(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            tracing::warn!("Content API returned {}", status);
            return Err(ApiError::Status(status.as_u16()));
        }

        let bytes = response.bytes().await?;
        let envelope: QueryResponse<T> = serde_json::from_slice(&bytes)?;
        Ok(envelope.result)
    }

    /// Run a list query; a missing result is an empty list
    async fn query_list(&self, groq: &str) -> Result<Vec<ArticleSummary>> {
        Ok(self
            .query::<Vec<ArticleSummary>>(groq)
            .await?
            .unwrap_or_default())
    }

    /// Every article, newest first, with navigation fields
    pub async fn all_summaries(&self) -> Result<Vec<ArticleSummary>> {
        self.query_list(&query::all_summaries()).await
    }

    /// The most recent articles for the home page
    pub async fn latest(&self, limit: usize) -> Result<Vec<ArticleSummary>> {
        self.query_list(&query::latest(limit)).await
    }

    /// Articles of a section page
    pub async fn section(
        &self,
        section: Section,
        subcategory: Option<&str>,
    ) -> Result<Vec<ArticleSummary>> {
        self.query_list(&query::section(section, subcategory)).await
    }

    /// Fetch a full article by slug, falling back to a title lookup
    pub async fn article(&self, target: &str) -> Result<Option<FullArticle>> {
        if let Some(article) = self
            .query::<FullArticle>(&query::article_by_slug(target))
            .await?
        {
            return Ok(Some(article));
        }

        tracing::debug!("No article with slug {:?}, trying title", target);
        self.query(&query::article_by_title(target)).await
    }

    /// Fetch the fields needed for an article's social preview
    pub async fn share_preview(&self, slug: &str) -> Result<Option<FullArticle>> {
        self.query(&query::share_preview(slug)).await
    }
}

/// Query endpoint for a project and dataset
fn endpoint(config: &ApiConfig) -> String {
    format!(
        "https://{}.api.sanity.io/{}/data/query/{}",
        config.project_id, config.api_version, config.dataset
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint() {
        assert_eq!(
            endpoint(&ApiConfig::default()),
            "https://cfblwn37.api.sanity.io/v2023-07-14/data/query/production"
        );
    }

    #[test]
    fn test_query_url() {
        let client = ContentClient::new(&ApiConfig::default()).unwrap();
        assert_eq!(
            client.query_url(r#"*[_type == "post"]"#),
            "https://cfblwn37.api.sanity.io/v2023-07-14/data/query/production?query=*%5B_type%20%3D%3D%20%22post%22%5D"
        );
    }

    #[test]
    fn test_error_display() {
        assert_eq!(
            ApiError::Status(503).to_string(),
            "Content API error: status 503"
        );
    }
}
