//! Article models as returned by the content API

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Deserializer, Serialize};

use super::block::{lenient_body, null_as_default, ContentBlock};

/// Envelope of every content API response
#[derive(Debug, Clone, Deserialize)]
pub struct QueryResponse<T> {
    pub result: Option<T>,
}

/// Article fields used for listings and navigation
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArticleSummary {
    /// Opaque content id
    #[serde(rename = "_id", default, deserialize_with = "null_as_default")]
    pub id: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,

    /// URL slug; articles from before slugs were required may lack one
    #[serde(default, deserialize_with = "deserialize_slug")]
    pub slug: Option<String>,

    /// Raw publish timestamp as stored by the CMS
    #[serde(default)]
    pub published_at: Option<String>,

    #[serde(default)]
    pub excerpt: Option<String>,

    #[serde(default)]
    pub main_image: Option<MainImage>,

    #[serde(default)]
    pub author: Option<Author>,

    #[serde(default, deserialize_with = "deserialize_references")]
    pub categories: Vec<Category>,

    #[serde(default, deserialize_with = "deserialize_references")]
    pub subcategories: Vec<Category>,
}

impl ArticleSummary {
    /// Create a summary with only the navigation fields set
    pub fn new(id: &str, title: &str, slug: Option<&str>) -> Self {
        Self {
            id: id.to_string(),
            title: title.to_string(),
            slug: slug.map(str::to_string),
            ..Default::default()
        }
    }

    /// Parsed publish date, `None` when missing or malformed
    pub fn published(&self) -> Option<DateTime<FixedOffset>> {
        self.published_at
            .as_deref()
            .and_then(|s| DateTime::parse_from_rfc3339(s).ok())
    }

    /// Slug if present and non-empty
    pub fn navigable_slug(&self) -> Option<&str> {
        self.slug.as_deref().filter(|s| !s.is_empty())
    }

    /// Author name, if any
    pub fn author_name(&self) -> Option<&str> {
        self.author
            .as_ref()
            .and_then(|a| a.name.as_deref())
            .filter(|n| !n.is_empty())
    }

    /// Image URL, if any
    pub fn image_url(&self) -> Option<&str> {
        self.main_image
            .as_ref()
            .and_then(|img| img.asset.as_ref())
            .and_then(|asset| asset.url.as_deref())
            .filter(|u| !u.is_empty())
    }

    /// Image alt text (asset alt text first, then the image's own alt)
    pub fn image_alt(&self) -> Option<&str> {
        let image = self.main_image.as_ref()?;
        image
            .asset
            .as_ref()
            .and_then(|asset| asset.alt_text.as_deref())
            .or(image.alt.as_deref())
            .filter(|a| !a.is_empty())
    }
}

/// A complete article including its body
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FullArticle {
    #[serde(flatten)]
    pub summary: ArticleSummary,

    #[serde(default, deserialize_with = "lenient_body")]
    pub body: Vec<ContentBlock>,

    #[serde(default)]
    pub photo_credit: Option<String>,
}

impl std::ops::Deref for FullArticle {
    type Target = ArticleSummary;

    fn deref(&self) -> &ArticleSummary {
        &self.summary
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MainImage {
    #[serde(default)]
    pub asset: Option<ImageAsset>,
    #[serde(default)]
    pub alt: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageAsset {
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub alt_text: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Author {
    #[serde(default)]
    pub name: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Category {
    #[serde(default)]
    pub title: Option<String>,
}

/// Slugs are stored as `{ "current": "..." }`; plain strings are accepted too
fn deserialize_slug<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum SlugShape {
        Plain(String),
        Object { current: Option<String> },
    }

    let shape = Option::<SlugShape>::deserialize(deserializer)?;
    Ok(match shape {
        Some(SlugShape::Plain(s)) => Some(s),
        Some(SlugShape::Object { current }) => current,
        None => None,
    })
}

/// Dereferenced lists hold `null` for references to deleted documents
fn deserialize_references<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    let items = Option::<Vec<Option<T>>>::deserialize(deserializer)?;
    Ok(items.into_iter().flatten().flatten().collect())
}
