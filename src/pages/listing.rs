//! Home page and section listings

use serde::Serialize;

use super::{cms_text, Section};
use crate::config::SiteConfig;
use crate::content::ArticleSummary;
use crate::helpers::{feed_date, full_date, image_tag, link_to, post_url};

/// Repeating number of cards per row on section pages
const ROW_PATTERN: [usize; 2] = [3, 2];

/// Group a listing into rows of 3, 2, 3, 2, ...
///
/// Each row carries the pattern size it was cut for; the last row may hold
/// fewer articles.
pub fn rows(articles: &[ArticleSummary]) -> Vec<(usize, &[ArticleSummary])> {
    let mut rows = Vec::new();
    let mut start = 0;

    for size in ROW_PATTERN.iter().copied().cycle() {
        if start >= articles.len() {
            break;
        }
        let end = (start + size).min(articles.len());
        rows.push((size, &articles[start..end]));
        start = end;
    }

    rows
}

/// Horizontal article card
pub fn card_html(article: &ArticleSummary, config: &SiteConfig) -> String {
    let title = cms_text(config, &article.title);

    let excerpt = article
        .excerpt
        .as_deref()
        .filter(|e| !e.is_empty())
        .map(|e| format!(r#"<p class="article-excerpt">{}</p>"#, cms_text(config, e)))
        .unwrap_or_default();

    format!(
        r#"<article class="article-card horizontal"><div class="article-content"><h3 class="article-title">{}</h3>{}<div class="article-date">{}</div></div><div class="article-image">{}</div></article>"#,
        title_link(article, &title, config),
        excerpt,
        byline(article, config),
        image_tag(&image_src(article, config), &title, None)
    )
}

/// Section page body
pub fn section_html(
    articles: &[ArticleSummary],
    section: Section,
    subcategory: Option<&str>,
    config: &SiteConfig,
) -> String {
    if articles.is_empty() {
        let what = match subcategory.filter(|s| !s.is_empty()) {
            Some(sub) => format!("subcategory: {}", sub),
            None => "category".to_string(),
        };
        tracing::debug!("No articles for {} ({})", section.title(), what);
        return format!(
            r#"<div class="error-message"><p>No articles found for this {}.</p>{}</div>"#,
            what,
            link_to("/", "Return to homepage", None)
        );
    }

    rows(articles)
        .into_iter()
        .map(|(size, row)| {
            let cards: String = row.iter().map(|a| card_html(a, config)).collect();
            format!(
                r#"<div class="category-row category-row-{}">{}</div>"#,
                size, cards
            )
        })
        .collect()
}

/// Contents of each home page container, keyed like the page's element ids
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct HomeFragments {
    pub featured_article: String,
    pub featured_below_articles: String,
    pub secondary_articles: String,
    pub more_articles: String,
    pub news_feed_items: String,
}

/// Build the home page containers from the most recent articles
///
/// Article 0 is featured, 1-2 sit below it, 3-5 form the latest list, 5-6
/// the "more" grid, and 0-5 the news feed.
pub fn home_fragments(articles: &[ArticleSummary], config: &SiteConfig) -> HomeFragments {
    let Some(featured) = articles.first() else {
        let empty = r#"<div class="error-message"><p>No articles found.</p></div>"#.to_string();
        return HomeFragments {
            featured_article: empty.clone(),
            secondary_articles: empty,
            ..Default::default()
        };
    };

    let cards = |range: std::ops::Range<usize>| -> String {
        slice(articles, range)
            .iter()
            .map(|a| card_html(a, config))
            .collect()
    };
    let wrap = |class: &str, inner: String| {
        if inner.is_empty() {
            String::new()
        } else {
            format!(r#"<div class="{}">{}</div>"#, class, inner)
        }
    };

    HomeFragments {
        featured_article: featured_html(featured, config),
        featured_below_articles: wrap("featured-below-articles-grid", cards(1..3)),
        secondary_articles: format!(
            r#"<div class="secondary-articles-container">{}</div>"#,
            cards(3..6)
        ),
        more_articles: wrap("secondary-articles-grid", cards(5..7)),
        news_feed_items: slice(articles, 0..6)
            .iter()
            .map(|a| feed_item_html(a, config))
            .collect(),
    }
}

fn featured_html(article: &ArticleSummary, config: &SiteConfig) -> String {
    let title = cms_text(config, &article.title);

    let excerpt = article
        .excerpt
        .as_deref()
        .filter(|e| !e.is_empty())
        .map(|e| format!(r#"<p class="featured-excerpt">{}</p>"#, cms_text(config, e)))
        .unwrap_or_default();

    format!(
        r#"<div class="featured-content"><div class="featured-text-content"><h2 class="featured-title">{}</h2>{}<div class="featured-date">{}</div></div><div class="featured-image-content">{}</div></div>"#,
        title_link(article, &title, config),
        excerpt,
        byline(article, config),
        image_tag(&image_src(article, config), &title, Some("featured-image"))
    )
}

fn feed_item_html(article: &ArticleSummary, config: &SiteConfig) -> String {
    let date = article.published().map(|d| feed_date(&d)).unwrap_or_default();
    let title = cms_text(config, &article.title);

    format!(
        r#"<div class="news-feed-item"><div class="news-feed-date">{}</div><div class="news-feed-title">{}</div></div>"#,
        date,
        title_link(article, &title, config)
    )
}

/// Title linked to the article, or plain text when it has no slug
fn title_link(article: &ArticleSummary, title: &str, config: &SiteConfig) -> String {
    match article.navigable_slug() {
        Some(slug) => link_to(&post_url(config.routing, slug), title, None),
        None => title.to_string(),
    }
}

/// "January 5, 2024 • Author"
fn byline(article: &ArticleSummary, config: &SiteConfig) -> String {
    let date = article.published().map(|d| full_date(&d)).unwrap_or_default();
    let author = article
        .author_name()
        .unwrap_or(config.default_author.as_str());
    format!("{} • {}", date, cms_text(config, author))
}

fn image_src(article: &ArticleSummary, config: &SiteConfig) -> String {
    cms_text(config, article.image_url().unwrap_or_default())
}

fn slice<T>(items: &[T], range: std::ops::Range<usize>) -> &[T] {
    let start = range.start.min(items.len());
    let end = range.end.min(items.len());
    &items[start..end]
}
