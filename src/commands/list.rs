//! List articles from the content API

use anyhow::Result;

use crate::content::ArticleSummary;
use crate::pages::Section;
use crate::Site;

/// List articles, optionally limited to a section and subcategory
pub async fn run(
    site: &Site,
    section: Option<&str>,
    subcategory: Option<&str>,
    limit: Option<usize>,
) -> Result<()> {
    let articles = match section {
        Some(name) => {
            let Some(section) = Section::from_path(name) else {
                anyhow::bail!(
                    "Unknown section: {}. Available: sports, urban, rural, life",
                    name
                );
            };
            site.client.section(section, subcategory).await?
        }
        None => match limit {
            Some(limit) => site.client.latest(limit).await?,
            None => site.client.all_summaries().await?,
        },
    };

    let shown = limit.unwrap_or(articles.len()).min(articles.len());
    println!("Articles ({}):", shown);
    for article in &articles[..shown] {
        println!("  {}", summary_line(article));
    }

    Ok(())
}

/// "2024-01-15 - Title [slug]"
fn summary_line(article: &ArticleSummary) -> String {
    let date = article
        .published()
        .map(|d| d.format("%Y-%m-%d").to_string())
        .unwrap_or_else(|| "----------".to_string());
    let slug = article.slug.as_deref().unwrap_or("no slug");
    format!("{} - {} [{}]", date, article.title, slug)
}
