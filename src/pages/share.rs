//! Server-rendered article document carrying social-sharing meta tags
//!
//! Crawlers do not run the client scripts, so title, description and image
//! have to be present in the initial HTML. Everything taken from the CMS is
//! escaped here.

use chrono::{Datelike, Utc};

use super::Section;
use crate::config::SiteConfig;
use crate::content::FullArticle;
use crate::helpers::{
    absolute_url, base_url, encode_component, html_escape, link_to, meta_name, meta_property,
    social_image_url,
};

/// Full HTML document for `/post/<slug>`
///
/// `slug` is the decoded slug from the request; `host` is the request's
/// `Host` header, used to build absolute URLs.
pub fn share_page(
    article: &FullArticle,
    slug: &str,
    config: &SiteConfig,
    host: Option<&str>,
) -> String {
    let base = base_url(config, host);
    let article_url = format!("{}/post/{}", base, encode_component(slug));

    let title = if article.title.is_empty() {
        html_escape(&format!("{} - Article", config.title))
    } else {
        html_escape(&article.title)
    };

    let description = article
        .excerpt
        .as_deref()
        .filter(|e| !e.is_empty())
        .or(Some(article.title.as_str()).filter(|t| !t.is_empty()))
        .unwrap_or(config.description.as_str());
    let description = html_escape(description);

    let image = article
        .image_url()
        .map(str::to_string)
        .unwrap_or_else(|| absolute_url(&base, &config.default_og_image));
    let image = html_escape(&social_image_url(&absolute_url(&base, &image), &config.og_image));

    let site_name = html_escape(&config.title);
    let width = config.og_image.width.to_string();
    let height = config.og_image.height.to_string();

    let meta = [
        meta_name("description", &description),
        meta_name("keywords", &html_escape(&config.keywords.join(", "))),
        meta_name("author", &site_name),
        meta_property("og:title", &title),
        meta_property("og:description", &description),
        meta_property("og:type", "article"),
        meta_property("og:url", &html_escape(&article_url)),
        meta_property("og:image", &image),
        meta_property("og:image:secure_url", &image),
        meta_property("og:image:type", "image/jpeg"),
        meta_property("og:image:width", &width),
        meta_property("og:image:height", &height),
        meta_property("og:site_name", &site_name),
        meta_name("twitter:card", "summary_large_image"),
        meta_name("twitter:title", &title),
        meta_name("twitter:description", &description),
        meta_name("twitter:image", &image),
        meta_name("twitter:image:alt", &title),
    ]
    .join("\n  ");

    let section_links: Vec<String> = Section::ALL
        .iter()
        .map(|s| link_to(&format!("/{}", s.slug()), &s.title().to_uppercase(), None))
        .collect();
    let footer_links: Vec<String> = std::iter::once(link_to("/", "Home", None))
        .chain(
            Section::ALL
                .iter()
                .map(|s| link_to(&format!("/{}", s.slug()), s.title(), None)),
        )
        .collect();

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8"/>
  <meta name="viewport" content="width=device-width, initial-scale=1.0"/>
  <title>{title}</title>
  {meta}
  <link rel="stylesheet" href="/css/style.css"/>
</head>
<body>
  <nav class="navbar1">
    <a href="/" class="logo-centered">{site_name}</a>
  </nav>
  <nav class="navbar navbar2">
    <div class="nav-links">{section_links}</div>
  </nav>
  <main class="container">
    <div id="article-container">Loading article...</div>
  </main>
  <footer>
    <div class="footer-links">{footer_links}</div>
    <p>&copy; {year} {site_name}. All rights reserved.</p>
  </footer>
  <script src="/js/main.js"></script>
  <script src="/js/post.js"></script>
</body>
</html>"#,
        title = title,
        meta = meta,
        site_name = site_name,
        section_links = section_links.join(""),
        footer_links = footer_links.join(""),
        year = Utc::now().year(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::{ArticleSummary, ImageAsset, MainImage};

    fn article(title: &str, excerpt: Option<&str>, image: Option<&str>) -> FullArticle {
        let mut summary = ArticleSummary::new("1", title, Some("a-b"));
        summary.excerpt = excerpt.map(str::to_string);
        summary.main_image = image.map(|url| MainImage {
            asset: Some(ImageAsset {
                url: Some(url.to_string()),
                alt_text: None,
            }),
            alt: None,
        });
        FullArticle {
            summary,
            ..Default::default()
        }
    }

    #[test]
    fn test_share_page_escapes() {
        let config = SiteConfig::default();
        let html = share_page(
            &article(r#"Win "big" <now>"#, Some("Fish & chips"), None),
            "a b",
            &config,
            Some("news.test"),
        );

        assert!(html.contains("<title>Win &quot;big&quot; &lt;now&gt;</title>"));
        assert!(html.contains(r#"<meta property="og:description" content="Fish &amp; chips"/>"#));
        assert!(html.contains(r#"<meta property="og:url" content="https://news.test/post/a%20b"/>"#));
        assert!(html.contains(
            r#"<meta property="og:image" content="https://news.test/default-og-image.jpg"/>"#
        ));
    }

    #[test]
    fn test_share_page_description_fallbacks() {
        let config = SiteConfig::default();

        let html = share_page(&article("Headline", None, None), "x", &config, None);
        assert!(html.contains(r#"<meta name="description" content="Headline"/>"#));
        assert!(html.contains(r#"content="https://hardyards.org/post/x""#));

        let html = share_page(&article("", None, None), "x", &config, None);
        assert!(html.contains("<title>HardYards - Article</title>"));
        assert!(html.contains(
            r#"<meta name="description" content="Read the latest articles and stories from HardYards."/>"#
        ));
    }

    #[test]
    fn test_share_page_cdn_image() {
        let config = SiteConfig::default();
        let html = share_page(
            &article("T", None, Some("https://cdn.sanity.io/images/p/d/img.jpg")),
            "t",
            &config,
            None,
        );
        assert!(html.contains(
            r#"<meta property="og:image" content="https://cdn.sanity.io/images/p/d/img.jpg?w=1200&amp;h=630&amp;fit=crop&amp;auto=format"/>"#
        ));
        assert!(html.contains(r#"<meta property="og:image:width" content="1200"/>"#));
    }

    #[test]
    fn test_share_page_relative_image() {
        let config = SiteConfig::default();
        let html = share_page(&article("T", None, Some("/img/x.png")), "t", &config, Some("h.test"));
        assert!(html.contains(r#"<meta name="twitter:image" content="https://h.test/img/x.png"/>"#));
    }

    #[test]
    fn test_share_page_layout() {
        let html = share_page(&article("T", None, None), "t", &SiteConfig::default(), None);
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains(r#"<a href="/sports">SPORTS</a>"#));
        assert!(html.contains(r#"<a href="/life">Life</a>"#));
        assert!(html.contains(r#"<div id="article-container">"#));
    }
}
