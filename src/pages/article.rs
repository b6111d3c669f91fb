//! Article detail fragment and previous/next navigation

use super::cms_text;
use crate::config::SiteConfig;
use crate::content::{render_with, ArticleSummary, FullArticle, Navigation, RenderOptions};
use crate::helpers::{image_tag, link_to, post_url, time_tag};

/// Previous/next buttons for an article
///
/// Returns an empty string when neither neighbour can be linked.
pub fn navigation_html(nav: &Navigation<'_>, config: &SiteConfig) -> String {
    let previous = nav
        .previous
        .and_then(|a| nav_button(a, config, NavDirection::Previous));
    let next = nav
        .next
        .and_then(|a| nav_button(a, config, NavDirection::Next));

    let class = match (&previous, &next) {
        (None, None) => return String::new(),
        (Some(_), None) => "article-navigation only-prev",
        (None, Some(_)) => "article-navigation only-next",
        (Some(_), Some(_)) => "article-navigation",
    };

    format!(
        r#"<div class="{}">{}{}</div>"#,
        class,
        previous.unwrap_or_default(),
        next.unwrap_or_default()
    )
}

#[derive(Clone, Copy)]
enum NavDirection {
    Previous,
    Next,
}

fn nav_button(
    article: &ArticleSummary,
    config: &SiteConfig,
    direction: NavDirection,
) -> Option<String> {
    let href = post_url(config.routing, article.navigable_slug()?);
    let title = cms_text(config, &article.title);

    let html = match direction {
        NavDirection::Previous => format!(
            r#"<a href="{}" class="nav-button prev-button"><span class="nav-arrow">←</span><div class="nav-content"><span class="nav-label">Previous Article</span><span class="nav-title">{}</span></div></a>"#,
            href, title
        ),
        NavDirection::Next => format!(
            r#"<a href="{}" class="nav-button next-button"><div class="nav-content"><span class="nav-label">Next Article</span><span class="nav-title">{}</span></div><span class="nav-arrow">→</span></a>"#,
            href, title
        ),
    };

    Some(html)
}

/// Article detail fragment
pub fn article_html(
    article: &FullArticle,
    nav: Option<&Navigation<'_>>,
    config: &SiteConfig,
) -> String {
    let title = cms_text(config, &article.title);

    let mut header = String::new();
    header.push_str(r#"<div class="back-navigation"><a href="javascript:history.back()" class="back-button">← Back to Previous Page</a></div>"#);
    header.push_str(&format!("<h1>{}</h1>", title));

    if let Some(url) = article.image_url() {
        let alt = article
            .image_alt()
            .map(|a| cms_text(config, a))
            .unwrap_or_else(|| title.clone());
        header.push_str(&image_tag(
            &cms_text(config, url),
            &alt,
            Some("article-image"),
        ));

        if config.features.photo_credit {
            if let Some(credit) = article.photo_credit.as_deref().filter(|c| !c.is_empty()) {
                header.push_str(&format!(
                    r#"<p class="photo-credit">Photo: {}</p>"#,
                    cms_text(config, credit)
                ));
            }
        }
    }

    let author = article
        .author_name()
        .unwrap_or(config.default_author.as_str());
    header.push_str(&format!(
        r#"<div class="article-meta">{}<span class="article-author">• {}</span></div>"#,
        time_tag(&cms_text(
            config,
            article.published_at.as_deref().unwrap_or_default()
        )),
        cms_text(config, author)
    ));

    let mut content = String::new();
    if let Some(excerpt) = article.excerpt.as_deref().filter(|e| !e.is_empty()) {
        content.push_str(&format!(
            r#"<p class="article-excerpt">{}</p>"#,
            cms_text(config, excerpt)
        ));
    }
    content.push_str(&render_with(
        &article.body,
        RenderOptions {
            escape_text: config.render.escape_text,
        },
    ));

    let navigation = nav
        .map(|n| navigation_html(n, config))
        .unwrap_or_default();

    format!(
        r#"<article class="article-detail"><div class="article-header">{}</div><div class="article-content">{}</div>{}</article>"#,
        header, content, navigation
    )
}

/// Fallback shown when an article cannot be found
pub fn not_found_html() -> String {
    error_html("Article not found")
}

/// Error state with a link back to the home page
pub fn error_html(message: &str) -> String {
    format!(
        r#"<div class="error-message"><p>{}</p>{}</div>"#,
        message,
        link_to("/", "Return to Homepage", Some("back-button"))
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::RoutingMode;
    use crate::content::{BlockStyle, ContentBlock, TextSpan};

    fn summary(slug: Option<&str>, title: &str) -> ArticleSummary {
        ArticleSummary::new(title, title, slug)
    }

    fn article() -> FullArticle {
        let mut article = FullArticle::default();
        article.summary = summary(Some("big-win"), "Big <Win>");
        article.summary.published_at = Some("2025-02-01T12:00:00Z".to_string());
        article.body = vec![ContentBlock::new(
            BlockStyle::Normal,
            vec![TextSpan::plain("Body text")],
        )];
        article
    }

    #[test]
    fn test_navigation_both() {
        let older = summary(Some("older one"), "Older");
        let newer = summary(Some("newer"), "Newer");
        let nav = Navigation {
            index: 1,
            previous: Some(&older),
            next: Some(&newer),
        };
        let html = navigation_html(&nav, &SiteConfig::default());
        assert!(html.starts_with(r#"<div class="article-navigation">"#));
        assert!(html.contains(r#"href="/post/older%20one" class="nav-button prev-button""#));
        assert!(html.contains(r#"href="/post/newer" class="nav-button next-button""#));
        assert!(html.find("prev-button") < html.find("next-button"));
    }

    #[test]
    fn test_navigation_single_side() {
        let older = summary(Some("older"), "Older");
        let nav = Navigation {
            index: 0,
            previous: Some(&older),
            next: None,
        };
        let mut config = SiteConfig::default();
        config.routing = RoutingMode::Hash;
        let html = navigation_html(&nav, &config);
        assert!(html.contains("article-navigation only-prev"));
        assert!(html.contains(r#"href="post.html#older""#));

        let nav = Navigation {
            index: 3,
            previous: None,
            next: Some(&older),
        };
        assert!(navigation_html(&nav, &SiteConfig::default()).contains("only-next"));
    }

    #[test]
    fn test_navigation_empty() {
        let unlinkable = summary(None, "No slug");
        let nav = Navigation {
            index: 0,
            previous: Some(&unlinkable),
            next: None,
        };
        assert_eq!(navigation_html(&nav, &SiteConfig::default()), "");
    }

    #[test]
    fn test_article_html() {
        let config = SiteConfig::default();
        let html = article_html(&article(), None, &config);

        assert!(html.starts_with(r#"<article class="article-detail">"#));
        assert!(html.contains("<h1>Big <Win></h1>"));
        assert!(html.contains(r#"<time datetime="2025-02-01T12:00:00Z">February 1, 2025</time>"#));
        assert!(html.contains("• HardYards Team"));
        assert!(html.contains("<p>Body text</p>"));
        assert!(!html.contains("article-excerpt"));
        assert!(!html.contains("article-navigation"));
        assert!(!html.contains("<img"));
    }

    #[test]
    fn test_article_html_escaped() {
        let mut config = SiteConfig::default();
        config.render.escape_text = true;
        let html = article_html(&article(), None, &config);
        assert!(html.contains("<h1>Big &lt;Win&gt;</h1>"));
    }

    #[test]
    fn test_navigation_titles_escaped() {
        let older = summary(Some("older"), "<script>x</script>");
        let nav = Navigation {
            index: 0,
            previous: Some(&older),
            next: None,
        };

        let raw = navigation_html(&nav, &SiteConfig::default());
        assert!(raw.contains(r#"<span class="nav-title"><script>x</script></span>"#));

        let mut config = SiteConfig::default();
        config.render.escape_text = true;
        let html = article_html(&article(), Some(&nav), &config);
        assert!(html.contains(
            r#"<span class="nav-title">&lt;script&gt;x&lt;/script&gt;</span>"#
        ));
        assert!(!html.contains("<script>"));
    }

    #[test]
    fn test_article_attributes_escaped() {
        let mut article = article();
        article.summary.published_at = Some(r#"2025"><b>"#.to_string());
        article.summary.main_image = Some(crate::content::MainImage {
            asset: Some(crate::content::ImageAsset {
                url: Some(r#"https://cdn.sanity.io/a.jpg?w=1&h=2"#.to_string()),
                alt_text: None,
            }),
            alt: None,
        });

        let mut config = SiteConfig::default();
        config.render.escape_text = true;
        let html = article_html(&article, None, &config);
        assert!(html.contains(r#"<time datetime="2025&quot;&gt;&lt;b&gt;"></time>"#));
        assert!(html.contains(r#"src="https://cdn.sanity.io/a.jpg?w=1&amp;h=2""#));
    }

    #[test]
    fn test_article_html_image_and_credit() {
        let mut article = article();
        article.summary.main_image = Some(crate::content::MainImage {
            asset: Some(crate::content::ImageAsset {
                url: Some("https://cdn.sanity.io/a.jpg".to_string()),
                alt_text: None,
            }),
            alt: None,
        });
        article.photo_credit = Some("Jo".to_string());
        article.summary.excerpt = Some("Short".to_string());

        let mut config = SiteConfig::default();
        let html = article_html(&article, None, &config);
        assert!(html.contains(r#"<img src="https://cdn.sanity.io/a.jpg" alt="Big <Win>" class="article-image">"#));
        assert!(html.contains(r#"<p class="article-excerpt">Short</p>"#));
        assert!(!html.contains("photo-credit"));

        config.features.photo_credit = true;
        let html = article_html(&article, None, &config);
        assert!(html.contains(r#"<p class="photo-credit">Photo: Jo</p>"#));
    }

    #[test]
    fn test_article_html_with_navigation() {
        let newer = summary(Some("newer"), "Newer");
        let nav = Navigation {
            index: 1,
            previous: None,
            next: Some(&newer),
        };
        let html = article_html(&article(), Some(&nav), &SiteConfig::default());
        assert!(html.ends_with("</div></article>"));
        assert!(html.contains("only-next"));
    }

    #[test]
    fn test_not_found_html() {
        let html = not_found_html();
        assert!(html.contains("<p>Article not found</p>"));
        assert!(html.contains(r#"<a href="/" class="back-button">Return to Homepage</a>"#));
    }
}
