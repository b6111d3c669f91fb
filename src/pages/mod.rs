//! Page assembly - HTML fragments and documents built from API content

mod article;
mod listing;
mod share;

pub use article::{article_html, error_html, navigation_html, not_found_html};
pub use listing::{card_html, home_fragments, rows, section_html, HomeFragments};
pub use share::share_page;

use serde::Serialize;

use crate::config::SiteConfig;
use crate::helpers::html_escape;

/// Top-level category page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Section {
    Sports,
    Urban,
    Rural,
    Life,
}

impl Section {
    /// All sections in navigation order
    pub const ALL: [Section; 4] = [Section::Sports, Section::Urban, Section::Rural, Section::Life];

    /// Resolve a section from a page path like `/sports` or `sports.html`
    pub fn from_path(path: &str) -> Option<Self> {
        let name = path
            .trim_matches('/')
            .rsplit('/')
            .next()
            .unwrap_or_default()
            .trim_end_matches(".html");

        Section::ALL
            .into_iter()
            .find(|s| s.slug().eq_ignore_ascii_case(name))
    }

    /// Category title as stored in the CMS
    pub fn title(&self) -> &'static str {
        match self {
            Section::Sports => "Sports",
            Section::Urban => "Urban",
            Section::Rural => "Rural",
            Section::Life => "Life",
        }
    }

    /// Path segment of the section page
    pub fn slug(&self) -> &'static str {
        match self {
            Section::Sports => "sports",
            Section::Urban => "urban",
            Section::Rural => "rural",
            Section::Life => "life",
        }
    }
}

/// Escape CMS text when the site is configured to
pub(crate) fn cms_text(config: &SiteConfig, text: &str) -> String {
    if config.render.escape_text {
        html_escape(text)
    } else {
        text.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_section_from_path() {
        assert_eq!(Section::from_path("/sports"), Some(Section::Sports));
        assert_eq!(Section::from_path("sports.html"), Some(Section::Sports));
        assert_eq!(Section::from_path("/site/rural.html"), Some(Section::Rural));
        assert_eq!(Section::from_path("LIFE"), Some(Section::Life));
        assert_eq!(Section::from_path("/post"), None);
        assert_eq!(Section::from_path(""), None);
    }

    #[test]
    fn test_cms_text() {
        let mut config = SiteConfig::default();
        assert_eq!(cms_text(&config, "<b>"), "<b>");
        config.render.escape_text = true;
        assert_eq!(cms_text(&config, "<b>"), "&lt;b&gt;");
    }
}
