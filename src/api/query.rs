//! GROQ query builders for the content API

use crate::pages::Section;

/// Fields shown on article cards
const LISTING_FIELDS: &str = "_id, title, slug, publishedAt, mainImage { asset->{url}, alt }, \
     categories[]-> { title }, subcategories[]-> { title }, excerpt, author->{name}";

/// Fields of the article detail page
const ARTICLE_FIELDS: &str = "_id, title, slug, mainImage{asset->{url, altText}}, publishedAt, \
     categories[]->{title}, excerpt, body, photoCredit, author->{name}";

/// Fields of the social preview page
const PREVIEW_FIELDS: &str =
    "_id, title, slug, mainImage{asset->{url, altText}}, excerpt, publishedAt, author->{name}";

/// Escape a value embedded in a double-quoted GROQ string literal
pub fn escape_literal(value: &str) -> String {
    value.replace('\\', "\\\\").replace('"', "\\\"")
}

/// Every post, newest first, with navigation fields only
pub fn all_summaries() -> String {
    r#"*[_type == "post"] | order(publishedAt desc) { _id, title, slug, publishedAt }"#.to_string()
}

/// The `limit` most recent posts
pub fn latest(limit: usize) -> String {
    format!(
        r#"*[_type == "post"] | order(publishedAt desc)[0...{}] {{ {} }}"#,
        limit, LISTING_FIELDS
    )
}

/// A single full article by slug
pub fn article_by_slug(slug: &str) -> String {
    format!(
        r#"*[_type == "post" && slug.current == "{}"][0]{{ {} }}"#,
        escape_literal(slug),
        ARTICLE_FIELDS
    )
}

/// A single full article by title (legacy links without slugs)
pub fn article_by_title(title: &str) -> String {
    format!(
        r#"*[_type == "post" && title == "{}"][0]{{ {} }}"#,
        escape_literal(title),
        ARTICLE_FIELDS
    )
}

/// Fields needed for the social preview of one article
pub fn share_preview(slug: &str) -> String {
    format!(
        r#"*[_type == "post" && slug.current == "{}"][0]{{ {} }}"#,
        escape_literal(slug),
        PREVIEW_FIELDS
    )
}

/// Posts of one section, optionally narrowed to a subcategory
///
/// Only Sports has subcategories; `subcategory` is ignored elsewhere.
pub fn section(section: Section, subcategory: Option<&str>) -> String {
    let mut filter = format!(
        r#""{}" in categories[]->title"#,
        escape_literal(section.title())
    );

    if let (Section::Sports, Some(sub)) = (section, subcategory.filter(|s| !s.is_empty())) {
        filter.push_str(&format!(
            r#" && "{}" in subcategories[]->title"#,
            escape_literal(sub)
        ));
    }

    format!(
        r#"*[_type == "post" && {}] | order(publishedAt desc) {{ {} }}"#,
        filter, LISTING_FIELDS
    )
}
