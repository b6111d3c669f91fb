//! HTML helper functions

/// Generate an anchor tag
///
/// # Examples
/// ```ignore
/// link_to("/post/grand-final", "Grand Final", None) // -> <a href="/post/grand-final">Grand Final</a>
/// ```
pub fn link_to(href: &str, text: &str, class: Option<&str>) -> String {
    match class {
        Some(class) => format!(r#"<a href="{}" class="{}">{}</a>"#, href, class, text),
        None => format!(r#"<a href="{}">{}</a>"#, href, text),
    }
}

/// Generate an image tag
///
/// # Examples
/// ```ignore
/// image_tag("https://cdn.example/x.jpg", "Crowd", Some("article-image"))
/// ```
pub fn image_tag(src: &str, alt: &str, class: Option<&str>) -> String {
    let class_attr = class
        .map(|c| format!(r#" class="{}""#, c))
        .unwrap_or_default();

    format!(r#"<img src="{}" alt="{}"{}>"#, src, alt, class_attr)
}

/// Generate a `<meta name=...>` tag; `content` must already be escaped
pub fn meta_name(name: &str, content: &str) -> String {
    format!(r#"<meta name="{}" content="{}"/>"#, name, content)
}

/// Generate a `<meta property=...>` tag; `content` must already be escaped
pub fn meta_property(property: &str, content: &str) -> String {
    format!(r#"<meta property="{}" content="{}"/>"#, property, content)
}

/// Escape HTML special characters
pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#039;")
}
