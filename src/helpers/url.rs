//! URL helper functions

use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use url::Url;

use crate::config::{OgImageConfig, RoutingMode, SiteConfig};

/// Characters left alone by `encodeURIComponent`
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Host serving transformable CMS images
const IMAGE_CDN_HOST: &str = "cdn.sanity.io";

/// Percent-encode a single URL component (slug, query value)
pub fn encode_component(s: &str) -> String {
    utf8_percent_encode(s, COMPONENT).to_string()
}

/// Percent-decode a URL component; invalid UTF-8 is replaced
pub fn decode_component(s: &str) -> String {
    percent_decode_str(s).decode_utf8_lossy().into_owned()
}

/// Link to an article page
///
/// # Examples
/// ```ignore
/// post_url(RoutingMode::Path, "grand final") // -> "/post/grand%20final"
/// post_url(RoutingMode::Hash, "grand final") // -> "post.html#grand%20final"
/// ```
pub fn post_url(routing: RoutingMode, slug: &str) -> String {
    match routing {
        RoutingMode::Path => format!("/post/{}", encode_component(slug)),
        RoutingMode::Hash => format!("post.html#{}", encode_component(slug)),
    }
}

/// Base URL for absolute links, preferring the request host
pub fn base_url(config: &SiteConfig, host: Option<&str>) -> String {
    match host.filter(|h| !h.is_empty()) {
        Some(host) => format!("https://{}", host),
        None => config.url.trim_end_matches('/').to_string(),
    }
}

/// Make `path` absolute against `base` unless it already is
pub fn absolute_url(base: &str, path: &str) -> String {
    if path.starts_with("http://") || path.starts_with("https://") {
        path.to_string()
    } else if path.starts_with('/') {
        format!("{}{}", base.trim_end_matches('/'), path)
    } else {
        format!("{}/{}", base.trim_end_matches('/'), path)
    }
}

/// Size a CDN image for social previews
///
/// Images on the CMS CDN get `w`, `h`, `fit=crop` and `auto=format` unless
/// they already carry both a width and a height. Other URLs pass through.
pub fn social_image_url(image: &str, size: &OgImageConfig) -> String {
    if !image.contains(IMAGE_CDN_HOST) {
        return image.to_string();
    }

    let mut url = match Url::parse(image) {
        Ok(url) => url,
        Err(e) => {
            tracing::debug!("Leaving unparseable image URL {:?} as is: {}", image, e);
            return image.to_string();
        }
    };

    let has = |key: &str| url.query_pairs().any(|(k, _)| k == key);
    if has("w") && has("h") {
        return url.to_string();
    }

    let overridden = ["w", "h", "fit", "auto"];
    let kept: Vec<(String, String)> = url
        .query_pairs()
        .filter(|(k, _)| !overridden.contains(&k.as_ref()))
        .map(|(k, v)| (k.into_owned(), v.into_owned()))
        .collect();

    url.query_pairs_mut()
        .clear()
        .extend_pairs(kept)
        .append_pair("w", &size.width.to_string())
        .append_pair("h", &size.height.to_string())
        .append_pair("fit", "crop")
        .append_pair("auto", "format");

    url.to_string()
}
