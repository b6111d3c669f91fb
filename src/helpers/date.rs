//! Date helper functions

use chrono::{DateTime, TimeZone};

/// Format date in full format (like "January 5, 2024")
pub fn full_date<Tz: TimeZone>(date: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    date.format("%B %-d, %Y").to_string()
}

/// Format date for the news feed (like "01/05")
pub fn feed_date<Tz: TimeZone>(date: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    date.format("%m/%d").to_string()
}

/// Generate a <time> HTML element
///
/// `datetime` keeps the raw timestamp from the CMS; the displayed text is the
/// full date, or empty when the timestamp does not parse.
pub fn time_tag(raw: &str) -> String {
    let display = DateTime::parse_from_rfc3339(raw)
        .map(|d| full_date(&d))
        .unwrap_or_default();
    format!(r#"<time datetime="{}">{}</time>"#, raw, display)
}
