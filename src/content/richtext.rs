//! Rich-text to HTML rendering
//!
//! Span text is embedded as delivered by the CMS. Escaping is available as an
//! opt-in through [`RenderOptions`].

use serde_json::Value;

use super::block::{BlockKind, BlockStyle, ContentBlock, TextSpan};
use crate::helpers::html_escape;

/// Options for [`render_with`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderOptions {
    /// HTML-escape span text before wrapping it in mark tags
    pub escape_text: bool,
}

/// Render a document body to HTML
///
/// # Examples
/// ```ignore
/// render(&body) // -> "<h2>Title</h2><p><strong>Hello</strong></p>"
/// ```
pub fn render(body: &[ContentBlock]) -> String {
    render_with(body, RenderOptions::default())
}

/// Render a body that is still raw JSON; anything but an array renders as `""`
pub fn render_value(body: &Value) -> String {
    render(&ContentBlock::list_from_value(body))
}

/// Render a document body with explicit options
pub fn render_with(body: &[ContentBlock], options: RenderOptions) -> String {
    body.iter().map(|block| render_block(block, options)).collect()
}

fn render_block(block: &ContentBlock, options: RenderOptions) -> String {
    if block.kind != BlockKind::Block {
        return String::new();
    }

    let text: String = block
        .spans
        .iter()
        .map(|span| render_span(span, options))
        .collect();

    let tag = block.style.tag();
    match block.style {
        BlockStyle::Normal if text.trim().is_empty() => String::new(),
        _ => format!("<{tag}>{text}</{tag}>"),
    }
}

/// Marks fold left to right: the first mark ends up innermost.
fn render_span(span: &TextSpan, options: RenderOptions) -> String {
    let text = if options.escape_text {
        html_escape(&span.text)
    } else {
        span.text.clone()
    };

    span.marks
        .iter()
        .filter_map(|mark| mark.tag())
        .fold(text, |inner, tag| format!("<{tag}>{inner}</{tag}>"))
}
