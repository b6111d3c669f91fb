//! Rich-text document model (blocks, spans and marks)
//!
//! Bodies arrive from the content API as loosely-typed JSON. Every
//! discriminator is decoded into a closed enum with an explicit fallback
//! variant, so unknown block kinds, styles and marks never fail decoding.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Kind of a body node; only `Block` nodes are rendered
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum BlockKind {
    #[serde(rename = "block")]
    Block,
    /// Images, embeds and anything else the renderer skips
    #[default]
    #[serde(other)]
    Other,
}

/// Structural style of a text block
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BlockStyle {
    H1,
    H2,
    H3,
    H4,
    Blockquote,
    #[default]
    #[serde(other)]
    Normal,
}

impl BlockStyle {
    /// HTML tag used to wrap the block
    pub fn tag(&self) -> &'static str {
        match self {
            BlockStyle::H1 => "h1",
            BlockStyle::H2 => "h2",
            BlockStyle::H3 => "h3",
            BlockStyle::H4 => "h4",
            BlockStyle::Blockquote => "blockquote",
            BlockStyle::Normal => "p",
        }
    }
}

/// Inline style annotation on a span
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mark {
    Strong,
    Bold,
    Em,
    Italic,
    Underline,
    Code,
    /// Annotation keys and unsupported decorators
    #[serde(other)]
    Other,
}

impl Mark {
    /// HTML tag for the mark, `None` for marks that render as nothing
    pub fn tag(&self) -> Option<&'static str> {
        match self {
            Mark::Strong | Mark::Bold => Some("strong"),
            Mark::Em | Mark::Italic => Some("em"),
            Mark::Underline => Some("u"),
            Mark::Code => Some("code"),
            Mark::Other => None,
        }
    }
}

/// A run of text sharing one set of marks
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TextSpan {
    #[serde(default, deserialize_with = "null_as_default")]
    pub text: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub marks: Vec<Mark>,
}

impl TextSpan {
    /// Create an unmarked span
    pub fn plain(text: &str) -> Self {
        Self {
            text: text.to_string(),
            marks: Vec::new(),
        }
    }

    /// Create a span with marks applied in the given order
    pub fn marked(text: &str, marks: &[Mark]) -> Self {
        Self {
            text: text.to_string(),
            marks: marks.to_vec(),
        }
    }
}

/// A node of a document body
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContentBlock {
    #[serde(rename = "_type", default, deserialize_with = "null_as_default")]
    pub kind: BlockKind,

    #[serde(default, deserialize_with = "null_as_default")]
    pub style: BlockStyle,

    #[serde(rename = "children", default, deserialize_with = "null_as_default")]
    pub spans: Vec<TextSpan>,
}

impl ContentBlock {
    /// Create a text block
    pub fn new(style: BlockStyle, spans: Vec<TextSpan>) -> Self {
        Self {
            kind: BlockKind::Block,
            style,
            spans,
        }
    }

    /// Decode a body from raw JSON
    ///
    /// A non-array value yields an empty body; array elements that cannot be
    /// decoded as blocks are skipped.
    pub fn list_from_value(value: &Value) -> Vec<ContentBlock> {
        match value {
            Value::Array(items) => items
                .iter()
                .filter_map(|item| ContentBlock::deserialize(item).ok())
                .collect(),
            _ => Vec::new(),
        }
    }
}

/// Deserialize a body leniently (see [`ContentBlock::list_from_value`])
pub fn lenient_body<'de, D>(deserializer: D) -> Result<Vec<ContentBlock>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(ContentBlock::list_from_value(&value))
}

/// Treat an explicit JSON `null` the same as a missing field
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
