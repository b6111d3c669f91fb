//! Render a rich-text body from a JSON file

use anyhow::{Context, Result};
use serde_json::Value;
use std::fs;
use std::path::Path;

use crate::config::RenderConfig;
use crate::content::{render_with, ContentBlock, RenderOptions};

/// Render the body in `path` to HTML
///
/// The file may hold a bare array of blocks, an article object with a `body`
/// field, or a full API response wrapping such an article in `result`.
pub fn run(path: &Path, render: &RenderConfig) -> Result<String> {
    let content =
        fs::read_to_string(path).with_context(|| format!("Failed to read {:?}", path))?;
    let value: Value =
        serde_json::from_str(&content).with_context(|| format!("Invalid JSON in {:?}", path))?;

    let body = ContentBlock::list_from_value(extract_body(&value));
    tracing::debug!("Rendering {} blocks from {:?}", body.len(), path);

    Ok(render_with(
        &body,
        RenderOptions {
            escape_text: render.escape_text,
        },
    ))
}

fn extract_body(value: &Value) -> &Value {
    let value = value.get("result").unwrap_or(value);
    value.get("body").unwrap_or(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn write(dir: &tempfile::TempDir, value: &Value) -> std::path::PathBuf {
        let path = dir.path().join("body.json");
        fs::write(&path, value.to_string()).unwrap();
        path
    }

    #[test]
    fn test_render_bare_body() {
        let dir = tempfile::tempdir().unwrap();
        let path = write(
            &dir,
            &json!([{"_type": "block", "style": "h2", "children": [{"text": "Hi"}]}]),
        );
        assert_eq!(run(&path, &RenderConfig::default()).unwrap(), "<h2>Hi</h2>");
    }

    #[test]
    fn test_render_api_response() {
        let dir = tempfile::tempdir().unwrap();
        let path = write(
            &dir,
            &json!({"result": {"title": "T", "body": [
                {"_type": "block", "children": [{"text": "a&b", "marks": ["code"]}]}
            ]}}),
        );
        assert_eq!(
            run(&path, &RenderConfig::default()).unwrap(),
            "<p><code>a&b</code></p>"
        );
        assert_eq!(
            run(&path, &RenderConfig { escape_text: true }).unwrap(),
            "<p><code>a&amp;b</code></p>"
        );
    }

    #[test]
    fn test_render_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        assert!(run(&dir.path().join("nope.json"), &RenderConfig::default()).is_err());
    }

    #[test]
    fn test_render_without_body() {
        let dir = tempfile::tempdir().unwrap();
        let path = write(&dir, &json!({"title": "no body"}));
        assert_eq!(run(&path, &RenderConfig::default()).unwrap(), "");
    }
}
