use anyhow::{Context, Result};
use serde::Serialize;

/// Pretty-printed JSON with two-space indentation
pub(crate) fn render_json<T: Serialize>(summary: &T) -> Result<String> {
    serde_json::to_string_pretty(summary).context("Failed to serialize summary as JSON")
}
