//! JSON emit functions for CLI output

use anyhow::{Context, Result};
use serde::Serialize;

use crate::GhmpError;

/// Render `output` as pretty-printed JSON.
pub fn emit_json<T: Serialize>(output: &T, what: &str) -> Result<String> {
    serde_json::to_string_pretty(output)
        .map_err(GhmpError::from)
        .with_context(|| format!("Failed to emit {what} JSON"))
}
