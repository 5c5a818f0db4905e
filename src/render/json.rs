//! JSON preview of the styled document.
//!
//! Shows exactly what the DOCX writer will receive: style defaults, the
//! page header and every body element with its runs and indents.

use crate::error::{Error, Result};
use crate::model::StyledDocument;

/// Layout of the JSON preview.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JsonFormat {
    /// Pretty-printed JSON with indentation
    #[default]
    Pretty,
    /// Compact JSON without extra whitespace
    Compact,
}

/// Serialize a styled document for inspection.
pub fn to_json(doc: &StyledDocument, format: JsonFormat) -> Result<String> {
    match format {
        JsonFormat::Pretty => serde_json::to_string_pretty(doc),
        JsonFormat::Compact => serde_json::to_string(doc),
    }
    .map_err(|e| Error::Render(format!("document preview is not serializable: {}", e)))
}
