//! JSON format export for web-based viewers.
//!
//! The [`Document`] tree is written as-is, so a front end can lay it out without
//! parsing DOT.

use super::document::Document;
use crate::error::{Result, VizError};

/// Serialize a document to pretty-printed JSON.
pub fn to_json(document: &Document) -> Result<String> {
    serde_json::to_string_pretty(document)
        .map_err(|e| VizError::serialization("Failed to serialize document", Some(e)))
}

/// Read back a document written by [`to_json`].
pub fn from_json(json: &str) -> Result<Document> {
    serde_json::from_str(json)
        .map_err(|e| VizError::serialization("Failed to parse document", Some(e)))
}
