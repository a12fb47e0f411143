//! Inline image (drawing) model.

use serde::{Deserialize, Serialize};

/// An inline picture anchored in its own paragraph.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InlineImage {
    /// Relationship ID of the image part (e.g., "rId3")
    pub rel_id: String,

    /// Drawing object ID (`wp:docPr/@id`), unique within the document
    pub doc_pr_id: u32,

    /// Drawing object name
    pub name: String,

    /// Width in EMUs
    pub width: u64,

    /// Height in EMUs
    pub height: u64,
}

impl InlineImage {
    /// Create an inline image reference.
    pub fn new(
        rel_id: impl Into<String>,
        doc_pr_id: u32,
        name: impl Into<String>,
        width: u64,
        height: u64,
    ) -> Self {
        Self {
            rel_id: rel_id.into(),
            doc_pr_id,
            name: name.into(),
            width,
            height,
        }
    }
}
