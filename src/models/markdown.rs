//! Hierarchical markdown section model.

use serde::{Deserialize, Serialize};

/// A heading and the text beneath it, with nested lower-level headings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarkdownSection {
    /// Heading level (1-6).
    pub level: u8,
    /// Heading text.
    pub title: String,
    /// Text content directly under this heading.
    pub content: String,
    /// Nested sections, omitted when empty.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub subsections: Vec<MarkdownSection>,
}

impl MarkdownSection {
    pub fn new(level: u8, title: impl Into<String>) -> Self {
        Self {
            level,
            title: title.into(),
            content: String::new(),
            subsections: Vec::new(),
        }
    }
}

/// Parsed document: the top-level sections.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarkdownTree {
    pub sections: Vec<MarkdownSection>,
}
