//! Reference graph models: raw edges and their consolidated diagram form.

use serde::{Deserialize, Serialize};

/// A directed mention: the source document's text contains the target's filename.
///
/// Field names match the CSV header (`start_point,end_point`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ReferenceEdge {
    #[serde(rename = "start_point")]
    pub source: String,
    #[serde(rename = "end_point")]
    pub target: String,
}

impl ReferenceEdge {
    pub fn new(source: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
        }
    }

    /// The unordered pair key, endpoints sorted lexicographically.
    pub fn pair_key(&self) -> (&str, &str) {
        if self.source <= self.target {
            (&self.source, &self.target)
        } else {
            (&self.target, &self.source)
        }
    }
}

/// Directionality of a consolidated edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EdgeKind {
    Directional,
    Bidirectional,
}

impl EdgeKind {
    /// Mermaid connector glyph.
    pub fn connector(&self) -> &'static str {
        match self {
            EdgeKind::Directional => "-->",
            EdgeKind::Bidirectional => "---",
        }
    }
}

/// An edge prepared for the diagram, with opposite-direction pairs merged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConsolidatedEdge {
    pub source: String,
    pub target: String,
    pub kind: EdgeKind,
}

impl ConsolidatedEdge {
    pub fn is_bidirectional(&self) -> bool {
        self.kind == EdgeKind::Bidirectional
    }
}
