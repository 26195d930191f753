//! Category enum for the fixed document classes of a workspace.

use serde::{Deserialize, Serialize};

/// Fixed document categories, one directory each under the marker directory.
///
/// Iteration order matters: when the same filename exists in several
/// categories, the last category visited wins the filename's attribution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    DesignLogs,
    Operations,
    Artifacts,
}

impl Category {
    /// Returns a static slice of all categories in scan order.
    pub fn all() -> &'static [Category] {
        &[
            Category::DesignLogs,
            Category::Operations,
            Category::Artifacts,
        ]
    }

    /// Directory name under the marker directory.
    pub fn dir_name(&self) -> &'static str {
        match self {
            Category::DesignLogs => "design_logs",
            Category::Operations => "operations",
            Category::Artifacts => "artifacts",
        }
    }

    /// Diagram style class assigned to nodes of this category.
    pub fn class_name(&self) -> &'static str {
        match self {
            Category::DesignLogs => "design_log",
            Category::Operations => "operation",
            Category::Artifacts => "artifact",
        }
    }

    /// Mermaid `classDef` style body.
    pub fn style(&self) -> &'static str {
        match self {
            Category::DesignLogs => "fill:#E3F2FD,stroke:#1565C0,color:#0D47A1",
            Category::Operations => "fill:#FFF3E0,stroke:#EF6C00,color:#E65100",
            Category::Artifacts => "fill:#E8F5E9,stroke:#2E7D32,color:#1B5E20",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.dir_name())
    }
}
