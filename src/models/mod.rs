//! Domain models for the documentation workspace.

mod category;
mod graph;
mod markdown;

pub use category::Category;
pub use graph::{ConsolidatedEdge, EdgeKind, ReferenceEdge};
pub use markdown::{MarkdownSection, MarkdownTree};
