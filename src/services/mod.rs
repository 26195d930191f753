//! Business logic services for the documentation workspace.
//!
//! Services orchestrate the graph pipeline and repositories, and are
//! resolved from the context with `from_context!`.

mod document;
mod markdown;
mod reference;

pub use document::{
    sanitize_title, ArtifactPersisted, DocumentCreated, DocumentService, WorkspaceInitialized,
};
pub use markdown::MarkdownService;
pub use reference::{GraphUpdate, ReferenceGraphService};
