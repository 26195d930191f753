//! Glyph - documentation workspace MCP server
//!
//! Keeps design logs, operations and artifacts in a marker directory inside a
//! project, and derives a reference graph from the filenames each document
//! mentions.

pub mod cli;
pub mod config;
pub mod context;
pub mod di;
pub mod error;
pub mod graph;
pub mod mcp;
pub mod models;
pub mod repositories;
pub mod services;
pub mod templates;
pub mod workspace;

// Re-export FromRef at crate root for from_context! generated code
pub use di::FromRef;
