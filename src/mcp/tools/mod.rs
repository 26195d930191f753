//! MCP tool implementations organized by domain.

pub mod graph;
pub mod markdown;
pub mod workspace;
