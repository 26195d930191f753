//! Model Context Protocol (MCP) server for the documentation workspace.
//!
//! Services are resolved per call from the shared `Context` using `FromRef`.
//! Every tool answers with a `ToolResponse` envelope; domain failures are
//! reported inside it rather than as protocol errors.

pub mod protocol;
pub(crate) mod server;
mod tools;

pub use server::McpServer;
