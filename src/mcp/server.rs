//! MCP server implementation for Glyph.

use std::sync::Arc;

use rmcp::{
    handler::server::{router::tool::ToolRouter, ServerHandler},
    model::{Implementation, ProtocolVersion, ServerCapabilities, ServerInfo},
    tool_handler,
};

use crate::context::Context;
use crate::di::FromRef;

/// Glyph MCP server for documentation workspaces.
///
/// Exposes tools to scaffold the assistant directory, add design logs,
/// operations and artifacts, and maintain the reference graph between them.
#[derive(Clone)]
pub struct McpServer {
    pub(crate) ctx: Arc<Context>,
    tool_router: ToolRouter<McpServer>,
}

impl McpServer {
    pub fn new(ctx: Context) -> Self {
        tracing::info!("Initializing Glyph MCP server");

        Self {
            ctx: Arc::new(ctx),
            tool_router: Self::tool_router(),
        }
    }

    fn tool_router() -> ToolRouter<Self> {
        Self::workspace_tools() + Self::graph_tools() + Self::markdown_tools()
    }

    /// Resolve a service or repository from the context.
    pub fn resolve<T: FromRef<Context>>(&self) -> T {
        T::from_ref(&self.ctx)
    }
}

#[tool_handler]
impl ServerHandler for McpServer {
    fn get_info(&self) -> ServerInfo {
        let marker = &self.ctx.config.workspace.marker;
        ServerInfo {
            protocol_version: ProtocolVersion::V_2024_11_05,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation::from_build_env(),
            instructions: Some(format!(
                r#"Glyph - Documentation Workspace MCP Server

Maintains a `{marker}` directory inside a project and the cross-reference
graph between its documents. All paths must be absolute.

## Layout

- design_logs/  - dl_<n>_<title>.md, indexed in _summary.md
- operations/   - op_<n>_<title>.md
- artifacts/    - art_<n>_<name>
- ad_hoc/       - scratch space (not part of the graph)

## Workspace Tools

- **init_assistant_dir** - Create the directory tree (overwrite only after confirming with the user)
- **add_design_log** - New numbered design log, added to the summary
- **add_operation** - New numbered operation
- **persist_artifact** - Copy a file into artifacts/
- **md_to_dict** - Parse a markdown file into nested sections

## Reference Graph Tools

A document references another when its text contains the other's filename.

- **update_reference_graph** - Rescan and rewrite reference_graph.csv and the Mermaid diagram
- **get_references_from** - Files a given file mentions
- **find_references_to** - Files that mention a given file

Query tools always rebuild the graph first.
"#
            )),
        }
    }
}
