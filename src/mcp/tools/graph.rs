//! Reference graph tools - rebuild and query document cross-references.

use rmcp::{
    handler::server::wrapper::Parameters,
    model::CallToolResult,
    schemars::{self, JsonSchema},
    tool, tool_router, ErrorData as McpError,
};
use serde::Deserialize;

use crate::mcp::protocol::{OutputFormat, Response, ToolResponse};
use crate::mcp::server::McpServer;
use crate::services::ReferenceGraphService;
use crate::workspace::validate_absolute_path;

// ============================================================================
// Parameter Types
// ============================================================================

/// Parameters for update_reference_graph tool.
#[derive(Debug, Deserialize, JsonSchema)]
pub struct UpdateReferenceGraphParams {
    /// Absolute path of the project root containing the assistant directory.
    pub base_path: String,
}

/// Parameters for the reference query tools.
#[derive(Debug, Deserialize, JsonSchema)]
pub struct ReferenceQueryParams {
    /// Absolute path of the project root containing the assistant directory.
    pub base_path: String,
    /// Bare filename to query (e.g. "dl_1_Authentication.md").
    pub file_name: String,
    /// Output format (json or toon). Defaults to json.
    #[serde(default)]
    pub format: Option<OutputFormat>,
}

/// Direction of a reference query.
#[derive(Debug, Clone, Copy)]
enum QueryDirection {
    From,
    To,
}

// ============================================================================
// Tool Router
// ============================================================================

#[tool_router(router = graph_tools, vis = "pub(crate)")]
impl McpServer {
    /// Rebuild the reference graph by scanning every design log, operation,
    /// and artifact for mentions of other documents' filenames.
    ///
    /// Overwrites reference_graph.csv (start_point,end_point) and the Mermaid
    /// diagram in the assistant directory.
    #[tool(
        description = "Scan design logs, operations, and artifacts for filename mentions and rewrite reference_graph.csv and the reference diagram."
    )]
    pub async fn update_reference_graph(
        &self,
        Parameters(params): Parameters<UpdateReferenceGraphParams>,
    ) -> Result<CallToolResult, McpError> {
        tracing::info!(base_path = %params.base_path, "Running update_reference_graph tool");

        let service = self.resolve::<ReferenceGraphService>();
        let mut response = ToolResponse::<()>::new();

        let update = match validate_absolute_path(&params.base_path)
            .and_then(|base| service.update(base))
        {
            Ok(update) => update,
            Err(e) => {
                tracing::warn!(error = %e, "update_reference_graph failed");
                return Response(response.fail(&e), None).into();
            }
        };

        response.add_context(format!(
            "Reference graph updated successfully at {}",
            update.csv_path.display()
        ));
        response.add_context(format!("Diagram written to {}", update.diagram_path.display()));
        response.add_context(format!(
            "Statistics: {} files with references, {} reference edges, {} bidirectional pairs",
            update.source_count, update.edge_count, update.bidirectional_count
        ));
        if update.skipped > 0 {
            response.add_context(format!("{} unreadable files were skipped", update.skipped));
        }

        Response(response.succeed(None), None).into()
    }

    /// Get all files referenced by the specified file.
    ///
    /// Rebuilds the reference graph first so the answer reflects current content.
    #[tool(
        description = "List files referenced by the given file (rebuilds the reference graph first)."
    )]
    pub async fn get_references_from(
        &self,
        Parameters(params): Parameters<ReferenceQueryParams>,
    ) -> Result<CallToolResult, McpError> {
        tracing::info!(
            base_path = %params.base_path,
            file = %params.file_name,
            "Running get_references_from tool"
        );
        self.query_references(params, QueryDirection::From)
    }

    /// Find all files that reference the specified file.
    ///
    /// Rebuilds the reference graph first so the answer reflects current content.
    #[tool(
        description = "List files that reference the given file (rebuilds the reference graph first)."
    )]
    pub async fn find_references_to(
        &self,
        Parameters(params): Parameters<ReferenceQueryParams>,
    ) -> Result<CallToolResult, McpError> {
        tracing::info!(
            base_path = %params.base_path,
            file = %params.file_name,
            "Running find_references_to tool"
        );
        self.query_references(params, QueryDirection::To)
    }
}

impl McpServer {
    fn query_references(
        &self,
        params: ReferenceQueryParams,
        direction: QueryDirection,
    ) -> Result<CallToolResult, McpError> {
        let service = self.resolve::<ReferenceGraphService>();
        let mut response = ToolResponse::<Vec<String>>::new();

        let result = validate_absolute_path(&params.base_path).and_then(|base| match direction {
            QueryDirection::From => service.references_from(base, &params.file_name),
            QueryDirection::To => service.references_to(base, &params.file_name),
        });

        let files = match result {
            Ok(files) => files,
            Err(e) => {
                tracing::warn!(error = %e, file = %params.file_name, "Reference query failed");
                return Response(response.fail(&e), params.format).into();
            }
        };

        match direction {
            QueryDirection::From => response.add_context(format!(
                "Found {} files referenced by {}",
                files.len(),
                params.file_name
            )),
            QueryDirection::To => response.add_context(format!(
                "Found {} files that reference {}",
                files.len(),
                params.file_name
            )),
        };

        tracing::info!(count = files.len(), ?direction, "Reference query complete");

        Response(response.succeed(Some(files)), params.format).into()
    }
}
