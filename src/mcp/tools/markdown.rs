//! Markdown tools.

use rmcp::{
    handler::server::wrapper::Parameters,
    model::CallToolResult,
    schemars::{self, JsonSchema},
    tool, tool_router, ErrorData as McpError,
};
use serde::Deserialize;

use crate::mcp::protocol::{OutputFormat, Response, ToolResponse};
use crate::mcp::server::McpServer;
use crate::models::MarkdownTree;
use crate::services::MarkdownService;
use crate::workspace::validate_absolute_path;

#[derive(Debug, Deserialize, JsonSchema)]
pub struct MdToDictParams {
    /// Absolute path of the markdown file to parse.
    pub file_path: String,
    /// Output format (json or toon). Defaults to json.
    #[serde(default)]
    pub format: Option<OutputFormat>,
}

#[tool_router(router = markdown_tools, vis = "pub(crate)")]
impl McpServer {
    #[tool(
        description = "Parse a markdown file into a hierarchy of sections (level, title, content, subsections)."
    )]
    pub async fn md_to_dict(
        &self,
        Parameters(params): Parameters<MdToDictParams>,
    ) -> Result<CallToolResult, McpError> {
        tracing::info!(file = %params.file_path, "Running md_to_dict tool");

        let service = self.resolve::<MarkdownService>();
        let mut response = ToolResponse::<MarkdownTree>::new();

        let tree = match validate_absolute_path(&params.file_path)
            .and_then(|path| service.parse_file(path))
        {
            Ok(tree) => tree,
            Err(e) => return Response(response.fail(&e), params.format).into(),
        };

        response.add_context(format!(
            "Parsed {} top-level sections from {}",
            tree.sections.len(),
            params.file_path
        ));

        Response(response.succeed(Some(tree)), params.format).into()
    }
}
