//! Workspace tools - scaffold the assistant directory and add documents to it.

use rmcp::{
    handler::server::wrapper::Parameters,
    model::CallToolResult,
    schemars::{self, JsonSchema},
    tool, tool_router, ErrorData as McpError,
};
use serde::Deserialize;

use crate::mcp::protocol::{Response, ToolResponse};
use crate::mcp::server::McpServer;
use crate::services::{ArtifactPersisted, DocumentCreated, DocumentService, WorkspaceInitialized};
use crate::workspace::validate_absolute_path;

// ============================================================================
// Parameter Types
// ============================================================================

#[derive(Debug, Deserialize, JsonSchema)]
pub struct InitAssistantDirParams {
    /// Absolute path of the project root.
    pub abs_path: String,
    /// Replace an existing assistant directory (it is backed up first).
    #[serde(default)]
    pub overwrite: bool,
}

#[derive(Debug, Deserialize, JsonSchema)]
pub struct AddDesignLogParams {
    /// Absolute path of the project root.
    pub abs_path: String,
    /// Title of the design log; spaces become underscores in the filename.
    pub title: String,
    /// One-line description recorded in the design log summary.
    pub short_desc: String,
}

#[derive(Debug, Deserialize, JsonSchema)]
pub struct AddOperationParams {
    /// Absolute path of the project root.
    pub abs_path: String,
    /// Title of the operation; spaces become underscores in the filename.
    pub title: String,
}

#[derive(Debug, Deserialize, JsonSchema)]
pub struct PersistArtifactParams {
    /// Absolute path of the project root.
    pub base_path: String,
    /// Absolute path of the file to copy into the artifacts directory.
    pub source_file_path: String,
}

// ============================================================================
// Tool Router
// ============================================================================

#[tool_router(router = workspace_tools, vis = "pub(crate)")]
impl McpServer {
    #[tool(
        description = "Create the assistant directory (design_logs, operations, artifacts, ad_hoc) with a design log summary and an empty reference graph. Set overwrite=true only after confirming with the user; the old directory is backed up."
    )]
    pub async fn init_assistant_dir(
        &self,
        Parameters(params): Parameters<InitAssistantDirParams>,
    ) -> Result<CallToolResult, McpError> {
        tracing::info!(
            abs_path = %params.abs_path,
            overwrite = params.overwrite,
            "Running init_assistant_dir tool"
        );

        let service = self.resolve::<DocumentService>();
        let mut response = ToolResponse::<WorkspaceInitialized>::new();

        let initialized = match validate_absolute_path(&params.abs_path)
            .and_then(|base| service.init_workspace(base, params.overwrite))
        {
            Ok(initialized) => initialized,
            Err(e) => return Response(response.fail(&e), None).into(),
        };

        if let Some(backup) = &initialized.backup {
            response.add_context(format!(
                "Existing assistant directory backed up to {}",
                backup.display()
            ));
        }
        response.add_context(format!(
            "Assistant directory created at {}",
            initialized.root.display()
        ));

        Response(response.succeed(Some(initialized)), None).into()
    }

    #[tool(
        description = "Create a new numbered design log (dl_<n>_<title>.md) from the template and add it to the design log summary."
    )]
    pub async fn add_design_log(
        &self,
        Parameters(params): Parameters<AddDesignLogParams>,
    ) -> Result<CallToolResult, McpError> {
        tracing::info!(title = %params.title, "Running add_design_log tool");

        let service = self.resolve::<DocumentService>();
        let mut response = ToolResponse::<DocumentCreated>::new();

        let created = match validate_absolute_path(&params.abs_path)
            .and_then(|base| service.add_design_log(base, &params.title, &params.short_desc))
        {
            Ok(created) => created,
            Err(e) => return Response(response.fail(&e), None).into(),
        };

        response.add_context(format!("Design log created: {}", created.path.display()));
        if created.summary_updated {
            response.add_context("Design log summary updated");
        } else {
            response.add_context("Warning: summary file not found, design log was not indexed");
        }

        Response(response.succeed(Some(created)), None).into()
    }

    #[tool(
        description = "Create a new numbered operation document (op_<n>_<title>.md) from the template."
    )]
    pub async fn add_operation(
        &self,
        Parameters(params): Parameters<AddOperationParams>,
    ) -> Result<CallToolResult, McpError> {
        tracing::info!(title = %params.title, "Running add_operation tool");

        let service = self.resolve::<DocumentService>();
        let mut response = ToolResponse::<DocumentCreated>::new();

        let created = match validate_absolute_path(&params.abs_path)
            .and_then(|base| service.add_operation(base, &params.title))
        {
            Ok(created) => created,
            Err(e) => return Response(response.fail(&e), None).into(),
        };

        response.add_context(format!("Operation created: {}", created.path.display()));

        Response(response.succeed(Some(created)), None).into()
    }

    #[tool(
        description = "Copy a file into the artifacts directory as art_<n>_<original name>."
    )]
    pub async fn persist_artifact(
        &self,
        Parameters(params): Parameters<PersistArtifactParams>,
    ) -> Result<CallToolResult, McpError> {
        tracing::info!(source = %params.source_file_path, "Running persist_artifact tool");

        let service = self.resolve::<DocumentService>();
        let mut response = ToolResponse::<ArtifactPersisted>::new();

        let persisted = match validate_absolute_path(&params.base_path).and_then(|base| {
            let source = validate_absolute_path(&params.source_file_path)?;
            service.persist_artifact(base, source)
        }) {
            Ok(persisted) => persisted,
            Err(e) => return Response(response.fail(&e), None).into(),
        };

        response.add_context(format!(
            "Artifact {} persisted from {} to {}",
            persisted.filename,
            persisted.source.display(),
            persisted.destination.display()
        ));

        Response(response.succeed(Some(persisted)), None).into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::context::Context;
    use tempfile::TempDir;

    fn server() -> McpServer {
        McpServer::new(Context::from(Config::default()))
    }

    fn envelope(result: CallToolResult) -> serde_json::Value {
        let value = serde_json::to_value(&result).unwrap();
        let text = value["content"][0]["text"].as_str().unwrap();
        serde_json::from_str(text).unwrap()
    }

    #[tokio::test]
    async fn test_init_then_add_design_log() {
        let dir = TempDir::new().unwrap();
        let abs_path = dir.path().to_string_lossy().into_owned();
        let server = server();

        let init = envelope(
            server
                .init_assistant_dir(Parameters(InitAssistantDirParams {
                    abs_path: abs_path.clone(),
                    overwrite: false,
                }))
                .await
                .unwrap(),
        );
        assert_eq!(init["success"], true);

        let again = envelope(
            server
                .init_assistant_dir(Parameters(InitAssistantDirParams {
                    abs_path: abs_path.clone(),
                    overwrite: false,
                }))
                .await
                .unwrap(),
        );
        assert_eq!(again["success"], false);
        assert!(again["context"][0]
            .as_str()
            .unwrap()
            .starts_with("[ALREADY_INITIALIZED]"));

        let log = envelope(
            server
                .add_design_log(Parameters(AddDesignLogParams {
                    abs_path,
                    title: "Data Model".to_string(),
                    short_desc: "Tables".to_string(),
                }))
                .await
                .unwrap(),
        );
        assert_eq!(log["success"], true);
        assert_eq!(log["result"]["filename"], "dl_1_Data_Model.md");
        assert_eq!(log["result"]["summary_updated"], true);
    }

    #[tokio::test]
    async fn test_persist_artifact_rejects_relative_source() {
        let dir = TempDir::new().unwrap();

        let json = envelope(
            server()
                .persist_artifact(Parameters(PersistArtifactParams {
                    base_path: dir.path().to_string_lossy().into_owned(),
                    source_file_path: "notes/diagram.png".to_string(),
                }))
                .await
                .unwrap(),
        );

        assert_eq!(json["success"], false);
        assert!(json["context"][0]
            .as_str()
            .unwrap()
            .starts_with("[INVALID_PATH]"));
    }
}
