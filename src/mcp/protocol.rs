//! MCP protocol response helpers.

use rmcp::model::{CallToolResult, Content};
use rmcp::schemars::{self, JsonSchema};
use rmcp::ErrorData as McpError;
use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// Output format for tool responses.
#[derive(Debug, Clone, Copy, Default, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    /// JSON format (default).
    #[default]
    Json,
    /// TOON (Token-Oriented Object Notation) - 40-60% fewer tokens.
    Toon,
}

/// Structured envelope returned by every tool.
///
/// Domain failures are reported here with `success: false` and a context
/// message instead of a protocol error.
#[derive(Debug, Serialize)]
pub struct ToolResponse<T> {
    /// Whether the operation succeeded.
    pub success: bool,
    /// Human-readable messages gathered during the run.
    pub context: Vec<String>,
    /// Payload, when the operation produces one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<T>,
}

impl<T> Default for ToolResponse<T> {
    fn default() -> Self {
        Self {
            success: false,
            context: Vec::new(),
            result: None,
        }
    }
}

impl<T> ToolResponse<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a context message.
    pub fn add_context(&mut self, message: impl Into<String>) -> &mut Self {
        self.context.push(message.into());
        self
    }

    /// Mark success, optionally attaching a payload.
    pub fn succeed(mut self, result: Option<T>) -> Self {
        self.success = true;
        self.result = result;
        self
    }

    /// Mark failure and record the error, including its source chain.
    pub fn fail(mut self, err: &AppError) -> Self {
        self.success = false;
        self.context.push(err.to_context());
        let mut source = std::error::Error::source(err);
        while let Some(cause) = source {
            self.context.push(format!("Caused by: {}", cause));
            source = cause.source();
        }
        self
    }
}

/// Single-item response that serializes as the raw inner value.
///
/// ```ignore
/// Response(envelope, params.format).into()
/// ```
pub struct Response<T>(pub T, pub Option<OutputFormat>);

impl<T: Serialize> Serialize for Response<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.0.serialize(serializer)
    }
}

impl<T: Serialize> From<Response<T>> for Result<CallToolResult, McpError> {
    fn from(response: Response<T>) -> Self {
        match response.1.unwrap_or_default() {
            OutputFormat::Json => {
                let value = serde_json::to_value(&response.0)
                    .map_err(|e| McpError::internal_error(e.to_string(), None))?;
                Ok(CallToolResult::success(vec![Content::json(value)?]))
            }
            OutputFormat::Toon => {
                let toon_str = serde_toon::to_string(&response.0)
                    .unwrap_or_else(|e| format!("TOON serialization error: {}", e));
                Ok(CallToolResult::success(vec![Content::text(toon_str)]))
            }
        }
    }
}
