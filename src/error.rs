//! Application error types with stable codes for tool responses.

use std::path::PathBuf;

use thiserror::Error;

/// Application-level errors for Glyph.
#[derive(Error, Debug)]
pub enum AppError {
    // Workspace errors
    #[error("Assistant directory not found at {}. Please initialize the assistant directory first.", path.display())]
    WorkspaceNotInitialized { path: PathBuf },

    #[error("Assistant directory already exists at {}. Set overwrite=true to overwrite it after confirming with the user.", .0.display())]
    AlreadyInitialized(PathBuf),

    #[error("Invalid path: '{0}'. The path must be absolute and full (e.g. '/home/user/project' or 'C:\\Users\\...\\project'). Relative paths are not allowed.")]
    InvalidPath(String),

    // Graph errors
    #[error("Failed to write {}", path.display())]
    OutputWriteFailed {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to update reference graph")]
    QueryDependencyFailed(#[source] Box<AppError>),

    #[error("Reference graph CSV error")]
    Csv(#[from] csv::Error),

    #[error("No document number left after the largest `{prefix}_<n>_` in {}", dir.display())]
    NumberingExhausted { dir: PathBuf, prefix: String },

    // File errors
    #[error("Source file not found: {}", .0.display())]
    SourceNotFound(PathBuf),

    #[error("Source path is not a file: {}", .0.display())]
    NotAFile(PathBuf),

    #[error("I/O error at {}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    // Config errors
    #[error("Invalid configuration")]
    Config(#[from] crate::config::ConfigError),
}

impl AppError {
    /// Wrap an I/O error with the path it happened on.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        AppError::Io {
            path: path.into(),
            source,
        }
    }

    /// Stable machine-readable code for this error.
    pub fn code(&self) -> &'static str {
        match self {
            AppError::WorkspaceNotInitialized { .. } => "WORKSPACE_NOT_INITIALIZED",
            AppError::AlreadyInitialized(_) => "ALREADY_INITIALIZED",
            AppError::InvalidPath(_) => "INVALID_PATH",
            AppError::OutputWriteFailed { .. } => "OUTPUT_WRITE_FAILED",
            AppError::QueryDependencyFailed(_) => "QUERY_DEPENDENCY_FAILED",
            AppError::Csv(_) => "CSV_ERROR",
            AppError::NumberingExhausted { .. } => "NUMBERING_EXHAUSTED",
            AppError::SourceNotFound(_) => "SOURCE_NOT_FOUND",
            AppError::NotAFile(_) => "NOT_A_FILE",
            AppError::Io { .. } => "IO_ERROR",
            AppError::Config(_) => "CONFIG_ERROR",
        }
    }

    /// Render as `[CODE] message`, the form used in tool context messages.
    pub fn to_context(&self) -> String {
        format!("[{}] {}", self.code(), self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_context_includes_code_and_path() {
        let err = AppError::WorkspaceNotInitialized {
            path: PathBuf::from("/tmp/project/.assistant"),
        };
        let msg = err.to_context();
        assert!(msg.starts_with("[WORKSPACE_NOT_INITIALIZED]"));
        assert!(msg.contains("/tmp/project/.assistant"));
    }

    #[test]
    fn test_query_dependency_exposes_inner_as_source() {
        let inner = AppError::WorkspaceNotInitialized {
            path: PathBuf::from("/nowhere/.assistant"),
        };
        let err = AppError::QueryDependencyFailed(Box::new(inner));
        assert_eq!(err.code(), "QUERY_DEPENDENCY_FAILED");
        assert!(!err.to_string().contains("/nowhere/.assistant"));
        let source = std::error::Error::source(&err).unwrap();
        assert!(source.to_string().contains("/nowhere/.assistant"));
    }

    #[test]
    fn test_wrapping_messages_leave_cause_to_source() {
        let err = AppError::io(
            "/tmp/x",
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        );
        assert_eq!(err.to_string(), "I/O error at /tmp/x");
        assert_eq!(std::error::Error::source(&err).unwrap().to_string(), "denied");
    }
}
