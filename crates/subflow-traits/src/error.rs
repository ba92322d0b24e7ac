//! Error types shared across the workspace.

use thiserror::Error;

/// Tool execution error types.
#[derive(Error, Debug)]
pub enum ToolError {
    #[error("Tool error: {0}")]
    Tool(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for tool operations.
pub type Result<T> = std::result::Result<T, ToolError>;
