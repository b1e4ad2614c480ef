//! MCP-specific error types

use crate::core::error::RapportError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum McpError {
    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Invalid params: {0}")]
    InvalidParams(String),

    #[error("Internal error: {0}")]
    InternalError(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<RapportError> for McpError {
    fn from(err: RapportError) -> Self {
        match err {
            RapportError::RemoteSearch { .. } | RapportError::Http(_) => {
                McpError::InternalError(err.to_string())
            }
            RapportError::ConfigError(s) => {
                McpError::InvalidParams(format!("Configuration error: {s}"))
            }
            RapportError::SerdeError(e) => {
                McpError::InternalError(format!("Serialization error: {e}"))
            }
            RapportError::TomlError(e) => {
                McpError::InternalError(format!("Configuration parse error: {e}"))
            }
            RapportError::IoError(e) => McpError::InternalError(format!("I/O error: {e}")),
        }
    }
}
