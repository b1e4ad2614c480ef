//! Error types and error handling for the rapport service.
//!
//! This module defines the error types used throughout the
//! application. Protocol-specific error handling (MCP error codes)
//! lives in the MCP adapter module.

use thiserror::Error;

/// Result type alias for rapport operations
pub type Result<T> = std::result::Result<T, RapportError>;

/// Main error type for the rapport service
#[derive(Error, Debug)]
pub enum RapportError {
    /// The remote search service answered with a non-success status.
    /// Not retried; one round trip per search call.
    #[error("Remote search failed: {status} {reason}")]
    RemoteSearch { status: u16, reason: String },

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerdeError(#[from] serde_json::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),
}

impl RapportError {
    /// Get user-friendly error message
    pub fn message(&self) -> String {
        self.to_string()
    }

    /// Check if this error came from the remote search service
    pub fn is_remote(&self) -> bool {
        matches!(
            self,
            RapportError::RemoteSearch { .. } | RapportError::Http(_)
        )
    }

    /// Check if this is a bad request error (invalid input)
    pub fn is_bad_request(&self) -> bool {
        matches!(self, RapportError::ConfigError(_))
    }
}
