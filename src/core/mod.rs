//! Core domain logic (protocol-agnostic)
//!
//! This module contains everything that is independent of the MCP
//! transport: configuration, error types, the remote search client
//! and the bulk fan-out.
//!
//! # Architecture
//!
//! - **config**: Configuration loading (TOML + environment)
//! - **error**: Error types and Result alias
//! - **types**: Domain data structures
//! - **client**: HTTP client for the hosted search API
//! - **bulk**: Concurrent multi-query fan-out and ranking
//! - **services**: Unified service container

pub mod bulk;
pub mod client;
pub mod config;
pub mod error;
pub mod services;
pub mod types;

// Re-export key types for convenience
pub use client::SearchClient;
pub use config::Config;
pub use error::{RapportError, Result};
pub use services::Services;
