//! rapport - MCP search tools over a hosted prompt corpus
//!
//! A stdio MCP server exposing semantic search over a hosted corpus
//! of relationship-themed prompts. All ranking happens remotely
//! (hybrid keyword + vector, typo tolerant); locally the server
//! shapes requests, normalizes responses and dispatches tool calls.
//!
//! # Architecture
//!
//! The codebase is organized into two main modules:
//!
//! - **core**: Domain logic (protocol-agnostic)
//!   - config, error, types
//!   - client (remote search API)
//!   - bulk (concurrent fan-out and ranking)
//!   - services (unified service container)
//!
//! - **mcp**: MCP adapter (depends on core)
//!   - server, transport, handlers, tools, protocol
//!
//! # Key Properties
//!
//! - One remote round trip per query, no retry, no cache
//! - Bulk fan-out with per-query failure isolation
//! - Tool faults answered as error-flagged results, never as
//!   protocol faults

// Core domain logic (protocol-agnostic)
pub mod core;

// MCP (Model Context Protocol) adapter
pub mod mcp;

// Re-export commonly used types for convenience
pub use crate::core::config::Config;
pub use crate::core::error::{RapportError, Result};
pub use crate::core::services::Services;
pub use crate::core::types::*;
