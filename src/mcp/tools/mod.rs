//! MCP tool implementations
//!
//! This module contains the tool handlers that expose the corpus
//! search surface to MCP clients.

pub mod bulk_search;
pub mod handler;
pub mod registry;
pub mod search_similar;

pub use bulk_search::BulkSearchHandler;
pub use handler::{error_content, text_content, McpToolHandler};
pub use registry::ToolRegistry;
pub use search_similar::SearchSimilarHandler;
