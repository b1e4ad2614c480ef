//! Tool registry for managing MCP tools

use super::handler::McpToolHandler;
use crate::mcp::protocol::ToolSchema;
use std::sync::Arc;

/// Registry for all available MCP tools
///
/// Holds tool handlers in registration order; `tools/list` reflects
/// that order exactly. Lookups are linear, which is fine for the
/// handful of tools this server carries.
pub struct ToolRegistry {
    handlers: Vec<Arc<dyn McpToolHandler>>,
}

impl ToolRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self {
            handlers: Vec::new(),
        }
    }

    /// Register a tool handler, appending it to the listing order
    pub fn register(&mut self, handler: Arc<dyn McpToolHandler>) {
        self.handlers.push(handler);
    }

    /// Get a tool handler by name
    pub fn get(&self, name: &str) -> Option<&Arc<dyn McpToolHandler>> {
        self.handlers.iter().find(|h| h.name() == name)
    }

    /// List all tool schemas in registration order
    pub fn list(&self) -> Vec<ToolSchema> {
        self.handlers.iter().map(|h| h.schema()).collect()
    }

    /// Check if a tool exists
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Get number of registered tools
    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    /// Check if registry is empty
    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }
}

impl Default for ToolRegistry {
    fn default() -> Self {
        Self::new()
    }
}
