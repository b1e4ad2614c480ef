//! Unified service container.
//!
//! Bundles the search client and configuration for shared access by
//! the MCP tool handlers.

use crate::core::client::SearchClient;
use crate::core::config::Config;
use crate::core::error::Result;
use std::sync::Arc;

/// Shared services for all protocol adapters
pub struct Services {
    pub client: Arc<SearchClient>,
    pub config: Arc<Config>,
}

impl Services {
    /// Create services from validated configuration
    pub fn new(config: Config) -> Result<Self> {
        let client = Arc::new(SearchClient::new(&config)?);

        Ok(Self {
            client,
            config: Arc::new(config),
        })
    }
}
