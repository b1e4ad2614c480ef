//! Configuration management for the rapport service.
//!
//! This module handles loading configuration from TOML files and
//! environment variables. The remote credentials have no defaults and
//! must be provided before the server starts; search tuning values
//! fall back to sensible defaults.

use crate::core::error::{RapportError, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::Path;

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub remote: RemoteConfig,
    #[serde(default)]
    pub search: SearchConfig,
    #[serde(default)]
    pub tools: ToolsConfig,
}

/// Remote search service connection settings.
///
/// All four values are required; they are sent on every outbound
/// search request and never re-read after startup.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct RemoteConfig {
    /// Base URL of the hosted search API (no trailing slash)
    #[serde(default)]
    pub base_url: String,

    /// Authorization token for the hosted search API
    #[serde(default)]
    pub api_key: String,

    /// Dataset identifier (TR-Dataset header)
    #[serde(default)]
    pub dataset_id: String,

    /// Organization identifier (TR-Organization header)
    #[serde(default)]
    pub organization_id: String,
}

/// Search configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SearchConfig {
    /// Candidate page size requested from the remote ranker per query
    #[serde(default = "default_page_size")]
    pub page_size: usize,
}

/// Tool surface configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ToolsConfig {
    /// Register the bulk search tool alongside single search
    #[serde(default = "default_enable_bulk")]
    pub enable_bulk: bool,
}

fn default_page_size() -> usize {
    20
}

fn default_enable_bulk() -> bool {
    true
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            page_size: default_page_size(),
        }
    }
}

impl Default for ToolsConfig {
    fn default() -> Self {
        Self {
            enable_bulk: default_enable_bulk(),
        }
    }
}

impl Config {
    /// Load configuration from TOML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .map_err(|e| RapportError::ConfigError(format!("Failed to read config file: {e}")))?;

        let config: Config = toml::from_str(&contents)?;
        Ok(config)
    }

    /// Load config with priority: env vars > TOML > defaults
    ///
    /// Priority order:
    /// 1. RAPPORT_CONFIG env var pointing at a TOML file
    /// 2. ./rapport.toml if present
    /// 3. Defaults
    ///
    /// Environment variables override whatever the file provided.
    pub fn load() -> Result<Self> {
        let mut config = if let Ok(config_path) = env::var("RAPPORT_CONFIG") {
            Self::from_file(config_path)?
        } else if Path::new("rapport.toml").exists() {
            Self::from_file("rapport.toml")?
        } else {
            Self::default()
        };

        config.merge_env();
        config.validate()?;

        Ok(config)
    }

    /// Merge configuration with environment variables
    pub fn merge_env(&mut self) {
        if let Ok(base_url) = env::var("RAPPORT_BASE_URL") {
            self.remote.base_url = base_url;
        }
        if let Ok(api_key) = env::var("RAPPORT_API_KEY") {
            self.remote.api_key = api_key;
        }
        if let Ok(dataset_id) = env::var("RAPPORT_DATASET_ID") {
            self.remote.dataset_id = dataset_id;
        }
        if let Ok(organization_id) = env::var("RAPPORT_ORGANIZATION_ID") {
            self.remote.organization_id = organization_id;
        }

        if let Ok(page_size) = env::var("RAPPORT_PAGE_SIZE") {
            if let Ok(size) = page_size.parse() {
                self.search.page_size = size;
            }
        }

        if let Ok(enable_bulk) = env::var("RAPPORT_ENABLE_BULK") {
            if let Ok(enabled) = enable_bulk.parse() {
                self.tools.enable_bulk = enabled;
            }
        }
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if self.remote.base_url.trim().is_empty() {
            return Err(RapportError::ConfigError(
                "Remote base URL must be set (RAPPORT_BASE_URL)".to_string(),
            ));
        }

        if self.remote.api_key.trim().is_empty() {
            return Err(RapportError::ConfigError(
                "Remote API key must be set (RAPPORT_API_KEY)".to_string(),
            ));
        }

        if self.remote.dataset_id.trim().is_empty() {
            return Err(RapportError::ConfigError(
                "Dataset ID must be set (RAPPORT_DATASET_ID)".to_string(),
            ));
        }

        if self.remote.organization_id.trim().is_empty() {
            return Err(RapportError::ConfigError(
                "Organization ID must be set (RAPPORT_ORGANIZATION_ID)".to_string(),
            ));
        }

        if self.search.page_size == 0 {
            return Err(RapportError::ConfigError(
                "Page size must be non-zero".to_string(),
            ));
        }

        Ok(())
    }

    /// Log configuration (redacting sensitive values)
    pub fn log_config(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Remote base URL: {}", self.remote.base_url);
        tracing::info!("  API key: <redacted>");
        tracing::info!("  Dataset ID: {}", self.remote.dataset_id);
        tracing::info!("  Organization ID: {}", self.remote.organization_id);
        tracing::info!("  Page size: {}", self.search.page_size);
        tracing::info!("  Bulk tool enabled: {}", self.tools.enable_bulk);
    }
}
