//! Bulk search tool handler

use super::handler::{text_content, McpToolHandler};
use crate::core::bulk::{bulk_search, DEFAULT_BULK_LIMIT};
use crate::core::services::Services;
use crate::mcp::error::McpError;
use crate::mcp::protocol::{ToolResult, ToolSchema};
use async_trait::async_trait;
use serde::Deserialize;
use serde_json::{json, Value};
use std::sync::Arc;

pub struct BulkSearchHandler {
    services: Arc<Services>,
}

impl BulkSearchHandler {
    pub fn new(services: Arc<Services>) -> Self {
        Self { services }
    }
}

#[async_trait]
impl McpToolHandler for BulkSearchHandler {
    fn name(&self) -> &str {
        "bulkSearchTopSimilarQuestions"
    }

    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: "bulkSearchTopSimilarQuestions".to_string(),
            description: "Search the relationship prompt corpus for several queries at once. \
                         All queries run concurrently; a query whose remote lookup fails \
                         yields an empty list instead of failing the batch. Returns a JSON \
                         object keyed by query, each value holding up to `limit` matches \
                         ({text, score, category}) sorted by descending score."
                .to_string(),
            input_schema: json!({
                "type": "object",
                "properties": {
                    "queries": {
                        "type": "array",
                        "items": {"type": "string"},
                        "description": "Free-text queries to match against the corpus"
                    },
                    "limit": {
                        "type": "integer",
                        "description": "Matches kept per query",
                        "default": DEFAULT_BULK_LIMIT,
                        "minimum": 1
                    }
                },
                "required": ["queries"]
            }),
        }
    }

    async fn execute(&self, args: Value) -> Result<ToolResult, McpError> {
        #[derive(Deserialize)]
        struct BulkArgs {
            queries: Vec<String>,
            #[serde(default = "default_limit")]
            limit: usize,
        }
        fn default_limit() -> usize {
            DEFAULT_BULK_LIMIT
        }

        let args: BulkArgs =
            serde_json::from_value(args).map_err(|e| McpError::InvalidParams(e.to_string()))?;

        let map = bulk_search(&self.services.client, &args.queries, args.limit).await;

        let text = serde_json::to_string_pretty(&map)?;

        Ok(text_content(text))
    }
}
