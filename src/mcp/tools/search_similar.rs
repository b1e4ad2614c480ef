//! Single-query search tool handler

use super::handler::{text_content, McpToolHandler};
use crate::core::services::Services;
use crate::mcp::error::McpError;
use crate::mcp::protocol::{ToolResult, ToolSchema};
use async_trait::async_trait;
use serde::Deserialize;
use serde_json::{json, Value};
use std::sync::Arc;

pub struct SearchSimilarHandler {
    services: Arc<Services>,
}

impl SearchSimilarHandler {
    pub fn new(services: Arc<Services>) -> Self {
        Self { services }
    }
}

#[async_trait]
impl McpToolHandler for SearchSimilarHandler {
    fn name(&self) -> &str {
        "searchSimilarQuestions"
    }

    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: "searchSimilarQuestions".to_string(),
            description: "Search the relationship prompt corpus for questions similar to a \
                         free-text query. Ranking is hybrid (keyword + semantic) with typo \
                         tolerance, so conceptual queries ('rebuilding trust after a lie') \
                         work as well as keyword ones. Returns a JSON array of matches with \
                         id, questionType, category, text and relevance score, best first."
                .to_string(),
            input_schema: json!({
                "type": "object",
                "properties": {
                    "query": {
                        "type": "string",
                        "description": "Free-text query to match against the corpus"
                    }
                },
                "required": ["query"]
            }),
        }
    }

    async fn execute(&self, args: Value) -> Result<ToolResult, McpError> {
        #[derive(Deserialize)]
        struct SearchArgs {
            query: String,
        }

        let args: SearchArgs =
            serde_json::from_value(args).map_err(|e| McpError::InvalidParams(e.to_string()))?;

        // Remote faults propagate; the dispatcher turns them into an
        // error-flagged tool result.
        let results = self
            .services
            .client
            .search(&args.query)
            .await
            .map_err(McpError::from)?;

        let text = serde_json::to_string_pretty(&results)?;

        Ok(text_content(text))
    }
}
