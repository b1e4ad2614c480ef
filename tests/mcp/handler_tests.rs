//! MCP handler unit tests

#[cfg(test)]
mod tests {
    use crate::common::*;
    use rapport::mcp::protocol::*;
    use serde_json::json;
    use wiremock::MockServer;

    #[tokio::test]
    async fn test_initialize_handler() {
        let server = MockServer::start().await;
        let handlers = create_test_handlers(&server);

        let request = JsonRpcRequest {
            jsonrpc: "2.0".to_string(),
            id: Some(json!(1)),
            method: "initialize".to_string(),
            params: Some(json!({
                "protocolVersion": "2024-11-05",
                "capabilities": {"tools": {}},
                "clientInfo": {"name": "test", "version": "1.0"}
            })),
        };

        let response = handlers.handle_initialize(request).await.unwrap();

        assert_eq!(response.jsonrpc, "2.0");
        assert!(response.error.is_none());

        let result = response.result.unwrap();
        assert_eq!(result["protocolVersion"], "2024-11-05");
        assert_eq!(result["serverInfo"]["name"], "rapport-mcp");
    }

    #[tokio::test]
    async fn test_initialized_handler() {
        let server = MockServer::start().await;
        let handlers = create_test_handlers(&server);

        let request = JsonRpcRequest {
            jsonrpc: "2.0".to_string(),
            id: None,
            method: "notifications/initialized".to_string(),
            params: Some(json!({})),
        };

        let response = handlers.handle_initialized(request).await.unwrap();

        assert!(response.id.is_none());
        assert!(response.result.is_none());
        assert!(response.error.is_none());
    }

    #[tokio::test]
    async fn test_tools_list_registration_order() {
        let server = MockServer::start().await;
        let handlers = create_test_handlers(&server);

        let request = JsonRpcRequest {
            jsonrpc: "2.0".to_string(),
            id: Some(json!(2)),
            method: "tools/list".to_string(),
            params: None,
        };

        let response = handlers.handle_tools_list(request).await.unwrap();

        let result = response.result.unwrap();
        let tools = result["tools"].as_array().unwrap();
        assert_eq!(tools.len(), 2);
        assert_eq!(tools[0]["name"], "searchSimilarQuestions");
        assert_eq!(tools[1]["name"], "bulkSearchTopSimilarQuestions");
        assert!(tools[0]["inputSchema"].is_object());
    }

    #[tokio::test]
    async fn test_tools_list_without_bulk_tool() {
        let server = MockServer::start().await;
        let handlers = create_single_tool_handlers(&server);

        let request = JsonRpcRequest {
            jsonrpc: "2.0".to_string(),
            id: Some(json!(3)),
            method: "tools/list".to_string(),
            params: None,
        };

        let response = handlers.handle_tools_list(request).await.unwrap();

        let result = response.result.unwrap();
        let tools = result["tools"].as_array().unwrap();
        assert_eq!(tools.len(), 1);
        assert_eq!(tools[0]["name"], "searchSimilarQuestions");
    }

    #[tokio::test]
    async fn test_tools_call_missing_params() {
        let server = MockServer::start().await;
        let handlers = create_test_handlers(&server);

        let request = JsonRpcRequest {
            jsonrpc: "2.0".to_string(),
            id: Some(json!(4)),
            method: "tools/call".to_string(),
            params: None, // Missing params should error
        };

        let response = handlers.handle_tools_call(request).await.unwrap();

        assert!(response.error.is_some());
        assert!(response.result.is_none());

        let error = response.error.unwrap();
        assert_eq!(error.code, INVALID_PARAMS);
        assert!(error.message.contains("Missing params"));
    }

    #[tokio::test]
    async fn test_tools_call_unknown_tool_reported_not_thrown() {
        let server = MockServer::start().await;
        let handlers = create_test_handlers(&server);

        let request = call_request(5, "nonexistentTool", json!({}));
        let response = handlers.handle_tools_call(request).await.unwrap();

        // Reported inside a successful envelope, never a JSON-RPC fault
        assert!(response.error.is_none());
        assert!(result_is_error(&response));
        assert!(
            result_text(&response).contains("nonexistentTool"),
            "Error text should name the tool, got: {}",
            result_text(&response)
        );
    }

    #[tokio::test]
    async fn test_search_tool_returns_full_result_set() {
        let server = MockServer::start().await;
        mount_query(
            &server,
            "trust",
            vec![
                corpus_hit("q-1", "trust", "What builds trust for you?", 0.92),
                corpus_hit("q-2", "trust", "When did you last feel trusted?", 0.61),
            ],
        )
        .await;

        let handlers = create_test_handlers(&server);
        let request = call_request(6, "searchSimilarQuestions", json!({"query": "trust"}));
        let response = handlers.handle_tools_call(request).await.unwrap();

        assert!(response.error.is_none());
        assert!(!result_is_error(&response));

        let parsed: serde_json::Value = serde_json::from_str(&result_text(&response)).unwrap();
        let hits = parsed.as_array().unwrap();
        assert_eq!(hits.len(), 2);
        assert!(hits.len() <= TEST_PAGE_SIZE);
        assert_eq!(hits[0]["id"], "q-1");
        assert_eq!(hits[0]["questionType"], "icebreaker");
        assert_eq!(hits[1]["score"], 0.61);
    }

    #[tokio::test]
    async fn test_search_tool_remote_failure_is_error_flagged() {
        let server = MockServer::start().await;
        mount_query_failure(&server, "trust", 502).await;

        let handlers = create_test_handlers(&server);
        let request = call_request(7, "searchSimilarQuestions", json!({"query": "trust"}));
        let response = handlers.handle_tools_call(request).await.unwrap();

        assert!(response.error.is_none());
        assert!(result_is_error(&response));

        let text = result_text(&response);
        assert!(text.contains("502"), "Expected status in message: {text}");
        assert!(
            text.contains("Bad Gateway"),
            "Expected reason phrase in message: {text}"
        );
    }

    #[tokio::test]
    async fn test_search_tool_malformed_arguments() {
        let server = MockServer::start().await;
        let handlers = create_test_handlers(&server);

        let request = call_request(8, "searchSimilarQuestions", json!({"q": "typo"}));
        let response = handlers.handle_tools_call(request).await.unwrap();

        assert!(response.error.is_none());
        assert!(result_is_error(&response));
    }

    #[tokio::test]
    async fn test_ping_handler() {
        let server = MockServer::start().await;
        let handlers = create_test_handlers(&server);

        let request = JsonRpcRequest {
            jsonrpc: "2.0".to_string(),
            id: Some(json!(9)),
            method: "ping".to_string(),
            params: None,
        };

        let response = handlers.handle_ping(request).await.unwrap();

        assert!(response.error.is_none());
        assert!(response.result.is_some());
    }
}
