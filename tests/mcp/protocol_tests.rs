//! MCP protocol unit tests

#[cfg(test)]
mod tests {
    use rapport::mcp::protocol::*;
    use serde_json::json;

    #[test]
    fn test_parse_initialize_request() {
        let json = r#"{
            "jsonrpc": "2.0",
            "id": 1,
            "method": "initialize",
            "params": {
                "protocolVersion": "2024-11-05",
                "capabilities": {"tools": {}},
                "clientInfo": {
                    "name": "test",
                    "version": "1.0"
                }
            }
        }"#;

        let req: JsonRpcRequest = serde_json::from_str(json).unwrap();
        assert_eq!(req.method, "initialize");
        assert_eq!(req.jsonrpc, "2.0");
        assert!(req.id.is_some());

        let params: InitializeParams = serde_json::from_value(req.params.unwrap()).unwrap();
        assert_eq!(params.protocol_version.as_deref(), Some("2024-11-05"));
        assert_eq!(params.client_info.unwrap().name, "test");
    }

    #[test]
    fn test_parse_tools_list_request() {
        let json = r#"{
            "jsonrpc": "2.0",
            "id": 2,
            "method": "tools/list"
        }"#;

        let req: JsonRpcRequest = serde_json::from_str(json).unwrap();
        assert_eq!(req.method, "tools/list");
        assert!(req.params.is_none());
    }

    #[test]
    fn test_serialize_initialize_response() {
        let response = InitializeResult {
            protocol_version: PROTOCOL_VERSION.to_string(),
            capabilities: ServerCapabilities {
                tools: ToolsCapability {
                    list_changed: false,
                },
            },
            server_info: ServerInfo {
                name: "rapport-mcp".to_string(),
                version: "0.1.0".to_string(),
            },
        };

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["protocolVersion"], "2024-11-05");
        assert_eq!(json["serverInfo"]["name"], "rapport-mcp");
        assert_eq!(json["capabilities"]["tools"]["listChanged"], false);
    }

    #[test]
    fn test_error_response() {
        let error = JsonRpcError {
            code: METHOD_NOT_FOUND,
            message: "Unknown method".to_string(),
            data: None,
        };

        assert_eq!(error.code, -32601);
        assert_eq!(error.message, "Unknown method");
    }

    #[test]
    fn test_json_rpc_response_with_result() {
        let response = JsonRpcResponse {
            jsonrpc: "2.0".to_string(),
            id: Some(json!(1)),
            result: Some(json!({"status": "ok"})),
            error: None,
        };

        let json = serde_json::to_string(&response).unwrap();
        assert!(json.contains("\"jsonrpc\":\"2.0\""));
        assert!(json.contains("\"id\":1"));
        assert!(json.contains("\"result\""));
        assert!(!json.contains("\"error\""));
    }

    #[test]
    fn test_json_rpc_response_with_error() {
        let response = JsonRpcResponse {
            jsonrpc: "2.0".to_string(),
            id: Some(json!(1)),
            result: None,
            error: Some(JsonRpcError {
                code: INTERNAL_ERROR,
                message: "Internal error".to_string(),
                data: None,
            }),
        };

        let json = serde_json::to_string(&response).unwrap();
        assert!(json.contains("\"error\""));
        assert!(json.contains("\"code\":-32603"));
        assert!(!json.contains("\"result\""));
    }

    #[test]
    fn test_tool_call_params_default_arguments() {
        let params: ToolCallParams =
            serde_json::from_value(json!({"name": "searchSimilarQuestions"})).unwrap();

        assert_eq!(params.name, "searchSimilarQuestions");
        assert!(params.arguments.is_null());
    }

    #[test]
    fn test_tool_result_round_trip() {
        let result = ToolResult {
            content: vec![ContentBlock::Text {
                text: "payload".to_string(),
            }],
            is_error: true,
        };

        let value = serde_json::to_value(&result).unwrap();
        let back: ToolResult = serde_json::from_value(value).unwrap();
        assert!(back.is_error);
        match &back.content[0] {
            ContentBlock::Text { text } => assert_eq!(text, "payload"),
        }
    }
}
