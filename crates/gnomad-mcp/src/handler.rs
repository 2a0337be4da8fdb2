use std::sync::Arc;

use serde_json::{json, Value};

use gnomad_core::traits::GraphQlClient;

use crate::dispatch::Dispatcher;
use crate::jsonrpc::{ErrorCode, JsonRpcError};
use crate::{JsonRpcRequest, JsonRpcResponse, ToolRegistry};

pub const SERVER_NAME: &str = "gnomad-mcp-server";
pub const PROTOCOL_VERSION: &str = "2024-11-05";

/// Transport-independent MCP method handler shared by the HTTP and stdio
/// front ends.
#[derive(Clone)]
pub struct McpHandler {
    dispatcher: Dispatcher,
}

impl McpHandler {
    pub fn new(client: Arc<dyn GraphQlClient>) -> Self {
        Self {
            dispatcher: Dispatcher::new(client),
        }
    }

    pub fn dispatcher(&self) -> &Dispatcher {
        &self.dispatcher
    }

    /// Handle one JSON-RPC message. Notifications yield `None`.
    pub async fn handle(&self, req: JsonRpcRequest) -> Option<JsonRpcResponse> {
        if req.is_notification() {
            tracing::info!("Received MCP notification: {}", req.method);
            return None;
        }

        let id = req.response_id();
        if req.jsonrpc != "2.0" {
            return Some(JsonRpcResponse::failure(
                id,
                JsonRpcError::new(
                    ErrorCode::InvalidRequest,
                    "Invalid Request: jsonrpc must be \"2.0\"",
                ),
            ));
        }

        let response = match req.method.as_str() {
            "initialize" => handle_initialize(id),
            "ping" => JsonRpcResponse::success(id, json!({})),
            "tools/list" => handle_tools_list(id),
            "tools/call" => self.handle_tools_call(&req, id).await,
            _ => JsonRpcResponse::failure(
                id,
                JsonRpcError::new(ErrorCode::MethodNotFound, "Method not found"),
            ),
        };

        Some(response)
    }

    async fn handle_tools_call(&self, req: &JsonRpcRequest, id: Value) -> JsonRpcResponse {
        let call = match req.tool_call() {
            Ok(call) => call,
            Err(err) => return JsonRpcResponse::failure(id, err),
        };

        let output = self
            .dispatcher
            .call(&call.name, call.arguments.as_ref())
            .await;

        JsonRpcResponse::success(id, serde_json::to_value(&output).unwrap_or_default())
    }
}

fn handle_initialize(id: Value) -> JsonRpcResponse {
    JsonRpcResponse::success(
        id,
        json!({
            "protocolVersion": PROTOCOL_VERSION,
            "capabilities": {
                "tools": {}
            },
            "serverInfo": {
                "name": SERVER_NAME,
                "version": env!("CARGO_PKG_VERSION")
            }
        }),
    )
}

fn handle_tools_list(id: Value) -> JsonRpcResponse {
    let tools = ToolRegistry::definitions();
    JsonRpcResponse::success(id, json!({ "tools": tools }))
}
