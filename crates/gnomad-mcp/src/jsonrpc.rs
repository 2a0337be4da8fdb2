//! JSON-RPC 2.0 envelope used by every MCP transport.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// An incoming JSON-RPC message.
///
/// `id` distinguishes an absent field (`None`, a notification) from an
/// explicit `"id": null` (`Some(Value::Null)`), which still expects a reply.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonRpcRequest {
    pub jsonrpc: String,
    #[serde(
        default,
        deserialize_with = "deserialize_present",
        skip_serializing_if = "Option::is_none"
    )]
    pub id: Option<Value>,
    pub method: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub params: Option<Value>,
}

fn deserialize_present<'de, D>(deserializer: D) -> Result<Option<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(Some)
}

/// `params` of a `tools/call` request.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ToolCallParams {
    pub name: String,
    /// Left as raw JSON; the dispatcher decides whether it is usable.
    #[serde(default)]
    pub arguments: Option<Value>,
}

impl JsonRpcRequest {
    pub fn is_notification(&self) -> bool {
        self.id.is_none()
    }

    /// Id to echo back in the response.
    pub fn response_id(&self) -> Value {
        self.id.clone().unwrap_or(Value::Null)
    }

    /// Decode `params` as a tool call.
    ///
    /// # Errors
    ///
    /// Returns an [`ErrorCode::InvalidParams`] error when `params` is missing
    /// or has no string `name`.
    pub fn tool_call(&self) -> Result<ToolCallParams, JsonRpcError> {
        let params = self
            .params
            .as_ref()
            .ok_or_else(|| JsonRpcError::new(ErrorCode::InvalidParams, "Missing params"))?;

        ToolCallParams::deserialize(params).map_err(|e| {
            JsonRpcError::new(ErrorCode::InvalidParams, format!("Invalid tool call: {e}"))
        })
    }
}

/// Protocol-level failure classes. Tool failures never use these; they are
/// reported inside a successful `tools/call` result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    ParseError,
    InvalidRequest,
    MethodNotFound,
    InvalidParams,
}

impl ErrorCode {
    pub const fn code(self) -> i32 {
        match self {
            Self::ParseError => -32700,
            Self::InvalidRequest => -32600,
            Self::MethodNotFound => -32601,
            Self::InvalidParams => -32602,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JsonRpcError {
    pub code: i32,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
}

impl JsonRpcError {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code: code.code(),
            message: message.into(),
            data: None,
        }
    }
}

/// An outgoing JSON-RPC message: exactly one of `result` or `error` is set.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonRpcResponse {
    pub jsonrpc: String,
    pub id: Value,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<JsonRpcError>,
}

impl JsonRpcResponse {
    pub fn success(id: Value, result: Value) -> Self {
        Self {
            jsonrpc: "2.0".to_string(),
            id,
            result: Some(result),
            error: None,
        }
    }

    pub fn failure(id: Value, error: JsonRpcError) -> Self {
        Self {
            jsonrpc: "2.0".to_string(),
            id,
            result: None,
            error: Some(error),
        }
    }

    /// Reply to a line that could not be decoded; its id is unknown.
    pub fn parse_error(detail: impl std::fmt::Display) -> Self {
        Self::failure(
            Value::Null,
            JsonRpcError::new(ErrorCode::ParseError, format!("Parse error: {detail}")),
        )
    }
}
