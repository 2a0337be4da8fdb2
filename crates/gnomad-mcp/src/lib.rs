pub mod dispatch;
pub mod handler;
pub mod jsonrpc;
pub mod queries;
pub mod tools;

pub use dispatch::{Content, Dispatcher, ToolOutput};
pub use handler::McpHandler;
pub use jsonrpc::{ErrorCode, JsonRpcError, JsonRpcRequest, JsonRpcResponse, ToolCallParams};
pub use tools::{Tool, ToolDefinition, ToolRegistry};

#[cfg(test)]
pub(crate) mod testing;
