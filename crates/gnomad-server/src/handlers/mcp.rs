use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use gnomad_mcp::JsonRpcRequest;

use crate::app_state::AppState;

/// Handle an MCP JSON-RPC request over HTTP.
///
/// Requests are answered inline with the JSON-RPC response; notifications
/// get `202 Accepted` and no body.
pub async fn mcp_request(
    State(state): State<AppState>,
    Json(req): Json<JsonRpcRequest>,
) -> Response {
    match state.mcp.handle(req).await {
        Some(response) => Json(response).into_response(),
        None => StatusCode::ACCEPTED.into_response(),
    }
}
