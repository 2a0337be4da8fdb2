use axum::{
    routing::{get, post},
    Router,
};
use tower_http::cors::CorsLayer;

use crate::app_state::AppState;
use crate::handlers;

/// Create the main application router with all routes.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health))
        .route("/mcp", post(handlers::mcp_request))
        // CORS: allow any origin (MCP clients may run in browser-like contexts)
        .layer(CorsLayer::permissive())
        .with_state(state)
}
