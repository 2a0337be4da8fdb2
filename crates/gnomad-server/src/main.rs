use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use gnomad_client::{ClientConfig, HttpGraphQlClient};
use gnomad_server::app_state::AppState;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let host = std::env::var("GNOMAD_MCP_HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
    let port = std::env::var("GNOMAD_MCP_PORT").unwrap_or_else(|_| "3000".to_string());

    let client =
        HttpGraphQlClient::new(ClientConfig::from_env()).expect("Failed to build HTTP client");
    tracing::info!("Using gnomAD API at {}", client.endpoint());

    let state = AppState::new(Arc::new(client));

    let app = gnomad_server::router::create_router(state);

    let addr = format!("{host}:{port}");
    tracing::info!("gnomAD MCP server listening on {addr}");

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("Failed to bind address");

    axum::serve(listener, app)
        .await
        .expect("Server error");
}
