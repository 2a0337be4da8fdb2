use std::sync::Arc;

use gnomad_core::traits::GraphQlClient;
use gnomad_mcp::McpHandler;

/// Shared application state with the injected gnomAD client.
#[derive(Clone)]
pub struct AppState {
    pub mcp: Arc<McpHandler>,
}

impl AppState {
    pub fn new(client: Arc<dyn GraphQlClient>) -> Self {
        Self {
            mcp: Arc::new(McpHandler::new(client)),
        }
    }
}
