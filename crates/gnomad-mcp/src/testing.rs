use std::sync::Mutex;

use async_trait::async_trait;
use serde_json::Value;

use gnomad_core::error::Error;
use gnomad_core::traits::GraphQlClient;
use gnomad_core::types::{GraphQlRequest, GraphQlResponse};

/// In-memory mock client: replays one canned reply and records every request.
#[derive(Default)]
pub struct MockClient {
    reply: Mutex<Option<Result<GraphQlResponse, Error>>>,
    requests: Mutex<Vec<GraphQlRequest>>,
}

impl MockClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reply with `body` decoded as a GraphQL response.
    pub fn replying(body: Value) -> Self {
        let client = Self::new();
        *client.reply.lock().unwrap() = Some(Ok(serde_json::from_value(body).unwrap()));
        client
    }

    pub fn failing(err: Error) -> Self {
        let client = Self::new();
        *client.reply.lock().unwrap() = Some(Err(err));
        client
    }

    pub fn requests(&self) -> Vec<GraphQlRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl GraphQlClient for MockClient {
    async fn execute(&self, request: GraphQlRequest) -> Result<GraphQlResponse, Error> {
        self.requests.lock().unwrap().push(request);
        self.reply
            .lock()
            .unwrap()
            .take()
            .unwrap_or_else(|| Err(Error::Transport("no reply queued".to_string())))
    }
}
