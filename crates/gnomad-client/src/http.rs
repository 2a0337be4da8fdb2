use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use reqwest::Client;

use gnomad_core::error::Error;
use gnomad_core::traits::GraphQlClient;
use gnomad_core::types::{GraphQlRequest, GraphQlResponse};

/// Public gnomAD GraphQL endpoint.
pub const DEFAULT_ENDPOINT: &str = "https://gnomad.broadinstitute.org/api";

/// Connection settings for [`HttpGraphQlClient`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub endpoint: String,
    /// Per-request deadline. `None` waits for the remote indefinitely.
    pub timeout: Option<Duration>,
}

impl ClientConfig {
    /// Read `GNOMAD_API_URL` and `GNOMAD_TIMEOUT_SECS`, falling back to defaults.
    ///
    /// A timeout that does not parse as whole seconds is ignored.
    #[must_use]
    pub fn from_env() -> Self {
        let endpoint =
            std::env::var("GNOMAD_API_URL").unwrap_or_else(|_| DEFAULT_ENDPOINT.to_string());
        let timeout = std::env::var("GNOMAD_TIMEOUT_SECS")
            .ok()
            .and_then(|secs| secs.trim().parse::<u64>().ok())
            .map(Duration::from_secs);

        Self { endpoint, timeout }
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            timeout: None,
        }
    }
}

/// `reqwest`-backed GraphQL client. Cheap to clone; clones share one pool.
#[derive(Debug, Clone)]
pub struct HttpGraphQlClient {
    client: Client,
    endpoint: String,
}

impl HttpGraphQlClient {
    /// Build a client for the configured endpoint.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Transport`] if the underlying HTTP client cannot be
    /// constructed (for example when no TLS backend is available).
    pub fn new(config: ClientConfig) -> Result<Self, Error> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| Error::Transport(e.to_string()))?;

        Ok(Self {
            client,
            endpoint: config.endpoint,
        })
    }

    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl GraphQlClient for HttpGraphQlClient {
    async fn execute(&self, request: GraphQlRequest) -> Result<GraphQlResponse, Error> {
        let resp = self
            .client
            .post(&self.endpoint)
            .header(CONTENT_TYPE, "application/json")
            .json(&request)
            .send()
            .await
            .map_err(|e| Error::Transport(e.to_string()))?;

        let status = resp.status();
        if !status.is_success() {
            tracing::warn!("gnomAD API returned {status}");
            return Err(Error::Http {
                status: status.as_u16(),
            });
        }

        let body = resp
            .bytes()
            .await
            .map_err(|e| Error::Transport(e.to_string()))?;

        serde_json::from_slice(&body).map_err(|e| Error::Decode(e.to_string()))
    }
}
