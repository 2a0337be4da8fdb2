use async_trait::async_trait;

use crate::error::Error;
use crate::types::{GraphQlRequest, GraphQlResponse};

/// A client able to run one GraphQL round trip against the gnomAD API.
#[async_trait]
pub trait GraphQlClient: Send + Sync {
    /// Send `request` and decode the response body.
    ///
    /// A non-success HTTP status is reported as [`Error::Http`]; GraphQL-level
    /// errors are left in the returned [`GraphQlResponse`] for the caller.
    async fn execute(&self, request: GraphQlRequest) -> Result<GraphQlResponse, Error>;
}
