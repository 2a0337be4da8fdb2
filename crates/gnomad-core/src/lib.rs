pub mod error;
pub mod traits;
pub mod types;

pub use error::Error;
pub use traits::GraphQlClient;
pub use types::{Dataset, GraphQlError, GraphQlRequest, GraphQlResponse, ReferenceGenome};
