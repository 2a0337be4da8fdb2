mod http;

pub use http::{ClientConfig, HttpGraphQlClient, DEFAULT_ENDPOINT};
