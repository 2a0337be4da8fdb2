/// Core error type for the gnomAD MCP server.
///
/// The `Display` text of every variant is what callers see after the
/// `Error: ` prefix, so the messages are part of the tool interface.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("{0}")]
    InvalidArguments(String),

    #[error("Unknown tool: {0}")]
    UnknownTool(String),

    #[error("HTTP error! status: {status}")]
    Http { status: u16 },

    #[error("request failed: {0}")]
    Transport(String),

    #[error("GraphQL errors: {}", .0.join("; "))]
    GraphQl(Vec<String>),

    #[error("invalid response body: {0}")]
    Decode(String),
}

impl Error {
    /// Shorthand for an argument validation failure.
    pub fn invalid(message: impl Into<String>) -> Self {
        Self::InvalidArguments(message.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn graphql_errors_are_semicolon_joined() {
        let err = Error::GraphQl(vec!["A".to_string(), "B".to_string()]);
        assert_eq!(err.to_string(), "GraphQL errors: A; B");
    }

    #[test]
    fn http_error_carries_status() {
        let err = Error::Http { status: 503 };
        assert_eq!(err.to_string(), "HTTP error! status: 503");
    }

    #[test]
    fn unknown_tool_names_the_tool() {
        let err = Error::UnknownTool("frobnicate".to_string());
        assert_eq!(err.to_string(), "Unknown tool: frobnicate");
    }
}
