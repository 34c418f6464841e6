//! Error type for API calls.

/// Failure modes of a request made through [`crate::net::api::ApiClient`].
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// Client configuration is missing or unusable.
    #[error("config error: {0}")]
    Config(String),

    /// The request never reached the server.
    #[error("network error: {0}")]
    Network(String),

    /// The request was aborted by the client timeout.
    #[error("timeout: {0}")]
    Timeout(String),

    /// The server answered with a non-success status.
    #[error("request failed ({status}): {message}")]
    Http { status: u16, message: String },

    /// The response body could not be decoded.
    #[error("response error: {0}")]
    Parse(String),

    /// The request body could not be encoded or built.
    #[error("request error: {0}")]
    Serialization(String),

    /// HTTP calls are browser-only; server renders get this instead.
    #[error("not available on server")]
    Unavailable,
}

impl ApiError {
    /// Whether the server rejected the bearer token.
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Http { status: 401, .. })
    }
}
