use http::StatusCode;
use thiserror::Error;

/// Errors surfaced by the adapter
#[derive(Debug, Error)]
pub enum AdapterError {
    /// Estimated input size exceeds the configured budget
    ///
    /// Raised before any upstream call; never retried.
    #[error("estimated input of {input_tokens} tokens exceeds the {max_tokens} token budget")]
    TokenBudgetExceeded {
        /// Heuristic estimate of the input size
        input_tokens: u64,
        /// Configured budget the estimate was checked against
        max_tokens: u64,
    },

    /// Client sent a malformed or invalid request
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// Upstream provider returned an error
    #[error("upstream error: {0}")]
    Upstream(String),

    /// Error during streaming transport
    #[error("streaming error: {0}")]
    Streaming(String),

    /// Unexpected internal error
    #[error("internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl AdapterError {
    /// HTTP status code for this error
    pub const fn status_code(&self) -> StatusCode {
        match self {
            Self::TokenBudgetExceeded { .. } => StatusCode::PAYLOAD_TOO_LARGE,
            Self::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            Self::Upstream(_) => StatusCode::BAD_GATEWAY,
            Self::Streaming(_) | Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Machine-readable error type (e.g. `request_too_large_error`)
    pub const fn error_type(&self) -> &'static str {
        match self {
            Self::TokenBudgetExceeded { .. } => "request_too_large_error",
            Self::InvalidRequest(_) => "invalid_request_error",
            Self::Upstream(_) => "upstream_error",
            Self::Streaming(_) => "streaming_error",
            Self::Internal(_) => "internal_error",
        }
    }

    /// Message safe to expose to API consumers
    pub fn client_message(&self) -> String {
        match self {
            Self::Internal(_) => "an internal error occurred".to_owned(),
            other => other.to_string(),
        }
    }
}
