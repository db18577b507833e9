//! Error types for the finance API client.

use fin_core::FinError;
use thiserror::Error;

/// Errors that can occur when talking to the finance API.
#[derive(Error, Debug)]
pub enum ServerClientError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Server returned an error response
    #[error("Server error ({status}): {}", message.as_deref().unwrap_or("no message"))]
    ServerError {
        status: u16,
        /// `message` field of the error body, when the body had one
        message: Option<String>,
    },

    /// Invalid server URL
    #[error("Invalid server URL: {0}")]
    InvalidUrl(String),

    /// Failed to parse server response
    #[error("Failed to parse response: {0}")]
    ParseError(String),

    /// Server is offline or unreachable
    #[error("Server unreachable: {0}")]
    ServerUnreachable(String),
}

/// Result type for server client operations.
pub type Result<T> = std::result::Result<T, ServerClientError>;

impl From<ServerClientError> for FinError {
    fn from(err: ServerClientError) -> Self {
        match err {
            ServerClientError::ServerError { status, message } => {
                FinError::Server { status, message }
            }
            ServerClientError::ServerUnreachable(msg) => FinError::Network(msg),
            ServerClientError::Request(e) => FinError::Network(e.to_string()),
            ServerClientError::InvalidUrl(msg) => FinError::Config(msg),
            ServerClientError::ParseError(msg) => FinError::UnexpectedResponse(msg),
        }
    }
}
