/// Core error types for the finance client
use crate::route::Screen;
use thiserror::Error;

/// Result type alias using `FinError`
pub type Result<T> = std::result::Result<T, FinError>;

/// Message shown when a failure carries no server-provided text
pub const GENERIC_FAILURE_MESSAGE: &str = "Something went wrong. Please try again.";

/// Message shown when the server could not be reached at all
pub const NETWORK_FAILURE_MESSAGE: &str = "Unable to reach the server. Check your connection.";

/// Core error type for the finance client
#[derive(Error, Debug)]
pub enum FinError {
    /// Required input missing or malformed, caught before any network call
    #[error("Validation error: {0}")]
    Validation(String),

    /// Server answered with a non-success status
    #[error("Server error ({status}): {}", message.as_deref().unwrap_or("no message"))]
    Server {
        /// HTTP status code
        status: u16,
        /// `message` field of the response body, if it had one
        message: Option<String>,
    },

    /// No usable response (connection refused, timeout, DNS failure)
    #[error("Network error: {0}")]
    Network(String),

    /// Server answered with a success status but a body of the wrong shape
    #[error("Unexpected response: {0}")]
    UnexpectedResponse(String),

    /// Persistent store failure
    #[error("Storage error: {0}")]
    Storage(String),

    /// Invalid input that is not a user validation failure (e.g. unknown form field)
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// The route guard does not allow the current session on this screen
    #[error("Screen {0:?} is not reachable for the current session")]
    Unreachable(Screen),

    /// A settings submit is already pending
    #[error("A submit is already in progress")]
    SubmitInFlight,

    /// Configuration could not be loaded or is invalid
    #[error("Configuration error: {0}")]
    Config(String),

    /// Serialization errors
    #[error(transparent)]
    Serialization(#[from] serde_json::Error),
}

impl FinError {
    /// Create a validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Create a storage error
    pub fn storage(msg: impl Into<String>) -> Self {
        Self::Storage(msg.into())
    }

    /// Create an invalid input error
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    /// Text suitable for a toast or alert.
    ///
    /// Server errors surface the server's own message when present.
    pub fn user_message(&self) -> String {
        match self {
            Self::Validation(msg) => msg.clone(),
            Self::Server {
                message: Some(msg), ..
            } => msg.clone(),
            Self::Server { message: None, .. } => GENERIC_FAILURE_MESSAGE.to_string(),
            Self::Network(_) => NETWORK_FAILURE_MESSAGE.to_string(),
            Self::UnexpectedResponse(_) => GENERIC_FAILURE_MESSAGE.to_string(),
            other => other.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_message_prefers_server_text() {
        let err = FinError::Server {
            status: 401,
            message: Some("Invalid credentials".to_string()),
        };
        assert_eq!(err.user_message(), "Invalid credentials");
    }

    #[test]
    fn test_user_message_falls_back_without_body() {
        let err = FinError::Server {
            status: 500,
            message: None,
        };
        assert_eq!(err.user_message(), GENERIC_FAILURE_MESSAGE);
        assert_eq!(
            FinError::Network("connection refused".into()).user_message(),
            NETWORK_FAILURE_MESSAGE
        );
    }

    #[test]
    fn test_display_includes_status() {
        let err = FinError::Server {
            status: 503,
            message: None,
        };
        assert_eq!(err.to_string(), "Server error (503): no message");
    }
}
