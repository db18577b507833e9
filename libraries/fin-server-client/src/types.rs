//! Types for finance API requests and responses.

use fin_core::SettingsRecord;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Default whole-request timeout
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Default connect timeout
pub const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

/// Configuration for connecting to the finance API.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the API (e.g., "https://api.example.com")
    pub url: String,
    /// Bearer token sent with admin requests (if authenticated)
    pub access_token: Option<String>,
    /// Whole-request timeout
    pub timeout: Duration,
    /// Connection establishment timeout
    pub connect_timeout: Duration,
}

impl ClientConfig {
    /// Create a config with just the URL and default timeouts.
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            access_token: None,
            timeout: DEFAULT_TIMEOUT,
            connect_timeout: DEFAULT_CONNECT_TIMEOUT,
        }
    }

    /// Attach a bearer token.
    pub fn with_token(mut self, access_token: impl Into<String>) -> Self {
        self.access_token = Some(access_token.into());
        self
    }

    /// Override both timeouts.
    pub fn with_timeouts(mut self, timeout: Duration, connect_timeout: Duration) -> Self {
        self.timeout = timeout;
        self.connect_timeout = connect_timeout;
        self
    }
}

// =============================================================================
// Authentication Types
// =============================================================================

/// Request body for login endpoint.
#[derive(Debug, Serialize)]
pub struct LoginRequest<'a> {
    pub email: &'a str,
    pub password: &'a str,
}

/// Response from successful registration.
#[derive(Debug, Deserialize)]
pub struct RegisterResponse {
    #[serde(default)]
    pub message: Option<String>,
}

// =============================================================================
// Settings Types
// =============================================================================

/// `GET /api/admin/settings` response envelope.
#[derive(Debug, Deserialize)]
pub struct SettingsEnvelope {
    pub data: SettingsData,
}

/// Inner `data` object of the settings envelope.
#[derive(Debug, Deserialize)]
pub struct SettingsData {
    pub settings: SettingsRecord,
}

// =============================================================================
// Error Types
// =============================================================================

/// API error response body. Only `message` is read.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiError {
    #[serde(default)]
    pub message: Option<String>,
}
