//! Authentication methods for the finance API.

use crate::client::{error_response, map_send_error};
use crate::error::{Result, ServerClientError};
use crate::types::{LoginRequest, RegisterResponse};
use fin_core::{Registration, Session};
use reqwest::Client;
use tracing::{debug, info, warn};

/// Authentication client for the finance API.
pub struct AuthClient<'a> {
    http: &'a Client,
    base_url: &'a str,
}

impl<'a> AuthClient<'a> {
    pub(crate) fn new(http: &'a Client, base_url: &'a str) -> Self {
        Self { http, base_url }
    }

    /// Login with email and password.
    ///
    /// The whole response body becomes the session, including fields other
    /// than `user` and `token`.
    pub async fn login(&self, email: &str, password: &str) -> Result<Session> {
        let url = format!("{}/auth/login", self.base_url);
        debug!(url = %url, email = %email, "Attempting login");

        let response = self
            .http
            .post(&url)
            .json(&LoginRequest { email, password })
            .send()
            .await
            .map_err(map_send_error)?;

        let status = response.status();

        if status.is_success() {
            let session: Session = response.json().await.map_err(|e| {
                ServerClientError::ParseError(format!("Failed to parse login response: {}", e))
            })?;

            info!(
                email = %email,
                role = %session.user.as_ref().map(|u| u.role.as_str()).unwrap_or(""),
                "Login successful"
            );

            Ok(session)
        } else {
            let err = error_response(response).await;
            warn!(status = %status, error = %err, "Login failed");
            Err(err)
        }
    }

    /// Create an account.
    ///
    /// Does not sign the user in. Returns the server's confirmation message.
    pub async fn register(&self, registration: &Registration) -> Result<Option<String>> {
        let url = format!("{}/auth/register", self.base_url);
        debug!(url = %url, email = %registration.email, "Attempting registration");

        let response = self
            .http
            .post(&url)
            .json(registration)
            .send()
            .await
            .map_err(map_send_error)?;

        let status = response.status();

        if status.is_success() {
            // An empty or non-JSON success body still counts as registered
            let body = response.text().await.map_err(ServerClientError::Request)?;
            let message = serde_json::from_str::<RegisterResponse>(&body)
                .ok()
                .and_then(|r| r.message);

            info!(email = %registration.email, "Registration successful");
            Ok(message)
        } else {
            let err = error_response(response).await;
            warn!(status = %status, error = %err, "Registration failed");
            Err(err)
        }
    }
}
