//! Admin settings methods for the finance API.

use crate::client::{error_response, map_send_error};
use crate::error::{Result, ServerClientError};
use crate::types::SettingsEnvelope;
use fin_core::SettingsRecord;
use reqwest::{Client, RequestBuilder};
use tracing::{debug, info};

/// Client for `/api/admin/settings`.
pub struct SettingsClient<'a> {
    http: &'a Client,
    base_url: &'a str,
    access_token: Option<&'a str>,
}

impl<'a> SettingsClient<'a> {
    pub(crate) fn new(http: &'a Client, base_url: &'a str, access_token: Option<&'a str>) -> Self {
        Self {
            http,
            base_url,
            access_token,
        }
    }

    fn url(&self) -> String {
        format!("{}/api/admin/settings", self.base_url)
    }

    fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        match self.access_token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    /// Fetch the full settings record.
    pub async fn get_settings(&self) -> Result<SettingsRecord> {
        let url = self.url();
        debug!(url = %url, "Fetching settings");

        let response = self
            .authorize(self.http.get(&url))
            .send()
            .await
            .map_err(map_send_error)?;

        if !response.status().is_success() {
            return Err(error_response(response).await);
        }

        let envelope: SettingsEnvelope = response.json().await.map_err(|e| {
            ServerClientError::ParseError(format!("Failed to parse settings: {}", e))
        })?;

        Ok(envelope.data.settings)
    }

    /// Replace the server's settings with `settings`.
    ///
    /// The response body is ignored beyond its status.
    pub async fn update_settings(&self, settings: &SettingsRecord) -> Result<()> {
        let url = self.url();
        debug!(url = %url, "Saving settings");

        let response = self
            .authorize(self.http.put(&url))
            .json(settings)
            .send()
            .await
            .map_err(map_send_error)?;

        if response.status().is_success() {
            info!(system_name = %settings.system_name, "Settings saved");
            Ok(())
        } else {
            Err(error_response(response).await)
        }
    }
}
