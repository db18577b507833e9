//! Main finance API client.

use crate::auth::AuthClient;
use crate::error::{Result, ServerClientError};
use crate::settings::SettingsClient;
use crate::types::{ApiError, ClientConfig};
use async_trait::async_trait;
use fin_core::{AuthApi, Registration, Session, SettingsApi, SettingsRecord};
use reqwest::{Client, Response};
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, info};

/// Main client for the finance API.
///
/// Holds the base URL and, once signed in, the bearer token attached to admin
/// requests. Cloning is cheap and clones share the token.
///
/// # Example
///
/// ```ignore
/// use fin_server_client::{ClientConfig, FinServerClient};
///
/// let client = FinServerClient::new(ClientConfig::new("https://api.example.com"))?;
///
/// let session = client.login("ada@example.com", "secret").await?;
/// println!("Signed in with role {:?}", session.user.map(|u| u.role));
///
/// let settings = client.get_settings().await?;
/// println!("System: {}", settings.system_name);
/// ```
#[derive(Clone)]
pub struct FinServerClient {
    http: Client,
    config: Arc<RwLock<ClientConfig>>,
}

impl FinServerClient {
    /// Create a new client with the given configuration.
    pub fn new(config: ClientConfig) -> Result<Self> {
        if config.url.trim().is_empty() {
            return Err(ServerClientError::InvalidUrl("URL cannot be empty".into()));
        }

        let url = config.url.trim().trim_end_matches('/').to_string();
        let parsed = url::Url::parse(&url)
            .map_err(|e| ServerClientError::InvalidUrl(format!("{}: {}", url, e)))?;
        if parsed.scheme() != "http" && parsed.scheme() != "https" {
            return Err(ServerClientError::InvalidUrl(
                "URL must start with http:// or https://".into(),
            ));
        }

        let http = Client::builder()
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .user_agent(format!("FinClient/{}", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(ServerClientError::Request)?;

        Ok(Self {
            http,
            config: Arc::new(RwLock::new(ClientConfig { url, ..config })),
        })
    }

    /// Get the normalized base URL.
    pub async fn url(&self) -> String {
        self.config.read().await.url.clone()
    }

    /// Current bearer token, if any.
    pub async fn token(&self) -> Option<String> {
        self.config.read().await.access_token.clone()
    }

    /// Set or clear the bearer token (e.g., from a restored session).
    pub async fn set_token(&self, token: Option<String>) {
        let token = token.filter(|t| !t.is_empty());
        self.config.write().await.access_token = token;
    }

    /// Login with email and password.
    ///
    /// On success the session token is kept for subsequent admin requests.
    pub async fn login(&self, email: &str, password: &str) -> Result<Session> {
        let url = self.url().await;

        let session = AuthClient::new(&self.http, &url)
            .login(email, password)
            .await?;

        self.set_token(Some(session.token.clone())).await;
        Ok(session)
    }

    /// Register a new account. Does not sign in.
    pub async fn register(&self, registration: &Registration) -> Result<Option<String>> {
        let url = self.url().await;
        AuthClient::new(&self.http, &url)
            .register(registration)
            .await
    }

    /// Forget the bearer token.
    pub async fn logout(&self) {
        self.set_token(None).await;
        info!("Cleared API token");
    }

    /// Fetch admin settings.
    pub async fn get_settings(&self) -> Result<SettingsRecord> {
        let config = self.config.read().await;
        let url = config.url.clone();
        let token = config.access_token.clone();
        drop(config);

        SettingsClient::new(&self.http, &url, token.as_deref())
            .get_settings()
            .await
    }

    /// Save admin settings.
    pub async fn update_settings(&self, settings: &SettingsRecord) -> Result<()> {
        let config = self.config.read().await;
        let url = config.url.clone();
        let token = config.access_token.clone();
        drop(config);

        SettingsClient::new(&self.http, &url, token.as_deref())
            .update_settings(settings)
            .await
    }
}

#[async_trait]
impl AuthApi for FinServerClient {
    async fn login(&self, email: &str, password: &str) -> fin_core::Result<Session> {
        Ok(FinServerClient::login(self, email, password).await?)
    }

    async fn register(&self, registration: &Registration) -> fin_core::Result<Option<String>> {
        Ok(FinServerClient::register(self, registration).await?)
    }
}

#[async_trait]
impl SettingsApi for FinServerClient {
    async fn fetch_settings(&self) -> fin_core::Result<SettingsRecord> {
        Ok(self.get_settings().await?)
    }

    async fn update_settings(&self, settings: &SettingsRecord) -> fin_core::Result<()> {
        Ok(FinServerClient::update_settings(self, settings).await?)
    }
}

/// Classify a failure to obtain any response.
pub(crate) fn map_send_error(e: reqwest::Error) -> ServerClientError {
    if e.is_connect() || e.is_timeout() {
        ServerClientError::ServerUnreachable(e.to_string())
    } else {
        ServerClientError::Request(e)
    }
}

/// Build the error for a non-success response, reading `message` from the
/// body when it is JSON of the expected shape.
pub(crate) async fn error_response(response: Response) -> ServerClientError {
    let status = response.status().as_u16();
    let body = response.text().await.unwrap_or_default();
    debug!(status, body = %body, "Error response body");

    let message = serde_json::from_str::<ApiError>(&body)
        .ok()
        .and_then(|e| e.message);

    ServerClientError::ServerError { status, message }
}
