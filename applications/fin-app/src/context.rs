//! Shared client wiring
//!
//! Both front ends talk to the same API, keep the session in the same kind
//! of store and share one session holder per process.

use crate::config::AppConfig;
use fin_core::{KeyValueStore, Result, ScreenSet};
use fin_server_client::{ClientConfig, FinServerClient};
use fin_session::SessionHolder;
use fin_storage::FileStore;
use std::sync::Arc;
use tracing::info;

/// API client, persistent store and session holder for one process.
#[derive(Clone)]
pub struct ClientContext {
    pub client: FinServerClient,
    pub store: Arc<dyn KeyValueStore>,
    pub holder: SessionHolder,
}

impl ClientContext {
    /// Build from configuration with the on-disk store under `storage.data_dir`.
    pub async fn from_config(config: &AppConfig) -> Result<Self> {
        let store = Arc::new(FileStore::new(&config.storage.data_dir));
        Self::with_store(config, store).await
    }

    /// Build from configuration with a caller-provided store, then restore the
    /// persisted session.
    ///
    /// The restored token is handed to the API client so admin requests are
    /// authorized straight away.
    pub async fn with_store(config: &AppConfig, store: Arc<dyn KeyValueStore>) -> Result<Self> {
        config.validate()?;

        let client = FinServerClient::new(
            ClientConfig::new(&config.api.base_url)
                .with_timeouts(config.timeout(), config.connect_timeout()),
        )?;

        let holder = SessionHolder::new();
        holder.bootstrap(store.as_ref()).await;
        client
            .set_token(holder.session().bearer().map(str::to_string))
            .await;

        info!(
            api = %config.api.base_url,
            screens = ?holder.screen_set(),
            "Client context ready"
        );

        Ok(Self {
            client,
            store,
            holder,
        })
    }

    /// Route guard for the current session
    pub fn screen_set(&self) -> ScreenSet {
        self.holder.screen_set()
    }
}
