/// Core traits for the finance client
///
/// Remote API, persistent storage and UI side effects sit behind these traits
/// so session and form logic can be driven without a UI framework or network.
use crate::error::Result;
use crate::route::Screen;
use crate::types::{Registration, Session, SettingsRecord};
use async_trait::async_trait;

/// Authentication endpoints of the remote API
#[async_trait]
pub trait AuthApi: Send + Sync {
    /// `POST /auth/login`.
    ///
    /// Returns the whole response body as a session.
    ///
    /// # Errors
    /// Returns `FinError::Server` on a non-success status and
    /// `FinError::Network` when no response arrived
    async fn login(&self, email: &str, password: &str) -> Result<Session>;

    /// `POST /auth/register`.
    ///
    /// Returns the server's `message`, if it sent one.
    ///
    /// # Errors
    /// Same taxonomy as [`AuthApi::login`]
    async fn register(&self, registration: &Registration) -> Result<Option<String>>;
}

/// Admin settings endpoints of the remote API
#[async_trait]
pub trait SettingsApi: Send + Sync {
    /// `GET /api/admin/settings`
    ///
    /// # Errors
    /// Returns an error on HTTP failure or an unexpected body shape
    async fn fetch_settings(&self) -> Result<SettingsRecord>;

    /// `PUT /api/admin/settings` with the whole record
    ///
    /// # Errors
    /// Returns an error on HTTP failure
    async fn update_settings(&self, settings: &SettingsRecord) -> Result<()>;
}

/// On-device key-value storage that survives restarts
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Read the value under `key`
    ///
    /// # Errors
    /// Returns `FinError::Storage` if the backend fails
    async fn get(&self, key: &str) -> Result<Option<String>>;

    /// Write `value` under `key`, replacing any previous value
    ///
    /// # Errors
    /// Returns `FinError::Storage` if the backend fails
    async fn set(&self, key: &str, value: &str) -> Result<()>;

    /// Delete `key`; deleting a missing key is not an error
    ///
    /// # Errors
    /// Returns `FinError::Storage` if the backend fails
    async fn remove(&self, key: &str) -> Result<()>;
}

/// How a notice should be presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    /// Transient, non-blocking message
    Toast,
    /// Modal platform alert
    Alert,
}

/// Severity of a notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    /// Operation succeeded
    Success,
    /// User must fix something
    Warning,
    /// Operation failed
    Error,
}

/// A user-facing message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    /// Presentation style
    pub kind: NoticeKind,
    /// Severity
    pub level: NoticeLevel,
    /// Text to show
    pub message: String,
}

impl Notice {
    /// Toast notice
    pub fn toast(level: NoticeLevel, message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Toast,
            level,
            message: message.into(),
        }
    }

    /// Alert notice
    pub fn alert(level: NoticeLevel, message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Alert,
            level,
            message: message.into(),
        }
    }
}

/// Renders notices (toast library, platform alert)
pub trait Notifier: Send + Sync {
    /// Show `notice`
    fn notify(&self, notice: Notice);
}

/// Performs screen transitions
pub trait Navigator: Send + Sync {
    /// Move to `screen`
    fn navigate(&self, screen: Screen);
}
