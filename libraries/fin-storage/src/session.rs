//! Persisted session record
//!
//! The store holds a serialized mirror of the session under a single key. The
//! in-memory session holder stays the authority.

use fin_core::{KeyValueStore, Result, Session};
use tracing::{debug, warn};

/// Key the session record lives under
pub const SESSION_KEY: &str = "session";

/// Read the persisted session, if a usable record exists.
///
/// Storage failures and malformed records both yield `None`; they are logged
/// and otherwise swallowed. There is no retry.
pub async fn read_session(store: &dyn KeyValueStore) -> Option<Session> {
    let raw = match store.get(SESSION_KEY).await {
        Ok(Some(raw)) => raw,
        Ok(None) => {
            debug!("No persisted session");
            return None;
        }
        Err(e) => {
            warn!(error = %e, "Failed to read persisted session");
            return None;
        }
    };

    match serde_json::from_str::<Session>(&raw) {
        Ok(session) => {
            debug!(
                authenticated = session.is_authenticated(),
                "Restored persisted session"
            );
            Some(session)
        }
        Err(e) => {
            warn!(error = %e, "Ignoring malformed persisted session");
            None
        }
    }
}

/// Read the persisted session, falling back to the empty session.
pub async fn load_session(store: &dyn KeyValueStore) -> Session {
    read_session(store).await.unwrap_or_default()
}

/// Write `session` as the persisted record, replacing any previous one.
///
/// # Errors
/// Returns an error if serialization or the store write fails
pub async fn save_session(store: &dyn KeyValueStore, session: &Session) -> Result<()> {
    let raw = serde_json::to_string(session)?;
    store.set(SESSION_KEY, &raw).await
}

/// Remove the persisted record.
///
/// # Errors
/// Returns an error if the store delete fails
pub async fn clear_session(store: &dyn KeyValueStore) -> Result<()> {
    store.remove(SESSION_KEY).await
}
