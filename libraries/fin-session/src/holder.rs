//! Session state holder
//!
//! One injectable handle owns the in-memory session. Components read a
//! snapshot with [`SessionHolder::state`] or watch for changes with
//! [`SessionHolder::subscribe`]; writers replace the whole session at once.

use fin_core::{route, KeyValueStore, ScreenSet, Session};
use fin_storage::read_session;
use std::sync::Arc;
use tokio::sync::watch;
use tracing::debug;

/// Snapshot of the session plus the bootstrap flag.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionState {
    /// Current session
    pub session: Session,
    /// True until the persisted session has been read
    pub loading: bool,
}

/// Shared owner of the current session.
///
/// Clones are handles to the same state.
#[derive(Debug, Clone)]
pub struct SessionHolder {
    tx: Arc<watch::Sender<SessionState>>,
}

impl SessionHolder {
    /// Create a holder with the empty session, still loading.
    pub fn new() -> Self {
        let (tx, _rx) = watch::channel(SessionState {
            session: Session::empty(),
            loading: true,
        });
        Self { tx: Arc::new(tx) }
    }

    /// Create a holder that is already bootstrapped with `session`.
    pub fn with_session(session: Session) -> Self {
        let holder = Self::new();
        holder.tx.send_replace(SessionState {
            session,
            loading: false,
        });
        holder
    }

    /// Restore the persisted session and finish loading.
    ///
    /// `loading` stays true until the read resolves. A stored record is
    /// merged into the current session; a missing or malformed record leaves
    /// the current session untouched.
    pub async fn bootstrap(&self, store: &dyn KeyValueStore) {
        let restored = read_session(store).await;
        debug!(restored = restored.is_some(), "Session bootstrap complete");

        self.tx.send_modify(|state| {
            if let Some(restored) = restored {
                state.session.user = restored.user;
                state.session.token = restored.token;
                state.session.extra.extend(restored.extra);
            }
            state.loading = false;
        });
    }

    /// Current state snapshot
    pub fn state(&self) -> SessionState {
        self.tx.borrow().clone()
    }

    /// Current session snapshot
    pub fn session(&self) -> Session {
        self.tx.borrow().session.clone()
    }

    /// Whether the bootstrap read is still pending
    pub fn is_loading(&self) -> bool {
        self.tx.borrow().loading
    }

    /// Route guard evaluated against the current session
    pub fn screen_set(&self) -> ScreenSet {
        route(&self.tx.borrow().session)
    }

    /// Replace the whole session and notify subscribers.
    pub fn set_session(&self, session: Session) {
        self.tx.send_modify(|state| state.session = session);
    }

    /// Reset to `{ user: null, token: "" }`.
    pub fn clear(&self) {
        self.set_session(Session::empty());
    }

    /// Watch for state changes.
    ///
    /// The receiver starts with the current state marked as seen.
    pub fn subscribe(&self) -> watch::Receiver<SessionState> {
        self.tx.subscribe()
    }
}

impl Default for SessionHolder {
    fn default() -> Self {
        Self::new()
    }
}
