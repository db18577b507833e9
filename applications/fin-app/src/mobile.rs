//! Mobile client shell
//!
//! Login, registration and role-based dashboards on top of the shared client
//! context. The screen shown is always the route guard's answer for the
//! current session.

use crate::context::ClientContext;
use crate::effects::ScreenTracker;
use fin_core::{Navigator, Notifier, Result, Screen, ScreenSet, Session};
use fin_session::{AuthActions, SessionHolder};
use std::sync::Arc;

/// Phone client: session state plus auth flows.
#[derive(Clone)]
pub struct MobileClient {
    context: ClientContext,
    actions: AuthActions,
    tracker: ScreenTracker,
}

impl MobileClient {
    /// Wire auth flows to `context`, reporting notices through `notifier`.
    ///
    /// Starts on the landing screen of the restored session.
    pub fn new(context: ClientContext, notifier: Arc<dyn Notifier>) -> Self {
        let tracker = ScreenTracker::new();
        tracker.navigate(context.screen_set().home());

        let actions = AuthActions::new(
            Arc::new(context.client.clone()),
            context.holder.clone(),
            context.store.clone(),
            notifier,
            Arc::new(tracker.clone()),
        );

        Self {
            context,
            actions,
            tracker,
        }
    }

    pub fn holder(&self) -> &SessionHolder {
        &self.context.holder
    }

    /// Route guard for the current session
    pub fn screen_set(&self) -> ScreenSet {
        self.context.screen_set()
    }

    /// Screen most recently navigated to
    pub fn current_screen(&self) -> Option<Screen> {
        self.tracker.current()
    }

    pub fn screens(&self) -> &ScreenTracker {
        &self.tracker
    }

    /// See [`AuthActions::login`]
    pub async fn login(&self, email: &str, password: &str) -> Result<Session> {
        self.actions.login(email, password).await
    }

    /// See [`AuthActions::register`]
    pub async fn register(
        &self,
        name: &str,
        email: &str,
        phone: &str,
        password: &str,
    ) -> Result<()> {
        self.actions.register(name, email, phone, password).await
    }

    /// Sign out and drop the API token.
    pub async fn logout(&self) {
        self.actions.logout().await;
        self.context.client.logout().await;
    }
}
