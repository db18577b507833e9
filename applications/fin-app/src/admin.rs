//! Admin web client shell
//!
//! Admin sign-in plus the system settings page. The settings page is only
//! reachable from an admin session.

use crate::context::ClientContext;
use crate::effects::ScreenTracker;
use fin_core::{is_reachable, FinError, Navigator, Notifier, Result, Screen, ScreenSet, Session};
use fin_session::AuthActions;
use fin_settings::SettingsForm;
use std::sync::Arc;
use tracing::warn;

/// Admin web client: auth flows plus the settings form.
#[derive(Clone)]
pub struct AdminWebClient {
    context: ClientContext,
    actions: AuthActions,
    tracker: ScreenTracker,
    form: SettingsForm,
}

impl AdminWebClient {
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
        let form = SettingsForm::new(Arc::new(context.client.clone()));

        Self {
            context,
            actions,
            tracker,
            form,
        }
    }

    pub fn screen_set(&self) -> ScreenSet {
        self.context.screen_set()
    }

    pub fn current_screen(&self) -> Option<Screen> {
        self.tracker.current()
    }

    pub async fn login(&self, email: &str, password: &str) -> Result<Session> {
        self.actions.login(email, password).await
    }

    pub async fn logout(&self) {
        self.actions.logout().await;
        self.context.client.logout().await;
    }

    /// Enter the settings page: check the guard, then fetch the settings.
    ///
    /// # Errors
    /// `FinError::Unreachable` unless the session is an admin session
    pub async fn open_settings(&self) -> Result<&SettingsForm> {
        if !is_reachable(&self.context.holder.session(), Screen::AdminSettings) {
            warn!(screens = ?self.screen_set(), "Settings page refused");
            return Err(FinError::Unreachable(Screen::AdminSettings));
        }

        self.tracker.navigate(Screen::AdminSettings);
        self.form.load().await;
        Ok(&self.form)
    }
}
