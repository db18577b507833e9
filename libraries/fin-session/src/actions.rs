//! Auth actions
//!
//! Login, registration and logout as the screens trigger them: validate the
//! form, call the API, update the session holder and the persisted mirror,
//! tell the user, move to the next screen.

use crate::holder::SessionHolder;
use fin_core::{
    route, AuthApi, FinError, KeyValueStore, Navigator, Notice, NoticeLevel, Notifier,
    Registration, Result, Screen, Session,
};
use fin_storage::{clear_session, save_session};
use std::sync::Arc;
use tracing::{info, warn};

/// Shown when a required auth field is empty
pub const FILL_ALL_FIELDS: &str = "Please fill all fields";

/// Fallback confirmation after a successful login
pub const LOGIN_SUCCESS: &str = "Login successful";

/// Fallback confirmation after a successful registration
pub const REGISTER_SUCCESS: &str = "Registration successful";

/// Confirmation after logout
pub const LOGOUT_SUCCESS: &str = "Logged out successfully";

/// Auth flows bound to one session holder.
///
/// Login and logout report through toasts; registration reports through
/// alerts.
#[derive(Clone)]
pub struct AuthActions {
    api: Arc<dyn AuthApi>,
    holder: SessionHolder,
    store: Arc<dyn KeyValueStore>,
    notifier: Arc<dyn Notifier>,
    navigator: Arc<dyn Navigator>,
}

impl AuthActions {
    /// Bind the auth flows to their collaborators
    pub fn new(
        api: Arc<dyn AuthApi>,
        holder: SessionHolder,
        store: Arc<dyn KeyValueStore>,
        notifier: Arc<dyn Notifier>,
        navigator: Arc<dyn Navigator>,
    ) -> Self {
        Self {
            api,
            holder,
            store,
            notifier,
            navigator,
        }
    }

    /// The session holder these actions write to
    pub fn holder(&self) -> &SessionHolder {
        &self.holder
    }

    /// Sign in.
    ///
    /// Empty fields are rejected before any network call. On success the
    /// whole response body becomes the session, is persisted, and the user
    /// lands on the dashboard for their role. A failed persist is logged and
    /// does not undo the in-memory sign-in.
    ///
    /// # Errors
    /// `FinError::Validation` for empty fields, otherwise the API error
    pub async fn login(&self, email: &str, password: &str) -> Result<Session> {
        if email.is_empty() || password.is_empty() {
            self.notifier
                .notify(Notice::toast(NoticeLevel::Warning, FILL_ALL_FIELDS));
            return Err(FinError::validation(FILL_ALL_FIELDS));
        }

        let session = match self.api.login(email, password).await {
            Ok(session) => session,
            Err(e) => {
                warn!(email = %email, error = %e, "Login failed");
                self.notifier
                    .notify(Notice::toast(NoticeLevel::Error, e.user_message()));
                return Err(e);
            }
        };

        self.holder.set_session(session.clone());

        if let Err(e) = save_session(self.store.as_ref(), &session).await {
            warn!(error = %e, "Failed to persist session");
        }

        let message = session
            .extra
            .get("message")
            .and_then(|m| m.as_str())
            .unwrap_or(LOGIN_SUCCESS)
            .to_string();
        self.notifier
            .notify(Notice::toast(NoticeLevel::Success, message));

        let destination = route(&session).home();
        info!(email = %email, destination = ?destination, "Signed in");
        self.navigator.navigate(destination);

        Ok(session)
    }

    /// Create an account, then send the user to the login screen.
    ///
    /// Does not sign in. Empty fields are rejected before any network call.
    ///
    /// # Errors
    /// `FinError::Validation` for empty fields, otherwise the API error
    pub async fn register(
        &self,
        name: &str,
        email: &str,
        phone: &str,
        password: &str,
    ) -> Result<()> {
        let registration = Registration {
            name: name.to_string(),
            email: email.to_string(),
            phone: phone.to_string(),
            password: password.to_string(),
        };

        if registration.has_empty_field() {
            self.notifier
                .notify(Notice::alert(NoticeLevel::Warning, FILL_ALL_FIELDS));
            return Err(FinError::validation(FILL_ALL_FIELDS));
        }

        match self.api.register(&registration).await {
            Ok(message) => {
                info!(email = %email, "Registered");
                self.notifier.notify(Notice::alert(
                    NoticeLevel::Success,
                    message.unwrap_or_else(|| REGISTER_SUCCESS.to_string()),
                ));
                self.navigator.navigate(Screen::Login);
                Ok(())
            }
            Err(e) => {
                warn!(email = %email, error = %e, "Registration failed");
                self.notifier
                    .notify(Notice::alert(NoticeLevel::Error, e.user_message()));
                Err(e)
            }
        }
    }

    /// Sign out unconditionally.
    ///
    /// Clears the holder, removes the persisted record, confirms and returns
    /// to the login screen. A failed removal is logged; the remaining steps
    /// still run.
    pub async fn logout(&self) {
        self.holder.clear();

        if let Err(e) = clear_session(self.store.as_ref()).await {
            warn!(error = %e, "Failed to remove persisted session");
        }

        info!("Signed out");
        self.notifier
            .notify(Notice::toast(NoticeLevel::Success, LOGOUT_SUCCESS));
        self.navigator.navigate(Screen::Login);
    }
}
