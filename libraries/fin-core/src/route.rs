//! Route guard
//!
//! Decides which top-level screens are reachable for a given session. This is
//! a pure function of the session and is re-evaluated whenever the session
//! changes; nothing about the result is stored.

use crate::types::Session;
use serde::{Deserialize, Serialize};

/// A navigation target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Screen {
    /// Sign-in form
    Login,
    /// Account creation form
    Register,
    /// Standard user dashboard
    Dashboard,
    /// Administrator dashboard
    AdminDashboard,
    /// Admin system settings page
    AdminSettings,
}

/// The set of screens a session may reach.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScreenSet {
    /// No user or no token: login and registration only
    Unauthenticated,
    /// Signed in with the admin role
    AdminDashboard,
    /// Signed in with any other role
    UserDashboard,
}

impl ScreenSet {
    /// Screens reachable from this set
    pub fn screens(self) -> &'static [Screen] {
        match self {
            Self::Unauthenticated => &[Screen::Login, Screen::Register],
            Self::AdminDashboard => &[Screen::AdminDashboard, Screen::AdminSettings],
            Self::UserDashboard => &[Screen::Dashboard],
        }
    }

    /// Landing screen for this set
    pub fn home(self) -> Screen {
        self.screens()[0]
    }

    /// Whether `screen` belongs to this set
    pub fn contains(self, screen: Screen) -> bool {
        self.screens().contains(&screen)
    }
}

/// Select the reachable screen set for `session`.
///
/// A session is authenticated only when it has both a user and a non-empty
/// token. Authenticated sessions branch once on the admin role.
pub fn route(session: &Session) -> ScreenSet {
    match &session.user {
        Some(user) if !session.token.is_empty() => {
            if user.role.is_admin() {
                ScreenSet::AdminDashboard
            } else {
                ScreenSet::UserDashboard
            }
        }
        _ => ScreenSet::Unauthenticated,
    }
}

/// Whether `screen` is reachable for `session`.
pub fn is_reachable(session: &Session, screen: Screen) -> bool {
    route(session).contains(screen)
}
