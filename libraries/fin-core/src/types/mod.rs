//! Domain types shared by the mobile and admin web clients.

mod session;
mod settings;
mod user;

pub use session::Session;
pub use settings::{InterestRates, SettingsRecord};
pub use user::{Role, UserRecord};

use serde::Serialize;

/// Body of `POST /auth/register`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Registration {
    /// Full name
    pub name: String,
    /// Login email
    pub email: String,
    /// Contact phone number
    pub phone: String,
    /// Chosen password
    pub password: String,
}

impl Registration {
    /// Whether any required field is empty
    pub fn has_empty_field(&self) -> bool {
        self.name.is_empty()
            || self.email.is_empty()
            || self.phone.is_empty()
            || self.password.is_empty()
    }
}
