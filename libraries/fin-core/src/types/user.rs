/// User domain type
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

/// Account role as reported by the server.
///
/// Only `"admin"` is meaningful on the client; every other string is kept
/// verbatim so it round-trips through the persisted session.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Role {
    /// Administrator, routed to the admin dashboard
    Admin,
    /// Any other role string (including empty)
    Standard(String),
}

impl Role {
    /// Wire value of the admin role
    pub const ADMIN: &'static str = "admin";

    /// Whether this role selects the admin dashboard
    pub fn is_admin(&self) -> bool {
        matches!(self, Self::Admin)
    }

    /// Role as its wire string
    pub fn as_str(&self) -> &str {
        match self {
            Self::Admin => Self::ADMIN,
            Self::Standard(s) => s,
        }
    }
}

impl Default for Role {
    fn default() -> Self {
        Self::Standard(String::new())
    }
}

impl From<String> for Role {
    fn from(s: String) -> Self {
        if s == Self::ADMIN {
            Self::Admin
        } else {
            Self::Standard(s)
        }
    }
}

impl From<&str> for Role {
    fn from(s: &str) -> Self {
        Self::from(s.to_string())
    }
}

impl From<Role> for String {
    fn from(role: Role) -> Self {
        match role {
            Role::Admin => Role::ADMIN.to_string(),
            Role::Standard(s) => s,
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Authenticated user as returned by the login endpoint.
///
/// Fields beyond `name`, `email` and `role` are opaque to the client and kept
/// in `extra`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserRecord {
    /// Display name
    #[serde(default)]
    pub name: String,

    /// Login email
    #[serde(default)]
    pub email: String,

    /// Account role
    #[serde(default)]
    pub role: Role,

    /// Any other fields the server sent
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl UserRecord {
    /// Create a user record with the given identity and role
    pub fn new(name: impl Into<String>, email: impl Into<String>, role: impl Into<Role>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            role: role.into(),
            extra: Map::new(),
        }
    }
}
