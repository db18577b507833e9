/// Session domain type
use super::user::UserRecord;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// The client's current authentication identity and bearer token.
///
/// `user` is `None` exactly when nobody is signed in. A successful login
/// stores the whole response body as the session, so anything else the server
/// returned alongside `user` and `token` (e.g. `message`) lands in `extra`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Session {
    /// Signed-in user, serialized as `null` when absent
    #[serde(default)]
    pub user: Option<UserRecord>,

    /// Bearer token, empty when absent
    #[serde(default, deserialize_with = "null_as_empty")]
    pub token: String,

    /// Remaining fields of the login response
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Session {
    /// The signed-out session: `{ user: null, token: "" }`
    pub fn empty() -> Self {
        Self::default()
    }

    /// Session for a user holding a token
    pub fn new(user: UserRecord, token: impl Into<String>) -> Self {
        Self {
            user: Some(user),
            token: token.into(),
            extra: Map::new(),
        }
    }

    /// Both a user and a non-empty token are present
    pub fn is_authenticated(&self) -> bool {
        self.user.is_some() && !self.token.is_empty()
    }

    /// Bearer token, if any
    pub fn bearer(&self) -> Option<&str> {
        if self.token.is_empty() {
            None
        } else {
            Some(&self.token)
        }
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_empty_session_wire_shape() {
        let value = serde_json::to_value(Session::empty()).unwrap();
        assert_eq!(value, json!({ "user": null, "token": "" }));
    }

    #[test]
    fn test_whole_login_body_is_kept() {
        let body = json!({
            "user": { "name": "Ada", "email": "ada@example.com", "role": "admin" },
            "token": "jwt-abc",
            "message": "Login successful"
        });

        let session: Session = serde_json::from_value(body.clone()).unwrap();
        assert!(session.is_authenticated());
        assert_eq!(session.extra.get("message"), Some(&json!("Login successful")));
        assert_eq!(serde_json::to_value(&session).unwrap(), body);
    }

    #[test]
    fn test_null_token_reads_as_empty() {
        let session: Session = serde_json::from_value(json!({
            "user": { "name": "Ada" },
            "token": null
        }))
        .unwrap();

        assert!(session.token.is_empty());
        assert!(!session.is_authenticated());
        assert_eq!(session.bearer(), None);
    }
}
