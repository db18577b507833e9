//! Finance Client Session
//!
//! Client-side session lifecycle shared by the mobile and admin web clients.
//!
//! - [`SessionHolder`]: the single owner of the in-memory session, with
//!   snapshot reads, whole-session replacement and change subscription
//! - [`AuthActions`]: login, registration and logout flows that drive the
//!   holder, the persisted mirror and the UI side effects
//!
//! # Example
//!
//! ```ignore
//! use fin_session::{AuthActions, SessionHolder};
//!
//! let holder = SessionHolder::new();
//! holder.bootstrap(store.as_ref()).await;
//!
//! let actions = AuthActions::new(api, holder.clone(), store, notifier, navigator);
//! actions.login("ada@example.com", "secret").await?;
//! println!("Now on {:?}", holder.screen_set());
//! ```

mod actions;
mod holder;

pub use actions::{AuthActions, FILL_ALL_FIELDS, LOGIN_SUCCESS, LOGOUT_SUCCESS, REGISTER_SUCCESS};
pub use holder::{SessionHolder, SessionState};
