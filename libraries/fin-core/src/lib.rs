//! Finance Client Core
//!
//! Platform-agnostic types, traits and error handling shared by the mobile
//! client and the admin web client.
//!
//! # Architecture
//!
//! The core crate defines:
//! - **Domain Types**: `Session`, `UserRecord`, `Role`, `SettingsRecord`
//! - **Route Guard**: `route(&Session) -> ScreenSet`
//! - **Core Traits**: `AuthApi`, `SettingsApi`, `KeyValueStore`, `Notifier`, `Navigator`
//! - **Error Handling**: Unified `FinError` and `Result` types
//!
//! # Example
//!
//! ```rust
//! use fin_core::{route, ScreenSet, Session, UserRecord};
//!
//! let signed_out = Session::empty();
//! assert_eq!(route(&signed_out), ScreenSet::Unauthenticated);
//!
//! let admin = Session::new(UserRecord::new("Ada", "ada@example.com", "admin"), "jwt");
//! assert_eq!(route(&admin), ScreenSet::AdminDashboard);
//! ```

#![forbid(unsafe_code)]

pub mod error;
pub mod route;
pub mod traits;
pub mod types;

// Re-export commonly used types
pub use error::{FinError, Result};
pub use route::{is_reachable, route, Screen, ScreenSet};
pub use traits::{
    AuthApi, KeyValueStore, Navigator, Notice, NoticeKind, NoticeLevel, Notifier, SettingsApi,
};
pub use types::{InterestRates, Registration, Role, Session, SettingsRecord, UserRecord};
