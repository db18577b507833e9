//! Finance client applications
//!
//! Wiring for the two front ends:
//! - [`MobileClient`]: login, registration, role-based dashboards
//! - [`AdminWebClient`]: admin sign-in and the system settings page
//!
//! Both are built from an [`AppConfig`] through a shared [`ClientContext`]
//! that owns the API client, the persistent session store and the session
//! holder.

pub mod admin;
pub mod config;
pub mod context;
pub mod effects;
pub mod logging;
pub mod mobile;

pub use admin::AdminWebClient;
pub use config::AppConfig;
pub use context::ClientContext;
pub use effects::{ScreenTracker, TracingNotifier};
pub use mobile::MobileClient;
