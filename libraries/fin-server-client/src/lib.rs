//! Finance API Client
//!
//! HTTP client library for the finance REST API.
//!
//! # Features
//!
//! - **Authentication**: login with email/password, account registration
//! - **Admin settings**: fetch and save the system settings record
//!
//! The client implements the [`fin_core::AuthApi`] and
//! [`fin_core::SettingsApi`] traits so session and form logic can run against
//! it or against a test double.
//!
//! # Example
//!
//! ```ignore
//! use fin_server_client::{ClientConfig, FinServerClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = FinServerClient::new(ClientConfig::new("https://api.example.com"))?;
//!
//!     let session = client.login("ada@example.com", "secret").await?;
//!     println!("Token: {}", session.token);
//!
//!     let settings = client.get_settings().await?;
//!     println!("Currency: {}", settings.currency);
//!
//!     Ok(())
//! }
//! ```

mod auth;
mod client;
mod error;
mod settings;
mod types;

pub use client::FinServerClient;
pub use error::{Result, ServerClientError};
pub use types::{ClientConfig, DEFAULT_CONNECT_TIMEOUT, DEFAULT_TIMEOUT};

// Re-export sub-clients for direct use if needed
pub use auth::AuthClient;
pub use settings::SettingsClient;
