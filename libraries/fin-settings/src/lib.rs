//! Finance Admin Settings
//!
//! Controller for the admin web settings page: load the system settings,
//! edit them by field path, save them back.
//!
//! # Example
//!
//! ```ignore
//! use fin_settings::{Banner, SettingsForm};
//!
//! let form = SettingsForm::new(api);
//! form.load().await;
//!
//! form.set_field("interestRates.home", "9.25").await?;
//! form.set_field("autoApproveLoans", true).await?;
//! form.submit().await?;
//!
//! assert!(matches!(form.banner().await, Some(Banner::Success(_))));
//! ```

mod field;
mod form;

pub use field::{parse_float, parse_int, FieldInput, LoanKind, SettingsField};
pub use form::{Banner, SettingsForm, SAVE_SUCCESS, SUCCESS_BANNER_DURATION};
