//! Settings form controller
//!
//! Holds the admin settings being edited. The record is loaded whole, edited
//! field by field and saved whole; the last write wins on both ends.

use crate::field::{FieldInput, SettingsField};
use fin_core::{FinError, Result, SettingsApi, SettingsRecord};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;
use tokio::time::Instant;
use tracing::{debug, error, info};

/// How long the success banner stays visible
pub const SUCCESS_BANNER_DURATION: Duration = Duration::from_secs(3);

/// Text of the success banner
pub const SAVE_SUCCESS: &str = "Settings saved successfully";

/// Banner shown above the form after a submit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Banner {
    /// Save succeeded; hidden after [`SUCCESS_BANNER_DURATION`]
    Success(String),
    /// Save failed; stays until the next submit
    Error(String),
}

#[derive(Debug, Clone)]
enum BannerState {
    Success { shown_at: Instant },
    Error(String),
}

#[derive(Debug)]
struct FormState {
    settings: SettingsRecord,
    banner: Option<BannerState>,
}

/// Clears the in-flight flag when a submit finishes or its future is dropped.
struct SubmitGuard<'a>(&'a AtomicBool);

impl Drop for SubmitGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

/// Controller behind the admin settings page.
///
/// Clones share the same form.
#[derive(Clone)]
pub struct SettingsForm {
    api: Arc<dyn SettingsApi>,
    state: Arc<RwLock<FormState>>,
    submitting: Arc<AtomicBool>,
}

impl SettingsForm {
    /// Create a form showing `SettingsRecord::default()`
    pub fn new(api: Arc<dyn SettingsApi>) -> Self {
        Self {
            api,
            state: Arc::new(RwLock::new(FormState {
                settings: SettingsRecord::default(),
                banner: None,
            })),
            submitting: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Fetch the settings and replace the form wholesale.
    ///
    /// A failure is logged and the current form stays as it is. A response
    /// that arrives after the user started editing overwrites those edits.
    pub async fn load(&self) {
        match self.api.fetch_settings().await {
            Ok(settings) => {
                debug!(system_name = %settings.system_name, "Loaded settings");
                self.state.write().await.settings = settings;
            }
            Err(e) => {
                error!(error = %e, "Failed to load settings");
            }
        }
    }

    /// Current form contents
    pub async fn settings(&self) -> SettingsRecord {
        self.state.read().await.settings.clone()
    }

    /// Edit one field addressed by its wire path.
    ///
    /// `"interestRates.home"` touches only that rate; `"currency"` touches
    /// only the top-level field. Numeric text that does not parse stores NaN.
    ///
    /// # Errors
    /// `FinError::InvalidInput` for an unknown path or an input of the wrong
    /// kind; the form is left unchanged
    pub async fn set_field(&self, path: &str, input: impl Into<FieldInput>) -> Result<()> {
        let field: SettingsField = path.parse()?;
        self.set(field, input).await
    }

    /// Edit one typed field.
    ///
    /// # Errors
    /// `FinError::InvalidInput` for an input of the wrong kind
    pub async fn set(&self, field: SettingsField, input: impl Into<FieldInput>) -> Result<()> {
        let mut state = self.state.write().await;
        field.apply(&mut state.settings, input.into())
    }

    /// Save the whole form.
    ///
    /// Rejected while another submit is pending. Success shows a banner for
    /// three seconds; failure shows an error banner until the next submit.
    /// Nothing is rolled back or retried. Dropping the returned future before
    /// it completes releases the form for the next submit.
    ///
    /// # Errors
    /// `FinError::SubmitInFlight` if a submit is pending, otherwise the API
    /// error
    pub async fn submit(&self) -> Result<()> {
        if self
            .submitting
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            return Err(FinError::SubmitInFlight);
        }
        let _in_flight = SubmitGuard(&self.submitting);

        let settings = {
            let mut state = self.state.write().await;
            state.banner = None;
            state.settings.clone()
        };

        let result = self.api.update_settings(&settings).await;

        let mut state = self.state.write().await;
        match result {
            Ok(()) => {
                info!("Settings submitted");
                state.banner = Some(BannerState::Success {
                    shown_at: Instant::now(),
                });
                Ok(())
            }
            Err(e) => {
                error!(error = %e, "Failed to save settings");
                state.banner = Some(BannerState::Error(e.user_message()));
                Err(e)
            }
        }
    }

    /// Whether a submit is pending (the submit control is disabled)
    pub fn is_submitting(&self) -> bool {
        self.submitting.load(Ordering::Acquire)
    }

    /// Banner to display right now, if any
    pub async fn banner(&self) -> Option<Banner> {
        match &self.state.read().await.banner {
            Some(BannerState::Success { shown_at })
                if shown_at.elapsed() < SUCCESS_BANNER_DURATION =>
            {
                Some(Banner::Success(SAVE_SUCCESS.to_string()))
            }
            Some(BannerState::Success { .. }) | None => None,
            Some(BannerState::Error(msg)) => Some(Banner::Error(msg.clone())),
        }
    }
}
