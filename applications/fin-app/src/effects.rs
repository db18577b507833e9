//! Default UI effect sinks.
//!
//! Real front ends plug in their own toast/alert and navigation adapters;
//! these cover headless use and tests.

use fin_core::{Navigator, Notice, NoticeLevel, Notifier, Screen};
use std::sync::Arc;
use tokio::sync::watch;
use tracing::{error, info, warn};

/// Notifier that writes notices to the log.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn notify(&self, notice: Notice) {
        let kind = notice.kind;
        match notice.level {
            NoticeLevel::Success => info!(kind = ?kind, "{}", notice.message),
            NoticeLevel::Warning => warn!(kind = ?kind, "{}", notice.message),
            NoticeLevel::Error => error!(kind = ?kind, "{}", notice.message),
        }
    }
}

/// Navigator that records the latest target screen.
#[derive(Debug, Clone)]
pub struct ScreenTracker {
    tx: Arc<watch::Sender<Option<Screen>>>,
}

impl ScreenTracker {
    pub fn new() -> Self {
        let (tx, _rx) = watch::channel(None);
        Self { tx: Arc::new(tx) }
    }

    /// Last screen navigated to
    pub fn current(&self) -> Option<Screen> {
        *self.tx.borrow()
    }

    pub fn subscribe(&self) -> watch::Receiver<Option<Screen>> {
        self.tx.subscribe()
    }
}

impl Default for ScreenTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl Navigator for ScreenTracker {
    fn navigate(&self, screen: Screen) {
        self.tx.send_replace(Some(screen));
    }
}
