//! Debounced persistence of the history blob.

use nudge_types::SettingsStore;
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;

/// Coalesces bursts of history mutations into a single deferred write.
///
/// Each [`schedule`](Self::schedule) replaces the pending payload and
/// restarts the timer; the write fires once the window elapses with no
/// further schedule. [`flush`](Self::flush) writes the latest payload
/// immediately. A failed write is logged and dropped; retry policy
/// belongs to the settings collaborator, not this layer.
pub struct SaveScheduler {
    settings: Arc<dyn SettingsStore>,
    key: String,
    window: Duration,
    latest: Option<serde_json::Value>,
    timer: Option<JoinHandle<()>>,
}

impl SaveScheduler {
    /// Create a scheduler writing to `key` on `settings` after `window`
    /// of quiet.
    pub fn new(settings: Arc<dyn SettingsStore>, key: impl Into<String>, window: Duration) -> Self {
        Self {
            settings,
            key: key.into(),
            window,
            latest: None,
            timer: None,
        }
    }

    /// Remember `value` as the payload to persist and restart the
    /// debounce timer. An earlier pending write is superseded.
    pub fn schedule(&mut self, value: serde_json::Value) {
        if let Some(timer) = self.timer.take() {
            timer.abort();
        }
        self.latest = Some(value.clone());

        let settings = Arc::clone(&self.settings);
        let key = self.key.clone();
        let window = self.window;
        self.timer = Some(tokio::spawn(async move {
            tokio::time::sleep(window).await;
            if let Err(err) = settings.set(&key, value).await {
                tracing::warn!(%err, "deferred settings write failed");
            }
        }));
    }

    /// Cancel the timer and write the latest payload now.
    ///
    /// A no-op when nothing was ever scheduled. Writing an already-written
    /// payload again is harmless, the blob being a full snapshot.
    pub async fn flush(&mut self) {
        if let Some(timer) = self.timer.take() {
            timer.abort();
        }
        if let Some(value) = self.latest.clone() {
            if let Err(err) = self.settings.set(&self.key, value).await {
                tracing::warn!(%err, "settings flush failed");
            }
        }
    }

    /// Whether a deferred write is still waiting on its timer.
    pub fn has_pending(&self) -> bool {
        self.timer.as_ref().is_some_and(|t| !t.is_finished())
    }
}
