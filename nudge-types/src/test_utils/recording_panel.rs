//! RecordingPanel: captures every shown message for assertions.

use crate::error::PanelError;
use crate::panel::{MessagePanel, TipMessage};
use async_trait::async_trait;
use std::sync::Mutex;

/// Panel double that records every message it is asked to show.
#[derive(Default)]
pub struct RecordingPanel {
    shown: Mutex<Vec<TipMessage>>,
}

impl RecordingPanel {
    /// Create a new panel with nothing shown.
    pub fn new() -> Self {
        Self::default()
    }

    /// Every message shown so far, in order.
    pub fn shown(&self) -> Vec<TipMessage> {
        self.shown.lock().expect("panel lock poisoned").clone()
    }

    /// The most recently shown message, if any.
    pub fn last(&self) -> Option<TipMessage> {
        self.shown.lock().expect("panel lock poisoned").last().cloned()
    }
}

#[async_trait]
impl MessagePanel for RecordingPanel {
    async fn show(&self, message: &TipMessage) -> Result<(), PanelError> {
        self.shown
            .lock()
            .map_err(|e| PanelError::RenderFailed(e.to_string()))?
            .push(message.clone());
        Ok(())
    }
}
