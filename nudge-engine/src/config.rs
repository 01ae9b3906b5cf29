//! Configuration for the tip engine.

use nudge_types::SETTINGS_KEY;
use std::time::Duration;

/// Configuration for [`TipEngine`](crate::TipEngine).
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Probability that a sampled trigger shows a tip at all.
    /// `show_tip_if_sampled` rejects with probability `1 - sample_rate`
    /// before any candidate is drawn. Values outside [0, 1] are clamped.
    pub sample_rate: f64,

    /// How long the save scheduler waits after the last counter mutation
    /// before writing the history blob.
    pub save_debounce: Duration,

    /// Key under which the history blob is stored.
    pub settings_key: String,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            sample_rate: 0.2,
            save_debounce: Duration::from_millis(1000),
            settings_key: SETTINGS_KEY.to_owned(),
        }
    }
}
