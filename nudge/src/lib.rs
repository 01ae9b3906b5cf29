#![deny(missing_docs)]
//! # nudge: umbrella crate
//!
//! Provides a single import surface for the tip engine. Re-exports the
//! protocol crate and key implementations behind feature flags, plus a
//! `prelude` for the happy path.

#[cfg(feature = "engine")]
pub use nudge_engine;
#[cfg(feature = "settings-memory")]
pub use nudge_settings_memory;
#[cfg(feature = "types")]
pub use nudge_types;

/// Happy-path imports for wiring a tip engine.
pub mod prelude {
    #[cfg(feature = "types")]
    pub use nudge_types::{
        ActionButton, GateContext, GateError, GateVerdict, MessagePanel, PanelError,
        RequireDismiss, SETTINGS_KEY, SettingsError, SettingsStore, ShowOutcome, TipCounters,
        TipError, TipGate, TipHistory, TipId, TipMessage, TipSpec,
    };

    #[cfg(feature = "engine")]
    pub use nudge_engine::{EngineConfig, SaveScheduler, TipEngine};

    #[cfg(feature = "settings-memory")]
    pub use nudge_settings_memory::MemorySettings;
}
