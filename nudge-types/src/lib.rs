//! # nudge-types: protocol traits and data model for the nudge tip engine
//!
//! This crate defines the boundary between the tip engine and its
//! collaborators, plus the data the engine persists.
//!
//! ## The Protocols
//!
//! | Protocol | Trait | What it does |
//! |----------|-------|-------------|
//! | Settings | [`SettingsStore`] | Durable storage for the usage history blob |
//! | Panel | [`MessagePanel`] | Renders one tip to the user |
//! | Gate | [`TipGate`] | Per-tip custom show/hide predicate |
//!
//! ## The Data
//!
//! [`TipSpec`] is the immutable, caller-supplied description of one tip:
//! its text and the rules governing when it may appear. [`TipCounters`]
//! is the mutable usage record kept per tip id, and [`TipHistory`] the
//! persisted singleton holding every counter record plus the global
//! trigger count.
//!
//! ## Design Principle
//!
//! Traits are operation-defined, not mechanism-defined. `MessagePanel::show`
//! means "put this tip in front of the user", not "mutate this DOM node"
//! or "call this toolkit". A terminal renderer, a browser message box, and
//! a test double all implement the same trait.

#![deny(missing_docs)]

pub mod counters;
pub mod error;
pub mod gate;
pub mod id;
pub mod outcome;
pub mod panel;
pub mod settings;
pub mod tip;

#[cfg(feature = "test-utils")]
pub mod test_utils;

// Re-exports for convenience
pub use counters::{SETTINGS_KEY, TipCounters, TipHistory};
pub use error::{GateError, PanelError, SettingsError, TipError};
pub use gate::{GateContext, GateVerdict, TipGate};
pub use id::TipId;
pub use outcome::ShowOutcome;
pub use panel::{MessagePanel, TipMessage};
pub use settings::SettingsStore;
pub use tip::{ActionButton, RequireDismiss, TipSpec};
