//! Test doubles for the protocol traits.
//!
//! Available behind the `test-utils` feature flag. These are minimal
//! implementations that prove the trait APIs are usable.

mod recording_panel;
mod static_gate;

pub use recording_panel::RecordingPanel;
pub use static_gate::StaticGate;
