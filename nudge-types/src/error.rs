//! Error types for each protocol.

use crate::id::TipId;
use thiserror::Error;

/// Settings storage errors.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum SettingsError {
    /// A read operation failed.
    #[error("read failed: {0}")]
    ReadFailed(String),

    /// A write operation failed.
    #[error("write failed: {0}")]
    WriteFailed(String),

    /// The stored value could not be decoded.
    #[error("serialization error: {0}")]
    Serialization(String),

    /// Catch-all. Include context.
    #[error("{0}")]
    Other(#[from] Box<dyn std::error::Error + Send + Sync>),
}

/// Panel rendering errors.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum PanelError {
    /// The panel could not render the message.
    #[error("render failed: {0}")]
    RenderFailed(String),

    /// Catch-all.
    #[error("{0}")]
    Other(#[from] Box<dyn std::error::Error + Send + Sync>),
}

/// Gate errors. Any error from a gate is a contract violation; the
/// engine propagates it and never interprets it as a verdict.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum GateError {
    /// The gate failed to produce a verdict.
    #[error("gate failed: {0}")]
    Failed(String),

    /// Catch-all.
    #[error("{0}")]
    Other(#[from] Box<dyn std::error::Error + Send + Sync>),
}

/// Engine errors surfaced to the caller.
///
/// The dismiss variants signal an integration bug between the panel and
/// the engine (a dismissal arrived for a tip the engine never put on
/// screen). They are not user-recoverable.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum TipError {
    /// A dismissal arrived while no tip was shown.
    #[error("no tip is shown, but {0} was dismissed")]
    NothingShown(TipId),

    /// A dismissal named a tip other than the one currently shown.
    #[error("cached tip {shown} and dismissed tip {dismissed} differ")]
    DismissMismatch {
        /// The tip the engine has on screen.
        shown: TipId,
        /// The tip the dismissal named.
        dismissed: TipId,
    },

    /// A custom gate violated its contract.
    #[error("gate contract violation: {0}")]
    Gate(#[from] GateError),

    /// The settings collaborator failed during load.
    #[error("settings error: {0}")]
    Settings(#[from] SettingsError),

    /// The panel collaborator failed to render.
    #[error("panel error: {0}")]
    Panel(#[from] PanelError),
}
