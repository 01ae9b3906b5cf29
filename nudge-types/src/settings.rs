//! The Settings protocol: durable storage for the usage history blob.

use crate::error::SettingsError;
use async_trait::async_trait;

/// Key-value settings storage.
///
/// The engine stores its whole history under a single key as one JSON
/// value. Implementations:
/// - `nudge-settings-memory`: HashMap (testing, ephemeral)
/// - a browser extension's synced storage area
/// - a config file on disk
///
/// Writes are fire-and-forget from the engine's point of view: a failed
/// `set` is logged and never retried or verified. Retry policy, if any,
/// belongs to the implementation.
#[async_trait]
pub trait SettingsStore: Send + Sync {
    /// Read a value by key. Returns None if the key has never been written.
    async fn get(&self, key: &str) -> Result<Option<serde_json::Value>, SettingsError>;

    /// Write a value. Creates or overwrites.
    async fn set(&self, key: &str, value: serde_json::Value) -> Result<(), SettingsError>;
}
