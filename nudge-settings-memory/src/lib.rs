#![deny(missing_docs)]
//! In-memory implementation of nudge's SettingsStore trait.
//!
//! Uses a `HashMap` behind a `RwLock`. Suitable for testing, prototyping,
//! and single-process use where the tip history does not need to survive
//! a restart.

use async_trait::async_trait;
use nudge_types::{SettingsError, SettingsStore};
use std::collections::HashMap;
use tokio::sync::RwLock;

/// In-memory settings store backed by a `HashMap` behind a `RwLock`.
pub struct MemorySettings {
    data: RwLock<HashMap<String, serde_json::Value>>,
}

impl MemorySettings {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self {
            data: RwLock::new(HashMap::new()),
        }
    }

    /// Create a store pre-seeded with one key, handy for starting an
    /// engine from a known history.
    pub fn with_value(key: impl Into<String>, value: serde_json::Value) -> Self {
        let mut data = HashMap::new();
        data.insert(key.into(), value);
        Self {
            data: RwLock::new(data),
        }
    }
}

impl Default for MemorySettings {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SettingsStore for MemorySettings {
    async fn get(&self, key: &str) -> Result<Option<serde_json::Value>, SettingsError> {
        let data = self.data.read().await;
        Ok(data.get(key).cloned())
    }

    async fn set(&self, key: &str, value: serde_json::Value) -> Result<(), SettingsError> {
        let mut data = self.data.write().await;
        data.insert(key.to_owned(), value);
        Ok(())
    }
}
