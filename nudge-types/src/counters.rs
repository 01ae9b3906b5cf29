//! Persisted usage counters: the mutable half of every tip.

use crate::id::TipId;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Storage key under which [`TipHistory`] lives in the settings store.
///
/// The key and the camelCase field names keep the persisted blob readable
/// by installations that wrote it under the original add-on.
pub const SETTINGS_KEY: &str = "randomTips";

/// Mutable usage record for one tip id.
///
/// Counters only ever increment. Records are created lazily, zeroed, the
/// first time a tip id is evaluated.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TipCounters {
    /// How many times the tip has been shown, in any context.
    pub shown_count: u64,
    /// How many times the user has dismissed the tip.
    pub dismissed_count: u64,
    /// Shows broken down by context label.
    pub shown_context: HashMap<String, u64>,
}

impl TipCounters {
    /// Record one show, also bumping the context-scoped counter when a
    /// context is active.
    pub fn record_shown(&mut self, context: Option<&str>) {
        self.shown_count += 1;
        if let Some(ctx) = context {
            *self.shown_context.entry(ctx.to_owned()).or_insert(0) += 1;
        }
    }

    /// Record one dismissal.
    pub fn record_dismissed(&mut self) {
        self.dismissed_count += 1;
    }

    /// How many times the tip has been shown in the given context.
    pub fn shown_in(&self, context: &str) -> u64 {
        self.shown_context.get(context).copied().unwrap_or(0)
    }
}

/// The persisted singleton: every tip's counters plus the global trigger
/// count. This is the whole blob written to the settings store.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TipHistory {
    /// Counter records keyed by tip id.
    pub tips: HashMap<String, TipCounters>,
    /// How many trigger events have occurred over the installation's
    /// lifetime. Gates tips with a `required_triggers` minimum.
    pub triggered_open: u64,
}

impl TipHistory {
    /// Counters for a tip id, if the tip has been evaluated before.
    pub fn counters(&self, id: &TipId) -> Option<&TipCounters> {
        self.tips.get(id.as_str())
    }

    /// Counters for a tip id, inserting a zeroed record on first access.
    pub fn counters_mut(&mut self, id: &TipId) -> &mut TipCounters {
        self.tips.entry(id.as_str().to_owned()).or_default()
    }

    /// Record one trigger event on the global counter.
    pub fn record_trigger(&mut self) {
        self.triggered_open += 1;
    }
}
