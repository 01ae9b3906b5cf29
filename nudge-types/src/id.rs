//! Typed tip identifier.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unique identifier for a tip.
///
/// Just a string underneath, with no format requirement. The protocol doesn't
/// care what your ids look like, only that they are stable: the id keys the
/// persisted counter record and tags the rendered message for dismiss
/// correlation.
#[derive(Debug, Clone, Hash, Eq, PartialEq, Serialize, Deserialize)]
pub struct TipId(pub String);

impl TipId {
    /// Create a new id from anything that converts to String.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Borrow the inner string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TipId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for TipId {
    fn from(s: &str) -> Self {
        Self(s.to_owned())
    }
}

impl From<String> for TipId {
    fn from(s: String) -> Self {
        Self(s)
    }
}
