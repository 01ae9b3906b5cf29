//! The result of asking the engine for a tip.

use crate::id::TipId;

/// Why a show request ended. The two negative variants are ordinary
/// results, not errors; the caller simply shows nothing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShowOutcome {
    /// A tip was selected and handed to the panel.
    Shown(TipId),
    /// The candidate pool ran out before any tip passed evaluation.
    NoEligibleTip,
    /// The global sampling gate rejected this trigger.
    NotSampled,
}

impl ShowOutcome {
    /// The shown tip's id, if one was shown.
    pub fn shown(&self) -> Option<&TipId> {
        match self {
            Self::Shown(id) => Some(id),
            _ => None,
        }
    }
}
