//! The tip specification: what a tip says and when it may appear.

use crate::gate::TipGate;
use crate::id::TipId;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

/// Optional call-to-action rendered next to the tip text.
///
/// Passed through to the panel untouched; the engine attaches no meaning
/// to the link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionButton {
    /// Button label.
    pub text: String,
    /// Target the button points at (a URL, a route, whatever the panel
    /// understands).
    pub link: String,
}

impl ActionButton {
    /// Create a new action button.
    pub fn new(text: impl Into<String>, link: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            link: link.into(),
        }
    }
}

/// Whether showing a tip additionally requires it to have been dismissed.
///
/// Resolved against [`TipSpec::required_show_count`] during evaluation:
/// `WithShowCount` reuses that value as the dismiss threshold (and is
/// disabled when the show count is unbounded).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RequireDismiss {
    /// Dismissals do not keep a tip eligible.
    #[default]
    No,
    /// The tip stays eligible until dismissed `required_show_count` times.
    WithShowCount,
    /// The tip stays eligible until dismissed this many times.
    Count(u32),
}

/// Immutable, caller-supplied description of one tip: its text and the
/// rules governing when it may appear.
///
/// [`TipSpec::new`] applies the defaults; the remaining fields are plain
/// and set by assignment:
///
/// ```
/// use nudge_types::TipSpec;
///
/// let mut tip = TipSpec::new("keyboard-shortcuts", "Press ? to see shortcuts.");
/// tip.required_show_count = Some(3);
/// tip.required_triggers = 0;
/// ```
#[derive(Clone)]
pub struct TipSpec {
    /// Unique id, stable across sessions.
    pub id: TipId,

    /// The hint text shown to the user.
    pub text: String,

    /// Optional call-to-action forwarded to the panel.
    pub action_button: Option<ActionButton>,

    /// Whether the user may dismiss the rendered tip. Default true.
    pub allow_dismiss: bool,

    /// How many successful shows exhaust the tip.
    /// None means unbounded: the show count alone never disqualifies it.
    pub required_show_count: Option<u32>,

    /// Whether dismissals extend eligibility beyond the show count.
    pub require_dismiss: RequireDismiss,

    /// Stop showing once the tip has been dismissed this many times.
    /// None means dismissals never disqualify it.
    pub maximum_dismiss: Option<u32>,

    /// Minimum global trigger count before the tip may appear at all.
    /// Default 10, so a tip does not greet the user on first launch.
    pub required_triggers: u32,

    /// Per-evaluation probability of showing. None means always.
    /// Values outside [0, 1] are clamped at evaluation.
    pub randomize_display: Option<f64>,

    /// Context label → minimum shown-in-context count. While the tip has
    /// been shown fewer times than required in the active context, it is
    /// shown unconditionally (short-circuiting the show-count rule).
    pub show_in_context: HashMap<String, u32>,

    /// Context label → cap on shown-in-context count. Reaching the cap
    /// disqualifies the tip while that context is active.
    pub maximum_in_context: HashMap<String, u32>,

    /// Custom show/hide predicate, consulted before every other rule.
    pub gate: Option<Arc<dyn TipGate>>,
}

impl TipSpec {
    /// Probability equivalent of the "flip a coin" randomize shorthand.
    pub const COIN_FLIP: f64 = 0.5;

    /// Create a tip with the default rules: dismissible, no show limit,
    /// no dismiss rules, ten required triggers, no randomization.
    pub fn new(id: impl Into<TipId>, text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
            action_button: None,
            allow_dismiss: true,
            required_show_count: None,
            require_dismiss: RequireDismiss::No,
            maximum_dismiss: None,
            required_triggers: 10,
            randomize_display: None,
            show_in_context: HashMap::new(),
            maximum_in_context: HashMap::new(),
            gate: None,
        }
    }
}

impl fmt::Debug for TipSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TipSpec")
            .field("id", &self.id)
            .field("text", &self.text)
            .field("action_button", &self.action_button)
            .field("allow_dismiss", &self.allow_dismiss)
            .field("required_show_count", &self.required_show_count)
            .field("require_dismiss", &self.require_dismiss)
            .field("maximum_dismiss", &self.maximum_dismiss)
            .field("required_triggers", &self.required_triggers)
            .field("randomize_display", &self.randomize_display)
            .field("show_in_context", &self.show_in_context)
            .field("maximum_in_context", &self.maximum_in_context)
            .field("gate", &self.gate.as_ref().map(|_| "<dyn TipGate>"))
            .finish()
    }
}
