//! The Gate interface: a per-tip custom show/hide predicate.

use crate::counters::TipCounters;
use crate::error::GateError;
use crate::tip::TipSpec;
use async_trait::async_trait;

/// What a gate decides about its tip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateVerdict {
    /// Force the tip to show. Every later rule is skipped.
    Show,
    /// Force the tip to hide for this evaluation.
    Hide,
    /// No opinion: evaluation continues with the built-in rules.
    NoOpinion,
}

/// What a gate sees when it is consulted.
///
/// The counters reference is the same record the engine persists. A gate
/// may mutate it in place (reset a context bucket, pre-charge a show), and
/// the engine schedules a save after the gate ran regardless of verdict.
#[non_exhaustive]
pub struct GateContext<'a> {
    /// The tip being evaluated.
    pub spec: &'a TipSpec,
    /// The tip's live counter record. Mutations are persisted.
    pub counters: &'a mut TipCounters,
    /// The active context label, if any.
    pub context: Option<&'a str>,
    /// The global trigger count at evaluation time.
    pub triggered_open: u64,
}

impl<'a> GateContext<'a> {
    /// Assemble a gate context for one evaluation.
    pub fn new(
        spec: &'a TipSpec,
        counters: &'a mut TipCounters,
        context: Option<&'a str>,
        triggered_open: u64,
    ) -> Self {
        Self {
            spec,
            counters,
            context,
            triggered_open,
        }
    }
}

/// A custom predicate attached to one tip, consulted before every built-in
/// rule.
///
/// Gates may perform asynchronous work (read additional storage, ask
/// another service); the evaluation suspends until they resolve. A gate
/// returning an error is a contract violation: the engine propagates it
/// unchanged and never tries to interpret it as a verdict.
#[async_trait]
pub trait TipGate: Send + Sync {
    /// Decide whether the tip in `ctx` should show, hide, or fall through
    /// to the built-in rules.
    async fn evaluate(&self, ctx: &mut GateContext<'_>) -> Result<GateVerdict, GateError>;
}
