//! The eligibility rule chain: the show/hide decision for a single tip.

use nudge_types::{GateContext, GateVerdict, RequireDismiss, TipCounters, TipError, TipSpec};

/// Decide whether `spec` should be shown right now.
///
/// The chain runs strictly in order: the custom gate first (it may
/// override everything, in either direction), then the hard disqualifiers
/// (trigger minimum, randomization, dismiss ceiling, context ceiling),
/// then the context-requirement shortcut, then the show/dismiss threshold
/// fallback. The first rule that fires decides; a disqualifier can never
/// be outvoted by a later rule.
pub(crate) async fn should_show(
    spec: &TipSpec,
    counters: &mut TipCounters,
    context: Option<&str>,
    triggered_open: u64,
) -> Result<bool, TipError> {
    if let Some(gate) = &spec.gate {
        let mut gate_ctx = GateContext::new(spec, counters, context, triggered_open);
        match gate.evaluate(&mut gate_ctx).await? {
            GateVerdict::Show => return Ok(true),
            GateVerdict::Hide => return Ok(false),
            GateVerdict::NoOpinion => {}
        }
    }

    if triggered_open < u64::from(spec.required_triggers) {
        return Ok(false);
    }

    if let Some(p) = spec.randomize_display {
        if !rand::random_bool(p.clamp(0.0, 1.0)) {
            return Ok(false);
        }
    }

    if let Some(max) = spec.maximum_dismiss {
        if counters.dismissed_count >= u64::from(max) {
            return Ok(false);
        }
    }

    if let Some(ctx) = context {
        if let Some(cap) = spec.maximum_in_context.get(ctx) {
            if counters.shown_in(ctx) >= u64::from(*cap) {
                return Ok(false);
            }
        }
    }

    // Disqualifiers end here. The remaining rules only pick between
    // "show" and the default "hide".

    if let Some(ctx) = context {
        if let Some(required) = spec.show_in_context.get(ctx) {
            if counters.shown_in(ctx) < u64::from(*required) {
                return Ok(true);
            }
        }
    }

    let required_dismiss = match spec.require_dismiss {
        RequireDismiss::No => None,
        RequireDismiss::WithShowCount => spec.required_show_count.map(u64::from),
        RequireDismiss::Count(n) => Some(u64::from(n)),
    };

    let below_show_count = spec
        .required_show_count
        .is_none_or(|n| counters.shown_count < u64::from(n));
    let below_dismiss_count = required_dismiss.is_some_and(|n| counters.dismissed_count < n);

    Ok(below_show_count || below_dismiss_count)
}
