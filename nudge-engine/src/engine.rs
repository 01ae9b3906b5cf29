//! The engine: candidate pool, usage history, and the show/dismiss
//! lifecycle.

use crate::config::EngineConfig;
use crate::eligibility;
use crate::saver::SaveScheduler;
use nudge_types::{
    MessagePanel, SettingsError, SettingsStore, ShowOutcome, TipError, TipHistory, TipId,
    TipMessage, TipSpec,
};
use std::sync::Arc;

/// Decides, at each trigger, whether to show one tip and which one.
///
/// One engine instance owns the candidate pool (seeded from the caller's
/// catalogue, shrinking as candidates are disqualified), the persisted
/// usage history, the active context, and the currently-shown pointer.
///
/// Operations take `&mut self` and the engine holds no internal lock:
/// the caller serializes trigger and dismiss events. Overlapping calls
/// from multiple tasks are out of contract and can corrupt the
/// currently-shown invariant.
pub struct TipEngine {
    config: EngineConfig,
    history: TipHistory,
    pool: Vec<TipSpec>,
    shown: Option<TipSpec>,
    context: Option<String>,
    panel: Arc<dyn MessagePanel>,
    saver: SaveScheduler,
}

impl TipEngine {
    /// Build an engine from a tip catalogue and its collaborators.
    ///
    /// Loads the persisted history from the settings store (absent key →
    /// empty history; an unreadable blob is a [`SettingsError`]), records
    /// one trigger event on the global counter, and schedules a save.
    pub async fn initialize(
        catalogue: Vec<TipSpec>,
        settings: Arc<dyn SettingsStore>,
        panel: Arc<dyn MessagePanel>,
        config: EngineConfig,
    ) -> Result<Self, TipError> {
        let history = match settings.get(&config.settings_key).await? {
            Some(value) => serde_json::from_value(value)
                .map_err(|e| SettingsError::Serialization(e.to_string()))?,
            None => TipHistory::default(),
        };

        let saver = SaveScheduler::new(settings, config.settings_key.clone(), config.save_debounce);
        let mut engine = Self {
            config,
            history,
            pool: catalogue,
            shown: None,
            context: None,
            panel,
            saver,
        };

        engine.history.record_trigger();
        engine.schedule_save();
        tracing::debug!(
            candidates = engine.pool.len(),
            triggered_open = engine.history.triggered_open,
            "tip engine initialized"
        );
        Ok(engine)
    }

    /// Set the context label scoping subsequent evaluations.
    pub fn set_context(&mut self, context: impl Into<String>) {
        self.context = Some(context.into());
    }

    /// Clear the active context.
    pub fn clear_context(&mut self) {
        self.context = None;
    }

    /// Run the sampling gate, then the selection loop.
    ///
    /// Rejects with [`ShowOutcome::NotSampled`] with probability
    /// `1 - sample_rate`, so the user is not greeted with a tip on every
    /// single trigger.
    pub async fn show_tip_if_sampled(&mut self) -> Result<ShowOutcome, TipError> {
        if !rand::random_bool(self.config.sample_rate.clamp(0.0, 1.0)) {
            tracing::debug!("sampling gate rejected this trigger");
            return Ok(ShowOutcome::NotSampled);
        }
        self.show_tip().await
    }

    /// Select and show one tip, unconditionally.
    ///
    /// Draws a uniformly random candidate from the pool and evaluates it.
    /// An ineligible candidate is removed from the pool for the lifetime
    /// of this engine and the draw repeats; no candidate is evaluated
    /// twice within one call. An empty pool is an ordinary
    /// [`ShowOutcome::NoEligibleTip`], not an error.
    ///
    /// A newly selected tip replaces a tip still on screen; the panel
    /// renders into a single surface.
    pub async fn show_tip(&mut self) -> Result<ShowOutcome, TipError> {
        while !self.pool.is_empty() {
            let index = rand::random_range(0..self.pool.len());
            if self.evaluate(index).await? {
                let spec = self.pool[index].clone();
                let id = spec.id.clone();
                self.display(spec).await?;
                return Ok(ShowOutcome::Shown(id));
            }
            let spec = self.pool.remove(index);
            tracing::debug!(tip = %spec.id, "candidate disqualified");
        }

        tracing::debug!("no eligible tip remaining");
        Ok(ShowOutcome::NoEligibleTip)
    }

    /// Report that the user dismissed the rendered tip with this id.
    ///
    /// The id must name the currently-shown tip; anything else signals an
    /// integration bug between the panel and the engine and comes back as
    /// a fatal [`TipError`].
    pub fn dismissed(&mut self, id: &TipId) -> Result<(), TipError> {
        let shown = match &self.shown {
            Some(spec) => spec,
            None => return Err(TipError::NothingShown(id.clone())),
        };
        if shown.id != *id {
            return Err(TipError::DismissMismatch {
                shown: shown.id.clone(),
                dismissed: id.clone(),
            });
        }

        self.history.counters_mut(id).record_dismissed();
        self.shown = None;
        self.schedule_save();
        tracing::info!(tip = %id, "tip dismissed");
        Ok(())
    }

    /// Write any pending history mutations to the settings store now.
    pub async fn flush(&mut self) {
        self.saver.flush().await;
    }

    /// Read access to the usage history.
    pub fn history(&self) -> &TipHistory {
        &self.history
    }

    /// Id of the tip currently on screen, if any.
    pub fn currently_shown(&self) -> Option<&TipId> {
        self.shown.as_ref().map(|spec| &spec.id)
    }

    /// Evaluate the pool candidate at `index` against the rule chain.
    ///
    /// First contact with a tip id creates its zeroed counter record; that
    /// creation, and any mutation a gate performed, is scheduled for
    /// persistence here.
    async fn evaluate(&mut self, index: usize) -> Result<bool, TipError> {
        let triggered_open = self.history.triggered_open;
        let known = self
            .history
            .tips
            .contains_key(self.pool[index].id.as_str());
        let has_gate = self.pool[index].gate.is_some();

        let decision = {
            let spec = &self.pool[index];
            let counters = self.history.counters_mut(&spec.id);
            eligibility::should_show(spec, counters, self.context.as_deref(), triggered_open)
                .await?
        };

        if !known || has_gate {
            self.schedule_save();
        }
        Ok(decision)
    }

    /// Hand the selected tip to the panel and record the show.
    async fn display(&mut self, spec: TipSpec) -> Result<(), TipError> {
        let message = TipMessage {
            id: spec.id.clone(),
            text: spec.text.clone(),
            allow_dismiss: spec.allow_dismiss,
            action_button: spec.action_button.clone(),
        };
        self.panel.show(&message).await?;

        self.history
            .counters_mut(&spec.id)
            .record_shown(self.context.as_deref());
        tracing::debug!(tip = %spec.id, context = self.context.as_deref(), "tip shown");
        self.shown = Some(spec);
        self.schedule_save();
        Ok(())
    }

    fn schedule_save(&mut self) {
        match serde_json::to_value(&self.history) {
            Ok(value) => self.saver.schedule(value),
            Err(err) => tracing::warn!(%err, "tip history did not serialize"),
        }
    }
}
