use nudge_engine::{EngineConfig, TipEngine};
use nudge_settings_memory::MemorySettings;
use nudge_types::test_utils::RecordingPanel;
use nudge_types::{
    ActionButton, SETTINGS_KEY, SettingsStore, ShowOutcome, TipError, TipId, TipSpec,
};
use std::sync::Arc;

fn ready_tip(id: &str) -> TipSpec {
    let mut spec = TipSpec::new(id, format!("tip text for {id}"));
    spec.required_triggers = 0;
    spec
}

async fn engine_with(
    catalogue: Vec<TipSpec>,
    settings: Arc<MemorySettings>,
) -> (TipEngine, Arc<RecordingPanel>) {
    let panel = Arc::new(RecordingPanel::new());
    let engine = TipEngine::initialize(
        catalogue,
        settings,
        Arc::clone(&panel) as Arc<dyn nudge_types::MessagePanel>,
        EngineConfig::default(),
    )
    .await
    .unwrap();
    (engine, panel)
}

// --- Selection end to end ---

#[tokio::test]
async fn single_show_tip_then_pool_exhausted() {
    let mut tip = ready_tip("a");
    tip.required_show_count = Some(1);
    let (mut engine, panel) = engine_with(vec![tip], Arc::new(MemorySettings::new())).await;

    let outcome = engine.show_tip().await.unwrap();
    assert_eq!(outcome, ShowOutcome::Shown(TipId::new("a")));
    assert_eq!(engine.history().counters(&TipId::new("a")).unwrap().shown_count, 1);
    assert_eq!(panel.shown().len(), 1);

    // Shown enough times: the tip leaves the pool and nothing is left.
    let outcome = engine.show_tip().await.unwrap();
    assert_eq!(outcome, ShowOutcome::NoEligibleTip);
    assert_eq!(panel.shown().len(), 1);
}

#[tokio::test]
async fn empty_catalogue_yields_no_tip() {
    let (mut engine, _panel) = engine_with(vec![], Arc::new(MemorySettings::new())).await;
    assert_eq!(engine.show_tip().await.unwrap(), ShowOutcome::NoEligibleTip);
}

#[tokio::test]
async fn disqualified_candidates_stay_out_for_the_engine_lifetime() {
    let mut never = ready_tip("never");
    never.required_triggers = 100;
    let good = ready_tip("good");
    let (mut engine, _panel) =
        engine_with(vec![never, good], Arc::new(MemorySettings::new())).await;

    for _ in 0..5 {
        let outcome = engine.show_tip().await.unwrap();
        assert_eq!(outcome, ShowOutcome::Shown(TipId::new("good")));
    }
    // The blocked candidate may or may not have been drawn, but it was
    // never shown.
    if let Some(counters) = engine.history().counters(&TipId::new("never")) {
        assert_eq!(counters.shown_count, 0);
    }
}

#[tokio::test]
async fn evaluation_lazily_creates_zeroed_counters() {
    let mut tip = ready_tip("fresh");
    tip.required_triggers = 100; // evaluated, then disqualified
    let (mut engine, _panel) = engine_with(vec![tip], Arc::new(MemorySettings::new())).await;

    assert!(engine.history().counters(&TipId::new("fresh")).is_none());
    engine.show_tip().await.unwrap();

    let counters = engine.history().counters(&TipId::new("fresh")).unwrap();
    assert_eq!(counters.shown_count, 0);
    assert_eq!(counters.dismissed_count, 0);
    assert!(counters.shown_context.is_empty());
}

// --- Trigger gate against persisted history ---

#[tokio::test]
async fn initialize_records_exactly_one_trigger() {
    let settings = Arc::new(MemorySettings::with_value(
        SETTINGS_KEY,
        serde_json::json!({ "triggeredOpen": 8 }),
    ));
    let (engine, _panel) = engine_with(vec![], settings).await;
    assert_eq!(engine.history().triggered_open, 9);
}

#[tokio::test]
async fn required_triggers_gate_holds_until_reached() {
    let tip = TipSpec::new("a", "text"); // required_triggers = 10

    // Nine triggers so far (eight persisted + this startup): still hidden.
    let settings = Arc::new(MemorySettings::with_value(
        SETTINGS_KEY,
        serde_json::json!({ "triggeredOpen": 8 }),
    ));
    let (mut engine, _panel) = engine_with(vec![tip.clone()], settings).await;
    assert_eq!(engine.show_tip().await.unwrap(), ShowOutcome::NoEligibleTip);

    // Tenth trigger: shown.
    let settings = Arc::new(MemorySettings::with_value(
        SETTINGS_KEY,
        serde_json::json!({ "triggeredOpen": 9 }),
    ));
    let (mut engine, _panel) = engine_with(vec![tip], settings).await;
    assert_eq!(
        engine.show_tip().await.unwrap(),
        ShowOutcome::Shown(TipId::new("a"))
    );
}

#[tokio::test]
async fn dismiss_ceiling_from_persisted_history_blocks_selection() {
    let mut tip = ready_tip("a");
    tip.maximum_dismiss = Some(2);
    let settings = Arc::new(MemorySettings::with_value(
        SETTINGS_KEY,
        serde_json::json!({ "tips": { "a": { "dismissedCount": 2 } } }),
    ));
    let (mut engine, _panel) = engine_with(vec![tip], settings).await;

    assert_eq!(engine.show_tip().await.unwrap(), ShowOutcome::NoEligibleTip);
}

// --- Context ---

#[tokio::test]
async fn context_requirement_forces_show_despite_exhausted_count() {
    let mut tip = ready_tip("a");
    tip.required_show_count = Some(1);
    tip.show_in_context.insert("popup".into(), 1);
    let settings = Arc::new(MemorySettings::with_value(
        SETTINGS_KEY,
        serde_json::json!({ "tips": { "a": { "shownCount": 5 } } }),
    ));
    let (mut engine, panel) = engine_with(vec![tip], settings).await;

    engine.set_context("popup");
    let outcome = engine.show_tip().await.unwrap();
    assert_eq!(outcome, ShowOutcome::Shown(TipId::new("a")));
    assert_eq!(panel.last().unwrap().id, TipId::new("a"));

    let counters = engine.history().counters(&TipId::new("a")).unwrap();
    assert_eq!(counters.shown_count, 6);
    assert_eq!(counters.shown_in("popup"), 1);
}

#[tokio::test]
async fn clear_context_stops_context_scoped_counting() {
    let tip = ready_tip("a");
    let (mut engine, _panel) = engine_with(vec![tip], Arc::new(MemorySettings::new())).await;

    engine.set_context("popup");
    engine.show_tip().await.unwrap();
    engine.clear_context();
    engine.show_tip().await.unwrap();

    let counters = engine.history().counters(&TipId::new("a")).unwrap();
    assert_eq!(counters.shown_count, 2);
    assert_eq!(counters.shown_in("popup"), 1);
}

// --- Dismiss lifecycle ---

#[tokio::test]
async fn dismissing_the_shown_tip_clears_it_and_counts_once() {
    let tip = ready_tip("a");
    let (mut engine, _panel) = engine_with(vec![tip], Arc::new(MemorySettings::new())).await;

    engine.show_tip().await.unwrap();
    assert_eq!(engine.currently_shown(), Some(&TipId::new("a")));

    engine.dismissed(&TipId::new("a")).unwrap();
    assert_eq!(engine.currently_shown(), None);
    assert_eq!(
        engine.history().counters(&TipId::new("a")).unwrap().dismissed_count,
        1
    );
}

#[tokio::test]
async fn dismissing_with_nothing_shown_is_a_fault() {
    let (mut engine, _panel) = engine_with(vec![], Arc::new(MemorySettings::new())).await;

    let err = engine.dismissed(&TipId::new("ghost")).unwrap_err();
    assert!(matches!(err, TipError::NothingShown(_)));
}

#[tokio::test]
async fn dismissing_the_wrong_tip_is_a_fault() {
    let tip = ready_tip("a");
    let (mut engine, _panel) = engine_with(vec![tip], Arc::new(MemorySettings::new())).await;
    engine.show_tip().await.unwrap();

    let err = engine.dismissed(&TipId::new("b")).unwrap_err();
    assert!(matches!(
        err,
        TipError::DismissMismatch { shown, dismissed }
            if shown == TipId::new("a") && dismissed == TipId::new("b")
    ));
    // The shown pointer and counters are untouched by the faulty dismissal.
    assert_eq!(engine.currently_shown(), Some(&TipId::new("a")));
    assert_eq!(
        engine.history().counters(&TipId::new("a")).unwrap().dismissed_count,
        0
    );
}

#[tokio::test]
async fn new_selection_replaces_a_tip_still_on_screen() {
    let tip = ready_tip("a");
    let (mut engine, panel) = engine_with(vec![tip], Arc::new(MemorySettings::new())).await;

    engine.show_tip().await.unwrap();
    engine.show_tip().await.unwrap();

    assert_eq!(panel.shown().len(), 2);
    assert_eq!(engine.currently_shown(), Some(&TipId::new("a")));
    engine.dismissed(&TipId::new("a")).unwrap();
    assert_eq!(engine.currently_shown(), None);
}

// --- Counters only move forward ---

#[tokio::test]
async fn counters_never_decrease_across_operations() {
    let tip = ready_tip("a");
    let (mut engine, _panel) = engine_with(vec![tip], Arc::new(MemorySettings::new())).await;
    let id = TipId::new("a");

    let mut last_shown = 0;
    let mut last_dismissed = 0;
    for _ in 0..5 {
        engine.show_tip().await.unwrap();
        engine.dismissed(&id).unwrap();

        let counters = engine.history().counters(&id).unwrap();
        assert!(counters.shown_count >= last_shown);
        assert!(counters.dismissed_count >= last_dismissed);
        last_shown = counters.shown_count;
        last_dismissed = counters.dismissed_count;
    }
    assert_eq!(last_shown, 5);
    assert_eq!(last_dismissed, 5);
}

// --- Sampling gate ---

#[tokio::test]
async fn zero_sample_rate_always_rejects() {
    let tip = ready_tip("a");
    let panel = Arc::new(RecordingPanel::new());
    let config = EngineConfig {
        sample_rate: 0.0,
        ..EngineConfig::default()
    };
    let mut engine = TipEngine::initialize(
        vec![tip],
        Arc::new(MemorySettings::new()),
        Arc::clone(&panel) as Arc<dyn nudge_types::MessagePanel>,
        config,
    )
    .await
    .unwrap();

    for _ in 0..20 {
        assert_eq!(
            engine.show_tip_if_sampled().await.unwrap(),
            ShowOutcome::NotSampled
        );
    }
    assert!(panel.shown().is_empty());
}

#[tokio::test]
async fn full_sample_rate_runs_selection() {
    let tip = ready_tip("a");
    let panel = Arc::new(RecordingPanel::new());
    let config = EngineConfig {
        sample_rate: 1.0,
        ..EngineConfig::default()
    };
    let mut engine = TipEngine::initialize(
        vec![tip],
        Arc::new(MemorySettings::new()),
        Arc::clone(&panel) as Arc<dyn nudge_types::MessagePanel>,
        config,
    )
    .await
    .unwrap();

    assert_eq!(
        engine.show_tip_if_sampled().await.unwrap(),
        ShowOutcome::Shown(TipId::new("a"))
    );
}

// --- Message payload ---

#[tokio::test]
async fn panel_receives_dismiss_flag_and_action_button() {
    let mut tip = ready_tip("a");
    tip.allow_dismiss = false;
    tip.action_button = Some(ActionButton::new("Learn more", "https://example.test/docs"));
    let (mut engine, panel) = engine_with(vec![tip], Arc::new(MemorySettings::new())).await;

    engine.show_tip().await.unwrap();

    let message = panel.last().unwrap();
    assert_eq!(message.id, TipId::new("a"));
    assert!(!message.allow_dismiss);
    assert_eq!(
        message.action_button,
        Some(ActionButton::new("Learn more", "https://example.test/docs"))
    );
}

// --- Persisted blob ---

#[tokio::test]
async fn flush_persists_history_under_the_settings_key() {
    let settings = Arc::new(MemorySettings::new());
    let tip = ready_tip("a");
    let (mut engine, _panel) = engine_with(vec![tip], Arc::clone(&settings)).await;

    engine.set_context("popup");
    engine.show_tip().await.unwrap();
    engine.dismissed(&TipId::new("a")).unwrap();
    engine.flush().await;

    let blob = settings.get(SETTINGS_KEY).await.unwrap().unwrap();
    assert_eq!(blob["triggeredOpen"], 1);
    assert_eq!(blob["tips"]["a"]["shownCount"], 1);
    assert_eq!(blob["tips"]["a"]["dismissedCount"], 1);
    assert_eq!(blob["tips"]["a"]["shownContext"]["popup"], 1);
}

#[tokio::test]
async fn unreadable_blob_fails_initialization() {
    let settings = Arc::new(MemorySettings::with_value(
        SETTINGS_KEY,
        serde_json::json!("not an object"),
    ));
    let panel = Arc::new(RecordingPanel::new());

    let result = TipEngine::initialize(
        vec![],
        settings,
        panel as Arc<dyn nudge_types::MessagePanel>,
        EngineConfig::default(),
    )
    .await;
    assert!(matches!(result, Err(TipError::Settings(_))));
}
