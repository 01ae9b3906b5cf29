//! Runs the tip engine against a terminal panel for a handful of
//! simulated sessions, then prints the persisted history blob.

use async_trait::async_trait;
use nudge::prelude::*;
use std::sync::Arc;

/// Panel that renders tips to stdout.
struct TerminalPanel;

#[async_trait]
impl MessagePanel for TerminalPanel {
    async fn show(&self, message: &TipMessage) -> Result<(), PanelError> {
        println!("tip [{}] {}", message.id, message.text);
        if let Some(button) = &message.action_button {
            println!("    -> {} ({})", button.text, button.link);
        }
        Ok(())
    }
}

fn catalogue() -> Vec<TipSpec> {
    let mut shortcuts = TipSpec::new("keyboard-shortcuts", "Press ? to see all shortcuts.");
    shortcuts.required_triggers = 0;
    shortcuts.required_show_count = Some(2);

    let mut sync = TipSpec::new("enable-sync", "Enable sync to keep your settings everywhere.");
    sync.required_triggers = 0;
    sync.required_show_count = Some(1);
    sync.action_button = Some(ActionButton::new("Enable sync", "app://settings/sync"));

    let mut popup_hint = TipSpec::new("pin-the-popup", "Pin this popup to keep it around.");
    popup_hint.required_triggers = 0;
    popup_hint.show_in_context.insert("popup".into(), 1);
    popup_hint.required_show_count = Some(0);

    vec![shortcuts, sync, popup_hint]
}

#[tokio::main]
async fn main() -> Result<(), TipError> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let settings = Arc::new(MemorySettings::new());

    // Several simulated sessions against the same settings store: each
    // initialize counts one trigger, each session asks for one tip.
    for session in 1..=4 {
        println!("-- session {session} --");
        let mut engine = TipEngine::initialize(
            catalogue(),
            Arc::clone(&settings) as Arc<dyn SettingsStore>,
            Arc::new(TerminalPanel) as Arc<dyn MessagePanel>,
            EngineConfig::default(),
        )
        .await?;

        engine.set_context("popup");
        match engine.show_tip().await? {
            ShowOutcome::Shown(id) => {
                // Pretend the user dismissed whatever came up.
                engine.dismissed(&id)?;
            }
            ShowOutcome::NoEligibleTip => println!("    (no tip this session)"),
            ShowOutcome::NotSampled => println!("    (sampling gate said no)"),
        }
        engine.flush().await;
    }

    let blob = settings.get(SETTINGS_KEY).await?;
    println!("\npersisted history:");
    match blob {
        Some(value) => println!(
            "{}",
            serde_json::to_string_pretty(&value).unwrap_or_else(|_| value.to_string())
        ),
        None => println!("(nothing persisted)"),
    }
    Ok(())
}
