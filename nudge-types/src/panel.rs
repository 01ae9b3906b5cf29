//! The Panel protocol: how a selected tip reaches the user.

use crate::error::PanelError;
use crate::id::TipId;
use crate::tip::ActionButton;
use async_trait::async_trait;

/// Everything the panel needs to render one tip.
///
/// The id tags the rendered message: when the user dismisses it, the
/// integration reports that id back through the engine's dismiss
/// operation, and the engine verifies it against the tip it believes is
/// on screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TipMessage {
    /// Id of the tip being rendered.
    pub id: TipId,
    /// The hint text.
    pub text: String,
    /// Whether the user may dismiss the message.
    pub allow_dismiss: bool,
    /// Optional call-to-action.
    pub action_button: Option<ActionButton>,
}

/// Renders tips to the user.
///
/// One panel, one surface: showing a new tip replaces whatever the panel
/// currently displays. Registration, layout, and event plumbing are the
/// implementation's concern; the engine only hands over messages and
/// expects dismissals to be reported back by id.
#[async_trait]
pub trait MessagePanel: Send + Sync {
    /// Put the tip in front of the user.
    async fn show(&self, message: &TipMessage) -> Result<(), PanelError>;
}
