//! Context-menu construction for the external UI layer.
//!
//! Right-clicking in the visualization opens a context menu. The menu is
//! purely presentational metadata: one entry per allowed action, each
//! pairing display text with the message delivered to this agent if the
//! user picks the entry. Nothing here has side effects.

use tracing::debug;

use gridsar_types::{ActionType, Message, ObjectId};

/// One context-menu entry: display text plus the message it sends.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContextMenuItem {
    /// Text shown in the menu.
    pub option_text: String,
    /// Message delivered to this agent when the entry is clicked.
    pub message: Message,
}

/// Build the menu shown when the controlling user opens it on this agent
/// (or on a background tile with this agent selected).
pub fn menu_for_self(
    agent_id: &ObjectId,
    action_set: &[ActionType],
    self_selected: bool,
) -> Vec<ContextMenuItem> {
    debug!(self_selected, "building self context menu");
    action_set
        .iter()
        .map(|action| item(action.wire_name(), agent_id.clone(), agent_id.clone()))
        .collect()
}

/// Build the menu shown when another user opens it with this agent as the
/// clicked target; entries are addressed from the clicking party.
pub fn menu_for_other(
    agent_id: &ObjectId,
    clicked_by: &ObjectId,
    action_set: &[ActionType],
) -> Vec<ContextMenuItem> {
    debug!(clicked_by = %clicked_by, "building context menu for other");
    action_set
        .iter()
        .map(|action| item(action.wire_name(), clicked_by.clone(), agent_id.clone()))
        .collect()
}

fn item(action_name: &str, from_id: ObjectId, to_id: ObjectId) -> ContextMenuItem {
    ContextMenuItem {
        option_text: format!("Do action: {action_name}"),
        message: Message::new(action_name, from_id, to_id),
    }
}
