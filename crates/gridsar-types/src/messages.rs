//! Agent-to-agent message record.
//!
//! Messages ride the engine's messaging channel. This controller never
//! acts on inbound messages (it drains and discards them each cycle), but
//! it constructs outbound ones for context-menu options.

use serde::{Deserialize, Serialize};

use crate::ids::ObjectId;

/// A message addressed from one world object to another.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    /// Message payload.
    pub content: String,
    /// The sender's id.
    pub from_id: ObjectId,
    /// The recipient's id.
    pub to_id: ObjectId,
}

impl Message {
    /// Construct a message.
    pub fn new(content: impl Into<String>, from_id: ObjectId, to_id: ObjectId) -> Self {
        Self {
            content: content.into(),
            from_id,
            to_id,
        }
    }
}
