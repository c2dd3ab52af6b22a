use serde::{Deserialize, Serialize};
use crate::message::ChatMessage;

/// Status of the conversation state machine.
///
/// `Error` accepts new actions exactly like `Idle`; it only carries the
/// text of the last failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConversationStatus {
    Loading,
    Idle,
    Resetting,
    Error(String),
}

impl ConversationStatus {
    /// An operation is in flight; the invoking surface should be disabled.
    pub fn is_busy(&self) -> bool {
        matches!(self, ConversationStatus::Loading | ConversationStatus::Resetting)
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            ConversationStatus::Error(msg) => Some(msg.as_str()),
            _ => None,
        }
    }
}

/// Transcript plus status, owned by the conversation controller
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversationState {
    pub messages: Vec<ChatMessage>,
    pub status: ConversationStatus,
}

impl ConversationState {
    /// State at construction: nothing loaded yet, history fetch pending.
    pub fn new() -> Self {
        Self {
            messages: Vec::new(),
            status: ConversationStatus::Loading,
        }
    }
}

impl Default for ConversationState {
    fn default() -> Self {
        Self::new()
    }
}
