use serde::{Deserialize, Serialize};
use crate::message::ChatMessage;
use crate::session::ConversationStatus;

/// Events emitted by the conversation controller.
/// The UI projection subscribes to these for reactive updates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConversationEvent {
    /// Status moved to a new value
    StatusChanged(ConversationStatus),

    /// Transcript replaced by history from the backend (empty on load failure)
    HistoryLoaded(Vec<ChatMessage>),

    /// One message appended to the transcript
    MessageAppended(ChatMessage),

    /// Transcript cleared by a successful reset
    Cleared,
}
