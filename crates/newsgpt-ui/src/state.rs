//! View state that drives rendering.
//! This is a read-only projection of the conversation controller,
//! updated each frame by draining the EventBus.

use chrono::{DateTime, Local, Utc};
use newsgpt_types::event::ConversationEvent;
use newsgpt_types::message::{ChatMessage, Role};
use newsgpt_types::session::ConversationStatus;

/// State visible to the chat panel
pub struct ChatView {
    /// Transcript as last reported by the controller
    pub messages: Vec<ChatMessage>,
    pub status: ConversationStatus,
    /// Input field content
    pub input_text: String,
}

impl ChatView {
    pub fn new() -> Self {
        Self {
            messages: Vec::new(),
            status: ConversationStatus::Loading,
            input_text: String::new(),
        }
    }

    /// Apply controller events in order
    pub fn process_events(&mut self, events: Vec<ConversationEvent>) {
        for event in events {
            match event {
                ConversationEvent::StatusChanged(status) => self.status = status,
                ConversationEvent::HistoryLoaded(messages) => self.messages = messages,
                ConversationEvent::MessageAppended(message) => self.messages.push(message),
                ConversationEvent::Cleared => self.messages.clear(),
            }
        }
    }

    pub fn is_busy(&self) -> bool {
        self.status.is_busy()
    }

    /// Input and reset controls are disabled while an operation is in flight
    pub fn input_enabled(&self) -> bool {
        !self.is_busy()
    }

    pub fn can_send(&self) -> bool {
        self.input_enabled() && !self.input_text.trim().is_empty()
    }

    /// Take the typed message if it may be sent, clearing the input.
    pub fn take_submission(&mut self) -> Option<String> {
        if !self.can_send() {
            return None;
        }
        Some(std::mem::take(&mut self.input_text))
    }

    pub fn error_banner(&self) -> Option<&str> {
        self.status.error_message()
    }

    pub fn show_welcome(&self) -> bool {
        self.messages.is_empty() && !self.is_busy()
    }

    pub fn show_thinking(&self) -> bool {
        self.status == ConversationStatus::Loading
    }

    pub fn status_text(&self) -> &'static str {
        match self.status {
            ConversationStatus::Loading => "Loading...",
            ConversationStatus::Idle => "Ready",
            ConversationStatus::Resetting => "Resetting...",
            ConversationStatus::Error(_) => "Error",
        }
    }
}

impl Default for ChatView {
    fn default() -> Self {
        Self::new()
    }
}

pub fn author_label(role: Role) -> &'static str {
    match role {
        Role::User => "You",
        Role::Assistant => "NewsGPT",
    }
}

/// Local `HH:MM` for an epoch-millisecond timestamp; empty if out of range.
pub fn format_timestamp(millis: i64) -> String {
    DateTime::<Utc>::from_timestamp_millis(millis)
        .map(|dt| dt.with_timezone(&Local).format("%H:%M").to_string())
        .unwrap_or_default()
}
