//! Conversation controller — the state machine behind the chat view.
//!
//! States: `Loading` → `Idle` ⇄ `Loading`/`Resetting`, with `Error(msg)`
//! standing in for `Idle` after a failure.
//!
//! Every operation takes `&self` and only borrows the state between
//! awaits, so a caller may start a reset while a send is still in flight.
//! Completions then apply in whatever order they arrive and the last one
//! wins. Mutual exclusion is up to the presentation layer, which should
//! disable its controls while [`ConversationController::is_busy`] holds.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use newsgpt_types::{
    api::parse_timestamp_millis,
    event::ConversationEvent,
    message::{now_millis, ChatMessage},
    session::{ConversationState, ConversationStatus},
};

use crate::event_bus::EventBus;
use crate::ports::ChatBackend;

pub const LOAD_HISTORY_FAILED: &str = "Failed to load chat history. Please try again later.";
pub const SEND_FAILED: &str = "Failed to send message. Please try again later.";
pub const RESET_FAILED: &str = "Failed to reset chat. Please try again later.";

pub struct ConversationController {
    backend: Rc<dyn ChatBackend>,
    state: RefCell<ConversationState>,
    event_bus: EventBus,
    history_requested: Cell<bool>,
}

impl ConversationController {
    /// Create a controller in the `Loading` state.
    ///
    /// The caller is expected to drive [`Self::load_history`] right away;
    /// use [`Self::open`] when it can simply be awaited.
    pub fn new(backend: Rc<dyn ChatBackend>, event_bus: EventBus) -> Self {
        Self {
            backend,
            state: RefCell::new(ConversationState::new()),
            event_bus,
            history_requested: Cell::new(false),
        }
    }

    /// Create a controller and run the initial history load.
    pub async fn open(backend: Rc<dyn ChatBackend>, event_bus: EventBus) -> Self {
        let controller = Self::new(backend, event_bus);
        controller.load_history().await;
        controller
    }

    /// Snapshot of the current state
    pub fn state(&self) -> ConversationState {
        self.state.borrow().clone()
    }

    pub fn messages(&self) -> Vec<ChatMessage> {
        self.state.borrow().messages.clone()
    }

    pub fn status(&self) -> ConversationStatus {
        self.state.borrow().status.clone()
    }

    pub fn is_busy(&self) -> bool {
        self.state.borrow().status.is_busy()
    }

    pub fn session_token(&self) -> Option<String> {
        self.backend.session_token()
    }

    /// Fetch the transcript from the backend. Runs once per controller;
    /// later calls are ignored.
    pub async fn load_history(&self) {
        if self.history_requested.replace(true) {
            log::warn!("Chat history already requested; ignoring repeat load");
            return;
        }

        self.set_status(ConversationStatus::Loading);

        match self.backend.fetch_history().await {
            Ok(response) => {
                log::info!("Loaded {} messages of chat history", response.history.len());
                self.replace_messages(response.history);
                self.set_status(ConversationStatus::Idle);
            }
            Err(e) => {
                log::error!("Failed to load chat history: {}", e);
                self.replace_messages(Vec::new());
                self.set_status(ConversationStatus::Error(LOAD_HISTORY_FAILED.to_string()));
            }
        }
    }

    /// Send a user message.
    ///
    /// The user message is appended before the backend is called and is
    /// kept even if the call fails.
    pub async fn send_message(&self, content: &str) {
        self.push_message(ChatMessage::user_now(content));
        self.set_status(ConversationStatus::Loading);

        match self.backend.send_message(content).await {
            Ok(response) => {
                let timestamp = parse_timestamp_millis(&response.timestamp).unwrap_or_else(|| {
                    log::warn!(
                        "Unparseable server timestamp {:?}; using local clock",
                        response.timestamp
                    );
                    now_millis()
                });
                self.push_message(ChatMessage::assistant(response.response, timestamp));
                self.set_status(ConversationStatus::Idle);
            }
            Err(e) => {
                log::error!("Failed to send message: {}", e);
                self.set_status(ConversationStatus::Error(SEND_FAILED.to_string()));
            }
        }
    }

    /// Start a fresh session. Clears the transcript only on success.
    pub async fn reset_session(&self) {
        self.set_status(ConversationStatus::Resetting);

        match self.backend.reset_session().await {
            Ok(response) => {
                log::info!("Session reset: {}", response.message);
                self.state.borrow_mut().messages.clear();
                self.event_bus.emit(ConversationEvent::Cleared);
                self.set_status(ConversationStatus::Idle);
            }
            Err(e) => {
                log::error!("Failed to reset chat: {}", e);
                self.set_status(ConversationStatus::Error(RESET_FAILED.to_string()));
            }
        }
    }

    fn set_status(&self, status: ConversationStatus) {
        self.state.borrow_mut().status = status.clone();
        self.event_bus.emit(ConversationEvent::StatusChanged(status));
    }

    fn push_message(&self, message: ChatMessage) {
        self.state.borrow_mut().messages.push(message.clone());
        self.event_bus.emit(ConversationEvent::MessageAppended(message));
    }

    fn replace_messages(&self, messages: Vec<ChatMessage>) {
        self.state.borrow_mut().messages = messages.clone();
        self.event_bus.emit(ConversationEvent::HistoryLoaded(messages));
    }
}
