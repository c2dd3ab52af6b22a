//! WASM-target tests for newsgpt-core.
//!
//! Runs the EventBus and ConversationController against a canned backend
//! under wasm32-unknown-unknown via `wasm-pack test --node`.

#![cfg(target_arch = "wasm32")]

use wasm_bindgen_test::*;

use newsgpt_core::controller::{ConversationController, SEND_FAILED};
use newsgpt_core::event_bus::EventBus;
use newsgpt_core::ports::ChatBackend;
use newsgpt_types::api::*;
use newsgpt_types::event::ConversationEvent;
use newsgpt_types::message::*;
use newsgpt_types::session::ConversationStatus;
use newsgpt_types::{TransportError, TransportResult};

use async_trait::async_trait;
use std::rc::Rc;

/// Backend that always answers with the same reply, or always fails
struct CannedBackend {
    fail: bool,
}

#[async_trait(?Send)]
impl ChatBackend for CannedBackend {
    async fn send_message(&self, query: &str) -> TransportResult<ChatResponse> {
        if self.fail {
            return Err(TransportError::Network("offline".to_string()));
        }
        Ok(ChatResponse {
            session_id: Some("wasm".to_string()),
            response: format!("echo: {}", query),
            timestamp: "2024-01-15T10:30:00Z".to_string(),
        })
    }

    async fn fetch_history(&self) -> TransportResult<SessionHistoryResponse> {
        Ok(SessionHistoryResponse {
            session_id: Some("wasm".to_string()),
            history: vec![ChatMessage::assistant("welcome back", 1)],
            timestamp: String::new(),
        })
    }

    async fn reset_session(&self) -> TransportResult<SessionResetResponse> {
        Ok(SessionResetResponse {
            session_id: Some("wasm".to_string()),
            message: "reset".to_string(),
            timestamp: String::new(),
        })
    }

    fn session_token(&self) -> Option<String> {
        Some("wasm".to_string())
    }
}

#[wasm_bindgen_test]
fn event_bus_emit_and_drain() {
    let bus = EventBus::new();
    bus.emit(ConversationEvent::Cleared);
    assert!(bus.has_pending());
    assert_eq!(bus.drain().len(), 1);
    assert!(!bus.has_pending());
}

#[wasm_bindgen_test]
async fn controller_loads_history() {
    let controller =
        ConversationController::open(Rc::new(CannedBackend { fail: false }), EventBus::new()).await;
    assert_eq!(controller.messages().len(), 1);
    assert_eq!(controller.status(), ConversationStatus::Idle);
}

#[wasm_bindgen_test]
async fn controller_send_and_reset() {
    let controller =
        ConversationController::open(Rc::new(CannedBackend { fail: false }), EventBus::new()).await;

    controller.send_message("hi").await;
    let messages = controller.messages();
    assert_eq!(messages.len(), 3);
    assert_eq!(messages[2].content, "echo: hi");

    controller.reset_session().await;
    assert!(controller.messages().is_empty());
}

#[wasm_bindgen_test]
async fn controller_failed_send_keeps_message() {
    let controller =
        ConversationController::open(Rc::new(CannedBackend { fail: true }), EventBus::new()).await;

    controller.send_message("hi").await;
    let messages = controller.messages();
    assert_eq!(messages.last().map(|m| m.role), Some(Role::User));
    assert_eq!(controller.status(), ConversationStatus::Error(SEND_FAILED.to_string()));
}
