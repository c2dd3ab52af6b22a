//! WASM-target tests for newsgpt-types.
//!
//! Mirrors a subset of the native unit tests but runs under
//! wasm32-unknown-unknown via `wasm-pack test --node`.

#![cfg(target_arch = "wasm32")]

use wasm_bindgen_test::*;

use newsgpt_types::api::*;
use newsgpt_types::config::*;
use newsgpt_types::message::*;
use newsgpt_types::session::*;

#[wasm_bindgen_test]
fn message_user() {
    let msg = ChatMessage::user("Hello", 1);
    assert_eq!(msg.role, Role::User);
    assert_eq!(msg.content, "Hello");
}

#[wasm_bindgen_test]
fn wall_clock_is_positive() {
    // chrono reads Date.now() through wasmbind
    assert!(now_millis() > 0);
}

#[wasm_bindgen_test]
fn chat_response_deserialize() {
    let json = r#"{"sessionId":"abc123","response":"Hello","timestamp":"2024-01-15T10:30:00Z"}"#;
    let resp: ChatResponse = serde_json::from_str(json).unwrap();
    assert_eq!(resp.session_id.as_deref(), Some("abc123"));
}

#[wasm_bindgen_test]
fn parse_timestamp() {
    assert_eq!(parse_timestamp_millis("1970-01-01T00:00:02Z"), Some(2000));
}

#[wasm_bindgen_test]
fn initial_state_is_loading() {
    assert_eq!(ConversationState::new().status, ConversationStatus::Loading);
}

#[wasm_bindgen_test]
fn config_default_validates() {
    assert!(ClientConfig::default().validate().is_ok());
}
