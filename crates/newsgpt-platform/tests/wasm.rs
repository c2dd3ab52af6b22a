//! WASM-target tests for newsgpt-platform (Node.js runtime).
//!
//! Tests MemoryStorage and a SessionClient persisting into it under
//! wasm32-unknown-unknown via `wasm-pack test --node`.
//!
//! localStorage tests require a browser and live in browser.rs.

#![cfg(target_arch = "wasm32")]

use wasm_bindgen_test::*;

use newsgpt_core::ports::{ChatBackend, HttpPort, HttpRequest, HttpResponse, StoragePort};
use newsgpt_core::session_client::SessionClient;
use newsgpt_platform::storage::MemoryStorage;
use newsgpt_types::api::SESSION_HEADER;
use newsgpt_types::config::ClientConfig;
use newsgpt_types::TransportResult;

use async_trait::async_trait;
use std::cell::RefCell;
use std::rc::Rc;

// ─── MemoryStorage Tests ─────────────────────────────────

#[wasm_bindgen_test]
fn memory_storage_backend_name() {
    assert_eq!(MemoryStorage::new().backend_name(), "memory");
}

#[wasm_bindgen_test]
async fn memory_storage_set_and_get() {
    let storage = MemoryStorage::new();
    storage.set("key1", b"value1").await.unwrap();
    assert_eq!(storage.get("key1").await.unwrap(), Some(b"value1".to_vec()));
}

#[wasm_bindgen_test]
async fn memory_storage_delete() {
    let storage = MemoryStorage::with_value("key", b"val");
    storage.delete("key").await.unwrap();
    assert!(storage.get("key").await.unwrap().is_none());
}

#[wasm_bindgen_test]
async fn memory_storage_list_keys() {
    let storage = MemoryStorage::new();
    storage.set("prefix:a", b"1").await.unwrap();
    storage.set("prefix:b", b"2").await.unwrap();
    storage.set("other:c", b"3").await.unwrap();
    assert_eq!(storage.list_keys("prefix:").await.unwrap(), vec!["prefix:a", "prefix:b"]);
}

// ─── SessionClient over MemoryStorage ────────────────────

/// HTTP stub returning one fixed chat reply and remembering the last request
struct FixedHttp {
    last: RefCell<Option<HttpRequest>>,
}

#[async_trait(?Send)]
impl HttpPort for FixedHttp {
    async fn send(&self, req: HttpRequest) -> TransportResult<HttpResponse> {
        *self.last.borrow_mut() = Some(req);
        Ok(HttpResponse {
            status: 200,
            body: r#"{"sessionId":"abc123","response":"ok","timestamp":"2024-01-15T10:30:00Z"}"#
                .to_string(),
        })
    }
}

#[wasm_bindgen_test]
async fn session_token_persists_into_memory_storage() {
    let http = Rc::new(FixedHttp { last: RefCell::new(None) });
    let storage = Rc::new(MemoryStorage::new());
    let client = SessionClient::restore(http.clone(), storage.clone(), ClientConfig::default()).await;

    client.send_message("hi").await.unwrap();
    assert_eq!(
        storage.get("newsGptSessionId").await.unwrap(),
        Some(b"abc123".to_vec())
    );

    client.send_message("again").await.unwrap();
    let last = http.last.borrow().clone().unwrap();
    assert_eq!(last.header(SESSION_HEADER), Some("abc123"));
}

#[wasm_bindgen_test]
async fn session_token_restored_from_seeded_storage() {
    let http = Rc::new(FixedHttp { last: RefCell::new(None) });
    let storage = Rc::new(MemoryStorage::with_value("newsGptSessionId", b"earlier"));
    let client = SessionClient::restore(http, storage, ClientConfig::default()).await;
    assert_eq!(client.session_token().as_deref(), Some("earlier"));
}
