//! Port traits — the hexagonal architecture boundary.
//!
//! These traits are defined here in `newsgpt-core` (pure Rust).
//! Implementations live in `newsgpt-platform` (browser adapters).
//! The core never imports platform code; it only depends on these traits.

use async_trait::async_trait;
use newsgpt_types::{
    Result, TransportResult,
    api::{ChatResponse, SessionHistoryResponse, SessionResetResponse},
};

// ─── HTTP Port ───────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
}

/// A fully-resolved outbound request
#[derive(Debug, Clone)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub url: String,
    pub headers: Vec<(String, String)>,
    /// JSON body, already serialized
    pub body: Option<String>,
}

impl HttpRequest {
    /// Case-insensitive header lookup
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

/// Raw response; status checking is left to the caller
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

#[async_trait(?Send)]
pub trait HttpPort {
    /// Perform one round trip. Only transport-level failures (network,
    /// timeout) are errors here; a 4xx/5xx is still `Ok`.
    async fn send(&self, req: HttpRequest) -> TransportResult<HttpResponse>;
}

// ─── Storage Port ────────────────────────────────────────────

#[async_trait(?Send)]
pub trait StoragePort {
    /// Get a value by key
    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>>;

    /// Set a value
    async fn set(&self, key: &str, value: &[u8]) -> Result<()>;

    /// Delete a value
    async fn delete(&self, key: &str) -> Result<()>;

    /// List keys with a given prefix
    async fn list_keys(&self, prefix: &str) -> Result<Vec<String>>;

    /// Check if a key exists
    async fn exists(&self, key: &str) -> Result<bool> {
        Ok(self.get(key).await?.is_some())
    }

    /// Name of this backend (for logging/debug)
    fn backend_name(&self) -> &str;
}

// ─── Chat Backend Port ───────────────────────────────────────

/// The three backend operations the conversation controller sequences.
/// Implemented by [`crate::session_client::SessionClient`]; tests swap in
/// scripted backends.
#[async_trait(?Send)]
pub trait ChatBackend {
    async fn send_message(&self, query: &str) -> TransportResult<ChatResponse>;

    async fn fetch_history(&self) -> TransportResult<SessionHistoryResponse>;

    async fn reset_session(&self) -> TransportResult<SessionResetResponse>;

    /// Current session token, if the backend has issued one
    fn session_token(&self) -> Option<String>;
}
