//! Session client — the only component that talks to the NewsGPT backend.
//!
//! Each operation is a single round trip. The client echoes the current
//! session token in the `x-session-id` header and captures any token the
//! backend hands back, persisting it through the storage port so it
//! survives restarts. Errors are never recovered here.

use std::cell::RefCell;
use std::rc::Rc;

use async_trait::async_trait;
use serde::de::DeserializeOwned;

use newsgpt_types::{
    TransportError, TransportResult,
    api::{
        ChatRequestBody, ChatResponse, ErrorResponse, SessionHistoryResponse,
        SessionResetResponse, CHAT_PATH, HISTORY_PATH, RESET_PATH, SESSION_HEADER,
    },
    config::ClientConfig,
};

use crate::ports::{ChatBackend, HttpMethod, HttpPort, HttpRequest, HttpResponse, StoragePort};

pub struct SessionClient {
    http: Rc<dyn HttpPort>,
    storage: Rc<dyn StoragePort>,
    config: ClientConfig,
    token: RefCell<Option<String>>,
}

impl SessionClient {
    /// Build a client, picking up the token persisted by a previous run.
    ///
    /// An unreadable token is treated as "no session yet".
    pub async fn restore(
        http: Rc<dyn HttpPort>,
        storage: Rc<dyn StoragePort>,
        config: ClientConfig,
    ) -> Self {
        let token = match storage.get(&config.session_key).await {
            Ok(Some(bytes)) => match String::from_utf8(bytes) {
                Ok(token) => Some(token).filter(|t| !t.is_empty()),
                Err(e) => {
                    log::warn!("Discarding persisted session token that is not UTF-8: {}", e);
                    None
                }
            },
            Ok(None) => None,
            Err(e) => {
                log::warn!("Could not read session token from {}: {}", storage.backend_name(), e);
                None
            }
        };

        if token.is_some() {
            log::info!("Resuming persisted session");
        }

        Self {
            http,
            storage,
            config,
            token: RefCell::new(token),
        }
    }

    fn build_request(&self, method: HttpMethod, path: &str, body: Option<String>) -> HttpRequest {
        let mut headers = vec![("Content-Type".to_string(), "application/json".to_string())];
        if let Some(token) = self.token.borrow().as_ref() {
            headers.push((SESSION_HEADER.to_string(), token.clone()));
        }

        HttpRequest {
            method,
            url: self.config.endpoint(path),
            headers,
            body,
        }
    }

    async fn round_trip<T: DeserializeOwned>(
        &self,
        method: HttpMethod,
        path: &str,
        body: Option<String>,
    ) -> TransportResult<T> {
        let req = self.build_request(method, path, body);
        let response = self.http.send(req).await?;

        if !response.is_success() {
            return Err(status_error(&response));
        }

        serde_json::from_str(&response.body).map_err(|e| TransportError::Decode(e.to_string()))
    }

    /// Last-write-wins overwrite of the in-memory and persisted token.
    async fn capture_token(&self, session_id: Option<&str>) {
        let Some(token) = session_id.filter(|t| !t.is_empty()) else {
            return;
        };

        *self.token.borrow_mut() = Some(token.to_string());
        log::debug!("Captured session token");

        if let Err(e) = self.storage.set(&self.config.session_key, token.as_bytes()).await {
            log::warn!("Failed to persist session token: {}", e);
        }
    }
}

#[async_trait(?Send)]
impl ChatBackend for SessionClient {
    async fn send_message(&self, query: &str) -> TransportResult<ChatResponse> {
        let body = serde_json::to_string(&ChatRequestBody {
            query: query.to_string(),
        })
        .map_err(|e| TransportError::Decode(e.to_string()))?;

        let response: ChatResponse = self
            .round_trip(HttpMethod::Post, CHAT_PATH, Some(body))
            .await
            .inspect_err(|e| log::error!("Error sending chat message: {}", e))?;

        self.capture_token(response.session_id.as_deref()).await;
        Ok(response)
    }

    async fn fetch_history(&self) -> TransportResult<SessionHistoryResponse> {
        let response: SessionHistoryResponse = self
            .round_trip(HttpMethod::Get, HISTORY_PATH, None)
            .await
            .inspect_err(|e| log::error!("Error getting chat history: {}", e))?;

        self.capture_token(response.session_id.as_deref()).await;
        Ok(response)
    }

    async fn reset_session(&self) -> TransportResult<SessionResetResponse> {
        let response: SessionResetResponse = self
            .round_trip(HttpMethod::Post, RESET_PATH, None)
            .await
            .inspect_err(|e| log::error!("Error resetting chat session: {}", e))?;

        self.capture_token(response.session_id.as_deref()).await;
        Ok(response)
    }

    fn session_token(&self) -> Option<String> {
        self.token.borrow().clone()
    }
}

/// Map a non-2xx response to an error, preferring the backend's
/// `{"error": ...}` message over the raw body.
fn status_error(response: &HttpResponse) -> TransportError {
    let message = serde_json::from_str::<ErrorResponse>(&response.body)
        .map(|e| e.error)
        .unwrap_or_else(|_| {
            if response.body.is_empty() {
                "unknown error".to_string()
            } else {
                response.body.clone()
            }
        });

    TransportError::Status {
        status: response.status,
        message,
    }
}
