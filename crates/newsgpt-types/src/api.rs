//! Wire shapes exchanged with the NewsGPT backend.
//!
//! Field names follow the backend's camelCase JSON. `sessionId` is
//! treated as optional so a response without one simply leaves the
//! current token alone.

use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, TimeZone};
use serde::{Deserialize, Serialize};

use crate::message::ChatMessage;

pub const CHAT_PATH: &str = "/chat";
pub const HISTORY_PATH: &str = "/session/history";
pub const RESET_PATH: &str = "/session/reset";

/// Header carrying the session token on outbound requests
pub const SESSION_HEADER: &str = "x-session-id";

/// Body of `POST /chat`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatRequestBody {
    pub query: String,
}

/// Reply to `POST /chat`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatResponse {
    #[serde(default)]
    pub session_id: Option<String>,
    pub response: String,
    /// ISO-8601 server time of the reply
    #[serde(default)]
    pub timestamp: String,
}

/// Reply to `GET /session/history`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionHistoryResponse {
    #[serde(default)]
    pub session_id: Option<String>,
    #[serde(default)]
    pub history: Vec<ChatMessage>,
    #[serde(default)]
    pub timestamp: String,
}

/// Reply to `POST /session/reset`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionResetResponse {
    #[serde(default)]
    pub session_id: Option<String>,
    pub message: String,
    #[serde(default)]
    pub timestamp: String,
}

/// Body of a non-success response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Parse an ISO-8601 timestamp into epoch milliseconds.
///
/// Accepts the forms a browser `Date` does: RFC 3339, a `+hhmm` offset,
/// a date-time without offset (local time) and a bare date (UTC midnight).
pub fn parse_timestamp_millis(iso: &str) -> Option<i64> {
    let iso = iso.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(iso) {
        return Some(dt.timestamp_millis());
    }
    if let Ok(dt) = DateTime::parse_from_str(iso, "%Y-%m-%dT%H:%M:%S%.f%z") {
        return Some(dt.timestamp_millis());
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(iso, "%Y-%m-%dT%H:%M:%S%.f") {
        return Local
            .from_local_datetime(&naive)
            .earliest()
            .map(|dt| dt.timestamp_millis());
    }
    NaiveDate::parse_from_str(iso, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc().timestamp_millis())
}
