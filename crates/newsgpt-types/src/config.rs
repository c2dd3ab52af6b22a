use serde::{Deserialize, Serialize};
use crate::{ChatError, Result};

pub const DEFAULT_API_BASE: &str = "http://localhost:3000/api";
pub const DEFAULT_SESSION_KEY: &str = "newsGptSessionId";

/// Top-level client configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Base URL every endpoint path is appended to
    pub api_base: String,
    /// Storage key holding the persisted session token
    pub session_key: String,
    /// Per-request timeout; `None` waits indefinitely
    pub request_timeout_ms: Option<u64>,
    pub storage: StorageConfig,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            session_key: DEFAULT_SESSION_KEY.to_string(),
            request_timeout_ms: None,
            storage: StorageConfig::default(),
        }
    }
}

impl ClientConfig {
    pub fn validate(&self) -> Result<()> {
        if self.api_base.trim().is_empty() {
            return Err(ChatError::Config("api_base must not be empty".to_string()));
        }
        if self.session_key.trim().is_empty() {
            return Err(ChatError::Config("session_key must not be empty".to_string()));
        }
        if self.request_timeout_ms == Some(0) {
            return Err(ChatError::Config("request_timeout_ms must be positive".to_string()));
        }
        Ok(())
    }

    /// Join the API base with an endpoint path, tolerating a trailing slash.
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.api_base.trim_end_matches('/'), path)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StorageConfig {
    pub backend: StorageBackendType,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            backend: StorageBackendType::Auto,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum StorageBackendType {
    /// Auto-detect best available backend
    Auto,
    Memory,
    LocalStorage,
}
