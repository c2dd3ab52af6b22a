//! `window.localStorage` backend.
//! Persistent across page reloads; values are stored as UTF-8 strings,
//! so the session token is readable in the browser's devtools as-is.

use async_trait::async_trait;
use web_sys::Storage;

use newsgpt_core::ports::StoragePort;
use newsgpt_types::{ChatError, Result};

pub struct LocalStorage {
    store: Storage,
}

impl LocalStorage {
    /// Grab the window's localStorage. Fails outside a browser window or
    /// when storage is disabled (e.g. some private-browsing modes).
    pub fn open() -> Result<Self> {
        let window = web_sys::window()
            .ok_or_else(|| ChatError::Storage("No window object".to_string()))?;

        let store = window
            .local_storage()
            .map_err(|e| ChatError::JsInterop(format!("{:?}", e)))?
            .ok_or_else(|| ChatError::Storage("localStorage not available".to_string()))?;

        Ok(Self { store })
    }
}

#[async_trait(?Send)]
impl StoragePort for LocalStorage {
    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>> {
        self.store
            .get_item(key)
            .map(|value| value.map(String::into_bytes))
            .map_err(|e| ChatError::Storage(format!("{:?}", e)))
    }

    async fn set(&self, key: &str, value: &[u8]) -> Result<()> {
        let text = std::str::from_utf8(value)
            .map_err(|e| ChatError::Storage(format!("localStorage holds text only: {}", e)))?;
        self.store
            .set_item(key, text)
            .map_err(|e| ChatError::Storage(format!("{:?}", e)))
    }

    async fn delete(&self, key: &str) -> Result<()> {
        self.store
            .remove_item(key)
            .map_err(|e| ChatError::Storage(format!("{:?}", e)))
    }

    async fn list_keys(&self, prefix: &str) -> Result<Vec<String>> {
        let len = self
            .store
            .length()
            .map_err(|e| ChatError::Storage(format!("{:?}", e)))?;

        let mut keys = Vec::new();
        for i in 0..len {
            if let Ok(Some(key)) = self.store.key(i) {
                if key.starts_with(prefix) {
                    keys.push(key);
                }
            }
        }
        Ok(keys)
    }

    fn backend_name(&self) -> &str {
        "localstorage"
    }
}
