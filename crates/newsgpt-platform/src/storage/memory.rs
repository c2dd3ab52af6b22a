//! In-memory storage backend.
//! Used as the fallback when localStorage is unavailable, and in tests.
//! Nothing survives a page reload.

use std::cell::RefCell;
use std::collections::BTreeMap;
use async_trait::async_trait;
use newsgpt_core::ports::StoragePort;
use newsgpt_types::Result;

#[derive(Default)]
pub struct MemoryStorage {
    data: RefCell<BTreeMap<String, Vec<u8>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-seed one entry, e.g. a session token left by an earlier run.
    pub fn with_value(key: &str, value: &[u8]) -> Self {
        let storage = Self::new();
        storage.data.borrow_mut().insert(key.to_string(), value.to_vec());
        storage
    }

    pub fn len(&self) -> usize {
        self.data.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.borrow().is_empty()
    }
}

#[async_trait(?Send)]
impl StoragePort for MemoryStorage {
    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>> {
        Ok(self.data.borrow().get(key).cloned())
    }

    async fn set(&self, key: &str, value: &[u8]) -> Result<()> {
        self.data.borrow_mut().insert(key.to_string(), value.to_vec());
        Ok(())
    }

    async fn delete(&self, key: &str) -> Result<()> {
        self.data.borrow_mut().remove(key);
        Ok(())
    }

    /// Keys come back sorted.
    async fn list_keys(&self, prefix: &str) -> Result<Vec<String>> {
        Ok(self
            .data
            .borrow()
            .range(prefix.to_string()..)
            .take_while(|(k, _)| k.starts_with(prefix))
            .map(|(k, _)| k.clone())
            .collect())
    }

    fn backend_name(&self) -> &str {
        "memory"
    }
}
