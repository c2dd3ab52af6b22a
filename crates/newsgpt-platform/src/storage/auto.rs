//! Pick a storage backend.
//!
//! Priority for `Auto`: localStorage → Memory (fallback)

use std::rc::Rc;
use newsgpt_core::ports::StoragePort;
use newsgpt_types::{config::{StorageBackendType, StorageConfig}, Result};
use super::{LocalStorage, MemoryStorage};

/// Try to open the best available storage backend.
/// Returns a trait object so callers are backend-agnostic.
pub fn auto_detect_storage() -> Rc<dyn StoragePort> {
    match LocalStorage::open() {
        Ok(local) => {
            log::info!("Storage backend: localStorage");
            Rc::new(local)
        }
        Err(e) => {
            log::warn!("localStorage unavailable ({}), falling back to memory", e);
            Rc::new(MemoryStorage::new())
        }
    }
}

/// Open the backend named in the config. An explicitly requested
/// backend that cannot be opened is an error rather than a silent
/// fallback.
pub fn open_storage(config: &StorageConfig) -> Result<Rc<dyn StoragePort>> {
    match config.backend {
        StorageBackendType::Auto => Ok(auto_detect_storage()),
        StorageBackendType::Memory => {
            log::info!("Storage backend: memory");
            Ok(Rc::new(MemoryStorage::new()))
        }
        StorageBackendType::LocalStorage => {
            let local = LocalStorage::open()?;
            log::info!("Storage backend: localStorage");
            Ok(Rc::new(local))
        }
    }
}
