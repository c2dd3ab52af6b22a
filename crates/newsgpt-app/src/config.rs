//! Client configuration restore.

use newsgpt_core::ports::StoragePort;
use newsgpt_types::config::ClientConfig;

pub const CONFIG_STORAGE_KEY: &str = "newsgpt:config";

/// Read the saved config, falling back to defaults when it is missing,
/// unreadable or invalid.
pub async fn load_config(storage: &dyn StoragePort) -> ClientConfig {
    let data = match storage.get(CONFIG_STORAGE_KEY).await {
        Ok(Some(data)) => data,
        Ok(None) => return ClientConfig::default(),
        Err(e) => {
            log::warn!("Could not read config: {}", e);
            return ClientConfig::default();
        }
    };

    let config = match serde_json::from_slice::<ClientConfig>(&data) {
        Ok(config) => config,
        Err(e) => {
            log::warn!("Ignoring malformed config: {}", e);
            return ClientConfig::default();
        }
    };

    match config.validate() {
        Ok(()) => {
            log::info!("Config restored from storage (api_base = {})", config.api_base);
            config
        }
        Err(e) => {
            log::warn!("Ignoring invalid config: {}", e);
            ClientConfig::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use newsgpt_platform::storage::MemoryStorage;
    use newsgpt_types::config::StorageBackendType;

    #[test]
    fn test_load_config_missing_uses_defaults() {
        let storage = MemoryStorage::new();
        assert_eq!(block_on(load_config(&storage)), ClientConfig::default());
    }

    #[test]
    fn test_load_config_restores_saved_values() {
        let saved = br#"{"api_base":"https://news.example.com/api","request_timeout_ms":8000,"storage":{"backend":"Memory"}}"#;
        let storage = MemoryStorage::with_value(CONFIG_STORAGE_KEY, saved);

        let config = block_on(load_config(&storage));
        assert_eq!(config.api_base, "https://news.example.com/api");
        assert_eq!(config.request_timeout_ms, Some(8000));
        assert_eq!(config.storage.backend, StorageBackendType::Memory);
        assert_eq!(config.session_key, "newsGptSessionId");
    }

    #[test]
    fn test_load_config_malformed_uses_defaults() {
        let storage = MemoryStorage::with_value(CONFIG_STORAGE_KEY, b"{not json");
        assert_eq!(block_on(load_config(&storage)), ClientConfig::default());
    }

    #[test]
    fn test_load_config_invalid_uses_defaults() {
        let storage = MemoryStorage::with_value(CONFIG_STORAGE_KEY, br#"{"api_base":""}"#);
        assert_eq!(block_on(load_config(&storage)), ClientConfig::default());
    }
}
