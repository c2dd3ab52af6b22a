#[cfg(test)]
mod tests {
    use crate::http::FetchHttp;
    use crate::storage::{open_storage, MemoryStorage};
    use newsgpt_core::ports::StoragePort;
    use newsgpt_types::config::{ClientConfig, StorageBackendType, StorageConfig};
    use futures::executor::block_on;

    // ─── MemoryStorage Tests ─────────────────────────────────

    #[test]
    fn test_memory_storage_set_get_overwrite() {
        let storage = MemoryStorage::new();
        block_on(async {
            assert!(storage.get("newsGptSessionId").await.unwrap().is_none());
            storage.set("newsGptSessionId", b"abc123").await.unwrap();
            storage.set("newsGptSessionId", b"def456").await.unwrap();
            assert_eq!(
                storage.get("newsGptSessionId").await.unwrap(),
                Some(b"def456".to_vec())
            );
        });
        assert_eq!(storage.len(), 1);
    }

    #[test]
    fn test_memory_storage_seeded_value() {
        let storage = MemoryStorage::with_value("newsGptSessionId", b"seeded");
        let value = block_on(storage.get("newsGptSessionId")).unwrap();
        assert_eq!(value, Some(b"seeded".to_vec()));
        assert!(block_on(storage.exists("newsGptSessionId")).unwrap());
    }

    #[test]
    fn test_memory_storage_delete() {
        let storage = MemoryStorage::with_value("k", b"v");
        block_on(storage.delete("k")).unwrap();
        block_on(storage.delete("never-there")).unwrap();
        assert!(storage.is_empty());
    }

    #[test]
    fn test_memory_storage_list_keys_sorted_by_prefix() {
        let storage = MemoryStorage::new();
        block_on(async {
            storage.set("newsgpt:b", b"2").await.unwrap();
            storage.set("newsgpt:a", b"1").await.unwrap();
            storage.set("other", b"3").await.unwrap();
            storage.set("newsgpu", b"4").await.unwrap();

            let keys = storage.list_keys("newsgpt:").await.unwrap();
            assert_eq!(keys, vec!["newsgpt:a", "newsgpt:b"]);
            assert_eq!(storage.list_keys("").await.unwrap().len(), 4);
            assert!(storage.list_keys("zzz").await.unwrap().is_empty());
        });
    }

    #[test]
    fn test_memory_storage_backend_name() {
        assert_eq!(MemoryStorage::new().backend_name(), "memory");
    }

    // ─── Backend selection ───────────────────────────────────

    #[test]
    fn test_open_storage_memory() {
        let config = StorageConfig { backend: StorageBackendType::Memory };
        let storage = open_storage(&config).unwrap();
        assert_eq!(storage.backend_name(), "memory");
    }

    #[test]
    fn test_fetch_http_from_config() {
        // Construction only; issuing requests needs a browser.
        let config = ClientConfig {
            request_timeout_ms: Some(2500),
            ..ClientConfig::default()
        };
        let _http = FetchHttp::from_config(&config);
        let _untimed = FetchHttp::new(None);
    }
}
