use crate::domain::ports::Storage;
use crate::utils::error::{ExplorerError, Result};
use serde::de::DeserializeOwned;

/// 透過 [`Storage`] 讀取 `<name>.json` 並解碼
pub struct JsonLoader<S: Storage> {
    storage: S,
}

impl<S: Storage> JsonLoader<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    pub async fn load<T: DeserializeOwned>(&self, file_name: &str) -> Result<T> {
        let path = format!("{}.json", file_name);
        let data = self.storage.read_file(&path).await?;
        tracing::debug!("Loaded {} bytes from {}", data.len(), path);

        serde_json::from_slice(&data).map_err(|e| {
            tracing::warn!("Failed to decode {}: {}", path, e);
            ExplorerError::DecodeFailure(e)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    struct MockStorage {
        files: HashMap<String, Vec<u8>>,
    }

    impl Storage for MockStorage {
        async fn read_file(&self, path: &str) -> Result<Vec<u8>> {
            self.files
                .get(path)
                .cloned()
                .ok_or_else(|| ExplorerError::ResourceNotFound {
                    path: path.to_string(),
                })
        }
    }

    fn loader_with(name: &str, content: &str) -> JsonLoader<MockStorage> {
        let mut files = HashMap::new();
        files.insert(name.to_string(), content.as_bytes().to_vec());
        JsonLoader::new(MockStorage { files })
    }

    #[tokio::test]
    async fn test_load_appends_json_extension() {
        let loader = loader_with("Numbers.json", "[1, 2, 3]");

        let numbers: Vec<i32> = loader.load("Numbers").await.unwrap();

        assert_eq!(numbers, vec![1, 2, 3]);
    }

    #[tokio::test]
    async fn test_malformed_json_is_decode_failure() {
        let loader = loader_with("Broken.json", "{ not json");

        let err = loader.load::<serde_json::Value>("Broken").await.unwrap_err();

        assert!(matches!(err, ExplorerError::DecodeFailure(_)));
    }

    #[tokio::test]
    async fn test_storage_error_passes_through() {
        let loader = loader_with("Other.json", "{}");

        let err = loader.load::<serde_json::Value>("Missing").await.unwrap_err();

        match err {
            ExplorerError::ResourceNotFound { path } => assert_eq!(path, "Missing.json"),
            other => panic!("expected ResourceNotFound, got {:?}", other),
        }
    }
}
