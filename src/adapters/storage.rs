use crate::domain::ports::Storage;
use crate::utils::error::{ExplorerError, Result};
use std::path::Path;

const BUNDLED_CATALOG_NAME: &str = "MovieList.json";
const BUNDLED_CATALOG: &[u8] = include_bytes!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/resources/MovieList.json"
));

/// 從磁碟上的資源目錄讀取檔案
#[derive(Debug, Clone)]
pub struct LocalStorage {
    base_path: String,
}

impl LocalStorage {
    pub fn new(base_path: String) -> Self {
        Self { base_path }
    }

    pub fn base_path(&self) -> &str {
        &self.base_path
    }
}

impl Storage for LocalStorage {
    async fn read_file(&self, path: &str) -> Result<Vec<u8>> {
        let full_path = Path::new(&self.base_path).join(path);
        tracing::debug!("Reading resource from {}", full_path.display());

        tokio::fs::read(&full_path).await.map_err(|e| {
            let path = full_path.display().to_string();
            match e.kind() {
                std::io::ErrorKind::NotFound => ExplorerError::ResourceNotFound { path },
                _ => ExplorerError::ReadFailure { path, source: e },
            }
        })
    }
}

/// 編譯進執行檔的目錄資源，只提供 `MovieList.json`
#[derive(Debug, Clone, Copy, Default)]
pub struct BundledStorage;

impl BundledStorage {
    pub fn new() -> Self {
        Self
    }
}

impl Storage for BundledStorage {
    async fn read_file(&self, path: &str) -> Result<Vec<u8>> {
        if path == BUNDLED_CATALOG_NAME {
            tracing::debug!("Serving bundled resource {}", path);
            Ok(BUNDLED_CATALOG.to_vec())
        } else {
            Err(ExplorerError::ResourceNotFound {
                path: format!("bundle://{}", path),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_local_storage_reads_file() {
        let temp_dir = TempDir::new().unwrap();
        std::fs::write(temp_dir.path().join("Sample.json"), b"{}").unwrap();

        let storage = LocalStorage::new(temp_dir.path().to_str().unwrap().to_string());
        let data = storage.read_file("Sample.json").await.unwrap();

        assert_eq!(data, b"{}");
    }

    #[tokio::test]
    async fn test_local_storage_missing_file_is_not_found() {
        let temp_dir = TempDir::new().unwrap();
        let storage = LocalStorage::new(temp_dir.path().to_str().unwrap().to_string());

        let err = storage.read_file("Missing.json").await.unwrap_err();

        match err {
            ExplorerError::ResourceNotFound { path } => assert!(path.ends_with("Missing.json")),
            other => panic!("expected ResourceNotFound, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_local_storage_directory_is_read_failure() {
        let temp_dir = TempDir::new().unwrap();
        std::fs::create_dir(temp_dir.path().join("Folder.json")).unwrap();
        let storage = LocalStorage::new(temp_dir.path().to_str().unwrap().to_string());

        let err = storage.read_file("Folder.json").await.unwrap_err();

        assert!(matches!(err, ExplorerError::ReadFailure { .. }));
    }

    #[test]
    fn test_bundled_storage_serves_only_catalog() {
        let storage = BundledStorage::new();

        let data = tokio_test::block_on(storage.read_file("MovieList.json")).unwrap();
        assert!(!data.is_empty());

        let err = tokio_test::block_on(storage.read_file("Other.json")).unwrap_err();
        assert!(matches!(err, ExplorerError::ResourceNotFound { .. }));
    }
}
