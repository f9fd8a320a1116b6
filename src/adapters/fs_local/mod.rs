// Local filesystem adapter - Working directory operations

use std::path::Path;

use async_trait::async_trait;
use tokio::fs;
use tracing::{debug, info};

use crate::domain::errors::*;
use crate::ports::*;

/// Local filesystem adapter
pub struct LocalFsAdapter;

impl LocalFsAdapter {
    /// Create new local filesystem adapter
    pub fn new() -> Self {
        Self
    }
}

impl Default for LocalFsAdapter {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl FsPort for LocalFsAdapter {
    async fn create_directory(&self, dir: &Path) -> Result<(), DomainError> {
        fs::create_dir_all(dir).await.map_err(|e| {
            DomainError::FsFail(format!(
                "Failed to create directory {}: {}",
                dir.display(),
                e
            ))
        })?;
        debug!(dir = %dir.display(), "Directory ready");
        Ok(())
    }

    async fn list_files(&self, dir: &Path) -> Result<Vec<String>, DomainError> {
        let mut entries = fs::read_dir(dir).await.map_err(|e| {
            DomainError::FsFail(format!("Failed to read directory {}: {}", dir.display(), e))
        })?;

        let mut names = Vec::new();
        loop {
            let entry = match entries.next_entry().await {
                Ok(Some(entry)) => entry,
                Ok(None) => break,
                Err(e) => {
                    return Err(DomainError::FsFail(format!(
                        "Failed to read directory {}: {}",
                        dir.display(),
                        e
                    )))
                }
            };

            let is_file = fs::metadata(entry.path())
                .await
                .map(|m| m.is_file())
                .unwrap_or(false);
            if !is_file {
                continue;
            }

            if let Some(name) = entry.file_name().to_str() {
                names.push(name.to_string());
            }
        }

        names.sort();
        Ok(names)
    }

    async fn delete_file(&self, path: &Path) -> Result<(), DomainError> {
        fs::remove_file(path).await.map_err(|e| {
            DomainError::FsFail(format!("Failed to delete {}: {}", path.display(), e))
        })?;
        info!(path = %path.display(), "Deleted file");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_create_directory_is_idempotent() {
        let root = TempDir::new().unwrap();
        let dir = root.path().join("temp");
        let fs_port = LocalFsAdapter::new();

        fs_port.create_directory(&dir).await.unwrap();
        fs_port.create_directory(&dir).await.unwrap();
        assert!(dir.is_dir());
    }

    #[tokio::test]
    async fn test_list_files_sorted_and_skips_directories() {
        let root = TempDir::new().unwrap();
        std::fs::write(root.path().join("b.mp4"), b"b").unwrap();
        std::fs::write(root.path().join("a.mp4"), b"a").unwrap();
        std::fs::create_dir(root.path().join("nested.mp4")).unwrap();

        let names = LocalFsAdapter::new().list_files(root.path()).await.unwrap();
        assert_eq!(names, vec!["a.mp4".to_string(), "b.mp4".to_string()]);
    }

    #[tokio::test]
    async fn test_list_missing_directory_fails() {
        let root = TempDir::new().unwrap();
        let err = LocalFsAdapter::new()
            .list_files(&root.path().join("missing"))
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::FsFail(_)));
    }

    #[tokio::test]
    async fn test_delete_file() {
        let root = TempDir::new().unwrap();
        let file = root.path().join("a.mp4");
        std::fs::write(&file, b"a").unwrap();
        let fs_port = LocalFsAdapter::new();

        fs_port.delete_file(&file).await.unwrap();
        assert!(!file.exists());
        assert!(fs_port.delete_file(&file).await.is_err());
    }
}
