use crate::domain::ports::Storage;
use crate::utils::error::Result;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct LocalStorage {
    base_path: PathBuf,
}

impl LocalStorage {
    pub fn new(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
        }
    }
}

impl Storage for LocalStorage {
    async fn prepare(&self) -> Result<()> {
        tokio::fs::create_dir_all(&self.base_path).await?;
        tracing::debug!("Output directory ready: {}", self.base_path.display());
        Ok(())
    }

    async fn write_file(&self, name: &str, data: &[u8]) -> Result<PathBuf> {
        let full_path = self.base_path.join(name);
        tokio::fs::write(&full_path, data).await?;
        Ok(full_path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_prepare_creates_nested_directory() {
        let temp_dir = TempDir::new().unwrap();
        let target = temp_dir.path().join("site").join("public");
        let storage = LocalStorage::new(&target);

        assert!(!target.exists());
        storage.prepare().await.unwrap();
        assert!(target.is_dir());

        // Second call on an existing directory is fine.
        storage.prepare().await.unwrap();
    }

    #[tokio::test]
    async fn test_write_file_returns_full_path() {
        let temp_dir = TempDir::new().unwrap();
        let storage = LocalStorage::new(temp_dir.path());

        let path = storage.write_file("icon-72x72.svg", b"<svg/>").await.unwrap();
        assert_eq!(path, temp_dir.path().join("icon-72x72.svg"));
        assert_eq!(std::fs::read(path).unwrap(), b"<svg/>");
    }

    #[tokio::test]
    async fn test_write_without_prepare_fails() {
        let temp_dir = TempDir::new().unwrap();
        let storage = LocalStorage::new(temp_dir.path().join("missing"));

        assert!(storage.write_file("icon-72x72.svg", b"<svg/>").await.is_err());
    }
}
