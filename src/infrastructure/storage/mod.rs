//! Local File Storage
//!
//! Writes uploaded post images to a local directory served under a public
//! URL prefix. Filenames are collision-resistant (`image_<uuid>`), keeping
//! the original extension so browsers infer the content type.

use std::path::{Path, PathBuf};

use tokio::fs;
use uuid::Uuid;

use crate::config::StorageSettings;
use crate::shared::error::AppError;

/// Stores uploaded files on the local filesystem.
#[derive(Clone)]
pub struct LocalFileStorage {
    upload_dir: PathBuf,
    public_prefix: String,
}

impl LocalFileStorage {
    /// Create a storage handle from settings.
    pub fn new(settings: &StorageSettings) -> Self {
        Self {
            upload_dir: PathBuf::from(&settings.upload_dir),
            public_prefix: settings.public_prefix.trim_end_matches('/').to_string(),
        }
    }

    /// Create the upload directory if it does not exist yet.
    /// Called once during application startup.
    pub async fn ensure_upload_dir(&self) -> std::io::Result<()> {
        fs::create_dir_all(&self.upload_dir).await
    }

    /// The directory uploads are written to.
    pub fn upload_dir(&self) -> &Path {
        &self.upload_dir
    }

    /// Write image bytes under a generated unique name preserving the
    /// original extension, and return the public URL of the stored file.
    ///
    /// The write goes through tokio's async file API, so a slow disk does
    /// not stall other in-flight requests.
    pub async fn store_image(
        &self,
        original_filename: &str,
        bytes: &[u8],
    ) -> Result<String, AppError> {
        let extension = Path::new(original_filename)
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| format!(".{}", e))
            .unwrap_or_default();

        let filename = format!("image_{}{}", Uuid::new_v4().simple(), extension);
        let path = self.upload_dir.join(&filename);

        fs::write(&path, bytes).await.map_err(|e| {
            AppError::Internal(format!("Failed to write upload {}: {}", path.display(), e))
        })?;

        Ok(format!("{}/{}", self.public_prefix, filename))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_storage(dir: &Path) -> LocalFileStorage {
        LocalFileStorage {
            upload_dir: dir.to_path_buf(),
            public_prefix: "/uploads".to_string(),
        }
    }

    #[tokio::test]
    async fn test_store_image_writes_bytes_and_returns_public_url() {
        let dir = tempfile::tempdir().unwrap();
        let storage = test_storage(dir.path());

        let url = storage.store_image("photo.png", b"fake png").await.unwrap();

        assert!(url.starts_with("/uploads/image_"));
        assert!(url.ends_with(".png"));

        let filename = url.rsplit('/').next().unwrap();
        let written = std::fs::read(dir.path().join(filename)).unwrap();
        assert_eq!(written, b"fake png");
    }

    #[tokio::test]
    async fn test_store_image_without_extension() {
        let dir = tempfile::tempdir().unwrap();
        let storage = test_storage(dir.path());

        let url = storage.store_image("raw-upload", b"bytes").await.unwrap();

        let filename = url.rsplit('/').next().unwrap();
        assert!(filename.starts_with("image_"));
        assert!(!filename.contains('.'));
    }

    #[tokio::test]
    async fn test_store_image_generates_unique_names() {
        let dir = tempfile::tempdir().unwrap();
        let storage = test_storage(dir.path());

        let first = storage.store_image("a.jpg", b"one").await.unwrap();
        let second = storage.store_image("a.jpg", b"two").await.unwrap();

        assert_ne!(first, second);
    }

    #[tokio::test]
    async fn test_ensure_upload_dir_creates_nested_path() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("a/b/uploads");
        let storage = test_storage(&nested);

        storage.ensure_upload_dir().await.unwrap();

        assert!(nested.is_dir());
    }

    #[test]
    fn test_public_prefix_trailing_slash_is_normalized() {
        let storage = LocalFileStorage::new(&StorageSettings {
            upload_dir: "uploads".to_string(),
            public_prefix: "/uploads/".to_string(),
        });

        assert_eq!(storage.public_prefix, "/uploads");
    }
}
