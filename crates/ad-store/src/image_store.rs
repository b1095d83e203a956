//! Filesystem placement for uploaded listing images.
//!
//! References handed back to callers are bare file names relative to the
//! upload root; the listing record stores that reference.

use crate::{Result as StoreResult, StoreError};

use std::path::{Path, PathBuf};

use tokio::fs;
use uuid::Uuid;

pub struct ImageStore {
    root: PathBuf,
}

impl ImageStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Write image bytes under a fresh UUID name and return the reference.
    pub async fn save(&self, extension: &str, bytes: &[u8]) -> StoreResult<String> {
        fs::create_dir_all(&self.root)
            .await
            .map_err(|e| StoreError::io(&self.root, e))?;

        let reference = format!("{}.{}", Uuid::new_v4(), extension);
        let path = self.root.join(&reference);
        fs::write(&path, bytes)
            .await
            .map_err(|e| StoreError::io(&path, e))?;

        Ok(reference)
    }

    /// Delete a previously saved image. A missing file is a no-op.
    pub async fn delete(&self, reference: &str) -> StoreResult<()> {
        let path = self.resolve(reference)?;

        match fs::remove_file(&path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(StoreError::io(&path, e)),
        }
    }

    pub async fn exists(&self, reference: &str) -> bool {
        match self.resolve(reference) {
            Ok(path) => fs::try_exists(&path).await.unwrap_or(false),
            Err(_) => false,
        }
    }

    /// Reject references that would escape the upload root.
    fn resolve(&self, reference: &str) -> StoreResult<PathBuf> {
        let path = Path::new(reference);
        if path.is_absolute() || reference.contains("..") {
            return Err(StoreError::invalid_reference(reference));
        }
        Ok(self.root.join(path))
    }
}
