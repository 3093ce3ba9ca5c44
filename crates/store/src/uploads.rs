//! The upload directory holding image files referenced by records.

use std::path::{Path, PathBuf};

use folio_core::media;

use crate::error::StoreError;

/// Directory of uploaded images plus the base address used to build
/// references to them.
#[derive(Debug, Clone)]
pub struct UploadDir {
    root: PathBuf,
    base_url: String,
}

impl UploadDir {
    /// Open the upload directory, creating it if it does not exist yet.
    pub async fn open(
        root: impl Into<PathBuf>,
        base_url: impl Into<String>,
    ) -> Result<Self, StoreError> {
        let root = root.into();
        tokio::fs::create_dir_all(&root)
            .await
            .map_err(|e| StoreError::io(&root, e))?;
        Ok(Self {
            root,
            base_url: base_url.into(),
        })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Public reference for a stored file.
    pub fn reference_for(&self, file_name: &str) -> String {
        media::image_reference(&self.base_url, file_name)
    }

    /// Path on disk of the file a reference points at, if it points into
    /// this directory.
    pub fn path_for_reference(&self, reference: &str) -> Option<PathBuf> {
        media::file_name_from_reference(reference).map(|name| self.root.join(name))
    }

    /// Write `bytes` under a freshly generated name with extension `ext`.
    ///
    /// Returns the generated filename.
    pub async fn save(&self, ext: &str, bytes: &[u8]) -> Result<String, StoreError> {
        let file_name = media::generated_file_name(ext);
        let path = self.root.join(&file_name);
        tokio::fs::write(&path, bytes)
            .await
            .map_err(|e| StoreError::io(&path, e))?;
        tracing::debug!(file = %file_name, size = bytes.len(), "Saved upload");
        Ok(file_name)
    }

    /// Remove a stored file. Best-effort: a missing file counts as removed
    /// and any other failure is logged, never returned.
    pub async fn remove_file(&self, file_name: &str) {
        remove_best_effort(&self.root.join(file_name)).await;
    }

    /// Remove every file the given references point at. Best-effort, see
    /// [`UploadDir::remove_file`].
    pub async fn remove_references(&self, references: &[String]) {
        for reference in references {
            match self.path_for_reference(reference) {
                Some(path) => remove_best_effort(&path).await,
                None => tracing::warn!(
                    reference = %reference,
                    "Image reference does not point into the upload directory, skipping"
                ),
            }
        }
    }
}

async fn remove_best_effort(path: &Path) {
    match tokio::fs::remove_file(path).await {
        Ok(()) => tracing::debug!(path = %path.display(), "Removed upload"),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!(path = %path.display(), "Upload already absent");
        }
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "Failed to remove upload");
        }
    }
}
