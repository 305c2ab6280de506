//! This module defines `FileSnapshotRepository`, a `SnapshotRepository`
//! backed by a single JSON file on disk.
use crate::errors::SnapshotRepositoryError;
use crate::interfaces::SnapshotRepository;
use staking_snapshot_shared::types::SnapshotArtifact;
use std::path::PathBuf;

/// `FileSnapshotRepository` persists the snapshot artifact as one JSON file.
///
/// The file path is the artifact key. Writes go to a sibling temp file first
/// and are renamed into place, so the file at `path` is always a complete
/// artifact.
pub struct FileSnapshotRepository {
    path: PathBuf,
}

impl FileSnapshotRepository {
    /// Creates a new `FileSnapshotRepository` writing to `path`.
    ///
    /// # Arguments
    ///
    /// * `path` - Destination of the artifact file.
    ///
    /// # Returns
    ///
    /// A new `FileSnapshotRepository` instance.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait::async_trait]
impl SnapshotRepository for FileSnapshotRepository {
    async fn persist_snapshot(
        &self,
        artifact: &SnapshotArtifact,
    ) -> Result<(), SnapshotRepositoryError> {
        let json = serde_json::to_vec(artifact)?;
        let tmp_path = self.path.with_extension("json.tmp");
        tokio::fs::write(&tmp_path, &json).await?;
        tokio::fs::rename(&tmp_path, &self.path).await?;
        Ok(())
    }

    async fn load_snapshot(&self) -> Result<SnapshotArtifact, SnapshotRepositoryError> {
        let bytes = tokio::fs::read(&self.path).await?;
        Ok(serde_json::from_slice(&bytes)?)
    }
}
