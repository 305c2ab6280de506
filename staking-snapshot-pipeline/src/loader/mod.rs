//! This module defines the `SnapshotLoader` struct responsible for persisting
//! the finished snapshot artifact to a repository.
//! It acts as an interface between the pipeline and durable storage.
pub use crate::errors::LoaderError;
pub use staking_snapshot_repository::FileSnapshotRepository;
pub use staking_snapshot_repository::{SnapshotRepository, SnapshotRepositoryError};
use staking_snapshot_shared::types::SnapshotArtifact;
use std::sync::Arc;

/// `SnapshotLoader` is responsible for writing the snapshot artifact.
///
/// It utilizes a `SnapshotRepository` to interact with the underlying
/// storage, ensuring the decoded and encoded forms land together as one
/// durable artifact.
pub struct SnapshotLoader {
    pub snapshot_repository: Arc<dyn SnapshotRepository>,
}

impl SnapshotLoader {
    /// Creates a new `SnapshotLoader` instance.
    ///
    /// # Arguments
    ///
    /// * `snapshot_repository` - An `Arc` trait object that implements
    ///   `SnapshotRepository`, providing the interface for persistence.
    ///
    /// # Returns
    ///
    /// A new `SnapshotLoader` instance.
    pub fn new(snapshot_repository: Arc<dyn SnapshotRepository>) -> Self {
        Self {
            snapshot_repository,
        }
    }

    /// Persists a given `SnapshotArtifact` to the snapshot repository.
    ///
    /// # Arguments
    ///
    /// * `artifact` - A reference to the `SnapshotArtifact` to be persisted.
    ///
    /// # Returns
    ///
    /// A `Result` indicating success or a `LoaderError` if persistence fails.
    pub async fn persist_snapshot(
        &self,
        artifact: &SnapshotArtifact,
    ) -> Result<(), LoaderError> {
        self.snapshot_repository.persist_snapshot(artifact).await?;
        Ok(())
    }
}
