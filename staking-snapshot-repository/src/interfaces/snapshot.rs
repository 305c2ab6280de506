//! This module defines the `SnapshotRepository` trait, which provides an
//! interface for persisting and retrieving the snapshot artifact consumed by
//! the contract migration step.
use crate::errors::SnapshotRepositoryError;
use staking_snapshot_shared::types::SnapshotArtifact;

/// A trait that defines the interface for snapshot artifact storage.
///
/// Implementors persist the full decoded+encoded artifact under a single key
/// and hand it back to the downstream migration step.
#[async_trait::async_trait]
pub trait SnapshotRepository: Send + Sync {
    /// Persists a `SnapshotArtifact`, replacing any prior artifact at the
    /// same key.
    ///
    /// The write is all-or-nothing: a failed run never leaves a partial
    /// artifact behind.
    ///
    /// # Arguments
    ///
    /// * `artifact` - A reference to the `SnapshotArtifact` to be persisted.
    ///
    /// # Returns
    ///
    /// A `Result` indicating success or a `SnapshotRepositoryError` if the
    /// write fails.
    async fn persist_snapshot(
        &self,
        artifact: &SnapshotArtifact,
    ) -> Result<(), SnapshotRepositoryError>;

    /// Loads the previously persisted `SnapshotArtifact`.
    ///
    /// # Returns
    ///
    /// A `Result` containing the artifact or a `SnapshotRepositoryError` if
    /// none exists or it cannot be read.
    async fn load_snapshot(&self) -> Result<SnapshotArtifact, SnapshotRepositoryError>;
}
