//! Error types for the snapshot loader.
use staking_snapshot_repository::SnapshotRepositoryError;
use thiserror::Error;

/// Represents a failure persisting the snapshot artifact.
#[derive(Debug, Error)]
pub enum LoaderError {
    #[error("Snapshot repository error: {0}")]
    Repository(#[from] SnapshotRepositoryError),
}
