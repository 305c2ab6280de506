//! Error types for snapshot artifact persistence.
use thiserror::Error;

/// Represents errors that can occur while writing or reading the snapshot
/// artifact.
#[derive(Debug, Error)]
pub enum SnapshotRepositoryError {
    #[error("Artifact io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Artifact serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
