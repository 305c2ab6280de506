//! Error types for the staking snapshot repository.
//! Consolidates and re-exports error types related to artifact persistence.
mod snapshot;

pub use snapshot::SnapshotRepositoryError;
