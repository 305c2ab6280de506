//! Interface definitions for the staking snapshot repository.
mod snapshot;

pub use snapshot::SnapshotRepository;
