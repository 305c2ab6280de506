//! JSON file implementation of the snapshot repository.
mod snapshot_repository;

pub use snapshot_repository::FileSnapshotRepository;
