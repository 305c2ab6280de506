//! # Staking Snapshot Repository
//! This crate provides traits and implementations for persisting the snapshot
//! artifact. It includes definitions for errors, interfaces, and a concrete
//! JSON file implementation.
pub mod errors;
pub mod file;
pub mod interfaces;

pub use errors::SnapshotRepositoryError;
pub use file::FileSnapshotRepository;
pub use interfaces::SnapshotRepository;
