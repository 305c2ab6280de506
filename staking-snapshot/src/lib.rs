//! Staking Snapshot Indexer
//!
//! This library provides the core functionality for reconstructing the staked
//! set of the staking contract, including configuration management, error
//! handling, and dependency injection.

pub mod config;
pub mod errors;

pub use config::Dependencies;
pub use errors::IndexingError;
