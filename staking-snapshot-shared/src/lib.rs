//! # Staking Snapshot Shared
//! This crate defines shared data structures and types used across the staking
//! snapshot ecosystem. It includes common definitions for ledger events, staked
//! tokens, the snapshot artifact, and block ranges.
pub mod types;
