//! # Staking Snapshot Pipeline
//! This crate defines the core components for reconstructing the staked set
//! of a staking contract from its event history.
//! It includes modules for reading the ledger, paginating event queries,
//! reconciling stake/unstake pairs, enriching records with live token levels,
//! encoding records for the migration step, and orchestrating the whole pass,
//! along with error handling.
pub mod encoder;
pub mod enricher;
pub mod ledger;
pub mod loader;
pub mod orchestrator;
pub mod paginator;
pub mod reconciler;

pub mod errors;
