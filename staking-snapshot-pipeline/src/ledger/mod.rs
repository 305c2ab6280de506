//! Ledger module for the staking snapshot pipeline.
//!
//! Provides the `LedgerClient` trait for read-only chain access (current
//! height, staking event logs, live token levels). Acts as the data source
//! for the paginator and the enricher.

use crate::errors::LedgerError;
use alloy::primitives::U256;
use async_trait::async_trait;
use staking_snapshot_shared::types::{EventKind, LedgerEvent};

mod rpc;

pub use rpc::RpcLedgerClient;

/// Trait for read-only access to the chain backing the staking contract.
///
/// Provides a unified interface for different backends (JSON-RPC node,
/// test doubles). Failures are reported to the caller, never swallowed.
#[async_trait]
pub trait LedgerClient: Send + Sync {
    /// Returns the current chain height.
    async fn current_height(&self) -> Result<u64, LedgerError>;

    /// Fetches every event of `kind` emitted by the staking contract between
    /// `from_block` and `to_block`, inclusive.
    ///
    /// # Arguments
    ///
    /// * `kind` - The staking event kind to query.
    /// * `from_block` - Lower bound of the block range.
    /// * `to_block` - Upper bound of the block range.
    ///
    /// # Returns
    ///
    /// The decoded events in chain log order, or a `LedgerError` if the
    /// query or decoding fails.
    async fn fetch_events(
        &self,
        kind: EventKind,
        from_block: u64,
        to_block: u64,
    ) -> Result<Vec<LedgerEvent>, LedgerError>;

    /// Reads the current level of `token_id` from contract state.
    async fn token_level(&self, token_id: U256) -> Result<U256, LedgerError>;
}
