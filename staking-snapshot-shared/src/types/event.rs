//! Raw staking log entries as read from the chain.
use alloy::primitives::{Address, U256};

/// Which staking action a log entry records.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EventKind {
    Stake,
    Unstake,
}

/// A single decoded staking log entry.
///
/// One `LedgerEvent` exists per emitted log. Ordering within a fetch window
/// follows chain log order; ordering across windows is not guaranteed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LedgerEvent {
    pub token_id: U256,
    pub by: Address,
    /// Timestamp the token was staked at, in seconds.
    ///
    /// For `Unstake` events this is decoded from the event field named
    /// `unstakedAt`: the deployed contract version emits the stake and
    /// unstake timestamps swapped, so that slot actually carries the
    /// original stake timestamp. The reconciler matches on it as such.
    pub staked_at: U256,
    pub kind: EventKind,
}
