//! Error types for ledger reads.
use thiserror::Error;

/// Represents errors surfaced by read-only chain access.
///
/// None of these are retried internally; retry policy belongs to the
/// operator re-running the affected range.
#[derive(Debug, Error)]
pub enum LedgerError {
    #[error("Transport error: {0}")]
    Transport(#[from] alloy::transports::TransportError),

    #[error("Contract call error: {0}")]
    Contract(#[from] alloy::contract::Error),

    #[error("Log decode error: {0}")]
    Decode(#[from] alloy::sol_types::Error),
}
