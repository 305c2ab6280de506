//! Error types for the record enricher.
use crate::errors::LedgerError;
use alloy::primitives::U256;
use thiserror::Error;

/// Represents a failed per-token enrichment read.
///
/// Any variant aborts the whole run: a partially enriched set would
/// misrepresent the staking snapshot.
#[derive(Debug, Error)]
pub enum EnricherError {
    #[error("Level read failed for token {token_id}: {source}")]
    Read {
        token_id: U256,
        #[source]
        source: LedgerError,
    },

    #[error("Level for token {token_id} does not fit in 64 bits")]
    LevelOverflow { token_id: U256 },
}
