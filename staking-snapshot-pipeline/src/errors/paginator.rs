//! Error types for the event paginator.
use crate::errors::LedgerError;
use thiserror::Error;

/// Represents a failed event-window fetch.
///
/// Carries the bounds of the offending window so the caller can re-run it
/// narrowly; the paginator itself never retries.
#[derive(Debug, Error)]
pub enum PaginatorError {
    #[error("Log fetch failed for blocks {from_block}..={to_block}: {source}")]
    Fetch {
        from_block: u64,
        to_block: u64,
        #[source]
        source: LedgerError,
    },
}
