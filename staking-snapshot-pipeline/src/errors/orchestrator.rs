//! Error types for the pipeline orchestrator.
use crate::errors::{EncoderError, EnricherError, LedgerError, LoaderError, PaginatorError};
use thiserror::Error;

/// Consolidates the errors that can abort a snapshot run.
///
/// Every variant aborts before the artifact is written; there is no partial
/// or degraded output mode.
#[derive(Debug, Error)]
pub enum OrchestratorError {
    #[error("Ledger error: {0}")]
    Ledger(#[from] LedgerError),

    #[error("Paginator error: {0}")]
    Paginator(#[from] PaginatorError),

    #[error("Enricher error: {0}")]
    Enricher(#[from] EnricherError),

    #[error("Encoder error: {0}")]
    Encoder(#[from] EncoderError),

    #[error("Loader error: {0}")]
    Loader(#[from] LoaderError),
}
