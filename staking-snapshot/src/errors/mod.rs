//! Error types for the staking snapshot application.
//! Defines the set of errors that can occur during a snapshot run,
//! consolidating errors from the pipeline and the ledger client.
#[derive(Debug, thiserror::Error)]
pub enum IndexingError {
    #[error("Orchestrator error: {0}")]
    Orchestrator(#[from] staking_snapshot_pipeline::errors::OrchestratorError),
    #[error("Ledger error: {0}")]
    Ledger(#[from] staking_snapshot_pipeline::errors::LedgerError),
}
