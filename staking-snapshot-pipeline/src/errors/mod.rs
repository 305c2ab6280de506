mod encoder;
mod enricher;
mod ledger;
mod loader;
mod orchestrator;
mod paginator;

pub use encoder::EncoderError;
pub use enricher::EnricherError;
pub use ledger::LedgerError;
pub use loader::LoaderError;
pub use orchestrator::OrchestratorError;
pub use paginator::PaginatorError;
