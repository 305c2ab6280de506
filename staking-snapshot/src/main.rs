use dotenv::dotenv;
use staking_snapshot::{Dependencies, IndexingError};
use staking_snapshot_pipeline::orchestrator::Orchestrator;

/// Main entry point for the staking snapshot indexer.
///
/// Initializes dotenv and tracing, sets up application dependencies, and
/// runs the orchestrator once to produce and persist the snapshot artifact.
///
/// # Returns
///
/// A `Result` indicating success or an `IndexingError` if an error occurs
/// during initialization or the run.
#[tokio::main]
async fn main() -> Result<(), IndexingError> {
    dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let dependencies = Dependencies::new().await?;
    let range = dependencies.range;

    let orchestrator = Orchestrator::new(
        dependencies.ledger,
        dependencies.paginator,
        dependencies.reconciler,
        dependencies.enricher,
        dependencies.encoder,
        dependencies.loader,
    );
    let artifact = orchestrator.run(range).await?;
    tracing::info!(staked = artifact.decoded.len(), "snapshot complete");
    Ok(())
}
