//! This module defines the `Orchestrator` responsible for coordinating the
//! snapshot pipeline.
//! It integrates the paginator, reconciler, enricher, encoder and loader
//! components to drive the single linear pass from event collection to the
//! persisted artifact.
use crate::encoder::SnapshotEncoder;
use crate::enricher::TokenEnricher;
use crate::errors::OrchestratorError;
use crate::ledger::LedgerClient;
use crate::loader::SnapshotLoader;
use crate::paginator::EventPaginator;
use crate::reconciler::StakeReconciler;
use staking_snapshot_shared::types::{BlockRange, EventKind, SnapshotArtifact};
use std::sync::Arc;

/// `Orchestrator` coordinates the collection, reconciliation, enrichment,
/// encoding and persistence of the staked set.
///
/// Each stage owns its output exclusively until it hands it to the next;
/// any stage error aborts the run before the artifact is written.
pub struct Orchestrator {
    ledger: Arc<dyn LedgerClient>,
    paginator: Box<EventPaginator>,
    reconciler: Box<StakeReconciler>,
    enricher: Box<TokenEnricher>,
    encoder: Box<SnapshotEncoder>,
    loader: Box<SnapshotLoader>,
}

impl Orchestrator {
    /// Creates a new `Orchestrator` instance.
    ///
    /// # Arguments
    ///
    /// * `ledger` - Shared ledger client, used to resolve the end height.
    /// * `paginator` - A boxed `EventPaginator` instance.
    /// * `reconciler` - A boxed `StakeReconciler` instance.
    /// * `enricher` - A boxed `TokenEnricher` instance.
    /// * `encoder` - A boxed `SnapshotEncoder` instance.
    /// * `loader` - A boxed `SnapshotLoader` instance.
    ///
    /// # Returns
    ///
    /// A new `Orchestrator` instance.
    pub fn new(
        ledger: Arc<dyn LedgerClient>,
        paginator: Box<EventPaginator>,
        reconciler: Box<StakeReconciler>,
        enricher: Box<TokenEnricher>,
        encoder: Box<SnapshotEncoder>,
        loader: Box<SnapshotLoader>,
    ) -> Self {
        Self {
            ledger,
            paginator,
            reconciler,
            enricher,
            encoder,
            loader,
        }
    }

    /// Runs the snapshot pipeline over `range`.
    ///
    /// The end height is resolved exactly once at the start (from the chain
    /// when `range.end_block` is `None`) and treated as an immutable
    /// snapshot for the whole run; it is never re-queried mid-run. Stake and
    /// unstake events are collected over the same range, reconciled,
    /// enriched in order, encoded, and persisted as one artifact.
    /// Re-running against the same chain state up to the same end block
    /// reproduces an identical artifact.
    ///
    /// # Arguments
    ///
    /// * `range` - The block range the snapshot covers.
    ///
    /// # Returns
    ///
    /// The persisted `SnapshotArtifact`, or an `OrchestratorError` if any
    /// stage fails.
    pub async fn run(self, range: BlockRange) -> Result<SnapshotArtifact, OrchestratorError> {
        let start_block = range.start_block;
        let end_block = match range.end_block {
            Some(block) => block,
            None => self.ledger.current_height().await?,
        };
        tracing::info!(start_block, end_block, "collecting staking events");

        let stakes = self
            .paginator
            .collect(EventKind::Stake, start_block, end_block)
            .await?;
        let unstakes = self
            .paginator
            .collect(EventKind::Unstake, start_block, end_block)
            .await?;
        tracing::info!(
            stakes = stakes.len(),
            unstakes = unstakes.len(),
            "reconciling stake/unstake pairs"
        );

        let surviving = self.reconciler.reconcile(stakes, &unstakes);
        let decoded = self.enricher.enrich(surviving).await?;

        let mut encoded = Vec::with_capacity(decoded.len());
        for token in &decoded {
            encoded.push(self.encoder.encode(token)?);
        }

        let artifact = SnapshotArtifact { decoded, encoded };
        self.loader.persist_snapshot(&artifact).await?;
        tracing::info!(staked = artifact.decoded.len(), "snapshot artifact persisted");
        Ok(artifact)
    }
}
