//! Per-token enrichment of the reconciled set with live levels.
use crate::errors::EnricherError;
use crate::ledger::LedgerClient;
use staking_snapshot_shared::types::{LedgerEvent, StakedToken};
use std::sync::Arc;

/// `TokenEnricher` attaches the current level to each surviving stake event.
///
/// Levels are a live snapshot read at call time, not the level at the
/// original stake moment; a token's level can change between staking and
/// reconciliation. Reads are issued strictly sequentially in input order,
/// and the output keeps that order.
pub struct TokenEnricher {
    ledger: Arc<dyn LedgerClient>,
}

impl TokenEnricher {
    /// Creates a new `TokenEnricher` reading levels from `ledger`.
    pub fn new(ledger: Arc<dyn LedgerClient>) -> Self {
        Self { ledger }
    }

    /// Produces a `StakedToken` for every surviving stake event, each
    /// extended by its level read at call time.
    ///
    /// A failed read for any record aborts the whole run with
    /// `EnricherError::Read` carrying the token id; a partially enriched set
    /// would misrepresent the staking snapshot, so there is no partial
    /// output.
    ///
    /// # Arguments
    ///
    /// * `events` - The reconciled stake events, in output order.
    ///
    /// # Returns
    ///
    /// The enriched tokens in the same order, or the first `EnricherError`.
    pub async fn enrich(
        &self,
        events: Vec<LedgerEvent>,
    ) -> Result<Vec<StakedToken>, EnricherError> {
        let mut tokens = Vec::with_capacity(events.len());
        for event in events {
            let level = self
                .ledger
                .token_level(event.token_id)
                .await
                .map_err(|source| EnricherError::Read {
                    token_id: event.token_id,
                    source,
                })?;
            let level = u64::try_from(level).map_err(|_| EnricherError::LevelOverflow {
                token_id: event.token_id,
            })?;
            tokens.push(StakedToken {
                token_id: event.token_id,
                by: event.by,
                staked_at: event.staked_at,
                level,
            });
        }
        Ok(tokens)
    }
}
