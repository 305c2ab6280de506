//! Window-by-window collection of staking events across a block range.
use crate::errors::PaginatorError;
use crate::ledger::LedgerClient;
use staking_snapshot_shared::types::{EventKind, LedgerEvent};
use std::sync::Arc;

/// `EventPaginator` walks a block range in fixed-size windows, accumulating
/// the raw events of one kind across the entire range.
///
/// Windows are issued strictly sequentially in ascending block order, one
/// outstanding ledger call at a time. The window size only trades per-call
/// log volume against request count; correctness never depends on it.
pub struct EventPaginator {
    ledger: Arc<dyn LedgerClient>,
    window_size: u64,
}

impl EventPaginator {
    /// Creates a new `EventPaginator`.
    ///
    /// # Arguments
    ///
    /// * `ledger` - Shared ledger client used for every window fetch.
    /// * `window_size` - Number of blocks per query window; clamped to at
    ///   least 1.
    ///
    /// # Returns
    ///
    /// A new `EventPaginator` instance.
    pub fn new(ledger: Arc<dyn LedgerClient>, window_size: u64) -> Self {
        Self {
            ledger,
            window_size: window_size.max(1),
        }
    }

    /// Collects every event of `kind` between `from_block` and `to_block`,
    /// inclusive.
    ///
    /// The final window is clamped to end at `to_block`; no window with a
    /// lower bound past `to_block` is ever requested. A failed window is not
    /// retried here: it surfaces as `PaginatorError::Fetch` carrying the
    /// offending bounds so the caller can decide on a retry policy.
    ///
    /// # Arguments
    ///
    /// * `kind` - The event kind to collect.
    /// * `from_block` - First block of the range.
    /// * `to_block` - Last block of the range.
    ///
    /// # Returns
    ///
    /// All events of `kind` in the range, window by window, or a
    /// `PaginatorError` for the first window that fails.
    pub async fn collect(
        &self,
        kind: EventKind,
        from_block: u64,
        to_block: u64,
    ) -> Result<Vec<LedgerEvent>, PaginatorError> {
        let mut events = Vec::new();
        let mut window_start = from_block;

        while window_start <= to_block {
            let window_end = window_start
                .saturating_add(self.window_size - 1)
                .min(to_block);
            tracing::debug!(?kind, window_start, window_end, "fetching event window");

            let batch = self
                .ledger
                .fetch_events(kind, window_start, window_end)
                .await
                .map_err(|source| PaginatorError::Fetch {
                    from_block: window_start,
                    to_block: window_end,
                    source,
                })?;
            events.extend(batch);

            window_start = match window_end.checked_add(1) {
                Some(next) => next,
                None => break,
            };
        }
        Ok(events)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::LedgerError;
    use alloy::primitives::{Address, U256};
    use async_trait::async_trait;
    use std::sync::Mutex;

    /// Ledger double that serves events keyed by block number and records
    /// the window bounds of every fetch.
    struct MockLedger {
        events: Vec<(u64, LedgerEvent)>,
        windows: Mutex<Vec<(u64, u64)>>,
        fail_window_starting_at: Option<u64>,
    }

    impl MockLedger {
        fn new(events: Vec<(u64, LedgerEvent)>) -> Self {
            Self {
                events,
                windows: Mutex::new(Vec::new()),
                fail_window_starting_at: None,
            }
        }

        fn failing_at(events: Vec<(u64, LedgerEvent)>, window_start: u64) -> Self {
            Self {
                fail_window_starting_at: Some(window_start),
                ..Self::new(events)
            }
        }
    }

    #[async_trait]
    impl LedgerClient for MockLedger {
        async fn current_height(&self) -> Result<u64, LedgerError> {
            Ok(self.events.iter().map(|(block, _)| *block).max().unwrap_or(0))
        }

        async fn fetch_events(
            &self,
            kind: EventKind,
            from_block: u64,
            to_block: u64,
        ) -> Result<Vec<LedgerEvent>, LedgerError> {
            self.windows.lock().unwrap().push((from_block, to_block));
            if self.fail_window_starting_at == Some(from_block) {
                return Err(LedgerError::Decode(alloy::sol_types::Error::custom(
                    "window unavailable",
                )));
            }
            Ok(self
                .events
                .iter()
                .filter(|(block, event)| {
                    (from_block..=to_block).contains(block) && event.kind == kind
                })
                .map(|(_, event)| event.clone())
                .collect())
        }

        async fn token_level(&self, _token_id: U256) -> Result<U256, LedgerError> {
            Ok(U256::ZERO)
        }
    }

    fn stake_event(token_id: u64) -> LedgerEvent {
        LedgerEvent {
            token_id: U256::from(token_id),
            by: Address::ZERO,
            staked_at: U256::from(100u64),
            kind: EventKind::Stake,
        }
    }

    #[tokio::test]
    async fn test_collect_clamps_final_window_to_end_block() {
        let ledger = Arc::new(MockLedger::new(vec![]));
        let paginator = EventPaginator::new(Arc::clone(&ledger) as Arc<dyn LedgerClient>, 5000);

        paginator.collect(EventKind::Stake, 0, 12_999).await.unwrap();

        let windows = ledger.windows.lock().unwrap().clone();
        assert_eq!(windows, vec![(0, 4_999), (5_000, 9_999), (10_000, 12_999)]);
    }

    #[tokio::test]
    async fn test_collect_single_window_when_range_fits() {
        let ledger = Arc::new(MockLedger::new(vec![(10, stake_event(1))]));
        let paginator = EventPaginator::new(Arc::clone(&ledger) as Arc<dyn LedgerClient>, 5000);

        let events = paginator.collect(EventKind::Stake, 0, 100).await.unwrap();

        assert_eq!(events, vec![stake_event(1)]);
        let windows = ledger.windows.lock().unwrap().clone();
        assert_eq!(windows, vec![(0, 100)]);
    }

    #[tokio::test]
    async fn test_collect_is_lossless_and_non_duplicating_across_windows() {
        let blocks = [0u64, 9, 10, 19, 25];
        let events: Vec<(u64, LedgerEvent)> = blocks
            .iter()
            .enumerate()
            .map(|(i, block)| (*block, stake_event(i as u64)))
            .collect();
        let ledger = Arc::new(MockLedger::new(events));
        let paginator = EventPaginator::new(Arc::clone(&ledger) as Arc<dyn LedgerClient>, 10);

        let collected = paginator.collect(EventKind::Stake, 0, 25).await.unwrap();

        let token_ids: Vec<u64> = collected
            .iter()
            .map(|event| event.token_id.to::<u64>())
            .collect();
        assert_eq!(token_ids, vec![0, 1, 2, 3, 4]);
    }

    #[tokio::test]
    async fn test_collect_filters_by_event_kind() {
        let unstake = LedgerEvent {
            kind: EventKind::Unstake,
            ..stake_event(2)
        };
        let ledger = Arc::new(MockLedger::new(vec![(5, stake_event(1)), (6, unstake)]));
        let paginator = EventPaginator::new(Arc::clone(&ledger) as Arc<dyn LedgerClient>, 100);

        let stakes = paginator.collect(EventKind::Stake, 0, 10).await.unwrap();
        let unstakes = paginator.collect(EventKind::Unstake, 0, 10).await.unwrap();

        assert_eq!(stakes.len(), 1);
        assert_eq!(unstakes.len(), 1);
        assert_eq!(unstakes[0].token_id, U256::from(2u64));
    }

    #[tokio::test]
    async fn test_collect_surfaces_fetch_failure_with_window_bounds() {
        let ledger = Arc::new(MockLedger::failing_at(vec![], 5_000));
        let paginator = EventPaginator::new(Arc::clone(&ledger) as Arc<dyn LedgerClient>, 5000);

        let result = paginator.collect(EventKind::Stake, 0, 12_999).await;

        match result {
            Err(PaginatorError::Fetch {
                from_block,
                to_block,
                ..
            }) => {
                assert_eq!(from_block, 5_000);
                assert_eq!(to_block, 9_999);
            }
            other => panic!("expected fetch error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_collect_never_issues_window_past_end_block() {
        let ledger = Arc::new(MockLedger::new(vec![]));
        let paginator = EventPaginator::new(Arc::clone(&ledger) as Arc<dyn LedgerClient>, 7);

        paginator.collect(EventKind::Stake, 3, 3).await.unwrap();

        let windows = ledger.windows.lock().unwrap().clone();
        assert_eq!(windows, vec![(3, 3)]);
    }

    #[tokio::test]
    async fn test_zero_window_size_is_clamped_to_one() {
        let ledger = Arc::new(MockLedger::new(vec![]));
        let paginator = EventPaginator::new(Arc::clone(&ledger) as Arc<dyn LedgerClient>, 0);

        paginator.collect(EventKind::Stake, 0, 2).await.unwrap();

        let windows = ledger.windows.lock().unwrap().clone();
        assert_eq!(windows, vec![(0, 0), (1, 1), (2, 2)]);
    }
}
