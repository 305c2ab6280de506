//! Stake/unstake reconciliation.
//!
//! Computes the currently-staked subset of the stake event stream by
//! cancelling stakes against matching unstakes.
use alloy::primitives::{Address, U256};
use staking_snapshot_shared::types::LedgerEvent;
use std::collections::HashSet;

/// Key a stake and an unstake are matched on: same token, same actor, same
/// originally-recorded stake moment.
type MatchKey = (U256, Address, U256);

/// `StakeReconciler` cancels stake events against unstake events.
pub struct StakeReconciler;

impl StakeReconciler {
    /// Creates a new `StakeReconciler` instance.
    pub fn new() -> Self {
        Self
    }

    /// Returns the stake events with no matching unstake event, in their
    /// original relative order.
    ///
    /// A pair matches on `(token_id, by, staked_at)`; for unstake events the
    /// `staked_at` field already carries the original stake timestamp (the
    /// contract emits the two timestamps swapped). Every stake with at least
    /// one match is dropped, so duplicate stake emissions sharing a key are
    /// all cancelled by a single unstake. That coarse set-style behavior is
    /// deliberate: the artifact must mirror the on-chain history exactly as
    /// the contract recorded it.
    ///
    /// # Arguments
    ///
    /// * `stakes` - The full stake event sequence.
    /// * `unstakes` - The full unstake event sequence.
    ///
    /// # Returns
    ///
    /// The subsequence of `stakes` believed currently staked.
    pub fn reconcile(
        &self,
        stakes: Vec<LedgerEvent>,
        unstakes: &[LedgerEvent],
    ) -> Vec<LedgerEvent> {
        let cancelled: HashSet<MatchKey> = unstakes
            .iter()
            .map(|event| (event.token_id, event.by, event.staked_at))
            .collect();

        stakes
            .into_iter()
            .filter(|event| !cancelled.contains(&(event.token_id, event.by, event.staked_at)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy::hex::FromHex;
    use staking_snapshot_shared::types::EventKind;

    fn actor_a() -> Address {
        Address::from_hex("0x000000000000000000000000000000000000dEaD").unwrap()
    }

    fn actor_b() -> Address {
        Address::from_hex("0x1234567890123456789012345678901234567890").unwrap()
    }

    fn stake(token_id: u64, by: Address, staked_at: u64) -> LedgerEvent {
        LedgerEvent {
            token_id: U256::from(token_id),
            by,
            staked_at: U256::from(staked_at),
            kind: EventKind::Stake,
        }
    }

    fn unstake(token_id: u64, by: Address, staked_at: u64) -> LedgerEvent {
        LedgerEvent {
            kind: EventKind::Unstake,
            ..stake(token_id, by, staked_at)
        }
    }

    #[test]
    fn test_unmatched_stake_survives() {
        let reconciler = StakeReconciler::new();

        let surviving = reconciler.reconcile(vec![stake(1, actor_a(), 100)], &[]);

        assert_eq!(surviving, vec![stake(1, actor_a(), 100)]);
    }

    #[test]
    fn test_matching_unstake_cancels_stake() {
        let reconciler = StakeReconciler::new();

        let surviving = reconciler.reconcile(
            vec![stake(1, actor_a(), 100)],
            &[unstake(1, actor_a(), 100)],
        );

        assert!(surviving.is_empty());
    }

    #[test]
    fn test_restake_at_new_timestamp_survives_old_unstake() {
        let reconciler = StakeReconciler::new();

        let surviving = reconciler.reconcile(
            vec![stake(1, actor_a(), 100), stake(1, actor_a(), 200)],
            &[unstake(1, actor_a(), 100)],
        );

        assert_eq!(surviving, vec![stake(1, actor_a(), 200)]);
    }

    #[test]
    fn test_duplicate_stakes_all_cancelled_by_single_unstake() {
        let reconciler = StakeReconciler::new();

        // Duplicate emission of the same key is removed entirely once any
        // matching unstake exists, not cancelled exactly once.
        let surviving = reconciler.reconcile(
            vec![stake(1, actor_a(), 100), stake(1, actor_a(), 100)],
            &[unstake(1, actor_a(), 100)],
        );

        assert!(surviving.is_empty());
    }

    #[test]
    fn test_unstake_by_other_actor_does_not_match() {
        let reconciler = StakeReconciler::new();

        let surviving = reconciler.reconcile(
            vec![stake(1, actor_a(), 100)],
            &[unstake(1, actor_b(), 100)],
        );

        assert_eq!(surviving, vec![stake(1, actor_a(), 100)]);
    }

    #[test]
    fn test_unstake_at_other_timestamp_does_not_match() {
        let reconciler = StakeReconciler::new();

        let surviving = reconciler.reconcile(
            vec![stake(1, actor_a(), 100)],
            &[unstake(1, actor_a(), 150)],
        );

        assert_eq!(surviving, vec![stake(1, actor_a(), 100)]);
    }

    #[test]
    fn test_survivors_keep_original_relative_order() {
        let reconciler = StakeReconciler::new();

        let stakes = vec![
            stake(3, actor_a(), 10),
            stake(1, actor_b(), 20),
            stake(2, actor_a(), 30),
        ];
        let surviving = reconciler.reconcile(stakes, &[unstake(1, actor_b(), 20)]);

        assert_eq!(
            surviving,
            vec![stake(3, actor_a(), 10), stake(2, actor_a(), 30)]
        );
    }

    #[test]
    fn test_reconciliation_is_idempotent() {
        let reconciler = StakeReconciler::new();
        let stakes = vec![
            stake(1, actor_a(), 100),
            stake(2, actor_b(), 200),
            stake(3, actor_a(), 300),
        ];
        let unstakes = vec![unstake(2, actor_b(), 200)];

        let first = reconciler.reconcile(stakes.clone(), &unstakes);
        let second = reconciler.reconcile(stakes, &unstakes);

        assert_eq!(first, second);
    }
}
