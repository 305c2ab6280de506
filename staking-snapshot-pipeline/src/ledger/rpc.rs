//! JSON-RPC implementation of the `LedgerClient` trait.
use crate::errors::LedgerError;
use crate::ledger::LedgerClient;
use alloy::primitives::{Address, U256};
use alloy::providers::{DynProvider, Provider, ProviderBuilder};
use alloy::rpc::types::{BlockNumberOrTag, Filter};
use alloy::sol_types::SolEvent;
use async_trait::async_trait;
use staking_snapshot_shared::types::{EventKind, LedgerEvent};

alloy::sol! {
    #[sol(rpc)]
    contract StakingDao {
        event Stake(uint256 tokenId, address by, uint256 stakedAt);
        event Unstake(uint256 tokenId, address by, uint256 stakedAt, uint256 unstakedAt);

        function tokenLevel(uint256 tokenId) external view returns (uint256);
    }
}

/// `RpcLedgerClient` reads the staking contract through a JSON-RPC node.
///
/// Event queries filter on the contract address and the event signature for
/// the requested kind; token levels come from the `tokenLevel` view call.
pub struct RpcLedgerClient {
    dao: StakingDao::StakingDaoInstance<DynProvider>,
}

impl RpcLedgerClient {
    /// Connects to the node at `rpc_url` and binds the staking contract at
    /// `contract_address`.
    ///
    /// # Arguments
    ///
    /// * `rpc_url` - JSON-RPC endpoint of the node.
    /// * `contract_address` - Address of the staking contract proxy.
    ///
    /// # Returns
    ///
    /// A `Result` containing the client or a `LedgerError` if the provider
    /// cannot be built.
    pub async fn connect(
        rpc_url: &str,
        contract_address: Address,
    ) -> Result<Self, LedgerError> {
        let provider = ProviderBuilder::new().connect(rpc_url).await?.erased();
        Ok(Self {
            dao: StakingDao::new(contract_address, provider),
        })
    }
}

#[async_trait]
impl LedgerClient for RpcLedgerClient {
    async fn current_height(&self) -> Result<u64, LedgerError> {
        Ok(self.dao.provider().get_block_number().await?)
    }

    async fn fetch_events(
        &self,
        kind: EventKind,
        from_block: u64,
        to_block: u64,
    ) -> Result<Vec<LedgerEvent>, LedgerError> {
        let signature = match kind {
            EventKind::Stake => StakingDao::Stake::SIGNATURE_HASH,
            EventKind::Unstake => StakingDao::Unstake::SIGNATURE_HASH,
        };
        let filter = Filter::new()
            .address(*self.dao.address())
            .event_signature(signature)
            .from_block(BlockNumberOrTag::Number(from_block))
            .to_block(BlockNumberOrTag::Number(to_block));

        let logs = self.dao.provider().get_logs(&filter).await?;

        let mut events = Vec::with_capacity(logs.len());
        for log in logs {
            let event = match kind {
                EventKind::Stake => {
                    let data = log.log_decode::<StakingDao::Stake>()?.inner.data;
                    LedgerEvent {
                        token_id: data.tokenId,
                        by: data.by,
                        staked_at: data.stakedAt,
                        kind,
                    }
                }
                EventKind::Unstake => {
                    let data = log.log_decode::<StakingDao::Unstake>()?.inner.data;
                    // The deployed contract version emits the stake and
                    // unstake timestamps swapped, so the `unstakedAt` word
                    // carries the original stake timestamp. Reconciliation
                    // matches on it as the stake moment; do not "fix" this
                    // until a contract upgrade fixes the emission.
                    LedgerEvent {
                        token_id: data.tokenId,
                        by: data.by,
                        staked_at: data.unstakedAt,
                        kind,
                    }
                }
            };
            events.push(event);
        }
        Ok(events)
    }

    async fn token_level(&self, token_id: U256) -> Result<U256, LedgerError> {
        Ok(self.dao.tokenLevel(token_id).call().await?)
    }
}
