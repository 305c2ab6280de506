use crate::errors::IndexingError;
use alloy::primitives::Address;
use staking_snapshot_pipeline::encoder::SnapshotEncoder;
use staking_snapshot_pipeline::enricher::TokenEnricher;
use staking_snapshot_pipeline::ledger::{LedgerClient, RpcLedgerClient};
use staking_snapshot_pipeline::loader::SnapshotLoader;
use staking_snapshot_pipeline::paginator::EventPaginator;
use staking_snapshot_pipeline::reconciler::StakeReconciler;
use staking_snapshot_repository::FileSnapshotRepository;
use staking_snapshot_shared::types::BlockRange;
use std::sync::Arc;

/// Mainnet proxy address of the staking contract.
const DEFAULT_CONTRACT_ADDRESS: &str = "0x80233f7b42b503B09fc1cFF0894912cbCDA816e6";
/// Block the staking contract was deployed at.
const DEFAULT_START_BLOCK: u64 = 18_691_929;
const DEFAULT_WINDOW_SIZE: u64 = 5_000;
const DEFAULT_SNAPSHOT_PATH: &str = "stakedTokens.json";

/// `Dependencies` struct holds the necessary components for a snapshot run.
///
/// It includes the ledger client, one component per pipeline stage, and the
/// block range the run covers.
pub struct Dependencies {
    pub ledger: Arc<dyn LedgerClient>,
    pub paginator: Box<EventPaginator>,
    pub reconciler: Box<StakeReconciler>,
    pub enricher: Box<TokenEnricher>,
    pub encoder: Box<SnapshotEncoder>,
    pub loader: Box<SnapshotLoader>,
    pub range: BlockRange,
}

impl Dependencies {
    /// Creates a new `Dependencies` instance.
    ///
    /// This asynchronous function is responsible for initializing and wiring
    /// up the ledger client and pipeline components from the environment:
    /// `RPC_URL` (required), `CONTRACT_ADDRESS`, `START_BLOCK`, `END_BLOCK`
    /// (optional; absent means "current chain height"), `WINDOW_SIZE` and
    /// `SNAPSHOT_PATH`.
    ///
    /// # Returns
    ///
    /// A `Result` which is `Ok(Self)` on successful initialization or an
    /// `IndexingError` if the ledger client fails to initialize.
    pub async fn new() -> Result<Self, IndexingError> {
        let rpc_url = std::env::var("RPC_URL").expect("RPC_URL must be set");
        let contract_address = std::env::var("CONTRACT_ADDRESS")
            .unwrap_or_else(|_| DEFAULT_CONTRACT_ADDRESS.to_string())
            .parse::<Address>()
            .expect("CONTRACT_ADDRESS must be a valid address");
        let start_block = env_u64("START_BLOCK", DEFAULT_START_BLOCK);
        let end_block = std::env::var("END_BLOCK").ok().map(|raw| {
            raw.parse::<u64>()
                .expect("END_BLOCK must be an unsigned integer")
        });
        let window_size = env_u64("WINDOW_SIZE", DEFAULT_WINDOW_SIZE);
        let snapshot_path =
            std::env::var("SNAPSHOT_PATH").unwrap_or_else(|_| DEFAULT_SNAPSHOT_PATH.to_string());

        let ledger: Arc<dyn LedgerClient> =
            Arc::new(RpcLedgerClient::connect(&rpc_url, contract_address).await?);
        let loader = SnapshotLoader::new(Arc::new(FileSnapshotRepository::new(snapshot_path)));

        Ok(Dependencies {
            paginator: Box::new(EventPaginator::new(Arc::clone(&ledger), window_size)),
            reconciler: Box::new(StakeReconciler::new()),
            enricher: Box::new(TokenEnricher::new(Arc::clone(&ledger))),
            encoder: Box::new(SnapshotEncoder::new()),
            loader: Box::new(loader),
            range: BlockRange {
                start_block,
                end_block,
            },
            ledger,
        })
    }
}

fn env_u64(name: &str, default: u64) -> u64 {
    match std::env::var(name) {
        Ok(raw) => raw
            .parse()
            .unwrap_or_else(|_| panic!("{name} must be an unsigned integer")),
        Err(_) => default,
    }
}
