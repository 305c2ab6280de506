mod artifact;
mod event;
mod range;
mod staked_token;

pub use artifact::SnapshotArtifact;
pub use event::{EventKind, LedgerEvent};
pub use range::BlockRange;
pub use staked_token::StakedToken;
