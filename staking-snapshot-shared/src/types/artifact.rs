//! The persisted output of a snapshot run.
use crate::types::StakedToken;
use alloy::primitives::Bytes;
use serde::{Deserialize, Serialize};

/// Decoded and encoded forms of the staked set, in the same order.
///
/// `encoded[i]` is the fixed-layout byte encoding of `decoded[i]`. Written
/// once per run as a full replace; treated as immutable migration input
/// afterward.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SnapshotArtifact {
    pub decoded: Vec<StakedToken>,
    pub encoded: Vec<Bytes>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy::primitives::{Address, U256};

    #[test]
    fn test_artifact_serializes_encoded_entries_as_hex_strings() {
        let artifact = SnapshotArtifact {
            decoded: vec![StakedToken {
                token_id: U256::from(1u64),
                by: Address::ZERO,
                staked_at: U256::from(100u64),
                level: 1,
            }],
            encoded: vec![Bytes::from(vec![0xab, 0xcd])],
        };

        let json = serde_json::to_value(&artifact).unwrap();
        assert_eq!(json["encoded"][0], "0xabcd");
        assert_eq!(json["decoded"][0]["tokenId"], "1");
    }
}
