//! Final per-token state of the snapshot.
use alloy::primitives::{Address, U256};
use serde::{Deserialize, Serialize};

/// A token believed currently staked, with its live level attached.
///
/// Created by the enricher from a surviving stake event, consumed read-only
/// by the encoder, then persisted. Serializes with the integer fields as
/// decimal strings, matching the artifact format the migration step reads.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StakedToken {
    #[serde(with = "u256_decimal")]
    pub token_id: U256,
    pub by: Address,
    #[serde(with = "u256_decimal")]
    pub staked_at: U256,
    pub level: u64,
}

/// Serde adapter for `U256` as a decimal string.
mod u256_decimal {
    use alloy::primitives::U256;
    use serde::{Deserialize, Deserializer, Serializer, de};

    pub fn serialize<S>(value: &U256, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&value.to_string())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<U256, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(de::Error::custom)
    }
}
