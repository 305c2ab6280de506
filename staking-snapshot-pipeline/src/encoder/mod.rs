//! Fixed-layout encoding of staked tokens for the migration step.
use crate::errors::EncoderError;
use alloy::primitives::Bytes;
use alloy::sol_types::{sol_data, SolType};
use staking_snapshot_shared::types::StakedToken;

type SnapshotWords = (
    sol_data::Uint<256>,
    sol_data::Uint<8>,
    sol_data::Address,
    sol_data::Uint<256>,
);

/// `SnapshotEncoder` maps a `StakedToken` into its ABI word packing.
///
/// Field order is `(uint256 tokenId, uint8 level, address by,
/// uint256 stakedAt)`: four 32-byte big-endian words, 128 bytes total. The
/// downstream contract seeds its staking state from exactly this layout.
pub struct SnapshotEncoder;

impl SnapshotEncoder {
    /// Creates a new `SnapshotEncoder` instance.
    pub fn new() -> Self {
        Self
    }

    /// Encodes one token.
    ///
    /// Pure and total for any well-formed token; the only failure mode is a
    /// level that does not fit 8 bits. `token_id` and `staked_at` are
    /// 256-bit words by construction and cannot be out of range.
    ///
    /// # Arguments
    ///
    /// * `token` - The reconciled, enriched token to encode.
    ///
    /// # Returns
    ///
    /// The 128-byte encoding, or `EncoderError::LevelOutOfRange`.
    pub fn encode(&self, token: &StakedToken) -> Result<Bytes, EncoderError> {
        let level = u8::try_from(token.level).map_err(|_| EncoderError::LevelOutOfRange {
            token_id: token.token_id,
            level: token.level,
        })?;
        let encoded =
            SnapshotWords::abi_encode_params(&(token.token_id, level, token.by, token.staked_at));
        Ok(encoded.into())
    }
}
