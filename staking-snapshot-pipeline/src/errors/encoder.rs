//! Error types for the snapshot encoder.
use alloy::primitives::U256;
use thiserror::Error;

/// Represents a field value exceeding its fixed encoded width.
#[derive(Debug, Error)]
pub enum EncoderError {
    #[error("Level {level} for token {token_id} does not fit in 8 bits")]
    LevelOutOfRange { token_id: U256, level: u64 },
}
