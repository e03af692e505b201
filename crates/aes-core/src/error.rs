//! Error taxonomy shared by the key schedule, the ECB driver and the
//! encoding helpers.

use thiserror::Error;

/// Errors returned by fallible cipher operations.
///
/// Every variant is fatal to the single call that produced it; no schedule
/// or partial output survives a failure.
#[derive(Debug, Error)]
pub enum AesError {
    /// Main key length is not 16, 24 or 32 bytes.
    #[error("invalid key size: {len} bytes (expected 16, 24 or 32)")]
    InvalidKeySize {
        /// Length of the rejected key in bytes.
        len: usize,
    },
    /// Requested key size in bits is not 128, 192 or 256.
    #[error("invalid key size: {bits} bits (expected 128, 192 or 256)")]
    InvalidKeyBits {
        /// Rejected bit count.
        bits: usize,
    },
    /// Ciphertext length is not a multiple of the block size.
    #[error("invalid input length: {len} bytes is not a multiple of 16")]
    InvalidInputLength {
        /// Length of the rejected ciphertext in bytes.
        len: usize,
    },
    /// Hex string has odd length or contains a non-hex character.
    #[error("invalid hex format: {0}")]
    InvalidHexFormat(#[from] hex::FromHexError),
}

/// Result alias used throughout the crate.
pub type Result<T> = core::result::Result<T, AesError>;
