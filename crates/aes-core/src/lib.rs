//! AES block cipher with an Electronic Codebook driver.
//!
//! This crate follows FIPS-197 and provides:
//! - GF(2^8) arithmetic and the forward/inverse S-boxes.
//! - Key schedules for 128, 192 and 256-bit keys.
//! - The four round transforms and single-block encryption/decryption.
//! - An ECB driver with zero padding over arbitrary-length input.
//! - Hex helpers for text boundaries.
//!
//! The implementation aims for clarity and testability rather than constant-time
//! guarantees; it should not be treated as side-channel hardened. ECB with
//! zero padding is preserved as-is: it leaks repeated blocks and cannot
//! recover plaintexts that end in zero bytes (see [`ecb`]).

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod block;
mod cipher;
pub mod ecb;
pub mod encoding;
mod error;
pub mod gf;
mod key;
pub mod round;
pub mod sbox;

pub use crate::block::{Block, BLOCK_SIZE};
pub use crate::cipher::{decrypt_block, encrypt_block, expand_key, RCON};
pub use crate::ecb::{decrypt, encrypt, split_into_blocks};
pub use crate::encoding::{from_hex, to_hex};
pub use crate::error::{AesError, Result};
pub use crate::key::{KeySize, MainKey, RoundKeySchedule};
