//! Key types for AES-128, AES-192 and AES-256.

use core::fmt;

use rand::{CryptoRng, RngCore};

use crate::block::{Block, BLOCK_SIZE};
use crate::error::{AesError, Result};

/// Supported main key sizes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum KeySize {
    /// 128-bit key, 10 rounds.
    Aes128,
    /// 192-bit key, 12 rounds.
    Aes192,
    /// 256-bit key, 14 rounds.
    Aes256,
}

impl KeySize {
    /// Maps a key length in bytes to its size, failing for anything but
    /// 16, 24 or 32.
    pub fn from_len(len: usize) -> Result<Self> {
        match len {
            16 => Ok(Self::Aes128),
            24 => Ok(Self::Aes192),
            32 => Ok(Self::Aes256),
            _ => Err(AesError::InvalidKeySize { len }),
        }
    }

    /// Maps a key length in bits, failing for anything but 128, 192 or 256.
    pub fn from_bits(bits: usize) -> Result<Self> {
        match bits {
            128 => Ok(Self::Aes128),
            192 => Ok(Self::Aes192),
            256 => Ok(Self::Aes256),
            _ => Err(AesError::InvalidKeyBits { bits }),
        }
    }

    /// Key length in bytes.
    pub const fn key_len(self) -> usize {
        match self {
            Self::Aes128 => 16,
            Self::Aes192 => 24,
            Self::Aes256 => 32,
        }
    }

    /// Key length in bits.
    pub const fn bits(self) -> usize {
        self.key_len() * 8
    }

    /// Key length in 32-bit words (`Nk`).
    pub const fn words(self) -> usize {
        self.key_len() / 4
    }

    /// Number of cipher rounds (`Nr`).
    pub const fn rounds(self) -> usize {
        match self {
            Self::Aes128 => 10,
            Self::Aes192 => 12,
            Self::Aes256 => 14,
        }
    }

    /// Length in bytes of the expanded schedule, `16 * (Nr + 1)`.
    pub const fn schedule_len(self) -> usize {
        BLOCK_SIZE * (self.rounds() + 1)
    }
}

impl fmt::Display for KeySize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AES-{}", self.bits())
    }
}

/// Validated AES main key.
#[derive(Clone, PartialEq, Eq)]
pub struct MainKey {
    bytes: Vec<u8>,
    size: KeySize,
}

impl MainKey {
    /// Wraps key bytes, rejecting lengths other than 16, 24 or 32.
    pub fn new(bytes: &[u8]) -> Result<Self> {
        let size = KeySize::from_len(bytes.len())?;
        Ok(Self {
            bytes: bytes.to_vec(),
            size,
        })
    }

    /// Draws a fresh random key of the requested size.
    pub fn generate<R: RngCore + CryptoRng>(rng: &mut R, size: KeySize) -> Self {
        let mut bytes = vec![0u8; size.key_len()];
        rng.fill_bytes(&mut bytes);
        Self { bytes, size }
    }

    /// Size of this key.
    #[inline]
    pub fn size(&self) -> KeySize {
        self.size
    }

    /// Raw key bytes.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }
}

impl AsRef<[u8]> for MainKey {
    fn as_ref(&self) -> &[u8] {
        &self.bytes
    }
}

impl TryFrom<&[u8]> for MainKey {
    type Error = AesError;

    fn try_from(value: &[u8]) -> Result<Self> {
        Self::new(value)
    }
}

impl From<[u8; 16]> for MainKey {
    fn from(value: [u8; 16]) -> Self {
        Self {
            bytes: value.to_vec(),
            size: KeySize::Aes128,
        }
    }
}

impl From<[u8; 24]> for MainKey {
    fn from(value: [u8; 24]) -> Self {
        Self {
            bytes: value.to_vec(),
            size: KeySize::Aes192,
        }
    }
}

impl From<[u8; 32]> for MainKey {
    fn from(value: [u8; 32]) -> Self {
        Self {
            bytes: value.to_vec(),
            size: KeySize::Aes256,
        }
    }
}

// Key material stays out of debug output.
impl fmt::Debug for MainKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MainKey")
            .field("size", &self.size)
            .finish_non_exhaustive()
    }
}

/// Expanded round keys, `16 * (Nr + 1)` bytes.
#[derive(Clone, PartialEq, Eq)]
pub struct RoundKeySchedule {
    round_keys: Vec<Block>,
    size: KeySize,
}

impl RoundKeySchedule {
    pub(crate) fn from_round_keys(round_keys: Vec<Block>, size: KeySize) -> Self {
        debug_assert_eq!(round_keys.len(), size.rounds() + 1);
        Self { round_keys, size }
    }

    /// Returns the round key at the requested index (`0..=rounds()`).
    ///
    /// # Panics
    ///
    /// Panics if `round` is greater than [`Self::rounds`].
    #[inline]
    pub fn get(&self, round: usize) -> &Block {
        &self.round_keys[round]
    }

    /// Number of cipher rounds this schedule drives.
    #[inline]
    pub fn rounds(&self) -> usize {
        self.size.rounds()
    }

    /// Size of the main key the schedule was derived from.
    #[inline]
    pub fn key_size(&self) -> KeySize {
        self.size
    }

    /// Iterates over the round keys in order.
    pub fn iter(&self) -> impl Iterator<Item = &Block> {
        self.round_keys.iter()
    }

    /// Total schedule length in bytes.
    pub fn len(&self) -> usize {
        self.round_keys.len() * BLOCK_SIZE
    }

    /// Always false; a schedule holds at least eleven round keys.
    pub fn is_empty(&self) -> bool {
        self.round_keys.is_empty()
    }

    /// Flattens the schedule into a contiguous byte vector.
    pub fn to_bytes(&self) -> Vec<u8> {
        self.round_keys.iter().flatten().copied().collect()
    }
}

impl fmt::Debug for RoundKeySchedule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RoundKeySchedule")
            .field("size", &self.size)
            .field("rounds", &self.rounds())
            .finish_non_exhaustive()
    }
}
