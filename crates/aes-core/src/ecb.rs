//! Electronic Codebook driver over arbitrary-length byte strings.
//!
//! Encryption zero-pads the final block; no padding length is stored.
//! Decryption therefore strips trailing zero bytes from the final block,
//! which also removes zero bytes that were genuinely part of the
//! plaintext. This is a known limitation of the format: callers whose data
//! may end in `0x00` must carry the length themselves.
//!
//! ECB enciphers every block independently, so equal plaintext blocks
//! produce equal ciphertext blocks under the same key.

use crate::block::{block_count, Block, BLOCK_SIZE};
use crate::cipher::{decrypt_block, encrypt_block, expand_key};
use crate::error::{AesError, Result};
use crate::key::RoundKeySchedule;
use crate::round::Direction;

/// Splits `data` into 16-byte blocks, right-padding the last one with zeros.
pub fn split_into_blocks(data: &[u8]) -> Vec<Block> {
    let mut blocks = Vec::with_capacity(block_count(data.len()));
    for chunk in data.chunks(BLOCK_SIZE) {
        let mut block = [0u8; BLOCK_SIZE];
        block[..chunk.len()].copy_from_slice(chunk);
        blocks.push(block);
    }
    blocks
}

fn join_blocks(blocks: Vec<Block>) -> Vec<u8> {
    blocks.into_iter().flatten().collect()
}

fn apply(blocks: &mut [Block], schedule: &RoundKeySchedule, direction: Direction) {
    let f = match direction {
        Direction::Forward => encrypt_block,
        Direction::Inverse => decrypt_block,
    };

    #[cfg(feature = "parallel")]
    {
        use rayon::prelude::*;
        blocks.par_iter_mut().for_each(|block| f(block, schedule));
    }

    #[cfg(not(feature = "parallel"))]
    for block in blocks.iter_mut() {
        f(block, schedule);
    }
}

/// Encrypts `data` under `key` in ECB mode.
///
/// The output length is always `16 * ceil(data.len() / 16)`; an empty input
/// yields an empty output.
pub fn encrypt(data: &[u8], key: impl AsRef<[u8]>) -> Result<Vec<u8>> {
    let schedule = expand_key(key.as_ref())?;
    let mut blocks = split_into_blocks(data);
    log::debug!(
        "encrypting {} block(s) with {}",
        blocks.len(),
        schedule.key_size()
    );
    apply(&mut blocks, &schedule, Direction::Forward);
    Ok(join_blocks(blocks))
}

/// Decrypts ECB ciphertext under `key` and strips the zero padding.
///
/// `encrypted` must be a multiple of 16 bytes. See the module docs for the
/// trailing-zero caveat.
pub fn decrypt(encrypted: &[u8], key: impl AsRef<[u8]>) -> Result<Vec<u8>> {
    let schedule = expand_key(key.as_ref())?;
    if !encrypted.len().is_multiple_of(BLOCK_SIZE) {
        return Err(AesError::InvalidInputLength {
            len: encrypted.len(),
        });
    }
    let mut blocks = split_into_blocks(encrypted);
    log::debug!(
        "decrypting {} block(s) with {}",
        blocks.len(),
        schedule.key_size()
    );
    apply(&mut blocks, &schedule, Direction::Inverse);

    let mut plain = join_blocks(blocks);
    let removed = trim_zero_padding(&mut plain);
    log::trace!("trimmed {removed} trailing zero byte(s)");
    Ok(plain)
}

/// Removes trailing zero bytes, never reaching past the final block.
///
/// Returns the number of bytes removed (at most 16).
pub fn trim_zero_padding(data: &mut Vec<u8>) -> usize {
    let floor = data.len().saturating_sub(BLOCK_SIZE);
    let keep = data[floor..]
        .iter()
        .rposition(|&b| b != 0)
        .map_or(floor, |pos| floor + pos + 1);
    let removed = data.len() - keep;
    data.truncate(keep);
    removed
}
