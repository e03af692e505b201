//! AES key schedule and single-block encryption/decryption.

use crate::block::{Block, BLOCK_SIZE};
use crate::error::Result;
use crate::key::{KeySize, MainKey, RoundKeySchedule};
use crate::round::{add_round_key, mix_columns, shift_rows, sub_bytes, Direction};
use crate::sbox::sbox;

/// Round constants, first byte of `Rcon[j]` for `j = 1..=14`.
pub const RCON: [u8; 14] = [
    0x01, 0x02, 0x04, 0x08, 0x10, 0x20, 0x40, 0x80, 0x1b, 0x36, 0x6c, 0xd8, 0xab, 0x4d,
];

fn rot_word(word: u32) -> u32 {
    word.rotate_left(8)
}

fn sub_word(word: u32) -> u32 {
    u32::from_be_bytes(word.to_be_bytes().map(sbox))
}

fn rcon_word(j: usize) -> u32 {
    u32::from(RCON[j - 1]) << 24
}

/// Expands raw main key bytes into a round-key schedule.
///
/// Fails with [`AesError::InvalidKeySize`](crate::AesError::InvalidKeySize)
/// before any schedule bytes are produced when `key` is not 16, 24 or 32
/// bytes long.
pub fn expand_key(key: &[u8]) -> Result<RoundKeySchedule> {
    let size = KeySize::from_len(key.len())?;
    Ok(expand_words(key, size))
}

impl MainKey {
    /// Expands this key into its round-key schedule.
    pub fn expand(&self) -> RoundKeySchedule {
        expand_words(self.as_bytes(), self.size())
    }
}

fn expand_words(key: &[u8], size: KeySize) -> RoundKeySchedule {
    let nk = size.words();
    let nr = size.rounds();
    let total = 4 * (nr + 1);

    let mut w = Vec::with_capacity(total);
    w.extend(
        key.chunks_exact(4)
            .map(|chunk| u32::from_be_bytes([chunk[0], chunk[1], chunk[2], chunk[3]])),
    );

    for i in nk..total {
        let mut temp = w[i - 1];
        if i.is_multiple_of(nk) {
            temp = sub_word(rot_word(temp)) ^ rcon_word(i / nk);
        } else if nk == 8 && i % nk == 4 {
            temp = sub_word(temp);
        }
        w.push(w[i - nk] ^ temp);
    }

    let round_keys = w
        .chunks_exact(4)
        .map(|words| {
            let mut round_key = [0u8; BLOCK_SIZE];
            for (dst, word) in round_key.chunks_exact_mut(4).zip(words) {
                dst.copy_from_slice(&word.to_be_bytes());
            }
            round_key
        })
        .collect();

    log::debug!("expanded {size} key into {} round keys", nr + 1);
    RoundKeySchedule::from_round_keys(round_keys, size)
}

/// Encrypts a single 16-byte block in place with pre-expanded round keys.
pub fn encrypt_block(state: &mut Block, schedule: &RoundKeySchedule) {
    let nr = schedule.rounds();

    add_round_key(state, schedule.get(0));

    for round in 1..nr {
        sub_bytes(state, Direction::Forward);
        shift_rows(state, Direction::Forward);
        mix_columns(state, Direction::Forward);
        add_round_key(state, schedule.get(round));
    }

    sub_bytes(state, Direction::Forward);
    shift_rows(state, Direction::Forward);
    add_round_key(state, schedule.get(nr));
}

/// Decrypts a single 16-byte block in place with pre-expanded round keys.
pub fn decrypt_block(state: &mut Block, schedule: &RoundKeySchedule) {
    let nr = schedule.rounds();

    add_round_key(state, schedule.get(nr));
    for round in (1..nr).rev() {
        shift_rows(state, Direction::Inverse);
        sub_bytes(state, Direction::Inverse);
        add_round_key(state, schedule.get(round));
        mix_columns(state, Direction::Inverse);
    }
    shift_rows(state, Direction::Inverse);
    sub_bytes(state, Direction::Inverse);
    add_round_key(state, schedule.get(0));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AesError;
    use crate::gf::xtime;
    use rand::{RngCore, SeedableRng};
    use rand_chacha::ChaCha20Rng;

    const NIST_KEY: [u8; 16] = [
        0x00, 0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07, 0x08, 0x09, 0x0a, 0x0b, 0x0c, 0x0d, 0x0e,
        0x0f,
    ];
    const NIST_PLAIN: [u8; 16] = [
        0x00, 0x11, 0x22, 0x33, 0x44, 0x55, 0x66, 0x77, 0x88, 0x99, 0xaa, 0xbb, 0xcc, 0xdd, 0xee,
        0xff,
    ];
    const NIST_CIPHER: [u8; 16] = [
        0x69, 0xc4, 0xe0, 0xd8, 0x6a, 0x7b, 0x04, 0x30, 0xd8, 0xcd, 0xb7, 0x80, 0x70, 0xb4, 0xc5,
        0x5a,
    ];

    #[test]
    fn rcon_is_repeated_doubling() {
        let mut value = 0x01u8;
        for expected in RCON {
            assert_eq!(value, expected);
            value = xtime(value);
        }
    }

    #[test]
    fn first_round_key_is_main_key() {
        for len in [16usize, 24, 32] {
            let key: Vec<u8> = (0..len as u8).collect();
            let schedule = expand_key(&key).unwrap();
            assert_eq!(schedule.to_bytes()[..len], key[..]);
        }
    }

    #[test]
    fn schedule_lengths_follow_key_size() {
        assert_eq!(expand_key(&[0u8; 16]).unwrap().len(), 176);
        assert_eq!(expand_key(&[0u8; 24]).unwrap().len(), 208);
        assert_eq!(expand_key(&[0u8; 32]).unwrap().len(), 240);
        assert_eq!(expand_key(&[0u8; 32]).unwrap().rounds(), 14);
    }

    #[test]
    fn twenty_byte_key_is_rejected() {
        let err = expand_key(&[0u8; 20]).unwrap_err();
        assert!(matches!(err, AesError::InvalidKeySize { len: 20 }));
    }

    #[test]
    fn main_key_expand_matches_raw_expand() {
        let key = MainKey::from([0x42u8; 24]);
        assert_eq!(key.expand(), expand_key(&[0x42u8; 24]).unwrap());
    }

    #[test]
    fn encrypt_matches_nist_vector() {
        let schedule = expand_key(&NIST_KEY).unwrap();
        let mut block = NIST_PLAIN;
        encrypt_block(&mut block, &schedule);
        assert_eq!(block, NIST_CIPHER);
    }

    #[test]
    fn decrypt_matches_nist_vector() {
        let schedule = expand_key(&NIST_KEY).unwrap();
        let mut block = NIST_CIPHER;
        decrypt_block(&mut block, &schedule);
        assert_eq!(block, NIST_PLAIN);
    }

    #[test]
    fn encrypt_decrypt_round_trip_random() {
        let mut rng = ChaCha20Rng::from_seed([9u8; 32]);
        for size in [KeySize::Aes128, KeySize::Aes192, KeySize::Aes256] {
            for _ in 0..50 {
                let key = MainKey::generate(&mut rng, size);
                let schedule = key.expand();
                let mut block = [0u8; 16];
                rng.fill_bytes(&mut block);
                let original = block;
                encrypt_block(&mut block, &schedule);
                assert_ne!(block, original);
                decrypt_block(&mut block, &schedule);
                assert_eq!(block, original);
            }
        }
    }
}
