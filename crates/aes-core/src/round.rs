//! AES round transformations on a single state block.

use crate::block::{xor_in_place, Block};
use crate::gf::mul_coefficient;
use crate::sbox::{inv_sbox, sbox};

/// Selects the forward (encrypt) or inverse (decrypt) variant of a transform.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    /// Transform used while encrypting.
    Forward,
    /// Inverse transform used while decrypting.
    Inverse,
}

/// MixColumns matrix, rows are cyclic shifts of `{2, 3, 1, 1}`.
pub const MIX_MATRIX: [[u8; 4]; 4] = [[2, 3, 1, 1], [1, 2, 3, 1], [1, 1, 2, 3], [3, 1, 1, 2]];

/// InvMixColumns matrix, rows are cyclic shifts of `{14, 11, 13, 9}`.
pub const INV_MIX_MATRIX: [[u8; 4]; 4] = [
    [14, 11, 13, 9],
    [9, 14, 11, 13],
    [13, 9, 14, 11],
    [11, 13, 9, 14],
];

/// Applies SubBytes (or InvSubBytes) to every byte of the state.
#[inline]
pub fn sub_bytes(state: &mut Block, direction: Direction) {
    let substitute = match direction {
        Direction::Forward => sbox,
        Direction::Inverse => inv_sbox,
    };
    for byte in state.iter_mut() {
        *byte = substitute(*byte);
    }
}

/// Rotates rows 1..=3 of the state by their row index.
///
/// Row `r` holds bytes `r, r + 4, r + 8, r + 12`. Forward rotates left by
/// `r`, inverse rotates right by `r`. Row 0 is never moved.
#[inline]
pub fn shift_rows(state: &mut Block, direction: Direction) {
    for r in 1..4 {
        let mut row = [state[r], state[r + 4], state[r + 8], state[r + 12]];
        match direction {
            Direction::Forward => row.rotate_left(r),
            Direction::Inverse => row.rotate_right(r),
        }
        for (c, byte) in row.into_iter().enumerate() {
            state[r + 4 * c] = byte;
        }
    }
}

fn mix_single_column(col: &mut [u8; 4], matrix: &[[u8; 4]; 4]) {
    let x = *col;
    for (out, coefficients) in col.iter_mut().zip(matrix) {
        *out = coefficients
            .iter()
            .zip(x)
            .fold(0, |acc, (&c, b)| acc ^ mul_coefficient(b, c));
    }
}

/// MixColumns (or InvMixColumns) over all four columns.
#[inline]
pub fn mix_columns(state: &mut Block, direction: Direction) {
    let matrix = match direction {
        Direction::Forward => &MIX_MATRIX,
        Direction::Inverse => &INV_MIX_MATRIX,
    };
    for chunk in state.chunks_exact_mut(4) {
        let mut column = [chunk[0], chunk[1], chunk[2], chunk[3]];
        mix_single_column(&mut column, matrix);
        chunk.copy_from_slice(&column);
    }
}

/// Adds (XORs) a round key into the state. Its own inverse.
#[inline]
pub fn add_round_key(state: &mut Block, round_key: &Block) {
    xor_in_place(state, round_key);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn counting_block() -> Block {
        core::array::from_fn(|i| i as u8)
    }

    #[test]
    fn shift_rows_forward_layout() {
        let mut state = counting_block();
        shift_rows(&mut state, Direction::Forward);
        assert_eq!(
            state,
            [0, 5, 10, 15, 4, 9, 14, 3, 8, 13, 2, 7, 12, 1, 6, 11]
        );
    }

    #[test]
    fn shift_rows_inverse_layout() {
        let mut state = counting_block();
        shift_rows(&mut state, Direction::Inverse);
        assert_eq!(
            state,
            [0, 13, 10, 7, 4, 1, 14, 11, 8, 5, 2, 15, 12, 9, 6, 3]
        );
    }

    #[test]
    fn shift_rows_round_trip() {
        let mut state = counting_block();
        shift_rows(&mut state, Direction::Forward);
        shift_rows(&mut state, Direction::Inverse);
        assert_eq!(state, counting_block());
    }

    #[test]
    fn mix_columns_known_column() {
        let mut state = [0u8; 16];
        state[..4].copy_from_slice(&[0xdb, 0x13, 0x53, 0x45]);
        state[4..8].copy_from_slice(&[0xf2, 0x0a, 0x22, 0x5c]);
        state[8..12].copy_from_slice(&[0x01, 0x01, 0x01, 0x01]);
        state[12..].copy_from_slice(&[0x2d, 0x26, 0x31, 0x4c]);
        mix_columns(&mut state, Direction::Forward);
        assert_eq!(&state[..4], &[0x8e, 0x4d, 0xa1, 0xbc]);
        assert_eq!(&state[4..8], &[0x9f, 0xdc, 0x58, 0x9d]);
        assert_eq!(&state[8..12], &[0x01, 0x01, 0x01, 0x01]);
        assert_eq!(&state[12..], &[0x4d, 0x7e, 0xbd, 0xf8]);
    }

    #[test]
    fn inv_mix_columns_undoes_mix_columns() {
        for seed in 0..=255u8 {
            let original: Block =
                core::array::from_fn(|i| seed.wrapping_mul(31).wrapping_add(i as u8 * 17));
            let mut state = original;
            mix_columns(&mut state, Direction::Forward);
            mix_columns(&mut state, Direction::Inverse);
            assert_eq!(state, original);
        }
    }

    #[test]
    fn sub_bytes_round_trip() {
        let mut state = counting_block();
        sub_bytes(&mut state, Direction::Forward);
        assert_eq!(state[0], 0x63);
        sub_bytes(&mut state, Direction::Inverse);
        assert_eq!(state, counting_block());
    }

    #[test]
    fn add_round_key_is_involution() {
        let key = [0xa5u8; 16];
        let mut state = counting_block();
        add_round_key(&mut state, &key);
        add_round_key(&mut state, &key);
        assert_eq!(state, counting_block());
    }
}
