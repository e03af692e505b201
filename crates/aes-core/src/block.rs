//! State block representation helpers.

/// Size of one AES block in bytes.
pub const BLOCK_SIZE: usize = 16;

/// AES state of 16 bytes, a 4x4 matrix stored column by column.
///
/// Byte `i` sits at row `i % 4`, column `i / 4`.
pub type Block = [u8; BLOCK_SIZE];

/// XORs two blocks, writing the result into `dst`.
#[inline]
pub fn xor_in_place(dst: &mut Block, rhs: &Block) {
    for (d, r) in dst.iter_mut().zip(rhs.iter()) {
        *d ^= *r;
    }
}

/// Number of blocks needed to hold `len` bytes, rounding up.
#[inline]
pub const fn block_count(len: usize) -> usize {
    len.div_ceil(BLOCK_SIZE)
}
