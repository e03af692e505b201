//! Arithmetic in GF(2^8) under the AES reduction polynomial
//! x^8 + x^4 + x^3 + x + 1.
//!
//! Only the constant multiplicands used by MixColumns {1, 2, 3} and
//! InvMixColumns {9, 11, 13, 14} are supported. Each is composed from
//! [`xtime`] rather than a general multiply-and-reduce loop.

/// Low byte of the reduction polynomial (0x11B).
const REDUCTION: u8 = 0x1b;

/// Multiplies by 2 ("xtime").
#[inline]
pub const fn xtime(byte: u8) -> u8 {
    let shifted = byte << 1;
    if byte & 0x80 != 0 {
        shifted ^ REDUCTION
    } else {
        shifted
    }
}

/// Multiplies by 3.
#[inline]
pub const fn mul3(byte: u8) -> u8 {
    xtime(byte) ^ byte
}

/// Multiplies by 4.
#[inline]
pub const fn mul4(byte: u8) -> u8 {
    xtime(xtime(byte))
}

/// Multiplies by 8.
#[inline]
pub const fn mul8(byte: u8) -> u8 {
    xtime(mul4(byte))
}

/// Multiplies by 9.
#[inline]
pub const fn mul9(byte: u8) -> u8 {
    mul8(byte) ^ byte
}

/// Multiplies by 11.
#[inline]
pub const fn mul11(byte: u8) -> u8 {
    mul8(byte) ^ xtime(byte) ^ byte
}

/// Multiplies by 13.
#[inline]
pub const fn mul13(byte: u8) -> u8 {
    mul8(byte) ^ mul4(byte) ^ byte
}

/// Multiplies by 14.
#[inline]
pub const fn mul14(byte: u8) -> u8 {
    mul8(byte) ^ mul4(byte) ^ xtime(byte)
}

/// Multiplies `byte` by one of the MixColumns coefficients.
///
/// # Panics
///
/// Panics if `coefficient` is not one of 1, 2, 3, 9, 11, 13 or 14. The
/// coefficient matrices are compile-time constants, so any other value is
/// a broken invariant rather than bad input.
#[inline]
pub fn mul_coefficient(byte: u8, coefficient: u8) -> u8 {
    match coefficient {
        1 => byte,
        2 => xtime(byte),
        3 => mul3(byte),
        9 => mul9(byte),
        11 => mul11(byte),
        13 => mul13(byte),
        14 => mul14(byte),
        other => panic!("unsupported MixColumns coefficient {other}"),
    }
}
