//! Arithmetic in GF(2^8) modulo the AES polynomial `x^8 + x^4 + x^3 + x + 1`.

/// Low byte of the reduction polynomial `0x11b`.
const REDUCTION: u8 = 0x1b;

/// Multiplies `byte` by `x` (i.e. `{02}`).
#[inline]
pub fn xtime(byte: u8) -> u8 {
    let shifted = byte << 1;
    if byte & 0x80 != 0 {
        shifted ^ REDUCTION
    } else {
        shifted
    }
}

/// Multiplies two field elements with the shift-and-reduce method.
pub fn gmul(mut a: u8, mut b: u8) -> u8 {
    let mut product = 0u8;
    for _ in 0..8 {
        if b & 1 != 0 {
            product ^= a;
        }
        a = xtime(a);
        b >>= 1;
    }
    product
}

/// Computes one output byte of a column mix: `Σ coeffs[i] · column[i]`.
#[inline]
pub fn mix_term(column: [u8; 4], coeffs: [u8; 4]) -> u8 {
    gmul(column[0], coeffs[0])
        ^ gmul(column[1], coeffs[1])
        ^ gmul(column[2], coeffs[2])
        ^ gmul(column[3], coeffs[3])
}
