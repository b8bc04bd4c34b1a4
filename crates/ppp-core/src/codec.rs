//! 128-bit integer packing for the cipher boundary.
//!
//! A passcode index is fed to the block cipher as 16 bytes in little-endian
//! order: byte `i` holds bits `[8i, 8i + 8)` of the index. Cipher output is
//! read back the same way, but into an arbitrary-precision integer so that
//! blocks of any width can be reconstructed.

use num_bigint::BigUint;
use num_traits::Zero;

use crate::PppError;

/// Width of one word in bits.
pub const WORD_BITS: usize = 8;

/// Number of words in a packed 128-bit block.
pub const WORD_COUNT: usize = 128 / WORD_BITS;

/// Largest index that can be packed.
pub const MAX_INDEX: u128 = u128::MAX;

/// Pack a 128-bit index into 16 little-endian bytes.
///
/// # Arguments
/// * `n` - The passcode index.
///
/// # Returns
/// The 16-byte block, least significant byte first.
pub fn pack(n: u128) -> [u8; WORD_COUNT] {
    n.to_le_bytes()
}

/// Pack an arbitrary-precision integer into 16 little-endian bytes.
///
/// # Arguments
/// * `n` - The value to pack.
///
/// # Returns
/// `Ok` with the 16-byte block, or `PppError::IndexOutOfRange` if `n`
/// needs more than 128 bits.
pub fn pack_biguint(n: &BigUint) -> Result<[u8; WORD_COUNT], PppError> {
    if n.bits() > (WORD_COUNT * WORD_BITS) as u64 {
        return Err(PppError::IndexOutOfRange(n.clone()));
    }

    let mut words = [0u8; WORD_COUNT];
    if !n.is_zero() {
        let le = n.to_bytes_le();
        words[..le.len()].copy_from_slice(&le);
    }
    Ok(words)
}

/// Reconstruct an integer from little-endian words.
///
/// Accepts any number of words; the result is `sum(words[i] << 8i)` and is
/// not bounded to 128 bits.
///
/// # Arguments
/// * `words` - Bytes in little-endian order.
///
/// # Returns
/// The reconstructed non-negative integer.
pub fn unpack(words: &[u8]) -> BigUint {
    let mut n = BigUint::zero();
    for (i, &w) in words.iter().enumerate() {
        n |= BigUint::from(w) << (WORD_BITS * i);
    }
    n
}

/// Reconstruct a 128-bit integer from exactly 16 little-endian words.
pub fn unpack128(words: &[u8; WORD_COUNT]) -> u128 {
    u128::from_le_bytes(*words)
}
