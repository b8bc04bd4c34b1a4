//! Block cipher oracle used to scramble passcode indices.
//!
//! The generator only needs "encrypt one 128-bit block under a 256-bit key".
//! That capability is expressed by the [`PasscodeCipher`] trait so that the
//! conversion logic can be exercised with a stub and the backend swapped
//! without touching it. [`Aes256Cipher`] is the standard PPP backend.

use aes::cipher::{generic_array::GenericArray, BlockEncrypt, KeyInit};

use crate::codec::WORD_COUNT;
use crate::key::KEY_SIZE;

/// Size of a cipher block in bytes.
pub const BLOCK_SIZE: usize = WORD_COUNT;

/// Trait for keyed 128-bit block permutations.
///
/// Implementors must be deterministic: the same key and plaintext always
/// produce the same ciphertext. Substituting a different cipher changes the
/// passcode sequence but not the generator's behaviour.
pub trait PasscodeCipher {
    /// Encrypt a single block.
    ///
    /// # Arguments
    /// * `block` - The 16-byte plaintext block.
    /// * `key` - The 32-byte sequence key.
    ///
    /// # Returns
    /// The 16-byte ciphertext block.
    fn encrypt_block(&self, block: &[u8; BLOCK_SIZE], key: &[u8; KEY_SIZE]) -> [u8; BLOCK_SIZE];
}

impl<C: PasscodeCipher + ?Sized> PasscodeCipher for &C {
    fn encrypt_block(&self, block: &[u8; BLOCK_SIZE], key: &[u8; KEY_SIZE]) -> [u8; BLOCK_SIZE] {
        (**self).encrypt_block(block, key)
    }
}

/// AES-256 single-block encryption.
///
/// Bytes are fed to the cipher in the order given and returned in the order
/// produced, matching the reference PPP scheme.
#[derive(Debug, Clone, Copy, Default)]
pub struct Aes256Cipher;

impl PasscodeCipher for Aes256Cipher {
    fn encrypt_block(&self, block: &[u8; BLOCK_SIZE], key: &[u8; KEY_SIZE]) -> [u8; BLOCK_SIZE] {
        let cipher = aes::Aes256::new(GenericArray::from_slice(key));
        let mut out = GenericArray::clone_from_slice(block);
        cipher.encrypt_block(&mut out);
        out.into()
    }
}
