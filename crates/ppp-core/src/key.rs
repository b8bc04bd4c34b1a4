//! 256-bit sequence keys.
//!
//! A sequence key is the only secret in the PPP scheme. It is supplied as a
//! 64-character hex string, derived from a passphrase with SHA-256, or drawn
//! from the operating system's random number generator.

use std::fmt;
use std::str::FromStr;

use rand::RngCore;
use sha2::{Digest, Sha256};
use zeroize::Zeroize;

use crate::PppError;

/// Length of a sequence key in bytes.
pub const KEY_SIZE: usize = 32;

/// Length of a sequence key rendered as hex.
pub const KEY_HEX_LEN: usize = KEY_SIZE * 2;

/// A 256-bit PPP sequence key.
///
/// The key bytes are wiped when the value is dropped. `Debug` output never
/// shows them.
#[derive(Clone, PartialEq, Eq)]
pub struct SequenceKey([u8; KEY_SIZE]);

impl SequenceKey {
    /// Create a key from raw bytes.
    pub fn new(bytes: [u8; KEY_SIZE]) -> Self {
        SequenceKey(bytes)
    }

    /// Create a key from a byte slice.
    ///
    /// # Arguments
    /// * `bytes` - A slice that must be exactly 32 bytes.
    ///
    /// # Returns
    /// `Ok(SequenceKey)`, or `PppError::InvalidKey` for any other length.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, PppError> {
        let arr: [u8; KEY_SIZE] = bytes.try_into().map_err(|_| {
            PppError::InvalidKey(format!(
                "expected {} bytes, got {}",
                KEY_SIZE,
                bytes.len()
            ))
        })?;
        Ok(SequenceKey(arr))
    }

    /// Decode a key from a 64-character hex string.
    ///
    /// Upper and lower case digits are both accepted.
    ///
    /// # Arguments
    /// * `hex_str` - Exactly 64 hex characters.
    ///
    /// # Returns
    /// `Ok(SequenceKey)`, or a format error if the length is wrong or a
    /// character is not a hex digit.
    pub fn from_hex(hex_str: &str) -> Result<Self, PppError> {
        let got = hex_str.chars().count();
        if got != KEY_HEX_LEN {
            return Err(PppError::InvalidKeyLength {
                expected: KEY_HEX_LEN,
                got,
            });
        }

        let mut bytes = [0u8; KEY_SIZE];
        hex::decode_to_slice(hex_str, &mut bytes)?;
        tracing::debug!("sequence key decoded from hex");
        Ok(SequenceKey(bytes))
    }

    /// Derive a key from a passphrase.
    ///
    /// The key is the SHA-256 digest of the passphrase's UTF-8 bytes.
    pub fn from_passphrase(passphrase: &str) -> Self {
        let mut hasher = Sha256::new();
        hasher.update(passphrase.as_bytes());
        tracing::debug!("sequence key derived from passphrase");
        SequenceKey(hasher.finalize().into())
    }

    /// Generate a random key using the OS random number generator.
    pub fn random() -> Self {
        let mut bytes = [0u8; KEY_SIZE];
        rand::rngs::OsRng.fill_bytes(&mut bytes);
        tracing::debug!("random sequence key generated");
        SequenceKey(bytes)
    }

    /// Get the raw key bytes.
    pub fn as_bytes(&self) -> &[u8; KEY_SIZE] {
        &self.0
    }

    /// Render the key as 64 lowercase hex characters.
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }
}

impl Drop for SequenceKey {
    fn drop(&mut self) {
        self.0.zeroize();
    }
}

impl fmt::Debug for SequenceKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SequenceKey(..)")
    }
}

impl FromStr for SequenceKey {
    type Err = PppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SequenceKey::from_hex(s)
    }
}

impl From<[u8; KEY_SIZE]> for SequenceKey {
    fn from(bytes: [u8; KEY_SIZE]) -> Self {
        SequenceKey(bytes)
    }
}
