//! Passcode sequence generation.
//!
//! Passcode number `i` is derived by packing `i` into a 16-byte block,
//! encrypting the block under the sequence key, reading the ciphertext back
//! as a little-endian integer, and peeling off `length` base-`radix` digits,
//! least significant first. Digit `j` becomes character `j` of the passcode.
//!
//! Only the low `radix^length` part of the ciphertext influences a passcode;
//! the remaining high-order bits are discarded.

use num_bigint::BigUint;
use num_integer::Integer;
use num_traits::ToPrimitive;

use crate::alphabet::Alphabet;
use crate::cipher::{Aes256Cipher, PasscodeCipher};
use crate::codec::{pack, unpack};
use crate::key::SequenceKey;
use crate::PppError;

/// Generates passcodes for ranges of indices.
///
/// The generator holds only its cipher backend. Keys and alphabets are
/// borrowed per call, so one generator may serve any number of keys.
#[derive(Debug, Clone, Default)]
pub struct PasscodeGenerator<C = Aes256Cipher> {
    cipher: C,
}

impl PasscodeGenerator<Aes256Cipher> {
    /// Create a generator backed by AES-256.
    pub fn new() -> Self {
        PasscodeGenerator {
            cipher: Aes256Cipher,
        }
    }
}

impl<C: PasscodeCipher> PasscodeGenerator<C> {
    /// Create a generator backed by a custom cipher.
    pub fn with_cipher(cipher: C) -> Self {
        PasscodeGenerator { cipher }
    }

    /// Generate `count` consecutive passcodes starting at `start`.
    ///
    /// Passcodes are returned in ascending index order. The passcode at a
    /// given index depends only on the key, alphabet, index and length, so
    /// overlapping ranges agree wherever they overlap.
    ///
    /// # Arguments
    /// * `key` - The sequence key.
    /// * `alphabet` - The (sorted) symbol set.
    /// * `start` - Index of the first passcode.
    /// * `count` - Number of passcodes; zero yields an empty vector.
    /// * `length` - Characters per passcode, at least 1.
    ///
    /// # Returns
    /// `Ok(Vec<String>)`, or an error if `length` is zero or the range runs
    /// past `2^128 - 1`. Nothing is encrypted when validation fails.
    pub fn generate(
        &self,
        key: &SequenceKey,
        alphabet: &Alphabet,
        start: u128,
        count: u64,
        length: usize,
    ) -> Result<Vec<String>, PppError> {
        validate_length(length)?;
        let last = last_index(start, count)?;

        tracing::debug!(
            start,
            count,
            length,
            radix = alphabet.radix(),
            "generating passcodes"
        );

        let mut codes = Vec::with_capacity(count.min(1 << 16) as usize);
        if let Some(last) = last {
            for index in start..=last {
                codes.push(self.encode(key, alphabet, index, length));
            }
        }
        Ok(codes)
    }

    /// Generate passcodes from an arbitrary-precision start index.
    ///
    /// Identical to [`generate`](Self::generate), but accepts a start that
    /// may not fit in 128 bits and reports it as a range error.
    pub fn generate_from(
        &self,
        key: &SequenceKey,
        alphabet: &Alphabet,
        start: &BigUint,
        count: u64,
        length: usize,
    ) -> Result<Vec<String>, PppError> {
        let start = start
            .to_u128()
            .ok_or_else(|| PppError::IndexOutOfRange(start.clone()))?;
        self.generate(key, alphabet, start, count, length)
    }

    /// Generate the single passcode at `index`.
    pub fn passcode(
        &self,
        key: &SequenceKey,
        alphabet: &Alphabet,
        index: u128,
        length: usize,
    ) -> Result<String, PppError> {
        validate_length(length)?;
        Ok(self.encode(key, alphabet, index, length))
    }

    fn encode(&self, key: &SequenceKey, alphabet: &Alphabet, index: u128, length: usize) -> String {
        tracing::trace!(index, "encrypting passcode block");
        let block = pack(index);
        let ciphertext = self.cipher.encrypt_block(&block, key.as_bytes());
        to_passcode(unpack(&ciphertext), alphabet, length)
    }
}

/// Generate passcodes with the standard AES-256 backend.
///
/// Convenience wrapper around [`PasscodeGenerator::generate`].
pub fn generate(
    key: &SequenceKey,
    alphabet: &Alphabet,
    start: u128,
    count: u64,
    length: usize,
) -> Result<Vec<String>, PppError> {
    PasscodeGenerator::new().generate(key, alphabet, start, count, length)
}

/// Convert an integer into `length` alphabet symbols.
///
/// Digits are extracted least significant first and written left to right.
/// Digits beyond `length` are discarded; missing high digits render as the
/// alphabet's first symbol.
pub fn to_passcode(mut value: BigUint, alphabet: &Alphabet, length: usize) -> String {
    let radix = BigUint::from(alphabet.radix());
    let symbols = alphabet.symbols();
    let mut passcode = String::with_capacity(length);
    for _ in 0..length {
        let (quotient, digit) = value.div_rem(&radix);
        // digit < radix, so it always fits and indexes the alphabet
        passcode.push(symbols[digit.to_usize().unwrap_or(0)]);
        value = quotient;
    }
    passcode
}

/// First index of a 1-based page of `count` passcodes.
///
/// # Returns
/// `Ok((page - 1) * count)`, `PppError::InvalidPage` for page zero, or a
/// range error if the start index does not fit in 128 bits.
pub fn page_start(page: u128, count: u64) -> Result<u128, PppError> {
    if page == 0 {
        return Err(PppError::InvalidPage("pages are numbered from 1".to_string()));
    }
    (page - 1).checked_mul(u128::from(count)).ok_or_else(|| {
        PppError::IndexOutOfRange(BigUint::from(page - 1) * BigUint::from(count))
    })
}

fn validate_length(length: usize) -> Result<(), PppError> {
    if length == 0 {
        return Err(PppError::InvalidLength);
    }
    Ok(())
}

/// Last index of the range, `None` for an empty range.
fn last_index(start: u128, count: u64) -> Result<Option<u128>, PppError> {
    if count == 0 {
        return Ok(None);
    }
    let span = u128::from(count - 1);
    start.checked_add(span).map(Some).ok_or_else(|| {
        PppError::IndexOutOfRange(BigUint::from(start) + BigUint::from(span))
    })
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;
    use crate::cipher::BLOCK_SIZE;
    use crate::codec::unpack128;
    use crate::key::KEY_SIZE;
    use crate::ErrorKind;

    /// Returns the same block for every input.
    struct ConstantCipher(u128);

    impl PasscodeCipher for ConstantCipher {
        fn encrypt_block(&self, _block: &[u8; BLOCK_SIZE], _key: &[u8; KEY_SIZE]) -> [u8; BLOCK_SIZE] {
            self.0.to_le_bytes()
        }
    }

    /// Returns the plaintext unchanged and records every index it sees.
    #[derive(Default)]
    struct EchoCipher {
        seen: RefCell<Vec<u128>>,
    }

    impl PasscodeCipher for EchoCipher {
        fn encrypt_block(&self, block: &[u8; BLOCK_SIZE], _key: &[u8; KEY_SIZE]) -> [u8; BLOCK_SIZE] {
            self.seen.borrow_mut().push(unpack128(block));
            *block
        }
    }

    fn zero_key() -> SequenceKey {
        SequenceKey::new([0u8; KEY_SIZE])
    }

    fn decimal() -> Alphabet {
        Alphabet::new("0123456789").unwrap()
    }

    #[test]
    fn test_stub_oracle_low_digits_in_extraction_order() {
        let generator = PasscodeGenerator::with_cipher(ConstantCipher(1_234_567_890));
        let codes = generator.generate(&zero_key(), &decimal(), 0, 1, 4).unwrap();
        assert_eq!(codes, vec!["0987"]);
    }

    /// Requesting more digits than the value has pads with the first symbol.
    #[test]
    fn test_stub_oracle_short_value_pads_with_zero_symbol() {
        let generator = PasscodeGenerator::with_cipher(ConstantCipher(42));
        let codes = generator.generate(&zero_key(), &decimal(), 0, 1, 5).unwrap();
        assert_eq!(codes, vec!["24000"]);
    }

    #[test]
    fn test_indices_visited_in_ascending_order() {
        let generator = PasscodeGenerator::with_cipher(EchoCipher::default());
        let codes = generator.generate(&zero_key(), &decimal(), 98, 4, 3).unwrap();
        assert_eq!(codes, vec!["890", "990", "001", "101"]);
        assert_eq!(*generator.cipher.seen.borrow(), vec![98, 99, 100, 101]);
    }

    #[test]
    fn test_zero_count_is_empty() {
        let generator = PasscodeGenerator::with_cipher(EchoCipher::default());
        let codes = generator.generate(&zero_key(), &decimal(), 5, 0, 4).unwrap();
        assert!(codes.is_empty());
        assert!(generator.cipher.seen.borrow().is_empty());
    }

    #[test]
    fn test_zero_count_at_max_index_is_empty() {
        let codes = generate(&zero_key(), &decimal(), u128::MAX, 0, 4).unwrap();
        assert!(codes.is_empty());
    }

    #[test]
    fn test_last_index_succeeds() {
        let codes = generate(&zero_key(), &decimal(), u128::MAX, 1, 4).unwrap();
        assert_eq!(codes, vec!["8073"]);
    }

    #[test]
    fn test_range_past_max_is_range_error() {
        let generator = PasscodeGenerator::with_cipher(EchoCipher::default());
        let err = generator
            .generate(&zero_key(), &decimal(), u128::MAX, 2, 4)
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Range);
        match err {
            PppError::IndexOutOfRange(n) => assert_eq!(n, BigUint::from(u128::MAX) + 1u8),
            other => panic!("unexpected error: {other}"),
        }
        assert!(generator.cipher.seen.borrow().is_empty());
    }

    #[test]
    fn test_start_2_pow_128_is_range_error() {
        let start = BigUint::from(u128::MAX) + 1u8;
        let err = PasscodeGenerator::new()
            .generate_from(&zero_key(), &decimal(), &start, 1, 4)
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Range);
    }

    #[test]
    fn test_generate_from_in_range() {
        let start = BigUint::from(u128::MAX);
        let codes = PasscodeGenerator::new()
            .generate_from(&zero_key(), &decimal(), &start, 1, 4)
            .unwrap();
        assert_eq!(codes, vec!["8073"]);
    }

    #[test]
    fn test_zero_length_is_configuration_error() {
        let generator = PasscodeGenerator::with_cipher(EchoCipher::default());
        let err = generator.generate(&zero_key(), &decimal(), 0, 3, 0).unwrap_err();
        assert!(matches!(err, PppError::InvalidLength));
        assert_eq!(err.kind(), ErrorKind::Configuration);
        assert!(generator.cipher.seen.borrow().is_empty());
        assert!(generator.passcode(&zero_key(), &decimal(), 0, 0).is_err());
    }

    #[test]
    fn test_aes_zero_key_decimal_codes() {
        let codes = generate(&zero_key(), &decimal(), 0, 3, 4).unwrap();
        assert_eq!(codes, vec!["8225", "6070", "3261"]);

        let codes = generate(&zero_key(), &decimal(), 5, 3, 6).unwrap();
        assert_eq!(codes, vec!["024218", "383874", "160689"]);
    }

    #[test]
    fn test_passphrase_default_alphabet_codes() {
        let key = SequenceKey::from_passphrase("zombie");
        let codes = generate(&key, &Alphabet::default(), 0, 3, 4).unwrap();
        assert_eq!(codes, vec!["4p=#", "eXk?", "z=ao"]);
    }

    #[test]
    fn test_single_passcode_matches_range() {
        let key = SequenceKey::from_passphrase("zombie");
        let generator = PasscodeGenerator::new();
        let code = generator.passcode(&key, &Alphabet::default(), 1, 4).unwrap();
        assert_eq!(code, "eXk?");
        let code = generator.passcode(&key, &Alphabet::default(), u128::MAX, 4).unwrap();
        assert_eq!(code, "dK?#");
    }

    #[test]
    fn test_alphabet_order_does_not_matter() {
        let key = SequenceKey::from_passphrase("zombie");
        let ab = generate(&key, &Alphabet::new("ab").unwrap(), 0, 2, 8).unwrap();
        let ba = generate(&key, &Alphabet::new("ba").unwrap(), 0, 2, 8).unwrap();
        assert_eq!(ab, ba);
        assert_eq!(ab, vec!["abbaaaba", "bbababaa"]);
    }

    #[test]
    fn test_to_passcode_binary() {
        let alphabet = Alphabet::new("01").unwrap();
        assert_eq!(to_passcode(BigUint::from(6u8), &alphabet, 4), "0110");
    }

    #[test]
    fn test_page_start() {
        assert_eq!(page_start(1, 70).unwrap(), 0);
        assert_eq!(page_start(2, 70).unwrap(), 70);
        assert_eq!(page_start(5, 0).unwrap(), 0);
    }

    #[test]
    fn test_page_zero_is_configuration_error() {
        let err = page_start(0, 70).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Configuration);
    }

    #[test]
    fn test_page_start_overflow_is_range_error() {
        let err = page_start(u128::MAX, 70).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Range);
    }

    #[test]
    fn test_second_page_continues_first() {
        let key = SequenceKey::from_passphrase("zombie");
        let start = page_start(2, 70).unwrap();
        let codes = generate(&key, &Alphabet::default(), start, 3, 4).unwrap();
        assert_eq!(codes, vec!["npkH", "gzyo", "rU8K"]);
    }
}
