//! Perfect Paper Passwords - passcode sequence generation.
//!
//! This crate provides the building blocks for deriving numbered one-time
//! passcodes from a 256-bit sequence key:
//! - 128-bit index packing into 16 little-endian bytes
//! - A block cipher oracle (AES-256 by default) behind the `PasscodeCipher` trait
//! - Mixed-radix conversion of cipher output into alphabet strings
//! - Sequence key derivation from hex, passphrase, or OS randomness

pub mod codec;
pub mod cipher;
pub mod key;
pub mod alphabet;
pub mod generator;
pub mod config;

mod error;
pub use error::{ErrorKind, PppError};

pub use alphabet::{Alphabet, DEFAULT_ALPHABET};
pub use cipher::{Aes256Cipher, PasscodeCipher};
pub use config::GeneratorConfig;
pub use generator::{generate, page_start, PasscodeGenerator};
pub use key::SequenceKey;
