use num_bigint::BigUint;

/// Unified error type for passcode generation.
///
/// Every variant is detected before the first cipher invocation, so a
/// failed call never yields a partial passcode list.
#[derive(Debug, thiserror::Error)]
pub enum PppError {
    #[error("integer {0} cannot be packed into 128 bits")]
    IndexOutOfRange(BigUint),

    #[error("invalid key length: expected {expected} hex characters, got {got}")]
    InvalidKeyLength { expected: usize, got: usize },

    #[error("invalid key: {0}")]
    InvalidKey(String),

    #[error("alphabet needs at least {min} distinct symbols, got {got}")]
    AlphabetTooSmall { min: usize, got: usize },

    #[error("passcode length must be at least 1")]
    InvalidLength,

    #[error("invalid page: {0}")]
    InvalidPage(String),
}

/// Coarse classification of a [`PppError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// An index or index range falls outside `[0, 2^128 - 1]`.
    Range,
    /// Key material is malformed.
    Format,
    /// Alphabet, passcode length, or page parameters are unusable.
    Configuration,
}

impl PppError {
    /// Return the error category for this failure.
    pub fn kind(&self) -> ErrorKind {
        match self {
            PppError::IndexOutOfRange(_) => ErrorKind::Range,
            PppError::InvalidKeyLength { .. } | PppError::InvalidKey(_) => ErrorKind::Format,
            PppError::AlphabetTooSmall { .. }
            | PppError::InvalidLength
            | PppError::InvalidPage(_) => ErrorKind::Configuration,
        }
    }
}

impl From<hex::FromHexError> for PppError {
    fn from(e: hex::FromHexError) -> Self {
        PppError::InvalidKey(e.to_string())
    }
}
