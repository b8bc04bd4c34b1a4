//! Passcode alphabets.
//!
//! An alphabet is the digit set used to render cipher output. Symbols are
//! sorted by code point on construction, so `"ba"` and `"ab"` describe the
//! same alphabet. Duplicate symbols are kept, but at least two distinct
//! symbols are required.

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use crate::PppError;

/// The standard PPP character set (64 symbols, unsorted).
///
/// Excludes characters that are easily confused on paper: 0, 1, O, I, l, Q.
pub const DEFAULT_ALPHABET: &str =
    "23456789!@#%+=:?abcdefghijkmnopqrstuvwxyzABCDEFGHJKLMNPRSTUVWXYZ";

/// Minimum number of distinct symbols in an alphabet.
pub const MIN_SYMBOLS: usize = 2;

/// A sorted set of passcode symbols.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alphabet {
    symbols: Vec<char>,
}

impl Alphabet {
    /// Build an alphabet from a string of symbols.
    ///
    /// # Arguments
    /// * `chars` - The symbols, in any order.
    ///
    /// # Returns
    /// `Ok(Alphabet)` with the symbols sorted by code point, or
    /// `PppError::AlphabetTooSmall` if fewer than two distinct symbols remain.
    pub fn new(chars: &str) -> Result<Self, PppError> {
        let mut symbols: Vec<char> = chars.chars().collect();
        let distinct = symbols.iter().collect::<BTreeSet<_>>().len();
        if distinct < MIN_SYMBOLS {
            return Err(PppError::AlphabetTooSmall {
                min: MIN_SYMBOLS,
                got: distinct,
            });
        }
        symbols.sort_unstable();
        Ok(Alphabet { symbols })
    }

    /// Number of symbols, which is also the conversion radix.
    pub fn radix(&self) -> usize {
        self.symbols.len()
    }

    /// Get the symbol for a digit value.
    pub fn symbol(&self, digit: usize) -> Option<char> {
        self.symbols.get(digit).copied()
    }

    /// The sorted symbols.
    pub fn symbols(&self) -> &[char] {
        &self.symbols
    }

    /// Check whether a character belongs to the alphabet.
    pub fn contains(&self, c: char) -> bool {
        self.symbols.binary_search(&c).is_ok()
    }
}

impl Default for Alphabet {
    fn default() -> Self {
        let mut symbols: Vec<char> = DEFAULT_ALPHABET.chars().collect();
        symbols.sort_unstable();
        Alphabet { symbols }
    }
}

impl fmt::Display for Alphabet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for c in &self.symbols {
            write!(f, "{c}")?;
        }
        Ok(())
    }
}

impl FromStr for Alphabet {
    type Err = PppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Alphabet::new(s)
    }
}
