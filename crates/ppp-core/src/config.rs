//! Generator configuration.

use serde::{Deserialize, Serialize};

use crate::alphabet::{Alphabet, DEFAULT_ALPHABET};
use crate::PppError;

/// Default number of characters per passcode.
pub const DEFAULT_LENGTH: usize = 4;

/// Default number of passcodes per card.
pub const DEFAULT_COUNT: u64 = 70;

/// Configuration for passcode generation.
///
/// Fields missing from a serialized configuration take their defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GeneratorConfig {
    /// Symbols to build passcodes from, in any order.
    pub alphabet: String,
    /// Characters per passcode.
    pub length: usize,
    /// Passcodes per generation call.
    pub count: u64,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        GeneratorConfig {
            alphabet: DEFAULT_ALPHABET.to_string(),
            length: DEFAULT_LENGTH,
            count: DEFAULT_COUNT,
        }
    }
}

impl GeneratorConfig {
    /// Build the sorted alphabet described by this configuration.
    pub fn alphabet(&self) -> Result<Alphabet, PppError> {
        Alphabet::new(&self.alphabet)
    }

    /// Check the configuration without generating anything.
    pub fn validate(&self) -> Result<(), PppError> {
        if self.length == 0 {
            return Err(PppError::InvalidLength);
        }
        self.alphabet().map(|_| ())
    }
}
