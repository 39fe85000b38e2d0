//! Cipher algorithm definitions and metadata

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Supported classical cipher algorithms
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ClassicalAlgorithm {
    /// Vigenère-style polyalphabetic substitution
    ///
    /// - Cyrillic alphabet, including Ё
    /// - Key is a word of at least two distinct letters
    /// - Keystream offsets added modulo the alphabet size
    #[serde(rename = "polyalphabetic")]
    Polyalphabetic,

    /// Route (columnar transposition) cipher
    ///
    /// - Latin letters, spaces dropped from open text
    /// - Key is the number of grid columns
    /// - Columns read right to left, top to bottom
    #[serde(rename = "route")]
    Route,
}

impl ClassicalAlgorithm {
    /// Get the human-readable name of the algorithm
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Polyalphabetic => "Polyalphabetic",
            Self::Route => "Route",
        }
    }

    /// Describe what the key of this algorithm is
    #[must_use]
    pub fn key_kind(&self) -> &'static str {
        match self {
            Self::Polyalphabetic => "Cyrillic key word",
            Self::Route => "column count",
        }
    }

    /// Get all standard algorithm variants
    #[must_use]
    pub fn all_standard() -> &'static [Self] {
        &[Self::Polyalphabetic, Self::Route]
    }
}

impl fmt::Display for ClassicalAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ClassicalAlgorithm {
    type Err = crate::CipherError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "polyalphabetic" | "vigenere" | "modalpha" => Ok(Self::Polyalphabetic),
            "route" | "columnar" | "transposition" => Ok(Self::Route),
            _ => Err(crate::CipherError::UnsupportedAlgorithm(s.to_string())),
        }
    }
}
