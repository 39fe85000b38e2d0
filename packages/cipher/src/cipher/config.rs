//! Serializable cipher configuration
//!
//! ```json
//! { "algorithm": "polyalphabetic", "key": "КЛЮЧ" }
//! { "algorithm": "route", "columns": 4 }
//! ```

use super::{ClassicalAlgorithm, PolyalphabeticCipher, RouteCipher, TextCipher};
use crate::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Algorithm choice together with its key
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "algorithm", rename_all = "snake_case")]
pub enum CipherConfig {
    /// Polyalphabetic cipher keyed by a Cyrillic word
    Polyalphabetic {
        /// Key word, validated when the cipher is built
        key: String,
    },
    /// Route cipher keyed by a column count
    Route {
        /// Number of grid columns, validated when the cipher is built
        columns: i64,
    },
}

impl CipherConfig {
    /// Parse a configuration from JSON
    ///
    /// # Errors
    ///
    /// Returns [`crate::CipherError::Config`] if the JSON is malformed or
    /// names an unknown algorithm.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read and parse a JSON configuration file
    ///
    /// # Errors
    ///
    /// Returns [`crate::CipherError::Io`] if the file cannot be read, or
    /// [`crate::CipherError::Config`] if its content is malformed.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Serialize the configuration to JSON
    ///
    /// # Errors
    ///
    /// Returns [`crate::CipherError::Config`] if serialization fails.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Algorithm this configuration selects
    #[must_use]
    pub fn algorithm(&self) -> ClassicalAlgorithm {
        match self {
            Self::Polyalphabetic { .. } => ClassicalAlgorithm::Polyalphabetic,
            Self::Route { .. } => ClassicalAlgorithm::Route,
        }
    }

    /// Validate the key and build the configured cipher
    ///
    /// # Errors
    ///
    /// Returns [`crate::CipherError::InvalidKey`] if the key is rejected.
    pub fn build(&self) -> Result<Box<dyn TextCipher>> {
        Ok(match self {
            Self::Polyalphabetic { key } => Box::new(PolyalphabeticCipher::new(key)?),
            Self::Route { columns } => Box::new(RouteCipher::new(*columns)?),
        })
    }
}
