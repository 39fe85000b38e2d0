//! Error handling for the classical ciphers

use thiserror::Error;

/// Cipher-specific errors
#[derive(Debug, Error)]
pub enum CipherError {
    /// Key is empty, has the wrong character class, is weak, or is not positive
    #[error("Invalid key: {0}")]
    InvalidKey(String),

    /// Input is empty, or nothing is left after stripping ignored characters
    #[error("Empty input: {0}")]
    EmptyInput(String),

    /// Open text contains a character the operation does not accept
    #[error("Invalid open text: {0}")]
    InvalidOpenText(String),

    /// Cipher text contains a character the operation does not accept
    #[error("Invalid cipher text: {0}")]
    InvalidCipherText(String),

    /// Open text passed the character checks but holds no letters
    #[error("Open text does not contain letters")]
    NoLetters,

    /// Unsupported cipher algorithm
    #[error("Unsupported algorithm: {0}")]
    UnsupportedAlgorithm(String),

    /// Malformed cipher configuration
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// I/O operation failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<serde_json::Error> for CipherError {
    fn from(err: serde_json::Error) -> Self {
        CipherError::Config(err.to_string())
    }
}

/// Result type for cipher operations
pub type Result<T> = std::result::Result<T, CipherError>;
