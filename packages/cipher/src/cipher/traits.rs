//! Shared contract of the classical ciphers

use super::ClassicalAlgorithm;
use crate::Result;

/// A keyed text cipher with a permissive `encrypt` and a strict `decrypt`
///
/// Implementations hold nothing but their immutable key, so a single
/// instance can be shared across threads and used concurrently.
pub trait TextCipher: Send + Sync {
    /// Algorithm implemented by this cipher
    fn algorithm(&self) -> ClassicalAlgorithm;

    /// Normalize and encrypt `text`
    ///
    /// # Errors
    ///
    /// Returns an error if `text` fails the algorithm's open text validation.
    fn encrypt(&self, text: &str) -> Result<String>;

    /// Decrypt canonical cipher text
    ///
    /// # Errors
    ///
    /// Returns an error if `text` is not well-formed cipher text.
    fn decrypt(&self, text: &str) -> Result<String>;
}
