//! Polyalphabetic cipher builders

use crate::cipher::PolyalphabeticCipher;
use crate::Result;

/// Initial polyalphabetic builder - entry point
#[derive(Debug, Default)]
pub struct PolyalphabeticBuilder;

/// Polyalphabetic builder with key
#[derive(Debug, Clone)]
pub struct PolyalphabeticWithKey {
    key: String,
}

/// Polyalphabetic builder with key and result handler
pub struct PolyalphabeticWithKeyAndHandler<F> {
    key: String,
    result_handler: F,
}

impl PolyalphabeticBuilder {
    /// Create new polyalphabetic builder
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Add key to builder
    ///
    /// The key is validated when the cipher is built or first used.
    #[must_use]
    pub fn with_key<K: Into<String>>(self, key: K) -> PolyalphabeticWithKey {
        PolyalphabeticWithKey { key: key.into() }
    }
}

impl PolyalphabeticWithKey {
    /// Validate the key and build the cipher
    ///
    /// # Errors
    ///
    /// Returns [`crate::CipherError::InvalidKey`] if the key is rejected.
    pub fn build(self) -> Result<PolyalphabeticCipher> {
        PolyalphabeticCipher::new(&self.key)
    }

    /// Add `on_result` handler receiving the outcome of the final action
    #[must_use]
    pub fn on_result<F, T>(self, handler: F) -> PolyalphabeticWithKeyAndHandler<F>
    where
        F: FnOnce(Result<String>) -> T,
    {
        PolyalphabeticWithKeyAndHandler {
            key: self.key,
            result_handler: handler,
        }
    }

    /// Encrypt text - action takes data as argument
    ///
    /// # Errors
    ///
    /// Returns the key or open text validation error.
    pub fn encrypt(self, text: &str) -> Result<String> {
        self.build()?.encrypt(text)
    }

    /// Decrypt text - action takes data as argument
    ///
    /// # Errors
    ///
    /// Returns the key or cipher text validation error.
    pub fn decrypt(self, text: &str) -> Result<String> {
        self.build()?.decrypt(text)
    }
}

impl<F, T> PolyalphabeticWithKeyAndHandler<F>
where
    F: FnOnce(Result<String>) -> T,
{
    /// Encrypt text and pass the outcome to the handler
    pub fn encrypt(self, text: &str) -> T {
        let handler = self.result_handler;
        handler(PolyalphabeticCipher::new(&self.key).and_then(|cipher| cipher.encrypt(text)))
    }

    /// Decrypt text and pass the outcome to the handler
    pub fn decrypt(self, text: &str) -> T {
        let handler = self.result_handler;
        handler(PolyalphabeticCipher::new(&self.key).and_then(|cipher| cipher.decrypt(text)))
    }
}
