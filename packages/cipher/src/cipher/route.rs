//! Route (columnar transposition) cipher over Latin letters

use super::{ClassicalAlgorithm, RouteGrid, TextCipher};
use crate::{CipherError, Result};
use classic_common::LoggingTransformer;

/// Route cipher keyed by a column count
///
/// Open text is written row by row into a grid `columns` wide and read back
/// column by column, from the last column to the first.
///
/// # Examples
///
/// ```
/// use classic_cipher::RouteCipher;
///
/// let cipher = RouteCipher::new(3)?;
/// assert_eq!(cipher.encrypt("abc def")?, "CFBEAD");
/// assert_eq!(cipher.decrypt("CFBEAD")?, "ABCDEF");
/// # Ok::<(), classic_cipher::CipherError>(())
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RouteCipher {
    columns: usize,
}

impl RouteCipher {
    /// Build a cipher with `key` grid columns
    ///
    /// # Errors
    ///
    /// Returns [`CipherError::InvalidKey`] if `key` is zero or negative.
    pub fn new(key: i64) -> Result<Self> {
        let columns = usize::try_from(key)
            .ok()
            .filter(|&columns| columns > 0)
            .ok_or_else(|| CipherError::InvalidKey("key must be a positive integer".to_string()))
            .inspect_err(|e| LoggingTransformer::log_validation_rejection("key", e))?;
        Ok(Self { columns })
    }

    /// Number of grid columns
    #[must_use]
    pub fn columns(&self) -> usize {
        self.columns
    }

    /// Validate open text and return its letters upper-cased, spaces removed
    ///
    /// # Errors
    ///
    /// Same as [`Self::encrypt`].
    pub fn normalize(text: &str) -> Result<String> {
        Ok(Self::open_text_letters(text)?.into_iter().collect())
    }

    /// Build the encryption work table for `text`
    ///
    /// # Errors
    ///
    /// Same as [`Self::encrypt`].
    pub fn grid(&self, text: &str) -> Result<RouteGrid> {
        let letters = Self::open_text_letters(text)?;
        Ok(RouteGrid::from_rows(&letters, self.columns))
    }

    /// Encrypt open text made of Latin letters and spaces
    ///
    /// # Errors
    ///
    /// - [`CipherError::EmptyInput`] if `text` is empty
    /// - [`CipherError::InvalidOpenText`] if it holds anything but letters and spaces
    /// - [`CipherError::NoLetters`] if it holds only spaces
    pub fn encrypt(&self, text: &str) -> Result<String> {
        let grid = self
            .grid(text)
            .inspect_err(|e| LoggingTransformer::log_validation_rejection("encrypt", e))?;
        log::trace!("Encryption table:\n{grid}");

        let encrypted = grid.read_columns();
        LoggingTransformer::log_cipher_operation(
            "encrypt",
            ClassicalAlgorithm::Route.name(),
            text.chars().count(),
            encrypted.len(),
        );
        Ok(encrypted)
    }

    /// Decrypt cipher text made of Latin letters, in either case
    ///
    /// # Errors
    ///
    /// - [`CipherError::EmptyInput`] if `text` is empty
    /// - [`CipherError::InvalidCipherText`] if it holds anything but letters
    pub fn decrypt(&self, text: &str) -> Result<String> {
        let letters = Self::cipher_text_letters(text)
            .inspect_err(|e| LoggingTransformer::log_validation_rejection("decrypt", e))?;
        let grid = RouteGrid::from_columns(&letters, self.columns);
        log::trace!("Decryption table:\n{grid}");

        let decrypted = grid.read_rows();
        LoggingTransformer::log_cipher_operation(
            "decrypt",
            ClassicalAlgorithm::Route.name(),
            letters.len(),
            decrypted.len(),
        );
        Ok(decrypted)
    }

    fn open_text_letters(text: &str) -> Result<Vec<char>> {
        if text.is_empty() {
            return Err(CipherError::EmptyInput("open text is empty".to_string()));
        }

        let mut letters = Vec::with_capacity(text.len());
        for c in text.chars() {
            if c.is_ascii_alphabetic() {
                letters.push(c.to_ascii_uppercase());
            } else if c != ' ' {
                return Err(CipherError::InvalidOpenText(
                    "open text contains invalid characters".to_string(),
                ));
            }
        }

        if letters.is_empty() {
            return Err(CipherError::NoLetters);
        }
        Ok(letters)
    }

    fn cipher_text_letters(text: &str) -> Result<Vec<char>> {
        if text.is_empty() {
            return Err(CipherError::EmptyInput("cipher text is empty".to_string()));
        }

        text.chars()
            .map(|c| {
                if c.is_ascii_alphabetic() {
                    Ok(c.to_ascii_uppercase())
                } else {
                    Err(CipherError::InvalidCipherText(
                        "cipher text contains invalid characters".to_string(),
                    ))
                }
            })
            .collect()
    }
}

impl TextCipher for RouteCipher {
    fn algorithm(&self) -> ClassicalAlgorithm {
        ClassicalAlgorithm::Route
    }

    fn encrypt(&self, text: &str) -> Result<String> {
        RouteCipher::encrypt(self, text)
    }

    fn decrypt(&self, text: &str) -> Result<String> {
        RouteCipher::decrypt(self, text)
    }
}
