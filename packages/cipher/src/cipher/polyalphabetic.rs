//! Vigenère-style polyalphabetic cipher over the Cyrillic alphabet
//!
//! Each letter is shifted by the alphabet position of the key letter at the
//! same index, the key repeating as often as needed:
//!
//! ```text
//! c[i] = (p[i] + k[i mod |k|]) mod N
//! p[i] = (c[i] + N - k[i mod |k|]) mod N
//! ```
//!
//! Encryption accepts arbitrary human text and keeps only the letters of the
//! alphabet, upper-cased. Decryption accepts canonical cipher text only.

use super::{alphabet, ClassicalAlgorithm, TextCipher};
use crate::{CipherError, Result};
use classic_common::LoggingTransformer;
use std::fmt;

/// Polyalphabetic cipher keyed by a Cyrillic word
///
/// # Examples
///
/// ```
/// use classic_cipher::PolyalphabeticCipher;
///
/// let cipher = PolyalphabeticCipher::new("КЛЮЧ")?;
/// let encrypted = cipher.encrypt("Привет!")?;
/// assert_eq!(cipher.decrypt(&encrypted)?, "ПРИВЕТ");
/// # Ok::<(), classic_cipher::CipherError>(())
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct PolyalphabeticCipher {
    key: Vec<usize>,
}

impl fmt::Debug for PolyalphabeticCipher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PolyalphabeticCipher")
            .field("key_len", &self.key.len())
            .finish_non_exhaustive()
    }
}

impl PolyalphabeticCipher {
    /// Validate `key` and build a cipher from it
    ///
    /// The key is case-insensitive. It must be non-empty, consist only of
    /// letters of the alphabet, and contain at least two distinct letters.
    ///
    /// # Errors
    ///
    /// Returns [`CipherError::InvalidKey`] if any of the above does not hold.
    pub fn new(key: &str) -> Result<Self> {
        let key_positions = Self::valid_key(key)
            .inspect_err(|e| LoggingTransformer::log_validation_rejection("key", e))?;
        LoggingTransformer::log_key_fingerprint(ClassicalAlgorithm::Polyalphabetic.name(), key);
        Ok(Self { key: key_positions })
    }

    /// Alphabet positions of the key letters
    #[must_use]
    pub fn key_positions(&self) -> &[usize] {
        &self.key
    }

    /// Strip everything that is not a letter of the alphabet and upper-case the rest
    ///
    /// This is exactly the text `encrypt` transforms, and therefore what a
    /// round trip through `decrypt` gives back.
    #[must_use]
    pub fn normalize(text: &str) -> String {
        text.chars()
            .map(alphabet::fold_upper)
            .filter(|&c| alphabet::position_of(c).is_some())
            .collect()
    }

    /// Encrypt `text`, silently dropping spaces, digits, punctuation and
    /// letters outside the alphabet
    ///
    /// # Errors
    ///
    /// Returns [`CipherError::EmptyInput`] if no letters remain.
    pub fn encrypt(&self, text: &str) -> Result<String> {
        let work = Self::open_text_positions(text)
            .inspect_err(|e| LoggingTransformer::log_validation_rejection("encrypt", e))?;
        let size = alphabet::size();

        let encrypted: String = work
            .iter()
            .zip(self.keystream())
            .map(|(&p, k)| alphabet::letter_at((p + k) % size))
            .collect();

        LoggingTransformer::log_cipher_operation(
            "encrypt",
            ClassicalAlgorithm::Polyalphabetic.name(),
            text.chars().count(),
            work.len(),
        );
        Ok(encrypted)
    }

    /// Decrypt canonical cipher text
    ///
    /// # Errors
    ///
    /// Returns [`CipherError::InvalidCipherText`] if `text` is empty or holds
    /// anything other than uppercase letters of the alphabet.
    pub fn decrypt(&self, text: &str) -> Result<String> {
        let work = Self::cipher_text_positions(text)
            .inspect_err(|e| LoggingTransformer::log_validation_rejection("decrypt", e))?;
        let size = alphabet::size();

        let decrypted: String = work
            .iter()
            .zip(self.keystream())
            .map(|(&c, k)| alphabet::letter_at((c + size - k) % size))
            .collect();

        LoggingTransformer::log_cipher_operation(
            "decrypt",
            ClassicalAlgorithm::Polyalphabetic.name(),
            work.len(),
            work.len(),
        );
        Ok(decrypted)
    }

    fn keystream(&self) -> impl Iterator<Item = usize> + '_ {
        self.key.iter().copied().cycle()
    }

    fn valid_key(key: &str) -> Result<Vec<usize>> {
        if key.is_empty() {
            return Err(CipherError::InvalidKey("key is empty".to_string()));
        }

        let positions = key
            .chars()
            .map(|c| {
                alphabet::position_of(alphabet::fold_upper(c)).ok_or_else(|| {
                    CipherError::InvalidKey(
                        "key must contain only letters of the alphabet".to_string(),
                    )
                })
            })
            .collect::<Result<Vec<_>>>()?;

        // A single repeated letter is a plain Caesar shift.
        if positions.windows(2).all(|pair| pair[0] == pair[1]) {
            return Err(CipherError::InvalidKey(
                "weak key: all characters are the same".to_string(),
            ));
        }

        Ok(positions)
    }

    fn open_text_positions(text: &str) -> Result<Vec<usize>> {
        let positions: Vec<usize> = text
            .chars()
            .filter_map(|c| alphabet::position_of(alphabet::fold_upper(c)))
            .collect();

        if positions.is_empty() {
            return Err(CipherError::EmptyInput(
                "open text has no letters of the alphabet".to_string(),
            ));
        }
        Ok(positions)
    }

    fn cipher_text_positions(text: &str) -> Result<Vec<usize>> {
        if text.is_empty() {
            return Err(CipherError::InvalidCipherText(
                "cipher text is empty".to_string(),
            ));
        }

        text.chars()
            .map(|c| {
                alphabet::position_of(c).ok_or_else(|| {
                    CipherError::InvalidCipherText(
                        "must contain only uppercase letters of the alphabet".to_string(),
                    )
                })
            })
            .collect()
    }
}

impl TextCipher for PolyalphabeticCipher {
    fn algorithm(&self) -> ClassicalAlgorithm {
        ClassicalAlgorithm::Polyalphabetic
    }

    fn encrypt(&self, text: &str) -> Result<String> {
        PolyalphabeticCipher::encrypt(self, text)
    }

    fn decrypt(&self, text: &str) -> Result<String> {
        PolyalphabeticCipher::decrypt(self, text)
    }
}
