//! # Classic Cipher
//!
//! Two classical text ciphers with strict input validation:
//!
//! - [`PolyalphabeticCipher`]: Vigenère-style substitution over the Cyrillic
//!   alphabet, keyed by a word.
//! - [`RouteCipher`]: columnar transposition over Latin letters, keyed by a
//!   column count.
//!
//! Both are pedagogical ciphers and offer no real security.
//!
//! ```
//! use classic_cipher::Cipher;
//!
//! let encrypted = Cipher::route().with_columns(4).encrypt("Test string here")?;
//! assert_eq!(encrypted, "TIESRHETGETSNR");
//!
//! let decrypted = Cipher::polyalphabetic()
//!     .with_key("ключ")
//!     .on_result(|result| result.unwrap_or_default())
//!     .decrypt("НЗ");
//! assert!(!decrypted.is_empty());
//! # Ok::<(), classic_cipher::CipherError>(())
//! ```

#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Classical cipher primitives
pub mod cipher;
pub mod error;

// Re-export core types
pub use error::{CipherError, Result};

// Re-export the main APIs
pub use cipher::api::{
    Cipher, PolyalphabeticBuilder, PolyalphabeticWithKey, RouteBuilder, RouteWithKey,
};
pub use cipher::{
    CipherConfig, ClassicalAlgorithm, PolyalphabeticCipher, RouteCipher, RouteGrid, TextCipher,
};

/// Main entry point
pub struct Classic;

impl Classic {
    /// Master builder for cipher operations
    #[must_use]
    pub fn cipher() -> CipherMasterBuilder {
        CipherMasterBuilder
    }
}

/// Master builder for cipher operations
pub struct CipherMasterBuilder;

impl CipherMasterBuilder {
    /// Use the polyalphabetic cipher
    #[must_use]
    pub fn polyalphabetic(self) -> PolyalphabeticBuilder {
        PolyalphabeticBuilder::new()
    }

    /// Use the route cipher
    #[must_use]
    pub fn route(self) -> RouteBuilder {
        RouteBuilder::new()
    }
}

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        Cipher, CipherConfig, CipherError, Classic, ClassicalAlgorithm, PolyalphabeticCipher,
        Result, RouteCipher, TextCipher,
    };
}
