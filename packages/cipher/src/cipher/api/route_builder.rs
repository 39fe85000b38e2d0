//! Route cipher builders

use crate::cipher::RouteCipher;
use crate::Result;

/// Initial route builder - entry point
#[derive(Debug, Default)]
pub struct RouteBuilder;

/// Route builder with column count
#[derive(Debug, Clone, Copy)]
pub struct RouteWithKey {
    columns: i64,
}

/// Route builder with column count and result handler
pub struct RouteWithKeyAndHandler<F> {
    columns: i64,
    result_handler: F,
}

impl RouteBuilder {
    /// Create new route builder
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Set the number of grid columns
    #[must_use]
    pub fn with_columns(self, columns: i64) -> RouteWithKey {
        RouteWithKey { columns }
    }
}

impl RouteWithKey {
    /// Validate the column count and build the cipher
    ///
    /// # Errors
    ///
    /// Returns [`crate::CipherError::InvalidKey`] if the count is not positive.
    pub fn build(self) -> Result<RouteCipher> {
        RouteCipher::new(self.columns)
    }

    /// Add `on_result` handler receiving the outcome of the final action
    #[must_use]
    pub fn on_result<F, T>(self, handler: F) -> RouteWithKeyAndHandler<F>
    where
        F: FnOnce(Result<String>) -> T,
    {
        RouteWithKeyAndHandler {
            columns: self.columns,
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

impl<F, T> RouteWithKeyAndHandler<F>
where
    F: FnOnce(Result<String>) -> T,
{
    /// Encrypt text and pass the outcome to the handler
    pub fn encrypt(self, text: &str) -> T {
        let handler = self.result_handler;
        handler(RouteCipher::new(self.columns).and_then(|cipher| cipher.encrypt(text)))
    }

    /// Decrypt text and pass the outcome to the handler
    pub fn decrypt(self, text: &str) -> T {
        let handler = self.result_handler;
        handler(RouteCipher::new(self.columns).and_then(|cipher| cipher.decrypt(text)))
    }
}
