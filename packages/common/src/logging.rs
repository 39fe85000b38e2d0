//! Structured logging infrastructure
//!
//! Provides env_logger-based logging with secure handling of key material
//! and proper integration with the standard log crate.

use log::{debug, info};
use sha2::{Digest, Sha256};
use std::sync::Once;

static INIT_LOGGER: Once = Once::new();

/// Logging infrastructure using `env_logger`
pub struct LoggingTransformer;

impl LoggingTransformer {
    /// Initialize logging system (should be called once at application startup)
    ///
    /// Configure logging levels via `RUST_LOG` environment variable:
    /// - `RUST_LOG=debug` - Enable per-operation logs
    /// - `RUST_LOG=trace` - Also dump route cipher work tables
    /// - `RUST_LOG=classic_cipher=debug` - Module-specific levels
    pub fn init() {
        INIT_LOGGER.call_once(|| {
            env_logger::Builder::from_default_env()
                .format_timestamp_micros()
                .init();

            info!("Structured logging initialized");
        });
    }

    /// Initialize logging for test environments
    ///
    /// Use this in test modules to avoid initialization conflicts
    pub fn init_test() {
        let _ = env_logger::Builder::from_default_env()
            .is_test(true)
            .try_init();
    }

    /// Log a completed cipher operation with its input and output sizes
    pub fn log_cipher_operation(
        operation: &str,
        algorithm: &str,
        input_len: usize,
        output_len: usize,
    ) {
        debug!("{algorithm} {operation}: {input_len} chars in, {output_len} chars out");
    }

    /// Log an input rejected by validation
    ///
    /// Only the error is logged, never the offending text.
    pub fn log_validation_rejection(operation: &str, error: &dyn std::error::Error) {
        debug!("Rejected {operation}: {error}");
    }

    /// Log the fingerprint of a freshly validated key
    ///
    /// The key itself is hashed using SHA-256 so it never reaches the log.
    pub fn log_key_fingerprint(algorithm: &str, key: &str) {
        let fingerprint = Self::secure_hash_key(key);
        debug!("{algorithm} key accepted (key_hash: {fingerprint})");
    }

    /// Cryptographically secure key hashing for logging
    ///
    /// Returns first 12 characters of hex-encoded hash for readability.
    fn secure_hash_key(key: &str) -> String {
        let hash = Sha256::digest(key.as_bytes());
        let hex_hash = format!("{hash:x}");
        format!("#{}", &hex_hash[..12])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_secure_key_hashing() {
        LoggingTransformer::init_test();

        let hash1 = LoggingTransformer::secure_hash_key("КЛЮЧ");
        let hash2 = LoggingTransformer::secure_hash_key("ПАРОЛЬ");

        assert_ne!(hash1, hash2);
        assert_eq!(hash1, LoggingTransformer::secure_hash_key("КЛЮЧ"));

        // '#' followed by 12 hex digits
        assert!(hash1.starts_with('#'));
        assert_eq!(hash1.len(), 13);
        assert!(!hash1.contains("КЛЮЧ"));
    }

    #[test]
    fn test_logging_operations() {
        LoggingTransformer::init_test();

        LoggingTransformer::log_cipher_operation("encrypt", "Route", 10, 10);
        LoggingTransformer::log_key_fingerprint("Polyalphabetic", "КЛЮЧ");
        let err = std::io::Error::other("bad input");
        LoggingTransformer::log_validation_rejection("decrypt", &err);
    }
}
