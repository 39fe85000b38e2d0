//! Common infrastructure for the classical cipher workspace
//!
//! Currently this is the shared logging layer: one-time `env_logger`
//! setup plus helpers that log cipher activity without leaking key
//! material.

pub mod logging;

pub use logging::LoggingTransformer;
