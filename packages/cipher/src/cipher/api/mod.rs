//! Fluent cipher API
//!
//! Actions take data as arguments:
//! `Cipher::polyalphabetic().with_key(key).on_result(handler).encrypt(text)`

mod cipher;
pub mod polyalphabetic_builder;
pub mod route_builder;

pub use cipher::Cipher;
pub use polyalphabetic_builder::{
    PolyalphabeticBuilder, PolyalphabeticWithKey, PolyalphabeticWithKeyAndHandler,
};
pub use route_builder::{RouteBuilder, RouteWithKey, RouteWithKeyAndHandler};
