//! Entry point for the fluent cipher API

use super::{polyalphabetic_builder::PolyalphabeticBuilder, route_builder::RouteBuilder};

/// Entry point for cipher operations
pub struct Cipher;

impl Cipher {
    /// Use the polyalphabetic cipher over the Cyrillic alphabet
    #[must_use]
    pub fn polyalphabetic() -> PolyalphabeticBuilder {
        PolyalphabeticBuilder::new()
    }

    /// Use the polyalphabetic cipher (alias)
    #[must_use]
    pub fn vigenere() -> PolyalphabeticBuilder {
        PolyalphabeticBuilder::new()
    }

    /// Use the route (columnar transposition) cipher over Latin letters
    #[must_use]
    pub fn route() -> RouteBuilder {
        RouteBuilder::new()
    }
}
