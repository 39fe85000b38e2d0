mod algorithm;
pub mod alphabet;
pub mod api;
mod config;
mod grid;
mod polyalphabetic;
mod route;
mod traits;

// Re-export algorithm enum
pub use self::algorithm::ClassicalAlgorithm;
pub use config::CipherConfig;
pub use grid::RouteGrid;
pub use polyalphabetic::PolyalphabeticCipher;
pub use route::RouteCipher;
pub use traits::TextCipher;
