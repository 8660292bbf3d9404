//! Error types for the Geohash-36 codec.

use thiserror::Error;

/// Errors produced by encoding, decoding, precision and neighbor lookups.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Geohash36Error {
    /// A character of the hash is not part of the Geohash-36 alphabet.
    #[error("invalid Geohash-36 symbol '{symbol}' at position {position}")]
    InvalidSymbol { symbol: char, position: usize },

    /// A coordinate lies outside its axis, or a neighbor shift would cross a
    /// rejected boundary.
    #[error("out of range: {0}")]
    OutOfRange(String),

    /// A requested hash length exceeds what the codec can resolve.
    #[error("hash length {length} exceeds the maximum of {max}")]
    InvalidLength { length: usize, max: usize },

    /// Configuration failed validation.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

pub type Result<T> = std::result::Result<T, Geohash36Error>;
