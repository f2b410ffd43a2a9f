//! Error types for quadpath operations.

use thiserror::Error;

/// Errors produced by region construction, path parsing and query validation.
///
/// A neighbor request that leaves the region is not an error; it is reported
/// as `None` by [`QuadCodec::neighbor`](crate::QuadCodec::neighbor).
#[derive(Error, Debug, Clone, PartialEq)]
pub enum QuadError {
    /// Region bounds are out of range, inverted or non-finite.
    #[error("Invalid region: {0}")]
    InvalidRegion(String),

    /// A path string contains a symbol outside the quadrant alphabet.
    #[error("Invalid path symbol {symbol:?} at position {position}")]
    InvalidPath { symbol: char, position: usize },

    /// Requested precision exceeds what the codec accepts.
    #[error("Precision {precision} exceeds the maximum of {max}")]
    InvalidPrecision { precision: usize, max: usize },

    /// A caller-supplied argument violates an operation's contract.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Configuration could not be parsed or failed validation.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<serde_json::Error> for QuadError {
    fn from(err: serde_json::Error) -> Self {
        QuadError::Config(err.to_string())
    }
}

#[cfg(feature = "toml")]
impl From<toml::de::Error> for QuadError {
    fn from(err: toml::de::Error) -> Self {
        QuadError::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, QuadError>;
