//! Error types for the jsonsum facade.

use thiserror::Error;

/// Errors that can occur while checksumming a document.
#[derive(Debug, Error)]
pub enum JsonsumError {
    /// The document could not be checksummed.
    #[error("checksum error: {0}")]
    Checksum(#[from] jsonsum_core::Error),

    /// An expected checksum was not valid hex.
    #[error("invalid checksum hex: {0}")]
    InvalidHex(#[from] hex::FromHexError),

    /// An algorithm name was not recognized.
    #[error("unknown algorithm: {0}")]
    UnknownAlgorithm(String),

    /// A configuration document could not be read.
    #[error("invalid configuration: {0}")]
    Config(#[from] serde_json::Error),
}

/// Result type for jsonsum operations.
pub type Result<T> = std::result::Result<T, JsonsumError>;
