//! Error types for jsonsum core.

use thiserror::Error;

/// Errors that abort a checksum computation.
///
/// No partial digest is ever produced: the first error raised while
/// consuming tokens is returned to the caller unchanged.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// The input is not well-formed JSON. Carries the parser's message,
    /// including line and column.
    #[error("malformed JSON: {0}")]
    Parse(String),

    /// Reading the input failed.
    #[error("read failed: {0}")]
    Read(String),

    /// Number text that is not a JSON number, or whose exponent does not
    /// fit in 64 bits.
    #[error("invalid number {0:?}")]
    InvalidNumber(String),

    /// An object contains the same key twice.
    #[error("duplicate key {0:?}")]
    DuplicateKey(String),

    /// A hash primitive was used after finalize without a reset.
    #[error("invalid hash primitive state: {0}")]
    InvalidPrimitiveState(&'static str),

    /// A token arrived where the grammar does not allow it.
    #[error("unexpected token {token}: {reason}")]
    UnexpectedToken {
        token: &'static str,
        reason: &'static str,
    },

    /// Hash primitives from one factory disagreed on their output size.
    #[error("digest length mismatch: expected {expected} bytes, got {actual}")]
    DigestLength { expected: usize, actual: usize },

    /// Nesting went deeper than the configured limit.
    #[error("nesting depth exceeds limit of {0}")]
    DepthLimitExceeded(usize),

    /// A 4-byte view was requested on a digest of another length.
    #[error("digest of {0} bytes has no u32 view")]
    NotUint32(usize),
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        if err.is_io() {
            Error::Read(err.to_string())
        } else {
            Error::Parse(err.to_string())
        }
    }
}

/// Result type for jsonsum core operations.
pub type Result<T> = std::result::Result<T, Error>;
