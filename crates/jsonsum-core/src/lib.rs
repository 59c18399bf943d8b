//! # jsonsum core
//!
//! Structural checksums of JSON documents.
//!
//! A checksum covers content and nesting but ignores the order of keys in
//! objects and the spelling of numbers: `{"a":1,"b":2.0}` and `{"b":2,"a":1}`
//! have the same checksum. Objects with a repeated key are rejected.
//!
//! The engine is a single pass over a token stream, generic over the hash
//! primitive. JSON text is parsed by `serde_json` and streamed into it
//! without building a document tree.
//!
//! ## Key Types
//!
//! - [`Digest`] - The fixed-length checksum value
//! - [`Hasher`] / [`HasherFactory`] - The pluggable hash primitive
//! - [`Engine`] - The streaming state machine
//! - [`Token`] / [`TokenSink`] - Structural events and their consumers
//! - [`json`] - JSON text as a token source
//! - [`Decimal`] - Exact decimal numbers and their canonical encoding
//!
//! ## Example
//!
//! ```
//! use jsonsum_core::{digest, Sha256Hasher};
//!
//! let a = digest(r#"{"hi":1,"ho":2}"#, Sha256Hasher::new).unwrap();
//! let b = digest(r#"{"ho":2.0,"hi":1}"#, Sha256Hasher::new).unwrap();
//! assert_eq!(a, b);
//! ```

pub mod digest;
pub mod engine;
pub mod error;
pub mod hasher;
pub mod json;
pub mod number;
pub mod primitives;
pub mod token;

pub use digest::Digest;
pub use engine::{digest, digest_reader, digest_tokens, digest_with_config, Engine, EngineConfig};
pub use error::{Error, Result};
pub use hasher::{Hasher, HasherFactory};
pub use number::Decimal;
pub use primitives::{Blake3Hasher, Crc32Hasher, Sha256Hasher};
pub use token::{Token, TokenSink};
