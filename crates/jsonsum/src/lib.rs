//! # jsonsum
//!
//! Checksums of JSON documents that depend on content and structure, not
//! on key order or number formatting.
//!
//! ## Overview
//!
//! - `{"hi":1,"ho":2}` and `{"ho":2,"hi":1}` have the same checksum.
//! - `2`, `2.0`, `2e0` and `20e-1` have the same checksum.
//! - `[[],[2]]` and `[[[2]]]` do not.
//! - `{"a":1,"a":1}` is rejected: keys must be unique within an object.
//!
//! ## Usage
//!
//! ```rust
//! use jsonsum::{jsonsum, Algorithm, Checksummer};
//!
//! let a = jsonsum(r#"{"hi":1,"ho":2}"#).unwrap();
//! let b = jsonsum(r#"{"ho":2.0,"hi":1}"#).unwrap();
//! assert_eq!(a, b);
//!
//! let crc = Checksummer::with_algorithm(Algorithm::Crc32);
//! let sum = crc.checksum("[1,2,3]").unwrap();
//! println!("{:08x}", sum.as_u32().unwrap());
//! ```
//!
//! ## Re-exports
//!
//! `jsonsum::core` is the engine crate, for custom hash primitives or token
//! sources.

pub mod checksum;
pub mod config;
pub mod error;

pub use jsonsum_core as core;

pub use checksum::{jsonsum, Checksummer};
pub use config::{Algorithm, ChecksumConfig};
pub use error::{JsonsumError, Result};

pub use jsonsum_core::{Digest, Hasher, HasherFactory};
