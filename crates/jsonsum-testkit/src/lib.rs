//! # jsonsum testkit
//!
//! Testing utilities for the jsonsum checksum.
//!
//! ## Overview
//!
//! - **Golden vectors**: fixed documents with their expected SHA-256 and
//!   CRC-32 checksums, plus equivalence and rejection cases
//! - **Generators**: proptest strategies producing documents that can be
//!   rendered in many equivalent spellings
//! - **Fixtures**: hasher wrappers that count instances or enforce the
//!   one-shot primitive contract
//!
//! ## Golden Vectors
//!
//! ```rust
//! use jsonsum_core::{digest, Sha256Hasher};
//! use jsonsum_testkit::vectors::all_vectors;
//!
//! for vector in all_vectors() {
//!     let sum = digest(vector.json, Sha256Hasher::new).unwrap();
//!     assert_eq!(sum.to_hex(), vector.sha256);
//! }
//! ```
//!
//! ## Property Testing
//!
//! ```rust,ignore
//! use proptest::prelude::*;
//! use jsonsum_core::Sha256Hasher;
//! use jsonsum_testkit::generators::{doc, style};
//!
//! proptest! {
//!     #[test]
//!     fn spelling_does_not_matter(doc in doc(), style in style()) {
//!         let a = jsonsum_core::digest(&doc.to_json(), Sha256Hasher::new).unwrap();
//!         let b = jsonsum_core::digest(&doc.render(&style), Sha256Hasher::new).unwrap();
//!         prop_assert_eq!(a, b);
//!     }
//! }
//! ```

pub mod fixtures;
pub mod generators;
pub mod vectors;

pub use fixtures::{strict_crc32, CountingFactory, MismatchedFactory, StrictHasher};
pub use generators::{doc, style, Doc, KeyOrder, NumberSpelling, Style};
pub use vectors::{all_vectors, equivalence_cases, rejection_cases, GoldenVector, Rejection};
