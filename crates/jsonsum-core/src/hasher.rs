//! The hash primitive capability the engine is written against.
//!
//! The engine never names a concrete hash function. It asks a
//! [`HasherFactory`] for fresh [`Hasher`] instances and relies only on the
//! operations below, so any primitive with a fixed output size can be
//! plugged in.

use crate::digest::Digest;
use crate::error::Result;

/// A resettable, incremental hash primitive.
///
/// # Contract
///
/// - `update` may be called any number of times before `finalize`.
/// - After `finalize`, further `update` or `finalize` calls fail with
///   [`Error::InvalidPrimitiveState`](crate::Error::InvalidPrimitiveState)
///   until `reset` is called. Implementations may instead make `finalize`
///   idempotent, provided they document it.
/// - `output_size` is constant for the lifetime of the instance and equals
///   the length of every digest it returns.
pub trait Hasher {
    /// Return to the freshly-constructed state.
    fn reset(&mut self);

    /// Absorb bytes.
    fn update(&mut self, data: &[u8]) -> Result<()>;

    /// Read out the digest of everything absorbed since the last reset.
    fn finalize(&mut self) -> Result<Digest>;

    /// Length in bytes of the digests this primitive produces.
    fn output_size(&self) -> usize;
}

impl<H: Hasher + ?Sized> Hasher for Box<H> {
    fn reset(&mut self) {
        (**self).reset()
    }

    fn update(&mut self, data: &[u8]) -> Result<()> {
        (**self).update(data)
    }

    fn finalize(&mut self) -> Result<Digest> {
        (**self).finalize()
    }

    fn output_size(&self) -> usize {
        (**self).output_size()
    }
}

/// Produces fresh, independent [`Hasher`] instances.
///
/// Every instance obtained from one factory must report the same
/// `output_size`, and instances must not share mutable state.
///
/// Any `Fn() -> H` closure is a factory:
///
/// ```
/// use jsonsum_core::{digest, Sha256Hasher};
///
/// let sum = digest(r#"{"a":[1,2]}"#, Sha256Hasher::new).unwrap();
/// assert_eq!(sum.len(), 32);
/// ```
pub trait HasherFactory {
    /// The primitive this factory produces.
    type Output: Hasher;

    /// Create a fresh instance.
    fn create(&self) -> Self::Output;
}

impl<F, H> HasherFactory for F
where
    F: Fn() -> H,
    H: Hasher,
{
    type Output = H;

    fn create(&self) -> H {
        self()
    }
}
