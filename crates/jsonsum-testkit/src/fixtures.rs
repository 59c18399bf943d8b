//! Hasher fixtures for exercising the engine's primitive contract.

use std::cell::Cell;
use std::rc::Rc;

use jsonsum_core::{Crc32Hasher, Digest, Error, Hasher, HasherFactory, Result, Sha256Hasher};

/// Wraps a factory and counts the instances it hands out.
///
/// Clones share the counter, so keep one clone to read the count after
/// giving the other to the engine.
#[derive(Clone)]
pub struct CountingFactory<F> {
    inner: F,
    created: Rc<Cell<usize>>,
}

impl<F> CountingFactory<F> {
    pub fn new(inner: F) -> Self {
        Self {
            inner,
            created: Rc::new(Cell::new(0)),
        }
    }

    /// Instances created so far.
    pub fn created(&self) -> usize {
        self.created.get()
    }
}

impl<F: HasherFactory> HasherFactory for CountingFactory<F> {
    type Output = F::Output;

    fn create(&self) -> F::Output {
        self.created.set(self.created.get() + 1);
        self.inner.create()
    }
}

/// Enforces one-shot finalize semantics on top of any primitive.
///
/// Wrapping [`Crc32Hasher`], whose finalize is idempotent, turns any reuse
/// of a read-out instance into [`Error::InvalidPrimitiveState`].
#[derive(Clone, Default)]
pub struct StrictHasher<H> {
    inner: H,
    finalized: bool,
}

impl<H: Hasher> StrictHasher<H> {
    pub fn new(inner: H) -> Self {
        Self {
            inner,
            finalized: false,
        }
    }
}

impl<H: Hasher> Hasher for StrictHasher<H> {
    fn reset(&mut self) {
        self.inner.reset();
        self.finalized = false;
    }

    fn update(&mut self, data: &[u8]) -> Result<()> {
        if self.finalized {
            return Err(Error::InvalidPrimitiveState("update after finalize"));
        }
        self.inner.update(data)
    }

    fn finalize(&mut self) -> Result<Digest> {
        if self.finalized {
            return Err(Error::InvalidPrimitiveState("finalize called twice"));
        }
        self.finalized = true;
        self.inner.finalize()
    }

    fn output_size(&self) -> usize {
        self.inner.output_size()
    }
}

/// A strict CRC-32, cheap enough for large property runs.
pub fn strict_crc32() -> StrictHasher<Crc32Hasher> {
    StrictHasher::new(Crc32Hasher::new())
}

/// A broken factory: SHA-256 for the first `n` instances, CRC-32 after.
///
/// The engine creates two instances up front. With `n = 1` construction
/// fails with [`Error::DigestLength`]; with `n = 2` the first object in a
/// document does.
pub struct MismatchedFactory {
    sha256_instances: usize,
    created: Cell<usize>,
}

impl MismatchedFactory {
    pub fn new(sha256_instances: usize) -> Self {
        Self {
            sha256_instances,
            created: Cell::new(0),
        }
    }
}

impl HasherFactory for MismatchedFactory {
    type Output = Box<dyn Hasher>;

    fn create(&self) -> Box<dyn Hasher> {
        let n = self.created.get();
        self.created.set(n + 1);
        if n < self.sha256_instances {
            Box::new(Sha256Hasher::new())
        } else {
            Box::new(Crc32Hasher::new())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jsonsum_core::digest;

    #[test]
    fn test_counting_factory_shares_counter() {
        let counting = CountingFactory::new(Sha256Hasher::new);
        let handle = counting.clone();
        counting.create();
        counting.create();
        assert_eq!(handle.created(), 2);
    }

    #[test]
    fn test_strict_hasher_rejects_reuse() {
        let mut h = strict_crc32();
        h.update(b"abc").unwrap();
        h.finalize().unwrap();
        assert!(matches!(h.update(b"x"), Err(Error::InvalidPrimitiveState(_))));
        assert!(matches!(h.finalize(), Err(Error::InvalidPrimitiveState(_))));
        h.reset();
        h.update(b"abc").unwrap();
        assert_eq!(h.finalize().unwrap().len(), 4);
    }

    #[test]
    fn test_strict_matches_plain() {
        let json = r#"{"a":[1,"x",{"b":null}],"c":true}"#;
        assert_eq!(
            digest(json, strict_crc32).unwrap(),
            digest(json, Crc32Hasher::new).unwrap()
        );
    }

    #[test]
    fn test_mismatched_factory_is_detected() {
        let err = digest(r#"[{"a":1}]"#, MismatchedFactory::new(2)).unwrap_err();
        assert_eq!(
            err,
            Error::DigestLength {
                expected: 32,
                actual: 4
            }
        );
        // no object, no third instance
        assert!(digest("[1,2]", MismatchedFactory::new(2)).is_ok());
    }

    #[test]
    fn test_mismatched_scratch_hasher_is_detected() {
        for json in [r#"["x"]"#, "1", "{}"] {
            assert_eq!(
                digest(json, MismatchedFactory::new(1)).unwrap_err(),
                Error::DigestLength {
                    expected: 32,
                    actual: 4
                }
            );
        }
    }
}
