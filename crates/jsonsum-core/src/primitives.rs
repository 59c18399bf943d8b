//! Concrete hash primitives: SHA-256, Blake3 and CRC-32.
//!
//! The two cryptographic primitives enforce one-shot finalize semantics: once
//! read out they refuse further use until reset. CRC-32 is a running
//! checksum and its finalize is idempotent.

use sha2::{Digest as _, Sha256};

use crate::digest::Digest;
use crate::error::{Error, Result};
use crate::hasher::Hasher;

const READ_OUT: &str = "hasher was read out and must be reset";

/// SHA-256, 32-byte output.
#[derive(Clone, Default)]
pub struct Sha256Hasher {
    inner: Sha256,
    finalized: bool,
}

impl Sha256Hasher {
    pub const OUTPUT_SIZE: usize = 32;

    pub fn new() -> Self {
        Self::default()
    }
}

impl Hasher for Sha256Hasher {
    fn reset(&mut self) {
        self.inner.reset();
        self.finalized = false;
    }

    fn update(&mut self, data: &[u8]) -> Result<()> {
        if self.finalized {
            return Err(Error::InvalidPrimitiveState(READ_OUT));
        }
        self.inner.update(data);
        Ok(())
    }

    fn finalize(&mut self) -> Result<Digest> {
        if self.finalized {
            return Err(Error::InvalidPrimitiveState(READ_OUT));
        }
        self.finalized = true;
        Ok(Digest::from(self.inner.finalize_reset().to_vec()))
    }

    fn output_size(&self) -> usize {
        Self::OUTPUT_SIZE
    }
}

/// Blake3, 32-byte output.
#[derive(Clone, Default)]
pub struct Blake3Hasher {
    inner: blake3::Hasher,
    finalized: bool,
}

impl Blake3Hasher {
    pub const OUTPUT_SIZE: usize = blake3::OUT_LEN;

    pub fn new() -> Self {
        Self::default()
    }
}

impl Hasher for Blake3Hasher {
    fn reset(&mut self) {
        self.inner.reset();
        self.finalized = false;
    }

    fn update(&mut self, data: &[u8]) -> Result<()> {
        if self.finalized {
            return Err(Error::InvalidPrimitiveState(READ_OUT));
        }
        self.inner.update(data);
        Ok(())
    }

    fn finalize(&mut self) -> Result<Digest> {
        if self.finalized {
            return Err(Error::InvalidPrimitiveState(READ_OUT));
        }
        self.finalized = true;
        Ok(Digest::from(*self.inner.finalize().as_bytes()))
    }

    fn output_size(&self) -> usize {
        Self::OUTPUT_SIZE
    }
}

/// IEEE CRC-32, 4-byte big-endian output.
///
/// `finalize` is idempotent: it reports the running checksum without
/// consuming it, and `update` keeps extending the same checksum afterwards.
/// Intended for quick fixture checks, not for integrity against an
/// adversary.
#[derive(Clone, Default)]
pub struct Crc32Hasher {
    inner: crc32fast::Hasher,
}

impl Crc32Hasher {
    pub const OUTPUT_SIZE: usize = 4;

    pub fn new() -> Self {
        Self::default()
    }
}

impl Hasher for Crc32Hasher {
    fn reset(&mut self) {
        self.inner.reset();
    }

    fn update(&mut self, data: &[u8]) -> Result<()> {
        self.inner.update(data);
        Ok(())
    }

    fn finalize(&mut self) -> Result<Digest> {
        let crc = self.inner.clone().finalize();
        Ok(Digest::from(crc.to_be_bytes()))
    }

    fn output_size(&self) -> usize {
        Self::OUTPUT_SIZE
    }
}
