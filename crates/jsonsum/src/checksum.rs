//! The Checksummer: configured entry point for computing and verifying
//! structural checksums.

use std::io::Read;

use jsonsum_core::{digest_reader, digest_with_config, Digest, Sha256Hasher};

use crate::config::{Algorithm, ChecksumConfig};
use crate::error::Result;

/// Computes and verifies checksums with a fixed configuration.
///
/// Each call builds its own engine and hashers, so one `Checksummer` can be
/// shared freely between threads.
#[derive(Debug, Clone, Default)]
pub struct Checksummer {
    config: ChecksumConfig,
}

impl Checksummer {
    pub fn new(config: ChecksumConfig) -> Self {
        Self { config }
    }

    /// Shorthand for the default configuration with another algorithm.
    pub fn with_algorithm(algorithm: Algorithm) -> Self {
        Self::new(ChecksumConfig::default().with_algorithm(algorithm))
    }

    pub fn config(&self) -> &ChecksumConfig {
        &self.config
    }

    pub fn algorithm(&self) -> Algorithm {
        self.config.algorithm
    }

    /// Checksum JSON text.
    pub fn checksum(&self, json: &str) -> Result<Digest> {
        let algorithm = self.config.algorithm;
        let digest = digest_with_config(json, || algorithm.hasher(), self.config.engine_config())?;
        tracing::debug!(
            algorithm = %algorithm,
            input_len = json.len(),
            checksum = %digest,
            "computed checksum"
        );
        Ok(digest)
    }

    /// Checksum a JSON document streamed from `reader`.
    ///
    /// The document is hashed as it is parsed and never held in memory as a
    /// whole. Read failures surface as [`jsonsum_core::Error::Read`].
    pub fn checksum_reader<R: Read>(&self, reader: R) -> Result<Digest> {
        let algorithm = self.config.algorithm;
        let digest = digest_reader(reader, || algorithm.hasher(), self.config.engine_config())?;
        tracing::debug!(algorithm = %algorithm, checksum = %digest, "computed checksum from reader");
        Ok(digest)
    }

    /// Check that `json` has the `expected` checksum.
    pub fn verify(&self, json: &str, expected: &Digest) -> Result<bool> {
        let actual = self.checksum(json)?;
        if &actual != expected {
            tracing::warn!(
                algorithm = %self.config.algorithm,
                expected = %expected,
                actual = %actual,
                "checksum mismatch"
            );
            return Ok(false);
        }
        Ok(true)
    }

    /// Check that `json` has the checksum given as hex.
    pub fn verify_hex(&self, json: &str, expected_hex: &str) -> Result<bool> {
        let expected = Digest::from_hex(expected_hex.trim())?;
        self.verify(json, &expected)
    }
}

/// Checksum JSON text with SHA-256 and default settings.
pub fn jsonsum(json: &str) -> Result<Digest> {
    Ok(jsonsum_core::digest(json, Sha256Hasher::new)?)
}
