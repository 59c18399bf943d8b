//! Checksum configuration.

use std::fmt;
use std::str::FromStr;

use jsonsum_core::{Blake3Hasher, Crc32Hasher, EngineConfig, Hasher, Sha256Hasher};
use serde::{Deserialize, Serialize};

use crate::error::{JsonsumError, Result};

/// The hash primitive a checksum is computed with.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Algorithm {
    /// SHA-256, 32 bytes.
    #[default]
    Sha256,
    /// Blake3, 32 bytes.
    Blake3,
    /// CRC-32, 4 bytes. Fast, not collision resistant.
    Crc32,
}

impl Algorithm {
    pub const ALL: [Algorithm; 3] = [Algorithm::Sha256, Algorithm::Blake3, Algorithm::Crc32];

    /// Canonical lowercase name.
    pub fn name(self) -> &'static str {
        match self {
            Algorithm::Sha256 => "sha256",
            Algorithm::Blake3 => "blake3",
            Algorithm::Crc32 => "crc32",
        }
    }

    /// Digest length in bytes.
    pub fn output_size(self) -> usize {
        match self {
            Algorithm::Sha256 => Sha256Hasher::OUTPUT_SIZE,
            Algorithm::Blake3 => Blake3Hasher::OUTPUT_SIZE,
            Algorithm::Crc32 => Crc32Hasher::OUTPUT_SIZE,
        }
    }

    /// A fresh hasher for this algorithm.
    pub fn hasher(self) -> Box<dyn Hasher> {
        match self {
            Algorithm::Sha256 => Box::new(Sha256Hasher::new()),
            Algorithm::Blake3 => Box::new(Blake3Hasher::new()),
            Algorithm::Crc32 => Box::new(Crc32Hasher::new()),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = JsonsumError;

    fn from_str(s: &str) -> Result<Self> {
        let lower = s.to_ascii_lowercase();
        match lower.replace('-', "").as_str() {
            "sha256" => Ok(Algorithm::Sha256),
            "blake3" => Ok(Algorithm::Blake3),
            "crc32" => Ok(Algorithm::Crc32),
            _ => Err(JsonsumError::UnknownAlgorithm(s.to_string())),
        }
    }
}

/// Configuration for a [`Checksummer`](crate::Checksummer).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChecksumConfig {
    /// Hash primitive to use.
    pub algorithm: Algorithm,
    /// Maximum container nesting. `None` means unlimited.
    pub max_depth: Option<usize>,
}

impl ChecksumConfig {
    /// Parse configuration from a JSON document, e.g.
    /// `{"algorithm":"blake3","max_depth":64}`. Missing fields take their
    /// defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn with_algorithm(mut self, algorithm: Algorithm) -> Self {
        self.algorithm = algorithm;
        self
    }

    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = Some(max_depth);
        self
    }

    pub(crate) fn engine_config(&self) -> EngineConfig {
        EngineConfig {
            max_depth: self.max_depth,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_sha256_unlimited() {
        let config = ChecksumConfig::default();
        assert_eq!(config.algorithm, Algorithm::Sha256);
        assert_eq!(config.max_depth, None);
    }

    #[test]
    fn test_algorithm_names_roundtrip() {
        for algorithm in Algorithm::ALL {
            assert_eq!(algorithm.name().parse::<Algorithm>().unwrap(), algorithm);
            assert_eq!(algorithm.to_string(), algorithm.name());
        }
        assert_eq!("SHA-256".parse::<Algorithm>().unwrap(), Algorithm::Sha256);
        assert!(matches!(
            "md5".parse::<Algorithm>(),
            Err(JsonsumError::UnknownAlgorithm(name)) if name == "md5"
        ));
    }

    #[test]
    fn test_output_size_matches_hasher() {
        for algorithm in Algorithm::ALL {
            assert_eq!(algorithm.hasher().output_size(), algorithm.output_size());
        }
    }

    #[test]
    fn test_from_json() {
        let config = ChecksumConfig::from_json(r#"{"algorithm":"crc32","max_depth":8}"#).unwrap();
        assert_eq!(config, ChecksumConfig::default().with_algorithm(Algorithm::Crc32).with_max_depth(8));

        let config = ChecksumConfig::from_json("{}").unwrap();
        assert_eq!(config, ChecksumConfig::default());

        assert!(matches!(
            ChecksumConfig::from_json(r#"{"algorithm":"md5"}"#),
            Err(JsonsumError::Config(_))
        ));
    }
}
