//! The checksum value produced by a hash primitive.

use std::fmt;

use crate::error::{Error, Result};

/// A fixed-length digest.
///
/// The length is whatever the producing primitive emits (32 bytes for
/// SHA-256 and Blake3, 4 bytes for CRC-32) and never changes afterwards.
/// Two digests are equal iff their bytes are equal.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Digest(Box<[u8]>);

impl Digest {
    /// Create from raw bytes.
    pub fn from_bytes(bytes: impl Into<Box<[u8]>>) -> Self {
        Self(bytes.into())
    }

    /// Get the raw bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Number of bytes in the digest.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Convert to lowercase hex string.
    pub fn to_hex(&self) -> String {
        hex::encode(&self.0)
    }

    /// Parse from hex string.
    pub fn from_hex(s: &str) -> std::result::Result<Self, hex::FromHexError> {
        hex::decode(s).map(Digest::from)
    }

    /// Interpret a 4-byte digest as a big-endian `u32`.
    ///
    /// Fails with [`Error::NotUint32`] for any other length.
    pub fn as_u32(&self) -> Result<u32> {
        let arr = <[u8; 4]>::try_from(&self.0[..]).map_err(|_| Error::NotUint32(self.0.len()))?;
        Ok(u32::from_be_bytes(arr))
    }
}

impl fmt::Debug for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let hex = self.to_hex();
        if hex.len() > 16 {
            write!(f, "Digest({}...)", &hex[..16])
        } else {
            write!(f, "Digest({})", hex)
        }
    }
}

impl fmt::Display for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl AsRef<[u8]> for Digest {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl From<Vec<u8>> for Digest {
    fn from(bytes: Vec<u8>) -> Self {
        Self(bytes.into_boxed_slice())
    }
}

impl<const N: usize> From<[u8; N]> for Digest {
    fn from(bytes: [u8; N]) -> Self {
        Self(Box::new(bytes))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_is_lowercase_and_double_length() {
        let digest = Digest::from([0xab, 0xcd, 0x01]);
        assert_eq!(digest.to_hex(), "abcd01");
        assert_eq!(digest.to_hex().len(), 2 * digest.len());
    }

    #[test]
    fn test_hex_roundtrip() {
        let digest = Digest::from([0x42u8; 32]);
        let recovered = Digest::from_hex(&digest.to_hex()).unwrap();
        assert_eq!(digest, recovered);
    }

    #[test]
    fn test_equality_is_bytewise() {
        assert_eq!(Digest::from(vec![1, 2, 3]), Digest::from([1u8, 2, 3]));
        assert_ne!(Digest::from([1u8, 2, 3]), Digest::from([1u8, 2, 4]));
        assert_ne!(Digest::from([1u8, 2, 3]), Digest::from([1u8, 2, 3, 0]));
    }

    #[test]
    fn test_as_u32_big_endian() {
        let digest = Digest::from([0xff, 0xff, 0xff, 0xff]);
        assert_eq!(digest.as_u32().unwrap(), u32::MAX);

        let digest = Digest::from([0x00, 0x00, 0x01, 0x02]);
        assert_eq!(digest.as_u32().unwrap(), 0x0102);
    }

    #[test]
    fn test_as_u32_rejects_other_lengths() {
        let digest = Digest::from([0u8; 32]);
        assert_eq!(digest.as_u32(), Err(Error::NotUint32(32)));
    }

    #[test]
    fn test_debug_is_truncated() {
        let digest = Digest::from([0xcd; 32]);
        let debug = format!("{:?}", digest);
        assert_eq!(debug, "Digest(cdcdcdcdcdcdcdcd...)");
        assert_eq!(format!("{}", digest).len(), 64);
    }
}
