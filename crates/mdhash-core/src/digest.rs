//! # Digest Values
//!
//! A [`Digest`] is the fixed-length output of one hash computation: 20 bytes
//! for SHA-1, 32 for SHA-256, always in big-endian word order. It carries its
//! algorithm tag so a digest is self-describing, rendered as
//! `"sha256:<hex>"` by `Display` and as `{ "algorithm", "hex" }` by serde.

use serde::{Deserialize, Serialize};

use crate::algorithm::DigestAlgorithm;
use crate::error::DigestError;

/// Length of the longest supported digest (SHA-256).
pub const MAX_DIGEST_LEN: usize = 32;

/// A message digest with its algorithm tag.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "DigestRecord", try_from = "DigestRecord")]
pub struct Digest {
    algorithm: DigestAlgorithm,
    bytes: [u8; MAX_DIGEST_LEN],
}

impl Digest {
    /// An all-zero digest for `algorithm`, to be filled by the engine.
    pub(crate) fn zeroed(algorithm: DigestAlgorithm) -> Self {
        Self {
            algorithm,
            bytes: [0u8; MAX_DIGEST_LEN],
        }
    }

    /// Build a digest from raw bytes.
    ///
    /// Fails with [`DigestError::LengthMismatch`] unless `bytes` is exactly
    /// the algorithm's digest length.
    pub fn from_bytes(algorithm: DigestAlgorithm, bytes: &[u8]) -> Result<Self, DigestError> {
        let expected = algorithm.digest_len();
        if bytes.len() != expected {
            return Err(DigestError::LengthMismatch {
                algorithm,
                expected,
                actual: bytes.len(),
            });
        }
        let mut digest = Self::zeroed(algorithm);
        digest.bytes[..expected].copy_from_slice(bytes);
        Ok(digest)
    }

    /// Parse a lowercase or uppercase hex digest for `algorithm`.
    pub fn from_hex(algorithm: DigestAlgorithm, hex: &str) -> Result<Self, DigestError> {
        let hex = hex.trim();
        if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(DigestError::InvalidHex(hex.to_string()));
        }
        if hex.len() % 2 != 0 {
            return Err(DigestError::InvalidHex(format!(
                "odd number of hex digits ({})",
                hex.len()
            )));
        }
        let expected = algorithm.digest_len();
        if hex.len() / 2 != expected {
            return Err(DigestError::LengthMismatch {
                algorithm,
                expected,
                actual: hex.len() / 2,
            });
        }

        let mut digest = Self::zeroed(algorithm);
        for (out, i) in digest.bytes.iter_mut().zip((0..hex.len()).step_by(2)) {
            *out = u8::from_str_radix(&hex[i..i + 2], 16)
                .map_err(|_| DigestError::InvalidHex(hex.to_string()))?;
        }
        Ok(digest)
    }

    /// The algorithm that produced this digest.
    pub fn algorithm(&self) -> DigestAlgorithm {
        self.algorithm
    }

    /// The digest bytes, exactly `algorithm().digest_len()` long.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes[..self.algorithm.digest_len()]
    }

    pub(crate) fn as_mut_bytes(&mut self) -> &mut [u8] {
        let len = self.algorithm.digest_len();
        &mut self.bytes[..len]
    }

    /// Digest length in bytes.
    pub fn len(&self) -> usize {
        self.algorithm.digest_len()
    }

    /// Always `false`; digests are never empty. Present for API symmetry
    /// with `len`.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Render the digest as a lowercase hex string.
    pub fn to_hex(&self) -> String {
        self.as_bytes().iter().map(|b| format!("{b:02x}")).collect()
    }

    /// Compare against `expected` without short-circuiting on the first
    /// differing byte. Digests of different algorithms never match.
    pub fn matches(&self, expected: &Digest) -> bool {
        if self.algorithm != expected.algorithm {
            return false;
        }
        self.as_bytes()
            .iter()
            .zip(expected.as_bytes())
            .fold(0u8, |acc, (a, b)| acc | (a ^ b))
            == 0
    }
}

impl AsRef<[u8]> for Digest {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl std::fmt::Display for Digest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.algorithm, self.to_hex())
    }
}

impl std::fmt::Debug for Digest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Digest({self})")
    }
}

/// Serialized form of a [`Digest`].
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
struct DigestRecord {
    algorithm: DigestAlgorithm,
    hex: String,
}

impl From<Digest> for DigestRecord {
    fn from(digest: Digest) -> Self {
        Self {
            algorithm: digest.algorithm,
            hex: digest.to_hex(),
        }
    }
}

impl TryFrom<DigestRecord> for Digest {
    type Error = DigestError;

    fn try_from(record: DigestRecord) -> Result<Self, Self::Error> {
        Digest::from_hex(record.algorithm, &record.hex)
    }
}
