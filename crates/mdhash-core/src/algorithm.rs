//! # Digest Algorithm Tag
//!
//! Selects the hash-state width, initial constants, and compression function
//! for a context. Padding is identical across variants and is not selected
//! here.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::DigestError;

/// The hash algorithm a context or digest is bound to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DigestAlgorithm {
    /// SHA-1 — 5-word state, 80 rounds, 20-byte digest.
    Sha1,
    /// SHA-256 — 8-word state, 64 rounds, 32-byte digest.
    Sha256,
}

impl DigestAlgorithm {
    /// All supported algorithms, in declaration order.
    pub const ALL: [DigestAlgorithm; 2] = [Self::Sha1, Self::Sha256];

    /// Returns the algorithm identifier string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Sha1 => "sha1",
            Self::Sha256 => "sha256",
        }
    }

    /// Number of 32-bit words in the hash state.
    pub fn state_words(&self) -> usize {
        match self {
            Self::Sha1 => 5,
            Self::Sha256 => 8,
        }
    }

    /// Digest length in bytes.
    pub fn digest_len(&self) -> usize {
        self.state_words() * 4
    }
}

impl std::fmt::Display for DigestAlgorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DigestAlgorithm {
    type Err = DigestError;

    /// Accepts `sha1`/`sha256`, case-insensitive, with or without a dash.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace('-', "");
        match normalized.as_str() {
            "sha1" => Ok(Self::Sha1),
            "sha256" => Ok(Self::Sha256),
            _ => Err(DigestError::UnknownAlgorithm(s.to_string())),
        }
    }
}
