//! # Error Types
//!
//! `InvalidState` is the only error the hashing path itself can produce:
//! every byte sequence, including the empty one, is a valid message. The
//! remaining variants come from parsing digests and algorithm names, and
//! from reading a `std::io::Read` source.

use thiserror::Error;

use crate::algorithm::DigestAlgorithm;

/// Error type for digest operations.
#[derive(Error, Debug)]
pub enum DigestError {
    /// An operation was attempted on a context that no longer accepts it.
    #[error("invalid state: cannot {operation} a digest context in state {state}")]
    InvalidState {
        /// Current context state name.
        state: String,
        /// The rejected operation (`update` or `finalize`).
        operation: &'static str,
    },

    /// Algorithm name not recognised.
    #[error("unknown digest algorithm: {0}")]
    UnknownAlgorithm(String),

    /// Hex text could not be decoded.
    #[error("invalid hex digest: {0}")]
    InvalidHex(String),

    /// Decoded digest has the wrong length for its algorithm.
    #[error("{algorithm} digest must be {expected} bytes, got {actual}")]
    LengthMismatch {
        /// Algorithm the digest was parsed for.
        algorithm: DigestAlgorithm,
        /// Required length in bytes.
        expected: usize,
        /// Decoded length in bytes.
        actual: usize,
    },

    /// Reading the input source failed.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl DigestError {
    /// Whether this error is the terminal-state rejection.
    pub fn is_invalid_state(&self) -> bool {
        matches!(self, Self::InvalidState { .. })
    }
}
