//! # Compression Functions
//!
//! Each variant transforms one 64-byte [`Block`] and mutates its hash state
//! in place. The variant is chosen once, when a [`HashEngine`] is created for
//! a [`DigestAlgorithm`], and never changes afterwards.
//!
//! | Variant | State words | Schedule | Rounds |
//! |---------|-------------|----------|--------|
//! | SHA-1   | 5           | 80 words | 80     |
//! | SHA-256 | 8           | 64 words | 64     |

pub mod sha1;
pub mod sha256;

use crate::algorithm::DigestAlgorithm;
use crate::block::{for_each_block, Block, Tail};
use crate::digest::Digest;
use crate::state::HashState;

/// A compression function bound to its hash state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HashEngine {
    /// SHA-1 compression over a 5-word state.
    Sha1(HashState<{ sha1::STATE_WORDS }>),
    /// SHA-256 compression over an 8-word state.
    Sha256(HashState<{ sha256::STATE_WORDS }>),
}

impl HashEngine {
    /// Create an engine holding the algorithm's initial hash value.
    pub fn new(algorithm: DigestAlgorithm) -> Self {
        match algorithm {
            DigestAlgorithm::Sha1 => Self::Sha1(HashState::from_native(sha1::INITIAL_STATE)),
            DigestAlgorithm::Sha256 => {
                Self::Sha256(HashState::from_native(sha256::INITIAL_STATE))
            }
        }
    }

    /// The algorithm this engine computes.
    pub fn algorithm(&self) -> DigestAlgorithm {
        match self {
            Self::Sha1(_) => DigestAlgorithm::Sha1,
            Self::Sha256(_) => DigestAlgorithm::Sha256,
        }
    }

    /// Compress one block into the state.
    pub fn compress(&mut self, block: &Block) {
        match self {
            Self::Sha1(state) => sha1::compress(state, block),
            Self::Sha256(state) => sha256::compress(state, block),
        }
    }

    /// Compress every complete block at the front of `data` and return the
    /// trailing bytes that do not fill a block.
    pub fn compress_blocks<'a>(&mut self, data: &'a [u8]) -> Tail<'a> {
        for_each_block(data, |block| self.compress(block))
    }

    /// Read the current state out as a digest.
    pub fn digest(&self) -> Digest {
        let mut digest = Digest::zeroed(self.algorithm());
        match self {
            Self::Sha1(state) => state.write_bytes(digest.as_mut_bytes()),
            Self::Sha256(state) => state.write_bytes(digest.as_mut_bytes()),
        };
        digest
    }
}
