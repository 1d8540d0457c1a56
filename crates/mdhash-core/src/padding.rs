//! # Merkle–Damgård Padding
//!
//! Turns the final partial block (length `L < 64`) into one or two padded
//! blocks. The rules depend only on the block size and the 8-byte length
//! field, so SHA-1 and SHA-256 share them:
//!
//! ```text
//! L < 56:   [ tail | 0x80 | 0x00 ... | bit-length (8 bytes, BE) ]
//!
//! L >= 56:  [ tail | 0x80 | 0x00 ... ]
//!           [ 0x00 ...               | bit-length (8 bytes, BE) ]
//! ```
//!
//! The bit-length is the total message length in bytes times eight, taken
//! modulo 2^64.

use crate::block::{Block, Tail, BLOCK_LEN, LENGTH_FIELD_OFFSET};
use crate::compress::HashEngine;

/// Padding marker appended directly after the message.
pub const MARKER: u8 = 0x80;

/// The one or two blocks that close a message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaddedTail {
    blocks: [Block; 2],
    count: usize,
}

impl PaddedTail {
    /// Build the closing blocks for a final partial block `tail` of a
    /// message that is `byte_count` bytes long in total.
    pub fn new(tail: Tail<'_>, byte_count: u64) -> Self {
        let len = tail.len();

        let mut first = [0u8; BLOCK_LEN];
        first[..len].copy_from_slice(tail.as_slice());
        first[len] = MARKER;

        let bit_len = byte_count.wrapping_mul(8).to_be_bytes();

        if len >= LENGTH_FIELD_OFFSET {
            let mut second = [0u8; BLOCK_LEN];
            second[LENGTH_FIELD_OFFSET..].copy_from_slice(&bit_len);
            Self {
                blocks: [first, second],
                count: 2,
            }
        } else {
            first[LENGTH_FIELD_OFFSET..].copy_from_slice(&bit_len);
            Self {
                blocks: [first, [0u8; BLOCK_LEN]],
                count: 1,
            }
        }
    }

    /// The padded blocks, in compression order.
    pub fn blocks(&self) -> &[Block] {
        &self.blocks[..self.count]
    }

    /// Number of blocks (1 or 2).
    pub fn len(&self) -> usize {
        self.count
    }

    /// Always `false`; padding produces at least one block.
    pub fn is_empty(&self) -> bool {
        false
    }
}

/// Pad `tail`, compress the closing block(s) into `engine`, and return how
/// many were compressed.
pub fn finalize_engine(engine: &mut HashEngine, tail: Tail<'_>, byte_count: u64) -> usize {
    let padded = PaddedTail::new(tail, byte_count);
    for block in padded.blocks() {
        engine.compress(block);
    }
    padded.len()
}
