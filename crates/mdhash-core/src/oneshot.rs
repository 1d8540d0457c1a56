//! # Single-Shot Hashing
//!
//! Hashes a complete message in one call. This path keeps no pending buffer:
//! it walks the input block by block and pads the final partial block in
//! place, applying the same one-block/two-block rule as
//! [`DigestContext::finalize`](crate::DigestContext::finalize). The two paths
//! agree on every input.

use crate::algorithm::DigestAlgorithm;
use crate::block::{Block, BLOCK_LEN, LENGTH_FIELD_OFFSET};
use crate::compress::HashEngine;
use crate::digest::Digest;
use crate::padding::MARKER;

/// Compute the digest of `data` under `algorithm`.
pub fn hash(algorithm: DigestAlgorithm, data: &[u8]) -> Digest {
    let mut engine = HashEngine::new(algorithm);
    let bit_len = (data.len() as u64).wrapping_mul(8);

    let tail = engine.compress_blocks(data);

    let mut padded: Block = [0u8; BLOCK_LEN];
    padded[..tail.len()].copy_from_slice(tail.as_slice());
    padded[tail.len()] = MARKER;

    // No room for the length field after the marker: flush and start a
    // fresh all-zero block for it.
    if tail.len() >= LENGTH_FIELD_OFFSET {
        engine.compress(&padded);
        padded = [0u8; BLOCK_LEN];
    }

    padded[LENGTH_FIELD_OFFSET..].copy_from_slice(&bit_len.to_be_bytes());
    engine.compress(&padded);

    engine.digest()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hello_sha1() {
        assert_eq!(
            hash(DigestAlgorithm::Sha1, b"Hello").to_hex(),
            "f7ff9e8b7bb2e09b70935a5d785e0cc5d9d0abf0"
        );
    }

    #[test]
    fn test_abc_sha256() {
        assert_eq!(
            hash(DigestAlgorithm::Sha256, b"abc").to_hex(),
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
    }

    #[test]
    fn test_empty_sha1() {
        assert_eq!(
            hash(DigestAlgorithm::Sha1, b"").to_hex(),
            "da39a3ee5e6b4b0d3255bfef95601890afd80709"
        );
    }

    #[test]
    fn test_two_block_message_sha256() {
        // FIPS 180-2 example: 56-byte message needs a second padding block.
        let msg = b"abcdbcdecdefdefgefghfghighijhijkijkljklmklmnlmnomnopnopq";
        assert_eq!(msg.len(), 56);
        assert_eq!(
            hash(DigestAlgorithm::Sha256, msg).to_hex(),
            "248d6a61d20638b8e5c026930c3e6039a33ce45964ff2167f6ecedd419db06c1"
        );
        assert_eq!(
            hash(DigestAlgorithm::Sha1, msg).to_hex(),
            "84983e441c3bd26ebaae4aa1f95129e5e54670f1"
        );
    }

    #[test]
    fn test_deterministic() {
        let data = [0x5au8; 333];
        for alg in DigestAlgorithm::ALL {
            assert_eq!(hash(alg, &data), hash(alg, &data));
        }
    }
}
