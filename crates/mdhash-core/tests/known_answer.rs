//! # Known-Answer and Boundary Tests
//!
//! The conformance vectors must match byte for byte on both the single-shot
//! and the incremental path. Messages around the 56- and 64-byte padding
//! thresholds are cross-checked against the RustCrypto `sha1` and `sha2`
//! crates, which serve here only as independent reference implementations.

use mdhash_core::{hash, DigestAlgorithm, DigestContext, KNOWN_ANSWERS};
use sha1::Digest as _;

/// Lengths where the padding logic branches differently.
const BOUNDARY_LENGTHS: &[usize] = &[
    0, 1, 55, 56, 57, 63, 64, 65, 119, 120, 121, 127, 128, 129, 1000,
];

fn reference_digest(algorithm: DigestAlgorithm, data: &[u8]) -> Vec<u8> {
    match algorithm {
        DigestAlgorithm::Sha1 => sha1::Sha1::digest(data).to_vec(),
        DigestAlgorithm::Sha256 => sha2::Sha256::digest(data).to_vec(),
    }
}

fn incremental(algorithm: DigestAlgorithm, data: &[u8], chunk: usize) -> Vec<u8> {
    let mut ctx = DigestContext::new(algorithm);
    for piece in data.chunks(chunk.max(1)) {
        ctx.update(piece).unwrap();
    }
    ctx.finalize().unwrap().as_bytes().to_vec()
}

/// Deterministic non-trivial message content.
fn message(len: usize) -> Vec<u8> {
    (0..len).map(|i| (i * 31 + 7) as u8).collect()
}

// ---------------------------------------------------------------------------
// Conformance vectors
// ---------------------------------------------------------------------------

#[test]
fn test_sha1_hello() {
    let d = hash(DigestAlgorithm::Sha1, b"Hello");
    assert_eq!(d.to_hex(), "f7ff9e8b7bb2e09b70935a5d785e0cc5d9d0abf0");

    let mut ctx = DigestContext::new(DigestAlgorithm::Sha1);
    ctx.update(b"Hello").unwrap();
    assert_eq!(ctx.finalize().unwrap(), d);
}

#[test]
fn test_sha1_300_zeros() {
    let data = vec![0u8; 300];
    let expected = "b23b62bbd22a602b113038a07217c6abcb156f06";
    assert_eq!(hash(DigestAlgorithm::Sha1, &data).to_hex(), expected);

    let mut ctx = DigestContext::new(DigestAlgorithm::Sha1);
    ctx.update(&data).unwrap();
    assert_eq!(ctx.finalize().unwrap().to_hex(), expected);
}

#[test]
fn test_sha256_700_zeros() {
    let data = vec![0u8; 700];
    let expected = "182a1c0c5b24b5c7864676c8b9776fad26041adf276fb3cda84b1770e6282a72";
    assert_eq!(hash(DigestAlgorithm::Sha256, &data).to_hex(), expected);

    let mut ctx = DigestContext::new(DigestAlgorithm::Sha256);
    ctx.update(&data).unwrap();
    assert_eq!(ctx.finalize().unwrap().to_hex(), expected);
}

#[test]
fn test_known_answers_table_matches_reference() {
    for vector in KNOWN_ANSWERS {
        let msg = vector.message.to_bytes();
        let reference = reference_digest(vector.algorithm, &msg);
        let hex: String = reference.iter().map(|b| format!("{b:02x}")).collect();
        assert_eq!(hex, vector.expected_hex, "vector {}", vector.name);
    }
}

// ---------------------------------------------------------------------------
// Padding boundaries
// ---------------------------------------------------------------------------

#[test]
fn test_boundary_lengths_oneshot() {
    for alg in DigestAlgorithm::ALL {
        for &len in BOUNDARY_LENGTHS {
            let data = message(len);
            assert_eq!(
                hash(alg, &data).as_bytes(),
                reference_digest(alg, &data).as_slice(),
                "{alg} oneshot, len {len}"
            );
        }
    }
}

#[test]
fn test_boundary_lengths_incremental() {
    for alg in DigestAlgorithm::ALL {
        for &len in BOUNDARY_LENGTHS {
            let data = message(len);
            let reference = reference_digest(alg, &data);
            for chunk in [1, 7, 55, 56, 63, 64, 65, 200] {
                assert_eq!(
                    incremental(alg, &data, chunk),
                    reference,
                    "{alg} incremental, len {len}, chunk {chunk}"
                );
            }
        }
    }
}

#[test]
fn test_boundary_lengths_zero_bytes() {
    for alg in DigestAlgorithm::ALL {
        for &len in BOUNDARY_LENGTHS {
            let data = vec![0u8; len];
            assert_eq!(
                hash(alg, &data).as_bytes(),
                reference_digest(alg, &data).as_slice(),
                "{alg} zeros, len {len}"
            );
        }
    }
}

// ---------------------------------------------------------------------------
// Output shape
// ---------------------------------------------------------------------------

#[test]
fn test_fixed_output_length() {
    for len in 0..300 {
        let data = message(len);
        assert_eq!(hash(DigestAlgorithm::Sha1, &data).as_bytes().len(), 20);
        assert_eq!(hash(DigestAlgorithm::Sha256, &data).as_bytes().len(), 32);
    }
}

#[test]
fn test_digest_tagged_with_algorithm() {
    for alg in DigestAlgorithm::ALL {
        assert_eq!(hash(alg, b"x").algorithm(), alg);
    }
}
