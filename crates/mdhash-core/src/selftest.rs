//! # Known-Answer Self Test
//!
//! Conformance vectors the engine must reproduce byte for byte, runnable at
//! startup or from the command line. Each vector is checked through both the
//! single-shot path and the incremental path (fed in uneven chunks so the
//! pending buffer is exercised).

use serde::Serialize;

use crate::algorithm::DigestAlgorithm;
use crate::context::DigestContext;
use crate::digest::Digest;
use crate::error::DigestError;
use crate::oneshot::hash;

/// Chunk size for the incremental half of the self test. Deliberately not a
/// divisor of the block size.
const SELF_TEST_CHUNK: usize = 37;

/// The message of a known-answer vector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TestMessage {
    /// A literal byte string.
    Literal(&'static [u8]),
    /// `n` zero bytes.
    Zeros(usize),
}

impl TestMessage {
    /// Materialize the message bytes.
    pub fn to_bytes(&self) -> Vec<u8> {
        match self {
            Self::Literal(bytes) => bytes.to_vec(),
            Self::Zeros(n) => vec![0u8; *n],
        }
    }
}

/// A message with its expected digest.
#[derive(Debug, Clone, Copy)]
pub struct KnownAnswer {
    /// Short human-readable label.
    pub name: &'static str,
    /// Algorithm under test.
    pub algorithm: DigestAlgorithm,
    /// Input message.
    pub message: TestMessage,
    /// Expected digest, lowercase hex.
    pub expected_hex: &'static str,
}

/// The conformance vectors.
pub const KNOWN_ANSWERS: &[KnownAnswer] = &[
    KnownAnswer {
        name: "sha1(\"Hello\")",
        algorithm: DigestAlgorithm::Sha1,
        message: TestMessage::Literal(b"Hello"),
        expected_hex: "f7ff9e8b7bb2e09b70935a5d785e0cc5d9d0abf0",
    },
    KnownAnswer {
        name: "sha1(0x00 * 300)",
        algorithm: DigestAlgorithm::Sha1,
        message: TestMessage::Zeros(300),
        expected_hex: "b23b62bbd22a602b113038a07217c6abcb156f06",
    },
    KnownAnswer {
        name: "sha256(0x00 * 700)",
        algorithm: DigestAlgorithm::Sha256,
        message: TestMessage::Zeros(700),
        expected_hex: "182a1c0c5b24b5c7864676c8b9776fad26041adf276fb3cda84b1770e6282a72",
    },
];

/// Result of running one known-answer vector.
#[derive(Debug, Clone, Serialize)]
pub struct SelfTestOutcome {
    /// Vector label.
    pub name: &'static str,
    /// Algorithm under test.
    pub algorithm: DigestAlgorithm,
    /// Expected digest.
    pub expected: String,
    /// Digest from the single-shot path.
    pub oneshot: String,
    /// Digest from the incremental path.
    pub incremental: String,
}

impl SelfTestOutcome {
    /// Whether both paths produced the expected digest.
    pub fn passed(&self) -> bool {
        self.oneshot == self.expected && self.incremental == self.expected
    }
}

impl KnownAnswer {
    /// Run this vector through both paths.
    pub fn run(&self) -> Result<SelfTestOutcome, DigestError> {
        let message = self.message.to_bytes();
        let expected = Digest::from_hex(self.algorithm, self.expected_hex)?;

        let oneshot = hash(self.algorithm, &message);

        let mut ctx = DigestContext::new(self.algorithm);
        for chunk in message.chunks(SELF_TEST_CHUNK) {
            ctx.update(chunk)?;
        }
        let incremental = ctx.finalize()?;

        Ok(SelfTestOutcome {
            name: self.name,
            algorithm: self.algorithm,
            expected: expected.to_hex(),
            oneshot: oneshot.to_hex(),
            incremental: incremental.to_hex(),
        })
    }
}

/// Run every known-answer vector.
pub fn run_self_test() -> Result<Vec<SelfTestOutcome>, DigestError> {
    let outcomes = KNOWN_ANSWERS
        .iter()
        .map(KnownAnswer::run)
        .collect::<Result<Vec<_>, _>>()?;

    for outcome in outcomes.iter().filter(|o| !o.passed()) {
        tracing::warn!(
            vector = outcome.name,
            expected = %outcome.expected,
            oneshot = %outcome.oneshot,
            incremental = %outcome.incremental,
            "known-answer vector failed"
        );
    }
    Ok(outcomes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_vectors_pass() {
        let outcomes = run_self_test().unwrap();
        assert_eq!(outcomes.len(), KNOWN_ANSWERS.len());
        for outcome in &outcomes {
            assert!(outcome.passed(), "vector failed: {outcome:?}");
        }
    }

    #[test]
    fn test_outcome_detects_mismatch() {
        let outcome = SelfTestOutcome {
            name: "x",
            algorithm: DigestAlgorithm::Sha1,
            expected: "aa".into(),
            oneshot: "aa".into(),
            incremental: "bb".into(),
        };
        assert!(!outcome.passed());
    }

    #[test]
    fn test_message_materialization() {
        assert_eq!(TestMessage::Zeros(3).to_bytes(), vec![0, 0, 0]);
        assert_eq!(TestMessage::Literal(b"ab").to_bytes(), b"ab".to_vec());
    }
}
