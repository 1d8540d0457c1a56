//! # mdhash-core — Incremental Message Digest Engine
//!
//! A pluggable Merkle–Damgård hashing engine supporting SHA-1 and SHA-256
//! through one streaming framework. Both algorithms share the 64-byte block,
//! the 32-bit word, and the padding rules; they differ only in their
//! compression function and hash-state width.
//!
//! ## Usage Modes
//!
//! 1. **Incremental.** [`DigestContext`] accepts any number of
//!    [`update`](DigestContext::update) calls of arbitrary size, then exactly
//!    one [`finalize`](DigestContext::finalize). Calls after finalize are
//!    rejected with [`DigestError::InvalidState`].
//!
//! 2. **Single-shot.** [`hash()`] runs a whole message through the same
//!    padding and compression logic without a context. For every input it
//!    produces the same bytes as the incremental path.
//!
//! ## Layout
//!
//! - `endian` — native ↔ big/little-endian word conversions.
//! - `block` — the 64-byte block type and the pending partial-block buffer.
//! - `state` — fixed-width hash state held in external big-endian form.
//! - `compress` — SHA-1 and SHA-256 compression functions and the
//!   [`HashEngine`] that binds one of them to its state.
//! - `padding` — the 0x80 marker and 64-bit bit-length trailer.
//! - `context` / `oneshot` — the two drivers.
//! - `selftest` — known-answer vectors runnable at startup.
//!
//! ## Crate Policy
//!
//! - No heap allocation on the hashing path. All buffers are fixed-size.
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.

pub mod algorithm;
pub mod block;
pub mod compress;
pub mod context;
pub mod digest;
pub mod endian;
pub mod error;
pub mod oneshot;
pub mod padding;
pub mod selftest;
pub mod state;

// Re-export primary types for ergonomic imports.
pub use algorithm::DigestAlgorithm;
pub use block::{Block, PendingBuffer, Tail, BLOCK_LEN, LENGTH_FIELD_LEN};
pub use compress::HashEngine;
pub use context::{ContextState, DigestContext};
pub use digest::{Digest, MAX_DIGEST_LEN};
pub use error::DigestError;
pub use oneshot::hash;
pub use selftest::{run_self_test, KnownAnswer, SelfTestOutcome, TestMessage, KNOWN_ANSWERS};
pub use state::HashState;
