//! # Digest Context — Incremental Hashing
//!
//! Owns a [`HashEngine`], the pending partial block, and the running byte
//! count. Input arrives through any number of [`DigestContext::update`]
//! calls and is closed by exactly one [`DigestContext::finalize`].
//!
//! ## States
//!
//! ```text
//! Fresh ──update──▶ Accumulating ──update──▶ Accumulating
//!   │                    │
//!   └────finalize────────┴──────▶ Finalized (terminal)
//! ```
//!
//! `update` and `finalize` on a Finalized context fail with
//! [`DigestError::InvalidState`] and leave the stored digest untouched.

use std::io::Read;

use crate::algorithm::DigestAlgorithm;
use crate::block::PendingBuffer;
use crate::compress::HashEngine;
use crate::digest::Digest;
use crate::error::DigestError;
use crate::padding::finalize_engine;

/// Lifecycle state of a [`DigestContext`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContextState {
    /// Created, no bytes consumed yet.
    Fresh,
    /// At least one non-empty update has been consumed.
    Accumulating,
    /// Finalize has run; the digest is fixed (terminal).
    Finalized,
}

impl ContextState {
    /// Whether this state is terminal.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Finalized)
    }
}

impl std::fmt::Display for ContextState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Fresh => "FRESH",
            Self::Accumulating => "ACCUMULATING",
            Self::Finalized => "FINALIZED",
        };
        f.write_str(s)
    }
}

/// Streaming digest computation over one message.
#[derive(Debug, Clone)]
pub struct DigestContext {
    engine: HashEngine,
    pending: PendingBuffer,
    byte_count: u64,
    state: ContextState,
    digest: Option<Digest>,
}

impl DigestContext {
    /// Create a fresh context for `algorithm`.
    pub fn new(algorithm: DigestAlgorithm) -> Self {
        Self {
            engine: HashEngine::new(algorithm),
            pending: PendingBuffer::new(),
            byte_count: 0,
            state: ContextState::Fresh,
            digest: None,
        }
    }

    /// The algorithm this context computes.
    pub fn algorithm(&self) -> DigestAlgorithm {
        self.engine.algorithm()
    }

    /// Current lifecycle state.
    pub fn state(&self) -> ContextState {
        self.state
    }

    /// Total message bytes consumed so far.
    pub fn bytes_processed(&self) -> u64 {
        self.byte_count
    }

    /// Bytes waiting in the partial-block buffer.
    pub fn pending_len(&self) -> usize {
        self.pending.len()
    }

    /// The final digest, once [`finalize`](Self::finalize) has run.
    pub fn digest(&self) -> Option<Digest> {
        self.digest
    }

    /// Append `data` to the message.
    ///
    /// Completes and compresses the pending block first, then compresses
    /// whole blocks straight from `data`, and keeps the remainder for the
    /// next call. An empty `data` is a no-op.
    pub fn update(&mut self, data: &[u8]) -> Result<(), DigestError> {
        self.ensure_open("update")?;
        if data.is_empty() {
            return Ok(());
        }

        self.byte_count = self.byte_count.wrapping_add(data.len() as u64);
        self.state = ContextState::Accumulating;

        let mut input = data;
        if !self.pending.is_empty() {
            let (block, rest) = self.pending.fill(input);
            match block {
                Some(block) => self.engine.compress(&block),
                // Input exhausted before the block filled.
                None => return Ok(()),
            }
            input = rest;
        }

        let tail = self.engine.compress_blocks(input);
        self.pending.store(tail);
        Ok(())
    }

    /// Feed everything `reader` yields into the context, reading at most
    /// `buf.len()` bytes at a time.
    ///
    /// Returns the number of bytes read. Reads interrupted by a signal are
    /// retried. An empty `buf` reads nothing.
    pub fn update_reader<R: Read>(
        &mut self,
        mut reader: R,
        buf: &mut [u8],
    ) -> Result<u64, DigestError> {
        self.ensure_open("update")?;
        let mut total = 0u64;
        loop {
            let n = match reader.read(buf) {
                Ok(0) => break,
                Ok(n) => n,
                Err(e) if e.kind() == std::io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e.into()),
            };
            self.update(&buf[..n])?;
            total = total.wrapping_add(n as u64);
        }
        Ok(total)
    }

    /// Pad, compress the closing block(s), and return the digest.
    ///
    /// The context becomes Finalized; any later `update` or `finalize`
    /// returns [`DigestError::InvalidState`].
    pub fn finalize(&mut self) -> Result<Digest, DigestError> {
        self.ensure_open("finalize")?;

        let padding_blocks =
            finalize_engine(&mut self.engine, self.pending.tail(), self.byte_count);
        self.pending.clear();

        let digest = self.engine.digest();
        tracing::trace!(
            algorithm = %self.algorithm(),
            bytes = self.byte_count,
            padding_blocks,
            "digest finalized"
        );

        self.state = ContextState::Finalized;
        self.digest = Some(digest);
        Ok(digest)
    }

    fn ensure_open(&self, operation: &'static str) -> Result<(), DigestError> {
        if self.state.is_terminal() {
            tracing::debug!(
                algorithm = %self.algorithm(),
                state = %self.state,
                operation,
                "rejected operation on finalized digest context"
            );
            return Err(DigestError::InvalidState {
                state: self.state.to_string(),
                operation,
            });
        }
        Ok(())
    }
}
