//! # Blocks and the Pending Buffer
//!
//! A [`Block`] is the 64-byte unit the compression functions consume. It is
//! never partially processed. [`PendingBuffer`] holds the tail of the input
//! that has not yet filled a block, with an explicit length that is always
//! strictly below [`BLOCK_LEN`] between calls.

/// Block size in bytes, shared by SHA-1 and SHA-256.
pub const BLOCK_LEN: usize = 64;

/// Size of the trailing big-endian bit-length field.
pub const LENGTH_FIELD_LEN: usize = 8;

/// Offset of the bit-length field within the final block.
pub const LENGTH_FIELD_OFFSET: usize = BLOCK_LEN - LENGTH_FIELD_LEN;

/// One compression input.
pub type Block = [u8; BLOCK_LEN];

/// Input bytes that do not fill a block. The length is below
/// [`BLOCK_LEN`] by construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tail<'a>(&'a [u8]);

impl<'a> Tail<'a> {
    /// Wrap `bytes` if they are shorter than a block.
    pub fn new(bytes: &'a [u8]) -> Option<Self> {
        (bytes.len() < BLOCK_LEN).then_some(Self(bytes))
    }

    /// The tail bytes.
    pub fn as_slice(&self) -> &'a [u8] {
        self.0
    }

    /// Number of tail bytes.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the tail is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Call `f` on every complete block at the front of `data`, in order, and
/// return the bytes left over.
pub fn for_each_block<'a>(mut data: &'a [u8], mut f: impl FnMut(&Block)) -> Tail<'a> {
    while let Some((block, rest)) = data.split_first_chunk::<BLOCK_LEN>() {
        f(block);
        data = rest;
    }
    Tail(data)
}

/// Fixed-capacity buffer for input bytes not yet forming a complete block.
#[derive(Clone)]
pub struct PendingBuffer {
    bytes: Block,
    len: usize,
}

impl PendingBuffer {
    /// Create an empty buffer.
    pub const fn new() -> Self {
        Self {
            bytes: [0u8; BLOCK_LEN],
            len: 0,
        }
    }

    /// Number of buffered bytes.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the buffer holds no bytes.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Bytes still needed to complete a block.
    pub fn remaining(&self) -> usize {
        BLOCK_LEN - self.len
    }

    /// The buffered bytes.
    pub fn as_slice(&self) -> &[u8] {
        &self.bytes[..self.len]
    }

    /// Copy as much of `input` as fits into the buffer and return the
    /// unconsumed rest.
    ///
    /// When the returned block is `Some`, the buffer was completed by this
    /// call: the caller must compress the block, and the buffer is already
    /// empty again.
    pub fn fill<'a>(&mut self, input: &'a [u8]) -> (Option<Block>, &'a [u8]) {
        let take = input.len().min(self.remaining());
        let (head, rest) = input.split_at(take);
        self.bytes[self.len..self.len + take].copy_from_slice(head);
        self.len += take;

        if self.len == BLOCK_LEN {
            self.len = 0;
            (Some(self.bytes), rest)
        } else {
            (None, rest)
        }
    }

    /// The buffered bytes as a [`Tail`].
    pub fn tail(&self) -> Tail<'_> {
        // len < BLOCK_LEN between calls.
        Tail(&self.bytes[..self.len])
    }

    /// Replace the contents with `tail`.
    pub fn store(&mut self, tail: Tail<'_>) {
        self.bytes[..tail.len()].copy_from_slice(tail.as_slice());
        self.len = tail.len();
    }

    /// Discard the buffered bytes.
    pub fn clear(&mut self) {
        self.bytes = [0u8; BLOCK_LEN];
        self.len = 0;
    }
}

impl Default for PendingBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for PendingBuffer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PendingBuffer")
            .field("len", &self.len)
            .finish_non_exhaustive()
    }
}
