//! # Hash State
//!
//! The running digest: a fixed array of 32-bit words, 5 for SHA-1 and 8 for
//! SHA-256. Between compressions the words are kept in big-endian form, so
//! their in-memory bytes are already the external digest layout. Arithmetic
//! only ever happens on the native copy returned by [`HashState::to_native`].

use crate::endian::{be_to_native_u32, native_to_be_u32};

/// Fixed-width hash state in external (big-endian) word form.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct HashState<const N: usize> {
    words: [u32; N],
}

impl<const N: usize> HashState<N> {
    /// Number of bytes the state occupies when read out as a digest.
    pub const BYTE_LEN: usize = N * 4;

    /// Build a state from native-order words.
    pub const fn from_native(native: [u32; N]) -> Self {
        let mut words = [0u32; N];
        let mut i = 0;
        while i < N {
            words[i] = native_to_be_u32(native[i]);
            i += 1;
        }
        Self { words }
    }

    /// Native-order copy of the words, for compression arithmetic.
    pub fn to_native(&self) -> [u32; N] {
        self.words.map(be_to_native_u32)
    }

    /// Overwrite the state with native-order words.
    pub fn store_native(&mut self, native: [u32; N]) {
        self.words = native.map(native_to_be_u32);
    }

    /// The stored words, exactly as held between compressions.
    pub fn stored_words(&self) -> &[u32; N] {
        &self.words
    }

    /// Copy the state's bytes into the front of `out` and return how many
    /// bytes were written (`N * 4`, or less if `out` is shorter).
    pub fn write_bytes(&self, out: &mut [u8]) -> usize {
        let mut written = 0;
        for (chunk, word) in out.chunks_exact_mut(4).zip(self.words.iter()) {
            chunk.copy_from_slice(&word.to_ne_bytes());
            written += 4;
        }
        written
    }
}

impl<const N: usize> std::fmt::Debug for HashState<N> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let words: Vec<String> = self
            .to_native()
            .iter()
            .map(|w| format!("{w:08x}"))
            .collect();
        f.debug_tuple("HashState").field(&words).finish()
    }
}
