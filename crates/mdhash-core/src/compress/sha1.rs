//! SHA-1 compression function (FIPS 180-4 §6.1).

use crate::block::Block;
use crate::state::HashState;

/// Hash-state width in words.
pub const STATE_WORDS: usize = 5;

/// Initial hash value H(0), in native word order.
pub const INITIAL_STATE: [u32; STATE_WORDS] =
    [0x6745_2301, 0xefcd_ab89, 0x98ba_dcfe, 0x1032_5476, 0xc3d2_e1f0];

/// Round constants, one per 20-round stage.
const K: [u32; 4] = [
    0x5a82_7999, //  0 <= t <= 19
    0x6ed9_eba1, // 20 <= t <= 39
    0x8f1b_bcdc, // 40 <= t <= 59
    0xca62_c1d6, // 60 <= t <= 79
];

const ROUNDS: usize = 80;

#[inline(always)]
fn ch(x: u32, y: u32, z: u32) -> u32 {
    (x & y) ^ (!x & z)
}

#[inline(always)]
fn parity(x: u32, y: u32, z: u32) -> u32 {
    x ^ y ^ z
}

#[inline(always)]
fn maj(x: u32, y: u32, z: u32) -> u32 {
    (x & y) ^ (x & z) ^ (y & z)
}

/// Expand one block into the 80-word message schedule.
fn schedule(block: &Block) -> [u32; ROUNDS] {
    let mut w = [0u32; ROUNDS];
    for (word, chunk) in w.iter_mut().zip(block.chunks_exact(4)) {
        *word = u32::from_be_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
    }
    for t in 16..ROUNDS {
        w[t] = (w[t - 3] ^ w[t - 8] ^ w[t - 14] ^ w[t - 16]).rotate_left(1);
    }
    w
}

/// Fold one 64-byte block into a SHA-1 hash state.
pub fn compress(state: &mut HashState<STATE_WORDS>, block: &Block) {
    let w = schedule(block);
    let mut h = state.to_native();

    let [mut a, mut b, mut c, mut d, mut e] = h;

    for (t, &wt) in w.iter().enumerate() {
        let f = match t {
            0..=19 => ch(b, c, d),
            40..=59 => maj(b, c, d),
            _ => parity(b, c, d),
        };
        let temp = a
            .rotate_left(5)
            .wrapping_add(f)
            .wrapping_add(e)
            .wrapping_add(K[t / 20])
            .wrapping_add(wt);

        e = d;
        d = c;
        c = b.rotate_left(30);
        b = a;
        a = temp;
    }

    for (word, v) in h.iter_mut().zip([a, b, c, d, e]) {
        *word = word.wrapping_add(v);
    }
    state.store_native(h);
}

#[cfg(test)]
mod tests {
    use super::*;

    /// The single padded block for the empty message.
    fn empty_message_block() -> Block {
        let mut block = [0u8; 64];
        block[0] = 0x80;
        block
    }

    #[test]
    fn test_schedule_head_is_big_endian() {
        let mut block = [0u8; 64];
        block[..4].copy_from_slice(&[0x61, 0x62, 0x63, 0x80]);
        let w = schedule(&block);
        assert_eq!(w[0], 0x6162_6380);
        assert_eq!(w[1], 0);
    }

    #[test]
    fn test_schedule_expansion_rotates() {
        let mut block = [0u8; 64];
        block[0] = 0x80; // w[0] = 0x80000000
        let w = schedule(&block);
        // w[16] = rotl1(w[13] ^ w[8] ^ w[2] ^ w[0]) = rotl1(0x80000000) = 1
        assert_eq!(w[16], 1);
    }

    #[test]
    fn test_compress_empty_message() {
        let mut state = HashState::from_native(INITIAL_STATE);
        compress(&mut state, &empty_message_block());
        assert_eq!(
            state.to_native(),
            [0xda39_a3ee, 0x5e6b_4b0d, 0x3255_bfef, 0x9560_1890, 0xafd8_0709]
        );
    }
}
