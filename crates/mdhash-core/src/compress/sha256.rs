//! SHA-256 compression function (FIPS 180-4 §6.2).

use crate::block::Block;
use crate::state::HashState;

/// Hash-state width in words.
pub const STATE_WORDS: usize = 8;

/// Initial hash value H(0): first 32 bits of the fractional parts of the
/// square roots of the first 8 primes, in native word order.
#[rustfmt::skip]
pub const INITIAL_STATE: [u32; STATE_WORDS] = [
    0x6a09_e667, 0xbb67_ae85, 0x3c6e_f372, 0xa54f_f53a,
    0x510e_527f, 0x9b05_688c, 0x1f83_d9ab, 0x5be0_cd19,
];

/// Round constants: first 32 bits of the fractional parts of the cube roots
/// of the first 64 primes.
#[rustfmt::skip]
const K: [u32; ROUNDS] = [
    0x428a_2f98, 0x7137_4491, 0xb5c0_fbcf, 0xe9b5_dba5,
    0x3956_c25b, 0x59f1_11f1, 0x923f_82a4, 0xab1c_5ed5,
    0xd807_aa98, 0x1283_5b01, 0x2431_85be, 0x550c_7dc3,
    0x72be_5d74, 0x80de_b1fe, 0x9bdc_06a7, 0xc19b_f174,
    0xe49b_69c1, 0xefbe_4786, 0x0fc1_9dc6, 0x240c_a1cc,
    0x2de9_2c6f, 0x4a74_84aa, 0x5cb0_a9dc, 0x76f9_88da,
    0x983e_5152, 0xa831_c66d, 0xb003_27c8, 0xbf59_7fc7,
    0xc6e0_0bf3, 0xd5a7_9147, 0x06ca_6351, 0x1429_2967,
    0x27b7_0a85, 0x2e1b_2138, 0x4d2c_6dfc, 0x5338_0d13,
    0x650a_7354, 0x766a_0abb, 0x81c2_c92e, 0x9272_2c85,
    0xa2bf_e8a1, 0xa81a_664b, 0xc24b_8b70, 0xc76c_51a3,
    0xd192_e819, 0xd699_0624, 0xf40e_3585, 0x106a_a070,
    0x19a4_c116, 0x1e37_6c08, 0x2748_774c, 0x34b0_bcb5,
    0x391c_0cb3, 0x4ed8_aa4a, 0x5b9c_ca4f, 0x682e_6ff3,
    0x748f_82ee, 0x78a5_636f, 0x84c8_7814, 0x8cc7_0208,
    0x90be_fffa, 0xa450_6ceb, 0xbef9_a3f7, 0xc671_78f2,
];

const ROUNDS: usize = 64;

#[inline(always)]
fn ch(x: u32, y: u32, z: u32) -> u32 {
    (x & y) ^ (!x & z)
}

#[inline(always)]
fn maj(x: u32, y: u32, z: u32) -> u32 {
    (x & y) ^ (x & z) ^ (y & z)
}

#[inline(always)]
fn big_sigma0(x: u32) -> u32 {
    x.rotate_right(2) ^ x.rotate_right(13) ^ x.rotate_right(22)
}

#[inline(always)]
fn big_sigma1(x: u32) -> u32 {
    x.rotate_right(6) ^ x.rotate_right(11) ^ x.rotate_right(25)
}

#[inline(always)]
fn small_sigma0(x: u32) -> u32 {
    x.rotate_right(7) ^ x.rotate_right(18) ^ (x >> 3)
}

#[inline(always)]
fn small_sigma1(x: u32) -> u32 {
    x.rotate_right(17) ^ x.rotate_right(19) ^ (x >> 10)
}

/// Expand one block into the 64-word message schedule.
fn schedule(block: &Block) -> [u32; ROUNDS] {
    let mut w = [0u32; ROUNDS];
    for (word, chunk) in w.iter_mut().zip(block.chunks_exact(4)) {
        *word = u32::from_be_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
    }
    for t in 16..ROUNDS {
        w[t] = small_sigma1(w[t - 2])
            .wrapping_add(w[t - 7])
            .wrapping_add(small_sigma0(w[t - 15]))
            .wrapping_add(w[t - 16]);
    }
    w
}

/// Fold one 64-byte block into a SHA-256 hash state.
pub fn compress(state: &mut HashState<STATE_WORDS>, block: &Block) {
    let w = schedule(block);
    let mut h = state.to_native();

    let [mut a, mut b, mut c, mut d, mut e, mut f, mut g, mut hh] = h;

    for (&kt, &wt) in K.iter().zip(w.iter()) {
        let t1 = hh
            .wrapping_add(big_sigma1(e))
            .wrapping_add(ch(e, f, g))
            .wrapping_add(kt)
            .wrapping_add(wt);
        let t2 = big_sigma0(a).wrapping_add(maj(a, b, c));

        hh = g;
        g = f;
        f = e;
        e = d.wrapping_add(t1);
        d = c;
        c = b;
        b = a;
        a = t1.wrapping_add(t2);
    }

    for (word, v) in h.iter_mut().zip([a, b, c, d, e, f, g, hh]) {
        *word = word.wrapping_add(v);
    }
    state.store_native(h);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn primes(count: usize) -> Vec<u32> {
        (2u32..)
            .filter(|&n| (2..n).take_while(|d| d * d <= n).all(|d| n % d != 0))
            .take(count)
            .collect()
    }

    fn fraction_bits(x: f64) -> u32 {
        ((x - x.floor()) * 4_294_967_296.0) as u32
    }

    #[test]
    fn test_round_constants_from_cube_roots() {
        let expected: Vec<u32> = primes(ROUNDS)
            .into_iter()
            .map(|p| fraction_bits(f64::from(p).cbrt()))
            .collect();
        assert_eq!(K.to_vec(), expected);
    }

    #[test]
    fn test_initial_state_from_square_roots() {
        let expected: Vec<u32> = primes(STATE_WORDS)
            .into_iter()
            .map(|p| fraction_bits(f64::from(p).sqrt()))
            .collect();
        assert_eq!(INITIAL_STATE.to_vec(), expected);
    }

    #[test]
    fn test_small_sigmas() {
        assert_eq!(small_sigma0(1), 0x0200_4000);
        assert_eq!(small_sigma1(1), 0x0000_a000);
    }

    #[test]
    fn test_compress_abc() {
        // Single padded block for "abc".
        let mut block = [0u8; 64];
        block[..4].copy_from_slice(&[0x61, 0x62, 0x63, 0x80]);
        block[63] = 24;

        let mut state = HashState::from_native(INITIAL_STATE);
        compress(&mut state, &block);
        assert_eq!(
            state.to_native(),
            [
                0xba78_16bf, 0x8f01_cfea, 0x4141_40de, 0x5dae_2223,
                0xb003_61a3, 0x9617_7a9c, 0xb410_ff61, 0xf200_15ad,
            ]
        );
    }
}
