//! # Endian Codec
//!
//! Converts 16- and 32-bit words between the host's native byte order and
//! fixed big- or little-endian order. The host order is resolved once at
//! compile time from `target_endian`; there is no runtime flag.
//!
//! The compression functions are the only callers. They use
//! [`be_to_native_u32`] on entry and [`native_to_be_u32`] on exit so that a
//! [`HashState`](crate::HashState) always presents its words in big-endian
//! byte order between blocks, whatever the host.

/// Whether the host stores multi-byte words most-significant byte first.
pub const NATIVE_IS_BIG_ENDIAN: bool = cfg!(target_endian = "big");

/// Reverse the byte order of a 16-bit word.
#[inline]
pub const fn swap_u16(val: u16) -> u16 {
    val.rotate_left(8)
}

/// Reverse the byte order of a 32-bit word.
#[inline]
pub const fn swap_u32(val: u32) -> u32 {
    let val = ((val << 8) & 0xff00_ff00) | ((val >> 8) & 0x00ff_00ff);
    val.rotate_left(16)
}

// ─── Native → Big Endian ─────────────────────────────────────────────

/// Convert a native 16-bit word to big-endian representation.
#[inline]
pub const fn native_to_be_u16(val: u16) -> u16 {
    if NATIVE_IS_BIG_ENDIAN {
        val
    } else {
        swap_u16(val)
    }
}

/// Convert a native 32-bit word to big-endian representation.
#[inline]
pub const fn native_to_be_u32(val: u32) -> u32 {
    if NATIVE_IS_BIG_ENDIAN {
        val
    } else {
        swap_u32(val)
    }
}

// ─── Native → Little Endian ──────────────────────────────────────────

/// Convert a native 16-bit word to little-endian representation.
#[inline]
pub const fn native_to_le_u16(val: u16) -> u16 {
    if NATIVE_IS_BIG_ENDIAN {
        swap_u16(val)
    } else {
        val
    }
}

/// Convert a native 32-bit word to little-endian representation.
#[inline]
pub const fn native_to_le_u32(val: u32) -> u32 {
    if NATIVE_IS_BIG_ENDIAN {
        swap_u32(val)
    } else {
        val
    }
}

// ─── Big Endian → Native ─────────────────────────────────────────────

/// Convert a big-endian 16-bit word to native representation.
#[inline]
pub const fn be_to_native_u16(val: u16) -> u16 {
    native_to_be_u16(val)
}

/// Convert a big-endian 32-bit word to native representation.
#[inline]
pub const fn be_to_native_u32(val: u32) -> u32 {
    native_to_be_u32(val)
}

// ─── Little Endian → Native ──────────────────────────────────────────

/// Convert a little-endian 16-bit word to native representation.
#[inline]
pub const fn le_to_native_u16(val: u16) -> u16 {
    native_to_le_u16(val)
}

/// Convert a little-endian 32-bit word to native representation.
#[inline]
pub const fn le_to_native_u32(val: u32) -> u32 {
    native_to_le_u32(val)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_native_order_matches_target() {
        assert_eq!(NATIVE_IS_BIG_ENDIAN, 1u32.to_ne_bytes()[0] == 0);
    }

    #[test]
    fn test_swap_u16() {
        assert_eq!(swap_u16(0x0102), 0x0201);
        assert_eq!(swap_u16(0xff00), 0x00ff);
    }

    #[test]
    fn test_swap_u32() {
        assert_eq!(swap_u32(0x0102_0304), 0x0403_0201);
        assert_eq!(swap_u32(0x6a09_e667), 0x67e6_096a);
    }

    #[test]
    fn test_native_to_be_agrees_with_core() {
        for val in [0u32, 1, 0x0102_0304, 0xdead_beef, u32::MAX] {
            assert_eq!(native_to_be_u32(val), val.to_be());
            assert_eq!(native_to_le_u32(val), val.to_le());
            assert_eq!(be_to_native_u32(val), u32::from_be(val));
            assert_eq!(le_to_native_u32(val), u32::from_le(val));
        }
        for val in [0u16, 1, 0x0102, 0xbeef, u16::MAX] {
            assert_eq!(native_to_be_u16(val), val.to_be());
            assert_eq!(native_to_le_u16(val), val.to_le());
            assert_eq!(be_to_native_u16(val), u16::from_be(val));
            assert_eq!(le_to_native_u16(val), u16::from_le(val));
        }
    }

    #[test]
    fn test_be_word_memory_layout() {
        // A word in big-endian form lays out its most significant byte first.
        let stored = native_to_be_u32(0x1122_3344);
        assert_eq!(stored.to_ne_bytes(), [0x11, 0x22, 0x33, 0x44]);
    }
}
