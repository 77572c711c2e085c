//! Variable-length span reversal through a single 64-bit register.
//!
//! A span of 1 to 8 bytes is packed first-byte-most-significant into a u64
//! and pushed through the same butterfly stages as the fixed-width reversers,
//! but the number of stages depends on the span length. Non-power-of-two
//! lengths occupy a bit range that is not symmetric around the register's
//! center, so the value is pre-shifted left to center it on the width the
//! stages will cover (bit 16 of the low 32 bits for length 3, bit 32 of the
//! full register for lengths 5 to 7); the same shift is undone before the
//! bytes are stored back. High bits spilled by the unmasked half-swap stages
//! fall outside the occupied range and are discarded by the store.

use core::fmt;

use crate::masks::{M0, M1, M2, M3, M4};

/// A span length the 64-bit register cannot hold.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct InvalidLength(pub usize);

impl fmt::Display for InvalidLength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "span length {} is outside [0, 8]", self.0)
    }
}

impl std::error::Error for InvalidLength {}

/// Reverses the bit order of `length` bytes starting at `start`, in place.
///
/// `length == 0` succeeds without touching the buffer. `length > 8` is
/// rejected before any mutation. For a valid length the whole range
/// `[start, start + length)` must lie inside the buffer; an out-of-range
/// span panics on the bounds check while reading, before any byte is
/// written. Longer ranges belong to [`crate::reverse_buffer`].
pub fn reverse_span(buf: &mut [u8], start: usize, length: usize) -> Result<(), InvalidLength> {
    if length > 8 {
        return Err(InvalidLength(length));
    }
    if length == 0 {
        return Ok(());
    }
    reverse_short(buf, start, length);
    Ok(())
}

/// The unvalidated core of [`reverse_span`]: `length` must be in `1..=8`.
pub(crate) fn reverse_short(buf: &mut [u8], start: usize, length: usize) {
    debug_assert!((1..=8).contains(&length));

    let mut x = 0u64;
    for i in 0..length {
        x = (x << 8) | u64::from(buf[start + i]);
    }

    // Center the occupied bits on the register midpoint (midpoint of the low
    // 32 bits for length 3) so the swap stages line up. Power-of-two lengths
    // are already centered.
    let center = match length {
        3 | 7 => 4,
        6 => 8,
        5 => 12,
        _ => 0,
    };
    x <<= center;

    x = ((x >> 1) & M0) | ((x & M0) << 1);
    x = ((x >> 2) & M1) | ((x & M1) << 2);
    if length == 1 {
        // swap the nibbles of the low byte and stop
        x = (x >> 4) | (x << 4);
    } else {
        x = ((x >> 4) & M2) | ((x & M2) << 4);
        if length == 2 {
            x = (x >> 8) | (x << 8);
        } else {
            x = ((x >> 8) & M3) | ((x & M3) << 8);
            if length < 5 {
                // lengths 3 and 4: swap the words of the low dword
                x = (x >> 16) | (x << 16);
            } else {
                // lengths 5 to 8
                x = ((x >> 16) & M4) | ((x & M4) << 16);
                x = (x >> 32) | (x << 32);
            }
        }
    }

    x >>= center;
    for i in (0..length).rev() {
        buf[start + i] = x as u8;
        x >>= 8;
    }
}
