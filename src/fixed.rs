//! Fixed-width register reversals.
//!
//! Each function loads `W/8` consecutive bytes first-byte-most-significant,
//! reverses the register with `log2(W)` butterfly stages and stores it back
//! over the same bytes. The stages are branch-free; the final stage is always
//! a plain rotate by half the width since both halves fully occupy the
//! register. Deliberately no lookup tables, the masks cost nothing in the
//! binary.
//!
//! `start` must leave the whole register in bounds. A bad `start` panics on
//! the bounds check during the load, before any byte is written.

use crate::masks::{M0, M1, M2, M3, M4};

/// Reverses the bit order of the byte at `start`.
#[inline(always)]
pub fn reverse_fixed8(buf: &mut [u8], start: usize) {
    let x = buf[start];
    let x = ((x >> 1) & M0 as u8) | ((x & M0 as u8) << 1);
    let x = ((x >> 2) & M1 as u8) | ((x & M1 as u8) << 2);
    // both nibbles fill the register, no mask needed
    let x = x.rotate_left(4);
    buf[start] = x;
}

/// Reverses the bit order of the 2 bytes at `start`.
#[inline(always)]
pub fn reverse_fixed16(buf: &mut [u8], start: usize) {
    let mut x = u16::from_be_bytes([buf[start], buf[start + 1]]);
    x = ((x >> 1) & M0 as u16) | ((x & M0 as u16) << 1);
    x = ((x >> 2) & M1 as u16) | ((x & M1 as u16) << 2);
    x = ((x >> 4) & M2 as u16) | ((x & M2 as u16) << 4);
    x = x.rotate_left(8);
    buf[start..start + 2].copy_from_slice(&x.to_be_bytes());
}

/// Reverses the bit order of the 4 bytes at `start`.
#[inline(always)]
pub fn reverse_fixed32(buf: &mut [u8], start: usize) {
    let mut x = 0u32;
    for i in 0..4 {
        x = (x << 8) | u32::from(buf[start + i]);
    }
    x = ((x >> 1) & M0 as u32) | ((x & M0 as u32) << 1);
    x = ((x >> 2) & M1 as u32) | ((x & M1 as u32) << 2);
    x = ((x >> 4) & M2 as u32) | ((x & M2 as u32) << 4);
    x = ((x >> 8) & M3 as u32) | ((x & M3 as u32) << 8);
    x = x.rotate_left(16);
    buf[start..start + 4].copy_from_slice(&x.to_be_bytes());
}

/// Reverses the bit order of the 8 bytes at `start`.
#[inline(always)]
pub fn reverse_fixed64(buf: &mut [u8], start: usize) {
    let mut x = 0u64;
    for i in 0..8 {
        x = (x << 8) | u64::from(buf[start + i]);
    }
    x = ((x >> 1) & M0) | ((x & M0) << 1);
    x = ((x >> 2) & M1) | ((x & M1) << 2);
    x = ((x >> 4) & M2) | ((x & M2) << 4);
    x = ((x >> 8) & M3) | ((x & M3) << 8);
    x = ((x >> 16) & M4) | ((x & M4) << 16);
    x = x.rotate_left(32);
    buf[start..start + 8].copy_from_slice(&x.to_be_bytes());
}

#[test]
fn test_fixed8_against_reverse_bits() {
    for b in 0u8..=255 {
        let mut buf = [0x11, b, 0x22];
        reverse_fixed8(&mut buf, 1);
        assert_eq!(buf, [0x11, b.reverse_bits(), 0x22], "failed for byte {:#04x}", b);
    }
}

#[test]
fn test_fixed16_against_reverse_bits() {
    use rand::Rng;
    let mut rng = rand::thread_rng();
    for _ in 0..1000 {
        let mut buf: [u8; 4] = rng.gen();
        let orig = buf;
        reverse_fixed16(&mut buf, 1);
        let expected = u16::from_be_bytes([orig[1], orig[2]]).reverse_bits();
        assert_eq!(u16::from_be_bytes([buf[1], buf[2]]), expected);
        assert_eq!(buf[0], orig[0]);
        assert_eq!(buf[3], orig[3]);
    }
}

#[test]
fn test_fixed32_against_reverse_bits() {
    use rand::Rng;
    let mut rng = rand::thread_rng();
    for _ in 0..1000 {
        let mut buf: [u8; 6] = rng.gen();
        let orig = buf;
        reverse_fixed32(&mut buf, 1);
        let expected = u32::from_be_bytes([orig[1], orig[2], orig[3], orig[4]]).reverse_bits();
        assert_eq!(
            u32::from_be_bytes([buf[1], buf[2], buf[3], buf[4]]),
            expected
        );
        assert_eq!(buf[0], orig[0]);
        assert_eq!(buf[5], orig[5]);
    }
}

#[test]
fn test_fixed64_against_reverse_bits() {
    use rand::Rng;
    let mut rng = rand::thread_rng();
    for _ in 0..1000 {
        let mut buf: [u8; 12] = rng.gen();
        let orig = buf;
        reverse_fixed64(&mut buf, 2);
        let mut expected = [0u8; 8];
        expected.copy_from_slice(&orig[2..10]);
        let expected = u64::from_be_bytes(expected).reverse_bits();
        let mut got = [0u8; 8];
        got.copy_from_slice(&buf[2..10]);
        assert_eq!(u64::from_be_bytes(got), expected);
        assert_eq!(&buf[..2], &orig[..2]);
        assert_eq!(&buf[10..], &orig[10..]);
    }
}

#[test]
fn test_fixed_widths_are_involutions() {
    use rand::Rng;
    let mut rng = rand::thread_rng();
    for _ in 0..100 {
        let mut buf: [u8; 8] = rng.gen();
        let orig = buf;
        reverse_fixed64(&mut buf, 0);
        reverse_fixed64(&mut buf, 0);
        assert_eq!(buf, orig);
        reverse_fixed32(&mut buf, 2);
        reverse_fixed32(&mut buf, 2);
        assert_eq!(buf, orig);
        reverse_fixed16(&mut buf, 5);
        reverse_fixed16(&mut buf, 5);
        assert_eq!(buf, orig);
    }
}
