//! Whole-buffer driver.
//!
//! Reversing the buffer's bit string is the same as reflecting its byte
//! order and bit-reversing every byte, so the driver does both at chunk
//! granularity: bit-reverse a chunk at each end of the unprocessed window,
//! swap the two chunks, and shrink the window from both sides. Every byte is
//! loaded into a register exactly once.

use crate::fixed::reverse_fixed64;
use crate::span::reverse_short;

/// Reverses the bit order of the whole buffer in place.
///
/// Total for every length including 0; the empty buffer is a no-op and a
/// single byte just has its own bits reversed.
pub fn reverse_buffer(buf: &mut [u8]) {
    let mut next = 0;
    let mut end = buf.len();

    // Peel mirrored 8-byte chunks while the window still holds two disjoint
    // ones. 16 bytes exactly is the last round; anything shorter goes to the
    // tail handling below.
    while end - next > 15 {
        let (i, j) = (next, end - 8);
        reverse_fixed64(buf, i);
        reverse_fixed64(buf, j);
        for k in 0..8 {
            buf.swap(i + k, j + k);
        }
        next += 8;
        end -= 8;
    }

    let window = end - next;
    if window > 8 {
        // 9 to 15 bytes: split into near-halves the span reverser can take,
        // the first one byte longer when the window is odd. Reverse both,
        // swap the equal-sized parts, then walk the odd byte into the
        // center where it belongs.
        let half = window / 2;
        let extra = window % 2;
        let (i, j) = (next, next + half + extra);
        reverse_short(buf, i, half + extra);
        reverse_short(buf, j, half);
        for k in 0..half {
            buf.swap(i + extra + k, j + k);
        }
        if extra > 0 {
            for k in i..i + half {
                buf.swap(k, k + 1);
            }
        }
        next += half + extra;
        end -= half;
    } else if window > 0 {
        reverse_short(buf, next, window);
        next = end;
    }

    // the decomposition above must consume the window completely
    assert_eq!(next, end, "bit reversal left {} bytes unprocessed", end - next);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::span::reverse_span;
    use itertools::iproduct;

    fn reference_reverse(bytes: &[u8]) -> Vec<u8> {
        bytes.iter().rev().map(|b| b.reverse_bits()).collect()
    }

    #[test]
    fn empty_and_single_byte() {
        let mut buf: [u8; 0] = [];
        reverse_buffer(&mut buf);
        assert_eq!(buf, []);

        let mut buf = [0x01];
        reverse_buffer(&mut buf);
        assert_eq!(buf, [0x80]);
    }

    #[test]
    fn concrete_vectors() {
        let mut buf = [0x12, 0x34];
        reverse_buffer(&mut buf);
        assert_eq!(buf, [0x2c, 0x48]);

        let mut buf = [0xaa, 0x55, 0x01];
        reverse_buffer(&mut buf);
        assert_eq!(buf, [0x80, 0xaa, 0x55]);
    }

    #[test]
    fn matches_reference_for_every_length_up_to_64() {
        for (len, fill) in iproduct!(0usize..=64, [0x00u8, 0xff, 0xa5, 0x12, 0x81]) {
            let mut buf: Vec<u8> = (0..len).map(|i| fill.wrapping_add((i as u8).wrapping_mul(29))).collect();
            let expected = reference_reverse(&buf);
            reverse_buffer(&mut buf);
            assert_eq!(buf, expected, "failed for length {} fill {:#04x}", len, fill);
        }
    }

    #[test]
    fn matches_reference_on_random_buffers() {
        use rand::Rng;
        let mut rng = rand::thread_rng();
        for len in 0usize..=64 {
            for _ in 0..50 {
                let mut buf: Vec<u8> = (0..len).map(|_| rng.gen()).collect();
                let expected = reference_reverse(&buf);
                reverse_buffer(&mut buf);
                assert_eq!(buf, expected, "failed for length {}", len);
            }
        }
    }

    #[test]
    fn double_reversal_restores_every_length_up_to_64() {
        use rand::Rng;
        let mut rng = rand::thread_rng();
        for len in 0usize..=64 {
            let mut buf: Vec<u8> = (0..len).map(|_| rng.gen()).collect();
            let orig = buf.clone();
            reverse_buffer(&mut buf);
            reverse_buffer(&mut buf);
            assert_eq!(buf, orig, "double reversal changed a length {} buffer", len);
        }
    }

    #[test]
    fn tail_split_and_chunk_loop_lengths() {
        // 9 exercises the split-halves tail, 17 the 8-byte chunk loop plus a
        // 1-byte middle, 16 the chunk loop alone, 15 the widest tail.
        for len in [9usize, 15, 16, 17, 24, 31] {
            let buf: Vec<u8> = (0..len).map(|i| 0x10 + i as u8).collect();
            let expected = reference_reverse(&buf);
            let mut got = buf.clone();
            reverse_buffer(&mut got);
            assert_eq!(got, expected, "failed for length {}", len);
        }
    }

    #[test]
    fn span_and_buffer_agree_on_short_buffers() {
        use rand::Rng;
        let mut rng = rand::thread_rng();
        for len in 0usize..=8 {
            for _ in 0..100 {
                let via_span: Vec<u8> = (0..len).map(|_| rng.gen()).collect();
                let mut via_buffer = via_span.clone();
                let mut via_span = via_span;
                reverse_span(&mut via_span, 0, len).unwrap();
                reverse_buffer(&mut via_buffer);
                assert_eq!(via_span, via_buffer, "disagreement at length {}", len);
            }
        }
    }

    #[test]
    fn large_buffer_matches_reference() {
        use rand::Rng;
        let mut rng = rand::thread_rng();
        let mut buf: Vec<u8> = (0..4096 + 13).map(|_| rng.gen()).collect();
        let expected = reference_reverse(&buf);
        reverse_buffer(&mut buf);
        assert_eq!(buf, expected);
    }
}
