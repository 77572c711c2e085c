//! In-place bit order reversal for byte buffers.
//!
//! The buffer is viewed as one long bit string, MSB-first within every byte,
//! and the bit at position `i` is moved to position `N - 1 - i` where
//! `N = 8 * len`. That is stronger than a byte reflection: the bits inside
//! every byte flip too. Reversing a bit string is the same as reflecting the
//! byte order and then reversing the bits of each byte, which is why the
//! driver can work in aligned chunks: reverse a chunk's bits in a register,
//! then exchange the chunk with its mirror chunk at the other end of the
//! buffer.
//!
//! Three layers:
//! - [`fixed`]: branch-free swap-mask ("butterfly") reversals of 8/16/32/64
//!   bit registers loaded straight from the buffer.
//! - [`span`]: the same butterfly stages driven to a variable depth, covering
//!   any span of 1 to 8 bytes through one 64-bit register.
//! - [`buffer`]: walks an arbitrary buffer from both ends inward, swapping
//!   bit-reversed 8-byte chunks, and hands the short tail to the span
//!   reverser.
//!
//! Everything runs in place: O(len) time, O(1) scratch, no allocation.
//! Applying any of these operations twice restores the original contents.

pub mod buffer;
pub mod fixed;
mod masks;
pub mod span;

pub use buffer::reverse_buffer;
pub use fixed::{reverse_fixed16, reverse_fixed32, reverse_fixed64, reverse_fixed8};
pub use span::{reverse_span, InvalidLength};
