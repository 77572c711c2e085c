//! Butterfly stage masks. Each stage keeps the bits selected by its mask and
//! swaps them with the adjacent group of the same width; the `u16`/`u32`
//! variants of the stages truncate these with a plain `as` cast.

pub(crate) const M0: u64 = 0x5555555555555555; // adjacent bits
pub(crate) const M1: u64 = 0x3333333333333333; // adjacent bit pairs
pub(crate) const M2: u64 = 0x0f0f0f0f0f0f0f0f; // adjacent nibbles
pub(crate) const M3: u64 = 0x00ff00ff00ff00ff; // adjacent bytes
pub(crate) const M4: u64 = 0x0000ffff0000ffff; // adjacent 16-bit words
