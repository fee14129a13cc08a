//! Bit-level extraction and assembly.
//!
//! Every converter in this crate treats a byte as a sequence of eight bits in
//! *stream order*: the order in which the bits are logically transmitted.
//! [`BitOrder`] decides whether that sequence starts at the least or the most
//! significant bit.
//!
//! # Example
//!
//! ```
//! use oddbits_core::bitstream::{BitOrder, assemble_bit, extract_bit};
//!
//! // 0xA5 = 0b1010_0101
//! let lsb: Vec<u8> = (0..8).map(|j| extract_bit(0xA5, j, BitOrder::LsbFirst)).collect();
//! assert_eq!(lsb, [1, 0, 1, 0, 0, 1, 0, 1]);
//!
//! // Reassembling with the same order restores the byte.
//! let byte = lsb
//!     .iter()
//!     .enumerate()
//!     .fold(0u8, |acc, (k, &bit)| assemble_bit(acc, bit, k as u8, BitOrder::LsbFirst));
//! assert_eq!(byte, 0xA5);
//! ```

use std::fmt;

/// Bit ordering convention within a byte or symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum BitOrder {
    /// The least significant bit comes first.
    #[default]
    LsbFirst,
    /// The most significant bit comes first.
    MsbFirst,
}

impl BitOrder {
    /// Order selected by a "big endian" flag.
    pub fn from_big_endian(big_endian: bool) -> Self {
        if big_endian {
            Self::MsbFirst
        } else {
            Self::LsbFirst
        }
    }

    /// Returns true for [`BitOrder::MsbFirst`].
    pub fn is_msb_first(self) -> bool {
        self == Self::MsbFirst
    }

    /// Short human-readable name.
    pub fn name(self) -> &'static str {
        match self {
            Self::LsbFirst => "lsb-first",
            Self::MsbFirst => "msb-first",
        }
    }
}

impl fmt::Display for BitOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Return the bit at stream position `index` (0-7) of `byte`.
///
/// `LsbFirst` yields `(byte >> index) & 1`, `MsbFirst` yields
/// `(byte >> (7 - index)) & 1`.
#[inline(always)]
pub fn extract_bit(byte: u8, index: u8, order: BitOrder) -> u8 {
    debug_assert!(index < 8, "bit index out of range: {}", index);
    match order {
        BitOrder::LsbFirst => (byte >> index) & 1,
        BitOrder::MsbFirst => (byte >> (7 - index)) & 1,
    }
}

/// Fold the `index`-th popped bit into an accumulator.
///
/// With `LsbFirst` the first bit lands in bit 0 and each later bit one
/// position higher. With `MsbFirst` the accumulator is shifted left and the
/// bit ORed in, so the first bit ends up most significant once all bits of
/// the group have been folded in.
#[inline(always)]
pub fn assemble_bit(acc: u8, bit: u8, index: u8, order: BitOrder) -> u8 {
    match order {
        BitOrder::LsbFirst => acc | (bit << index),
        BitOrder::MsbFirst => (acc << 1) | bit,
    }
}

/// Iterate over the eight bits of `byte` in stream order.
pub fn bits_of(byte: u8, order: BitOrder) -> impl Iterator<Item = u8> {
    (0..8).map(move |j| extract_bit(byte, j, order))
}
