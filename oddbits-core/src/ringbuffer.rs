//! Bounded circular buffer of single bits.
//!
//! The bit ring bridges read-chunk boundaries: bits that do not yet form a
//! complete symbol (or byte) stay buffered until the next chunk arrives.
//!
//! Unlike a sliding history window, the ring never overwrites: pushing into a
//! full ring is a [`CapacityExceeded`](crate::OddbitsError::CapacityExceeded)
//! fault and popping from an empty ring is a
//! [`RingUnderflow`](crate::OddbitsError::RingUnderflow) fault.
//!
//! # Sizing
//!
//! A codec drains every complete group after each chunk, so the most the ring
//! ever holds is one chunk of bits plus a carry shorter than one group. See
//! [`required_capacity`].

use crate::error::{OddbitsError, Result};

/// Number of bits needed to stream `chunk_size`-byte chunks with
/// `bits_per_symbol`-bit symbols in either direction.
///
/// `max(chunk_bits, 8) + max(bits_per_symbol, 8) - 1`
///
/// Fails with [`InvalidChunkSize`](OddbitsError::InvalidChunkSize) when the
/// result does not fit in a `usize`.
pub fn required_capacity(chunk_size: usize, bits_per_symbol: u8) -> Result<usize> {
    let group_bits = usize::from(bits_per_symbol).max(8);
    chunk_size
        .checked_mul(8)
        .and_then(|bits| bits.max(8).checked_add(group_bits - 1))
        .ok_or(OddbitsError::invalid_chunk_size(chunk_size))
}

/// A fixed-capacity ring of single-bit values.
#[derive(Debug, Clone)]
pub struct BitRing {
    /// One bit per slot, always 0 or 1.
    bits: Vec<u8>,
    /// Next slot to write.
    head: usize,
    /// Next slot to read.
    tail: usize,
    /// Number of buffered bits.
    count: usize,
    /// Mask for efficient modulo (capacity - 1).
    mask: usize,
}

impl BitRing {
    /// Create a ring holding at least `capacity` bits.
    ///
    /// The capacity is rounded up to a power of 2.
    ///
    /// # Panics
    ///
    /// Panics if `capacity` is zero.
    pub fn new(capacity: usize) -> Self {
        assert!(capacity > 0, "Capacity must be greater than 0");
        let capacity = capacity.next_power_of_two();

        Self {
            bits: vec![0; capacity],
            head: 0,
            tail: 0,
            count: 0,
            mask: capacity - 1,
        }
    }

    /// Create a ring sized for the given chunk size and symbol width.
    pub fn for_stream(chunk_size: usize, bits_per_symbol: u8) -> Result<Self> {
        Ok(Self::new(required_capacity(chunk_size, bits_per_symbol)?))
    }

    /// Get the capacity of the ring in bits.
    pub fn capacity(&self) -> usize {
        self.bits.len()
    }

    /// Number of bits currently buffered.
    pub fn available(&self) -> usize {
        self.count
    }

    /// Check if the ring is empty.
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Check if the ring is full.
    pub fn is_full(&self) -> bool {
        self.count == self.bits.len()
    }

    /// Discard all buffered bits.
    pub fn clear(&mut self) {
        self.head = 0;
        self.tail = 0;
        self.count = 0;
    }

    /// Append one bit. Only the lowest bit of `bit` is stored.
    #[inline]
    pub fn push(&mut self, bit: u8) -> Result<()> {
        if self.is_full() {
            return Err(OddbitsError::capacity_exceeded(self.capacity()));
        }

        self.bits[self.head] = bit & 1;
        self.head = (self.head + 1) & self.mask;
        self.count += 1;
        Ok(())
    }

    /// Remove and return the oldest bit.
    #[inline]
    pub fn pop(&mut self) -> Result<u8> {
        if self.is_empty() {
            return Err(OddbitsError::RingUnderflow);
        }

        let bit = self.bits[self.tail];
        self.tail = (self.tail + 1) & self.mask;
        self.count -= 1;
        Ok(bit)
    }
}
