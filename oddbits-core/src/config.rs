//! Oddball codec configuration.

use crate::bitstream::BitOrder;
use crate::error::{OddbitsError, Result};
use crate::ringbuffer::required_capacity;

/// Default number of bytes read per chunk.
pub const DEFAULT_CHUNK_SIZE: usize = 2048;

/// Largest accepted chunk size (1 MiB). The bit ring holds one byte per bit.
pub const MAX_CHUNK_SIZE: usize = 1 << 20;

/// Check a chunk size against `1..=MAX_CHUNK_SIZE`.
pub fn check_chunk_size(chunk_size: usize) -> Result<()> {
    if !(1..=MAX_CHUNK_SIZE).contains(&chunk_size) {
        return Err(OddbitsError::invalid_chunk_size(chunk_size));
    }
    Ok(())
}

/// Smallest supported symbol width in bits.
pub const MIN_BITS_PER_SYMBOL: u8 = 1;

/// Largest supported symbol width in bits.
pub const MAX_BITS_PER_SYMBOL: u8 = 8;

/// Parameters shared by the unpack and pack directions.
///
/// The two bit orders are independent axes:
///
/// | field          | unpack (bytes → symbols)  | pack (symbols → bytes)     |
/// |----------------|---------------------------|----------------------------|
/// | `byte_order`   | extraction from input     | assembly of output bytes   |
/// | `symbol_order` | assembly of output symbols| extraction from input      |
///
/// Packing with the configuration that produced an unpacked stream restores
/// the original bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OddballConfig {
    /// Symbol width in bits (1-8).
    pub bits_per_symbol: u8,
    /// Bit order inside packed bytes.
    pub byte_order: BitOrder,
    /// Bit order inside symbols.
    pub symbol_order: BitOrder,
    /// Bytes processed per chunk.
    pub chunk_size: usize,
}

impl Default for OddballConfig {
    fn default() -> Self {
        Self {
            bits_per_symbol: 1,
            byte_order: BitOrder::LsbFirst,
            symbol_order: BitOrder::LsbFirst,
            chunk_size: DEFAULT_CHUNK_SIZE,
        }
    }
}

impl OddballConfig {
    /// Create a configuration for `bits_per_symbol`-bit symbols with default
    /// orders and chunk size.
    pub fn new(bits_per_symbol: u8) -> Result<Self> {
        Self::default().with_bits_per_symbol(bits_per_symbol)
    }

    /// Set the symbol width.
    pub fn with_bits_per_symbol(mut self, bits_per_symbol: u8) -> Result<Self> {
        if !(MIN_BITS_PER_SYMBOL..=MAX_BITS_PER_SYMBOL).contains(&bits_per_symbol) {
            return Err(OddbitsError::invalid_symbol_width(bits_per_symbol));
        }
        self.bits_per_symbol = bits_per_symbol;
        Ok(self)
    }

    /// Set the bit order inside packed bytes.
    pub fn with_byte_order(mut self, order: BitOrder) -> Self {
        self.byte_order = order;
        self
    }

    /// Set the bit order inside symbols.
    pub fn with_symbol_order(mut self, order: BitOrder) -> Self {
        self.symbol_order = order;
        self
    }

    /// Set the chunk size in bytes.
    pub fn with_chunk_size(mut self, chunk_size: usize) -> Result<Self> {
        check_chunk_size(chunk_size)?;
        self.chunk_size = chunk_size;
        Ok(self)
    }

    /// Re-check every field. Useful when the struct was built literally.
    pub fn validate(&self) -> Result<()> {
        if !(MIN_BITS_PER_SYMBOL..=MAX_BITS_PER_SYMBOL).contains(&self.bits_per_symbol) {
            return Err(OddbitsError::invalid_symbol_width(self.bits_per_symbol));
        }
        check_chunk_size(self.chunk_size)
    }

    /// Bit ring capacity needed to stream with this configuration.
    pub fn ring_capacity(&self) -> Result<usize> {
        required_capacity(self.chunk_size, self.bits_per_symbol)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = OddballConfig::default();
        assert_eq!(config.bits_per_symbol, 1);
        assert_eq!(config.byte_order, BitOrder::LsbFirst);
        assert_eq!(config.symbol_order, BitOrder::LsbFirst);
        assert_eq!(config.chunk_size, DEFAULT_CHUNK_SIZE);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_symbol_width_range() {
        assert!(OddballConfig::new(0).is_err());
        assert!(OddballConfig::new(9).is_err());
        for bits in 1..=8 {
            assert_eq!(OddballConfig::new(bits).unwrap().bits_per_symbol, bits);
        }
    }

    #[test]
    fn test_builder() {
        let config = OddballConfig::new(3)
            .unwrap()
            .with_byte_order(BitOrder::MsbFirst)
            .with_symbol_order(BitOrder::MsbFirst)
            .with_chunk_size(7)
            .unwrap();
        assert_eq!(config.bits_per_symbol, 3);
        assert!(config.byte_order.is_msb_first());
        assert!(config.symbol_order.is_msb_first());
        assert_eq!(config.ring_capacity().unwrap(), 56 + 7);
    }

    #[test]
    fn test_zero_chunk_rejected() {
        assert!(OddballConfig::default().with_chunk_size(0).is_err());

        let literal = OddballConfig {
            bits_per_symbol: 12,
            ..OddballConfig::default()
        };
        assert!(literal.validate().is_err());
    }

    #[test]
    fn test_oversized_chunk_rejected() {
        assert!(OddballConfig::default().with_chunk_size(MAX_CHUNK_SIZE).is_ok());
        assert!(matches!(
            OddballConfig::new(3).unwrap().with_chunk_size(usize::MAX / 4),
            Err(OddbitsError::InvalidChunkSize { .. })
        ));
        assert!(matches!(
            OddballConfig::default().with_chunk_size(MAX_CHUNK_SIZE + 1),
            Err(OddbitsError::InvalidChunkSize { size }) if size == MAX_CHUNK_SIZE + 1
        ));

        let literal = OddballConfig {
            chunk_size: 1_000_000_000,
            ..OddballConfig::default()
        };
        assert!(matches!(
            literal.validate(),
            Err(OddbitsError::InvalidChunkSize { .. })
        ));
    }
}
