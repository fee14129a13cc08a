//! NIST oddball symbol codec.
//!
//! SP800-90B entropy assessment tools read samples in a "one symbol per byte"
//! layout: each byte carries one `bits_per_symbol`-bit sample in its low bits.
//! [`SymbolUnpacker`] converts densely packed binary data into that layout and
//! [`SymbolPacker`] converts it back.
//!
//! Both directions stream bits through a [`BitRing`]. After every chunk all
//! complete groups (symbols when unpacking, bytes when packing) are drained,
//! and the remaining partial group is carried into the next chunk. At end of
//! input a partial group is discarded.
//!
//! # Example
//!
//! ```
//! use oddbits_core::{OddballConfig, SymbolPacker, SymbolUnpacker, Transcoder};
//!
//! let config = OddballConfig::new(4).unwrap();
//!
//! let symbols = SymbolUnpacker::new(config).unwrap().transcode_all(&[0x3C]).unwrap();
//! assert_eq!(symbols, [0x0C, 0x03]);
//!
//! let packed = SymbolPacker::new(config).unwrap().transcode_all(&symbols).unwrap();
//! assert_eq!(packed, [0x3C]);
//! ```

use crate::bitstream::{BitOrder, assemble_bit, extract_bit};
use crate::config::OddballConfig;
use crate::error::Result;
use crate::ringbuffer::BitRing;
use crate::traits::Transcoder;

/// Pop `width` bits and fold them into one value.
#[inline]
fn pop_group(ring: &mut BitRing, width: u8, order: BitOrder) -> Result<u8> {
    let mut value = 0u8;
    for k in 0..width {
        let bit = ring.pop()?;
        value = assemble_bit(value, bit, k, order);
    }
    Ok(value)
}

/// Drain every complete `width`-bit group from the ring into `output`.
fn drain_groups(
    ring: &mut BitRing,
    width: u8,
    order: BitOrder,
    output: &mut Vec<u8>,
) -> Result<usize> {
    let groups = ring.available() / usize::from(width);
    output.reserve(groups);
    for _ in 0..groups {
        output.push(pop_group(ring, width, order)?);
    }
    Ok(groups)
}

// ============================================================================
// Unpack: packed bits -> one symbol per byte
// ============================================================================

/// Splits packed binary data into `bits_per_symbol`-bit symbols, one per
/// output byte.
#[derive(Debug, Clone)]
pub struct SymbolUnpacker {
    config: OddballConfig,
    ring: BitRing,
}

impl SymbolUnpacker {
    /// Create an unpacker. Fails if the configuration is invalid.
    pub fn new(config: OddballConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            ring: BitRing::new(config.ring_capacity()?),
        })
    }

    /// The configuration in use.
    pub fn config(&self) -> &OddballConfig {
        &self.config
    }

    fn ingest(&mut self, chunk: &[u8]) -> Result<()> {
        let order = self.config.byte_order;
        for &byte in chunk {
            for j in 0..8 {
                self.ring.push(extract_bit(byte, j, order))?;
            }
        }
        Ok(())
    }
}

impl Transcoder for SymbolUnpacker {
    fn transcode(&mut self, input: &[u8], output: &mut Vec<u8>) -> Result<usize> {
        let mut produced = 0;
        for chunk in input.chunks(self.config.chunk_size) {
            self.ingest(chunk)?;
            produced += drain_groups(
                &mut self.ring,
                self.config.bits_per_symbol,
                self.config.symbol_order,
                output,
            )?;
        }
        Ok(produced)
    }

    fn finish(&mut self, _output: &mut Vec<u8>) -> Result<usize> {
        if !self.ring.is_empty() {
            tracing::debug!(
                carry_bits = self.ring.available(),
                "discarding incomplete trailing symbol"
            );
            self.ring.clear();
        }
        Ok(0)
    }

    fn reset(&mut self) {
        self.ring.clear();
    }

    fn pending_bits(&self) -> usize {
        self.ring.available()
    }
}

// ============================================================================
// Pack: one symbol per byte -> packed bits
// ============================================================================

/// Concatenates the low `bits_per_symbol` bits of every input byte into
/// densely packed bytes.
#[derive(Debug, Clone)]
pub struct SymbolPacker {
    config: OddballConfig,
    ring: BitRing,
}

impl SymbolPacker {
    /// Create a packer. Fails if the configuration is invalid.
    pub fn new(config: OddballConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            ring: BitRing::new(config.ring_capacity()?),
        })
    }

    /// The configuration in use.
    pub fn config(&self) -> &OddballConfig {
        &self.config
    }

    fn ingest(&mut self, chunk: &[u8]) -> Result<()> {
        let bps = self.config.bits_per_symbol;
        let order = self.config.symbol_order;
        // MSB-first symbols are moved to the top of the byte so extraction
        // can start at bit 7.
        let shift = if order.is_msb_first() { 8 - bps } else { 0 };

        for &byte in chunk {
            let aligned = byte << shift;
            for j in 0..bps {
                self.ring.push(extract_bit(aligned, j, order))?;
            }
        }
        Ok(())
    }
}

impl Transcoder for SymbolPacker {
    fn transcode(&mut self, input: &[u8], output: &mut Vec<u8>) -> Result<usize> {
        let mut produced = 0;
        for chunk in input.chunks(self.config.chunk_size) {
            self.ingest(chunk)?;
            produced += drain_groups(&mut self.ring, 8, self.config.byte_order, output)?;
        }
        Ok(produced)
    }

    fn finish(&mut self, _output: &mut Vec<u8>) -> Result<usize> {
        if !self.ring.is_empty() {
            tracing::debug!(
                carry_bits = self.ring.available(),
                "discarding incomplete trailing byte"
            );
            self.ring.clear();
        }
        Ok(0)
    }

    fn reset(&mut self) {
        self.ring.clear();
    }

    fn pending_bits(&self) -> usize {
        self.ring.available()
    }
}
