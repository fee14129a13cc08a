//! Error types for oddbits operations.
//!
//! Every converter in this crate accepts any byte value as input, so there is
//! no "malformed data" error. What remains are configuration errors (raised
//! before a stream is touched), I/O errors from the underlying reader/writer,
//! and bit ring faults, which indicate a sizing defect rather than bad data.

use std::io;
use thiserror::Error;

/// The main error type for oddbits operations.
#[derive(Debug, Error)]
pub enum OddbitsError {
    /// I/O error from underlying reader/writer.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Bits per symbol outside the supported range.
    #[error("Invalid bits per symbol: {bits} (must be 1-8)")]
    InvalidSymbolWidth {
        /// The rejected symbol width.
        bits: u8,
    },

    /// A line or word width outside its allowed range.
    #[error("Invalid {name}: {width} (must be {min}-{max})")]
    InvalidWidth {
        /// Which width was rejected (e.g. "line width").
        name: &'static str,
        /// The rejected value.
        width: usize,
        /// Smallest accepted value.
        min: usize,
        /// Largest accepted value.
        max: usize,
    },

    /// Chunk size outside `1..=MAX_CHUNK_SIZE`.
    #[error(
        "Invalid chunk size: {size} (must be between 1 and {max} bytes)",
        max = crate::config::MAX_CHUNK_SIZE
    )]
    InvalidChunkSize {
        /// The rejected chunk size.
        size: usize,
    },

    /// Push into a full bit ring.
    #[error("Bit ring capacity exceeded: ring holds at most {capacity} bits")]
    CapacityExceeded {
        /// Capacity of the ring in bits.
        capacity: usize,
    },

    /// Pop from an empty bit ring.
    #[error("Bit ring underflow: pop from an empty ring")]
    RingUnderflow,
}

/// Result type alias for oddbits operations.
pub type Result<T> = std::result::Result<T, OddbitsError>;

impl OddbitsError {
    /// Create an invalid symbol width error.
    pub fn invalid_symbol_width(bits: u8) -> Self {
        Self::InvalidSymbolWidth { bits }
    }

    /// Create an invalid width error.
    pub fn invalid_width(name: &'static str, width: usize, min: usize, max: usize) -> Self {
        Self::InvalidWidth {
            name,
            width,
            min,
            max,
        }
    }

    /// Create an invalid chunk size error.
    pub fn invalid_chunk_size(size: usize) -> Self {
        Self::InvalidChunkSize { size }
    }

    /// Create a capacity exceeded error.
    pub fn capacity_exceeded(capacity: usize) -> Self {
        Self::CapacityExceeded { capacity }
    }

    /// Returns true for errors raised while validating options.
    pub fn is_config_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidSymbolWidth { .. } | Self::InvalidWidth { .. } | Self::InvalidChunkSize { .. }
        )
    }
}
