//! # oddbits core
//!
//! Streaming converters between binary data and the representations used
//! when feeding raw entropy-source output to statistical test suites.
//!
//! - [`bitstream`]: bit extraction/assembly by [`BitOrder`]
//! - [`ringbuffer`]: [`BitRing`], a bounded circular bit buffer
//! - [`oddball`]: NIST SP800-90B one-symbol-per-byte codec
//! - [`pump`]: [`StreamPump`], chunked reader → transcoder → writer loop
//! - [`text`]: ASCII-binary, hex and decimal converters
//! - [`traits`]: the [`Transcoder`] trait all converters implement
//! - [`config`]: oddball codec configuration
//! - [`error`]: error types
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────┐   chunk   ┌─────────────────────────────┐   bytes   ┌──────────────┐
//! │ Read (file / │ ────────▶ │ Transcoder                  │ ────────▶ │ Write (file /│
//! │ stdin)       │           │  SymbolUnpacker / Packer    │           │ stdout)      │
//! └──────────────┘           │   extract_bit → BitRing →   │           └──────────────┘
//!        ▲                   │   assemble_bit              │
//!        └── StreamPump ─────┴─────────────────────────────┘
//! ```
//!
//! ## Example
//!
//! ```rust
//! use oddbits_core::{OddballConfig, StreamPump, SymbolUnpacker};
//! use std::io::Cursor;
//!
//! let config = OddballConfig::new(1).unwrap();
//! let mut unpacker = SymbolUnpacker::new(config).unwrap();
//!
//! let mut output = Vec::new();
//! let mut pump = StreamPump::new(Cursor::new(vec![0xA5]), &mut output);
//! let stats = pump.run(&mut unpacker).unwrap();
//!
//! assert_eq!(stats.bytes_out, 8);
//! assert_eq!(output, [1, 0, 1, 0, 0, 1, 0, 1]);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]
#![allow(clippy::module_name_repetitions)]

pub mod bitstream;
pub mod config;
pub mod error;
pub mod oddball;
pub mod pump;
pub mod ringbuffer;
pub mod text;
pub mod traits;

// Re-exports for convenience
pub use bitstream::{BitOrder, assemble_bit, extract_bit};
pub use config::{DEFAULT_CHUNK_SIZE, MAX_CHUNK_SIZE, OddballConfig};
pub use error::{OddbitsError, Result};
pub use oddball::{SymbolPacker, SymbolUnpacker};
pub use pump::{PumpState, PumpStats, StreamPump, pump_stream};
pub use ringbuffer::{BitRing, required_capacity};
pub use text::{AsciiToBin, BinToAscii, BinToDec, BinToHex, ByteOrder, DecToBin, HexToBin};
pub use traits::Transcoder;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::bitstream::BitOrder;
    pub use crate::config::OddballConfig;
    pub use crate::error::{OddbitsError, Result};
    pub use crate::oddball::{SymbolPacker, SymbolUnpacker};
    pub use crate::pump::{PumpStats, StreamPump};
    pub use crate::traits::Transcoder;
}
