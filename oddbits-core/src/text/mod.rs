//! Byte-at-a-time converters between binary data and text representations.
//!
//! - [`ascii`]: binary ⇄ ASCII `0`/`1` strings
//! - [`hex`]: binary ⇄ hexadecimal
//! - [`decimal`]: binary words ⇄ unsigned decimal numbers
//!
//! All of them implement [`Transcoder`](crate::Transcoder) and can be driven
//! by the same [`StreamPump`](crate::StreamPump) as the oddball codec.
//! Text input is lenient: characters that are not part of the notation are
//! skipped (or act as separators) rather than rejected.

pub mod ascii;
pub mod decimal;
pub mod hex;

pub use ascii::{AsciiToBin, BinToAscii};
pub use decimal::{BinToDec, ByteOrder, DecToBin};
pub use hex::{BinToHex, HexToBin};

/// Default number of bits per line for ASCII-binary output.
pub const DEFAULT_ASCII_LINE_WIDTH: usize = 32;

/// Default number of bytes per line for hex output.
pub const DEFAULT_HEX_LINE_WIDTH: usize = 32;

/// Default word width in bytes for decimal conversion.
pub const DEFAULT_WORD_WIDTH: usize = 4;
