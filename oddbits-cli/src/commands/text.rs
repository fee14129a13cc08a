//! Text conversion commands: ASCII-binary, hex and decimal.

use super::{BitOrderArgs, IoArgs, run_transcoder};
use oddbits_core::{AsciiToBin, BinToAscii, BinToDec, BinToHex, ByteOrder, DecToBin, HexToBin};

type CmdResult = Result<(), Box<dyn std::error::Error>>;

/// Binary to ASCII `0`/`1` text.
pub fn cmd_to_ascii(io: &IoArgs, width: usize, order: BitOrderArgs, spaces: bool) -> CmdResult {
    let mut conv = BinToAscii::new(width, order.order())?.with_spaces(spaces);
    run_transcoder("to-ascii", io, &mut conv)
}

/// ASCII `0`/`1` text to binary.
pub fn cmd_from_ascii(io: &IoArgs, order: BitOrderArgs) -> CmdResult {
    let mut conv = AsciiToBin::new(order.order());
    run_transcoder("from-ascii", io, &mut conv)
}

/// Binary to uppercase hex lines.
pub fn cmd_to_hex(io: &IoArgs, width: usize) -> CmdResult {
    let mut conv = BinToHex::new(width)?;
    run_transcoder("to-hex", io, &mut conv)
}

/// Hex text to binary.
pub fn cmd_from_hex(io: &IoArgs) -> CmdResult {
    let mut conv = HexToBin::new();
    run_transcoder("from-hex", io, &mut conv)
}

/// Binary words to decimal lines.
pub fn cmd_to_dec(io: &IoArgs, width: usize, big_endian: bool) -> CmdResult {
    let mut conv = BinToDec::new(width, ByteOrder::from_big_endian(big_endian))?;
    run_transcoder("to-dec", io, &mut conv)
}

/// Decimal numbers to binary words.
pub fn cmd_from_dec(io: &IoArgs, width: usize, big_endian: bool) -> CmdResult {
    let mut conv = DecToBin::new(width, ByteOrder::from_big_endian(big_endian))?;
    run_transcoder("from-dec", io, &mut conv)
}

