//! Binary ⇄ hexadecimal conversion.

use crate::error::{OddbitsError, Result};
use crate::traits::Transcoder;

const HEX_DIGITS: &[u8; 16] = b"0123456789ABCDEF";

/// Writes each byte as two uppercase hex digits, `width` bytes per line.
#[derive(Debug, Clone)]
pub struct BinToHex {
    width: usize,
    line_bytes: usize,
    last_was_newline: bool,
}

impl BinToHex {
    /// Create a converter writing `width` bytes per line.
    pub fn new(width: usize) -> Result<Self> {
        if width == 0 {
            return Err(OddbitsError::invalid_width("line width", width, 1, usize::MAX));
        }
        Ok(Self {
            width,
            line_bytes: 0,
            last_was_newline: false,
        })
    }
}

impl Transcoder for BinToHex {
    fn transcode(&mut self, input: &[u8], output: &mut Vec<u8>) -> Result<usize> {
        let start = output.len();
        output.reserve(input.len() * 2 + input.len() / self.width + 1);

        for &byte in input {
            output.push(HEX_DIGITS[usize::from(byte >> 4)]);
            output.push(HEX_DIGITS[usize::from(byte & 0x0F)]);
            self.line_bytes += 1;

            if self.line_bytes == self.width {
                output.push(b'\n');
                self.line_bytes = 0;
                self.last_was_newline = true;
            } else {
                self.last_was_newline = false;
            }
        }

        Ok(output.len() - start)
    }

    fn finish(&mut self, output: &mut Vec<u8>) -> Result<usize> {
        let written = if self.last_was_newline {
            0
        } else {
            output.push(b'\n');
            1
        };
        self.reset();
        Ok(written)
    }

    fn reset(&mut self) {
        self.line_bytes = 0;
        self.last_was_newline = false;
    }
}

/// Value of an ASCII hex digit.
fn hex_value(ch: u8) -> Option<u8> {
    match ch {
        b'0'..=b'9' => Some(ch - b'0'),
        b'a'..=b'f' => Some(ch - b'a' + 10),
        b'A'..=b'F' => Some(ch - b'A' + 10),
        _ => None,
    }
}

/// Reads pairs of hex digits back into bytes.
///
/// Non-hex characters are skipped; an odd trailing digit is dropped.
#[derive(Debug, Clone, Default)]
pub struct HexToBin {
    high: Option<u8>,
}

impl HexToBin {
    /// Create a converter.
    pub fn new() -> Self {
        Self::default()
    }
}

impl Transcoder for HexToBin {
    fn transcode(&mut self, input: &[u8], output: &mut Vec<u8>) -> Result<usize> {
        let start = output.len();
        output.reserve(input.len() / 2);

        for nibble in input.iter().filter_map(|&ch| hex_value(ch)) {
            match self.high.take() {
                Some(high) => output.push((high << 4) | nibble),
                None => self.high = Some(nibble),
            }
        }

        Ok(output.len() - start)
    }

    fn finish(&mut self, _output: &mut Vec<u8>) -> Result<usize> {
        if self.high.take().is_some() {
            tracing::debug!("dropping unpaired trailing hex digit");
        }
        Ok(0)
    }

    fn reset(&mut self) {
        self.high = None;
    }

    fn pending_bits(&self) -> usize {
        if self.high.is_some() { 4 } else { 0 }
    }
}
