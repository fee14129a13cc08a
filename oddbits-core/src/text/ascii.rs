//! Binary ⇄ ASCII-binary (`01001001`) conversion.

use crate::bitstream::{BitOrder, bits_of};
use crate::error::{OddbitsError, Result};
use crate::traits::Transcoder;

/// Writes every input bit as an ASCII `'0'` or `'1'`.
#[derive(Debug, Clone)]
pub struct BinToAscii {
    /// Bits per output line.
    width: usize,
    order: BitOrder,
    /// Insert a space after every 8 bits within a line.
    spaces: bool,
    /// Bits written on the current line.
    line_bits: usize,
    last_was_newline: bool,
}

impl BinToAscii {
    /// Create a converter writing `width` bits per line.
    pub fn new(width: usize, order: BitOrder) -> Result<Self> {
        if width == 0 {
            return Err(OddbitsError::invalid_width("line width", width, 1, usize::MAX));
        }
        Ok(Self {
            width,
            order,
            spaces: false,
            line_bits: 0,
            last_was_newline: false,
        })
    }

    /// Separate each group of 8 bits with a space.
    pub fn with_spaces(mut self, spaces: bool) -> Self {
        self.spaces = spaces;
        self
    }
}

impl Transcoder for BinToAscii {
    fn transcode(&mut self, input: &[u8], output: &mut Vec<u8>) -> Result<usize> {
        let start = output.len();
        output.reserve(input.len() * 9);

        for &byte in input {
            for bit in bits_of(byte, self.order) {
                output.push(b'0' + bit);
                self.line_bits += 1;

                if self.line_bits == self.width {
                    output.push(b'\n');
                    self.line_bits = 0;
                    self.last_was_newline = true;
                } else {
                    self.last_was_newline = false;
                    if self.spaces && self.line_bits % 8 == 0 {
                        output.push(b' ');
                    }
                }
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
        self.line_bits = 0;
        self.last_was_newline = false;
    }
}

/// Reads ASCII `'0'`/`'1'` characters back into bytes.
///
/// Every other character is ignored. A byte is emitted for each eight bits;
/// an incomplete final byte is dropped.
#[derive(Debug, Clone, Default)]
pub struct AsciiToBin {
    order: BitOrder,
    acc: u8,
    bits: u8,
}

impl AsciiToBin {
    /// Create a converter; `order` says whether the first character is the
    /// least or the most significant bit of its byte.
    pub fn new(order: BitOrder) -> Self {
        Self {
            order,
            acc: 0,
            bits: 0,
        }
    }
}

impl Transcoder for AsciiToBin {
    fn transcode(&mut self, input: &[u8], output: &mut Vec<u8>) -> Result<usize> {
        let start = output.len();

        for &ch in input {
            let bit = match ch {
                b'0' => 0,
                b'1' => 1,
                _ => continue,
            };

            self.acc = match self.order {
                BitOrder::LsbFirst => (self.acc >> 1) | (bit << 7),
                BitOrder::MsbFirst => (self.acc << 1) | bit,
            };
            self.bits += 1;

            if self.bits == 8 {
                output.push(self.acc);
                self.acc = 0;
                self.bits = 0;
            }
        }

        Ok(output.len() - start)
    }

    fn finish(&mut self, _output: &mut Vec<u8>) -> Result<usize> {
        if self.bits > 0 {
            tracing::debug!(bits = self.bits, "dropping incomplete trailing byte");
        }
        self.reset();
        Ok(0)
    }

    fn reset(&mut self) {
        self.acc = 0;
        self.bits = 0;
    }

    fn pending_bits(&self) -> usize {
        usize::from(self.bits)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bin_to_ascii_lsb_first() {
        let mut conv = BinToAscii::new(32, BitOrder::LsbFirst).unwrap();
        assert_eq!(conv.transcode_all(&[0xA5]).unwrap(), b"10100101\n");
    }

    #[test]
    fn test_bin_to_ascii_msb_first() {
        let mut conv = BinToAscii::new(32, BitOrder::MsbFirst).unwrap();
        assert_eq!(conv.transcode_all(&[0x3C]).unwrap(), b"00111100\n");
    }

    #[test]
    fn test_bin_to_ascii_line_width() {
        let mut conv = BinToAscii::new(4, BitOrder::MsbFirst).unwrap();
        // Ends on a newline, so finish adds nothing.
        assert_eq!(conv.transcode_all(&[0xF0]).unwrap(), b"1111\n0000\n");
    }

    #[test]
    fn test_bin_to_ascii_spaces() {
        let mut conv = BinToAscii::new(16, BitOrder::MsbFirst)
            .unwrap()
            .with_spaces(true);
        assert_eq!(
            conv.transcode_all(&[0xFF, 0x00, 0x0F]).unwrap(),
            b"11111111 00000000\n00001111 \n"
        );
    }

    #[test]
    fn test_bin_to_ascii_empty_input() {
        let mut conv = BinToAscii::new(32, BitOrder::LsbFirst).unwrap();
        assert_eq!(conv.transcode_all(&[]).unwrap(), b"\n");
    }

    #[test]
    fn test_bin_to_ascii_zero_width() {
        assert!(BinToAscii::new(0, BitOrder::LsbFirst).is_err());
    }

    #[test]
    fn test_ascii_to_bin_lsb_first() {
        let mut conv = AsciiToBin::new(BitOrder::LsbFirst);
        assert_eq!(conv.transcode_all(b"10100101").unwrap(), vec![0xA5]);
    }

    #[test]
    fn test_ascii_to_bin_msb_first_skips_noise() {
        let mut conv = AsciiToBin::new(BitOrder::MsbFirst);
        assert_eq!(conv.transcode_all(b"0011 1100\n1x").unwrap(), vec![0x3C]);
    }

    #[test]
    fn test_ascii_to_bin_carries_partial_byte() {
        let mut conv = AsciiToBin::new(BitOrder::MsbFirst);
        let mut out = Vec::new();
        conv.transcode(b"101", &mut out).unwrap();
        assert_eq!(conv.pending_bits(), 3);
        conv.transcode(b"00001", &mut out).unwrap();
        assert_eq!(out, vec![0b1010_0001]);
        assert_eq!(conv.pending_bits(), 0);
    }

    #[test]
    fn test_ascii_roundtrip() {
        let data: Vec<u8> = (0..=255u8).collect();
        for order in [BitOrder::LsbFirst, BitOrder::MsbFirst] {
            let text = BinToAscii::new(24, order)
                .unwrap()
                .with_spaces(true)
                .transcode_all(&data)
                .unwrap();
            let back = AsciiToBin::new(order).transcode_all(&text).unwrap();
            assert_eq!(back, data);
        }
    }
}
