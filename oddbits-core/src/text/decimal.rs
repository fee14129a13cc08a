//! Binary words ⇄ unsigned decimal numbers, one per line.

use crate::error::{OddbitsError, Result};
use crate::traits::Transcoder;
use std::io::Write;

/// Largest supported word width in bytes.
pub const MAX_WORD_WIDTH: usize = 8;

/// Byte order of multi-byte words.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ByteOrder {
    /// Least significant byte first.
    #[default]
    Little,
    /// Most significant byte first.
    Big,
}

impl ByteOrder {
    /// Order selected by a "big endian" flag.
    pub fn from_big_endian(big_endian: bool) -> Self {
        if big_endian { Self::Big } else { Self::Little }
    }
}

fn check_word_width(width: usize) -> Result<()> {
    if !(1..=MAX_WORD_WIDTH).contains(&width) {
        return Err(OddbitsError::invalid_width(
            "word width",
            width,
            1,
            MAX_WORD_WIDTH,
        ));
    }
    Ok(())
}

/// Reads `width`-byte words and prints each as an unsigned decimal line.
///
/// A trailing partial word is dropped.
#[derive(Debug, Clone)]
pub struct BinToDec {
    width: usize,
    order: ByteOrder,
    word: Vec<u8>,
}

impl BinToDec {
    /// Create a converter for `width`-byte words (1-8).
    pub fn new(width: usize, order: ByteOrder) -> Result<Self> {
        check_word_width(width)?;
        Ok(Self {
            width,
            order,
            word: Vec::with_capacity(width),
        })
    }

    fn word_value(&self) -> u64 {
        match self.order {
            ByteOrder::Little => self
                .word
                .iter()
                .rev()
                .fold(0u64, |acc, &b| (acc << 8) | u64::from(b)),
            ByteOrder::Big => self
                .word
                .iter()
                .fold(0u64, |acc, &b| (acc << 8) | u64::from(b)),
        }
    }
}

impl Transcoder for BinToDec {
    fn transcode(&mut self, input: &[u8], output: &mut Vec<u8>) -> Result<usize> {
        let start = output.len();

        for &byte in input {
            self.word.push(byte);
            if self.word.len() == self.width {
                writeln!(output, "{}", self.word_value())?;
                self.word.clear();
            }
        }

        Ok(output.len() - start)
    }

    fn finish(&mut self, _output: &mut Vec<u8>) -> Result<usize> {
        if !self.word.is_empty() {
            tracing::debug!(bytes = self.word.len(), "dropping incomplete trailing word");
        }
        self.reset();
        Ok(0)
    }

    fn reset(&mut self) {
        self.word.clear();
    }

    fn pending_bits(&self) -> usize {
        self.word.len() * 8
    }
}

/// Parses runs of ASCII digits and writes each number as a `width`-byte word.
///
/// Any non-digit byte ends the current number. Numbers larger than
/// `u64::MAX` saturate; only the low `width` bytes are written.
#[derive(Debug, Clone)]
pub struct DecToBin {
    width: usize,
    order: ByteOrder,
    value: u64,
    digits: usize,
}

impl DecToBin {
    /// Create a converter writing `width`-byte words (1-8).
    pub fn new(width: usize, order: ByteOrder) -> Result<Self> {
        check_word_width(width)?;
        Ok(Self {
            width,
            order,
            value: 0,
            digits: 0,
        })
    }

    fn emit(&mut self, output: &mut Vec<u8>) -> usize {
        if self.digits == 0 {
            return 0;
        }

        let bytes = self.value.to_le_bytes();
        let word = &bytes[..self.width];
        match self.order {
            ByteOrder::Little => output.extend_from_slice(word),
            ByteOrder::Big => output.extend(word.iter().rev()),
        }

        self.value = 0;
        self.digits = 0;
        self.width
    }
}

impl Transcoder for DecToBin {
    fn transcode(&mut self, input: &[u8], output: &mut Vec<u8>) -> Result<usize> {
        let mut produced = 0;

        for &ch in input {
            if ch.is_ascii_digit() {
                self.value = self
                    .value
                    .saturating_mul(10)
                    .saturating_add(u64::from(ch - b'0'));
                self.digits += 1;
            } else {
                produced += self.emit(output);
            }
        }

        Ok(produced)
    }

    fn finish(&mut self, output: &mut Vec<u8>) -> Result<usize> {
        Ok(self.emit(output))
    }

    fn reset(&mut self) {
        self.value = 0;
        self.digits = 0;
    }

    /// Counts the held digit characters as raw input bytes, 8 bits each.
    /// An unfinished number has no data width of its own until it is
    /// emitted as a `width`-byte word.
    fn pending_bits(&self) -> usize {
        self.digits * 8
    }
}
