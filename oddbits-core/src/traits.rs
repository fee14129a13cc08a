//! Core trait implemented by every stream converter.

use crate::error::Result;

/// A chunk-at-a-time stream converter.
///
/// Implementations keep whatever carry they need between calls (bits that do
/// not yet form a symbol, half-read words, an unfinished decimal number) and
/// release it, or drop it, in [`finish`](Transcoder::finish).
pub trait Transcoder {
    /// Convert one chunk of input, appending the produced bytes to `output`.
    ///
    /// Returns the number of bytes appended. Inputs of any length are
    /// accepted.
    fn transcode(&mut self, input: &[u8], output: &mut Vec<u8>) -> Result<usize>;

    /// Signal end of input, appending any final bytes to `output`.
    fn finish(&mut self, output: &mut Vec<u8>) -> Result<usize>;

    /// Reset the converter to its initial state.
    fn reset(&mut self);

    /// Number of input bits currently held back as carry.
    fn pending_bits(&self) -> usize {
        0
    }

    /// Convert a complete input at once (convenience method).
    fn transcode_all(&mut self, input: &[u8]) -> Result<Vec<u8>> {
        let mut output = Vec::new();
        self.transcode(input, &mut output)?;
        self.finish(&mut output)?;
        Ok(output)
    }
}

impl<T: Transcoder + ?Sized> Transcoder for Box<T> {
    fn transcode(&mut self, input: &[u8], output: &mut Vec<u8>) -> Result<usize> {
        (**self).transcode(input, output)
    }

    fn finish(&mut self, output: &mut Vec<u8>) -> Result<usize> {
        (**self).finish(output)
    }

    fn reset(&mut self) {
        (**self).reset()
    }

    fn pending_bits(&self) -> usize {
        (**self).pending_bits()
    }
}
