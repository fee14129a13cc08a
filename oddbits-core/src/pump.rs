//! Chunked pull loop from a reader, through a [`Transcoder`], to a writer.
//!
//! The pump reads at most one chunk at a time, converts it completely and
//! writes every produced byte before asking for the next chunk. Nothing is
//! buffered across chunks except what the transcoder itself carries.
//!
//! ```text
//! Streaming ──(chunk read)──▶ Streaming
//!     │
//!     └──(zero-length read)──▶ Done
//! ```

use crate::config::{DEFAULT_CHUNK_SIZE, check_chunk_size};
use crate::error::Result;
use crate::traits::Transcoder;
use std::io::{ErrorKind, Read, Write};

/// State of a [`StreamPump`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PumpState {
    /// Input may still produce data.
    Streaming,
    /// A zero-length read was seen; the run is over.
    Done,
}

/// Counters collected while pumping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PumpStats {
    /// Number of non-empty chunks read.
    pub chunks: u64,
    /// Bytes read from the input.
    pub bytes_in: u64,
    /// Bytes written to the output.
    pub bytes_out: u64,
}

/// Drives a transcoder over a reader/writer pair.
#[derive(Debug)]
pub struct StreamPump<R: Read, W: Write> {
    reader: R,
    writer: W,
    chunk_size: usize,
    state: PumpState,
    stats: PumpStats,
}

impl<R: Read, W: Write> StreamPump<R, W> {
    /// Create a pump with the default chunk size.
    pub fn new(reader: R, writer: W) -> Self {
        Self {
            reader,
            writer,
            chunk_size: DEFAULT_CHUNK_SIZE,
            state: PumpState::Streaming,
            stats: PumpStats::default(),
        }
    }

    /// Create a pump reading `chunk_size` bytes at a time.
    pub fn with_chunk_size(reader: R, writer: W, chunk_size: usize) -> Result<Self> {
        check_chunk_size(chunk_size)?;
        let mut pump = Self::new(reader, writer);
        pump.chunk_size = chunk_size;
        Ok(pump)
    }

    /// Current state.
    pub fn state(&self) -> PumpState {
        self.state
    }

    /// Counters so far.
    pub fn stats(&self) -> PumpStats {
        self.stats
    }

    /// Chunk size in bytes.
    pub fn chunk_size(&self) -> usize {
        self.chunk_size
    }

    /// Consume the pump and return the reader and writer.
    pub fn into_inner(self) -> (R, W) {
        (self.reader, self.writer)
    }

    /// Read into `buf`, retrying interrupted reads.
    fn read_chunk(&mut self, buf: &mut [u8]) -> Result<usize> {
        loop {
            match self.reader.read(buf) {
                Ok(n) => return Ok(n),
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => return Err(e.into()),
            }
        }
    }

    fn emit(&mut self, bytes: &[u8]) -> Result<()> {
        if !bytes.is_empty() {
            self.writer.write_all(bytes)?;
            self.stats.bytes_out += bytes.len() as u64;
        }
        Ok(())
    }

    /// Pump until the input is exhausted.
    ///
    /// Calling `run` again once the pump is [`PumpState::Done`] does nothing.
    pub fn run<T: Transcoder + ?Sized>(&mut self, transcoder: &mut T) -> Result<PumpStats> {
        let mut input = vec![0u8; self.chunk_size];
        let mut output = Vec::new();

        while self.state == PumpState::Streaming {
            let len = self.read_chunk(&mut input)?;
            output.clear();

            if len == 0 {
                transcoder.finish(&mut output)?;
                self.emit(&output)?;
                self.writer.flush()?;
                self.state = PumpState::Done;
                break;
            }

            self.stats.chunks += 1;
            self.stats.bytes_in += len as u64;

            let produced = transcoder.transcode(&input[..len], &mut output)?;
            tracing::trace!(
                chunk = self.stats.chunks,
                bytes = len,
                produced,
                carry_bits = transcoder.pending_bits(),
                "chunk processed"
            );
            self.emit(&output)?;
        }

        tracing::debug!(
            chunks = self.stats.chunks,
            bytes_in = self.stats.bytes_in,
            bytes_out = self.stats.bytes_out,
            "stream finished"
        );
        Ok(self.stats)
    }
}

/// Convenience wrapper: pump `reader` through `transcoder` into `writer`.
pub fn pump_stream<R, W, T>(
    reader: R,
    writer: W,
    chunk_size: usize,
    transcoder: &mut T,
) -> Result<PumpStats>
where
    R: Read,
    W: Write,
    T: Transcoder + ?Sized,
{
    StreamPump::with_chunk_size(reader, writer, chunk_size)?.run(transcoder)
}
