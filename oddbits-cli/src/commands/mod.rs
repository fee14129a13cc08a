//! Command implementations for the oddbits CLI.

pub mod oddball;
pub mod text;

pub use oddball::{OddballArgs, cmd_pack, cmd_unpack};
pub use text::{cmd_from_ascii, cmd_from_dec, cmd_from_hex, cmd_to_ascii, cmd_to_dec, cmd_to_hex};

use crate::utils::{RunReport, open_input, open_output};
use clap::{ArgAction, Args};
use oddbits_core::{BitOrder, DEFAULT_CHUNK_SIZE, Transcoder, pump_stream};
use std::path::PathBuf;
use std::time::Instant;

/// Input/output options shared by every subcommand.
#[derive(Args, Debug, Clone)]
pub struct IoArgs {
    /// Input file (stdin when omitted)
    pub input: Option<PathBuf>,

    /// Output file (stdout when omitted)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Bytes read per chunk
    #[arg(long, default_value_t = DEFAULT_CHUNK_SIZE)]
    pub chunk_size: usize,

    /// Show a progress bar (file input only)
    #[arg(long)]
    pub progress: bool,

    /// Print a JSON run report to stderr
    #[arg(long)]
    pub json: bool,
}

/// `-B` / `-L` bit order selection.
#[derive(Args, Debug, Clone, Copy, Default)]
#[group(multiple = false)]
pub struct BitOrderArgs {
    /// Most significant bit first
    #[arg(short = 'B', long = "bigendian")]
    pub big_endian: bool,

    /// Least significant bit first (default)
    #[arg(short = 'L', long = "littleendian")]
    pub little_endian: bool,
}

impl BitOrderArgs {
    /// Selected order.
    pub fn order(&self) -> BitOrder {
        BitOrder::from_big_endian(self.big_endian)
    }

    /// Whether either flag was given.
    pub fn is_explicit(&self) -> bool {
        self.big_endian || self.little_endian
    }
}

/// Pump the selected input through `transcoder` into the selected output.
pub fn run_transcoder<T: Transcoder + ?Sized>(
    command: &str,
    io: &IoArgs,
    transcoder: &mut T,
) -> Result<(), Box<dyn std::error::Error>> {
    let start = Instant::now();
    let (reader, pb) = open_input(io.input.as_deref(), io.progress)?;
    let writer = open_output(io.output.as_deref())?;

    let stats = pump_stream(reader, writer, io.chunk_size, transcoder)?;
    pb.finish_and_clear();

    let elapsed = start.elapsed();
    tracing::info!(
        command,
        chunks = stats.chunks,
        bytes_in = stats.bytes_in,
        bytes_out = stats.bytes_out,
        elapsed_ms = elapsed.as_millis() as u64,
        "conversion complete"
    );

    if io.json {
        let report = RunReport::new(
            command,
            io.input.as_deref(),
            io.output.as_deref(),
            stats,
            elapsed,
        );
        eprintln!("{}", serde_json::to_string_pretty(&report)?);
    }

    Ok(())
}
