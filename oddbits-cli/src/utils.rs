//! Utility functions for the oddbits CLI.

use indicatif::{ProgressBar, ProgressStyle};
use oddbits_core::PumpStats;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{self, BufReader, BufWriter, Read, Write};
use std::path::Path;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

/// An opened input: the reader plus the progress bar it reports to.
pub type InputStream = (Box<dyn Read>, ProgressBar);

/// Create a progress bar with standard styling.
pub fn create_progress_bar(len: u64, enable: bool) -> ProgressBar {
    if !enable {
        return ProgressBar::hidden();
    }

    let pb = ProgressBar::new(len);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("[{elapsed_precise}] [{bar:40.cyan/blue}] {bytes}/{total_bytes} {msg}")
            .expect("progress bar template is valid")
            .progress_chars("█▓▒░ "),
    );
    pb
}

fn with_path(path: &Path, err: io::Error) -> io::Error {
    io::Error::new(err.kind(), format!("{}: {}", path.display(), err))
}

/// Open `path` for reading, or stdin when no path is given.
///
/// The progress bar is only shown for files, whose length is known.
pub fn open_input(path: Option<&Path>, progress: bool) -> io::Result<InputStream> {
    match path {
        Some(path) => {
            let file = File::open(path).map_err(|e| with_path(path, e))?;
            let len = file.metadata().map_err(|e| with_path(path, e))?.len();
            let pb = create_progress_bar(len, progress);
            let reader = pb.wrap_read(BufReader::new(file));
            Ok((Box::new(reader), pb))
        }
        None => {
            if progress {
                tracing::warn!("--progress is ignored when reading from stdin");
            }
            Ok((Box::new(io::stdin().lock()), ProgressBar::hidden()))
        }
    }
}

/// Create `path` for writing, or use stdout when no path is given.
pub fn open_output(path: Option<&Path>) -> io::Result<Box<dyn Write>> {
    match path {
        Some(path) => {
            let file = File::create(path).map_err(|e| with_path(path, e))?;
            Ok(Box::new(BufWriter::new(file)))
        }
        None => Ok(Box::new(BufWriter::new(io::stdout().lock()))),
    }
}

/// Default filter directive for a `-v` count.
pub fn verbosity_directive(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Install the stderr log subscriber. `RUST_LOG` overrides `-v`.
pub fn init_logging(verbose: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(verbosity_directive(verbose)));

    // A second init only happens in tests; ignore it.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .try_init();
}

/// Machine-readable summary of one conversion run.
#[derive(Debug, Serialize, Deserialize)]
pub struct RunReport {
    pub command: String,
    pub input: String,
    pub output: String,
    pub chunks: u64,
    pub bytes_in: u64,
    pub bytes_out: u64,
    pub elapsed_ms: u64,
}

impl RunReport {
    pub fn new(
        command: &str,
        input: Option<&Path>,
        output: Option<&Path>,
        stats: PumpStats,
        elapsed: Duration,
    ) -> Self {
        let describe = |path: Option<&Path>, fallback: &str| {
            path.map_or_else(|| fallback.to_string(), |p| p.display().to_string())
        };

        Self {
            command: command.to_string(),
            input: describe(input, "<stdin>"),
            output: describe(output, "<stdout>"),
            chunks: stats.chunks,
            bytes_in: stats.bytes_in,
            bytes_out: stats.bytes_out,
            elapsed_ms: u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX),
        }
    }
}
