//! oddbits CLI - stream converters for entropy-source test data
//!
//! Unpacks binary data into NIST SP800-90B "oddball" one-symbol-per-byte
//! files and back, and converts between binary and ASCII-binary, hex and
//! decimal text.

mod commands;
mod utils;

use clap::{Parser, Subcommand};
use commands::{
    BitOrderArgs, IoArgs, OddballArgs, cmd_from_ascii, cmd_from_dec, cmd_from_hex, cmd_pack,
    cmd_to_ascii, cmd_to_dec, cmd_to_hex, cmd_unpack,
};
use oddbits_core::text::{
    DEFAULT_ASCII_LINE_WIDTH, DEFAULT_HEX_LINE_WIDTH, DEFAULT_WORD_WIDTH, decimal::MAX_WORD_WIDTH,
};
use utils::init_logging;

#[derive(Parser)]
#[command(name = "oddbits")]
#[command(
    author,
    version,
    about = "Bit and symbol repacking for entropy-source test data"
)]
#[command(long_about = "
oddbits converts raw binary data into the one-symbol-per-byte layout used by
the NIST SP800-90B entropy assessment tools, and back again. It also converts
binary data to and from ASCII-binary, hex and decimal text.

Every command reads a file (or stdin) and writes a file (or stdout).

Examples:
  oddbits unpack -l 4 raw.bin -o symbols.bin
  oddbits pack -l 4 symbols.bin -o raw.bin
  oddbits unpack -l 3 -r -B raw.bin > symbols.bin
  oddbits to-ascii -w 64 -s raw.bin
  oddbits from-ascii bits.txt -o raw.bin
  oddbits to-hex raw.bin
  oddbits to-dec -w 2 -b samples.bin
  oddbits from-dec -w 2 -b samples.txt -o samples.bin
")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Unpack bytes into one symbol per byte
    #[command(alias = "bin2nistoddball")]
    Unpack {
        #[command(flatten)]
        io: IoArgs,

        #[command(flatten)]
        codec: OddballArgs,
    },

    /// Pack one symbol per byte back into dense bytes
    #[command(alias = "nistoddball2bin")]
    Pack {
        #[command(flatten)]
        io: IoArgs,

        #[command(flatten)]
        codec: OddballArgs,
    },

    /// Write binary data as ASCII 0/1 text
    #[command(alias = "bin201")]
    ToAscii {
        #[command(flatten)]
        io: IoArgs,

        /// Bits per line
        #[arg(short, long, default_value_t = DEFAULT_ASCII_LINE_WIDTH)]
        width: usize,

        #[command(flatten)]
        order: BitOrderArgs,

        /// Put a space between bytes
        #[arg(short, long)]
        spaces: bool,
    },

    /// Read ASCII 0/1 text back into binary
    #[command(alias = "012bin")]
    FromAscii {
        #[command(flatten)]
        io: IoArgs,

        #[command(flatten)]
        order: BitOrderArgs,
    },

    /// Write binary data as uppercase hex
    #[command(alias = "bin2hex")]
    ToHex {
        #[command(flatten)]
        io: IoArgs,

        /// Bytes per line
        #[arg(short, long, default_value_t = DEFAULT_HEX_LINE_WIDTH)]
        width: usize,
    },

    /// Read hex text back into binary
    #[command(alias = "hex2bin")]
    FromHex {
        #[command(flatten)]
        io: IoArgs,
    },

    /// Write fixed-width binary words as decimal lines
    #[command(alias = "bin2dec")]
    ToDec {
        #[command(flatten)]
        io: IoArgs,

        /// Word width in bytes
        #[arg(
            short,
            long,
            default_value_t = DEFAULT_WORD_WIDTH as u64,
            value_parser = clap::value_parser!(u64).range(1..=MAX_WORD_WIDTH as u64)
        )]
        width: u64,

        /// Words are big endian
        #[arg(short = 'b', long = "bigendian")]
        big_endian: bool,
    },

    /// Read decimal numbers back into fixed-width binary words
    #[command(alias = "dec2bin")]
    FromDec {
        #[command(flatten)]
        io: IoArgs,

        /// Word width in bytes
        #[arg(
            short,
            long,
            default_value_t = DEFAULT_WORD_WIDTH as u64,
            value_parser = clap::value_parser!(u64).range(1..=MAX_WORD_WIDTH as u64)
        )]
        width: u64,

        /// Words are big endian
        #[arg(short = 'b', long = "bigendian")]
        big_endian: bool,
    },
}

impl Commands {
    fn io(&self) -> &IoArgs {
        match self {
            Commands::Unpack { io, .. }
            | Commands::Pack { io, .. }
            | Commands::ToAscii { io, .. }
            | Commands::FromAscii { io, .. }
            | Commands::ToHex { io, .. }
            | Commands::FromHex { io }
            | Commands::ToDec { io, .. }
            | Commands::FromDec { io, .. } => io,
        }
    }
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.command.io().verbose);

    let result = match &cli.command {
        Commands::Unpack { io, codec } => cmd_unpack(io, codec),
        Commands::Pack { io, codec } => cmd_pack(io, codec),
        Commands::ToAscii {
            io,
            width,
            order,
            spaces,
        } => cmd_to_ascii(io, *width, *order, *spaces),
        Commands::FromAscii { io, order } => cmd_from_ascii(io, *order),
        Commands::ToHex { io, width } => cmd_to_hex(io, *width),
        Commands::FromHex { io } => cmd_from_hex(io),
        Commands::ToDec {
            io,
            width,
            big_endian,
        } => cmd_to_dec(io, *width as usize, *big_endian),
        Commands::FromDec {
            io,
            width,
            big_endian,
        } => cmd_from_dec(io, *width as usize, *big_endian),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
