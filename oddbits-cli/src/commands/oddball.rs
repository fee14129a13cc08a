//! Oddball unpack/pack commands.

use super::{BitOrderArgs, IoArgs, run_transcoder};
use clap::Args;
use oddbits_core::config::{MAX_BITS_PER_SYMBOL, MIN_BITS_PER_SYMBOL};
use oddbits_core::{BitOrder, OddballConfig, SymbolPacker, SymbolUnpacker};

/// Codec options shared by `unpack` and `pack`.
#[derive(Args, Debug, Clone)]
pub struct OddballArgs {
    /// Bits per symbol
    #[arg(
        short = 'l',
        long = "bits-per-symbol",
        default_value_t = 1,
        value_parser = clap::value_parser!(u8).range(
            i64::from(MIN_BITS_PER_SYMBOL)..=i64::from(MAX_BITS_PER_SYMBOL)
        )
    )]
    pub bits_per_symbol: u8,

    /// Packed bytes are most significant bit first
    #[arg(short, long)]
    pub reverse: bool,

    #[command(flatten)]
    pub symbol_order: BitOrderArgs,
}

impl OddballArgs {
    /// Build the codec configuration these flags describe.
    pub fn config(&self, chunk_size: usize) -> oddbits_core::Result<OddballConfig> {
        if self.bits_per_symbol == 1 && self.symbol_order.is_explicit() {
            tracing::warn!("symbol bit order has no effect with 1 bit per symbol");
        }

        Ok(OddballConfig::new(self.bits_per_symbol)?
            .with_byte_order(BitOrder::from_big_endian(self.reverse))
            .with_symbol_order(self.symbol_order.order())
            .with_chunk_size(chunk_size)?)
    }
}

/// Unpack bytes into one symbol per output byte.
pub fn cmd_unpack(io: &IoArgs, args: &OddballArgs) -> Result<(), Box<dyn std::error::Error>> {
    let config = args.config(io.chunk_size)?;
    tracing::debug!(
        bits_per_symbol = config.bits_per_symbol,
        byte_order = %config.byte_order,
        symbol_order = %config.symbol_order,
        "unpacking"
    );

    let mut unpacker = SymbolUnpacker::new(config)?;
    run_transcoder("unpack", io, &mut unpacker)
}

/// Pack one-symbol-per-byte input back into dense bytes.
pub fn cmd_pack(io: &IoArgs, args: &OddballArgs) -> Result<(), Box<dyn std::error::Error>> {
    let config = args.config(io.chunk_size)?;
    tracing::debug!(
        bits_per_symbol = config.bits_per_symbol,
        byte_order = %config.byte_order,
        symbol_order = %config.symbol_order,
        "packing"
    );

    let mut packer = SymbolPacker::new(config)?;
    run_transcoder("pack", io, &mut packer)
}
