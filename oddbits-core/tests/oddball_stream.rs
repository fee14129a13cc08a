//! Integration tests for the oddball symbol codec driven by the stream pump.
//!
//! These tests verify output size laws, carry behaviour across chunk
//! boundaries, and round trips for every symbol width and order pair.

use oddbits_core::{
    BitOrder, MAX_CHUNK_SIZE, OddballConfig, OddbitsError, StreamPump, SymbolPacker,
    SymbolUnpacker, Transcoder, pump_stream,
};
use std::io::Cursor;

const ORDERS: [BitOrder; 2] = [BitOrder::LsbFirst, BitOrder::MsbFirst];

/// Deterministic test data (linear congruential generator).
fn pseudo_random(len: usize) -> Vec<u8> {
    let mut seed: u64 = 0x1234_5678_9ABC_DEF0;
    (0..len)
        .map(|_| {
            seed = seed.wrapping_mul(6364136223846793005).wrapping_add(1);
            (seed >> 32) as u8
        })
        .collect()
}

fn config(bps: u8, byte_order: BitOrder, symbol_order: BitOrder) -> OddballConfig {
    OddballConfig::new(bps)
        .expect("valid width")
        .with_byte_order(byte_order)
        .with_symbol_order(symbol_order)
}

fn unpack_stream(data: &[u8], cfg: OddballConfig, chunk: usize) -> Vec<u8> {
    let mut unpacker = SymbolUnpacker::new(cfg).expect("unpacker");
    let mut out = Vec::new();
    pump_stream(Cursor::new(data), &mut out, chunk, &mut unpacker).expect("unpack failed");
    out
}

fn pack_stream(data: &[u8], cfg: OddballConfig, chunk: usize) -> Vec<u8> {
    let mut packer = SymbolPacker::new(cfg).expect("packer");
    let mut out = Vec::new();
    pump_stream(Cursor::new(data), &mut out, chunk, &mut packer).expect("pack failed");
    out
}

// ============================================================================
// Worked scenarios
// ============================================================================

#[test]
fn test_single_bit_symbols_from_a5() {
    let out = unpack_stream(&[0xA5], OddballConfig::default(), 2048);
    assert_eq!(out, vec![1, 0, 1, 0, 0, 1, 0, 1]);
}

#[test]
fn test_four_bit_symbols_from_3c() {
    let cfg = config(4, BitOrder::LsbFirst, BitOrder::LsbFirst);
    assert_eq!(unpack_stream(&[0x3C], cfg, 2048), vec![0x0C, 0x03]);
}

#[test]
fn test_pack_three_bit_symbols_carries_ninth_bit() {
    let cfg = config(3, BitOrder::LsbFirst, BitOrder::LsbFirst);
    let mut packer = SymbolPacker::new(cfg).unwrap();
    let mut out = Vec::new();

    let produced = packer.transcode(&[5, 3, 1], &mut out).unwrap();
    assert_eq!(produced, 1);
    assert_eq!(packer.pending_bits(), 1);

    // The carried bit (0, the top bit of symbol 1) leads the next byte.
    packer.transcode(&[0b111, 0b111, 0b111], &mut out).unwrap();
    assert_eq!(out, vec![0b0101_1101, 0b1111_1110]);
    assert_eq!(packer.pending_bits(), 2);
}

#[test]
fn test_seven_one_bit_symbols_pack_to_nothing() {
    let cfg = config(1, BitOrder::LsbFirst, BitOrder::LsbFirst);
    let mut packer = SymbolPacker::new(cfg).unwrap();
    let mut out = Vec::new();

    assert_eq!(packer.transcode(&[1; 7], &mut out).unwrap(), 0);
    assert_eq!(packer.pending_bits(), 7);
    assert_eq!(packer.finish(&mut out).unwrap(), 0);
    assert!(out.is_empty());
}

#[test]
fn test_unpack_drops_trailing_partial_symbol() {
    // 2 bytes = 16 bits = two 7-bit symbols plus 2 carried bits
    let cfg = config(7, BitOrder::LsbFirst, BitOrder::LsbFirst);
    let mut unpacker = SymbolUnpacker::new(cfg).unwrap();
    let mut out = Vec::new();

    assert_eq!(unpacker.transcode(&[0xFF, 0xFF], &mut out).unwrap(), 2);
    assert_eq!(unpacker.pending_bits(), 2);
    assert_eq!(unpacker.finish(&mut out).unwrap(), 0);
    assert_eq!(out, vec![0x7F, 0x7F]);
    assert_eq!(unpacker.pending_bits(), 0);
}

// ============================================================================
// Laws
// ============================================================================

#[test]
fn test_unpack_truncation_law() {
    for len in [0usize, 1, 2, 3, 5, 7, 11, 100] {
        let data = pseudo_random(len);
        for bps in 1..=8u8 {
            let out = unpack_stream(&data, config(bps, BitOrder::LsbFirst, BitOrder::LsbFirst), 3);
            assert_eq!(out.len(), len * 8 / usize::from(bps), "len={} bps={}", len, bps);
        }
    }
}

#[test]
fn test_pack_output_length() {
    for len in [0usize, 1, 7, 8, 9, 23, 64, 101] {
        let symbols = pseudo_random(len);
        for bps in 1..=8u8 {
            let out = pack_stream(&symbols, config(bps, BitOrder::MsbFirst, BitOrder::LsbFirst), 4);
            assert_eq!(out.len(), len * usize::from(bps) / 8, "len={} bps={}", len, bps);
        }
    }
}

#[test]
fn test_symbol_range() {
    let data = pseudo_random(333);
    for bps in 1..=8u8 {
        for byte_order in ORDERS {
            for symbol_order in ORDERS {
                let out = unpack_stream(&data, config(bps, byte_order, symbol_order), 17);
                let limit = 1u16 << bps;
                assert!(out.iter().all(|&s| u16::from(s) < limit), "bps={}", bps);
            }
        }
    }
}

#[test]
fn test_carry_conservation() {
    let data = pseudo_random(97);
    for bps in 1..=8u8 {
        let cfg = config(bps, BitOrder::LsbFirst, BitOrder::MsbFirst);
        let mut unpacker = SymbolUnpacker::new(cfg).unwrap();
        let mut packer = SymbolPacker::new(cfg).unwrap();
        let mut sink = Vec::new();
        let mut bits_in = 0usize;
        let mut symbols_in = 0usize;

        for piece in data.chunks(5) {
            unpacker.transcode(piece, &mut sink).unwrap();
            bits_in += piece.len() * 8;
            assert_eq!(unpacker.pending_bits(), bits_in % usize::from(bps));

            packer.transcode(piece, &mut sink).unwrap();
            symbols_in += piece.len();
            assert_eq!(packer.pending_bits(), (symbols_in * usize::from(bps)) % 8);
        }
    }
}

#[test]
fn test_chunk_size_independence() {
    let data = pseudo_random(1000);
    for bps in [1u8, 3, 5, 7, 8] {
        let cfg = config(bps, BitOrder::MsbFirst, BitOrder::LsbFirst);
        let reference = unpack_stream(&data, cfg, 2048);
        for chunk in [1usize, 2, 3, 7, 64, 999, 1000, 4096] {
            assert_eq!(unpack_stream(&data, cfg, chunk), reference, "bps={} chunk={}", bps, chunk);

            let cfg_small = cfg.with_chunk_size(chunk).unwrap();
            assert_eq!(unpack_stream(&data, cfg_small, 2048), reference);
        }
    }
}

#[test]
fn test_roundtrip_every_order_pair() {
    // 840 bytes is a whole number of symbols for every width 1-8
    let data = pseudo_random(840);
    for bps in 1..=8u8 {
        for byte_order in ORDERS {
            for symbol_order in ORDERS {
                let cfg = config(bps, byte_order, symbol_order);
                let symbols = unpack_stream(&data, cfg, 13);
                let packed = pack_stream(&symbols, cfg, 29);
                assert_eq!(packed, data, "bps={} {} {}", bps, byte_order, symbol_order);
            }
        }
    }
}

#[test]
fn test_eight_bit_symbols_are_identity_with_matching_orders() {
    let data = pseudo_random(64);
    let cfg = config(8, BitOrder::LsbFirst, BitOrder::LsbFirst);
    assert_eq!(unpack_stream(&data, cfg, 5), data);

    // Mixed orders mirror each byte.
    let cfg = config(8, BitOrder::LsbFirst, BitOrder::MsbFirst);
    let mirrored: Vec<u8> = data.iter().map(|b| b.reverse_bits()).collect();
    assert_eq!(unpack_stream(&data, cfg, 5), mirrored);
}

// ============================================================================
// Errors
// ============================================================================

#[test]
fn test_invalid_configuration_rejected_before_streaming() {
    let bad = OddballConfig {
        bits_per_symbol: 0,
        ..OddballConfig::default()
    };
    assert!(matches!(
        SymbolUnpacker::new(bad),
        Err(OddbitsError::InvalidSymbolWidth { bits: 0 })
    ));
    assert!(matches!(
        SymbolPacker::new(OddballConfig {
            bits_per_symbol: 9,
            ..OddballConfig::default()
        }),
        Err(OddbitsError::InvalidSymbolWidth { bits: 9 })
    ));
}

#[test]
fn test_oversized_chunk_size_rejected_before_allocation() {
    let huge = OddballConfig {
        bits_per_symbol: 3,
        chunk_size: usize::MAX / 4,
        ..OddballConfig::default()
    };
    assert!(matches!(
        SymbolUnpacker::new(huge),
        Err(OddbitsError::InvalidChunkSize { .. })
    ));
    assert!(matches!(
        SymbolPacker::new(huge),
        Err(OddbitsError::InvalidChunkSize { .. })
    ));
    assert!(matches!(
        OddballConfig::new(3).unwrap().with_chunk_size(MAX_CHUNK_SIZE + 1),
        Err(OddbitsError::InvalidChunkSize { .. })
    ));
}

#[test]
fn test_pump_reports_counters() {
    let data = pseudo_random(10);
    let cfg = config(2, BitOrder::LsbFirst, BitOrder::LsbFirst);
    let mut unpacker = SymbolUnpacker::new(cfg).unwrap();
    let mut out = Vec::new();
    let mut pump = StreamPump::with_chunk_size(Cursor::new(&data), &mut out, 4).unwrap();
    let stats = pump.run(&mut unpacker).unwrap();

    assert_eq!(stats.chunks, 3);
    assert_eq!(stats.bytes_in, 10);
    assert_eq!(stats.bytes_out, 40);
}
