/*
 * SPDX-FileCopyrightText: 2023 Inria
 * SPDX-FileCopyrightText: 2023 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use anyhow::Result;
use stuffed_bits::prelude::*;

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Writes `n` 40-bit codes in 128-bit blocks (three codes per block) and
/// returns their start positions.
fn forty_bit_stream(n: u64) -> (StuffedBits, Vec<u64>) {
    let mut bits = StuffedBits::new(128);
    let mut starts = vec![];
    for i in 0..n {
        bits.set_binary(40, i * 1_000_003);
        starts.push(bits.get_position() - 40);
    }
    (bits, starts)
}

fn check_table(bits: &StuffedBits) {
    let blocks = bits.blocks().collect::<Vec<_>>();
    assert_eq!(blocks.len(), bits.num_blocks());
    assert_eq!(blocks[0].begin, 0);
    for pair in blocks.windows(2) {
        assert_eq!(pair[1].begin, pair[0].end());
    }
    for block in &blocks {
        assert!(block.len <= block.capacity);
    }
    assert_eq!(bits.len(), blocks[blocks.len() - 1].end());
}

#[test]
fn test_codes_never_straddle_blocks() -> Result<()> {
    init_logging();
    let (mut bits, starts) = forty_bit_stream(20);
    assert_eq!(bits.num_blocks(), 7);
    check_table(&bits);

    let blocks = bits.blocks().collect::<Vec<_>>();
    for &start in &starts {
        assert!(
            blocks
                .iter()
                .any(|block| block.begin <= start && start + 40 <= block.end()),
            "code at {} straddles a block boundary",
            start
        );
    }
    // the last 8 bits of each full block are wasted, not part of the stream
    assert_eq!(blocks[0].len, 120);
    assert_eq!(blocks[0].capacity, 128);
    assert_eq!(bits.len(), 20 * 40);

    bits.set_position(0, 0);
    for i in 0..20 {
        assert_eq!(bits.get_binary(40), i * 1_000_003);
    }
    Ok(())
}

#[test]
fn test_position_after_fixed_width_writes() {
    let mut bits = StuffedBits::new(1 << 16);
    for n in 1..=100 {
        bits.set_binary(13, n);
        assert_eq!(bits.get_position(), n * 13);
    }
    assert_eq!(bits.num_blocks(), 1);
    assert!(!bits.is_empty());
}

#[test]
fn test_new_stream() {
    let bits = StuffedBits::default();
    assert_eq!(bits.block_bits(), DEFAULT_BLOCK_BITS);
    assert_eq!(bits.num_blocks(), 1);
    assert_eq!(bits.get_position(), 0);
    assert!(bits.is_empty());
    assert!(format!("{:?}", bits).contains("StuffedBits"));
}

#[test]
fn test_block_table_grows() {
    init_logging();
    // a single 40-bit code per 64-bit block
    let mut bits = StuffedBits::new(64);
    for i in 0..300 {
        bits.set_binary(40, i);
    }
    assert_eq!(bits.num_blocks(), 300);
    check_table(&bits);

    bits.set_position(0, 0);
    for i in 0..300 {
        assert_eq!(bits.get_binary(40), i);
    }
}

#[test]
fn test_set_position_on_a_boundary() {
    let (mut bits, _) = forty_bit_stream(9);

    // without a hint we land at the end of block 0, and reads move on
    bits.set_position(120, 0);
    assert_eq!(bits.get_position(), 120);
    assert_eq!(bits.get_binary(40), 3 * 1_000_003);

    // with a hint we land directly at the start of block 1
    bits.set_position(120, 40);
    assert_eq!(bits.get_position(), 120);
    assert_eq!(bits.get_binary(40), 3 * 1_000_003);

    bits.set_position(200, 40);
    assert_eq!(bits.get_binary(40), 5 * 1_000_003);
}

#[test]
fn test_set_position_past_written_data() {
    let mut bits = StuffedBits::new(1024);
    bits.set_binary(10, 1);
    bits.set_position(100, 0);
    bits.set_binary(10, 2);
    assert_eq!(bits.len(), 110);

    bits.set_position(0, 0);
    assert_eq!(bits.get_binary(10), 1);
    assert_eq!(bits.get_binary(64), 0);
    assert_eq!(bits.get_binary(26), 0);
    assert_eq!(bits.get_binary(10), 2);
}

#[test]
fn test_rewrite_binary_fields() {
    let (mut bits, starts) = forty_bit_stream(10);

    // inside a sealed block, at the start of a block, and in the last block
    for &i in &[1, 3, 9] {
        bits.set_position(starts[i], 40);
        bits.set_binary(40, 0xdead_beef + i as u64);
    }
    // from the end of block 1, the write moves to the start of block 2
    bits.set_position(240, 0);
    bits.set_binary(40, 0xcafe);

    assert_eq!(bits.num_blocks(), 4);
    assert_eq!(bits.len(), 400);
    check_table(&bits);

    bits.set_position(0, 0);
    for i in 0..10 {
        let expected = match i {
            1 | 3 | 9 => 0xdead_beef + i,
            6 => 0xcafe,
            _ => i * 1_000_003,
        };
        assert_eq!(bits.get_binary(40), expected, "code {}", i);
    }
}

#[test]
fn test_append_after_rewind() {
    let (mut bits, _) = forty_bit_stream(4);
    bits.set_position(0, 0);
    assert_eq!(bits.get_binary(40), 0);

    let end = bits.len();
    bits.set_position(end, 0);
    bits.set_binary(40, 42);
    bits.set_unary(5);
    assert_eq!(bits.len(), end + 40 + 6);

    bits.set_position(end, 40);
    assert_eq!(bits.get_binary(40), 42);
    assert_eq!(bits.get_unary(), 5);
}

#[test]
fn test_unary_across_blocks() {
    let mut bits = StuffedBits::new(200);
    let values = [150, 150, 10, 0, 180, 3];
    bits.set_unary_slice(&values);
    assert_eq!(bits.num_blocks(), 3);
    check_table(&bits);

    bits.set_position(0, 0);
    let mut read = [0; 6];
    bits.get_unary_slice(&mut read);
    assert_eq!(read, values);
}

#[test]
#[should_panic(expected = "past the end of the stream")]
fn test_read_past_end() {
    let mut bits = StuffedBits::new(128);
    bits.set_binary(8, 1);
    bits.set_position(0, 0);
    let _ = bits.get_binary(8);
    let _ = bits.get_binary(8);
}

#[test]
#[should_panic(expected = "crosses the end of block")]
fn test_read_across_block_end() {
    let (mut bits, _) = forty_bit_stream(4);
    bits.set_position(100, 0);
    let _ = bits.get_binary(40);
}

#[test]
#[should_panic(expected = "cannot fit in a block")]
fn test_code_larger_than_a_block() {
    let mut bits = StuffedBits::new(64);
    bits.set_unary(64);
}

#[test]
#[should_panic(expected = "would truncate")]
fn test_rewrite_overflowing_last_block() {
    // 120 bits in the first block; a 40-bit code at 100 does not fit in 128
    let (mut bits, _) = forty_bit_stream(3);
    assert_eq!(bits.num_blocks(), 1);
    bits.set_position(100, 0);
    bits.set_binary(40, 0);
}

#[test]
#[should_panic(expected = "beyond the end of the stream")]
fn test_set_position_beyond_capacity() {
    let mut bits = StuffedBits::new(128);
    bits.set_position(129, 0);
}

#[test]
#[should_panic(expected = "Unterminated unary code")]
fn test_unterminated_unary() {
    let mut bits = StuffedBits::new(256);
    bits.set_binary(10, 0);
    bits.set_position(0, 0);
    let _ = bits.get_unary();
}

#[test]
#[should_panic(expected = "at least one bit")]
fn test_empty_blocks() {
    let _ = StuffedBits::new(0);
}
