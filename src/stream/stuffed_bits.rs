/*
 * SPDX-FileCopyrightText: 2023 Inria
 * SPDX-FileCopyrightText: 2023 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use super::{Block, BlockInfo, Cursor};
use crate::codes::{BitRead, BitSeek, BitWrite};
use crate::utils::*;
use log::debug;

/// Default capacity of a block: 16 MiB.
pub const DEFAULT_BLOCK_BITS: u64 = 16 * 1024 * 1024 * 8;

/// The block table grows by this many slots at a time.
pub(crate) const BLOCK_TABLE_CHUNK: usize = 128;

/// A bit-addressable stream of codes stored in a sequence of fixed-capacity
/// blocks.
///
/// Codes are read and written at the position of a single head through the
/// traits in [`codes`](crate::codes), which are all implemented for this
/// type. A code is never split between two blocks: when a write does not fit
/// in the last block, the block is closed at the head (the rest of its
/// capacity is wasted) and a new block is started. Reads skip those gaps
/// transparently, so the logical stream has no holes.
///
/// Rewriting in the middle of the stream is supported only for fixed-width
/// binary codes that lie entirely within one block, as a code of a
/// different length would corrupt the following ones.
///
/// # Example
/// ```
/// use stuffed_bits::prelude::*;
///
/// let mut bits = StuffedBits::new(128);
/// for i in 0..10 {
///     bits.set_binary(40, i);
/// }
/// // three 40-bit codes per 128-bit block
/// assert_eq!(bits.num_blocks(), 4);
///
/// bits.set_position(0, 0);
/// for i in 0..10 {
///     assert_eq!(bits.get_binary(40), i);
/// }
/// ```
pub struct StuffedBits {
    /// The block table; never empty
    blocks: Vec<Block>,
    /// Capacity in bits of newly allocated blocks
    block_bits: u64,
    cursor: Cursor,
}

impl Default for StuffedBits {
    fn default() -> Self {
        Self::new(DEFAULT_BLOCK_BITS)
    }
}

impl core::fmt::Debug for StuffedBits {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("StuffedBits")
            .field("block_bits", &self.block_bits)
            .field("num_blocks", &self.blocks.len())
            .field("len", &self.len())
            .field("position", &self.get_position())
            .finish()
    }
}

impl StuffedBits {
    /// Create an empty stream whose blocks hold `block_bits` bits each.
    ///
    /// # Panics
    /// If `block_bits` is zero.
    #[must_use]
    pub fn new(block_bits: u64) -> Self {
        assert!(block_bits > 0, "Blocks must hold at least one bit");
        Self::from_blocks(block_bits, vec![Block::new(block_bits, 0)])
    }

    /// Build a stream on a non-empty, consistent block table, with the head at
    /// the end of the stream.
    pub(crate) fn from_blocks(block_bits: u64, mut blocks: Vec<Block>) -> Self {
        debug_assert!(!blocks.is_empty());
        let extra = blocks.len().next_multiple_of(BLOCK_TABLE_CHUNK) - blocks.len();
        blocks.reserve_exact(if extra == 0 { BLOCK_TABLE_CHUNK } else { extra });
        let last = blocks.len() - 1;
        let cursor = Cursor::at(last, blocks[last].len);
        Self {
            blocks,
            block_bits,
            cursor,
        }
    }

    /// Capacity in bits of newly allocated blocks.
    #[must_use]
    pub fn block_bits(&self) -> u64 {
        self.block_bits
    }

    /// Number of blocks in the table.
    #[must_use]
    pub fn num_blocks(&self) -> usize {
        self.blocks.len()
    }

    /// Length in bits of the logical stream, that is, the end of the data
    /// written in the last block.
    #[must_use]
    pub fn len(&self) -> u64 {
        self.last().end()
    }

    /// Whether nothing has been written yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Iterate on the description of the blocks, in stream order.
    pub fn blocks(&self) -> impl Iterator<Item = BlockInfo> + '_ {
        self.blocks.iter().map(Block::info)
    }

    pub(crate) fn raw_blocks(&self) -> &[Block] {
        &self.blocks
    }

    #[inline(always)]
    fn last(&self) -> &Block {
        &self.blocks[self.blocks.len() - 1]
    }

    #[inline(always)]
    fn active(&self) -> &Block {
        &self.blocks[self.cursor.block()]
    }

    #[inline(always)]
    fn is_last_active(&self) -> bool {
        self.cursor.block() + 1 == self.blocks.len()
    }

    /// How far into the active block we can write: the capacity for the last
    /// block, the data already written for the earlier ones, which are
    /// sealed.
    #[inline(always)]
    fn write_limit(&self) -> u64 {
        let block = self.active();
        if self.is_last_active() {
            block.capacity
        } else {
            block.len
        }
    }

    #[inline(always)]
    fn update_len(&mut self) {
        let pos = self.cursor.pos();
        let block = &mut self.blocks[self.cursor.block()];
        block.len = block.len.max(pos);
    }

    /// Close the last block at the head and start a new one.
    ///
    /// # Panics
    /// If the head is before the end of the written data, as closing the
    /// block there would drop the codes that follow.
    fn append_block(&mut self) {
        debug_assert!(self.is_last_active());
        let pos = self.cursor.pos();
        let last = self.blocks.len() - 1;
        assert!(
            pos >= self.blocks[last].len,
            "A code at position {} does not fit in block {} and would truncate its {} written bits",
            self.get_position(),
            last,
            self.blocks[last].len
        );
        self.blocks[last].len = pos;
        let begin = self.blocks[last].end();

        if self.blocks.len() == self.blocks.capacity() {
            self.blocks.reserve_exact(BLOCK_TABLE_CHUNK);
        }
        self.blocks.push(Block::new(self.block_bits, begin));
        self.cursor = Cursor::start_of(last + 1);
        debug!(
            "Closed block {} at {} bits; started block {} at stream position {}",
            last,
            pos,
            last + 1,
            begin
        );
    }
}

impl BitSeek for StuffedBits {
    #[inline]
    fn get_position(&self) -> u64 {
        self.active().begin + self.cursor.pos()
    }

    /// # Panics
    /// If `position` is beyond the capacity of the last block.
    fn set_position(&mut self, position: u64, length_hint: u64) {
        let last = self.last();
        assert!(
            position <= last.begin + last.capacity,
            "Position {} is beyond the end of the stream ({} bits allocated)",
            position,
            last.begin + last.capacity
        );

        // the ends are non-decreasing, so the blocks containing `position`
        // form a contiguous range starting here
        let first = self.blocks.partition_point(|block| block.end() < position);
        let index = if first == self.blocks.len() {
            // past the written data, inside the capacity of the last block
            self.blocks.len() - 1
        } else {
            let end = first
                + self.blocks[first..]
                    .iter()
                    .take_while(|block| block.begin <= position)
                    .count();
            (first..end)
                .find(|&i| position.saturating_add(length_hint) <= self.blocks[i].end())
                .unwrap_or(end - 1)
        };

        self.cursor = Cursor::at(index, position - self.blocks[index].begin);
    }
}

impl BitRead for StuffedBits {
    /// # Panics
    /// If the bits would cross the end of a block without starting exactly at
    /// it, or would go past the end of the stream.
    fn prepare_read(&mut self, n_bits: u64) {
        loop {
            let pos = self.cursor.pos();
            let block = self.active();
            if pos + n_bits <= block.len {
                return;
            }
            // codes never span blocks, so we must be exactly at the end
            assert_eq!(
                pos,
                block.len,
                "A read of {} bits at position {} crosses the end of block {}",
                n_bits,
                self.get_position(),
                self.cursor.block()
            );
            assert!(
                !self.is_last_active(),
                "A read of {} bits at position {} goes past the end of the stream",
                n_bits,
                self.get_position()
            );
            self.cursor = Cursor::start_of(self.cursor.block() + 1);
        }
    }

    #[inline]
    fn read_bits(&mut self, n_bits: u32) -> u64 {
        if n_bits == 0 {
            return 0;
        }
        debug_assert!(n_bits <= 64);
        let cursor = self.cursor;
        let block = self.active();
        assert!(
            cursor.pos() + n_bits as u64 <= block.len,
            "Reading {} bits past the written data of block {}",
            n_bits,
            cursor.block()
        );

        let word = cursor.word();
        let bit = cursor.bit();
        let value = if n_bits <= bit {
            save_right_bits(block.words[word] >> (bit - n_bits), n_bits)
        } else {
            // straddles two words of the block
            let low = n_bits - bit;
            (save_right_bits(block.words[word], bit) << low) | (block.words[word + 1] >> (64 - low))
        };

        self.cursor.advance(n_bits as u64);
        value
    }

    fn read_unary_bits(&mut self) -> u64 {
        let mut zeros = 0;
        loop {
            let cursor = self.cursor;
            let block = self.active();
            assert!(
                cursor.pos() < block.len,
                "Unterminated unary code at the end of block {}",
                cursor.block()
            );
            let bit = cursor.bit();
            let rest = clear_left_bits(block.words[cursor.word()], 64 - bit);
            if rest == 0 {
                zeros += bit as u64;
                self.cursor.advance(bit as u64);
            } else {
                let run = bit as u64 - log_base_two64(rest);
                zeros += run;
                self.cursor.advance(run + 1);
                assert!(
                    self.cursor.pos() <= self.active().len,
                    "Unterminated unary code at the end of block {}",
                    cursor.block()
                );
                return zeros;
            }
        }
    }
}

impl BitWrite for StuffedBits {
    /// # Panics
    /// If `n_bits` exceeds the capacity of a block, or if a code rewritten in
    /// the last block does not fit in it.
    fn prepare_write(&mut self, n_bits: u64) {
        assert!(
            n_bits <= self.block_bits,
            "A code of {} bits cannot fit in a block of {} bits",
            n_bits,
            self.block_bits
        );
        while self.cursor.pos() + n_bits > self.write_limit() {
            if self.is_last_active() {
                self.append_block();
            } else {
                // reuse the next block of a previous write session
                debug!(
                    "Block {} is sealed at {} bits; moving to block {}",
                    self.cursor.block(),
                    self.active().len,
                    self.cursor.block() + 1
                );
                self.cursor = Cursor::start_of(self.cursor.block() + 1);
            }
        }
    }

    #[inline]
    fn write_bits(&mut self, n_bits: u32, value: u64) {
        if n_bits == 0 {
            return;
        }
        debug_assert!(n_bits <= 64);
        let cursor = self.cursor;
        assert!(
            cursor.pos() + n_bits as u64 <= self.write_limit(),
            "Writing {} bits past the writable part of block {}",
            n_bits,
            cursor.block()
        );
        let value = save_right_bits(value, n_bits);

        let word = cursor.word();
        let bit = cursor.bit();
        let words = &mut self.blocks[cursor.block()].words;
        if n_bits <= bit {
            let r = bit - n_bits;
            words[word] = clear_middle_bits(words[word], 64 - bit, r) | (value << r);
        } else {
            let low = n_bits - bit;
            words[word] = save_left_bits(words[word], 64 - bit) | (value >> low);
            words[word + 1] = clear_left_bits(words[word + 1], low) | (value << (64 - low));
        }

        self.cursor.advance(n_bits as u64);
        self.update_len();
    }

    fn write_unary_bits(&mut self, value: u64) {
        let mut zeros = value;
        while zeros > 0 {
            let n_bits = zeros.min(64) as u32;
            self.write_bits(n_bits, 0);
            zeros -= n_bits as u64;
        }
        self.write_bits(1, 1);
    }
}
