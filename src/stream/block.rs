/*
 * SPDX-FileCopyrightText: 2023 Inria
 * SPDX-FileCopyrightText: 2023 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

/// A fixed-capacity run of words, placed at `begin` in the logical stream.
pub(crate) struct Block {
    /// Zero-initialized storage: `capacity` bits rounded up to words, or
    /// just the written words for a sealed block loaded from a file
    pub(crate) words: Box<[u64]>,
    /// Allocated size in bits
    pub(crate) capacity: u64,
    /// Position in the logical stream of the first bit of the block
    pub(crate) begin: u64,
    /// Bits written so far (high-water mark)
    pub(crate) len: u64,
}

impl Block {
    pub(crate) fn new(capacity: u64, begin: u64) -> Self {
        Self {
            words: vec![0; capacity.div_ceil(64) as usize].into_boxed_slice(),
            capacity,
            begin,
            len: 0,
        }
    }

    /// A block on existing storage, which must hold at least the `len`
    /// written bits.
    pub(crate) fn with_words(words: Box<[u64]>, capacity: u64, begin: u64, len: u64) -> Self {
        debug_assert!(len <= capacity);
        debug_assert!(words.len() as u64 >= len.div_ceil(64));
        Self {
            words,
            capacity,
            begin,
            len,
        }
    }

    /// Position in the logical stream just after the last written bit.
    #[inline(always)]
    pub(crate) fn end(&self) -> u64 {
        self.begin + self.len
    }

    /// The words containing the written bits.
    #[inline(always)]
    pub(crate) fn used_words(&self) -> &[u64] {
        &self.words[..self.len.div_ceil(64) as usize]
    }

    pub(crate) fn info(&self) -> BlockInfo {
        BlockInfo {
            begin: self.begin,
            len: self.len,
            capacity: self.capacity,
        }
    }
}

/// Public description of a block of a [`StuffedBits`](super::StuffedBits).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BlockInfo {
    /// Position in the logical stream of the first bit of the block
    pub begin: u64,
    /// Bits written in the block
    pub len: u64,
    /// Allocated size of the block in bits
    pub capacity: u64,
}

impl BlockInfo {
    /// Position in the logical stream just after the last written bit.
    #[must_use]
    pub fn end(&self) -> u64 {
        self.begin + self.len
    }
}
