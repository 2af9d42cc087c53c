/*
 * SPDX-FileCopyrightText: 2023 Inria
 * SPDX-FileCopyrightText: 2023 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

/// The read/write head: active block, active word in the block, bits still
/// unused in the active word (in `[1, 64]`) and position in the block.
///
/// The four fields always describe the same point; they change only through
/// [`Cursor::at`], [`Cursor::start_of`] and [`Cursor::advance`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Cursor {
    block: usize,
    word: usize,
    bit: u32,
    pos: u64,
}

impl Cursor {
    /// The cursor at the first bit of block `block`.
    #[inline(always)]
    pub(crate) fn start_of(block: usize) -> Self {
        Self {
            block,
            word: 0,
            bit: 64,
            pos: 0,
        }
    }

    /// The cursor at bit `pos` of block `block`.
    #[inline(always)]
    pub(crate) fn at(block: usize, pos: u64) -> Self {
        Self {
            block,
            word: (pos / 64) as usize,
            bit: 64 - (pos % 64) as u32,
            pos,
        }
    }

    /// Move forward by `n_bits` within the block, rolling over to the next
    /// word when the active one is exhausted.
    #[inline(always)]
    pub(crate) fn advance(&mut self, n_bits: u64) {
        if n_bits < self.bit as u64 {
            self.bit -= n_bits as u32;
        } else {
            let rest = n_bits - self.bit as u64;
            self.word += 1 + (rest / 64) as usize;
            self.bit = 64 - (rest % 64) as u32;
        }
        self.pos += n_bits;
        debug_assert_eq!(*self, Self::at(self.block, self.pos));
    }

    #[inline(always)]
    pub(crate) fn block(&self) -> usize {
        self.block
    }

    #[inline(always)]
    pub(crate) fn word(&self) -> usize {
        self.word
    }

    #[inline(always)]
    pub(crate) fn bit(&self) -> u32 {
        debug_assert!((1..=64).contains(&self.bit));
        self.bit
    }

    #[inline(always)]
    pub(crate) fn pos(&self) -> u64 {
        self.pos
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_advance_within_word() {
        let mut cursor = Cursor::start_of(3);
        cursor.advance(10);
        assert_eq!(cursor, Cursor::at(3, 10));
        assert_eq!(cursor.word(), 0);
        assert_eq!(cursor.bit(), 54);
    }

    #[test]
    fn test_advance_rolls_over() {
        let mut cursor = Cursor::at(0, 60);
        cursor.advance(4);
        assert_eq!(cursor.word(), 1);
        assert_eq!(cursor.bit(), 64);

        cursor.advance(64 * 3 + 5);
        assert_eq!(cursor.pos(), 64 + 64 * 3 + 5);
        assert_eq!(cursor.word(), 4);
        assert_eq!(cursor.bit(), 59);
    }

    #[test]
    fn test_advance_zero() {
        let mut cursor = Cursor::at(1, 63);
        cursor.advance(0);
        assert_eq!(cursor, Cursor::at(1, 63));
        assert_eq!(cursor.bit(), 1);
    }
}
