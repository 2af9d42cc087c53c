/*
 * SPDX-FileCopyrightText: 2023 Inria
 * SPDX-FileCopyrightText: 2023 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

/// A stream of bits with a single read/write head.
pub trait BitSeek {
    /// Return the logical position of the head, in bits from the start of
    /// the stream.
    #[must_use]
    fn get_position(&self) -> u64;

    /// Move the head to the logical position `position`.
    ///
    /// `length_hint` is the length of the code the caller is about to read or
    /// overwrite; when `position` sits on the boundary between two blocks, it
    /// selects the block that actually holds the code. Zero means "don't
    /// care".
    fn set_position(&mut self, position: u64, length_hint: u64);
}

/// Objects that can read raw bits and unary runs from a stream of bits.
///
/// The primitives never move to another block on their own: codes must call
/// [`BitRead::prepare_read`] with their length (or with one, when the length
/// is known only after decoding) before touching any bit.
pub trait BitRead: BitSeek {
    /// Make sure that the next `n_bits` bits are in the active block, moving
    /// to the next block if the head sits at the end of the active one.
    fn prepare_read(&mut self, n_bits: u64);

    /// Read `n_bits` bits from the stream and return them in the lowest bits.
    /// Reading zero bits returns zero.
    #[must_use]
    fn read_bits(&mut self, n_bits: u32) -> u64;

    /// Read a run of zeros terminated by a one and return the length of the
    /// run.
    #[must_use]
    fn read_unary_bits(&mut self) -> u64;
}

/// Objects that can write raw bits and unary runs to a stream of bits.
///
/// As with [`BitRead`], codes must call [`BitWrite::prepare_write`] with
/// their full length before writing their first bit, so that no code is
/// ever split across two blocks.
pub trait BitWrite: BitSeek {
    /// Make sure that `n_bits` bits can be written in the active block,
    /// moving to (or allocating) the next block otherwise.
    fn prepare_write(&mut self, n_bits: u64);

    /// Write the lowest `n_bits` bits of `value`; higher bits are ignored.
    fn write_bits(&mut self, n_bits: u32, value: u64);

    /// Write `value` zeros followed by a one.
    fn write_unary_bits(&mut self, value: u64);
}
