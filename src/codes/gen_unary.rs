/*
 * SPDX-FileCopyrightText: 2023 Inria
 * SPDX-FileCopyrightText: 2023 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! # Generalized Unary
//!
//! A unary prefix followed by a binary suffix. Given a chunk width `k`, the
//! bit length `b` of `x` is rounded up to a multiple of `k`: we write in
//! unary the number of chunks `c = ⌈b / k⌉` and then `x` in binary on
//! `min(c·k, 64)` bits. Zero is thus a single one bit, and with `k = 8` any
//! 64-bit value takes at most 73 bits.
//!
//! Small chunks waste fewer suffix bits, large chunks shorten the prefix.

use super::{len_unary, BitRead, BitWrite};
use crate::utils::log_base_two64;

/// The chunk width used by [`GeneralizedUnaryRead::get_generalized_unary`]
/// and [`GeneralizedUnaryWrite::set_generalized_unary`].
pub const GENERALIZED_UNARY_CHUNK: u32 = 8;

#[inline(always)]
fn check_chunk(chunk: u32) {
    assert!(
        (1..=64).contains(&chunk),
        "The chunk of a generalized unary code has to be in [1, 64] and {} is not",
        chunk
    );
}

/// Width of the binary suffix of a code with the given number of chunks.
#[inline(always)]
fn suffix_width(chunks: u64, chunk: u32) -> u32 {
    chunks.saturating_mul(chunk as u64).min(64) as u32
}

/// Returns how long the generalized unary code for `value` with chunk width
/// `chunk` will be.
#[must_use]
#[inline]
pub fn len_generalized_unary(value: u64, chunk: u32) -> u64 {
    check_chunk(chunk);
    let chunks = log_base_two64(value).div_ceil(chunk as u64);
    len_unary(chunks) + suffix_width(chunks, chunk) as u64
}

/// Trait for objects that can read generalized unary codes.
pub trait GeneralizedUnaryRead: BitRead {
    /// Read a generalized unary code with chunk width
    /// [`GENERALIZED_UNARY_CHUNK`].
    #[must_use]
    fn get_generalized_unary(&mut self) -> u64 {
        self.get_generalized_unary_param(GENERALIZED_UNARY_CHUNK)
    }

    /// Read a generalized unary code with an explicit chunk width, which must
    /// match the one used to write it.
    ///
    /// # Panics
    /// If `chunk` is not in `[1, 64]` or if the stream ends early.
    #[must_use]
    fn get_generalized_unary_param(&mut self, chunk: u32) -> u64 {
        check_chunk(chunk);
        self.prepare_read(1);
        let chunks = self.read_unary_bits();
        self.read_bits(suffix_width(chunks, chunk))
    }

    /// Fill `values` with consecutive generalized unary codes.
    fn get_generalized_unary_slice(&mut self, values: &mut [u64]) {
        for value in values.iter_mut() {
            *value = self.get_generalized_unary();
        }
    }
}

/// Trait for objects that can write generalized unary codes.
pub trait GeneralizedUnaryWrite: BitWrite {
    /// Write `value` as a generalized unary code with chunk width
    /// [`GENERALIZED_UNARY_CHUNK`].
    fn set_generalized_unary(&mut self, value: u64) {
        self.set_generalized_unary_param(value, GENERALIZED_UNARY_CHUNK)
    }

    /// Write `value` as a generalized unary code with an explicit chunk width.
    ///
    /// # Panics
    /// If `chunk` is not in `[1, 64]` or if the code does not fit in a block.
    fn set_generalized_unary_param(&mut self, value: u64, chunk: u32) {
        self.prepare_write(len_generalized_unary(value, chunk));
        let chunks = log_base_two64(value).div_ceil(chunk as u64);
        self.write_unary_bits(chunks);
        self.write_bits(suffix_width(chunks, chunk), value);
    }

    /// Write all of `values` as consecutive generalized unary codes.
    fn set_generalized_unary_slice(&mut self, values: &[u64]) {
        for &value in values {
            self.set_generalized_unary(value);
        }
    }
}

impl<B: BitRead> GeneralizedUnaryRead for B {}
impl<B: BitWrite> GeneralizedUnaryWrite for B {}
