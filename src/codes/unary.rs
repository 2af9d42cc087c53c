/*
 * SPDX-FileCopyrightText: 2023 Inria
 * SPDX-FileCopyrightText: 2023 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! # Unary
//!
//! The unary code of `n` is `n` zeros followed by a one, so zero is a single
//! one bit. Optimal for geometric distributions of ratio 1/2.

use super::{BitRead, BitWrite};

/// Returns how long the unary code for `value` will be.
#[must_use]
#[inline]
pub fn len_unary(value: u64) -> u64 {
    value.saturating_add(1)
}

/// Trait for objects that can read unary codes.
pub trait UnaryRead: BitRead {
    /// Read a unary code.
    ///
    /// # Panics
    /// If the stream ends before the terminating one.
    #[must_use]
    fn get_unary(&mut self) -> u64 {
        // the whole code lives in one block, so one bit is enough to
        // select it
        self.prepare_read(1);
        self.read_unary_bits()
    }

    /// Fill `values` with consecutive unary codes.
    fn get_unary_slice(&mut self, values: &mut [u64]) {
        for value in values.iter_mut() {
            *value = self.get_unary();
        }
    }
}

/// Trait for objects that can write unary codes.
pub trait UnaryWrite: BitWrite {
    /// Write `value` as a unary code.
    ///
    /// # Panics
    /// If `value + 1` exceeds the capacity of a block.
    fn set_unary(&mut self, value: u64) {
        self.prepare_write(len_unary(value));
        self.write_unary_bits(value);
    }

    /// Write all of `values` as consecutive unary codes.
    fn set_unary_slice(&mut self, values: &[u64]) {
        for &value in values {
            self.set_unary(value);
        }
    }
}

impl<B: BitRead> UnaryRead for B {}
impl<B: BitWrite> UnaryWrite for B {}
