/*
 * SPDX-FileCopyrightText: 2023 Inria
 * SPDX-FileCopyrightText: 2023 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! # Binary
//!
//! Fixed-width binary: a value is stored in exactly `width` bits, most
//! significant bit first. Writing silently drops the bits of the value above
//! `width`; callers that care must mask beforehand.
//!
//! Widths must be in `[1, 64]`. A zero width is accepted (and reads as zero)
//! unless the `check_width` feature is enabled, in which case it panics.

use super::{BitRead, BitWrite};

/// Returns how long the binary code of the given width will be.
#[must_use]
#[inline(always)]
pub fn len_binary(width: u32) -> u64 {
    width as u64
}

#[inline(always)]
fn check_width(width: u32) {
    #[cfg(feature = "check_width")]
    assert!(width > 0, "Binary codes must be at least one bit wide");
    assert!(
        width <= 64,
        "The width of a binary code has to be in [1, 64] and {} is not",
        width
    );
}

/// Trait for objects that can read fixed-width binary codes.
pub trait BinaryRead: BitRead {
    /// Read `width` bits as an unsigned integer.
    ///
    /// # Panics
    /// If `width > 64` or if the stream ends before `width` bits.
    #[must_use]
    fn get_binary(&mut self, width: u32) -> u64 {
        check_width(width);
        self.prepare_read(len_binary(width));
        self.read_bits(width)
    }

    /// Fill `values` with consecutive binary codes of the given width.
    fn get_binary_slice(&mut self, width: u32, values: &mut [u64]) {
        for value in values.iter_mut() {
            *value = self.get_binary(width);
        }
    }
}

/// Trait for objects that can write fixed-width binary codes.
pub trait BinaryWrite: BitWrite {
    /// Write the lowest `width` bits of `value`.
    ///
    /// # Panics
    /// If `width > 64`.
    fn set_binary(&mut self, width: u32, value: u64) {
        check_width(width);
        self.prepare_write(len_binary(width));
        self.write_bits(width, value);
    }

    /// Write all of `values` as consecutive binary codes of the given width.
    fn set_binary_slice(&mut self, width: u32, values: &[u64]) {
        for &value in values {
            self.set_binary(width, value);
        }
    }
}

impl<B: BitRead> BinaryRead for B {}
impl<B: BitWrite> BinaryWrite for B {}
