/*
 * SPDX-FileCopyrightText: 2023 Inria
 * SPDX-FileCopyrightText: 2023 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Fixed-width entry points to the cascades of [`Word`].

use crate::Word;

/// Reverse the bits of a 64-bit word.
///
/// ### Example
/// ```
/// use stuffed_bits::utils::reverse_bits64;
///
/// assert_eq!(reverse_bits64(1), 0x8000_0000_0000_0000);
/// assert_eq!(reverse_bits64(reverse_bits64(0xdead_beef)), 0xdead_beef);
/// ```
#[inline]
#[must_use]
pub fn reverse_bits64(x: u64) -> u64 {
    x.reverse_bits_cascade()
}

/// Reverse the bits of a 32-bit word.
#[inline]
#[must_use]
pub fn reverse_bits32(x: u32) -> u32 {
    x.reverse_bits_cascade()
}

/// Reverse the byte order of a 64-bit word (big/little-endian conversion).
///
/// ### Example
/// ```
/// use stuffed_bits::utils::uint64_swap;
///
/// assert_eq!(uint64_swap(0x0102_0304_0506_0708), 0x0807_0605_0403_0201);
/// ```
#[inline]
#[must_use]
pub fn uint64_swap(x: u64) -> u64 {
    x.swap_bytes_cascade()
}

/// Reverse the byte order of a 32-bit word.
#[inline]
#[must_use]
pub fn uint32_swap(x: u32) -> u32 {
    x.swap_bytes_cascade()
}

/// Reverse the byte order of a 16-bit word.
#[inline]
#[must_use]
pub fn uint16_swap(x: u16) -> u16 {
    x.swap_bytes_cascade()
}

/// Number of set bits of a 32-bit word.
#[inline]
#[must_use]
pub fn count_number_of_set_bits32(x: u32) -> u32 {
    x.count_set_bits()
}

/// Number of set bits of a 64-bit word.
///
/// ### Example
/// ```
/// use stuffed_bits::utils::count_number_of_set_bits64;
///
/// assert_eq!(count_number_of_set_bits64(0), 0);
/// assert_eq!(count_number_of_set_bits64(0xf0f0), 8);
/// assert_eq!(count_number_of_set_bits64(u64::MAX), 64);
/// ```
#[inline]
#[must_use]
pub fn count_number_of_set_bits64(x: u64) -> u64 {
    x.count_set_bits()
}

/// Number of bits needed to represent a 32-bit word.
///
/// Note that this is *not* `floor(log2(x))`: it is one more than that, and
/// zero for zero.
#[inline]
#[must_use]
pub fn log_base_two32(x: u32) -> u32 {
    x.bit_length()
}

/// Number of bits needed to represent a 64-bit word.
///
/// Note that this is *not* `floor(log2(x))`: it is one more than that, and
/// zero for zero.
///
/// ### Example
/// ```
/// use stuffed_bits::utils::log_base_two64;
///
/// assert_eq!(log_base_two64(0), 0);
/// assert_eq!(log_base_two64(1), 1);
/// assert_eq!(log_base_two64(255), 8);
/// assert_eq!(log_base_two64(256), 9);
/// assert_eq!(log_base_two64(1 << 63), 64);
/// ```
#[inline]
#[must_use]
pub fn log_base_two64(x: u64) -> u64 {
    x.bit_length()
}
