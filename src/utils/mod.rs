/*
 * SPDX-FileCopyrightText: 2023 Inria
 * SPDX-FileCopyrightText: 2023 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Bit-math primitives on 64-bit (and 32/16-bit) words.
//!
//! Bits are numbered from the left, as they are laid out in a stream: the
//! *leftmost* bits of a word are its most significant ones. All functions
//! are pure and never allocate, except [`display_word`].

mod magic;
pub use magic::*;

/// Return `v` with its leftmost `l` bits cleared, that is, keep the rightmost
/// `64 - l` bits. For `l >= 64` the result is zero.
///
/// ### Example
/// ```
/// use stuffed_bits::utils::clear_left_bits;
///
/// assert_eq!(clear_left_bits(u64::MAX, 60), 0xf);
/// assert_eq!(clear_left_bits(u64::MAX, 0), u64::MAX);
/// assert_eq!(clear_left_bits(u64::MAX, 64), 0);
/// ```
#[inline(always)]
#[must_use]
pub fn clear_left_bits(v: u64, l: u32) -> u64 {
    if l >= 64 {
        return 0;
    }
    v & (u64::MAX >> l)
}

/// Return `v` keeping only its leftmost `l` bits. For `l == 0` the result is
/// zero.
///
/// ### Example
/// ```
/// use stuffed_bits::utils::save_left_bits;
///
/// assert_eq!(save_left_bits(u64::MAX, 4), 0xf000_0000_0000_0000);
/// assert_eq!(save_left_bits(u64::MAX, 0), 0);
/// ```
#[inline(always)]
#[must_use]
pub fn save_left_bits(v: u64, l: u32) -> u64 {
    if l == 0 {
        return 0;
    }
    v & (u64::MAX << (64 - l))
}

/// Return `v` with its rightmost `r` bits cleared. For `r >= 64` the result
/// is zero.
///
/// ### Example
/// ```
/// use stuffed_bits::utils::clear_right_bits;
///
/// assert_eq!(clear_right_bits(0xffff, 8), 0xff00);
/// assert_eq!(clear_right_bits(0xffff, 64), 0);
/// ```
#[inline(always)]
#[must_use]
pub fn clear_right_bits(v: u64, r: u32) -> u64 {
    if r >= 64 {
        return 0;
    }
    v & (u64::MAX << r)
}

/// Return `v` keeping only its rightmost `r` bits. For `r == 0` the result is
/// zero.
///
/// ### Example
/// ```
/// use stuffed_bits::utils::save_right_bits;
///
/// assert_eq!(save_right_bits(0b1011_0110_1010_1101, 4), 0b1101);
/// assert_eq!(save_right_bits(u64::MAX, 64), u64::MAX);
/// assert_eq!(save_right_bits(u64::MAX, 0), 0);
/// ```
#[inline(always)]
#[must_use]
pub fn save_right_bits(v: u64, r: u32) -> u64 {
    if r == 0 {
        return 0;
    }
    v & (u64::MAX >> (64 - r))
}

/// Clear everything but the leftmost `l` and the rightmost `r` bits of `v`.
///
/// ### Example
/// ```
/// use stuffed_bits::utils::clear_middle_bits;
///
/// assert_eq!(clear_middle_bits(u64::MAX, 4, 4), 0xf000_0000_0000_000f);
/// ```
#[inline(always)]
#[must_use]
pub fn clear_middle_bits(v: u64, l: u32, r: u32) -> u64 {
    save_right_bits(v, r) | save_left_bits(v, l)
}

/// Keep only the bits of `v` that are neither among the leftmost `l` nor
/// among the rightmost `r`.
///
/// ### Example
/// ```
/// use stuffed_bits::utils::save_middle_bits;
///
/// assert_eq!(save_middle_bits(u64::MAX, 4, 4), 0x0fff_ffff_ffff_fff0);
/// ```
#[inline(always)]
#[must_use]
pub fn save_middle_bits(v: u64, l: u32, r: u32) -> u64 {
    clear_right_bits(v, r) & clear_left_bits(v, l)
}

/// Render `word` as 64 `'0'`/`'1'` characters, most significant bit first.
///
/// ### Example
/// ```
/// use stuffed_bits::utils::display_word;
///
/// let s = display_word(0x8000_0000_0000_0001);
/// assert_eq!(s.len(), 64);
/// assert!(s.starts_with("10"));
/// assert!(s.ends_with("01"));
/// ```
#[must_use]
pub fn display_word(word: u64) -> String {
    let mut buffer = String::with_capacity(64);
    display_word_into(word, &mut buffer);
    buffer
}

/// Like [`display_word`], but reuses a caller-supplied buffer, which is
/// cleared first.
pub fn display_word_into(word: u64, buffer: &mut String) {
    buffer.clear();
    buffer.extend((0..64).map(|i| {
        if word & (1 << (63 - i)) != 0 {
            '1'
        } else {
            '0'
        }
    }));
}
