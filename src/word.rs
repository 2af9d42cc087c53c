/*
 * SPDX-FileCopyrightText: 2023 Inria
 * SPDX-FileCopyrightText: 2023 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use core::fmt::{Binary, Debug, Display, LowerHex};
use core::ops::*;

/// Trait with the word-level bit tricks we need on `u16`, `u32` and `u64`.
///
/// All the tricks are the classical divide-and-swap cascades (Freed, "Binary
/// Magic Numbers", Dr. Dobb's Journal 78, 1983): at stage `s` the word is
/// seen as a sequence of `2s`-bit fields, and the two `s`-bit halves of each
/// field are swapped (or added). The magic masks are computed as
/// `MAX / (2^s + 1)`, which yields `0x5555…`, `0x3333…`, `0x0f0f…` and so on,
/// so a single implementation serves every width.
pub trait Word:
    Sized
    + Send
    + Sync
    + Debug
    + Display
    + LowerHex
    + Binary
    + Default
    + Clone
    + Copy
    + PartialOrd
    + Ord
    + PartialEq
    + Eq
    + Add<Output = Self>
    + BitAnd<Output = Self>
    + BitOr<Output = Self>
    + BitOrAssign<Self>
    + Not<Output = Self>
    + Shl<u32, Output = Self>
    + Shr<u32, Output = Self>
{
    /// Number of bits in the word
    const BITS: u32;
    /// Zero represented by `Self`
    const ZERO: Self;
    /// One represented by `Self`
    const ONE: Self;
    /// Maximum value represented by `Self`
    const MAX: Self;

    /// Reverses the order of the bits of the word.
    fn reverse_bits_cascade(self) -> Self;

    /// Reverses the order of the bytes of the word, leaving the bits of each
    /// byte untouched.
    fn swap_bytes_cascade(self) -> Self;

    /// Returns the number of ones in the word.
    fn count_set_bits(self) -> Self;

    /// Returns the number of bits needed to represent the word, that is,
    /// `floor(log2(self)) + 1`, or zero for zero.
    fn bit_length(self) -> Self;
}

macro_rules! impl_word {
    ($($ty:ty),*) => {$(

impl Word for $ty {
    const BITS: u32 = <$ty>::BITS;
    const ZERO: Self = 0;
    const ONE: Self = 1;
    const MAX: Self = <$ty>::MAX;

    #[inline(always)]
    fn reverse_bits_cascade(self) -> Self {
        let mut x = self;
        let mut s = 1;
        while s < Self::BITS {
            let low = Self::MAX / ((Self::ONE << s) + 1);
            x = ((x >> s) & low) | ((x << s) & !low);
            s <<= 1;
        }
        x
    }

    #[inline(always)]
    fn swap_bytes_cascade(self) -> Self {
        let mut x = self;
        let mut s = 8;
        while s < Self::BITS {
            let low = Self::MAX / ((Self::ONE << s) + 1);
            x = ((x >> s) & low) | ((x << s) & !low);
            s <<= 1;
        }
        x
    }

    #[cfg(not(feature = "builtin_popcount"))]
    #[inline(always)]
    fn count_set_bits(self) -> Self {
        let mut x = self;
        let mut s = 1;
        while s < Self::BITS {
            let low = Self::MAX / ((Self::ONE << s) + 1);
            x = ((x >> s) & low) + (x & low);
            s <<= 1;
        }
        x
    }

    #[cfg(feature = "builtin_popcount")]
    #[inline(always)]
    fn count_set_bits(self) -> Self {
        self.count_ones() as $ty
    }

    #[inline(always)]
    fn bit_length(self) -> Self {
        // smear the highest one into all the lower positions
        let mut x = self;
        let mut s = 1;
        while s < Self::BITS {
            x |= x >> s;
            s <<= 1;
        }
        x.count_set_bits()
    }
}

    )*};
}

impl_word!(u16, u32, u64);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cascades_match_std() {
        let mut x = 0x0123_4567_89ab_cdef_u64;
        for _ in 0..1000 {
            assert_eq!(x.reverse_bits_cascade(), x.reverse_bits());
            assert_eq!(x.swap_bytes_cascade(), x.swap_bytes());
            assert_eq!(x.count_set_bits(), x.count_ones() as u64);
            assert_eq!(x.bit_length(), 64 - x.leading_zeros() as u64);

            let y = (x >> 17) as u32;
            assert_eq!(y.reverse_bits_cascade(), y.reverse_bits());
            assert_eq!(y.swap_bytes_cascade(), y.swap_bytes());
            assert_eq!(y.count_set_bits(), y.count_ones());
            assert_eq!(y.bit_length(), 32 - y.leading_zeros());

            let z = (x >> 40) as u16;
            assert_eq!(z.swap_bytes_cascade(), z.swap_bytes());

            // xorshift
            x ^= x << 13;
            x ^= x >> 7;
            x ^= x << 17;
        }
    }

    #[test]
    fn test_bit_length_edges() {
        assert_eq!(0_u64.bit_length(), 0);
        assert_eq!(1_u64.bit_length(), 1);
        assert_eq!(u64::MAX.bit_length(), 64);
        assert_eq!(0_u32.bit_length(), 0);
        assert_eq!(u32::MAX.bit_length(), 32);
    }
}
