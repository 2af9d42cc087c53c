/*
 * SPDX-FileCopyrightText: 2023 Inria
 * SPDX-FileCopyrightText: 2023 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Traits to read and write codes.
//!
//! Every code is built on the primitives of [`BitRead`] and [`BitWrite`] and
//! is implemented for any type implementing them. Before touching the
//! stream a code declares its length, so that a stream made of blocks never
//! splits a code between two of them.
//!
//! **The convention is to write bits from the MSB to the LSB of each word.**
//!
//! #### Example:
//! ```
//! use stuffed_bits::prelude::*;
//!
//! let mut bits = StuffedBits::new(1024);
//! bits.set_unary(3);
//! bits.set_binary(5, 0b10110);
//! bits.set_generalized_unary(1000);
//! assert_eq!(bits.get_position(), 4 + 5 + 2 + 1 + 16);
//!
//! bits.set_position(0, 0); // rewind the stream
//! assert_eq!(bits.get_unary(), 3);
//! assert_eq!(bits.get_binary(5), 0b10110);
//! assert_eq!(bits.get_generalized_unary(), 1000);
//! ```

mod bit_stream;
pub use bit_stream::{BitRead, BitSeek, BitWrite};

mod unary;
pub use unary::{len_unary, UnaryRead, UnaryWrite};

mod binary;
pub use binary::{len_binary, BinaryRead, BinaryWrite};

mod gen_unary;
pub use gen_unary::{
    len_generalized_unary, GeneralizedUnaryRead, GeneralizedUnaryWrite, GENERALIZED_UNARY_CHUNK,
};
