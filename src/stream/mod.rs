/*
 * SPDX-FileCopyrightText: 2023 Inria
 * SPDX-FileCopyrightText: 2023 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! The block-based bit stream.

mod block;
pub use block::BlockInfo;
use block::Block;

mod cursor;
use cursor::Cursor;

mod stuffed_bits;
pub use stuffed_bits::{StuffedBits, DEFAULT_BLOCK_BITS};
use stuffed_bits::BLOCK_TABLE_CHUNK;

mod dump;
