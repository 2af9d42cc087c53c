/*
 * SPDX-FileCopyrightText: 2023 Inria
 * SPDX-FileCopyrightText: 2023 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Persistence of a [`StuffedBits`].
//!
//! The layout is a sequence of little-endian `u64`:
//! ```text
//! block_bits
//! num_blocks
//! (begin, len) × num_blocks
//! words of block 0 (⌈len / 64⌉ of them)
//! words of block 1
//! …
//! ```
//! No magic number and no version: the file is a plain image of the block
//! table, meant to be read back by the same code.

use super::{Block, StuffedBits, BLOCK_TABLE_CHUNK};
use anyhow::{ensure, Context, Result};
use dsi_progress_logger::prelude::*;
use log::info;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

#[inline(always)]
fn write_word(file: &mut impl Write, word: u64) -> Result<()> {
    file.write_all(&word.to_le_bytes())?;
    Ok(())
}

#[inline(always)]
fn read_word(file: &mut impl Read) -> Result<u64> {
    let mut bytes = [0; 8];
    file.read_exact(&mut bytes)?;
    Ok(u64::from_le_bytes(bytes))
}

impl StuffedBits {
    /// Load a stream previously stored with [`StuffedBits::store`] or
    /// [`StuffedBits::dump_to_file`]. The head is at the end of the stream.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = std::fs::File::open(path)
            .with_context(|| format!("Could not open {}", path.display()))?;
        let mut bits = Self::new(1);
        bits.load_from_file(BufReader::new(file))
            .with_context(|| format!("Could not load {}", path.display()))?;
        Ok(bits)
    }

    /// Store the stream in a new file at `path`.
    pub fn store(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let file = std::fs::File::create(path)
            .with_context(|| format!("Could not create {}", path.display()))?;
        let mut writer = BufWriter::new(file);
        self.dump_to_file(&mut writer)
            .with_context(|| format!("Could not store {}", path.display()))?;
        writer
            .flush()
            .with_context(|| format!("Could not flush {}", path.display()))
    }

    /// Serialize the block table and the written words of every block.
    pub fn dump_to_file(&self, mut file: impl Write) -> Result<()> {
        let blocks = self.raw_blocks();
        write_word(&mut file, self.block_bits()).context("Could not write the block size")?;
        write_word(&mut file, blocks.len() as u64)
            .context("Could not write the number of blocks")?;
        for block in blocks {
            write_word(&mut file, block.begin)?;
            write_word(&mut file, block.len)?;
        }

        let mut pl = ProgressLogger::default();
        pl.item_name("block");
        pl.expected_updates(Some(blocks.len()));
        pl.start("Dumping blocks...");
        for (i, block) in blocks.iter().enumerate() {
            for &word in block.used_words() {
                write_word(&mut file, word)
                    .with_context(|| format!("Could not write block {}", i))?;
            }
            pl.light_update();
        }
        pl.done();

        info!(
            "Dumped {} bits in {} blocks of {} bits",
            self.len(),
            blocks.len(),
            self.block_bits()
        );
        Ok(())
    }

    /// Replace the content of this stream with one read from `file`, as
    /// written by [`StuffedBits::dump_to_file`]. The head is left at the end
    /// of the stream, and the blocks keep the stored capacity, so the stream
    /// can be extended.
    ///
    /// On error the stream is left untouched.
    pub fn load_from_file(&mut self, mut file: impl Read) -> Result<()> {
        let block_bits = read_word(&mut file).context("Could not read the block size")?;
        ensure!(block_bits > 0, "The block size must be positive");
        let num_blocks =
            read_word(&mut file).context("Could not read the number of blocks")? as usize;
        ensure!(num_blocks > 0, "A stream has at least one block");

        // grows with the pairs actually read
        let mut table = Vec::with_capacity(num_blocks.min(BLOCK_TABLE_CHUNK));
        let mut expected_begin = 0;
        for i in 0..num_blocks {
            let begin = read_word(&mut file)
                .with_context(|| format!("Could not read the start of block {}", i))?;
            let len = read_word(&mut file)
                .with_context(|| format!("Could not read the length of block {}", i))?;
            ensure!(
                begin == expected_begin,
                "Block {} starts at {} but the previous one ends at {}",
                i,
                begin,
                expected_begin
            );
            ensure!(
                len <= block_bits,
                "Block {} has length {} but blocks hold {} bits",
                i,
                len,
                block_bits
            );
            table.push((begin, len));
            expected_begin = begin + len;
        }

        let mut blocks = Vec::with_capacity(num_blocks.min(BLOCK_TABLE_CHUNK));
        let mut pl = ProgressLogger::default();
        pl.item_name("block");
        pl.expected_updates(Some(num_blocks));
        pl.start("Loading blocks...");
        for (i, &(begin, len)) in table.iter().enumerate() {
            let used = len.div_ceil(64) as usize;
            // sealed blocks are never written past their length; only the
            // last one needs its full capacity
            let stored = if i + 1 == num_blocks {
                block_bits.div_ceil(64) as usize
            } else {
                used
            };
            let mut words = Vec::new();
            words.try_reserve_exact(stored).with_context(|| {
                format!("Could not allocate block {} of {} bits", i, block_bits)
            })?;
            for _ in 0..used {
                words.push(
                    read_word(&mut file).with_context(|| format!("Could not read block {}", i))?,
                );
            }
            words.resize(stored, 0);
            blocks.push(Block::with_words(words.into_boxed_slice(), block_bits, begin, len));
            pl.light_update();
        }
        pl.done();

        *self = Self::from_blocks(block_bits, blocks);
        info!(
            "Loaded {} bits in {} blocks of {} bits",
            self.len(),
            self.num_blocks(),
            block_bits
        );
        Ok(())
    }
}
