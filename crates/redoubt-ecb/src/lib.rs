// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! ECB (Electronic Codebook) mode: a thin, block-wise wrapper over any
//! [`BlockCipher`]. ECB carries no IV and performs no padding; callers feed
//! it whole blocks.

#![cfg_attr(not(test), no_std)]


use redoubt_cipher_core::{BlockCipher, Direction, Error};

/// Electronic Codebook mode over an owned [`BlockCipher`].
///
/// A sequential, allocation-free mode: every call delegates one block
/// directly to the underlying engine. ECB maintains no chaining state of its
/// own, so it is safe to call [`ECBMode::transform`] for any number of
/// blocks in any order.
pub struct ECBMode<C: BlockCipher> {
    cipher: C,
}

impl<C: BlockCipher> ECBMode<C> {
    /// Wrap an already-constructed cipher. The cipher need not be
    /// initialized yet; call [`ECBMode::initialize`] before transforming.
    pub fn new(cipher: C) -> Self {
        Self { cipher }
    }

    /// Runs the wrapped cipher's key schedule.
    pub fn initialize(&mut self, direction: Direction, key: &[u8]) -> Result<(), Error> {
        self.cipher.initialize(direction, key)
    }

    /// The wrapped cipher's block size, in bytes.
    pub fn block_size(&self) -> usize {
        self.cipher.block_size()
    }

    /// Transforms one block per the direction fixed at `initialize`. Direct
    /// alias for [`ECBMode::transform`]; ECB does not distinguish the two
    /// directions beyond what the wrapped cipher already does.
    pub fn transform(&mut self, input: &[u8], output: &mut [u8]) -> Result<(), Error> {
        self.cipher.transform_block(input, output)
    }

    /// Encrypts one block. The wrapped cipher must have been initialized
    /// with [`Direction::Encrypt`].
    pub fn encrypt_block(&mut self, input: &[u8], output: &mut [u8]) -> Result<(), Error> {
        self.cipher.transform_block(input, output)
    }

    /// Decrypts one block. The wrapped cipher must have been initialized
    /// with [`Direction::Decrypt`].
    pub fn decrypt_block(&mut self, input: &[u8], output: &mut [u8]) -> Result<(), Error> {
        self.cipher.transform_block(input, output)
    }

    /// Transforms `blocks.len() / block_size()` contiguous blocks in place
    /// order, writing into `out`. Fails if either buffer's length is not a
    /// multiple of the block size, or the two lengths disagree.
    pub fn transform_blocks(&mut self, blocks: &[u8], out: &mut [u8]) -> Result<(), Error> {
        let block_size = self.block_size();
        if blocks.len() != out.len() || blocks.len() % block_size != 0 {
            return Err(Error::ShortBuffer);
        }

        for (chunk_in, chunk_out) in blocks.chunks(block_size).zip(out.chunks_mut(block_size)) {
            self.cipher.transform_block(chunk_in, chunk_out)?;
        }

        Ok(())
    }

    /// Releases the wrapped cipher. Callers that want the cipher's own
    /// zeroize-on-drop behavior can simply drop the returned value; ECB
    /// itself holds no key material of its own to dispose of.
    pub fn into_inner(self) -> C {
        self.cipher
    }

    /// Borrows the wrapped cipher.
    pub fn inner(&self) -> &C {
        &self.cipher
    }
}
