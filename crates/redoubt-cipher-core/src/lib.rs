// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Shared vocabulary for the extended symmetric block-cipher core: the
//! error taxonomy, the encrypt/decrypt direction flag, and the
//! [`BlockCipher`] trait both SHX and TFX engines implement.

#![cfg_attr(not(test), no_std)]

#[cfg(test)]
mod tests;

use redoubt_digest::DigestError;
use thiserror::Error;

/// Block size, in bytes, fixed for every engine in this core.
pub const BLOCK_SIZE: usize = 16;

/// Unified error taxonomy for engines, key schedules, and HKDF/HMAC.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// Key length outside the legal sizes for the chosen path.
    #[error("invalid key size")]
    InvalidKeySize,
    /// Round count outside the engine's legal set.
    #[error("invalid round count")]
    InvalidRounds,
    /// Digest selector not in the supported set.
    #[error("unsupported digest")]
    UnsupportedDigest,
    /// `transform_block` called before a successful `initialize`.
    #[error("engine not initialized")]
    Uninitialized,
    /// Input or output block shorter than [`BLOCK_SIZE`].
    #[error("buffer shorter than the block size")]
    ShortBuffer,
    /// HKDF was asked for more than `255 * output_size()` bytes.
    #[error("requested length exceeds 255 * digest output size")]
    LengthExceeded,
    /// Distribution code is null/absent when the API contract forbids it.
    #[error("invalid distribution code")]
    InvalidDistributionCode,
}

impl From<DigestError> for Error {
    fn from(_: DigestError) -> Self {
        Error::UnsupportedDigest
    }
}

/// Which direction a block transform runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Encrypt plaintext into ciphertext.
    Encrypt,
    /// Decrypt ciphertext into plaintext.
    Decrypt,
}

/// A 128-bit block cipher engine: constructed with a round count, initialized
/// with a direction and key, then used to transform any number of blocks.
///
/// Implementations are single-threaded state machines (see the crate's
/// concurrency notes): `transform_block` never allocates and never blocks.
pub trait BlockCipher {
    /// Run the key schedule and move the engine into the initialized state.
    ///
    /// Replaces any prior state; a failed call leaves the engine
    /// uninitialized and `transform_block` will return [`Error::Uninitialized`].
    fn initialize(&mut self, direction: Direction, key: &[u8]) -> Result<(), Error>;

    /// Encrypt or decrypt one block, per the direction fixed at `initialize`.
    fn transform_block(&mut self, input: &[u8], output: &mut [u8]) -> Result<(), Error>;

    /// The cipher's block size in bytes. Always [`BLOCK_SIZE`] for this core.
    fn block_size(&self) -> usize;

    /// The key sizes, in bytes, this engine accepts.
    fn legal_key_sizes(&self) -> &'static [usize];

    /// The round counts this engine accepts.
    fn legal_rounds(&self) -> &'static [usize];
}

/// Checks `input`/`output` are each at least [`BLOCK_SIZE`] bytes.
pub fn check_block_buffers(input: &[u8], output: &[u8]) -> Result<(), Error> {
    if input.len() < BLOCK_SIZE || output.len() < BLOCK_SIZE {
        return Err(Error::ShortBuffer);
    }
    Ok(())
}
