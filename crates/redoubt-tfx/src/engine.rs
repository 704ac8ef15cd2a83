// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! TFXEngine: the Twofish Feistel round transform over the round subkeys and
//! key-dependent S-box table produced by [`crate::key_schedule`].

use alloc::vec::Vec;

use redoubt_cipher_core::{check_block_buffers, BlockCipher, Direction, Error, BLOCK_SIZE};
use redoubt_zero::{RedoubtZero, ZeroizeOnDropSentinel};

use crate::key_schedule::{expand, LEGAL_KEY_SIZES};
use crate::tables::{rotl, rotr};

/// Round counts TFX accepts.
pub const LEGAL_ROUNDS: [usize; 9] = [16, 18, 20, 22, 24, 26, 28, 30, 32];

/// Default TFX round count.
pub const DEFAULT_ROUNDS: usize = 16;

/// A Twofish-based 128-bit block cipher with a 512-bit key extension.
///
/// Construct with [`TFXEngine::new`], then [`BlockCipher::initialize`] with a
/// direction and key before transforming blocks.
#[derive(RedoubtZero)]
#[fast_zeroize(drop)]
pub struct TFXEngine {
    rounds: usize,
    #[fast_zeroize(skip)]
    direction: Option<Direction>,
    initialized: bool,
    round_keys: Vec<u32>,
    s_box: Vec<u32>,
    __sentinel: ZeroizeOnDropSentinel,
}

impl TFXEngine {
    /// Build an engine with the given round count (one of [`LEGAL_ROUNDS`]).
    pub fn new(rounds: usize) -> Self {
        Self {
            rounds,
            direction: None,
            initialized: false,
            round_keys: Vec::new(),
            s_box: Vec::new(),
            __sentinel: ZeroizeOnDropSentinel::default(),
        }
    }
}

impl Default for TFXEngine {
    fn default() -> Self {
        Self::new(DEFAULT_ROUNDS)
    }
}

impl BlockCipher for TFXEngine {
    fn initialize(&mut self, direction: Direction, key: &[u8]) -> Result<(), Error> {
        self.initialized = false;

        if !LEGAL_ROUNDS.contains(&self.rounds) {
            return Err(Error::InvalidRounds);
        }

        let material = expand(key, self.rounds)?;

        self.round_keys = material.round_keys;
        self.s_box = material.s_box;
        self.direction = Some(direction);
        self.initialized = true;
        Ok(())
    }

    fn transform_block(&mut self, input: &[u8], output: &mut [u8]) -> Result<(), Error> {
        if !self.initialized {
            return Err(Error::Uninitialized);
        }
        check_block_buffers(input, output)?;

        match self.direction {
            Some(Direction::Encrypt) => {
                encrypt_block(&self.round_keys, &self.s_box, self.rounds, input, output)
            }
            Some(Direction::Decrypt) => {
                decrypt_block(&self.round_keys, &self.s_box, self.rounds, input, output)
            }
            None => return Err(Error::Uninitialized),
        }

        Ok(())
    }

    fn block_size(&self) -> usize {
        BLOCK_SIZE
    }

    fn legal_key_sizes(&self) -> &'static [usize] {
        &LEGAL_KEY_SIZES
    }

    fn legal_rounds(&self) -> &'static [usize] {
        &LEGAL_ROUNDS
    }
}

/// `Fe0`: the first byte-selection pattern into the key-dependent S-box
/// table.
fn fe0(s_box: &[u32], x: u32) -> u32 {
    s_box[2 * (x & 0xff) as usize]
        ^ s_box[(2 * ((x >> 8) & 0xff) + 1) as usize]
        ^ s_box[(2 * ((x >> 16) & 0xff) + 0x200) as usize]
        ^ s_box[(2 * ((x >> 24) & 0xff) + 0x201) as usize]
}

/// `Fe3`: the same tables as [`fe0`], with the byte order rotated by one.
fn fe3(s_box: &[u32], x: u32) -> u32 {
    s_box[(2 * ((x >> 24) & 0xff)) as usize]
        ^ s_box[(2 * (x & 0xff) + 1) as usize]
        ^ s_box[(2 * ((x >> 8) & 0xff) + 0x200) as usize]
        ^ s_box[(2 * ((x >> 16) & 0xff) + 0x201) as usize]
}

fn load_words(input: &[u8]) -> (u32, u32, u32, u32) {
    (
        u32::from_le_bytes(input[0..4].try_into().unwrap()),
        u32::from_le_bytes(input[4..8].try_into().unwrap()),
        u32::from_le_bytes(input[8..12].try_into().unwrap()),
        u32::from_le_bytes(input[12..16].try_into().unwrap()),
    )
}

fn store_words(output: &mut [u8], w0: u32, w1: u32, w2: u32, w3: u32) {
    output[0..4].copy_from_slice(&w0.to_le_bytes());
    output[4..8].copy_from_slice(&w1.to_le_bytes());
    output[8..12].copy_from_slice(&w2.to_le_bytes());
    output[12..16].copy_from_slice(&w3.to_le_bytes());
}

fn encrypt_block(ek: &[u32], s_box: &[u32], rounds: usize, input: &[u8], output: &mut [u8]) {
    let (w0, w1, w2, w3) = load_words(input);
    let mut x0 = w0 ^ ek[0];
    let mut x1 = w1 ^ ek[1];
    let mut x2 = w2 ^ ek[2];
    let mut x3 = w3 ^ ek[3];

    for i in 0..rounds / 2 {
        let t0 = fe0(s_box, x0);
        let t1 = fe3(s_box, x1);
        x2 = rotr(x2 ^ t0.wrapping_add(t1).wrapping_add(ek[8 + 4 * i]), 1);
        x3 = rotl(x3, 1) ^ t0.wrapping_add(t1.wrapping_shl(1)).wrapping_add(ek[9 + 4 * i]);

        let t0 = fe0(s_box, x2);
        let t1 = fe3(s_box, x3);
        x0 = rotr(x0 ^ t0.wrapping_add(t1).wrapping_add(ek[10 + 4 * i]), 1);
        x1 = rotl(x1, 1) ^ t0.wrapping_add(t1.wrapping_shl(1)).wrapping_add(ek[11 + 4 * i]);
    }

    x0 ^= ek[4];
    x1 ^= ek[5];
    x2 ^= ek[6];
    x3 ^= ek[7];

    store_words(output, x2, x3, x0, x1);
}

fn decrypt_block(ek: &[u32], s_box: &[u32], rounds: usize, input: &[u8], output: &mut [u8]) {
    let (w0, w1, w2, w3) = load_words(input);
    // w0..w3 hold (X2, X3, X0, X1) as stored by `encrypt_block`; undo
    // post-whitening to recover the registers at the end of the round loop.
    let mut x0 = w2 ^ ek[4];
    let mut x1 = w3 ^ ek[5];
    let mut x2 = w0 ^ ek[6];
    let mut x3 = w1 ^ ek[7];

    for i in (0..rounds / 2).rev() {
        let t0 = fe0(s_box, x2);
        let t1 = fe3(s_box, x3);
        let new_x1 = rotr(x1 ^ t0.wrapping_add(t1.wrapping_shl(1)).wrapping_add(ek[11 + 4 * i]), 1);
        let new_x0 = rotl(x0, 1) ^ t0.wrapping_add(t1).wrapping_add(ek[10 + 4 * i]);

        let t0 = fe0(s_box, new_x0);
        let t1 = fe3(s_box, new_x1);
        let new_x3 = rotr(x3 ^ t0.wrapping_add(t1.wrapping_shl(1)).wrapping_add(ek[9 + 4 * i]), 1);
        let new_x2 = rotl(x2, 1) ^ t0.wrapping_add(t1).wrapping_add(ek[8 + 4 * i]);

        x0 = new_x0;
        x1 = new_x1;
        x2 = new_x2;
        x3 = new_x3;
    }

    x0 ^= ek[0];
    x1 ^= ek[1];
    x2 ^= ek[2];
    x3 ^= ek[3];

    store_words(output, x0, x1, x2, x3);
}
