// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! SHXEngine: the Serpent round transform over an expanded key produced by
//! [`crate::key_schedule`].

use alloc::vec::Vec;

use redoubt_cipher_core::{check_block_buffers, BlockCipher, Direction, Error, BLOCK_SIZE};
use redoubt_digest::DigestSelector;
use redoubt_zero::{FastZeroizable, RedoubtZero, ZeroizeOnDropSentinel};

use crate::key_schedule::{expand_hkdf, expand_standard};
use crate::tables::{apply_sbox, ilt, lt, INV_SBOXES, SBOXES};

/// Distribution code (HKDF `info`) the engine uses when none has been set.
pub const DEFAULT_DISTRIBUTION_CODE: &[u8] = b"SHX version 1 information string";

/// Round counts SHX accepts.
pub const LEGAL_ROUNDS: [usize; 8] = [32, 40, 48, 56, 64, 80, 96, 128];

/// Key sizes, in bytes, the standard (non-HKDF) path accepts.
pub const LEGAL_STANDARD_KEY_SIZES: [usize; 4] = [16, 24, 32, 64];

const STANDARD_PATH_MAX_KEY_LEN: usize = 64;

/// A Serpent-based 128-bit block cipher with an optional HKDF-expanded
/// extended key schedule.
///
/// Construct with [`SHXEngine::new`], optionally call
/// [`SHXEngine::set_distribution_code`] / [`SHXEngine::set_ikm_size`], then
/// [`BlockCipher::initialize`] with a key before transforming blocks.
#[derive(RedoubtZero)]
#[fast_zeroize(drop)]
pub struct SHXEngine {
    rounds: usize,
    #[fast_zeroize(skip)]
    digest_selector: DigestSelector,
    distribution_code: Vec<u8>,
    ikm_size: usize,
    #[fast_zeroize(skip)]
    direction: Option<Direction>,
    initialized: bool,
    expanded_key: Vec<u32>,
    __sentinel: ZeroizeOnDropSentinel,
}

impl SHXEngine {
    /// Build an engine with the given round count and digest selector.
    ///
    /// The digest selector only matters for keys longer than 64 bytes (the
    /// HKDF path); it is ignored for the standard path.
    pub fn new(rounds: usize, digest_selector: DigestSelector) -> Self {
        Self {
            rounds,
            digest_selector,
            distribution_code: DEFAULT_DISTRIBUTION_CODE.to_vec(),
            ikm_size: digest_selector.output_size(),
            direction: None,
            initialized: false,
            expanded_key: Vec::new(),
            __sentinel: ZeroizeOnDropSentinel::default(),
        }
    }

    /// Set the HKDF `info` parameter (and cipher personalization string).
    ///
    /// Must be called before `initialize`. An empty slice is a valid
    /// distribution code.
    pub fn set_distribution_code(&mut self, code: &[u8]) {
        self.distribution_code.clear();
        self.distribution_code.extend_from_slice(code);
    }

    /// Set how many leading key bytes route to HKDF as IKM (the remainder
    /// becomes salt). Clamped to `[output_size, block_size]` and snapped
    /// down to a multiple of `output_size`. Must be called before
    /// `initialize`.
    pub fn set_ikm_size(&mut self, value: usize) {
        let output_size = self.digest_selector.output_size();
        let block_size = self.digest_selector.block_size();

        let clamped = value.clamp(output_size, block_size);
        self.ikm_size = clamped - (clamped % output_size);
    }

    /// Compares `other` against this engine's configured distribution code
    /// in constant time with respect to content.
    ///
    /// The distribution code personalizes the HKDF-routed key schedule, so
    /// it is treated as secret-adjacent configuration the same way the rest
    /// of this workspace treats anything that influences a key schedule.
    pub fn distribution_code_eq(&self, other: &[u8]) -> bool {
        redoubt_util::constant_time_eq(&self.distribution_code, other)
    }

    /// Expanded-key word count for this engine's round count.
    fn expanded_key_len(&self) -> usize {
        4 * (self.rounds + 1)
    }
}

impl BlockCipher for SHXEngine {
    fn initialize(&mut self, direction: Direction, key: &[u8]) -> Result<(), Error> {
        self.initialized = false;

        if !LEGAL_ROUNDS.contains(&self.rounds) {
            return Err(Error::InvalidRounds);
        }

        let expanded = if key.len() <= STANDARD_PATH_MAX_KEY_LEN {
            expand_standard(key, self.rounds)?
        } else {
            expand_hkdf(
                self.digest_selector,
                key,
                self.ikm_size,
                &self.distribution_code,
                self.rounds,
            )?
        };

        debug_assert_eq!(expanded.len(), self.expanded_key_len());

        self.expanded_key.fast_zeroize();
        self.expanded_key = expanded;
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
            Some(Direction::Encrypt) => encrypt_block(&self.expanded_key, self.rounds, input, output),
            Some(Direction::Decrypt) => decrypt_block(&self.expanded_key, self.rounds, input, output),
            None => return Err(Error::Uninitialized),
        }

        Ok(())
    }

    fn block_size(&self) -> usize {
        BLOCK_SIZE
    }

    fn legal_key_sizes(&self) -> &'static [usize] {
        &LEGAL_STANDARD_KEY_SIZES
    }

    fn legal_rounds(&self) -> &'static [usize] {
        &LEGAL_ROUNDS
    }
}

fn encrypt_block(ek: &[u32], rounds: usize, input: &[u8], output: &mut [u8]) {
    let mut r0 = u32::from_be_bytes(input[12..16].try_into().unwrap());
    let mut r1 = u32::from_be_bytes(input[8..12].try_into().unwrap());
    let mut r2 = u32::from_be_bytes(input[4..8].try_into().unwrap());
    let mut r3 = u32::from_be_bytes(input[0..4].try_into().unwrap());

    let macro_blocks = rounds / 8;
    for m in 0..macro_blocks {
        for s in 0..8 {
            let idx = m * 32 + s * 4;
            r0 ^= ek[idx];
            r1 ^= ek[idx + 1];
            r2 ^= ek[idx + 2];
            r3 ^= ek[idx + 3];

            apply_sbox(&SBOXES[s], &mut r0, &mut r1, &mut r2, &mut r3);

            if !(m == macro_blocks - 1 && s == 7) {
                lt(&mut r0, &mut r1, &mut r2, &mut r3);
            }
        }
    }

    let last = ek.len() - 4;
    r0 ^= ek[last];
    r1 ^= ek[last + 1];
    r2 ^= ek[last + 2];
    r3 ^= ek[last + 3];

    output[12..16].copy_from_slice(&r0.to_be_bytes());
    output[8..12].copy_from_slice(&r1.to_be_bytes());
    output[4..8].copy_from_slice(&r2.to_be_bytes());
    output[0..4].copy_from_slice(&r3.to_be_bytes());
}

fn decrypt_block(ek: &[u32], rounds: usize, input: &[u8], output: &mut [u8]) {
    let mut r0 = u32::from_be_bytes(input[12..16].try_into().unwrap());
    let mut r1 = u32::from_be_bytes(input[8..12].try_into().unwrap());
    let mut r2 = u32::from_be_bytes(input[4..8].try_into().unwrap());
    let mut r3 = u32::from_be_bytes(input[0..4].try_into().unwrap());

    let last = ek.len() - 4;
    r0 ^= ek[last];
    r1 ^= ek[last + 1];
    r2 ^= ek[last + 2];
    r3 ^= ek[last + 3];

    let macro_blocks = rounds / 8;
    for m in (0..macro_blocks).rev() {
        for s in (0..8).rev() {
            apply_sbox(&INV_SBOXES[s], &mut r0, &mut r1, &mut r2, &mut r3);

            let idx = m * 32 + s * 4;
            r0 ^= ek[idx];
            r1 ^= ek[idx + 1];
            r2 ^= ek[idx + 2];
            r3 ^= ek[idx + 3];

            if !(m == 0 && s == 0) {
                ilt(&mut r0, &mut r1, &mut r2, &mut r3);
            }
        }
    }

    output[12..16].copy_from_slice(&r0.to_be_bytes());
    output[8..12].copy_from_slice(&r1.to_be_bytes());
    output[4..8].copy_from_slice(&r2.to_be_bytes());
    output[0..4].copy_from_slice(&r3.to_be_bytes());
}
