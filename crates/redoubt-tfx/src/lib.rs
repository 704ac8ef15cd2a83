// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! TFX: a Twofish-based 128-bit block cipher with a 512-bit key extension.
//!
//! Twofish's standard key schedule already tolerates 128/192/256-bit keys;
//! this engine extends it to a 512-bit (64-byte) key by letting `k64` (the
//! number of 64-bit key words) grow to 8, which in turn deepens the
//! key-dependent S-box construction by the same number of Q-box layers. The
//! round count is independently adjustable across the odd/even-free range
//! [`LEGAL_ROUNDS`].

#![cfg_attr(not(test), no_std)]

extern crate alloc;

#[cfg(test)]
mod tests;

mod engine;
mod key_schedule;
mod tables;

pub use engine::{TFXEngine, DEFAULT_ROUNDS, LEGAL_ROUNDS};
pub use key_schedule::LEGAL_KEY_SIZES;
