// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! SHX: a Serpent-based 128-bit block cipher with an optional HKDF-expanded
//! extended key schedule.
//!
//! The standard path accepts 16/24/32/64-byte keys and the classic Serpent
//! polynomial key schedule (32 rounds, or 40 rounds for a 64-byte key). Keys
//! longer than 64 bytes route through [`redoubt_hkdf`] instead, which lets the
//! round count grow up to 128 at the cost of a digest selector and a
//! distribution code (see [`SHXEngine::set_distribution_code`]).

#![cfg_attr(not(test), no_std)]

extern crate alloc;

#[cfg(test)]
mod tests;

mod engine;
mod key_schedule;
mod tables;

pub use engine::{SHXEngine, DEFAULT_DISTRIBUTION_CODE, LEGAL_ROUNDS, LEGAL_STANDARD_KEY_SIZES};
