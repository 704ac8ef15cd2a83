// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! # Redoubt
//!
//! An extended symmetric block-cipher core: two 128-bit block ciphers with
//! extended-key and extended-round variants.
//!
//! - [`shx`] — **SHX**, a Serpent-based cipher whose key schedule can route
//!   through an HKDF expansion (over a pluggable digest) for keys beyond 64
//!   bytes, unlocking round counts up to 128.
//! - [`tfx`] — **TFX**, a Twofish-based cipher extended to accept a 512-bit
//!   (64-byte) key, deepening the key-dependent S-box construction to match.
//! - [`ecb`] — minimal Electronic Codebook mode glue over either engine.
//! - [`hkdf`] — the HMAC/HKDF machinery ([`hkdf::Hmac`], [`hkdf::Hkdf`]) that
//!   powers SHX's extended key schedule, usable standalone.
//! - [`digest`] — the pluggable digest selector ([`digest::DigestSelector`])
//!   both SHX and the HKDF layer consume.
//! - [`cipher_core`] — the shared `Error`/`Direction`/`BlockCipher`
//!   vocabulary every engine and mode implements.
//!
//! # Quick start
//!
//! ```rust
//! use redoubt::cipher_core::{BlockCipher, Direction};
//! use redoubt::digest::DigestSelector;
//! use redoubt::shx::SHXEngine;
//!
//! let key = [0u8; 32];
//! let plaintext = [0u8; 16];
//!
//! let mut engine = SHXEngine::new(32, DigestSelector::DEFAULT);
//! engine.initialize(Direction::Encrypt, &key).unwrap();
//!
//! let mut ciphertext = [0u8; 16];
//! engine.transform_block(&plaintext, &mut ciphertext).unwrap();
//! ```
//!
//! Keys longer than 64 bytes route SHX through its HKDF-expanded schedule,
//! unlocking round counts above 32:
//!
//! ```rust
//! use redoubt::cipher_core::{BlockCipher, Direction};
//! use redoubt::digest::DigestSelector;
//! use redoubt::shx::SHXEngine;
//!
//! // 64 bytes of IKM + one 128-byte SHA-512 salt block.
//! let key = [7u8; 192];
//!
//! let mut engine = SHXEngine::new(40, DigestSelector::Sha512);
//! engine.set_distribution_code(b"example personalization string");
//! engine.initialize(Direction::Encrypt, &key).unwrap();
//! ```
//!
//! TFX accepts the same 512-bit key extension on the Twofish side:
//!
//! ```rust
//! use redoubt::cipher_core::{BlockCipher, Direction};
//! use redoubt::tfx::TFXEngine;
//!
//! let key = [3u8; 64];
//! let mut engine = TFXEngine::new(32);
//! engine.initialize(Direction::Encrypt, &key).unwrap();
//! ```
//!
//! ECB is a thin wrapper that delegates block-for-block to either engine:
//!
//! ```rust
//! use redoubt::cipher_core::Direction;
//! use redoubt::digest::DigestSelector;
//! use redoubt::ecb::ECBMode;
//! use redoubt::shx::SHXEngine;
//!
//! let key = [0u8; 32];
//! let mut ecb = ECBMode::new(SHXEngine::new(32, DigestSelector::DEFAULT));
//! ecb.initialize(Direction::Encrypt, &key).unwrap();
//!
//! let blocks = [0u8; 32]; // two contiguous 16-byte blocks
//! let mut out = [0u8; 32];
//! ecb.transform_blocks(&blocks, &mut out).unwrap();
//! ```
//!
//! # Scope
//!
//! This crate is the cryptographic core only: streaming modes beyond ECB
//! (CBC, CTR), padding schemes, file/key-container I/O, CLI tooling, secure
//! RNGs, and authenticated encryption are deliberately out of scope. Every
//! engine zeroizes its expanded key material (and, for TFX, its
//! key-dependent S-box table) on drop via [`redoubt_zero`].
//!
//! # `no_std`
//!
//! Every crate in this workspace is `no_std` plus `alloc`.

#![cfg_attr(not(test), no_std)]

#[cfg(test)]
mod tests;

pub use redoubt_cipher_core as cipher_core;
pub use redoubt_digest as digest;
pub use redoubt_ecb as ecb;
pub use redoubt_hkdf as hkdf;
pub use redoubt_shx as shx;
pub use redoubt_tfx as tfx;
pub use redoubt_util as util;
pub use redoubt_zero as zero;
