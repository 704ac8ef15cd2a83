// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Pluggable digest selector feeding HMAC/HKDF for the SHX extended key schedule.
//!
//! The core never depends on a concrete hash implementation directly; it depends
//! on [`DigestAlgorithm`], a minimal block/output-size-aware interface, and on
//! [`DigestSelector`], a tagged enum naming the nine digests the schedule
//! tolerates (see the selector table in this crate's docs).
//!
//! | Selector  | output_size | block_size |
//! |-----------|-------------|------------|
//! | Blake256  | 32          | 32         |
//! | Blake512  | 64          | 64         |
//! | Keccak256 | 32          | 136        |
//! | Keccak512 | 64          | 72         |
//! | Sha256    | 32          | 64         |
//! | Sha512    | 64          | 128        |
//! | Skein256  | 32          | 32         |
//! | Skein512  | 64          | 64         |
//! | Skein1024 | 128         | 128        |

#![cfg_attr(not(test), no_std)]

#[cfg(test)]
mod tests;

use blake_hash::{Blake256, Blake512};
use digest::Digest;
use sha2::{Sha256, Sha512};
use sha3::{Keccak256, Keccak512};
use skein_hash::{Skein256, Skein512, Skein1024};
use thiserror::Error;

/// Error surfaced when a numeric or external digest tag does not name a
/// supported selector.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum DigestError {
    /// Digest selector not in the supported set.
    #[error("unsupported digest selector")]
    UnsupportedDigest,
}

/// The minimal hash interface the core requires of a digest primitive.
pub trait DigestAlgorithm {
    /// Input block size in bytes.
    fn block_size(&self) -> usize;
    /// Output hash size in bytes.
    fn output_size(&self) -> usize;
    /// Absorb bytes into the running hash state.
    fn update(&mut self, bytes: &[u8]);
    /// Write the hash output into `out` (must be at least `output_size()`
    /// bytes) and reset to the initial state.
    fn finalize(&mut self, out: &mut [u8]);
    /// Return to the initial state without producing output.
    fn reset(&mut self);
}

/// Names one of the nine digests the extended key schedule tolerates.
///
/// Cheap to copy and compare; carries no hash state. Use [`DigestSelector::instantiate`]
/// to obtain a live [`DigestInstance`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DigestSelector {
    /// BLAKE-256 (original BLAKE, not BLAKE2/3).
    Blake256,
    /// BLAKE-512.
    Blake512,
    /// Raw Keccak-256 (not the NIST SHA3-256 padding variant).
    Keccak256,
    /// Raw Keccak-512.
    Keccak512,
    /// SHA-256.
    Sha256,
    /// SHA-512.
    Sha512,
    /// Skein-256.
    Skein256,
    /// Skein-512.
    Skein512,
    /// Skein-1024.
    Skein1024,
}

impl DigestSelector {
    /// The default selector used when a caller does not configure one.
    pub const DEFAULT: DigestSelector = DigestSelector::Sha512;

    /// Output hash size in bytes, fixed per selector.
    pub const fn output_size(self) -> usize {
        match self {
            DigestSelector::Blake256 => 32,
            DigestSelector::Blake512 => 64,
            DigestSelector::Keccak256 => 32,
            DigestSelector::Keccak512 => 64,
            DigestSelector::Sha256 => 32,
            DigestSelector::Sha512 => 64,
            DigestSelector::Skein256 => 32,
            DigestSelector::Skein512 => 64,
            DigestSelector::Skein1024 => 128,
        }
    }

    /// Input block size in bytes, fixed per selector.
    pub const fn block_size(self) -> usize {
        match self {
            DigestSelector::Blake256 => 32,
            DigestSelector::Blake512 => 64,
            DigestSelector::Keccak256 => 136,
            DigestSelector::Keccak512 => 72,
            DigestSelector::Sha256 => 64,
            DigestSelector::Sha512 => 128,
            DigestSelector::Skein256 => 32,
            DigestSelector::Skein512 => 64,
            DigestSelector::Skein1024 => 128,
        }
    }

    /// Build a numeric-tag selector, failing on an unrecognized code.
    ///
    /// Not part of the core's hot path; provided for callers that persist a
    /// selector as a single byte (e.g. alongside a distribution code).
    pub fn from_code(code: u8) -> Result<Self, DigestError> {
        match code {
            0 => Ok(DigestSelector::Blake256),
            1 => Ok(DigestSelector::Blake512),
            2 => Ok(DigestSelector::Keccak256),
            3 => Ok(DigestSelector::Keccak512),
            4 => Ok(DigestSelector::Sha256),
            5 => Ok(DigestSelector::Sha512),
            6 => Ok(DigestSelector::Skein256),
            7 => Ok(DigestSelector::Skein512),
            8 => Ok(DigestSelector::Skein1024),
            _ => Err(DigestError::UnsupportedDigest),
        }
    }

    /// Instantiate the concrete hasher this selector names.
    pub fn instantiate(self) -> DigestInstance {
        match self {
            DigestSelector::Blake256 => DigestInstance::Blake256(Blake256::new()),
            DigestSelector::Blake512 => DigestInstance::Blake512(Blake512::new()),
            DigestSelector::Keccak256 => DigestInstance::Keccak256(Keccak256::new()),
            DigestSelector::Keccak512 => DigestInstance::Keccak512(Keccak512::new()),
            DigestSelector::Sha256 => DigestInstance::Sha256(Sha256::new()),
            DigestSelector::Sha512 => DigestInstance::Sha512(Sha512::new()),
            DigestSelector::Skein256 => DigestInstance::Skein256(Skein256::new()),
            DigestSelector::Skein512 => DigestInstance::Skein512(Skein512::new()),
            DigestSelector::Skein1024 => DigestInstance::Skein1024(Skein1024::new()),
        }
    }
}

/// A live hasher for one of the nine supported digests.
///
/// Polymorphism here is a tagged variant rather than a trait object: the
/// digest selector is the only dynamic choice HMAC/HKDF make, and it is
/// chosen once at engine construction, never per-block.
pub enum DigestInstance {
    /// BLAKE-256 state.
    Blake256(Blake256),
    /// BLAKE-512 state.
    Blake512(Blake512),
    /// Keccak-256 state.
    Keccak256(Keccak256),
    /// Keccak-512 state.
    Keccak512(Keccak512),
    /// SHA-256 state.
    Sha256(Sha256),
    /// SHA-512 state.
    Sha512(Sha512),
    /// Skein-256 state.
    Skein256(Skein256),
    /// Skein-512 state.
    Skein512(Skein512),
    /// Skein-1024 state.
    Skein1024(Skein1024),
}

macro_rules! dispatch {
    ($self:ident, $inner:ident, $body:expr) => {
        match $self {
            DigestInstance::Blake256($inner) => $body,
            DigestInstance::Blake512($inner) => $body,
            DigestInstance::Keccak256($inner) => $body,
            DigestInstance::Keccak512($inner) => $body,
            DigestInstance::Sha256($inner) => $body,
            DigestInstance::Sha512($inner) => $body,
            DigestInstance::Skein256($inner) => $body,
            DigestInstance::Skein512($inner) => $body,
            DigestInstance::Skein1024($inner) => $body,
        }
    };
}

impl DigestInstance {
    /// The selector this instance was built from.
    pub fn selector(&self) -> DigestSelector {
        match self {
            DigestInstance::Blake256(_) => DigestSelector::Blake256,
            DigestInstance::Blake512(_) => DigestSelector::Blake512,
            DigestInstance::Keccak256(_) => DigestSelector::Keccak256,
            DigestInstance::Keccak512(_) => DigestSelector::Keccak512,
            DigestInstance::Sha256(_) => DigestSelector::Sha256,
            DigestInstance::Sha512(_) => DigestSelector::Sha512,
            DigestInstance::Skein256(_) => DigestSelector::Skein256,
            DigestInstance::Skein512(_) => DigestSelector::Skein512,
            DigestInstance::Skein1024(_) => DigestSelector::Skein1024,
        }
    }
}

impl DigestAlgorithm for DigestInstance {
    fn block_size(&self) -> usize {
        self.selector().block_size()
    }

    fn output_size(&self) -> usize {
        self.selector().output_size()
    }

    fn update(&mut self, bytes: &[u8]) {
        dispatch!(self, d, Digest::update(d, bytes))
    }

    fn finalize(&mut self, out: &mut [u8]) {
        dispatch!(self, d, {
            let result = d.finalize_reset();
            out[..result.len()].copy_from_slice(&result);
        })
    }

    fn reset(&mut self) {
        dispatch!(self, d, Digest::reset(d))
    }
}
