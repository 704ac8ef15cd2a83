// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! HMAC and HKDF over a pluggable digest, with secure memory handling.
//!
//! Implementation per RFC 5869 (HKDF) and FIPS 198-1 / RFC 2104 (HMAC). The
//! digest itself is supplied by [`redoubt_digest`]; this crate never
//! hardcodes a particular hash function. All intermediate values are
//! zeroized on drop.
//!
//! References:
//! - RFC 5869: HMAC-based Extract-and-Expand Key Derivation Function (HKDF)
//!   <https://datatracker.ietf.org/doc/html/rfc5869>
//! - RFC 2104 / FIPS 198-1: Keyed-Hashing for Message Authentication

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]

extern crate alloc;

#[cfg(test)]
mod tests;

mod hkdf;
mod hmac;

pub use hkdf::Hkdf;
pub use hmac::Hmac;
