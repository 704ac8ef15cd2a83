// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! HKDF extract-and-expand key derivation per RFC 5869, over a pluggable digest.

use alloc::vec;
use alloc::vec::Vec;

use redoubt_cipher_core::Error;
use redoubt_digest::DigestSelector;
use redoubt_zero::{FastZeroizable, RedoubtZero, ZeroizeOnDropSentinel};

use crate::hmac::Hmac;

/// HKDF state with all intermediate buffers.
///
/// Usage mirrors RFC 5869's two phases: [`Hkdf::initialize`] runs Extract and
/// stashes the `info` context; [`Hkdf::generate`] runs Expand into a
/// caller-supplied buffer of any length up to `255 * output_size()`.
#[derive(RedoubtZero)]
#[fast_zeroize(drop)]
pub struct Hkdf {
    hmac: Hmac,
    output_size: usize,
    /// PRK = HMAC-Hash(salt, IKM) from the Extract phase
    prk: Vec<u8>,
    /// T(i-1) for the Expand phase
    t_prev: Vec<u8>,
    /// T(i) for the Expand phase
    t_curr: Vec<u8>,
    /// Length of valid data in t_prev (0 for T(0))
    t_prev_len: usize,
    /// The `info` / distribution-code context stashed by `initialize`
    info: Vec<u8>,
    /// Buffer for expand message: t_prev || info || counter
    expand_buf: Vec<u8>,
    __sentinel: ZeroizeOnDropSentinel,
}

impl Hkdf {
    /// Build an HKDF instance over the given digest selector.
    pub fn new(selector: DigestSelector) -> Self {
        let output_size = selector.output_size();
        Self {
            hmac: Hmac::new(selector),
            output_size,
            prk: vec![0u8; output_size],
            t_prev: vec![0u8; output_size],
            t_curr: vec![0u8; output_size],
            t_prev_len: 0,
            info: Vec::new(),
            expand_buf: Vec::new(),
            __sentinel: ZeroizeOnDropSentinel::default(),
        }
    }

    /// The underlying digest's output size in bytes.
    pub fn output_size(&self) -> usize {
        self.output_size
    }

    /// Extract phase (RFC 5869 §2.2) plus stashing `info` for Expand.
    ///
    /// If `salt` is empty, a zero buffer of `output_size()` bytes is used.
    pub fn initialize(&mut self, salt: &[u8], ikm: &[u8], info: &[u8]) {
        if salt.is_empty() {
            let zero_salt = vec![0u8; self.output_size];
            self.hmac.compute(&zero_salt, ikm, &mut self.prk);
        } else {
            self.hmac.compute(salt, ikm, &mut self.prk);
        }

        self.info.clear();
        self.info.extend_from_slice(info);
    }

    /// Expand phase (RFC 5869 §2.3): fill `out` with `out.len()` derived bytes.
    ///
    /// Fails with [`Error::LengthExceeded`] if `out.len() > 255 * output_size()`.
    pub fn generate(&mut self, out: &mut [u8]) -> Result<(), Error> {
        let max_len = 255 * self.output_size;
        if out.len() > max_len {
            return Err(Error::LengthExceeded);
        }

        let out_len = out.len();
        let n = out_len.div_ceil(self.output_size.max(1));
        let mut offset = 0;

        // T(0) = empty
        self.t_prev_len = 0;

        for i in 1..=n {
            self.expand_buf.clear();

            if self.t_prev_len > 0 {
                self.expand_buf
                    .extend_from_slice(&self.t_prev[..self.t_prev_len]);
            }

            self.expand_buf.extend_from_slice(&self.info);
            self.expand_buf.push(i as u8);

            self.hmac
                .compute(&self.prk, &self.expand_buf, &mut self.t_curr);

            let copy_len = core::cmp::min(self.output_size, out_len - offset);
            out[offset..offset + copy_len].copy_from_slice(&self.t_curr[..copy_len]);
            offset += copy_len;

            self.t_prev.copy_from_slice(&self.t_curr);
            self.t_prev_len = self.output_size;

            self.t_curr.fast_zeroize();
        }

        self.expand_buf.fast_zeroize();
        self.t_prev.fast_zeroize();

        Ok(())
    }
}
