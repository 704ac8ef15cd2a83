// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! HMAC over a pluggable [`DigestAlgorithm`], per FIPS 198-1 / RFC 2104.

use alloc::vec;
use alloc::vec::Vec;

use redoubt_digest::{DigestAlgorithm, DigestInstance, DigestSelector};
use redoubt_zero::{FastZeroizable, RedoubtZero, ZeroizeOnDropSentinel};

/// HMAC state. All key-dependent intermediate buffers live here for
/// guaranteed zeroization on drop.
#[derive(RedoubtZero)]
#[fast_zeroize(drop)]
pub struct Hmac {
    #[fast_zeroize(skip)]
    digest: DigestInstance,
    block_size: usize,
    output_size: usize,
    /// K ⊕ ipad (0x36 repeated)
    k_ipad: Vec<u8>,
    /// K ⊕ opad (0x5c repeated)
    k_opad: Vec<u8>,
    /// Key block when key > block_size (hashed key, zero-padded)
    key_block: Vec<u8>,
    /// Inner hash result: Hash(K ⊕ ipad || message)
    inner_hash: Vec<u8>,
    __sentinel: ZeroizeOnDropSentinel,
}

impl Hmac {
    /// Build an HMAC instance over the given digest selector.
    pub fn new(selector: DigestSelector) -> Self {
        let block_size = selector.block_size();
        let output_size = selector.output_size();
        Self {
            digest: selector.instantiate(),
            block_size,
            output_size,
            k_ipad: vec![0u8; block_size],
            k_opad: vec![0u8; block_size],
            key_block: vec![0u8; block_size],
            inner_hash: vec![0u8; output_size],
            __sentinel: ZeroizeOnDropSentinel::default(),
        }
    }

    /// The underlying digest's output size in bytes.
    pub fn output_size(&self) -> usize {
        self.output_size
    }

    /// The underlying digest's block size in bytes.
    pub fn block_size(&self) -> usize {
        self.block_size
    }

    /// HMAC(key, data) written into `out[..output_size()]`.
    ///
    /// Key longer than the digest block size is first hashed; key shorter is
    /// zero-padded to block size.
    pub fn compute(&mut self, key: &[u8], data: &[u8], out: &mut [u8]) {
        // Prevent a stale-bytes window from a previous call.
        self.key_block.fast_zeroize();

        let key_len = if key.len() > self.block_size {
            self.digest.reset();
            self.digest.update(key);
            self.digest.finalize(&mut self.inner_hash);
            self.key_block[..self.output_size].copy_from_slice(&self.inner_hash);
            self.inner_hash.fast_zeroize();
            self.output_size
        } else {
            self.key_block[..key.len()].copy_from_slice(key);
            key.len()
        };

        self.k_ipad.fill(0x36);
        self.k_opad.fill(0x5c);
        for i in 0..key_len {
            self.k_ipad[i] ^= self.key_block[i];
            self.k_opad[i] ^= self.key_block[i];
        }

        // Inner hash: Hash(k_ipad || data)
        self.digest.reset();
        self.digest.update(&self.k_ipad);
        self.digest.update(data);
        self.digest.finalize(&mut self.inner_hash);

        // Outer hash: Hash(k_opad || inner_hash) -> out
        self.digest.reset();
        self.digest.update(&self.k_opad);
        self.digest.update(&self.inner_hash);
        self.digest.finalize(&mut out[..self.output_size]);

        self.k_ipad.fast_zeroize();
        self.k_opad.fast_zeroize();
        self.key_block.fast_zeroize();
        self.inner_hash.fast_zeroize();
    }
}
