// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use crate::{DigestAlgorithm, DigestError, DigestSelector};

#[test]
fn selector_sizes_match_table() {
    assert_eq!(DigestSelector::Blake256.output_size(), 32);
    assert_eq!(DigestSelector::Blake256.block_size(), 32);
    assert_eq!(DigestSelector::Blake512.output_size(), 64);
    assert_eq!(DigestSelector::Blake512.block_size(), 64);
    assert_eq!(DigestSelector::Keccak256.output_size(), 32);
    assert_eq!(DigestSelector::Keccak256.block_size(), 136);
    assert_eq!(DigestSelector::Keccak512.output_size(), 64);
    assert_eq!(DigestSelector::Keccak512.block_size(), 72);
    assert_eq!(DigestSelector::Sha256.output_size(), 32);
    assert_eq!(DigestSelector::Sha256.block_size(), 64);
    assert_eq!(DigestSelector::Sha512.output_size(), 64);
    assert_eq!(DigestSelector::Sha512.block_size(), 128);
    assert_eq!(DigestSelector::Skein256.output_size(), 32);
    assert_eq!(DigestSelector::Skein256.block_size(), 32);
    assert_eq!(DigestSelector::Skein512.output_size(), 64);
    assert_eq!(DigestSelector::Skein512.block_size(), 64);
    assert_eq!(DigestSelector::Skein1024.output_size(), 128);
    assert_eq!(DigestSelector::Skein1024.block_size(), 128);
}

#[test]
fn from_code_round_trips() {
    for code in 0u8..=8 {
        let selector = DigestSelector::from_code(code).unwrap();
        assert_eq!(selector.instantiate().selector(), selector);
    }
}

#[test]
fn from_code_rejects_unknown() {
    assert_eq!(DigestSelector::from_code(9), Err(DigestError::UnsupportedDigest));
}

#[test]
fn sha256_matches_known_vector() {
    let mut d = DigestSelector::Sha256.instantiate();
    d.update(b"abc");
    let mut out = [0u8; 32];
    d.finalize(&mut out);
    assert_eq!(
        out,
        [
            0xba, 0x78, 0x16, 0xbf, 0x8f, 0x01, 0xcf, 0xea, 0x41, 0x41, 0x40, 0xde, 0x5d, 0xae,
            0x22, 0x23, 0xb0, 0x03, 0x61, 0xa3, 0x96, 0x17, 0x7a, 0x9c, 0xb4, 0x10, 0xff, 0x61,
            0xf2, 0x00, 0x15, 0xad,
        ]
    );
}

#[test]
fn reset_clears_prior_state() {
    let mut d = DigestSelector::Sha256.instantiate();
    d.update(b"garbage that should not affect the next digest");
    d.reset();
    d.update(b"abc");
    let mut out = [0u8; 32];
    d.finalize(&mut out);
    assert_eq!(out[0], 0xba);
}

#[test]
fn finalize_resets_state_for_reuse() {
    let mut d = DigestSelector::Sha256.instantiate();
    d.update(b"abc");
    let mut first = [0u8; 32];
    d.finalize(&mut first);

    d.update(b"abc");
    let mut second = [0u8; 32];
    d.finalize(&mut second);

    assert_eq!(first, second);
}
