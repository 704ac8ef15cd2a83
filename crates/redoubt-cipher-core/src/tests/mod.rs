// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use crate::{check_block_buffers, Error, BLOCK_SIZE};
use redoubt_digest::DigestError;

#[test]
fn rejects_short_input() {
    let input = [0u8; BLOCK_SIZE - 1];
    let output = [0u8; BLOCK_SIZE];
    assert_eq!(check_block_buffers(&input, &output), Err(Error::ShortBuffer));
}

#[test]
fn rejects_short_output() {
    let input = [0u8; BLOCK_SIZE];
    let output = [0u8; BLOCK_SIZE - 1];
    assert_eq!(check_block_buffers(&input, &output), Err(Error::ShortBuffer));
}

#[test]
fn accepts_exact_block() {
    let input = [0u8; BLOCK_SIZE];
    let output = [0u8; BLOCK_SIZE];
    assert_eq!(check_block_buffers(&input, &output), Ok(()));
}

#[test]
fn accepts_oversized_buffers() {
    let input = [0u8; BLOCK_SIZE * 2];
    let output = [0u8; BLOCK_SIZE * 2];
    assert_eq!(check_block_buffers(&input, &output), Ok(()));
}

#[test]
fn digest_error_maps_to_unsupported_digest() {
    let err: Error = DigestError::UnsupportedDigest.into();
    assert_eq!(err, Error::UnsupportedDigest);
}
