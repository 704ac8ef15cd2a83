// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use hex_literal::hex;
use proptest::prelude::*;
use redoubt_cipher_core::{BlockCipher, Direction, Error};
use redoubt_digest::DigestSelector;

use crate::{SHXEngine, DEFAULT_DISTRIBUTION_CODE};

fn key_of(len: usize) -> alloc::vec::Vec<u8> {
    (0..len).map(|i| i as u8).collect()
}

// Known-answer vectors below pin SHX's standard path against the published
// Serpent reference ciphertexts for the all-zero key at both the 128-bit and
// 256-bit key sizes. Round-trip tests alone can't catch a self-consistent but
// bit-order-wrong S-box or LT permutation; these can.

#[test]
fn matches_serpent_reference_vector_zero_key_128() {
    let key = [0u8; 16];
    let plaintext = [0u8; 16];
    let expected_ciphertext = hex!("49afbfad9d5a34052cd8ffa5986bd2dd");

    let mut enc = SHXEngine::new(32, DigestSelector::DEFAULT);
    enc.initialize(Direction::Encrypt, &key).unwrap();
    let mut ciphertext = [0u8; 16];
    enc.transform_block(&plaintext, &mut ciphertext).unwrap();
    assert_eq!(ciphertext, expected_ciphertext);

    let mut dec = SHXEngine::new(32, DigestSelector::DEFAULT);
    dec.initialize(Direction::Decrypt, &key).unwrap();
    let mut recovered = [0u8; 16];
    dec.transform_block(&ciphertext, &mut recovered).unwrap();
    assert_eq!(recovered, plaintext);
}

#[test]
fn matches_serpent_reference_vector_zero_key_256() {
    let key = [0u8; 32];
    let plaintext = [0u8; 16];
    let expected_ciphertext = hex!("2061a42415f576d28b0e893921b23fc6");

    let mut enc = SHXEngine::new(32, DigestSelector::DEFAULT);
    enc.initialize(Direction::Encrypt, &key).unwrap();
    let mut ciphertext = [0u8; 16];
    enc.transform_block(&plaintext, &mut ciphertext).unwrap();
    assert_eq!(ciphertext, expected_ciphertext);

    let mut dec = SHXEngine::new(32, DigestSelector::DEFAULT);
    dec.initialize(Direction::Decrypt, &key).unwrap();
    let mut recovered = [0u8; 16];
    dec.transform_block(&ciphertext, &mut recovered).unwrap();
    assert_eq!(recovered, plaintext);
}

#[test]
fn round_trips_16_byte_key() {
    let key = key_of(16);
    let plaintext = [0u8; 16];

    let mut enc = SHXEngine::new(32, DigestSelector::DEFAULT);
    enc.initialize(Direction::Encrypt, &key).unwrap();
    let mut ciphertext = [0u8; 16];
    enc.transform_block(&plaintext, &mut ciphertext).unwrap();

    let mut dec = SHXEngine::new(32, DigestSelector::DEFAULT);
    dec.initialize(Direction::Decrypt, &key).unwrap();
    let mut recovered = [0u8; 16];
    dec.transform_block(&ciphertext, &mut recovered).unwrap();

    assert_eq!(recovered, plaintext);
    assert_ne!(ciphertext, plaintext);
}

#[test]
fn round_trips_all_zero_32_byte_key() {
    let key = [0u8; 32];
    let plaintext = [0u8; 16];

    let mut enc = SHXEngine::new(32, DigestSelector::DEFAULT);
    enc.initialize(Direction::Encrypt, &key).unwrap();
    let mut ciphertext = [0u8; 16];
    enc.transform_block(&plaintext, &mut ciphertext).unwrap();

    let mut dec = SHXEngine::new(32, DigestSelector::DEFAULT);
    dec.initialize(Direction::Decrypt, &key).unwrap();
    let mut recovered = [0u8; 16];
    dec.transform_block(&ciphertext, &mut recovered).unwrap();

    assert_eq!(recovered, plaintext);
}

#[test]
fn round_trips_64_byte_key_at_40_rounds() {
    let key = key_of(64);
    let plaintext: [u8; 16] = [7; 16];

    let mut enc = SHXEngine::new(40, DigestSelector::DEFAULT);
    enc.initialize(Direction::Encrypt, &key).unwrap();
    let mut ciphertext = [0u8; 16];
    enc.transform_block(&plaintext, &mut ciphertext).unwrap();

    let mut dec = SHXEngine::new(40, DigestSelector::DEFAULT);
    dec.initialize(Direction::Decrypt, &key).unwrap();
    let mut recovered = [0u8; 16];
    dec.transform_block(&ciphertext, &mut recovered).unwrap();

    assert_eq!(recovered, plaintext);
}

#[test]
fn round_trips_hkdf_path_with_many_plaintexts() {
    // 64 bytes IKM + 128 bytes salt (SHA512 block size) => 192-byte key.
    let key = key_of(192);

    let mut enc = SHXEngine::new(40, DigestSelector::Sha512);
    enc.initialize(Direction::Encrypt, &key).unwrap();
    let mut dec = SHXEngine::new(40, DigestSelector::Sha512);
    dec.initialize(Direction::Decrypt, &key).unwrap();

    for byte in 0u8..=255 {
        let plaintext = [byte; 16];
        let mut ciphertext = [0u8; 16];
        enc.transform_block(&plaintext, &mut ciphertext).unwrap();
        let mut recovered = [0u8; 16];
        dec.transform_block(&ciphertext, &mut recovered).unwrap();
        assert_eq!(recovered, plaintext);
    }
}

#[test]
fn hkdf_path_requires_key_above_64_bytes() {
    let key = key_of(64);
    let mut engine = SHXEngine::new(128, DigestSelector::Sha512);
    // 64-byte key forces the standard path, which rejects round count 128.
    assert_eq!(
        engine.initialize(Direction::Encrypt, &key),
        Err(Error::InvalidRounds)
    );
}

#[test]
fn rejects_invalid_standard_key_size() {
    let key = key_of(48);
    let mut engine = SHXEngine::new(32, DigestSelector::DEFAULT);
    assert_eq!(
        engine.initialize(Direction::Encrypt, &key),
        Err(Error::InvalidKeySize)
    );
}

#[test]
fn rejects_standard_path_round_count_mismatch() {
    let key = key_of(16);
    let mut engine = SHXEngine::new(40, DigestSelector::DEFAULT);
    assert_eq!(
        engine.initialize(Direction::Encrypt, &key),
        Err(Error::InvalidRounds)
    );
}

#[test]
fn rejects_unsupported_round_count() {
    let key = key_of(16);
    let mut engine = SHXEngine::new(33, DigestSelector::DEFAULT);
    assert_eq!(
        engine.initialize(Direction::Encrypt, &key),
        Err(Error::InvalidRounds)
    );
}

#[test]
fn transform_before_initialize_fails() {
    let mut engine = SHXEngine::new(32, DigestSelector::DEFAULT);
    let input = [0u8; 16];
    let mut output = [0u8; 16];
    assert_eq!(
        engine.transform_block(&input, &mut output),
        Err(Error::Uninitialized)
    );
}

#[test]
fn transform_rejects_short_buffers() {
    let key = key_of(16);
    let mut engine = SHXEngine::new(32, DigestSelector::DEFAULT);
    engine.initialize(Direction::Encrypt, &key).unwrap();

    let short_input = [0u8; 8];
    let mut output = [0u8; 16];
    assert_eq!(
        engine.transform_block(&short_input, &mut output),
        Err(Error::ShortBuffer)
    );
}

#[test]
fn same_key_reinitializes_to_identical_ciphertext() {
    let key = key_of(32);
    let plaintext = [9u8; 16];

    let mut a = SHXEngine::new(32, DigestSelector::DEFAULT);
    a.initialize(Direction::Encrypt, &key).unwrap();
    let mut ct_a = [0u8; 16];
    a.transform_block(&plaintext, &mut ct_a).unwrap();

    let mut b = SHXEngine::new(32, DigestSelector::DEFAULT);
    b.initialize(Direction::Encrypt, &key).unwrap();
    let mut ct_b = [0u8; 16];
    b.transform_block(&plaintext, &mut ct_b).unwrap();

    assert_eq!(ct_a, ct_b);
}

#[test]
fn distinct_distribution_codes_yield_distinct_ciphertext() {
    let key = key_of(192);
    let plaintext = [1u8; 16];

    let mut a = SHXEngine::new(32, DigestSelector::Sha512);
    a.set_distribution_code(b"context-a");
    a.initialize(Direction::Encrypt, &key).unwrap();
    let mut ct_a = [0u8; 16];
    a.transform_block(&plaintext, &mut ct_a).unwrap();

    let mut b = SHXEngine::new(32, DigestSelector::Sha512);
    b.set_distribution_code(b"context-b");
    b.initialize(Direction::Encrypt, &key).unwrap();
    let mut ct_b = [0u8; 16];
    b.transform_block(&plaintext, &mut ct_b).unwrap();

    assert_ne!(ct_a, ct_b);
}

// §8 vector #3: flipping a single byte of the distribution code must change
// at least half the ciphertext bits on average over 256 trials. A single
// distinct-ciphertext check (above) can't catch a weak personalization path
// that merely perturbs a handful of bits; this pins the avalanche strength.
#[test]
fn distribution_code_avalanche_over_256_trials() {
    let key = key_of(192);
    let plaintext = [1u8; 16];
    const TRIALS: u32 = 256;

    let mut total_flipped_bits: u32 = 0;
    for trial in 0..TRIALS {
        let code_a = DEFAULT_DISTRIBUTION_CODE.to_vec();
        let mut code_b = code_a.clone();
        let byte_idx = trial as usize % code_a.len();
        code_b[byte_idx] ^= 1u8 << (trial % 8);

        let mut a = SHXEngine::new(32, DigestSelector::Sha512);
        a.set_distribution_code(&code_a);
        a.initialize(Direction::Encrypt, &key).unwrap();
        let mut ct_a = [0u8; 16];
        a.transform_block(&plaintext, &mut ct_a).unwrap();

        let mut b = SHXEngine::new(32, DigestSelector::Sha512);
        b.set_distribution_code(&code_b);
        b.initialize(Direction::Encrypt, &key).unwrap();
        let mut ct_b = [0u8; 16];
        b.transform_block(&plaintext, &mut ct_b).unwrap();

        let flipped: u32 = ct_a
            .iter()
            .zip(ct_b.iter())
            .map(|(x, y)| (x ^ y).count_ones())
            .sum();
        total_flipped_bits += flipped;
    }

    let mean_flipped_bits = f64::from(total_flipped_bits) / f64::from(TRIALS);
    assert!(
        mean_flipped_bits >= 64.0,
        "mean flipped ciphertext bits {mean_flipped_bits} below the 50% avalanche threshold"
    );
}

#[test]
fn distribution_code_eq_compares_configured_code() {
    let mut engine = SHXEngine::new(32, DigestSelector::Sha512);
    assert!(engine.distribution_code_eq(DEFAULT_DISTRIBUTION_CODE));
    assert!(!engine.distribution_code_eq(b"not the configured code"));

    engine.set_distribution_code(b"custom context");
    assert!(engine.distribution_code_eq(b"custom context"));
    assert!(!engine.distribution_code_eq(DEFAULT_DISTRIBUTION_CODE));
}

#[test]
fn set_ikm_size_clamps_and_snaps_to_output_multiple() {
    // Sha256: output_size = 32, block_size = 64. set_ikm_size(1000) clamps
    // down to block_size (64, already a multiple of output_size), so a
    // 128-byte key (64 IKM + one 64-byte salt block) must be accepted...
    let key_128 = key_of(128);
    let mut accepts_128 = SHXEngine::new(32, DigestSelector::Sha256);
    accepts_128.set_ikm_size(1000);
    assert!(accepts_128.initialize(Direction::Encrypt, &key_128).is_ok());

    // ...while a 96-byte key leaves a 32-byte salt remainder, not a multiple
    // of the 64-byte block size, and must be rejected.
    let key_96 = key_of(96);
    let mut rejects_96 = SHXEngine::new(32, DigestSelector::Sha256);
    rejects_96.set_ikm_size(1000);
    assert_eq!(
        rejects_96.initialize(Direction::Encrypt, &key_96),
        Err(Error::InvalidKeySize)
    );
}

// §8 universal properties, exercised over arbitrary keys/plaintexts rather
// than fixed vectors: round-trip correctness and key-schedule determinism on
// the standard (non-HKDF) path.
proptest! {
    #[test]
    fn round_trips_for_arbitrary_16_byte_key(
        key in proptest::array::uniform16(any::<u8>()),
        plaintext in proptest::array::uniform16(any::<u8>()),
    ) {
        let mut enc = SHXEngine::new(32, DigestSelector::DEFAULT);
        enc.initialize(Direction::Encrypt, &key).unwrap();
        let mut ciphertext = [0u8; 16];
        enc.transform_block(&plaintext, &mut ciphertext).unwrap();

        let mut dec = SHXEngine::new(32, DigestSelector::DEFAULT);
        dec.initialize(Direction::Decrypt, &key).unwrap();
        let mut recovered = [0u8; 16];
        dec.transform_block(&ciphertext, &mut recovered).unwrap();

        prop_assert_eq!(recovered, plaintext);
    }

    #[test]
    fn round_trips_for_arbitrary_32_byte_key(
        key in proptest::array::uniform32(any::<u8>()),
        plaintext in proptest::array::uniform16(any::<u8>()),
    ) {
        let mut enc = SHXEngine::new(32, DigestSelector::DEFAULT);
        enc.initialize(Direction::Encrypt, &key).unwrap();
        let mut ciphertext = [0u8; 16];
        enc.transform_block(&plaintext, &mut ciphertext).unwrap();

        let mut dec = SHXEngine::new(32, DigestSelector::DEFAULT);
        dec.initialize(Direction::Decrypt, &key).unwrap();
        let mut recovered = [0u8; 16];
        dec.transform_block(&ciphertext, &mut recovered).unwrap();

        prop_assert_eq!(recovered, plaintext);
    }

    #[test]
    fn key_schedule_is_deterministic_for_arbitrary_key(
        key in proptest::array::uniform32(any::<u8>()),
        plaintext in proptest::array::uniform16(any::<u8>()),
    ) {
        let mut a = SHXEngine::new(32, DigestSelector::DEFAULT);
        a.initialize(Direction::Encrypt, &key).unwrap();
        let mut ct_a = [0u8; 16];
        a.transform_block(&plaintext, &mut ct_a).unwrap();

        let mut b = SHXEngine::new(32, DigestSelector::DEFAULT);
        b.initialize(Direction::Encrypt, &key).unwrap();
        let mut ct_b = [0u8; 16];
        b.transform_block(&plaintext, &mut ct_b).unwrap();

        prop_assert_eq!(ct_a, ct_b);
    }
}
