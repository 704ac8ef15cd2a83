// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use proptest::prelude::*;
use redoubt_cipher_core::{BlockCipher, Direction};
use redoubt_digest::DigestSelector;
use redoubt_ecb::ECBMode;
use redoubt_shx::SHXEngine;
use redoubt_tfx::TFXEngine;

#[test]
fn shx_and_tfx_round_trip_side_by_side() {
    let plaintext = [0xAB; 16];

    let shx_key = [0u8; 32];
    let mut shx_enc = SHXEngine::new(32, DigestSelector::DEFAULT);
    shx_enc.initialize(Direction::Encrypt, &shx_key).unwrap();
    let mut shx_ct = [0u8; 16];
    shx_enc.transform_block(&plaintext, &mut shx_ct).unwrap();

    let tfx_key = [0u8; 32];
    let mut tfx_enc = TFXEngine::new(16);
    tfx_enc.initialize(Direction::Encrypt, &tfx_key).unwrap();
    let mut tfx_ct = [0u8; 16];
    tfx_enc.transform_block(&plaintext, &mut tfx_ct).unwrap();

    // Two unrelated ciphers over the same plaintext and all-zero key must
    // not coincidentally agree.
    assert_ne!(shx_ct, tfx_ct);
}

#[test]
fn ecb_over_shx_hkdf_path_round_trips() {
    let key = [11u8; 192];

    let mut enc = ECBMode::new(SHXEngine::new(48, DigestSelector::Sha512));
    enc.initialize(Direction::Encrypt, &key).unwrap();
    let mut dec = ECBMode::new(SHXEngine::new(48, DigestSelector::Sha512));
    dec.initialize(Direction::Decrypt, &key).unwrap();

    let plaintext = [0u8; 48]; // three contiguous blocks
    let mut ciphertext = [0u8; 48];
    enc.transform_blocks(&plaintext, &mut ciphertext).unwrap();

    let mut recovered = [0u8; 48];
    dec.transform_blocks(&ciphertext, &mut recovered).unwrap();

    assert_eq!(recovered, plaintext);
    assert_ne!(ciphertext, plaintext);
}

#[test]
fn ecb_over_tfx_512_bit_key_round_trips() {
    let key = [0x5Au8; 64];

    let mut enc = ECBMode::new(TFXEngine::new(32));
    enc.initialize(Direction::Encrypt, &key).unwrap();
    let mut dec = ECBMode::new(TFXEngine::new(32));
    dec.initialize(Direction::Decrypt, &key).unwrap();

    let plaintext = [0x11u8; 32];
    let mut ciphertext = [0u8; 32];
    enc.transform_blocks(&plaintext, &mut ciphertext).unwrap();

    let mut recovered = [0u8; 32];
    dec.transform_blocks(&ciphertext, &mut recovered).unwrap();

    assert_eq!(recovered, plaintext);
}

// §8 universal property at the facade layer: ECB over either cipher must
// round-trip for an arbitrary whole number of blocks, not just the fixed
// three/two-block vectors above.
proptest! {
    #[test]
    fn ecb_over_shx_round_trips_for_arbitrary_block_count(
        plaintext in (1usize..=8).prop_flat_map(|blocks| proptest::collection::vec(any::<u8>(), blocks * 16)),
    ) {
        let key = [7u8; 32];

        let mut enc = ECBMode::new(SHXEngine::new(32, DigestSelector::DEFAULT));
        enc.initialize(Direction::Encrypt, &key).unwrap();
        let mut ciphertext = vec![0u8; plaintext.len()];
        enc.transform_blocks(&plaintext, &mut ciphertext).unwrap();

        let mut dec = ECBMode::new(SHXEngine::new(32, DigestSelector::DEFAULT));
        dec.initialize(Direction::Decrypt, &key).unwrap();
        let mut recovered = vec![0u8; plaintext.len()];
        dec.transform_blocks(&ciphertext, &mut recovered).unwrap();

        prop_assert_eq!(recovered, plaintext);
    }

    #[test]
    fn ecb_over_tfx_round_trips_for_arbitrary_block_count(
        plaintext in (1usize..=8).prop_flat_map(|blocks| proptest::collection::vec(any::<u8>(), blocks * 16)),
    ) {
        let key = [9u8; 16];

        let mut enc = ECBMode::new(TFXEngine::new(16));
        enc.initialize(Direction::Encrypt, &key).unwrap();
        let mut ciphertext = vec![0u8; plaintext.len()];
        enc.transform_blocks(&plaintext, &mut ciphertext).unwrap();

        let mut dec = ECBMode::new(TFXEngine::new(16));
        dec.initialize(Direction::Decrypt, &key).unwrap();
        let mut recovered = vec![0u8; plaintext.len()];
        dec.transform_blocks(&ciphertext, &mut recovered).unwrap();

        prop_assert_eq!(recovered, plaintext);
    }
}
