// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! KeyScheduleTFX: produces the round subkey words and the key-dependent
//! 1024-entry S-box table, atomically, from a 16/24/32/64-byte key.

use alloc::vec;
use alloc::vec::Vec;

use redoubt_cipher_core::Error;

use crate::tables::{h_layers, mds_column, mds_encode, rotl, rs_mds_encode, SK_BUMP, SK_STEP};

/// Key sizes, in bytes, TFX accepts.
pub const LEGAL_KEY_SIZES: [usize; 4] = [16, 24, 32, 64];

/// The round subkey words and key-dependent S-box table produced atomically
/// by [`expand`].
pub(crate) struct TfxKeyMaterial {
    /// `2r + 8` round subkey words (index 0..3 pre-whitening, 4..7
    /// post-whitening, 8.. the per-round Feistel subkeys).
    pub(crate) round_keys: Vec<u32>,
    /// The 1024-entry key-dependent S-box table feeding `Fe0`/`Fe3`.
    pub(crate) s_box: Vec<u32>,
}

/// `F32`: the Twofish `h` function over `x`'s little-endian bytes, keyed by
/// `key_words` (`eKm` or `oKm`, length `k64`), followed by an MDS multiply.
fn f32(x: u32, key_words: &[u32], k64: usize) -> u32 {
    let bytes = h_layers(x.to_le_bytes(), key_words, k64);
    mds_encode(bytes)
}

/// Splits the key into `eKm`/`oKm` (pairs of little-endian 32-bit words) and
/// folds each pair into one `sbKey` word via the Reed-Solomon `MDSEncode`
/// recurrence, reversed into place (design §4.5 steps 2-3).
fn build_km_and_sbkey(key: &[u8], k64: usize) -> (Vec<u32>, Vec<u32>, Vec<u32>) {
    let mut e_km = vec![0u32; k64];
    let mut o_km = vec![0u32; k64];
    for i in 0..k64 {
        let even = &key[i * 8..i * 8 + 4];
        let odd = &key[i * 8 + 4..i * 8 + 8];
        e_km[i] = u32::from_le_bytes([even[0], even[1], even[2], even[3]]);
        o_km[i] = u32::from_le_bytes([odd[0], odd[1], odd[2], odd[3]]);
    }

    let mut sb_key = vec![0u32; k64];
    for i in 0..k64 {
        sb_key[k64 - 1 - i] = rs_mds_encode(e_km[i], o_km[i]);
    }

    (e_km, o_km, sb_key)
}

/// Builds the `2r + 8` round subkey words (design §4.5 step 4).
fn build_round_keys(e_km: &[u32], o_km: &[u32], k64: usize, rounds: usize) -> Vec<u32> {
    let total = 2 * rounds + 8;
    let mut wk = vec![0u32; total];

    for kc in 0..(total / 2) as u32 {
        let a0 = f32(kc.wrapping_mul(SK_STEP), e_km, k64);
        let b0 = f32(kc.wrapping_mul(SK_STEP).wrapping_add(SK_BUMP), o_km, k64);
        let b = rotl(b0, 8);
        let a1 = a0.wrapping_add(b);
        wk[2 * kc as usize] = a1;
        let a2 = a1.wrapping_add(b);
        wk[2 * kc as usize + 1] = rotl(a2, 9);
    }

    wk
}

/// Builds the 1024-entry key-dependent S-box table (design §4.5 step 5).
fn build_s_box(sb_key: &[u32], k64: usize) -> Vec<u32> {
    let mut s_box = vec![0u32; 1024];

    for kc in 0..256u32 {
        let seed = [kc as u8; 4];
        let y = h_layers(seed, sb_key, k64);
        let idx = 2 * kc as usize;
        s_box[idx] = mds_column(0, y[0]);
        s_box[idx + 1] = mds_column(1, y[1]);
        s_box[idx + 0x200] = mds_column(2, y[2]);
        s_box[idx + 0x201] = mds_column(3, y[3]);
    }

    s_box
}

/// Runs the full TFX key schedule: round subkeys plus the key-dependent
/// S-box table, built atomically from one key and round count.
pub(crate) fn expand(key: &[u8], rounds: usize) -> Result<TfxKeyMaterial, Error> {
    if !LEGAL_KEY_SIZES.contains(&key.len()) {
        return Err(Error::InvalidKeySize);
    }

    let k64 = key.len() / 8;
    let (e_km, o_km, sb_key) = build_km_and_sbkey(key, k64);

    Ok(TfxKeyMaterial {
        round_keys: build_round_keys(&e_km, &o_km, k64, rounds),
        s_box: build_s_box(&sb_key, k64),
    })
}
