// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! KeyScheduleSHX: produces the expanded round-key words, via the standard
//! polynomial expansion (key length up to 64 bytes) or the HKDF-expanded
//! path (key length beyond 64 bytes).

use alloc::vec;
use alloc::vec::Vec;

use redoubt_cipher_core::Error;
use redoubt_digest::DigestSelector;
use redoubt_hkdf::Hkdf;

use crate::tables::{apply_sbox, rotl, PHI, SBOXES};

fn build_padded_temp(key: &[u8], pad_size: usize) -> Vec<u32> {
    let mut tmp = vec![0u32; pad_size];
    let key_words = key.len() / 4;

    // Reverse-copy the key in 4-byte big-endian groups: the key's last word
    // lands at tmp[0], its first word at tmp[key_words - 1].
    for i in 0..key_words {
        let word_idx = key_words - 1 - i;
        let b = &key[word_idx * 4..word_idx * 4 + 4];
        tmp[i] = u32::from_be_bytes([b[0], b[1], b[2], b[3]]);
    }

    if key_words < 8 {
        tmp[key_words] = 1;
    }

    tmp
}

/// `tmp[i] = rotl(<lookback terms> ^ PHI ^ (i - exp_offset), 11)`, where the
/// lookback distances depend on `base` (8 for the 32-byte-path recurrence,
/// 16 for the 64-byte-path extended recurrence).
fn recurrence_word(buf: &[u32], i: usize, base: usize, exp_offset: usize) -> u32 {
    let x = if base == 8 {
        buf[i - 8] ^ buf[i - 5] ^ buf[i - 3] ^ buf[i - 1]
    } else {
        buf[i - 16]
            ^ buf[i - 13]
            ^ buf[i - 11]
            ^ buf[i - 10]
            ^ buf[i - 8]
            ^ buf[i - 5]
            ^ buf[i - 3]
            ^ buf[i - 1]
    };
    rotl(x ^ PHI ^ ((i - exp_offset) as u32), 11)
}

fn expand_prekey(key: &[u8], pad_size: usize, total_words: usize) -> Vec<u32> {
    let base = pad_size / 2;
    let mut temp = build_padded_temp(key, pad_size);

    for i in base..pad_size {
        temp[i] = recurrence_word(&temp, i, base, base);
    }

    let mut buf = vec![0u32; total_words];
    buf[..base].copy_from_slice(&temp[base..pad_size]);
    for i in base..total_words {
        buf[i] = recurrence_word(&buf, i, base, 0);
    }

    buf
}

/// Apply, in cyclic order `Sb3, Sb2, Sb1, Sb0, Sb7, Sb6, Sb5, Sb4`, the next
/// S-box to each successive group of 4 words.
fn mix_sboxes(buf: &mut [u32]) {
    const ORDER: [usize; 8] = [3, 2, 1, 0, 7, 6, 5, 4];
    let groups = buf.len() / 4;

    for g in 0..groups {
        let table = &SBOXES[ORDER[g % 8]];
        let off = g * 4;
        let (mut r0, mut r1, mut r2, mut r3) = (buf[off], buf[off + 1], buf[off + 2], buf[off + 3]);
        apply_sbox(table, &mut r0, &mut r1, &mut r2, &mut r3);
        buf[off] = r0;
        buf[off + 1] = r1;
        buf[off + 2] = r2;
        buf[off + 3] = r3;
    }
}

/// Standard path: `key.len() <= 64`.
pub(crate) fn expand_standard(key: &[u8], rounds: usize) -> Result<Vec<u32>, Error> {
    if ![16, 24, 32, 64].contains(&key.len()) {
        return Err(Error::InvalidKeySize);
    }

    if key.len() < 64 {
        if rounds != 32 {
            return Err(Error::InvalidRounds);
        }
    } else if rounds != 32 && rounds != 40 {
        return Err(Error::InvalidRounds);
    }

    let pad_size = if key.len() < 32 { 16 } else { key.len() / 2 };
    let total_words = 4 * (rounds + 1);

    let mut buf = expand_prekey(key, pad_size, total_words);
    mix_sboxes(&mut buf);
    Ok(buf)
}

/// HKDF path: `key.len() > 64`.
#[allow(clippy::too_many_arguments)]
pub(crate) fn expand_hkdf(
    selector: DigestSelector,
    key: &[u8],
    ikm_size: usize,
    distribution_code: &[u8],
    rounds: usize,
) -> Result<Vec<u32>, Error> {
    let block_size = selector.block_size();
    if key.len() <= ikm_size {
        return Err(Error::InvalidKeySize);
    }

    let salt_size = key.len() - ikm_size;
    if salt_size % block_size != 0 {
        return Err(Error::InvalidKeySize);
    }

    let (ikm, salt) = key.split_at(ikm_size);

    let mut hkdf = Hkdf::new(selector);
    hkdf.initialize(salt, ikm, distribution_code);

    let total_words = 4 * (rounds + 1);
    let mut bytes = vec![0u8; total_words * 4];
    hkdf.generate(&mut bytes)?;

    let mut buf = vec![0u32; total_words];
    for (i, word) in buf.iter_mut().enumerate() {
        let b = &bytes[i * 4..i * 4 + 4];
        *word = u32::from_le_bytes([b[0], b[1], b[2], b[3]]);
    }

    Ok(buf)
}
