// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Fixed Twofish constants: the `Q0`/`Q1` permutation tables, the GF(2^8)
//! arithmetic underlying both the Reed-Solomon sbKey construction and the
//! MDS matrix, and the `h`-function byte-layering shared by the key
//! schedule's `F32` step and the key-dependent S-box construction.

/// Reed-Solomon field-polynomial feedback used by [`rs_mds_encode`].
pub(crate) const RS_GF_FDBK: u32 = 0x14D;

/// Low byte of the MDS matrix's field polynomial (`0x169`, degree-8 term
/// implicit) used by [`mds_column`].
const MDS_GF_FDBK: u8 = 0x69;

/// `SK_STEP`/`SK_BUMP` constants driving the round-subkey F32 calls.
pub(crate) const SK_STEP: u32 = 0x0202_0202;
pub(crate) const SK_BUMP: u32 = 0x0101_0101;

/// Twofish's first fixed byte permutation, `Q0`.
pub(crate) const Q0: [u8; 256] = [
    0xA9, 0x67, 0xB3, 0xE8, 0x04, 0xFD, 0xA3, 0x76, 0x9A, 0x92, 0x80, 0x78, 0xE4, 0xDD, 0xD1, 0x38,
    0x0D, 0xC6, 0x35, 0x98, 0x18, 0xF7, 0xEC, 0x6C, 0x43, 0x75, 0x37, 0x26, 0xFA, 0x13, 0x94, 0x48,
    0xF2, 0xD0, 0x8B, 0x30, 0x84, 0x54, 0xDF, 0x23, 0x19, 0x5B, 0x3D, 0x59, 0xF3, 0xAE, 0xA2, 0x82,
    0x63, 0x01, 0x83, 0x2E, 0xD9, 0x51, 0x9B, 0x7C, 0xA6, 0xEB, 0xA5, 0xBE, 0x16, 0x0C, 0xE3, 0x61,
    0xC0, 0x8C, 0x3A, 0xF5, 0x73, 0x2C, 0x25, 0x0B, 0xBB, 0x4E, 0x89, 0x6B, 0x53, 0x6A, 0xB4, 0xF1,
    0xE1, 0xE6, 0xBD, 0x45, 0xE2, 0xF4, 0xB6, 0x66, 0xCC, 0x95, 0x03, 0x56, 0xD4, 0x1C, 0x1E, 0xD7,
    0xFB, 0xC3, 0x8E, 0xB5, 0xE9, 0xCF, 0xBF, 0xBA, 0xEA, 0x77, 0x39, 0xAF, 0x33, 0xC9, 0x62, 0x71,
    0x81, 0x79, 0x09, 0xAD, 0x24, 0xCD, 0xF9, 0xD8, 0xE5, 0xC5, 0xB9, 0x4D, 0x44, 0x08, 0x86, 0xE7,
    0xA1, 0x1D, 0xAA, 0xED, 0x06, 0x70, 0xB2, 0xD2, 0x41, 0x7B, 0xA0, 0x11, 0x31, 0xC2, 0x27, 0x90,
    0x20, 0xF6, 0x60, 0xFF, 0x96, 0x5C, 0xB1, 0xAB, 0x9E, 0x9C, 0x52, 0x1B, 0x5F, 0x93, 0x0A, 0xEF,
    0x91, 0x85, 0x49, 0xEE, 0x2D, 0x4F, 0x8F, 0x3B, 0x47, 0x87, 0x6D, 0x46, 0xD6, 0x3E, 0x69, 0x64,
    0x2A, 0xCE, 0xCB, 0x2F, 0xFC, 0x97, 0x05, 0x7A, 0xAC, 0x7F, 0xD5, 0x1A, 0x4B, 0x0E, 0xA7, 0x5A,
    0x28, 0x14, 0x3F, 0x29, 0x88, 0x3C, 0x4C, 0x02, 0xB8, 0xDA, 0xB0, 0x17, 0x55, 0x1F, 0x8A, 0x7D,
    0x57, 0xC7, 0x8D, 0x74, 0xB7, 0xC4, 0x9F, 0x72, 0x7E, 0x15, 0x22, 0x12, 0x58, 0x07, 0x99, 0x34,
    0x6E, 0x50, 0xDE, 0x68, 0x65, 0xBC, 0xDB, 0xF8, 0xC8, 0xA8, 0x2B, 0x40, 0xDC, 0xFE, 0x32, 0xA4,
    0xCA, 0x10, 0x21, 0xF0, 0xD3, 0x5D, 0x0F, 0x00, 0x6F, 0x9D, 0x36, 0x42, 0x4A, 0x5E, 0xC1, 0xE0,
];

/// Twofish's second fixed byte permutation, `Q1`.
pub(crate) const Q1: [u8; 256] = [
    0x75, 0xF3, 0xC6, 0xF4, 0xDB, 0x7B, 0xFB, 0xC8, 0x4A, 0xD3, 0xE6, 0x6B, 0x45, 0x7D, 0xE8, 0x4B,
    0xD6, 0x32, 0xD8, 0xFD, 0x37, 0x71, 0xF1, 0xE1, 0x30, 0x0F, 0xF8, 0x1B, 0x87, 0xFA, 0x06, 0x3F,
    0x5E, 0xBA, 0xAE, 0x5B, 0x8A, 0x00, 0xBC, 0x9D, 0x6D, 0xC1, 0xB1, 0x0E, 0x80, 0x5D, 0xD2, 0xD5,
    0xA0, 0x84, 0x07, 0x14, 0xB5, 0x90, 0x2C, 0xA3, 0xB2, 0x73, 0x4C, 0x54, 0x92, 0x74, 0x36, 0x51,
    0x38, 0xB0, 0xBD, 0x5A, 0xFC, 0x60, 0x62, 0x96, 0x6C, 0x42, 0xF7, 0x10, 0x7C, 0x28, 0x27, 0x8C,
    0x13, 0x95, 0x9C, 0xC7, 0x24, 0x46, 0x3B, 0x70, 0xCA, 0xE3, 0x85, 0xCB, 0x11, 0xD0, 0x93, 0xB8,
    0xA6, 0x83, 0x20, 0xFF, 0x9F, 0x77, 0xC3, 0xCC, 0x03, 0x6F, 0x08, 0xBF, 0x40, 0xE7, 0x2B, 0xE2,
    0x79, 0x0C, 0xAA, 0x82, 0x41, 0x3A, 0xEA, 0xB9, 0xE4, 0x9A, 0xA4, 0x97, 0x7E, 0xDA, 0x7A, 0x17,
    0x66, 0x94, 0xA1, 0x1D, 0x3D, 0xF0, 0xDE, 0xB3, 0x0B, 0x72, 0xA7, 0x1C, 0xEF, 0xD1, 0x53, 0x3E,
    0x8F, 0x33, 0x26, 0x5F, 0xEC, 0x76, 0x2A, 0x49, 0x81, 0x88, 0xEE, 0x21, 0xC4, 0x1A, 0xEB, 0xD9,
    0xC5, 0x39, 0x99, 0xCD, 0xAD, 0x31, 0x8B, 0x01, 0x18, 0x23, 0xDD, 0x1F, 0x4E, 0x2D, 0xF9, 0x48,
    0x4F, 0xF2, 0x65, 0x8E, 0x78, 0x5C, 0x58, 0x19, 0x8D, 0xE5, 0x98, 0x57, 0x67, 0x7F, 0x05, 0x64,
    0xAF, 0x63, 0xB6, 0xFE, 0xF5, 0xB7, 0x3C, 0xA5, 0xCE, 0xE9, 0x68, 0x44, 0xE0, 0x4D, 0x43, 0x69,
    0x29, 0x2E, 0xAC, 0x15, 0x59, 0xA8, 0x0A, 0x9E, 0x6E, 0x47, 0xDF, 0x34, 0x35, 0x6A, 0xCF, 0xDC,
    0x22, 0xC9, 0xC0, 0x9B, 0x89, 0xD4, 0xED, 0xAB, 0x12, 0xA2, 0x0D, 0x52, 0xBB, 0x02, 0x2F, 0xA9,
    0xD7, 0x61, 0x1E, 0xB4, 0x50, 0x04, 0xF6, 0xC2, 0x16, 0x25, 0x86, 0x56, 0x55, 0x09, 0xBE, 0x91,
];

/// One of the two fixed byte permutations.
#[derive(Clone, Copy)]
pub(crate) enum QBox {
    Q0,
    Q1,
}

#[inline]
pub(crate) fn apply_q(which: QBox, x: u8) -> u8 {
    match which {
        QBox::Q0 => Q0[x as usize],
        QBox::Q1 => Q1[x as usize],
    }
}

/// Per-byte-position Q choices for the two always-present base layers
/// (innermost and middle), and for the final (outermost, no trailing XOR)
/// step of the base pair.
const BASE_INNER: [QBox; 4] = [QBox::Q0, QBox::Q1, QBox::Q0, QBox::Q1];
const BASE_MID: [QBox; 4] = [QBox::Q0, QBox::Q0, QBox::Q1, QBox::Q1];
const BASE_OUTER: [QBox; 4] = [QBox::Q1, QBox::Q0, QBox::Q1, QBox::Q0];

/// Per-byte-position Q choices for an extra layer at an even `sbKey` word
/// index (2, 4, 6, ...).
const EXTRA_EVEN: [QBox; 4] = [QBox::Q1, QBox::Q1, QBox::Q0, QBox::Q0];
/// Per-byte-position Q choices for an extra layer at an odd `sbKey` word
/// index (3, 5, 7, ...).
const EXTRA_ODD: [QBox; 4] = [QBox::Q1, QBox::Q0, QBox::Q0, QBox::Q1];

/// The Twofish `h`-function byte layering: for each of the four bytes,
/// thread it through `k64` Q-box lookups, each (except the last) XORed with
/// the corresponding byte of the next `l` word, innermost-first.
///
/// `l` supplies the per-layer key words (`eKm`/`oKm` for the round-subkey
/// `F32` calls, or `sbKey` for the key-dependent S-box construction);
/// `l.len() == k64` in both callers.
pub(crate) fn h_layers(mut bytes: [u8; 4], l: &[u32], k64: usize) -> [u8; 4] {
    for layer in (2..k64).rev() {
        let key_bytes = l[layer].to_le_bytes();
        let pattern = if layer % 2 == 0 { EXTRA_EVEN } else { EXTRA_ODD };
        for p in 0..4 {
            bytes[p] = apply_q(pattern[p], bytes[p]) ^ key_bytes[p];
        }
    }

    let k1 = l[1].to_le_bytes();
    let k0 = l[0].to_le_bytes();
    for p in 0..4 {
        let mut v = apply_q(BASE_INNER[p], bytes[p]);
        v ^= k1[p];
        v = apply_q(BASE_MID[p], v);
        v ^= k0[p];
        bytes[p] = apply_q(BASE_OUTER[p], v);
    }

    bytes
}

/// Doubles `x` in GF(2^8) modulo the field polynomial whose low byte is
/// `feedback` (the degree-8 term is implicit).
#[inline]
fn gf_double(x: u8, feedback: u8) -> u8 {
    if x & 0x80 != 0 {
        (x << 1) ^ feedback
    } else {
        x << 1
    }
}

/// Multiplies `a` by `b` in GF(2^8) modulo the field polynomial whose low
/// byte is `feedback`.
fn gf_mul(mut a: u8, mut b: u8, feedback: u8) -> u8 {
    let mut result = 0u8;
    while b != 0 {
        if b & 1 != 0 {
            result ^= a;
        }
        a = gf_double(a, feedback);
        b >>= 1;
    }
    result
}

/// The Twofish MDS matrix (Section 4.2 of the design): row `i`, column `j`
/// holds the GF(2^8) coefficient multiplying input byte `j` into output
/// byte `i`.
const MDS_MATRIX: [[u8; 4]; 4] = [
    [0x01, 0xEF, 0x5B, 0x5B],
    [0x5B, 0xEF, 0xEF, 0x01],
    [0xEF, 0x5B, 0x01, 0xEF],
    [0xEF, 0x01, 0xEF, 0x5B],
];

/// Column `p` of the MDS matrix multiplied by scalar `v`, packed into a
/// 32-bit word (byte `i` of the word is output row `i`).
///
/// MDS multiplication is GF(2^8)-linear, so the full matrix-vector product
/// for a 4-byte input is the XOR of this function applied to each byte at
/// its own column — the decomposition the key-dependent S-box table
/// ([`crate::key_schedule`]) relies on to fold the matrix into four
/// independent per-byte-position lookup tables.
pub(crate) fn mds_column(p: usize, v: u8) -> u32 {
    let mut out = [0u8; 4];
    for (i, row) in MDS_MATRIX.iter().enumerate() {
        out[i] = gf_mul(row[p], v, MDS_GF_FDBK);
    }
    u32::from_le_bytes(out)
}

/// The full MDS matrix-vector product over four input bytes.
pub(crate) fn mds_encode(bytes: [u8; 4]) -> u32 {
    (0..4).fold(0u32, |acc, p| acc ^ mds_column(p, bytes[p]))
}

/// One step of the Reed-Solomon LFSR used by [`rs_mds_encode`].
fn rs_rem(x: u32) -> u32 {
    let b = (x >> 24) as u8;
    let g2 = ((b << 1) ^ if b & 0x80 != 0 { (RS_GF_FDBK & 0xFF) as u8 } else { 0 }) as u32;
    let g3 = (((b >> 1) & 0x7F) ^ if b & 1 != 0 { ((RS_GF_FDBK >> 1) & 0xFF) as u8 } else { 0 }) as u32
        ^ g2;
    (x << 8) ^ (g3 << 24) ^ (g2 << 16) ^ (g3 << 8) ^ (b as u32)
}

/// `MDSEncode(k0, k1)`: the Reed-Solomon recurrence that folds a pair of
/// 32-bit key words into one `sbKey` word (design §4.5 step 3).
pub(crate) fn rs_mds_encode(k0: u32, k1: u32) -> u32 {
    let mut r = k1;
    for _ in 0..4 {
        r = rs_rem(r);
    }
    r ^= k0;
    for _ in 0..4 {
        r = rs_rem(r);
    }
    r
}

#[inline]
pub(crate) fn rotl(x: u32, n: u32) -> u32 {
    x.rotate_left(n)
}

#[inline]
pub(crate) fn rotr(x: u32, n: u32) -> u32 {
    x.rotate_right(n)
}
