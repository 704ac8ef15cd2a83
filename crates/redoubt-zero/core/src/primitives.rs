// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! `FastZeroizable` / `ZeroizeMetadata` / `ZeroizationProbe` for scalar types.
//!
//! All-zeros is a valid bit pattern for every type here, so these all take the
//! bulk-zeroize fast path.

use crate::traits::{FastZeroizable, ZeroizationProbe, ZeroizeMetadata};

macro_rules! impl_zeroize_for_primitive {
    ($($t:ty => $zero:expr),* $(,)?) => {
        $(
            impl ZeroizeMetadata for $t {
                const CAN_BE_BULK_ZEROIZED: bool = true;
            }

            impl FastZeroizable for $t {
                #[inline(always)]
                fn fast_zeroize(&mut self) {
                    redoubt_util::zeroize_primitive(self);
                }
            }

            impl ZeroizationProbe for $t {
                #[inline(always)]
                fn is_zeroized(&self) -> bool {
                    *self == $zero
                }
            }
        )*
    };
}

impl_zeroize_for_primitive! {
    u8 => 0, u16 => 0, u32 => 0, u64 => 0, u128 => 0, usize => 0,
    i8 => 0, i16 => 0, i32 => 0, i64 => 0, i128 => 0, isize => 0,
    bool => false,
}

impl ZeroizeMetadata for char {
    const CAN_BE_BULK_ZEROIZED: bool = false;
}

impl FastZeroizable for char {
    fn fast_zeroize(&mut self) {
        *self = '\0';
    }
}

impl ZeroizationProbe for char {
    fn is_zeroized(&self) -> bool {
        *self == '\0'
    }
}
