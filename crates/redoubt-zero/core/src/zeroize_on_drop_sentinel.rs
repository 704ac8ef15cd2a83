// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! A cloneable, shared flag used to verify that zeroization actually happened.

use alloc::sync::Arc;
use core::sync::atomic::{AtomicBool, Ordering};

use crate::traits::{FastZeroizable, ZeroizationProbe, ZeroizeMetadata};

/// A cloneable marker embedded in a struct to verify `.fast_zeroize()` ran before drop.
///
/// Internally an `Arc<AtomicBool>` so every clone observes the same zeroization
/// state: callers typically clone the sentinel before dropping the owner, then
/// check the clone afterwards (see [`crate::assert::assert_zeroize_on_drop`]).
///
/// Deliberately has no `Drop` impl of its own; only an explicit `.fast_zeroize()`
/// call (or the derive's generated one) flips the flag.
#[derive(Clone, Default)]
pub struct ZeroizeOnDropSentinel {
    zeroized: Arc<AtomicBool>,
}

impl ZeroizeOnDropSentinel {
    /// Returns whether the sentinel has observed a zeroization.
    pub fn is_zeroized(&self) -> bool {
        self.zeroized.load(Ordering::SeqCst)
    }

    /// Resets the sentinel back to its pristine (non-zeroized) state.
    pub fn reset(&mut self) {
        self.zeroized.store(false, Ordering::SeqCst);
    }
}

impl FastZeroizable for ZeroizeOnDropSentinel {
    fn fast_zeroize(&mut self) {
        self.zeroized.store(true, Ordering::SeqCst);
    }
}

impl ZeroizeMetadata for ZeroizeOnDropSentinel {
    const CAN_BE_BULK_ZEROIZED: bool = false;
}

impl ZeroizationProbe for ZeroizeOnDropSentinel {
    fn is_zeroized(&self) -> bool {
        ZeroizeOnDropSentinel::is_zeroized(self)
    }
}

impl PartialEq for ZeroizeOnDropSentinel {
    fn eq(&self, other: &Self) -> bool {
        self.is_zeroized() == other.is_zeroized()
    }
}

impl Eq for ZeroizeOnDropSentinel {}
