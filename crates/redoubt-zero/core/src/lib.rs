// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Core zeroization primitives: guards, sentinels, and RAII wrappers.
//!
//! This crate is the dependency-free base of `redoubt-zero`. It is normally
//! consumed through the `redoubt-zero` facade together with
//! `redoubt-zero-derive`'s `#[derive(RedoubtZero)]`.

#![cfg_attr(not(test), no_std)]

extern crate alloc;

#[cfg(test)]
mod tests;

pub mod assert;
pub mod collections;
mod primitives;
mod traits;
mod zeroize_on_drop_sentinel;
mod zeroizing_guard;

pub use traits::{
    AssertZeroizeOnDrop, FastZeroize, FastZeroizable, MutGuarded, StaticFastZeroizable,
    ZeroizationProbe, ZeroizeMetadata,
};
pub use zeroize_on_drop_sentinel::ZeroizeOnDropSentinel;
pub use zeroizing_guard::ZeroizingGuard;
