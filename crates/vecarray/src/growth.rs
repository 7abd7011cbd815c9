// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Growth policy.

/// Returns the largest element count a `DynamicArray<T>` may hold.
///
/// Rust caps a single allocation at `isize::MAX` bytes. One slot is held back
/// so that `len + 1` can never overflow. Zero-sized types are only bounded by
/// the counter itself.
#[inline]
pub(crate) const fn max_len_for<T>() -> usize {
    let size = core::mem::size_of::<T>();

    if size == 0 {
        usize::MAX - 1
    } else {
        (isize::MAX as usize) / size - 1
    }
}

/// Computes the capacity that follows `current`.
///
/// The new capacity is `ceil(current * 1.5)`, and always at least
/// `current + 1` so that capacities 0 and 1 still make progress:
/// 0 → 1 → 2 → 3 → 5 → 8 → 12 → 18 ...
///
/// The result is clamped to `max`. Returns `None` when `current` already
/// reached `max`.
#[inline]
pub(crate) fn grown_capacity(current: usize, max: usize) -> Option<usize> {
    if current >= max {
        return None;
    }

    let half_up = current / 2 + current % 2;
    let grown = current.saturating_add(half_up).max(current + 1);

    Some(grown.min(max))
}
