// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Disposal accounting for tests.

use alloc::sync::Arc;
use core::sync::atomic::{AtomicUsize, Ordering};

use crate::dispose::Dispose;

/// Shared counters recording how often probes were disposed and dropped.
///
/// All clones share the same counters, so a sentinel kept by the test
/// observes every probe handed to an array.
///
/// # Example
///
/// ```rust
/// use vecarray::{DisposeSentinel, DynamicArray};
///
/// let sentinel = DisposeSentinel::new();
/// let mut array = DynamicArray::new();
///
/// array.append(sentinel.probe(1)).unwrap();
/// array.append(sentinel.probe(2)).unwrap();
/// array.clear();
///
/// assert_eq!(sentinel.disposals(), 2);
/// assert_eq!(sentinel.drops(), 2);
/// ```
#[derive(Debug, Clone, Default)]
pub struct DisposeSentinel {
    disposals: Arc<AtomicUsize>,
    drops: Arc<AtomicUsize>,
}

impl DisposeSentinel {
    /// Creates a sentinel with both counters at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a probe carrying `value` that reports to this sentinel.
    pub fn probe(&self, value: u32) -> DisposeProbe {
        DisposeProbe {
            value,
            sentinel: self.clone(),
        }
    }

    /// Number of `dispose()` calls observed so far.
    pub fn disposals(&self) -> usize {
        self.disposals.load(Ordering::SeqCst)
    }

    /// Number of probes dropped so far.
    pub fn drops(&self) -> usize {
        self.drops.load(Ordering::SeqCst)
    }

    /// Resets both counters to zero.
    pub fn reset(&self) {
        self.disposals.store(0, Ordering::SeqCst);
        self.drops.store(0, Ordering::SeqCst);
    }
}

/// Element type that reports disposal and drop to a [`DisposeSentinel`].
#[derive(Debug)]
pub struct DisposeProbe {
    value: u32,
    sentinel: DisposeSentinel,
}

impl DisposeProbe {
    /// Returns the carried value.
    pub fn value(&self) -> u32 {
        self.value
    }
}

impl Clone for DisposeProbe {
    fn clone(&self) -> Self {
        self.sentinel.probe(self.value)
    }
}

impl PartialEq for DisposeProbe {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl Eq for DisposeProbe {}

impl Dispose for DisposeProbe {
    fn dispose(&mut self) {
        self.sentinel.disposals.fetch_add(1, Ordering::SeqCst);
    }
}

impl Drop for DisposeProbe {
    fn drop(&mut self) {
        self.sentinel.drops.fetch_add(1, Ordering::SeqCst);
    }
}
