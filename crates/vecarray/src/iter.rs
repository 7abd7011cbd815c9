// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Owned iteration.

use alloc::vec;
use alloc::vec::Vec;
use core::fmt;
use core::iter::FusedIterator;

use crate::dispose::Dispose;

/// An iterator that moves elements out of a `DynamicArray`.
///
/// Elements handed out belong to the caller. Elements still inside when the
/// iterator is dropped are disposed first, as if the array had been cleared.
///
/// # Example
///
/// ```rust
/// use vecarray::DynamicArray;
///
/// let array = DynamicArray::from_sequence([1u8, 2, 3]);
/// let mut iter = array.into_iter();
///
/// assert_eq!(iter.next(), Some(1));
/// assert_eq!(iter.as_slice(), &[2, 3]);
/// assert_eq!(iter.next_back(), Some(3));
/// ```
pub struct IntoIter<T>
where
    T: Dispose,
{
    inner: vec::IntoIter<T>,
}

impl<T> IntoIter<T>
where
    T: Dispose,
{
    pub(crate) fn new(storage: Vec<T>) -> Self {
        Self {
            inner: storage.into_iter(),
        }
    }

    /// Returns the remaining elements as a slice.
    pub fn as_slice(&self) -> &[T] {
        self.inner.as_slice()
    }
}

impl<T> fmt::Debug for IntoIter<T>
where
    T: Dispose + fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("IntoIter").field(&self.as_slice()).finish()
    }
}

impl<T> Iterator for IntoIter<T>
where
    T: Dispose,
{
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<T> {
        self.inner.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> DoubleEndedIterator for IntoIter<T>
where
    T: Dispose,
{
    #[inline]
    fn next_back(&mut self) -> Option<T> {
        self.inner.next_back()
    }
}

impl<T> ExactSizeIterator for IntoIter<T> where T: Dispose {}

impl<T> FusedIterator for IntoIter<T> where T: Dispose {}

impl<T> Drop for IntoIter<T>
where
    T: Dispose,
{
    fn drop(&mut self) {
        for mut rest in self.inner.by_ref() {
            rest.dispose();
        }
    }
}
