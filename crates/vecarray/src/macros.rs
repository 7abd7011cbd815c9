// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

/// Creates a [`DynamicArray`](crate::DynamicArray) from a list of elements.
///
/// With elements, capacity equals the element count. Without, this is
/// [`DynamicArray::new`](crate::DynamicArray::new) (capacity 1).
///
/// # Example
///
/// ```rust
/// use vecarray::{dynarray, DynamicArray};
///
/// let array = dynarray![1u8, 2, 3];
/// assert_eq!(array.capacity(), 3);
/// assert_eq!(array, [1, 2, 3]);
///
/// let empty: DynamicArray<u8> = dynarray![];
/// assert_eq!(empty.capacity(), 1);
/// ```
#[macro_export]
macro_rules! dynarray {
    () => {
        $crate::DynamicArray::new()
    };
    ($($elem:expr),+ $(,)?) => {
        $crate::DynamicArray::from_sequence([$($elem),+])
    };
}
