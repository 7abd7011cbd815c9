// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use alloc::vec::Vec;
use core::fmt;
use core::mem;
use core::ops::{Deref, DerefMut};

#[cfg(any(test, feature = "test_utils"))]
use crate::behaviour::DynamicArrayBehaviour;
use crate::dispose::Dispose;
use crate::error::DynamicArrayError;
use crate::growth::{grown_capacity, max_len_for};
use crate::iter::IntoIter;

/// Contiguous growable array with manual capacity control.
///
/// `DynamicArray` tracks its own logical capacity and only reallocates through a
/// single primitive that allocates the new buffer, moves the live elements
/// across, and retires the old buffer. Growth follows `ceil(capacity * 1.5)`.
///
/// While [locked](DynamicArray::lock) the array refuses `append`, `insert` and
/// every explicit capacity change with [`DynamicArrayError::Locked`], even when
/// spare slots are available.
///
/// Removing the last element also shrinks the capacity by one. This keeps the
/// allocation tight at the cost of amortized appends in pop-heavy workloads.
///
/// # Type Parameters
///
/// - `T`: The element type. Must implement [`Dispose`], called on every element
///   the array retires.
///
/// # Example
///
/// ```rust
/// use vecarray::{DynamicArray, DynamicArrayError};
///
/// fn example() -> Result<(), DynamicArrayError> {
///     let mut array = DynamicArray::new();
///     assert_eq!(array.capacity(), 1);
///
///     array.append(1u32)?;
///     array.append(2u32)?; // 1 → 2
///     array.append(3u32)?; // 2 → 3
///     assert_eq!(array.capacity(), 3);
///
///     array.lock();
///     assert_eq!(array.append(4u32), Err(DynamicArrayError::Locked));
///     assert_eq!(array, [1, 2, 3]);
///     Ok(())
/// }
/// # example().unwrap();
/// ```
pub struct DynamicArray<T>
where
    T: Dispose,
{
    // storage.len() is the live length; storage.capacity() >= capacity.
    storage: Vec<T>,
    capacity: usize,
    locked: bool,
    #[cfg(any(test, feature = "test_utils"))]
    behaviour: DynamicArrayBehaviour,
}

impl<T> DynamicArray<T>
where
    T: Dispose,
{
    /// Moves the live elements into a fresh buffer of `new_capacity` slots and
    /// retires the old one.
    ///
    /// Elements past `new_capacity` are disposed and dropped together with the
    /// old buffer. Lock and bounds are the caller's concern.
    fn reallocate_to(&mut self, new_capacity: usize) {
        let kept = self.len().min(new_capacity);
        self.storage[kept..].dispose();

        let mut storage = Vec::with_capacity(new_capacity);
        storage.extend(self.storage.drain(..kept));

        log::debug!(
            "vecarray: reallocate capacity {} -> {} (len {})",
            self.capacity,
            new_capacity,
            kept
        );

        let retired = mem::replace(&mut self.storage, storage);
        drop(retired);

        self.capacity = new_capacity;
    }

    #[cold]
    #[inline(never)]
    fn grow(&mut self) -> Result<(), DynamicArrayError> {
        #[cfg(any(test, feature = "test_utils"))]
        if matches!(self.behaviour, DynamicArrayBehaviour::FailAtGrow) {
            return Err(DynamicArrayError::CapacityOverflow);
        }

        let new_capacity = grown_capacity(self.capacity, self.max_size())
            .ok_or(DynamicArrayError::CapacityOverflow)?;

        self.reallocate_to(new_capacity);

        Ok(())
    }

    /// Ensures there is room for one more element, growing when full.
    #[inline(always)]
    fn reserve_one(&mut self) -> Result<(), DynamicArrayError> {
        if self.len() < self.capacity {
            return Ok(());
        }

        self.grow()
    }

    #[inline(always)]
    fn ensure_unlocked(&self, operation: &str) -> Result<(), DynamicArrayError> {
        if self.locked {
            log::trace!(
                "vecarray: {} refused, locked at capacity {}",
                operation,
                self.capacity
            );
            return Err(DynamicArrayError::Locked);
        }

        Ok(())
    }

    /// Range check shared by `at` and `insert`.
    ///
    /// Accepts `index < len`, plus `index == len` when `allow_end` is set.
    #[inline(always)]
    fn check_range(&self, index: usize, allow_end: bool) -> Result<(), DynamicArrayError> {
        let len = self.len();

        if index < len || (allow_end && index == len) {
            return Ok(());
        }

        log::trace!("vecarray: index {} out of range (len {})", index, len);

        Err(DynamicArrayError::OutOfRange { index, len })
    }

    /// Creates an empty array with capacity 1.
    ///
    /// # Example
    ///
    /// ```rust
    /// use vecarray::DynamicArray;
    ///
    /// let array: DynamicArray<u8> = DynamicArray::new();
    /// assert_eq!(array.len(), 0);
    /// assert_eq!(array.capacity(), 1);
    /// assert!(!array.is_locked());
    /// ```
    pub fn new() -> Self {
        Self::with_capacity(1)
    }

    /// Creates an empty array with room for exactly `capacity` elements.
    ///
    /// # Panics
    ///
    /// Panics if the allocation size exceeds `isize::MAX` bytes.
    ///
    /// # Example
    ///
    /// ```rust
    /// use vecarray::DynamicArray;
    ///
    /// let array: DynamicArray<u8> = DynamicArray::with_capacity(5);
    /// assert_eq!(array.len(), 0);
    /// assert_eq!(array.capacity(), 5);
    /// ```
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            storage: Vec::with_capacity(capacity),
            capacity,
            locked: false,
            #[cfg(any(test, feature = "test_utils"))]
            behaviour: DynamicArrayBehaviour::default(),
        }
    }

    /// Creates an array from a sequence of known length.
    ///
    /// Capacity starts at the number of items, then every item goes through
    /// [`append`](DynamicArray::append) in order. See also the
    /// [`dynarray!`](crate::dynarray) macro.
    ///
    /// # Example
    ///
    /// ```rust
    /// use vecarray::DynamicArray;
    ///
    /// let array = DynamicArray::from_sequence([1u8, 2, 3]);
    /// assert_eq!(array.len(), 3);
    /// assert_eq!(array.capacity(), 3);
    /// assert_eq!(array, [1, 2, 3]);
    /// ```
    pub fn from_sequence<I>(items: I) -> Self
    where
        I: IntoIterator<Item = T>,
        I::IntoIter: ExactSizeIterator,
    {
        let items = items.into_iter();
        let mut array = Self::with_capacity(items.len());

        for item in items {
            array
                .append(item)
                .expect("infallible: an unlocked array only refuses appends beyond max_size()");
        }

        array
    }

    /// Returns the number of live elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.storage.len()
    }

    /// Returns the number of allocated slots.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Returns the largest element count this array type can hold.
    ///
    /// This is the allocation limit divided by the element size, minus one
    /// slot so growth arithmetic never overflows.
    ///
    /// # Example
    ///
    /// ```rust
    /// use vecarray::DynamicArray;
    ///
    /// let array: DynamicArray<u64> = DynamicArray::new();
    /// assert_eq!(array.max_size(), isize::MAX as usize / 8 - 1);
    /// ```
    #[inline]
    pub fn max_size(&self) -> usize {
        max_len_for::<T>()
    }

    /// Returns `true` if the array holds no live elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.storage.is_empty()
    }

    /// Returns `true` while the capacity is locked.
    #[inline]
    pub fn is_locked(&self) -> bool {
        self.locked
    }

    /// Freezes the current capacity. Storage is not touched.
    pub fn lock(&mut self) {
        self.locked = true;
    }

    /// Lifts the capacity lock. Storage is not touched.
    pub fn unlock(&mut self) {
        self.locked = false;
    }

    /// Appends a value at the end, growing when the array is full.
    ///
    /// # Errors
    ///
    /// - [`DynamicArrayError::Locked`] if the array is locked, whatever the
    ///   spare capacity.
    /// - [`DynamicArrayError::CapacityOverflow`] if growth would exceed
    ///   [`max_size`](DynamicArray::max_size).
    ///
    /// On error the array is unchanged and `value` is dropped.
    ///
    /// # Example
    ///
    /// ```rust
    /// use vecarray::{DynamicArray, DynamicArrayError};
    ///
    /// fn example() -> Result<(), DynamicArrayError> {
    ///     let mut array = DynamicArray::with_capacity(4);
    ///     array.append(1u8)?;
    ///
    ///     // Refused even with three free slots
    ///     array.lock();
    ///     assert_eq!(array.append(2u8), Err(DynamicArrayError::Locked));
    ///     assert_eq!(array.len(), 1);
    ///     assert_eq!(array.capacity(), 4);
    ///
    ///     array.unlock();
    ///     array.append(2u8)?;
    ///     assert_eq!(array, [1, 2]);
    ///     Ok(())
    /// }
    /// # example().unwrap();
    /// ```
    pub fn append(&mut self, value: T) -> Result<(), DynamicArrayError> {
        #[cfg(any(test, feature = "test_utils"))]
        if matches!(self.behaviour, DynamicArrayBehaviour::FailAtAppend) {
            return Err(DynamicArrayError::CapacityOverflow);
        }

        self.ensure_unlocked("append")?;
        self.reserve_one()?;
        self.storage.push(value);

        Ok(())
    }

    /// Appends a clone of `value`. See [`append`](DynamicArray::append).
    pub fn append_cloned(&mut self, value: &T) -> Result<(), DynamicArrayError>
    where
        T: Clone,
    {
        self.append(value.clone())
    }

    /// Removes and disposes the last element, then shrinks capacity by one.
    ///
    /// While locked the element is still removed but the capacity is kept, so
    /// the shrink is not unconditional: a locked capacity never moves.
    /// Returns `false` if the array was empty.
    ///
    /// # Example
    ///
    /// ```rust
    /// use vecarray::DynamicArray;
    ///
    /// let mut array = DynamicArray::from_sequence([1u8, 2, 3]);
    ///
    /// assert!(array.remove_last());
    /// assert_eq!(array, [1, 2]);
    /// assert_eq!(array.capacity(), 2);
    /// ```
    pub fn remove_last(&mut self) -> bool {
        let Some(mut last) = self.storage.pop() else {
            return false;
        };

        last.dispose();
        drop(last);

        if !self.locked {
            self.reallocate_to(self.capacity - 1);
        }

        true
    }

    /// Inserts `value` at `index`, shifting the elements after it up by one.
    ///
    /// `index == len()` appends.
    ///
    /// # Errors
    ///
    /// - [`DynamicArrayError::OutOfRange`] if `index > len()`, checked first.
    /// - [`DynamicArrayError::Locked`] if the array is locked.
    /// - [`DynamicArrayError::CapacityOverflow`] if growth would exceed
    ///   [`max_size`](DynamicArray::max_size).
    ///
    /// # Example
    ///
    /// ```rust
    /// use vecarray::{DynamicArray, DynamicArrayError};
    ///
    /// fn example() -> Result<(), DynamicArrayError> {
    ///     let mut array = DynamicArray::from_sequence([1u8, 3]);
    ///     array.insert(2, 1)?;
    ///     array.insert(4, 3)?;
    ///
    ///     assert_eq!(array, [1, 2, 3, 4]);
    ///     assert!(array.insert(9, 9).is_err());
    ///     Ok(())
    /// }
    /// # example().unwrap();
    /// ```
    pub fn insert(&mut self, value: T, index: usize) -> Result<(), DynamicArrayError> {
        self.check_range(index, true)?;

        #[cfg(any(test, feature = "test_utils"))]
        if matches!(self.behaviour, DynamicArrayBehaviour::FailAtInsert) {
            return Err(DynamicArrayError::CapacityOverflow);
        }

        self.ensure_unlocked("insert")?;
        self.reserve_one()?;
        self.storage.insert(index, value);

        Ok(())
    }

    /// Inserts a clone of `value`. See [`insert`](DynamicArray::insert).
    pub fn insert_cloned(&mut self, value: &T, index: usize) -> Result<(), DynamicArrayError>
    where
        T: Clone,
    {
        self.insert(value.clone(), index)
    }

    /// Returns a reference to the element at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`DynamicArrayError::OutOfRange`] if `index >= len()`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use vecarray::{DynamicArray, DynamicArrayError};
    ///
    /// let array = DynamicArray::from_sequence([10u8, 20]);
    ///
    /// assert_eq!(array.at(1), Ok(&20));
    /// assert_eq!(
    ///     array.at(2),
    ///     Err(DynamicArrayError::OutOfRange { index: 2, len: 2 })
    /// );
    /// ```
    pub fn at(&self, index: usize) -> Result<&T, DynamicArrayError> {
        self.check_range(index, false)?;

        Ok(&self.storage[index])
    }

    /// Returns a mutable reference to the element at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`DynamicArrayError::OutOfRange`] if `index >= len()`.
    pub fn at_mut(&mut self, index: usize) -> Result<&mut T, DynamicArrayError> {
        self.check_range(index, false)?;

        Ok(&mut self.storage[index])
    }

    /// Disposes all live elements. Capacity is unchanged.
    ///
    /// # Example
    ///
    /// ```rust
    /// use vecarray::DynamicArray;
    ///
    /// let mut array = DynamicArray::from_sequence([1u8, 2, 3]);
    /// array.clear();
    ///
    /// assert!(array.is_empty());
    /// assert_eq!(array.capacity(), 3);
    /// ```
    pub fn clear(&mut self) {
        self.storage.as_mut_slice().dispose();
        self.storage.clear();
    }

    /// Reallocates so that capacity equals the live length.
    ///
    /// A no-op if capacity already equals the length, locked or not.
    ///
    /// # Errors
    ///
    /// Returns [`DynamicArrayError::Locked`] if shrinking is needed while locked.
    ///
    /// # Example
    ///
    /// ```rust
    /// use vecarray::{DynamicArray, DynamicArrayError};
    ///
    /// fn example() -> Result<(), DynamicArrayError> {
    ///     let mut array = DynamicArray::with_capacity(8);
    ///     array.append(1u8)?;
    ///     array.append(2u8)?;
    ///
    ///     array.shrink_to_fit()?;
    ///     assert_eq!(array.capacity(), 2);
    ///     Ok(())
    /// }
    /// # example().unwrap();
    /// ```
    pub fn shrink_to_fit(&mut self) -> Result<(), DynamicArrayError> {
        if self.capacity == self.len() {
            return Ok(());
        }

        if self.locked {
            log::trace!("vecarray: shrink_to_fit refused, locked");
            return Err(DynamicArrayError::Locked);
        }

        self.reallocate_to(self.len());

        Ok(())
    }

    /// Reallocates to exactly `new_capacity` slots.
    ///
    /// Going below the live length requires `override_shrink`; the elements
    /// that no longer fit are disposed.
    ///
    /// # Errors
    ///
    /// - [`DynamicArrayError::Locked`] whenever the array is locked.
    /// - [`DynamicArrayError::ShrinkBelowLen`] if `new_capacity < len()` and
    ///   `override_shrink` is `false`.
    /// - [`DynamicArrayError::CapacityOverflow`] if `new_capacity` exceeds
    ///   [`max_size`](DynamicArray::max_size).
    ///
    /// # Example
    ///
    /// ```rust
    /// use vecarray::{DynamicArray, DynamicArrayError};
    ///
    /// fn example() -> Result<(), DynamicArrayError> {
    ///     let mut array = DynamicArray::from_sequence([1u8, 2, 3]);
    ///
    ///     assert!(array.resize(2, false).is_err());
    ///
    ///     array.resize(2, true)?;
    ///     assert_eq!(array, [1, 2]);
    ///     assert_eq!(array.capacity(), 2);
    ///     Ok(())
    /// }
    /// # example().unwrap();
    /// ```
    pub fn resize(
        &mut self,
        new_capacity: usize,
        override_shrink: bool,
    ) -> Result<(), DynamicArrayError> {
        if self.locked {
            log::trace!("vecarray: resize to {} refused, locked", new_capacity);
            return Err(DynamicArrayError::Locked);
        }

        let len = self.len();

        if new_capacity < len && !override_shrink {
            log::trace!(
                "vecarray: resize to {} refused, {} live elements",
                new_capacity,
                len
            );
            return Err(DynamicArrayError::ShrinkBelowLen {
                requested: new_capacity,
                len,
            });
        }

        if new_capacity > self.max_size() {
            return Err(DynamicArrayError::CapacityOverflow);
        }

        if new_capacity != self.capacity {
            self.reallocate_to(new_capacity);
        }

        Ok(())
    }

    /// Returns the live elements as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.storage
    }

    /// Returns the live elements as a mutable slice.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.storage
    }

    /// Returns an iterator over the live elements.
    #[inline]
    pub fn iter(&self) -> core::slice::Iter<'_, T> {
        self.storage.iter()
    }

    /// Returns an iterator over the live elements that allows modifying them.
    #[inline]
    pub fn iter_mut(&mut self) -> core::slice::IterMut<'_, T> {
        self.storage.iter_mut()
    }

    /// Changes the test behaviour for this array.
    ///
    /// This is only available with the `test_utils` feature and allows injecting
    /// failures for testing error handling paths.
    #[cfg(any(test, feature = "test_utils"))]
    pub fn change_behaviour(&mut self, behaviour: DynamicArrayBehaviour) {
        self.behaviour = behaviour;
    }

    #[cfg(test)]
    pub(crate) fn storage_capacity_for_tests(&self) -> usize {
        self.storage.capacity()
    }
}

impl<T> Drop for DynamicArray<T>
where
    T: Dispose,
{
    fn drop(&mut self) {
        self.storage.as_mut_slice().dispose();
    }
}

impl<T> Dispose for DynamicArray<T>
where
    T: Dispose,
{
    /// Disposes every element and gives the buffer back, lock or not.
    ///
    /// Leaves capacity at 0, below the 1 of a fresh array; the next append
    /// grows it to 1.
    fn dispose(&mut self) {
        self.clear();
        self.storage = Vec::new();
        self.capacity = 0;
    }
}

impl<T> Default for DynamicArray<T>
where
    T: Dispose,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for DynamicArray<T>
where
    T: Dispose + Clone,
{
    /// Clones the live elements into a buffer of the same capacity.
    /// The lock state is carried over.
    fn clone(&self) -> Self {
        let mut storage = Vec::with_capacity(self.capacity);
        storage.extend_from_slice(&self.storage);

        Self {
            storage,
            capacity: self.capacity,
            locked: self.locked,
            #[cfg(any(test, feature = "test_utils"))]
            behaviour: DynamicArrayBehaviour::default(),
        }
    }
}

impl<T> fmt::Debug for DynamicArray<T>
where
    T: Dispose + fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DynamicArray")
            .field("len", &self.len())
            .field("capacity", &self.capacity)
            .field("locked", &self.locked)
            .field("elements", &self.as_slice())
            .finish()
    }
}

impl<T> Deref for DynamicArray<T>
where
    T: Dispose,
{
    type Target = [T];

    fn deref(&self) -> &Self::Target {
        &self.storage
    }
}

impl<T> DerefMut for DynamicArray<T>
where
    T: Dispose,
{
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.storage
    }
}

impl<T> AsRef<[T]> for DynamicArray<T>
where
    T: Dispose,
{
    fn as_ref(&self) -> &[T] {
        &self.storage
    }
}

impl<T> AsMut<[T]> for DynamicArray<T>
where
    T: Dispose,
{
    fn as_mut(&mut self) -> &mut [T] {
        &mut self.storage
    }
}

impl<T> PartialEq for DynamicArray<T>
where
    T: Dispose + PartialEq,
{
    /// Compares live elements only.
    fn eq(&self, other: &Self) -> bool {
        self.storage == other.storage
    }
}

impl<T> Eq for DynamicArray<T> where T: Dispose + Eq {}

impl<T> PartialEq<[T]> for DynamicArray<T>
where
    T: Dispose + PartialEq,
{
    fn eq(&self, other: &[T]) -> bool {
        self.as_slice() == other
    }
}

impl<T> PartialEq<&[T]> for DynamicArray<T>
where
    T: Dispose + PartialEq,
{
    fn eq(&self, other: &&[T]) -> bool {
        self.as_slice() == *other
    }
}

impl<T, const N: usize> PartialEq<[T; N]> for DynamicArray<T>
where
    T: Dispose + PartialEq,
{
    fn eq(&self, other: &[T; N]) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T, const N: usize> From<[T; N]> for DynamicArray<T>
where
    T: Dispose,
{
    fn from(items: [T; N]) -> Self {
        Self::from_sequence(items)
    }
}

impl<T> From<Vec<T>> for DynamicArray<T>
where
    T: Dispose,
{
    fn from(items: Vec<T>) -> Self {
        Self::from_sequence(items)
    }
}

impl<T> FromIterator<T> for DynamicArray<T>
where
    T: Dispose,
{
    /// Collects first so the capacity matches the item count.
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let items: Vec<T> = iter.into_iter().collect();
        Self::from_sequence(items)
    }
}

impl<T> IntoIterator for DynamicArray<T>
where
    T: Dispose,
{
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(mut self) -> Self::IntoIter {
        IntoIter::new(mem::take(&mut self.storage))
    }
}

impl<'a, T> IntoIterator for &'a DynamicArray<T>
where
    T: Dispose,
{
    type Item = &'a T;
    type IntoIter = core::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut DynamicArray<T>
where
    T: Dispose,
{
    type Item = &'a mut T;
    type IntoIter = core::slice::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}
