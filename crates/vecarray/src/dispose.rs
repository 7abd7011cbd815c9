// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Element disposal hook.
//!
//! A `DynamicArray` calls [`Dispose::dispose`] on every element it retires
//! (`remove_last`, `clear`, truncating `resize`, drop) right before the slot
//! goes away. Plain values have nothing to release, so their implementation
//! is a no-op. Owning handles release the data they own.

use alloc::boxed::Box;
use alloc::rc::Rc;
use alloc::string::String;
use alloc::sync::Arc;
use alloc::vec::Vec;

/// Trait for element types that release owned resources when retired.
///
/// # Example
///
/// ```rust
/// use vecarray::{Dispose, DynamicArray};
///
/// struct Connection {
///     buffer: Vec<u8>,
/// }
///
/// impl Dispose for Connection {
///     fn dispose(&mut self) {
///         self.buffer.dispose();
///     }
/// }
///
/// let mut array = DynamicArray::new();
/// array.append(Connection { buffer: vec![1, 2, 3] }).unwrap();
///
/// // The buffer is released before the slot is retired.
/// assert!(array.remove_last());
/// assert!(array.is_empty());
/// ```
pub trait Dispose {
    /// Releases whatever the value owns.
    ///
    /// Called exactly once per element, immediately before the element is
    /// dropped by the array.
    fn dispose(&mut self);
}

macro_rules! impl_dispose_noop {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Dispose for $ty {
                #[inline(always)]
                fn dispose(&mut self) {}
            }
        )*
    };
}

impl_dispose_noop!(
    u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize, f32, f64, bool, char, (), str,
);

impl<T: ?Sized> Dispose for &T {
    // Borrowed, nothing owned.
    #[inline(always)]
    fn dispose(&mut self) {}
}

impl<T: ?Sized> Dispose for Rc<T> {
    // Shared ownership is released by dropping the handle.
    #[inline(always)]
    fn dispose(&mut self) {}
}

impl<T: ?Sized> Dispose for Arc<T> {
    #[inline(always)]
    fn dispose(&mut self) {}
}

impl<T> Dispose for [T]
where
    T: Dispose,
{
    fn dispose(&mut self) {
        for elem in self.iter_mut() {
            elem.dispose();
        }
    }
}

impl<T, const N: usize> Dispose for [T; N]
where
    T: Dispose,
{
    fn dispose(&mut self) {
        self.as_mut_slice().dispose();
    }
}

impl<T> Dispose for Box<T>
where
    T: Dispose + ?Sized,
{
    fn dispose(&mut self) {
        (**self).dispose();
    }
}

impl<T> Dispose for Option<T>
where
    T: Dispose,
{
    fn dispose(&mut self) {
        if let Some(mut inner) = self.take() {
            inner.dispose();
        }
    }
}

impl<T> Dispose for Vec<T>
where
    T: Dispose,
{
    /// Disposes every element, then gives the allocation back.
    fn dispose(&mut self) {
        self.as_mut_slice().dispose();
        self.clear();
        self.shrink_to_fit();
    }
}

impl Dispose for String {
    fn dispose(&mut self) {
        self.clear();
        self.shrink_to_fit();
    }
}

macro_rules! impl_dispose_tuple {
    ($($name:ident : $idx:tt),+) => {
        impl<$($name: Dispose),+> Dispose for ($($name,)+) {
            fn dispose(&mut self) {
                $( self.$idx.dispose(); )+
            }
        }
    };
}

impl_dispose_tuple!(A: 0);
impl_dispose_tuple!(A: 0, B: 1);
impl_dispose_tuple!(A: 0, B: 1, C: 2);
impl_dispose_tuple!(A: 0, B: 1, C: 2, D: 3);
