// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Contiguous growable array with manual capacity control and a capacity lock.
//!
//! `DynamicArray<T>` keeps its elements in one contiguous buffer and tracks
//! its own capacity. Every capacity change goes through a single
//! allocate-move-retire step, so callers always know when the buffer moves.
//!
//! # Core Guarantees
//!
//! - **Predictable growth**: When full, capacity grows to `ceil(capacity * 1.5)`
//!   (0 → 1 → 2 → 3 → 5 → 8 ...).
//! - **Capacity lock**: `lock()` freezes the capacity. Appends, inserts and
//!   explicit resizes fail with [`DynamicArrayError::Locked`] until `unlock()`.
//! - **Explicit failures**: Refused operations return `Err` and leave the
//!   array untouched.
//! - **Element disposal**: Every retired element goes through [`Dispose`]
//!   exactly once before it is dropped.
//! - **Tight pops**: `remove_last()` shrinks the capacity by one as well.
//!
//! # Example: Basic Usage
//!
//! ```rust
//! use vecarray::{dynarray, DynamicArrayError};
//!
//! fn example() -> Result<(), DynamicArrayError> {
//!     let mut array = dynarray![1u32, 2, 3];
//!     assert_eq!(array.capacity(), 3);
//!
//!     array.insert(4, 3)?;
//!     assert_eq!(array, [1, 2, 3, 4]);
//!     assert_eq!(array.capacity(), 5);
//!
//!     array.clear();
//!     assert_eq!(array.capacity(), 5);
//!
//!     array.append(2)?;
//!     assert_eq!(array, [2]);
//!     Ok(())
//! }
//! # example().unwrap();
//! ```
//!
//! # Example: Locked Capacity
//!
//! ```rust
//! use vecarray::{DynamicArray, DynamicArrayError};
//!
//! fn example() -> Result<(), DynamicArrayError> {
//!     let mut array = DynamicArray::<u8>::with_capacity(5);
//!     for i in 0..3 {
//!         array.append(i)?;
//!     }
//!
//!     // Shrinking below the live length needs the override flag
//!     assert!(array.resize(2, false).is_err());
//!
//!     array.lock();
//!     assert_eq!(array.resize(10, false), Err(DynamicArrayError::Locked));
//!
//!     array.unlock();
//!     array.resize(2, true)?;
//!     assert_eq!(array, [0, 1]);
//!     Ok(())
//! }
//! # example().unwrap();
//! ```
//!
//! # Test Utilities
//!
//! Enable the `test_utils` feature to inject failures and to count disposals:
//!
//! ```toml
//! [dev-dependencies]
//! vecarray = { version = "*", features = ["test_utils"] }
//! ```
//!
//! Then use [`DynamicArrayBehaviour`] to test error scenarios and
//! [`DisposeSentinel`] to check that elements are released exactly once.

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]
#![warn(unsafe_op_in_unsafe_fn)]

extern crate alloc;

mod dispose;
mod dynamic_array;
mod error;
mod growth;
mod iter;
mod macros;

#[cfg(any(test, feature = "test_utils"))]
mod behaviour;
#[cfg(any(test, feature = "test_utils"))]
mod sentinel;

#[cfg(test)]
mod tests;

pub use dispose::Dispose;
pub use dynamic_array::DynamicArray;
pub use error::DynamicArrayError;
pub use iter::IntoIter;

#[cfg(any(test, feature = "test_utils"))]
pub use behaviour::DynamicArrayBehaviour;
#[cfg(any(test, feature = "test_utils"))]
pub use sentinel::{DisposeProbe, DisposeSentinel};
