// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Error types for vecarray.

use thiserror::Error;

/// Error type for `DynamicArray` operations.
///
/// Every refused operation leaves the array exactly as it was before the call.
#[derive(Debug, Error, Clone, Copy, Eq, PartialEq)]
pub enum DynamicArrayError {
    /// The index does not address a valid position for the operation.
    ///
    /// Element access requires `index < len`, insertion requires `index <= len`.
    #[error("index {index} is out of range for length {len}")]
    OutOfRange {
        /// The requested index.
        index: usize,
        /// The live length at the time of the call.
        len: usize,
    },

    /// The array is locked and the operation would have changed its capacity.
    #[error("array is locked: capacity cannot change")]
    Locked,

    /// `resize` was asked to go below the live length without the override flag.
    #[error("cannot resize to {requested}: {len} live elements would be lost")]
    ShrinkBelowLen {
        /// The requested capacity.
        requested: usize,
        /// The live length at the time of the call.
        len: usize,
    },

    /// Growth arithmetic would exceed [`DynamicArray::max_size`].
    ///
    /// [`DynamicArray::max_size`]: crate::DynamicArray::max_size
    #[error("capacity overflow: growth would exceed max_size")]
    CapacityOverflow,
}
