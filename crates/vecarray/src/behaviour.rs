// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

/// Test behaviour for injecting failures in `DynamicArray` operations.
///
/// This is only available with the `test_utils` feature and allows users
/// to test error handling paths in their code by injecting failures.
///
/// The behaviour is sticky - once set, it remains active until changed.
///
/// Every injected failure reports `CapacityOverflow`, so it never reads as a
/// real lock.
///
/// # Example
///
/// ```rust
/// // test_utils feature required in dev-dependencies
/// #[cfg(test)]
/// mod tests {
///     use vecarray::{DynamicArray, DynamicArrayBehaviour, DynamicArrayError};
///
///     #[test]
///     fn test_handles_refused_append() {
///         let mut array = DynamicArray::with_capacity(10);
///         array.change_behaviour(DynamicArrayBehaviour::FailAtAppend);
///
///         // Refused even though capacity allows it
///         assert_eq!(array.append(1u8), Err(DynamicArrayError::CapacityOverflow));
///
///         array.change_behaviour(DynamicArrayBehaviour::None);
///         assert!(array.append(1u8).is_ok());
///     }
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DynamicArrayBehaviour {
    /// Normal behaviour - no injected failures.
    None,
    /// `append()` fails with `CapacityOverflow`.
    FailAtAppend,
    /// `insert()` fails with `CapacityOverflow` after the bounds check.
    FailAtInsert,
    /// Any growth fails with `CapacityOverflow`.
    FailAtGrow,
}

impl Default for DynamicArrayBehaviour {
    fn default() -> Self {
        Self::None
    }
}
