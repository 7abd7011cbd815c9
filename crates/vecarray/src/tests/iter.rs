// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use crate::{DisposeSentinel, DynamicArray};

// =============================================================================
// iter(), iter_mut(), &/&mut IntoIterator
// =============================================================================

#[test]
fn test_iter_covers_live_range_only() {
    let mut array = DynamicArray::with_capacity(10);
    array.append(1u8).expect("Failed to append(1)");
    array.append(2u8).expect("Failed to append(2)");

    let collected: Vec<u8> = array.iter().copied().collect();

    assert_eq!(collected, [1, 2]);
}

#[test]
fn test_iter_is_restartable() {
    let array = DynamicArray::from_sequence([1u8, 2, 3]);

    let first: u32 = array.iter().map(|&x| x as u32).sum();
    let second: u32 = (&array).into_iter().map(|&x| x as u32).sum();

    assert_eq!(first, 6);
    assert_eq!(second, 6);
}

#[test]
fn test_iter_mut() {
    let mut array = DynamicArray::from_sequence([1u8, 2, 3]);

    for x in &mut array {
        *x *= 10;
    }
    array.iter_mut().for_each(|x| *x += 1);

    assert_eq!(array, [11, 21, 31]);
}

#[test]
fn test_iter_empty() {
    let array: DynamicArray<u8> = DynamicArray::with_capacity(4);

    assert_eq!(array.iter().count(), 0);
}

// =============================================================================
// IntoIter
// =============================================================================

#[test]
fn test_into_iter_yields_in_order() {
    let array = DynamicArray::from_sequence([1u8, 2, 3]);
    let iter = array.into_iter();

    assert_eq!(iter.len(), 3);
    assert_eq!(iter.collect::<Vec<_>>(), [1, 2, 3]);
}

#[test]
fn test_into_iter_double_ended() {
    let array = DynamicArray::from_sequence([1u8, 2, 3, 4]);
    let mut iter = array.into_iter();

    assert_eq!(iter.next_back(), Some(4));
    assert_eq!(iter.next(), Some(1));
    assert_eq!(iter.as_slice(), &[2, 3]);
    assert_eq!(iter.rev().collect::<Vec<_>>(), [3, 2]);
}

#[test]
fn test_into_iter_consumed_elements_are_not_disposed() {
    let sentinel = DisposeSentinel::new();
    let array = DynamicArray::from_sequence([sentinel.probe(1), sentinel.probe(2)]);

    let taken: Vec<_> = array.into_iter().collect();

    assert_eq!(sentinel.disposals(), 0);
    assert_eq!(sentinel.drops(), 0);
    assert_eq!(taken.len(), 2);
}

#[test]
fn test_into_iter_drop_disposes_remaining() {
    let sentinel = DisposeSentinel::new();
    let array = DynamicArray::from_sequence([
        sentinel.probe(1),
        sentinel.probe(2),
        sentinel.probe(3),
    ]);

    let mut iter = array.into_iter();
    let first = iter.next().expect("Failed to next()");
    drop(iter);

    assert_eq!(first.value(), 1);
    assert_eq!(sentinel.disposals(), 2);
    assert_eq!(sentinel.drops(), 2);
}

#[test]
fn test_into_iter_debug() {
    let array = DynamicArray::from_sequence([1u8, 2]);
    let iter = array.into_iter();

    assert_eq!(format!("{:?}", iter), "IntoIter([1, 2])");
}
