// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use proptest::prelude::*;

use crate::{DynamicArray, DynamicArrayError};

#[derive(Debug, Clone)]
enum Op {
    Append(u16),
    RemoveLast,
    Insert(u16, usize),
    Clear,
    ShrinkToFit,
    Resize(usize, bool),
    Lock,
    Unlock,
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        4 => any::<u16>().prop_map(Op::Append),
        2 => Just(Op::RemoveLast),
        3 => (any::<u16>(), 0..40usize).prop_map(|(v, i)| Op::Insert(v, i)),
        1 => Just(Op::Clear),
        1 => Just(Op::ShrinkToFit),
        1 => (0..40usize, any::<bool>()).prop_map(|(c, o)| Op::Resize(c, o)),
        1 => Just(Op::Lock),
        1 => Just(Op::Unlock),
    ]
}

/// Plain reference model: values plus the capacity the array should report.
#[derive(Debug)]
struct Model {
    values: Vec<u16>,
    capacity: usize,
    locked: bool,
}

impl Model {
    fn expected_growth(capacity: usize) -> usize {
        (capacity * 3).div_ceil(2).max(capacity + 1)
    }

    fn reserve_one(&mut self) -> bool {
        if self.locked {
            return false;
        }
        if self.values.len() < self.capacity {
            return true;
        }
        self.capacity = Self::expected_growth(self.capacity);
        true
    }

    /// Applies `op` and returns whether it should succeed.
    fn apply(&mut self, op: &Op) -> bool {
        match *op {
            Op::Append(v) => {
                let ok = self.reserve_one();
                if ok {
                    self.values.push(v);
                }
                ok
            }
            Op::RemoveLast => {
                let removed = self.values.pop().is_some();
                if removed && !self.locked {
                    self.capacity -= 1;
                }
                removed
            }
            Op::Insert(v, i) => {
                if i > self.values.len() {
                    return false;
                }
                let ok = self.reserve_one();
                if ok {
                    self.values.insert(i, v);
                }
                ok
            }
            Op::Clear => {
                self.values.clear();
                true
            }
            Op::ShrinkToFit => {
                if self.capacity == self.values.len() {
                    return true;
                }
                if self.locked {
                    return false;
                }
                self.capacity = self.values.len();
                true
            }
            Op::Resize(c, override_shrink) => {
                if self.locked || (c < self.values.len() && !override_shrink) {
                    return false;
                }
                self.values.truncate(c);
                self.capacity = c;
                true
            }
            Op::Lock => {
                self.locked = true;
                true
            }
            Op::Unlock => {
                self.locked = false;
                true
            }
        }
    }
}

fn apply(array: &mut DynamicArray<u16>, op: &Op) -> bool {
    match *op {
        Op::Append(v) => array.append(v).is_ok(),
        Op::RemoveLast => array.remove_last(),
        Op::Insert(v, i) => array.insert(v, i).is_ok(),
        Op::Clear => {
            array.clear();
            true
        }
        Op::ShrinkToFit => array.shrink_to_fit().is_ok(),
        Op::Resize(c, o) => array.resize(c, o).is_ok(),
        Op::Lock => {
            array.lock();
            true
        }
        Op::Unlock => {
            array.unlock();
            true
        }
    }
}

proptest! {
    #[test]
    fn model_based_operations(ops in prop::collection::vec(op_strategy(), 0..200)) {
        let mut array = DynamicArray::new();
        let mut model = Model { values: Vec::new(), capacity: 1, locked: false };

        for op in &ops {
            let expected = model.apply(op);
            let actual = apply(&mut array, op);

            prop_assert_eq!(actual, expected, "op {:?}", op);
            prop_assert_eq!(array.as_slice(), model.values.as_slice());
            prop_assert_eq!(array.capacity(), model.capacity);
            prop_assert_eq!(array.is_locked(), model.locked);
            prop_assert!(array.len() <= array.capacity());
        }
    }

    #[test]
    fn appends_keep_every_value(values in prop::collection::vec(any::<u32>(), 0..300)) {
        let mut array = DynamicArray::new();

        for (n, &v) in values.iter().enumerate() {
            let before = array.capacity();
            array.append(v).expect("Failed to append(..)");

            prop_assert_eq!(array.len(), n + 1);
            if n == before {
                prop_assert_eq!(array.capacity(), Model::expected_growth(before));
            } else {
                prop_assert_eq!(array.capacity(), before);
            }
        }

        prop_assert_eq!(array.as_slice(), values.as_slice());
    }

    #[test]
    fn insert_shifts_suffix(
        original in prop::collection::vec(any::<u8>(), 0..50),
        value in any::<u8>(),
        seed in any::<usize>(),
    ) {
        let index = seed % (original.len() + 1);
        let mut array = DynamicArray::from_sequence(original.iter().copied());

        array.insert(value, index).expect("Failed to insert(..)");

        prop_assert_eq!(array.len(), original.len() + 1);
        prop_assert_eq!(&array[..index], &original[..index]);
        prop_assert_eq!(array[index], value);
        prop_assert_eq!(&array[index + 1..], &original[index..]);
    }

    #[test]
    fn insert_past_len_is_out_of_range(
        original in prop::collection::vec(any::<u8>(), 0..50),
        extra in 1..100usize,
    ) {
        let mut array = DynamicArray::from_sequence(original.iter().copied());
        let index = original.len() + extra;

        prop_assert_eq!(
            array.insert(0, index),
            Err(DynamicArrayError::OutOfRange { index, len: original.len() })
        );
        prop_assert_eq!(array.as_slice(), original.as_slice());
    }

    #[test]
    fn locked_array_never_changes_capacity(
        initial in 0..20usize,
        values in prop::collection::vec(any::<u8>(), 0..60),
        resize_to in 0..40usize,
    ) {
        let mut array = DynamicArray::with_capacity(initial);
        array.lock();

        for &v in &values {
            let _ = array.append(v);
            prop_assert_eq!(array.capacity(), initial);
        }

        prop_assert!(array.is_empty());
        prop_assert_eq!(array.resize(resize_to, true), Err(DynamicArrayError::Locked));
        prop_assert_eq!(array.capacity(), initial);
    }

    #[test]
    fn shrink_to_fit_preserves_values(
        values in prop::collection::vec(any::<u16>(), 0..100),
        spare in 0..50usize,
    ) {
        let mut array = DynamicArray::with_capacity(values.len() + spare);
        for &v in &values {
            array.append(v).expect("Failed to append(..)");
        }

        array.shrink_to_fit().expect("Failed to shrink_to_fit()");

        prop_assert_eq!(array.capacity(), values.len());
        prop_assert_eq!(array.as_slice(), values.as_slice());
    }
}
