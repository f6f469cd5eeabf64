// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

/// A sort key paired with the position it had before sorting.
///
/// Ordering by `key` alone leaves tagged values with equal keys equivalent,
/// so `position` shows whether a sort kept them in input order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tagged<K> {
    /// Value compared by the sort.
    pub key: K,
    /// Index in the unsorted input.
    pub position: usize,
}

/// Tags each key with its index in `keys`.
///
/// # Example
/// ```
/// use seqkit_test_utils::{tag, Tagged};
///
/// let tagged = tag(&[5, 5]);
/// assert_eq!(tagged[1], Tagged { key: 5, position: 1 });
/// ```
pub fn tag<K: Clone>(keys: &[K]) -> Vec<Tagged<K>> {
    keys.iter()
        .enumerate()
        .map(|(position, key)| Tagged {
            key: key.clone(),
            position,
        })
        .collect()
}

impl<K: PartialOrd> Tagged<K> {
    /// Strict less-than on `key` only.
    pub fn key_less(a: &Self, b: &Self) -> bool {
        a.key < b.key
    }

    /// Returns `true` if equal keys in `sorted` appear in increasing
    /// `position` order.
    pub fn ties_in_input_order(sorted: &[Self]) -> bool {
        sorted
            .windows(2)
            .filter(|pair| pair[0].key == pair[1].key)
            .all(|pair| pair[0].position < pair[1].position)
    }
}
