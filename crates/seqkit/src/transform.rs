// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Order-preserving transformations producing new sequences.

use alloc::vec::Vec;

use crate::fold::reduce;

/// Concatenates a sequence of sequences into a single `Vec`.
///
/// Element order is preserved within and across inner sequences; empty inner
/// sequences contribute nothing.
///
/// # Example
///
/// ```
/// use seqkit::flatten;
///
/// let nested: [&[i32]; 6] = [&[0, 1], &[2], &[3, 4, 5], &[], &[6], &[]];
/// let flat: Vec<i32> = flatten(&nested);
/// assert_eq!(flat, vec![0, 1, 2, 3, 4, 5, 6]);
/// ```
#[inline]
pub fn flatten<T, S>(nested: &[S]) -> Vec<T>
where
    T: Clone,
    S: AsRef<[T]>,
{
    reduce(Vec::new(), nested, |mut flat, inner| {
        flat.extend_from_slice(inner.as_ref());
        flat
    })
}

/// Returns the elements for which `predicate` holds, in their original order.
///
/// When nothing matches the result is an empty `Vec` (which does not allocate).
///
/// # Example
///
/// ```
/// use seqkit::filter;
///
/// let evens = filter(&[0, 1, 2, 3, 4, 5, 6], |&n| n % 2 == 0 && n != 4);
/// assert_eq!(evens, vec![0, 2, 6]);
/// ```
#[inline]
pub fn filter<T, F>(items: &[T], mut predicate: F) -> Vec<T>
where
    T: Clone,
    F: FnMut(&T) -> bool,
{
    let mut kept = Vec::new();
    for item in items {
        if predicate(item) {
            kept.push(item.clone());
        }
    }
    kept
}

/// Maps every element together with its zero-based index.
///
/// The output has the same length as `items`; element `i` is
/// `f(i, &items[i])`, computed in order.
///
/// # Example
///
/// ```
/// use seqkit::map_with_index;
///
/// let tagged = map_with_index(&["abc", "def", "ghij"], |i, s| format!("{i}:{s}"));
/// assert_eq!(tagged, vec!["0:abc", "1:def", "2:ghij"]);
/// ```
#[inline]
pub fn map_with_index<I, O, F>(items: &[I], mut f: F) -> Vec<O>
where
    F: FnMut(usize, &I) -> O,
{
    let mut mapped = Vec::with_capacity(items.len());
    for (idx, item) in items.iter().enumerate() {
        mapped.push(f(idx, item));
    }
    mapped
}

/// Maps every element with `f`, preserving order and length.
///
/// # Example
///
/// ```
/// use seqkit::map;
///
/// let lengths = map(&["abc", "d", "efgh"], |s| s.len());
/// assert_eq!(lengths, vec![3, 1, 4]);
/// ```
#[inline]
pub fn map<I, O, F>(items: &[I], mut f: F) -> Vec<O>
where
    F: FnMut(&I) -> O,
{
    map_with_index(items, |_, item| f(item))
}

/// Maps every element with a fallible `f`.
///
/// Returns the first `Err` produced by `f`; elements after the failing one
/// are not visited.
///
/// # Example
///
/// ```
/// use seqkit::try_map;
///
/// let parsed = try_map(&["1", "2", "3"], |s| s.parse::<u32>());
/// assert_eq!(parsed, Ok(vec![1, 2, 3]));
///
/// let parsed = try_map(&["1", "x", "3"], |s| s.parse::<u32>());
/// assert!(parsed.is_err());
/// ```
#[inline]
pub fn try_map<I, O, E, F>(items: &[I], f: F) -> Result<Vec<O>, E>
where
    F: FnMut(&I) -> Result<O, E>,
{
    items.iter().map(f).collect()
}
