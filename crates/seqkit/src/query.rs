// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Predicate tests and counting.

use crate::fold::reduce;

/// Returns `true` if `predicate` holds for at least one element.
///
/// Stops at the first match. An empty slice yields `false`.
///
/// # Example
///
/// ```
/// use seqkit::any;
///
/// let words = ["hello", "there", "general", "kenobi"];
/// assert!(any(&words, |w| w.contains("here")));
/// assert!(!any(&words, |w| w.contains('z')));
/// ```
#[inline]
pub fn any<T, F>(items: &[T], predicate: F) -> bool
where
    F: FnMut(&T) -> bool,
{
    items.iter().any(predicate)
}

/// Returns `true` if `predicate` holds for every element.
///
/// Stops at the first failure. An empty slice yields `true`.
///
/// # Example
///
/// ```
/// use seqkit::all;
///
/// let digits = [0, 1, 2, 3, 4, 5, 6];
/// assert!(all(&digits, |&d| d <= 6));
/// assert!(!all(&digits, |&d| d != 3));
/// ```
#[inline]
pub fn all<T, F>(items: &[T], predicate: F) -> bool
where
    F: FnMut(&T) -> bool,
{
    items.iter().all(predicate)
}

/// Returns `true` if `predicate` holds for no element.
///
/// Stops at the first match. An empty slice yields `true`.
///
/// # Example
///
/// ```
/// use seqkit::none;
///
/// let digits = [0, 1, 2, 3, 4, 5, 6];
/// assert!(none(&digits, |&d| d > 6));
/// assert!(!none(&digits, |&d| d == 2));
/// ```
#[inline]
pub fn none<T, F>(items: &[T], predicate: F) -> bool
where
    F: FnMut(&T) -> bool,
{
    !items.iter().any(predicate)
}

/// Counts the elements equal to `value`.
///
/// # Example
///
/// ```
/// use seqkit::count;
///
/// let words = ["un", "deux", "trois", "deux", "quatre"];
/// assert_eq!(count(&words, &"deux"), 2);
/// ```
#[inline]
pub fn count<T: PartialEq>(items: &[T], value: &T) -> usize {
    count_matching(items, |item| item == value)
}

/// Counts the elements for which `predicate` holds.
///
/// # Example
///
/// ```
/// use seqkit::count_matching;
///
/// let words = ["un", "deux", "trois", "deux", "quatre"];
/// assert_eq!(count_matching(&words, |w| w.contains('e')), 3);
/// ```
#[inline]
pub fn count_matching<T, F>(items: &[T], mut predicate: F) -> usize
where
    F: FnMut(&T) -> bool,
{
    reduce(0, items, |matched, item| {
        if predicate(item) { matched + 1 } else { matched }
    })
}

/// Counts matching elements across a sequence of sequences.
///
/// Inner sequences are visited in outer order; the result is the sum of
/// [`count_matching`] over each of them.
///
/// # Example
///
/// ```
/// use seqkit::count_matching_2d;
///
/// let grid = vec![vec![1, 2, 3], vec![], vec![4, 5, 6]];
/// assert_eq!(count_matching_2d(&grid, |n: &i32| n % 2 == 0), 3);
/// ```
#[inline]
pub fn count_matching_2d<T, S, F>(nested: &[S], mut predicate: F) -> usize
where
    S: AsRef<[T]>,
    F: FnMut(&T) -> bool,
{
    reduce(0, nested, |matched, inner| {
        matched + count_matching(inner.as_ref(), &mut predicate)
    })
}
