// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Sorting by a strict less-than predicate and order verification.
//!
//! All functions take `less(a, b)`, which must be a strict weak ordering:
//! irreflexive, asymmetric and transitive, with incomparability transitive.
//! Two elements are equivalent when neither is less than the other.

use core::cmp::Ordering;

use crate::error::OrderError;

/// Derives a total `Ordering` from a strict less-than predicate.
///
/// Equivalent elements compare as `Equal`, so a stable sort keeps their
/// input order.
#[inline(always)]
pub(crate) fn ordering_from_less<T, F>(less: &mut F, a: &T, b: &T) -> Ordering
where
    F: FnMut(&T, &T) -> bool,
{
    if less(a, b) {
        Ordering::Less
    } else if less(b, a) {
        Ordering::Greater
    } else {
        Ordering::Equal
    }
}

/// Sorts `items` in place into non-decreasing order according to `less`.
///
/// The sort is stable: equivalent elements keep their relative order.
/// Runs in O(n log n) comparisons on top of the standard library's merge sort.
///
/// # Example
///
/// ```
/// use seqkit::stable_sort_by;
///
/// let mut pairs = [(2, 'a'), (1, 'b'), (2, 'c'), (1, 'd')];
/// stable_sort_by(&mut pairs, |a, b| a.0 < b.0);
/// assert_eq!(pairs, [(1, 'b'), (1, 'd'), (2, 'a'), (2, 'c')]);
/// ```
#[inline]
pub fn stable_sort_by<T, F>(items: &mut [T], mut less: F)
where
    F: FnMut(&T, &T) -> bool,
{
    items.sort_by(|a, b| ordering_from_less(&mut less, a, b));
}

/// Returns `true` if no element is less than its predecessor.
///
/// Empty and single-element slices are sorted.
///
/// # Example
///
/// ```
/// use seqkit::is_sorted_by;
///
/// assert!(is_sorted_by(&[1, 2, 2, 3], |a, b| a < b));
/// assert!(!is_sorted_by(&[1, 3, 2], |a, b| a < b));
/// ```
#[inline]
pub fn is_sorted_by<T, F>(items: &[T], less: F) -> bool
where
    F: FnMut(&T, &T) -> bool,
{
    check_sorted_by(items, less).is_ok()
}

/// Verifies that `items` is in non-decreasing order according to `less`.
///
/// # Errors
///
/// Returns [`OrderError::OutOfOrder`] carrying the index of the first element
/// that is less than its predecessor.
///
/// # Example
///
/// ```
/// use seqkit::{check_sorted_by, OrderError};
///
/// assert_eq!(check_sorted_by(&[1, 2, 3], |a, b| a < b), Ok(()));
/// assert_eq!(
///     check_sorted_by(&[1, 3, 2, 0], |a, b| a < b),
///     Err(OrderError::OutOfOrder { index: 2 })
/// );
/// ```
pub fn check_sorted_by<T, F>(items: &[T], mut less: F) -> Result<(), OrderError>
where
    F: FnMut(&T, &T) -> bool,
{
    match items.windows(2).position(|pair| less(&pair[1], &pair[0])) {
        Some(offset) => Err(OrderError::OutOfOrder { index: offset + 1 }),
        None => Ok(()),
    }
}
