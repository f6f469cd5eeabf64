// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

/// Left fold of `items` into `base` with `f`.
///
/// Computes `f(..f(f(base, &items[0]), &items[1]).., &items[n - 1])`.
/// An empty slice returns `base` unchanged.
///
/// # Example
///
/// ```
/// use seqkit::reduce;
///
/// let factorial = reduce(1, &[1, 2, 3, 4, 5, 6], |acc, n| acc * n);
/// assert_eq!(factorial, 720);
/// ```
#[inline]
pub fn reduce<B, T, F>(base: B, items: &[T], f: F) -> B
where
    F: FnMut(B, &T) -> B,
{
    items.iter().fold(base, f)
}

/// Left fold with a fallible step.
///
/// Returns the first `Err` produced by `f`; elements after the failing one
/// are not visited.
///
/// # Example
///
/// ```
/// use seqkit::try_reduce;
///
/// let sum = try_reduce(0u8, &[100u8, 100], |acc, &n| acc.checked_add(n).ok_or("overflow"));
/// assert_eq!(sum, Ok(200));
///
/// let sum = try_reduce(0u8, &[200u8, 100], |acc, &n| acc.checked_add(n).ok_or("overflow"));
/// assert_eq!(sum, Err("overflow"));
/// ```
#[inline]
pub fn try_reduce<B, T, E, F>(base: B, items: &[T], f: F) -> Result<B, E>
where
    F: FnMut(B, &T) -> Result<B, E>,
{
    items.iter().try_fold(base, f)
}
