// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Exhaustive permutation driver for ordering tests.

/// Heap's algorithm over the first `k` elements of `items`.
fn heap_permute<T, F>(items: &mut [T], k: usize, callback: &mut F)
where
    F: FnMut(&[T]),
{
    if k <= 1 {
        callback(items);
        return;
    }

    heap_permute(items, k - 1, callback);

    for i in 0..k - 1 {
        if k % 2 == 0 {
            items.swap(i, k - 1);
        } else {
            items.swap(0, k - 1);
        }
        heap_permute(items, k - 1, callback);
    }
}

/// Calls `callback` once with every ordering of `items`.
///
/// Duplicated elements are treated as distinct, so exactly `items.len()!`
/// orderings are produced. An empty input yields a single empty ordering.
///
/// # Example
/// ```
/// use seqkit_test_utils::for_each_permutation;
///
/// let mut seen = Vec::new();
/// for_each_permutation(&['a', 'b', 'c'], |perm| seen.push(perm.to_vec()));
///
/// assert_eq!(seen.len(), 6);
/// assert!(seen.contains(&vec!['c', 'b', 'a']));
/// ```
pub fn for_each_permutation<T, F>(items: &[T], mut callback: F)
where
    T: Clone,
    F: FnMut(&[T]),
{
    let mut scratch = items.to_vec();
    let len = scratch.len();
    heap_permute(&mut scratch, len, &mut callback);
}

/// Returns `n!`.
pub fn factorial(n: usize) -> usize {
    (1..=n).product()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_permutation_counts() {
        for len in 0..=6 {
            let items: Vec<usize> = (0..len).collect();
            let mut count = 0;
            for_each_permutation(&items, |_| count += 1);
            assert_eq!(count, factorial(len), "{}! orderings expected", len);
        }
    }

    #[test]
    fn test_permutations_are_distinct() {
        let mut seen: Vec<Vec<u8>> = Vec::new();
        for_each_permutation(&[1u8, 2, 3, 4], |perm| seen.push(perm.to_vec()));

        seen.sort();
        seen.dedup();
        assert_eq!(seen.len(), 24);
    }

    #[test]
    fn test_input_untouched() {
        let items = [3, 1, 2];
        for_each_permutation(&items, |_| {});
        assert_eq!(items, [3, 1, 2]);
    }

    #[test]
    fn test_factorial() {
        assert_eq!(factorial(0), 1);
        assert_eq!(factorial(1), 1);
        assert_eq!(factorial(5), 120);
    }
}
