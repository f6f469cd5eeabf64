// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

#[cfg(test)]
mod fold_tests {
    use seqkit::{reduce, try_reduce};

    #[test]
    fn test_reduce_product() {
        assert_eq!(reduce(1, &[1, 2, 3, 4, 5, 6], |a, b| a * b), 720);
    }

    #[test]
    fn test_reduce_empty_returns_base() {
        let empty: [i32; 0] = [];
        assert_eq!(reduce(42, &empty, |a, b| a + b), 42);
    }

    #[test]
    fn test_reduce_is_left_to_right() {
        let joined = reduce(String::from(">"), &["a", "b", "c"], |mut acc, s| {
            acc.push_str(s);
            acc
        });
        assert_eq!(joined, ">abc");
    }

    #[test]
    fn test_reduce_changes_type() {
        let total_len = reduce(0usize, &["abc", "d", "efgh"], |acc, s| acc + s.len());
        assert_eq!(total_len, 8);
    }

    #[test]
    fn test_try_reduce_ok() {
        let sum = try_reduce(0u8, &[10u8, 20, 30], |acc, &n| acc.checked_add(n).ok_or(n));
        assert_eq!(sum, Ok(60));
    }

    #[test]
    fn test_try_reduce_stops_at_first_error() {
        let mut visited = Vec::new();
        let sum = try_reduce(0u8, &[200u8, 100, 10, 1], |acc, &n| {
            visited.push(n);
            acc.checked_add(n).ok_or(n)
        });

        assert_eq!(sum, Err(100));
        assert_eq!(visited, vec![200, 100]);
    }

    #[test]
    fn test_try_reduce_empty_returns_base() {
        let empty: [u8; 0] = [];
        let result: Result<u8, ()> = try_reduce(9, &empty, |acc, _| Ok(acc));
        assert_eq!(result, Ok(9));
    }
}
