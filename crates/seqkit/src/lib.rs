// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! # seqkit
//!
//! Generic helpers over ordered sequences: conditional selection, predicate
//! tests, counting, mapping, filtering, flattening, folding and sorting.
//!
//! Every function takes a slice (`&[T]`), so `Vec<T>`, arrays and sub-slices
//! all work. Traversals visit each element exactly once, left to right. Only
//! [`stable_sort_by`] mutates its argument.
//!
//! ## Empty and absent input
//!
//! An empty slice degrades to "no elements processed": [`any`] is `false`,
//! [`all`] and [`none`] are `true`, counts are `0`, [`reduce`] returns its base
//! and [`map`], [`filter`] and [`flatten`] return an empty `Vec`. A missing
//! sequence is the same thing: `Option<&[T]>::unwrap_or_default()` yields `&[]`.
//!
//! ## Example
//!
//! ```rust
//! use seqkit::{count_matching, filter, map, reduce, stable_sort_by};
//!
//! let words = ["un", "deux", "trois", "deux", "quatre"];
//!
//! assert_eq!(count_matching(&words, |w| w.contains('e')), 3);
//!
//! let lengths = map(&words, |w| w.len());
//! assert_eq!(lengths, vec![2, 4, 5, 4, 6]);
//!
//! let long = filter(&lengths, |&n| n > 4);
//! assert_eq!(long, vec![5, 6]);
//!
//! assert_eq!(reduce(0, &lengths, |acc, n| acc + n), 21);
//!
//! let mut sorted = words;
//! stable_sort_by(&mut sorted, |a, b| a.len() < b.len());
//! assert_eq!(sorted, ["un", "deux", "deux", "trois", "quatre"]);
//! ```

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]

extern crate alloc;

#[cfg(test)]
mod tests;

mod error;
mod fold;
mod order;
mod query;
mod transform;

pub use error::OrderError;
pub use fold::{reduce, try_reduce};
pub use order::{check_sorted_by, is_sorted_by, stable_sort_by};
pub use query::{all, any, count, count_matching, count_matching_2d, none};
pub use transform::{filter, flatten, map, map_with_index, try_map};

/// Returns `if_true` when `condition` holds, `if_false` otherwise.
///
/// Both branches are plain values, evaluated by the caller before the call.
///
/// # Example
///
/// ```
/// use seqkit::select;
///
/// assert_eq!(select(true, "truth", "lies"), "truth");
/// assert_eq!(select(false, "truth", "lies"), "lies");
/// ```
#[inline(always)]
pub fn select<T>(condition: bool, if_true: T, if_false: T) -> T {
    if condition { if_true } else { if_false }
}
