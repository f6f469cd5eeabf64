// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Test utilities for seqkit crates.
//!
//! ## License
//!
//! GPL-3.0-only

mod permutations;
mod tagged;

pub use permutations::{factorial, for_each_permutation};
pub use tagged::{Tagged, tag};
