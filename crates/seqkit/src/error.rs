// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use thiserror::Error;

/// Errors reported when checking the order of a sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum OrderError {
    /// The element at `index` is less than the element before it.
    #[error("element at index {index} is less than its predecessor")]
    OutOfOrder {
        /// Position of the first offending element.
        index: usize,
    },
}
