// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use thiserror::Error;

/// Errors that can occur during domain validation.
///
/// These are raised at construction time of domain values, before any
/// registry state is touched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// The user name was empty or contained only whitespace.
    #[error("Please enter a user name")]
    EmptyUser,
    /// The ticket reference was empty or contained only whitespace.
    #[error("Please enter a reference number")]
    EmptyReference,
    /// The ticket pool must hold at least one ticket.
    #[error("Invalid capacity: {capacity}. Must be greater than 0")]
    InvalidCapacity {
        /// The rejected capacity.
        capacity: usize,
    },
    /// The expiry window must be a positive duration.
    #[error("Invalid expiry window: {seconds}s. Must be greater than 0")]
    InvalidExpiryWindow {
        /// The rejected window, in whole seconds.
        seconds: i64,
    },
    /// The reference strategy name is not recognised.
    #[error("Invalid reference strategy: '{0}'. Expected 'monotonic' or 'live_count'")]
    InvalidReferenceStrategy(String),
}
