// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use time::Duration;

/// The expiry window used when none is configured.
pub const DEFAULT_EXPIRY_WINDOW: Duration = Duration::minutes(1);

/// Validates that a ticket pool has room for at least one ticket.
///
/// # Arguments
///
/// * `capacity` - The total number of tickets in the pool
///
/// # Errors
///
/// Returns `DomainError::InvalidCapacity` if the capacity is zero.
pub const fn validate_capacity(capacity: usize) -> Result<(), DomainError> {
    if capacity == 0 {
        return Err(DomainError::InvalidCapacity { capacity });
    }
    Ok(())
}

/// Validates that an expiry window is strictly positive.
///
/// # Arguments
///
/// * `window` - How long a pending ticket stays redeemable
///
/// # Errors
///
/// Returns `DomainError::InvalidExpiryWindow` if the window is zero or negative.
pub const fn validate_expiry_window(window: Duration) -> Result<(), DomainError> {
    if !window.is_positive() {
        return Err(DomainError::InvalidExpiryWindow {
            seconds: window.whole_seconds(),
        });
    }
    Ok(())
}
