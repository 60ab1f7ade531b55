// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{DEFAULT_EXPIRY_WINDOW, DomainError, validate_capacity, validate_expiry_window};
use time::Duration;

#[test]
fn test_positive_capacity_is_accepted() {
    assert!(validate_capacity(1).is_ok());
    assert!(validate_capacity(20).is_ok());
}

#[test]
fn test_zero_capacity_is_rejected() {
    assert_eq!(
        validate_capacity(0),
        Err(DomainError::InvalidCapacity { capacity: 0 })
    );
}

#[test]
fn test_default_expiry_window_is_one_minute() {
    assert_eq!(DEFAULT_EXPIRY_WINDOW, Duration::seconds(60));
    assert!(validate_expiry_window(DEFAULT_EXPIRY_WINDOW).is_ok());
}

#[test]
fn test_non_positive_expiry_window_is_rejected() {
    assert_eq!(
        validate_expiry_window(Duration::ZERO),
        Err(DomainError::InvalidExpiryWindow { seconds: 0 })
    );
    assert_eq!(
        validate_expiry_window(Duration::seconds(-10)),
        Err(DomainError::InvalidExpiryWindow { seconds: -10 })
    );
}
