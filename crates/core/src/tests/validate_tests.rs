// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::tests::helpers::{
    buy, create_test_registry, create_test_registry_with, reference, user,
};
use crate::{RegistryConfig, RegistryError, Validation};
use time::Duration;
use ticketbooth_domain::TicketState;

#[test]
fn test_validate_within_window_succeeds() {
    let (mut registry, clock) = create_test_registry(2);
    let ticket = buy(&mut registry, "Ana");
    clock.advance(Duration::seconds(30));

    let validation: Validation = registry.validate(&ticket).unwrap();

    assert_eq!(validation.reference, ticket);
    assert_eq!(validation.user, user("Ana"));
    assert_eq!(registry.ticket(&ticket).unwrap().state, TicketState::Valid);
}

#[test]
fn test_second_validation_reports_already_valid() {
    let (mut registry, clock) = create_test_registry(2);
    let ticket = buy(&mut registry, "Ana");
    registry.validate(&ticket).unwrap();

    clock.advance(Duration::minutes(10));
    let result: Result<Validation, RegistryError> = registry.validate(&ticket);

    assert_eq!(
        result,
        Err(RegistryError::AlreadyValid {
            reference: ticket.clone(),
        })
    );
    assert!(registry.ticket(&ticket).is_some());
}

#[test]
fn test_validate_unknown_reference() {
    let (mut registry, _clock) = create_test_registry(2);

    assert_eq!(
        registry.validate(&reference(7)),
        Err(RegistryError::NotFound {
            reference: reference(7),
        })
    );
}

#[test]
fn test_expired_ticket_is_removed_without_returning_capacity() {
    let (mut registry, clock) = create_test_registry(2);
    let ticket = buy(&mut registry, "Ana");
    clock.advance(Duration::seconds(61));

    let result: Result<Validation, RegistryError> = registry.validate(&ticket);

    assert_eq!(
        result,
        Err(RegistryError::Expired {
            reference: ticket.clone(),
            age_seconds: 61,
        })
    );
    assert!(registry.ticket(&ticket).is_none());
    assert_eq!(registry.available(), 1);
    assert_eq!(registry.forfeited(), 1);
    assert!(registry.history().is_empty());
}

#[test]
fn test_expiry_boundary_is_inclusive() {
    let (mut registry, clock) = create_test_registry(2);
    let early = buy(&mut registry, "Ana");
    let exact = buy(&mut registry, "Luis");

    clock.advance(Duration::seconds(59));
    assert!(registry.validate(&early).is_ok());

    clock.advance(Duration::seconds(1));
    assert!(matches!(
        registry.validate(&exact),
        Err(RegistryError::Expired { .. })
    ));
}

#[test]
fn test_expired_ticket_then_reports_not_found() {
    let (mut registry, clock) = create_test_registry(1);
    let ticket = buy(&mut registry, "Ana");
    clock.advance(Duration::minutes(2));

    let _ = registry.validate(&ticket);

    assert!(matches!(
        registry.validate(&ticket),
        Err(RegistryError::NotFound { .. })
    ));
}

#[test]
fn test_validated_ticket_never_expires() {
    let (mut registry, clock) = create_test_registry(1);
    let ticket = buy(&mut registry, "Ana");
    registry.validate(&ticket).unwrap();

    clock.advance(Duration::hours(5));

    assert!(matches!(
        registry.validate(&ticket),
        Err(RegistryError::AlreadyValid { .. })
    ));
    assert_eq!(registry.forfeited(), 0);
}

#[test]
fn test_custom_expiry_window() {
    let config: RegistryConfig = RegistryConfig::new(1)
        .unwrap()
        .with_expiry_window(Duration::seconds(5))
        .unwrap();
    let (mut registry, clock) = create_test_registry_with(config);
    let ticket = buy(&mut registry, "Ana");

    clock.advance(Duration::seconds(5));

    assert!(matches!(
        registry.validate(&ticket),
        Err(RegistryError::Expired { age_seconds: 5, .. })
    ));
}

#[test]
fn test_validation_does_not_touch_undo_log() {
    let (mut registry, _clock) = create_test_registry(1);
    let ticket = buy(&mut registry, "Ana");

    registry.validate(&ticket).unwrap();

    assert_eq!(registry.undo_depth(), 1);
}
