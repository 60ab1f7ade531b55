// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::tests::helpers::{buy, create_test_registry, reference, user};
use crate::{Cancellation, RegistryError, RegistrySnapshot, UndoAction};
use ticketbooth_audit::{HistoryEntry, HistoryStatus};

#[test]
fn test_cancel_returns_capacity_and_logs_history() {
    let (mut registry, _clock) = create_test_registry(2);
    let ticket = buy(&mut registry, "Ana");

    let cancellation: Cancellation = registry.cancel(&ticket).unwrap();

    assert_eq!(cancellation.reference, ticket);
    assert_eq!(cancellation.user, user("Ana"));
    assert!(!cancellation.was_valid);
    assert_eq!(registry.available(), 2);
    assert!(registry.ticket(&ticket).is_none());
    assert_eq!(
        registry.history().entries(),
        &[HistoryEntry::new(
            ticket,
            user("Ana"),
            HistoryStatus::Cancelled
        )]
    );
}

#[test]
fn test_cancel_records_undo_entry() {
    let (mut registry, _clock) = create_test_registry(2);
    let ticket = buy(&mut registry, "Ana");

    registry.cancel(&ticket).unwrap();

    assert_eq!(registry.undo_depth(), 2);
    assert_eq!(
        registry.pending_undo(),
        Some(&UndoAction::Cancel {
            reference: ticket,
            user: user("Ana"),
        })
    );
}

#[test]
fn test_cancel_unknown_reference_changes_nothing() {
    let (mut registry, _clock) = create_test_registry(2);
    buy(&mut registry, "Ana");
    let before: RegistrySnapshot = registry.snapshot();

    let result: Result<Cancellation, RegistryError> = registry.cancel(&reference(42));

    assert_eq!(
        result,
        Err(RegistryError::NotFound {
            reference: reference(42),
        })
    );
    assert_eq!(registry.snapshot(), before);
}

#[test]
fn test_cancel_twice_fails_second_time() {
    let (mut registry, _clock) = create_test_registry(1);
    let ticket = buy(&mut registry, "Ana");

    assert!(registry.cancel(&ticket).is_ok());
    assert!(matches!(
        registry.cancel(&ticket),
        Err(RegistryError::NotFound { .. })
    ));
    assert_eq!(registry.available(), 1);
    assert_eq!(registry.history().len(), 1);
}

#[test]
fn test_validated_ticket_can_be_cancelled() {
    let (mut registry, _clock) = create_test_registry(1);
    let ticket = buy(&mut registry, "Ana");
    registry.validate(&ticket).unwrap();

    let cancellation: Cancellation = registry.cancel(&ticket).unwrap();

    assert!(cancellation.was_valid);
    assert_eq!(registry.available(), 1);
}

#[test]
fn test_cancel_does_not_promote_waitlist() {
    let (mut registry, _clock) = create_test_registry(1);
    let ticket = buy(&mut registry, "Ana");
    registry.purchase(user("Luis"));

    registry.cancel(&ticket).unwrap();

    assert_eq!(registry.available(), 1);
    assert_eq!(registry.waitlist(), &[user("Luis")]);
}
