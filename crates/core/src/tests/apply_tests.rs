// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::tests::helpers::{create_test_registry, reference, user};
use crate::{Cancellation, Command, Effect, Purchase, RegistryError, Undone, Validation, apply};

#[test]
fn test_apply_purchase() {
    let (mut registry, _clock) = create_test_registry(1);

    let effect: Effect = apply(&mut registry, Command::Purchase { user: user("Ana") }).unwrap();

    assert_eq!(
        effect,
        Effect::Purchased(Purchase::Bought {
            reference: reference(1),
            user: user("Ana"),
        })
    );
}

#[test]
fn test_apply_sequence_matches_direct_calls() {
    let (mut registry, _clock) = create_test_registry(2);

    apply(&mut registry, Command::Purchase { user: user("Ana") }).unwrap();
    let validated: Effect = apply(
        &mut registry,
        Command::Validate {
            reference: reference(1),
        },
    )
    .unwrap();
    let cancelled: Effect = apply(
        &mut registry,
        Command::Cancel {
            reference: reference(1),
        },
    )
    .unwrap();
    let undone: Effect = apply(&mut registry, Command::Undo).unwrap();

    assert_eq!(
        validated,
        Effect::Validated(Validation {
            reference: reference(1),
            user: user("Ana"),
        })
    );
    assert_eq!(
        cancelled,
        Effect::Cancelled(Cancellation {
            reference: reference(1),
            user: user("Ana"),
            was_valid: true,
        })
    );
    assert_eq!(
        undone,
        Effect::Undone(Undone::CancellationReverted {
            reference: reference(1),
            user: user("Ana"),
        })
    );
    assert_eq!(registry.available(), 1);
}

#[test]
fn test_apply_propagates_errors() {
    let (mut registry, _clock) = create_test_registry(1);

    assert_eq!(
        apply(
            &mut registry,
            Command::Cancel {
                reference: reference(9),
            }
        ),
        Err(RegistryError::NotFound {
            reference: reference(9),
        })
    );
    assert_eq!(
        apply(&mut registry, Command::Undo),
        Err(RegistryError::NoAction)
    );
}

#[test]
fn test_command_names() {
    assert_eq!(Command::Purchase { user: user("A") }.name(), "Purchase");
    assert_eq!(
        Command::Cancel {
            reference: reference(1)
        }
        .name(),
        "Cancel"
    );
    assert_eq!(
        Command::Validate {
            reference: reference(1)
        }
        .name(),
        "Validate"
    );
    assert_eq!(Command::Undo.name(), "Undo");
}
