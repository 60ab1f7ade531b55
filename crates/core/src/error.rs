// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::undo::UndoKind;
use thiserror::Error;
use ticketbooth_domain::{DomainError, Reference};

/// Errors that can occur while building a registry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    /// A domain rule was violated.
    #[error("Domain violation: {0}")]
    DomainViolation(#[from] DomainError),
}

/// Why an undo could not be carried out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConflictReason {
    /// Another live ticket holds the reference.
    ReferenceOccupied,
    /// The ticket was validated, removed or handed to someone else.
    TicketChanged,
    /// Every unit of capacity is in use.
    PoolExhausted,
}

impl ConflictReason {
    /// Returns a short human-readable description.
    #[must_use]
    pub const fn describe(&self) -> &'static str {
        match self {
            Self::ReferenceOccupied => "the reference is in use again",
            Self::TicketChanged => "the ticket was already used or cancelled",
            Self::PoolExhausted => "no tickets are available",
        }
    }
}

/// Recoverable failures of registry operations.
///
/// None of these are fatal. `Expired` and `Conflict` do carry side effects:
/// an expired ticket is removed, and a conflicting undo entry is consumed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    /// No live ticket has this reference.
    #[error("Reference {reference} not found")]
    NotFound {
        /// The reference that was looked up.
        reference: Reference,
    },
    /// The ticket was validated before.
    #[error("Ticket {reference} is already validated")]
    AlreadyValid {
        /// The validated ticket.
        reference: Reference,
    },
    /// The ticket outlived the expiry window and has been removed.
    #[error("Ticket {reference} has expired ({age_seconds}s since issue)")]
    Expired {
        /// The removed ticket.
        reference: Reference,
        /// Age of the ticket when validation was attempted.
        age_seconds: i64,
    },
    /// The most recent action could not be reversed.
    #[error("Cannot undo {kind} of {reference}: {}", .reason.describe())]
    Conflict {
        /// The reference the undo entry was about.
        reference: Reference,
        /// The kind of action that was popped.
        kind: UndoKind,
        /// Why the reversal was refused.
        reason: ConflictReason,
    },
    /// The undo log is empty.
    #[error("There are no actions to undo")]
    NoAction,
}
