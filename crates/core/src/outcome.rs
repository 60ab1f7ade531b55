// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use serde::Serialize;
use ticketbooth_domain::{Reference, TicketState, UserName};

/// The result of a purchase attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Purchase {
    /// A ticket was issued.
    Bought {
        /// The new ticket's reference.
        reference: Reference,
        /// The buyer.
        user: UserName,
    },
    /// The pool was empty; the user is on the waitlist.
    Waitlisted {
        /// The waiting user.
        user: UserName,
        /// 1-based position on the waitlist.
        position: usize,
    },
}

impl Purchase {
    /// Returns the issued reference, if a ticket was bought.
    #[must_use]
    pub const fn reference(&self) -> Option<&Reference> {
        match self {
            Self::Bought { reference, .. } => Some(reference),
            Self::Waitlisted { .. } => None,
        }
    }

    /// Returns true if a ticket was issued.
    #[must_use]
    pub const fn is_bought(&self) -> bool {
        matches!(self, Self::Bought { .. })
    }
}

/// A successful cancellation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cancellation {
    /// The cancelled reference.
    pub reference: Reference,
    /// The former holder.
    pub user: UserName,
    /// Whether the ticket had already been validated.
    pub was_valid: bool,
}

/// A successful validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Validation {
    /// The validated reference.
    pub reference: Reference,
    /// The holder.
    pub user: UserName,
}

/// A successful undo.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Undone {
    /// A purchase was reversed and its ticket returned to the pool.
    PurchaseReverted {
        /// The released reference.
        reference: Reference,
        /// The buyer.
        user: UserName,
    },
    /// A cancellation was reversed and the ticket re-issued as pending.
    CancellationReverted {
        /// The reinstated reference.
        reference: Reference,
        /// The holder.
        user: UserName,
    },
}

impl Undone {
    /// Returns the reference the undo acted on.
    #[must_use]
    pub const fn reference(&self) -> &Reference {
        match self {
            Self::PurchaseReverted { reference, .. }
            | Self::CancellationReverted { reference, .. } => reference,
        }
    }
}

/// One ticket as listed under its holder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TicketSummary {
    /// The ticket reference.
    pub reference: Reference,
    /// The ticket state.
    pub state: TicketState,
}

impl TicketSummary {
    /// Returns true if the ticket has been validated.
    #[must_use]
    pub const fn valid(&self) -> bool {
        matches!(self.state, TicketState::Valid)
    }
}

/// Point-in-time counters of a registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RegistrySnapshot {
    /// Total tickets in the pool.
    pub capacity: usize,
    /// Tickets that can still be bought.
    pub available: usize,
    /// Live tickets (pending or valid).
    pub live: usize,
    /// Capacity lost to expired tickets.
    pub forfeited: usize,
    /// Users on the waitlist.
    pub waitlisted: usize,
    /// Entries in the cancellation history.
    pub history_len: usize,
    /// Actions that can be undone.
    pub undo_depth: usize,
}

impl RegistrySnapshot {
    /// Returns true if every unit of capacity is accounted for exactly once.
    #[must_use]
    pub const fn is_conserved(&self) -> bool {
        self.available + self.live + self.forfeited == self.capacity
    }
}
