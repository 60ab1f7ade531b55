// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::outcome::{Cancellation, Purchase, Undone, Validation};
use ticketbooth_domain::{Reference, UserName};

/// A command represents caller intent as data only.
///
/// Each front-end event maps to exactly one command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Buy a ticket, or join the waitlist if none are left.
    Purchase {
        /// The buyer.
        user: UserName,
    },
    /// Cancel a live ticket.
    Cancel {
        /// The ticket to cancel.
        reference: Reference,
    },
    /// Validate a pending ticket.
    Validate {
        /// The ticket to validate.
        reference: Reference,
    },
    /// Reverse the most recent purchase or cancellation.
    Undo,
}

impl Command {
    /// Returns the command name used in logs.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Purchase { .. } => "Purchase",
            Self::Cancel { .. } => "Cancel",
            Self::Validate { .. } => "Validate",
            Self::Undo => "Undo",
        }
    }
}

/// The successful result of applying a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Result of `Command::Purchase`.
    Purchased(Purchase),
    /// Result of `Command::Cancel`.
    Cancelled(Cancellation),
    /// Result of `Command::Validate`.
    Validated(Validation),
    /// Result of `Command::Undo`.
    Undone(Undone),
}
