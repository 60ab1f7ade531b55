// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use crate::reference::Reference;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use time::{Duration, OffsetDateTime};

/// The name of a person holding or requesting tickets.
///
/// Names are trimmed on construction and can never be blank.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct UserName(String);

impl UserName {
    /// Creates a new user name.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::EmptyUser` if the value is empty after trimming.
    pub fn new(value: &str) -> Result<Self, DomainError> {
        let trimmed: &str = value.trim();
        if trimmed.is_empty() {
            return Err(DomainError::EmptyUser);
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Returns the user name as a string slice.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for UserName {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(&value)
    }
}

impl From<UserName> for String {
    fn from(user: UserName) -> Self {
        user.0
    }
}

impl std::fmt::Display for UserName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Lifecycle state of a live ticket.
///
/// A ticket is issued `Pending` and may be validated exactly once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum TicketState {
    /// Issued but not yet validated.
    #[default]
    Pending,
    /// Validated at the gate. No further transitions.
    Valid,
}

impl TicketState {
    /// Returns the string representation used in API payloads.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Valid => "valid",
        }
    }

    /// Returns the human-readable validity label shown to users.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Pending => "Not valid",
            Self::Valid => "Valid",
        }
    }

    /// Returns true if this state cannot transition any further.
    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        matches!(self, Self::Valid)
    }

    /// Checks if a transition from this state to another is valid.
    ///
    /// The only permitted transition is `Pending` → `Valid`.
    #[must_use]
    pub const fn can_transition_to(&self, target: Self) -> bool {
        matches!((self, target), (Self::Pending, Self::Valid))
    }
}

impl FromStr for TicketState {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(Self::Pending),
            "valid" => Ok(Self::Valid),
            _ => Err(format!("Invalid ticket state: '{s}'")),
        }
    }
}

impl std::fmt::Display for TicketState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A live ticket backed by one unit of pool capacity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ticket {
    /// The unique reference code.
    pub reference: Reference,
    /// The ticket holder.
    pub user: UserName,
    /// Current validation state.
    pub state: TicketState,
    /// When the ticket was issued (or re-issued by undo).
    #[serde(with = "time::serde::rfc3339")]
    pub issued_at: OffsetDateTime,
}

impl Ticket {
    /// Issues a new pending ticket.
    ///
    /// # Arguments
    ///
    /// * `reference` - The reference code for the ticket
    /// * `user` - The ticket holder
    /// * `issued_at` - The issue timestamp
    #[must_use]
    pub const fn issue(
        reference: Reference,
        user: UserName,
        issued_at: OffsetDateTime,
    ) -> Self {
        Self {
            reference,
            user,
            state: TicketState::Pending,
            issued_at,
        }
    }

    /// Returns true if the ticket has already been validated.
    #[must_use]
    pub const fn is_valid(&self) -> bool {
        matches!(self.state, TicketState::Valid)
    }

    /// Returns how long ago the ticket was issued.
    #[must_use]
    pub fn age(&self, now: OffsetDateTime) -> Duration {
        now - self.issued_at
    }

    /// Returns true once the ticket's age reaches the expiry window.
    ///
    /// The boundary is inclusive: a ticket exactly `window` old is expired.
    #[must_use]
    pub fn is_expired(&self, now: OffsetDateTime, window: Duration) -> bool {
        self.age(now) >= window
    }

    /// Marks a pending ticket as valid.
    ///
    /// Returns false, leaving the ticket untouched, if it was already valid.
    pub fn mark_valid(&mut self) -> bool {
        if !self.state.can_transition_to(TicketState::Valid) {
            return false;
        }
        self.state = TicketState::Valid;
        true
    }
}
