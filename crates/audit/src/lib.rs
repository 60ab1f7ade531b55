// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]

use serde::{Deserialize, Serialize};
use ticketbooth_domain::{Reference, UserName};

/// The status recorded for a history entry.
///
/// Only cancellations are logged today. Expired tickets vanish without a
/// trace, matching how the booth has always behaved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HistoryStatus {
    /// The ticket was cancelled and its capacity returned to the pool.
    Cancelled,
}

impl HistoryStatus {
    /// Returns the human-readable label for this status.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Cancelled => "Cancelled",
        }
    }
}

impl std::fmt::Display for HistoryStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// One entry of the cancellation history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// The reference of the affected ticket.
    pub reference: Reference,
    /// The user who held the ticket.
    pub user: UserName,
    /// What happened to the ticket.
    pub status: HistoryStatus,
}

impl HistoryEntry {
    /// Creates a new `HistoryEntry`.
    ///
    /// # Arguments
    ///
    /// * `reference` - The reference of the affected ticket
    /// * `user` - The user who held the ticket
    /// * `status` - What happened to the ticket
    #[must_use]
    pub const fn new(reference: Reference, user: UserName, status: HistoryStatus) -> Self {
        Self {
            reference,
            user,
            status,
        }
    }
}

/// Append-only log of cancelled tickets, in cancellation order.
///
/// The only way to remove entries is [`History::strip_reference`], which
/// exists so an undone cancellation leaves no trace.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct History {
    entries: Vec<HistoryEntry>,
}

impl History {
    /// Creates an empty history.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Appends a cancellation entry.
    pub fn record_cancellation(&mut self, reference: Reference, user: UserName) {
        self.entries.push(HistoryEntry::new(
            reference,
            user,
            HistoryStatus::Cancelled,
        ));
    }

    /// Removes every entry for `reference`, returning how many were removed.
    pub fn strip_reference(&mut self, reference: &Reference) -> usize {
        let before: usize = self.entries.len();
        self.entries.retain(|entry| &entry.reference != reference);
        before - self.entries.len()
    }

    /// Returns the entries in the order they were recorded.
    #[must_use]
    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    /// Returns the number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if nothing has been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
