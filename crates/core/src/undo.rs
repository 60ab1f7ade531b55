// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use serde::{Deserialize, Serialize};
use ticketbooth_domain::{Reference, UserName};

/// The kind of a reversible action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UndoKind {
    /// A ticket purchase.
    Buy,
    /// A ticket cancellation.
    Cancel,
}

impl UndoKind {
    /// Returns the string representation of the kind.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Buy => "purchase",
            Self::Cancel => "cancellation",
        }
    }
}

impl std::fmt::Display for UndoKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A recorded action that a later undo may reverse.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum UndoAction {
    /// A ticket was bought.
    Buy {
        /// The issued reference.
        reference: Reference,
        /// The buyer.
        user: UserName,
    },
    /// A ticket was cancelled.
    Cancel {
        /// The cancelled reference.
        reference: Reference,
        /// The former holder.
        user: UserName,
    },
}

impl UndoAction {
    /// Returns the kind of this action.
    #[must_use]
    pub const fn kind(&self) -> UndoKind {
        match self {
            Self::Buy { .. } => UndoKind::Buy,
            Self::Cancel { .. } => UndoKind::Cancel,
        }
    }

    /// Returns the reference this action touched.
    #[must_use]
    pub const fn reference(&self) -> &Reference {
        match self {
            Self::Buy { reference, .. } | Self::Cancel { reference, .. } => reference,
        }
    }
}

/// Last-in-first-out log of reversible actions.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UndoLog {
    actions: Vec<UndoAction>,
}

impl UndoLog {
    /// Creates an empty log.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            actions: Vec::new(),
        }
    }

    /// Records an action on top of the log.
    pub fn push(&mut self, action: UndoAction) {
        self.actions.push(action);
    }

    /// Removes and returns the most recent action.
    pub fn pop(&mut self) -> Option<UndoAction> {
        self.actions.pop()
    }

    /// Returns the most recent action without removing it.
    #[must_use]
    pub fn peek(&self) -> Option<&UndoAction> {
        self.actions.last()
    }

    /// Returns the number of recorded actions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.actions.len()
    }

    /// Returns true if there is nothing to undo.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }
}
