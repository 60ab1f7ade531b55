// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Ticket reference codes and the strategies used to number them.
//!
//! References are short, human-readable codes of the form `Ticket0001`.
//! The numeric part is zero-padded to four digits and simply grows wider
//! once it passes 9999.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// The fixed prefix of every generated reference.
pub const REFERENCE_PREFIX: &str = "Ticket";

/// A ticket reference code.
///
/// Any non-blank string is accepted so that lookups with an unknown code
/// report "not found" instead of a format error. Only references created by
/// [`Reference::from_sequence`] are guaranteed to carry a sequence number.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Reference(String);

impl Reference {
    /// Creates a reference from caller input.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::EmptyReference` if the value is empty after trimming.
    pub fn new(value: &str) -> Result<Self, DomainError> {
        let trimmed: &str = value.trim();
        if trimmed.is_empty() {
            return Err(DomainError::EmptyReference);
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Formats the reference for a sequence number, e.g. `7` → `Ticket0007`.
    #[must_use]
    pub fn from_sequence(sequence: usize) -> Self {
        Self(format!("{REFERENCE_PREFIX}{sequence:04}"))
    }

    /// Returns the reference as a string slice.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.0
    }

    /// Returns the sequence number encoded in a generated reference.
    ///
    /// Returns `None` for references that do not follow the `Ticket####` format.
    #[must_use]
    pub fn sequence(&self) -> Option<usize> {
        let digits: &str = self.0.strip_prefix(REFERENCE_PREFIX)?;
        if digits.len() < 4 || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        digits.parse().ok()
    }
}

impl TryFrom<String> for Reference {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(&value)
    }
}

impl From<Reference> for String {
    fn from(reference: Reference) -> Self {
        reference.0
    }
}

impl std::fmt::Display for Reference {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// How the registry picks the number for the next reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ReferenceStrategy {
    /// A counter that only ever grows. References are never reused.
    #[default]
    Monotonic,
    /// Number from the count of live tickets plus one.
    ///
    /// Numbers freed by cancellation are handed out again. If the computed
    /// reference is still held by a live ticket the registry moves on to the
    /// next free number rather than overwrite it.
    LiveCount,
}

impl ReferenceStrategy {
    /// Returns the string representation of the strategy.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Monotonic => "monotonic",
            Self::LiveCount => "live_count",
        }
    }
}

impl FromStr for ReferenceStrategy {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "monotonic" => Ok(Self::Monotonic),
            "live_count" | "live-count" => Ok(Self::LiveCount),
            _ => Err(DomainError::InvalidReferenceStrategy(s.to_string())),
        }
    }
}

impl std::fmt::Display for ReferenceStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
