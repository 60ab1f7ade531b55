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
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod apply;
mod clock;
mod command;
mod config;
mod error;
mod outcome;
mod registry;
mod undo;

#[cfg(test)]
mod tests;

// Re-export public types and functions
pub use apply::apply;
pub use clock::{Clock, ManualClock, SystemClock};
pub use command::{Command, Effect};
pub use config::RegistryConfig;
pub use error::{ConflictReason, CoreError, RegistryError};
pub use outcome::{Cancellation, Purchase, RegistrySnapshot, TicketSummary, Undone, Validation};
pub use registry::TicketRegistry;
pub use undo::{UndoAction, UndoKind, UndoLog};
