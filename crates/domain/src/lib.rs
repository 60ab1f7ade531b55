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

mod error;
mod reference;
mod types;
mod validation;

#[cfg(test)]
mod tests;

pub use error::DomainError;
pub use reference::{REFERENCE_PREFIX, Reference, ReferenceStrategy};
pub use types::{Ticket, TicketState, UserName};
pub use validation::{DEFAULT_EXPIRY_WINDOW, validate_capacity, validate_expiry_window};
