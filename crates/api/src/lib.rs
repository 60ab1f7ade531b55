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
    clippy::unwrap_used,
    clippy::expect_used
)]

//! The boundary between raw caller input and the ticket registry.
//!
//! Every operation here validates its input before the registry is touched,
//! runs the registry call through the core `apply` entry point, and turns
//! the outcome into a serializable response carrying a status discriminant
//! and a message suitable for display.

mod error;
mod render;
mod request_response;

#[cfg(test)]
mod tests;

pub use error::{ApiError, translate_core_error, translate_domain_error, translate_registry_error};
pub use render::{render_available, render_history, render_tickets_by_user, render_waitlist};
pub use request_response::{
    AvailableResponse, CancelResponse, CancelStatus, HistoryEntryInfo, HistoryResponse,
    PurchaseRequest, PurchaseResponse, PurchaseStatus, ReferenceRequest, TicketInfo,
    TicketsByUserResponse, UndoResponse, UndoStatus, ValidateResponse, ValidateStatus,
    WaitlistResponse,
};

use std::collections::BTreeMap;
use ticketbooth::{
    Cancellation, Clock, Command, Effect, Purchase, TicketRegistry, TicketSummary, Undone,
    Validation, apply,
};
use ticketbooth_domain::{Reference, UserName};
use tracing::debug;

fn parse_user(raw: &str) -> Result<UserName, ApiError> {
    UserName::new(raw).map_err(translate_domain_error)
}

fn parse_reference(raw: &str) -> Result<Reference, ApiError> {
    Reference::new(raw).map_err(translate_domain_error)
}

/// Runs one command and translates a refusal into an API error.
fn run<C: Clock>(registry: &mut TicketRegistry<C>, command: Command) -> Result<Effect, ApiError> {
    apply(registry, command).map_err(|err| {
        debug!(error = %err, "Registry refused command");
        translate_registry_error(err)
    })
}

/// Builds the error returned when `apply` answers with the wrong effect.
///
/// `apply` maps each command to exactly one effect, so this only fires if
/// the two enums drift apart.
fn unexpected_effect(command: &str) -> ApiError {
    ApiError::DomainRuleViolation {
        rule: String::from("internal"),
        message: format!("Unexpected registry result for {command}"),
    }
}

/// Buys a ticket, or joins the waitlist when the pool is empty.
///
/// # Errors
///
/// Returns `ApiError::EmptyInput` if the user name is blank. The registry is
/// not touched in that case.
pub fn purchase<C: Clock>(
    registry: &mut TicketRegistry<C>,
    request: &PurchaseRequest,
) -> Result<PurchaseResponse, ApiError> {
    let user: UserName = parse_user(&request.user)?;

    let Effect::Purchased(outcome) = run(registry, Command::Purchase { user })? else {
        return Err(unexpected_effect("purchase"));
    };

    let available: usize = registry.available();
    let response: PurchaseResponse = match outcome {
        Purchase::Bought { reference, user } => PurchaseResponse {
            status: PurchaseStatus::Bought,
            message: format!("Ticket purchased. Your reference number is: {reference}"),
            reference: Some(reference.value().to_string()),
            user: user.value().to_string(),
            waitlist_position: None,
            available,
        },
        Purchase::Waitlisted { user, position } => PurchaseResponse {
            status: PurchaseStatus::Waitlisted,
            reference: None,
            user: user.value().to_string(),
            waitlist_position: Some(position),
            available,
            message: String::from("No tickets available. You have been added to the waitlist"),
        },
    };
    Ok(response)
}

/// Cancels a live ticket.
///
/// # Errors
///
/// - `EmptyInput` if the reference is blank.
/// - `ResourceNotFound` if no live ticket has the reference.
pub fn cancel<C: Clock>(
    registry: &mut TicketRegistry<C>,
    request: &ReferenceRequest,
) -> Result<CancelResponse, ApiError> {
    let reference: Reference = parse_reference(&request.reference)?;

    let Effect::Cancelled(Cancellation {
        reference, user, ..
    }) = run(registry, Command::Cancel { reference })?
    else {
        return Err(unexpected_effect("cancel"));
    };

    Ok(CancelResponse {
        status: CancelStatus::Cancelled,
        message: format!("Ticket {reference} cancelled."),
        reference: reference.value().to_string(),
        user: user.value().to_string(),
        available: registry.available(),
    })
}

/// Validates a pending ticket.
///
/// # Errors
///
/// - `EmptyInput` if the reference is blank.
/// - `ResourceNotFound` if no live ticket has the reference.
/// - `DomainRuleViolation` with rule `already_valid` or `expired`.
pub fn validate<C: Clock>(
    registry: &mut TicketRegistry<C>,
    request: &ReferenceRequest,
) -> Result<ValidateResponse, ApiError> {
    let reference: Reference = parse_reference(&request.reference)?;

    let Effect::Validated(Validation { reference, user }) =
        run(registry, Command::Validate { reference })?
    else {
        return Err(unexpected_effect("validate"));
    };

    Ok(ValidateResponse {
        status: ValidateStatus::Valid,
        reference: reference.value().to_string(),
        user: user.value().to_string(),
        message: String::from("Ticket validated successfully"),
    })
}

/// Reverses the most recent purchase or cancellation.
///
/// # Errors
///
/// Returns `DomainRuleViolation` with rule `no_action` when there is nothing
/// to undo, or `conflict` when the action can no longer be reversed.
pub fn undo<C: Clock>(registry: &mut TicketRegistry<C>) -> Result<UndoResponse, ApiError> {
    let Effect::Undone(undone) = run(registry, Command::Undo)? else {
        return Err(unexpected_effect("undo"));
    };

    let (action, message): (&str, String) = match &undone {
        Undone::PurchaseReverted { reference, .. } => (
            "purchase",
            format!("Action undone: purchase of {reference} reverted."),
        ),
        Undone::CancellationReverted { reference, .. } => (
            "cancellation",
            format!("Action undone: ticket {reference} is in use again."),
        ),
    };

    Ok(UndoResponse {
        status: UndoStatus::Undone,
        action: action.to_string(),
        reference: undone.reference().value().to_string(),
        available: registry.available(),
        message,
    })
}

/// Reports the pool counters.
#[must_use]
pub fn available<C: Clock>(registry: &TicketRegistry<C>) -> AvailableResponse {
    AvailableResponse {
        available: registry.available(),
        capacity: registry.capacity(),
        forfeited: registry.forfeited(),
        text: render_available(registry.available()),
    }
}

/// Lists waiting users in arrival order.
#[must_use]
pub fn waitlist<C: Clock>(registry: &TicketRegistry<C>) -> WaitlistResponse {
    let users: Vec<String> = registry
        .waitlist()
        .iter()
        .map(|user| user.value().to_string())
        .collect();

    WaitlistResponse {
        users,
        text: render_waitlist(registry.waitlist()),
    }
}

/// Lists cancellations in the order they happened.
#[must_use]
pub fn history<C: Clock>(registry: &TicketRegistry<C>) -> HistoryResponse {
    let entries: Vec<HistoryEntryInfo> = registry
        .history()
        .entries()
        .iter()
        .map(|entry| HistoryEntryInfo {
            reference: entry.reference.value().to_string(),
            user: entry.user.value().to_string(),
            status: entry.status.label().to_string(),
        })
        .collect();

    HistoryResponse {
        entries,
        text: render_history(registry.history()),
    }
}

/// Lists live tickets grouped by holder.
#[must_use]
pub fn tickets_by_user<C: Clock>(registry: &TicketRegistry<C>) -> TicketsByUserResponse {
    let grouped: BTreeMap<UserName, Vec<TicketSummary>> = registry.tickets_by_user();
    let users: BTreeMap<String, Vec<TicketInfo>> = grouped
        .iter()
        .map(|(user, tickets)| {
            let infos: Vec<TicketInfo> = tickets
                .iter()
                .map(|ticket| TicketInfo {
                    reference: ticket.reference.value().to_string(),
                    valid: ticket.valid(),
                })
                .collect();
            (user.value().to_string(), infos)
        })
        .collect();

    TicketsByUserResponse {
        users,
        text: render_tickets_by_user(&grouped),
    }
}
