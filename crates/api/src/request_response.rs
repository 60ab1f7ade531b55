// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API request and response data transfer objects.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// API request to buy a ticket.
///
/// The user is raw caller input; blank values are rejected at the boundary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PurchaseRequest {
    /// The buyer's name.
    pub user: String,
}

/// API request naming a ticket by reference (cancel, validate).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReferenceRequest {
    /// The ticket reference as typed by the caller.
    pub reference: String,
}

/// Outcome of a purchase attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PurchaseStatus {
    /// A ticket was issued.
    Bought,
    /// The caller joined the waitlist.
    Waitlisted,
}

/// API response for a purchase attempt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PurchaseResponse {
    /// Whether a ticket was bought or the user waitlisted.
    pub status: PurchaseStatus,
    /// The issued reference, if bought.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,
    /// The buyer.
    pub user: String,
    /// 1-based waitlist position, if waitlisted.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub waitlist_position: Option<usize>,
    /// Tickets left after the call.
    pub available: usize,
    /// A human-readable message.
    pub message: String,
}

/// Outcome of a cancellation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CancelStatus {
    /// The ticket was cancelled.
    Cancelled,
}

/// API response for a successful cancellation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CancelResponse {
    /// Always `cancelled`.
    pub status: CancelStatus,
    /// The cancelled reference.
    pub reference: String,
    /// The former holder.
    pub user: String,
    /// Tickets left after the call.
    pub available: usize,
    /// A human-readable message.
    pub message: String,
}

/// Outcome of a validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValidateStatus {
    /// The ticket is now valid.
    Valid,
}

/// API response for a successful validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidateResponse {
    /// Always `valid`.
    pub status: ValidateStatus,
    /// The validated reference.
    pub reference: String,
    /// The holder.
    pub user: String,
    /// A human-readable message.
    pub message: String,
}

/// Outcome of an undo.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UndoStatus {
    /// The most recent action was reversed.
    Undone,
}

/// API response for a successful undo.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UndoResponse {
    /// Always `undone`.
    pub status: UndoStatus,
    /// The kind of action that was reversed (`purchase` or `cancellation`).
    pub action: String,
    /// The affected reference.
    pub reference: String,
    /// Tickets left after the call.
    pub available: usize,
    /// A human-readable detail message.
    pub message: String,
}

/// API response for the pool counters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AvailableResponse {
    /// Tickets that can still be bought.
    pub available: usize,
    /// Total tickets in the pool.
    pub capacity: usize,
    /// Capacity lost to expired tickets.
    pub forfeited: usize,
    /// Rendered text.
    pub text: String,
}

/// API response listing the waitlist.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WaitlistResponse {
    /// Waiting users in arrival order.
    pub users: Vec<String>,
    /// Rendered text.
    pub text: String,
}

/// One cancellation history entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntryInfo {
    /// The cancelled reference.
    pub reference: String,
    /// The former holder.
    pub user: String,
    /// The recorded status.
    pub status: String,
}

/// API response listing the cancellation history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryResponse {
    /// Entries in cancellation order.
    pub entries: Vec<HistoryEntryInfo>,
    /// Rendered text.
    pub text: String,
}

/// One ticket listed under its holder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TicketInfo {
    /// The ticket reference.
    pub reference: String,
    /// Whether the ticket has been validated.
    pub valid: bool,
}

/// API response listing live tickets per user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TicketsByUserResponse {
    /// Tickets keyed by holder.
    pub users: BTreeMap<String, Vec<TicketInfo>>,
    /// Rendered text.
    pub text: String,
}
