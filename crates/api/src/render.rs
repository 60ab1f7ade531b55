// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Plain-text views of registry state for display in a front end.

use std::collections::BTreeMap;
use std::fmt::Write;
use ticketbooth::TicketSummary;
use ticketbooth_audit::History;
use ticketbooth_domain::UserName;

/// Renders the pool counter line.
#[must_use]
pub fn render_available(available: usize) -> String {
    format!("Tickets available: {available}")
}

/// Renders one `User: <name>` line per waiting user.
#[must_use]
pub fn render_waitlist(waitlist: &[UserName]) -> String {
    if waitlist.is_empty() {
        return String::from("No users on the waitlist");
    }
    waitlist
        .iter()
        .map(|user| format!("User: {user}"))
        .collect::<Vec<String>>()
        .join("\n")
}

/// Renders one line per cancellation.
#[must_use]
pub fn render_history(history: &History) -> String {
    if history.is_empty() {
        return String::from("No cancelled tickets.");
    }
    history
        .entries()
        .iter()
        .map(|entry| {
            format!(
                "{} - User: {} - Status: {}",
                entry.reference, entry.user, entry.status
            )
        })
        .collect::<Vec<String>>()
        .join("\n")
}

/// Renders each holder followed by an indented line per ticket.
#[must_use]
pub fn render_tickets_by_user(grouped: &BTreeMap<UserName, Vec<TicketSummary>>) -> String {
    if grouped.is_empty() {
        return String::from("No users hold tickets.");
    }
    let mut out: String = String::new();
    for (user, tickets) in grouped {
        let _ = writeln!(out, "{user}:");
        for ticket in tickets {
            let _ = writeln!(out, "  - {}: {}", ticket.reference, ticket.state.label());
        }
    }
    out
}
