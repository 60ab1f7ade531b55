// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::clock::{Clock, SystemClock};
use crate::config::RegistryConfig;
use crate::error::{ConflictReason, RegistryError};
use crate::outcome::{Cancellation, Purchase, RegistrySnapshot, TicketSummary, Undone, Validation};
use crate::undo::{UndoAction, UndoKind, UndoLog};
use std::collections::{BTreeMap, HashMap};
use time::{Duration, OffsetDateTime};
use ticketbooth_audit::History;
use ticketbooth_domain::{Reference, ReferenceStrategy, Ticket, UserName};
use tracing::{debug, info, warn};

/// Owns every piece of ticket state: the pool, live tickets, the waitlist,
/// the cancellation history and the undo log.
///
/// All operations are synchronous and take `&mut self`; callers sharing a
/// registry must serialise access themselves.
#[derive(Debug, Clone)]
pub struct TicketRegistry<C: Clock = SystemClock> {
    config: RegistryConfig,
    clock: C,
    available: usize,
    forfeited: usize,
    last_sequence: usize,
    tickets: HashMap<Reference, Ticket>,
    waitlist: Vec<UserName>,
    history: History,
    undo_log: UndoLog,
}

impl TicketRegistry<SystemClock> {
    /// Creates a registry backed by the system clock.
    #[must_use]
    pub fn new(config: RegistryConfig) -> Self {
        Self::with_clock(config, SystemClock)
    }
}

impl<C: Clock> TicketRegistry<C> {
    /// Creates a registry with a full pool and empty logs.
    #[must_use]
    pub fn with_clock(config: RegistryConfig, clock: C) -> Self {
        Self {
            available: config.capacity(),
            config,
            clock,
            forfeited: 0,
            last_sequence: 0,
            tickets: HashMap::new(),
            waitlist: Vec::new(),
            history: History::new(),
            undo_log: UndoLog::new(),
        }
    }

    /// Buys a ticket for `user`, or puts them on the waitlist when the pool
    /// is empty.
    ///
    /// Waitlisting is idempotent: a user already waiting keeps their place.
    pub fn purchase(&mut self, user: UserName) -> Purchase {
        if self.available == 0 {
            let position: usize = match self.waitlist.iter().position(|w| w == &user) {
                Some(index) => index + 1,
                None => {
                    self.waitlist.push(user.clone());
                    self.waitlist.len()
                }
            };
            info!(user = %user, position, "Pool empty, user waitlisted");
            return Purchase::Waitlisted { user, position };
        }

        let reference: Reference = self.next_reference();
        let ticket: Ticket = Ticket::issue(reference.clone(), user.clone(), self.clock.now());
        self.tickets.insert(reference.clone(), ticket);
        self.available -= 1;
        self.undo_log.push(UndoAction::Buy {
            reference: reference.clone(),
            user: user.clone(),
        });

        info!(
            reference = %reference,
            user = %user,
            available = self.available,
            "Ticket purchased"
        );
        Purchase::Bought { reference, user }
    }

    /// Cancels a live ticket and returns its capacity to the pool.
    ///
    /// # Errors
    ///
    /// Returns `RegistryError::NotFound` if no live ticket has `reference`.
    /// Nothing changes in that case.
    pub fn cancel(&mut self, reference: &Reference) -> Result<Cancellation, RegistryError> {
        let Some(ticket) = self.tickets.remove(reference) else {
            debug!(reference = %reference, "Cancel of unknown reference");
            return Err(RegistryError::NotFound {
                reference: reference.clone(),
            });
        };

        self.available += 1;
        self.history
            .record_cancellation(ticket.reference.clone(), ticket.user.clone());
        self.undo_log.push(UndoAction::Cancel {
            reference: ticket.reference.clone(),
            user: ticket.user.clone(),
        });

        info!(
            reference = %ticket.reference,
            user = %ticket.user,
            available = self.available,
            "Ticket cancelled"
        );
        Ok(Cancellation {
            was_valid: ticket.is_valid(),
            reference: ticket.reference,
            user: ticket.user,
        })
    }

    /// Validates a pending ticket that is still inside the expiry window.
    ///
    /// # Errors
    ///
    /// - `NotFound` if no live ticket has `reference`.
    /// - `AlreadyValid` if the ticket was validated before.
    /// - `Expired` if the ticket is at least one expiry window old. The
    ///   ticket is removed and its capacity is forfeited, not returned.
    pub fn validate(&mut self, reference: &Reference) -> Result<Validation, RegistryError> {
        let now: OffsetDateTime = self.clock.now();
        let window: Duration = self.config.expiry_window();

        let Some(ticket) = self.tickets.get_mut(reference) else {
            debug!(reference = %reference, "Validate of unknown reference");
            return Err(RegistryError::NotFound {
                reference: reference.clone(),
            });
        };

        if ticket.is_valid() {
            return Err(RegistryError::AlreadyValid {
                reference: reference.clone(),
            });
        }

        if ticket.is_expired(now, window) {
            let age_seconds: i64 = ticket.age(now).whole_seconds();
            self.tickets.remove(reference);
            self.forfeited += 1;
            warn!(
                reference = %reference,
                age_seconds,
                forfeited = self.forfeited,
                "Ticket expired before validation"
            );
            return Err(RegistryError::Expired {
                reference: reference.clone(),
                age_seconds,
            });
        }

        ticket.mark_valid();
        info!(reference = %reference, user = %ticket.user, "Ticket validated");
        Ok(Validation {
            reference: reference.clone(),
            user: ticket.user.clone(),
        })
    }

    /// Reverses the most recent purchase or cancellation.
    ///
    /// The entry is popped before it is evaluated, so a conflicting entry is
    /// discarded and the next call looks at the one below it.
    ///
    /// # Errors
    ///
    /// - `NoAction` if the undo log is empty.
    /// - `Conflict` if the state has moved on and the action cannot be
    ///   reversed cleanly.
    pub fn undo_last_action(&mut self) -> Result<Undone, RegistryError> {
        let Some(action) = self.undo_log.pop() else {
            return Err(RegistryError::NoAction);
        };

        let result: Result<Undone, RegistryError> = match action {
            UndoAction::Buy { reference, user } => self.revert_purchase(reference, user),
            UndoAction::Cancel { reference, user } => self.revert_cancellation(reference, user),
        };

        match &result {
            Ok(undone) => info!(
                reference = %undone.reference(),
                available = self.available,
                "Action undone"
            ),
            Err(err) => warn!(error = %err, "Undo refused"),
        }
        result
    }

    fn revert_purchase(
        &mut self,
        reference: Reference,
        user: UserName,
    ) -> Result<Undone, RegistryError> {
        let still_held: bool = self
            .tickets
            .get(&reference)
            .is_some_and(|ticket| ticket.user == user && !ticket.is_valid());
        if !still_held {
            return Err(RegistryError::Conflict {
                reference,
                kind: UndoKind::Buy,
                reason: ConflictReason::TicketChanged,
            });
        }

        self.tickets.remove(&reference);
        self.available += 1;
        Ok(Undone::PurchaseReverted { reference, user })
    }

    fn revert_cancellation(
        &mut self,
        reference: Reference,
        user: UserName,
    ) -> Result<Undone, RegistryError> {
        if self.tickets.contains_key(&reference) {
            return Err(RegistryError::Conflict {
                reference,
                kind: UndoKind::Cancel,
                reason: ConflictReason::ReferenceOccupied,
            });
        }
        if self.available == 0 {
            return Err(RegistryError::Conflict {
                reference,
                kind: UndoKind::Cancel,
                reason: ConflictReason::PoolExhausted,
            });
        }

        let ticket: Ticket = Ticket::issue(reference.clone(), user.clone(), self.clock.now());
        self.tickets.insert(reference.clone(), ticket);
        self.available -= 1;
        let stripped: usize = self.history.strip_reference(&reference);
        debug!(reference = %reference, stripped, "History entries removed");
        Ok(Undone::CancellationReverted { reference, user })
    }

    fn next_reference(&mut self) -> Reference {
        match self.config.reference_strategy() {
            ReferenceStrategy::Monotonic => {
                self.last_sequence += 1;
                Reference::from_sequence(self.last_sequence)
            }
            ReferenceStrategy::LiveCount => {
                let mut sequence: usize = self.tickets.len() + 1;
                loop {
                    let candidate: Reference = Reference::from_sequence(sequence);
                    if !self.tickets.contains_key(&candidate) {
                        return candidate;
                    }
                    sequence += 1;
                }
            }
        }
    }

    /// Total tickets in the pool.
    #[must_use]
    pub const fn capacity(&self) -> usize {
        self.config.capacity()
    }

    /// Tickets that can still be bought.
    #[must_use]
    pub const fn available(&self) -> usize {
        self.available
    }

    /// Capacity lost to tickets that expired before validation.
    #[must_use]
    pub const fn forfeited(&self) -> usize {
        self.forfeited
    }

    /// The registry configuration.
    #[must_use]
    pub const fn config(&self) -> &RegistryConfig {
        &self.config
    }

    /// Users waiting for a ticket, in arrival order.
    #[must_use]
    pub fn waitlist(&self) -> &[UserName] {
        &self.waitlist
    }

    /// The cancellation history.
    #[must_use]
    pub const fn history(&self) -> &History {
        &self.history
    }

    /// Looks up a live ticket.
    #[must_use]
    pub fn ticket(&self, reference: &Reference) -> Option<&Ticket> {
        self.tickets.get(reference)
    }

    /// Number of live tickets.
    #[must_use]
    pub fn live_tickets(&self) -> usize {
        self.tickets.len()
    }

    /// Number of actions that can still be undone.
    #[must_use]
    pub fn undo_depth(&self) -> usize {
        self.undo_log.len()
    }

    /// The action the next undo would pop.
    #[must_use]
    pub fn pending_undo(&self) -> Option<&UndoAction> {
        self.undo_log.peek()
    }

    /// Live tickets grouped by holder.
    ///
    /// Users are ordered by name and each user's tickets by reference.
    #[must_use]
    pub fn tickets_by_user(&self) -> BTreeMap<UserName, Vec<TicketSummary>> {
        let mut grouped: BTreeMap<UserName, Vec<TicketSummary>> = BTreeMap::new();
        for ticket in self.tickets.values() {
            grouped
                .entry(ticket.user.clone())
                .or_default()
                .push(TicketSummary {
                    reference: ticket.reference.clone(),
                    state: ticket.state,
                });
        }
        for tickets in grouped.values_mut() {
            tickets.sort_by(|a, b| a.reference.cmp(&b.reference));
        }
        grouped
    }

    /// Current counters.
    #[must_use]
    pub fn snapshot(&self) -> RegistrySnapshot {
        RegistrySnapshot {
            capacity: self.capacity(),
            available: self.available,
            live: self.tickets.len(),
            forfeited: self.forfeited,
            waitlisted: self.waitlist.len(),
            history_len: self.history.len(),
            undo_depth: self.undo_log.len(),
        }
    }
}
