// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Test helper functions and fixtures.

use time::{OffsetDateTime, macros::datetime};
use ticketbooth::{ManualClock, RegistryConfig, TicketRegistry};

use crate::{PurchaseRequest, ReferenceRequest, purchase};

pub const START: OffsetDateTime = datetime!(2026-03-01 18:00 UTC);

pub fn create_test_registry(capacity: usize) -> (TicketRegistry<ManualClock>, ManualClock) {
    let config: RegistryConfig = RegistryConfig::new(capacity).unwrap();
    let clock: ManualClock = ManualClock::new(START);
    (TicketRegistry::with_clock(config, clock.clone()), clock)
}

pub fn create_purchase_request(user: &str) -> PurchaseRequest {
    PurchaseRequest {
        user: String::from(user),
    }
}

pub fn create_reference_request(reference: &str) -> ReferenceRequest {
    ReferenceRequest {
        reference: String::from(reference),
    }
}

/// Buys a ticket through the API and returns the issued reference.
pub fn buy(registry: &mut TicketRegistry<ManualClock>, user: &str) -> String {
    purchase(registry, &create_purchase_request(user))
        .unwrap()
        .reference
        .expect("pool should not be empty")
}
