// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{ManualClock, RegistryConfig, TicketRegistry};
use time::{OffsetDateTime, macros::datetime};
use ticketbooth_domain::{Reference, ReferenceStrategy, UserName};

pub const START: OffsetDateTime = datetime!(2026-03-01 18:00 UTC);

pub fn create_test_registry(capacity: usize) -> (TicketRegistry<ManualClock>, ManualClock) {
    let config: RegistryConfig = RegistryConfig::new(capacity).unwrap();
    create_test_registry_with(config)
}

pub fn create_live_count_registry(capacity: usize) -> (TicketRegistry<ManualClock>, ManualClock) {
    let config: RegistryConfig = RegistryConfig::new(capacity)
        .unwrap()
        .with_reference_strategy(ReferenceStrategy::LiveCount);
    create_test_registry_with(config)
}

pub fn create_test_registry_with(
    config: RegistryConfig,
) -> (TicketRegistry<ManualClock>, ManualClock) {
    let clock: ManualClock = ManualClock::new(START);
    (TicketRegistry::with_clock(config, clock.clone()), clock)
}

pub fn user(name: &str) -> UserName {
    UserName::new(name).unwrap()
}

pub fn reference(sequence: usize) -> Reference {
    Reference::from_sequence(sequence)
}

/// Buys a ticket and returns its reference, failing the test if the pool was empty.
pub fn buy(registry: &mut TicketRegistry<ManualClock>, name: &str) -> Reference {
    registry
        .purchase(user(name))
        .reference()
        .cloned()
        .expect("pool should not be empty")
}
