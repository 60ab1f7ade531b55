// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::CoreError;
use time::Duration;
use ticketbooth_domain::{
    DEFAULT_EXPIRY_WINDOW, ReferenceStrategy, validate_capacity, validate_expiry_window,
};

/// Settings fixed for the lifetime of a registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegistryConfig {
    capacity: usize,
    expiry_window: Duration,
    reference_strategy: ReferenceStrategy,
}

impl RegistryConfig {
    /// Creates a configuration with the default expiry window and
    /// reference strategy.
    ///
    /// # Errors
    ///
    /// Returns an error if `capacity` is zero.
    pub fn new(capacity: usize) -> Result<Self, CoreError> {
        validate_capacity(capacity)?;
        Ok(Self {
            capacity,
            expiry_window: DEFAULT_EXPIRY_WINDOW,
            reference_strategy: ReferenceStrategy::default(),
        })
    }

    /// Replaces the expiry window.
    ///
    /// # Errors
    ///
    /// Returns an error if the window is not strictly positive.
    pub fn with_expiry_window(mut self, window: Duration) -> Result<Self, CoreError> {
        validate_expiry_window(window)?;
        self.expiry_window = window;
        Ok(self)
    }

    /// Replaces the reference strategy.
    #[must_use]
    pub const fn with_reference_strategy(mut self, strategy: ReferenceStrategy) -> Self {
        self.reference_strategy = strategy;
        self
    }

    /// Total number of tickets in the pool.
    #[must_use]
    pub const fn capacity(&self) -> usize {
        self.capacity
    }

    /// How long a pending ticket can still be validated.
    #[must_use]
    pub const fn expiry_window(&self) -> Duration {
        self.expiry_window
    }

    /// How references are numbered.
    #[must_use]
    pub const fn reference_strategy(&self) -> ReferenceStrategy {
        self.reference_strategy
    }
}
