// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::clock::Clock;
use crate::command::{Command, Effect};
use crate::error::RegistryError;
use crate::registry::TicketRegistry;
use tracing::debug;

/// Applies a command to the registry.
///
/// # Arguments
///
/// * `registry` - The registry to mutate
/// * `command` - The command to apply
///
/// # Returns
///
/// * `Ok(Effect)` describing what changed
/// * `Err(RegistryError)` if the operation was refused
///
/// # Errors
///
/// Returns whatever error the underlying registry operation returns.
/// Purchases never fail.
pub fn apply<C: Clock>(
    registry: &mut TicketRegistry<C>,
    command: Command,
) -> Result<Effect, RegistryError> {
    debug!(command = command.name(), "Applying command");
    match command {
        Command::Purchase { user } => Ok(Effect::Purchased(registry.purchase(user))),
        Command::Cancel { reference } => registry.cancel(&reference).map(Effect::Cancelled),
        Command::Validate { reference } => registry.validate(&reference).map(Effect::Validated),
        Command::Undo => registry.undo_last_action().map(Effect::Undone),
    }
}
