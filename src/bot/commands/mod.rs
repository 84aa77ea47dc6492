//! Built-in command implementations.
//!
//! Each command is defined in its own module file and registered by [`register_all`].

pub mod echo;
pub mod help;
pub mod system;

use std::sync::Arc;

use spin::Once;

use crate::bot::{CommandSource, ShutdownSignal};
use crate::config::SharedConfig;
use crate::engine::Engine;
use crate::error::RegistryError;

/// Register every built-in command.
pub fn register_all(
    engine: &mut Engine<CommandSource>,
    shutdown: ShutdownSignal,
    config: SharedConfig,
) -> Result<(), RegistryError> {
    let usages = Arc::new(Once::new());

    engine.register(echo::command())?;
    engine.register(system::exit(shutdown))?;
    engine.register(system::reload(config))?;
    engine.register(help::command(Arc::clone(&usages)))?;

    usages.call_once(|| engine.list_usages());
    Ok(())
}
