//! System commands - stopping the host and reloading its configuration.

use anyhow::ensure;

use crate::bot::{CommandSource, ShutdownSignal};
use crate::command::{Command, NodeBuilder};
use crate::config::{Config, SharedConfig};

/// `exit`: ask the host to stop. Console only.
pub fn exit(shutdown: ShutdownSignal) -> Command<CommandSource> {
    Command::new(
        "exit",
        NodeBuilder::<CommandSource>::root().executes(move |c| {
            ensure!(c.source.is_console(), "Not permitted");
            info!("Stopping...");
            shutdown.request();
            Ok(())
        }),
    )
    .with_aliases(["quit", "stop"])
}

/// `reload`: re-read the environment into the shared config. Console only.
///
/// The new log level applies at once; the tick interval is fixed when the
/// engine is built.
pub fn reload(config: SharedConfig) -> Command<CommandSource> {
    Command::new(
        "reload",
        NodeBuilder::<CommandSource>::root().executes(move |c| {
            ensure!(c.source.is_console(), "Not permitted");
            let fresh = Config::from_env();
            log::set_max_level(fresh.log_level);
            *config.write() = fresh;
            info!("Configuration reloaded!");
            Ok(())
        }),
    )
}
