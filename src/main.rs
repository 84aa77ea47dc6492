//! cmdtree console host.

#[macro_use]
extern crate log;

use std::sync::Arc;

use spin::RwLock;

use cmdtree::bot::{self, CommandSource, ShutdownSignal};
use cmdtree::config::{Config, log_level_from_env};
use cmdtree::{Engine, console};

fn main() -> anyhow::Result<()> {
    // The logger goes first so configuration warnings are not lost.
    console::init_logger(log_level_from_env())?;
    let config = Arc::new(RwLock::new(Config::from_env()));
    info!("cmdtree v{} is starting...", env!("CARGO_PKG_VERSION"));

    let shutdown = ShutdownSignal::new();
    let mut engine = Engine::<CommandSource>::new(&config.read());
    bot::commands::register_all(&mut engine, shutdown.clone(), Arc::clone(&config))?;
    engine.on_executed(bot::log_executed);

    let engine = Arc::new(engine);
    let ticker = engine.start()?;

    let session = console::run_tty(&engine, &config, &shutdown);

    info!("Shutting down...");
    ticker.shutdown();
    session
}
