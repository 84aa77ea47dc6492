//! Console host glue around the engine.
//!
//! - `source.rs` - [`CommandSource`], the tagged origin of a command
//! - `chat.rs` - prefix handling for chat messages
//! - `commands/` - built-in commands (`echo`, `exit`, `reload`, `help`)
//!
//! The engine itself never looks at the source; only actions here do.

pub mod chat;
pub mod commands;
pub mod source;

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

pub use source::{ChatAuthor, CommandSource};

use crate::command::{CommandContext, CommandResult};

/// Set by `exit`, polled by the console loop.
#[derive(Debug, Clone, Default)]
pub struct ShutdownSignal(Arc<AtomicBool>);

impl ShutdownSignal {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn request(&self) {
        self.0.store(true, Ordering::Release);
    }

    pub fn is_requested(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }
}

/// Hook logging every executed command with its source.
pub fn log_executed(name: &str, ctx: &CommandContext<CommandSource>, result: &CommandResult) {
    if result.is_ok() {
        info!("{} issued a command: {}", ctx.source, name);
    } else {
        warn!("{} issued a command: {} (failed)", ctx.source, name);
    }
}
