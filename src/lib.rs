//! cmdtree - a textual command dispatch engine.
//!
//! Commands are trees of literal and argument nodes registered under a
//! name and aliases. Input lines are parsed synchronously into bound
//! [`ParseResult`]s, queued, and executed one per tick by a single
//! consumer so actions never overlap.

#[macro_use]
extern crate log;

pub mod bot;
pub mod command;
pub mod config;
pub mod console;
pub mod engine;
pub mod error;
pub mod task;

pub use command::{
    Arguments, Command, CommandContext, CommandResult, CommandUsage, Dispatcher, Node,
    NodeBuilder, NodeKind, ParseResult,
};
pub use config::Config;
pub use engine::{Accepted, Engine};
pub use error::{ActionFault, ActionResult, ParseError, RegistryError};
pub use task::{ExecutionQueue, Ticker};
