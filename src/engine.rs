//! The dispatch engine: registration, submission and execution in one handle.
//!
//! An [`Engine`] is built mutably at startup (commands, hooks) and then
//! shared as `Arc<Engine<S>>`. From then on only `&self` methods exist:
//! parsing reads the frozen registry and the queue is the single mutable
//! structure.

use std::sync::Arc;
use std::time::Duration;

use crate::command::{
    Command, CommandContext, CommandResult, CommandUsage, Dispatcher, NodeBuilder, ParseResult,
};
use crate::config::Config;
use crate::error::{ParseError, RegistryError};
use crate::task::{ExecutionQueue, Tick, Ticker};

/// Receipt for a queued command. It has not run yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Accepted {
    pub command_name: String,
    /// Zero-based position in the queue at the time of submission.
    pub position: usize,
}

pub struct Engine<S> {
    dispatcher: Dispatcher<S>,
    queue: ExecutionQueue<S>,
    tick_interval: Duration,
}

impl<S: Send + Sync + 'static> Engine<S> {
    pub fn new(config: &Config) -> Self {
        Self {
            dispatcher: Dispatcher::new(),
            queue: ExecutionQueue::new(),
            tick_interval: config.tick_interval,
        }
    }

    /// Register a command under `name` and `aliases`.
    pub fn register_command<I, A>(
        &mut self,
        name: &str,
        aliases: I,
        root: NodeBuilder<S>,
    ) -> Result<(), RegistryError>
    where
        I: IntoIterator<Item = A>,
        A: Into<String>,
    {
        self.register(Command::new(name, root).with_aliases(aliases))
    }

    pub fn register(&mut self, command: Command<S>) -> Result<(), RegistryError> {
        self.dispatcher.register(command)
    }

    /// Observe every executed command.
    pub fn on_executed<F>(&mut self, hook: F)
    where
        F: Fn(&str, &CommandContext<S>, &CommandResult) + Send + Sync + 'static,
    {
        self.queue.on_executed(hook);
    }

    /// Resolve `input` without queueing it.
    pub fn parse(&self, input: &str, source: S) -> Result<ParseResult<S>, ParseError> {
        self.dispatcher.parse(input, source)
    }

    /// Parse `input` and queue it for execution.
    pub fn submit(&self, input: &str, source: S) -> Result<Accepted, ParseError> {
        let result = self.dispatcher.parse(input, source)?;
        let command_name = result.command_name().to_string();
        let position = self.queue.push(result);
        trace!("Queued '{}' at position {}", command_name, position);
        Ok(Accepted {
            command_name,
            position,
        })
    }

    pub fn list_usages(&self) -> Vec<CommandUsage> {
        self.dispatcher.usages()
    }

    pub fn dispatcher(&self) -> &Dispatcher<S> {
        &self.dispatcher
    }

    /// Run at most one queued command.
    pub fn tick(&self) -> Option<CommandResult> {
        self.queue.tick()
    }

    pub fn pending(&self) -> usize {
        self.queue.pending()
    }

    /// Block until every submitted command has run.
    pub fn wait_idle(&self) {
        self.queue.wait_idle(self.tick_interval);
    }

    /// Start the ticker thread draining this engine's queue.
    pub fn start(self: &Arc<Self>) -> std::io::Result<Ticker> {
        Ticker::spawn(Arc::clone(self) as Arc<dyn Tick>, self.tick_interval)
    }
}

impl<S: Send + Sync + 'static> Tick for Engine<S> {
    fn tick(&self) {
        self.queue.tick();
    }

    fn drain(&self) -> usize {
        self.queue.drain()
    }
}
