//! Command context and execution result definitions.

use anyhow::anyhow;

use crate::error::ActionFault;

/// Arguments bound while walking a command tree, in the order they were consumed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Arguments {
    entries: Vec<(String, String)>,
}

impl Arguments {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind `value` under `name`. Re-binding a name keeps its original position.
    pub(crate) fn bind(&mut self, name: &str, value: &str) {
        match self.entries.iter_mut().find(|(key, _)| key == name) {
            Some((_, slot)) => *slot = value.to_string(),
            None => self.entries.push((name.to_string(), value.to_string())),
        }
    }

    /// Get the token bound to `name`.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// Like [`get`](Self::get), failing with a descriptive error when unbound.
    pub fn require(&self, name: &str) -> anyhow::Result<&str> {
        self.get(name)
            .ok_or_else(|| anyhow!("missing argument `{name}`"))
    }

    /// Number of bound arguments.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if nothing was bound.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over `(name, token)` pairs in consumption order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.entries
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_str()))
    }
}

/// Everything an action gets to see.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandContext<S> {
    /// Whoever submitted the input. Opaque to the dispatcher.
    pub source: S,
    /// Arguments bound on the matched path.
    pub args: Arguments,
    /// The original raw input line.
    pub input: String,
}

impl<S> CommandContext<S> {
    pub fn new(source: S, input: impl Into<String>) -> Self {
        Self {
            source,
            args: Arguments::new(),
            input: input.into(),
        }
    }
}

/// Outcome of running one action.
#[derive(Debug)]
pub struct CommandResult {
    error: Option<ActionFault>,
}

impl CommandResult {
    pub fn success() -> Self {
        Self { error: None }
    }

    pub fn failure(fault: ActionFault) -> Self {
        Self { error: Some(fault) }
    }

    pub fn is_ok(&self) -> bool {
        self.error.is_none()
    }

    pub fn error(&self) -> Option<&ActionFault> {
        self.error.as_ref()
    }
}
