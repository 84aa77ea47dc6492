//! Command registry - name and alias lookup.

use std::collections::HashMap;
use std::sync::Arc;

use crate::command::node::{Node, NodeBuilder};
use crate::error::RegistryError;

/// A named command owning its grammar tree.
pub struct Command<S> {
    name: String,
    aliases: Vec<String>,
    root: Node<S>,
}

impl<S> Command<S> {
    /// Create a command, freezing `root`.
    pub fn new(name: impl Into<String>, root: NodeBuilder<S>) -> Self {
        Self {
            name: name.into(),
            aliases: Vec::new(),
            root: root.build(),
        }
    }

    /// Alternative names for this command.
    pub fn with_aliases<I, A>(mut self, aliases: I) -> Self
    where
        I: IntoIterator<Item = A>,
        A: Into<String>,
    {
        self.aliases.extend(aliases.into_iter().map(Into::into));
        self
    }

    /// Primary command name.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn aliases(&self) -> &[String] {
        &self.aliases
    }

    pub fn root(&self) -> &Node<S> {
        &self.root
    }

    /// Usage lines for every executable node, starting with the command name.
    pub fn usages(&self) -> Vec<String> {
        self.root.usages(&self.name)
    }

    fn keys(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.name.as_str()).chain(self.aliases.iter().map(String::as_str))
    }
}

/// Maps every name and alias to its command.
///
/// Keys are case-sensitive and unique across the whole registry.
pub struct Registry<S> {
    commands: Vec<Arc<Command<S>>>,
    index: HashMap<String, usize>,
}

impl<S> Registry<S> {
    pub fn new() -> Self {
        Self {
            commands: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// Register a command under its name and all its aliases.
    ///
    /// Every key is checked before anything is inserted, so a rejected
    /// command leaves the registry as it was.
    pub fn register(&mut self, command: Command<S>) -> Result<(), RegistryError> {
        let mut seen: Vec<&str> = Vec::new();
        for key in command.keys() {
            if self.index.contains_key(key) || seen.contains(&key) {
                return Err(RegistryError::DuplicateName(key.to_string()));
            }
            seen.push(key);
        }

        let slot = self.commands.len();
        for key in command.keys() {
            self.index.insert(key.to_string(), slot);
        }
        debug!(
            "Registered command '{}' (aliases: {:?})",
            command.name, command.aliases
        );
        self.commands.push(Arc::new(command));
        Ok(())
    }

    /// Find a command by name or alias.
    pub fn lookup(&self, token: &str) -> Option<&Arc<Command<S>>> {
        self.index.get(token).map(|&slot| &self.commands[slot])
    }

    /// All registered commands, in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &Arc<Command<S>>> {
        self.commands.iter()
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

impl<S> Default for Registry<S> {
    fn default() -> Self {
        Self::new()
    }
}
