//! Resolves raw input lines against the registered command trees.
//!
//! Parsing is pure: it only reads the registry and the frozen trees, never
//! runs an action, and may be called from any number of threads at once.
//! A successful parse yields a [`ParseResult`] that owns a handle to its
//! command, so it can be queued and executed later.

use std::fmt;
use std::sync::Arc;

use crate::command::context::CommandContext;
use crate::command::node::{Node, NodeKind};
use crate::command::registry::{Command, Registry};
use crate::error::{ParseError, RegistryError};

/// A resolved input line, ready to execute.
pub struct ParseResult<S> {
    command: Arc<Command<S>>,
    label: String,
    /// Child indices from the root to the landing node.
    path: Vec<usize>,
    context: CommandContext<S>,
}

impl<S> ParseResult<S> {
    /// Canonical name of the matched command.
    pub fn command_name(&self) -> &str {
        self.command.name()
    }

    /// The name or alias as typed.
    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn command(&self) -> &Arc<Command<S>> {
        &self.command
    }

    /// The node the input landed on. It always carries an action.
    pub fn node(&self) -> &Node<S> {
        // The path was recorded while walking this very tree.
        self.command
            .root()
            .descend(&self.path)
            .unwrap_or_else(|| self.command.root())
    }

    pub fn context(&self) -> &CommandContext<S> {
        &self.context
    }
}

impl<S: PartialEq> PartialEq for ParseResult<S> {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.command, &other.command)
            && self.label == other.label
            && self.path == other.path
            && self.context == other.context
    }
}

impl<S: fmt::Debug> fmt::Debug for ParseResult<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ParseResult")
            .field("command", &self.command.name())
            .field("label", &self.label)
            .field("node", self.node().kind())
            .field("context", &self.context)
            .finish()
    }
}

/// Usage lines of one command, for help surfaces.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandUsage {
    pub command_name: String,
    pub usage_lines: Vec<String>,
}

/// Owns the registry and parses input against it.
pub struct Dispatcher<S> {
    registry: Registry<S>,
}

impl<S> Dispatcher<S> {
    pub fn new() -> Self {
        Self {
            registry: Registry::new(),
        }
    }

    pub fn register(&mut self, command: Command<S>) -> Result<(), RegistryError> {
        self.registry.register(command)
    }

    pub fn registry(&self) -> &Registry<S> {
        &self.registry
    }

    /// Resolve `input` for `source`.
    ///
    /// The first whitespace-delimited token names the command; the remainder
    /// is split on single spaces and walked through the command's tree.
    pub fn parse(&self, input: &str, source: S) -> Result<ParseResult<S>, ParseError> {
        let (label, rest) = match input.split_once(char::is_whitespace) {
            Some((label, rest)) => (label, rest),
            None => (input, ""),
        };

        let command = self
            .registry
            .lookup(label)
            .ok_or_else(|| ParseError::UnknownCommand(label.to_string()))?;

        let mut context = CommandContext::new(source, input);
        let mut path = Vec::new();
        let mut node = command.root();

        let tokens = if rest.is_empty() {
            Vec::new()
        } else {
            rest.split(' ').collect()
        };

        for (position, token) in tokens.into_iter().enumerate() {
            let Some(index) = node.match_child(token) else {
                return Err(ParseError::NoMatchingNode {
                    command: command.name().to_string(),
                    token: token.to_string(),
                    position,
                });
            };

            node = &node.children()[index];
            if let NodeKind::Argument(name) = node.kind() {
                context.args.bind(name, token);
            }
            path.push(index);
        }

        if !node.is_executable() {
            return Err(ParseError::IncompleteCommand {
                command: command.name().to_string(),
                input: input.to_string(),
            });
        }

        trace!("Parsed '{}' -> {:?} via {:?}", input, node.kind(), path);

        Ok(ParseResult {
            command: Arc::clone(command),
            label: label.to_string(),
            path,
            context,
        })
    }

    /// Usage lines of every command, in registration order.
    pub fn usages(&self) -> Vec<CommandUsage> {
        self.registry
            .iter()
            .map(|command| CommandUsage {
                command_name: command.name().to_string(),
                usage_lines: command.usages(),
            })
            .collect()
    }
}

impl<S> Default for Dispatcher<S> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command::node::NodeBuilder;

    fn dispatcher() -> Dispatcher<&'static str> {
        let mut d = Dispatcher::new();
        d.register(Command::new(
            "echo",
            NodeBuilder::root().then(
                NodeBuilder::literal("ping")
                    .then(NodeBuilder::argument("message").executes(|_| Ok(())))
                    .executes(|_| Ok(())),
            ),
        ))
        .unwrap();
        d.register(
            Command::new("exit", NodeBuilder::root().executes(|_| Ok(()))).with_aliases(["quit"]),
        )
        .unwrap();
        d
    }

    #[test]
    fn label_is_split_on_any_whitespace() {
        let d = dispatcher();
        let result = d.parse("echo\tping", "console").unwrap();
        assert_eq!(result.node().kind(), &NodeKind::Literal("ping".into()));
    }

    #[test]
    fn alias_keeps_typed_label() {
        let d = dispatcher();
        let result = d.parse("quit", "console").unwrap();
        assert_eq!(result.command_name(), "exit");
        assert_eq!(result.label(), "quit");
        assert_eq!(result.context().input, "quit");
    }

    #[test]
    fn trailing_tokens_after_leaf_fail() {
        let d = dispatcher();
        let err = d.parse("echo ping hello world", "console").unwrap_err();
        assert_eq!(
            err,
            ParseError::NoMatchingNode {
                command: "echo".into(),
                token: "world".into(),
                position: 2,
            }
        );
    }

    #[test]
    fn root_without_action_is_incomplete() {
        let d = dispatcher();
        let err = d.parse("echo", "console").unwrap_err();
        assert_eq!(
            err,
            ParseError::IncompleteCommand {
                command: "echo".into(),
                input: "echo".into(),
            }
        );
    }

    #[test]
    fn usages_in_registration_order() {
        let d = dispatcher();
        assert_eq!(
            d.usages(),
            vec![
                CommandUsage {
                    command_name: "echo".into(),
                    usage_lines: vec!["echo ping".into(), "echo ping <message>".into()],
                },
                CommandUsage {
                    command_name: "exit".into(),
                    usage_lines: vec!["exit".into()],
                },
            ]
        );
    }
}
