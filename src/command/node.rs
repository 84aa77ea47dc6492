//! Grammar nodes and the builder used to assemble command trees.
//!
//! A tree is assembled with [`NodeBuilder`] during registration and frozen
//! into a [`Node`] when the owning command is created. `Node` exposes no
//! mutating methods, so a registered tree cannot change shape.

use std::fmt;

use crate::command::context::CommandContext;
use crate::error::ActionResult;

/// Executable behavior attached to a node.
pub type Action<S> = Box<dyn Fn(&CommandContext<S>) -> ActionResult + Send + Sync>;

/// What a node matches.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeKind {
    /// Entry point of a command; the command name is matched by the registry.
    Root,
    /// Matches a token exactly (case-sensitive).
    Literal(String),
    /// Matches any token and binds it under this name.
    Argument(String),
}

impl NodeKind {
    /// Usage rendering of a single hop: literal text verbatim, `<name>` for arguments.
    fn usage_token(&self) -> Option<String> {
        match self {
            NodeKind::Root => None,
            NodeKind::Literal(text) => Some(text.clone()),
            NodeKind::Argument(name) => Some(format!("<{name}>")),
        }
    }
}

/// Mutable node used while a command tree is being assembled.
pub struct NodeBuilder<S> {
    kind: NodeKind,
    children: Vec<NodeBuilder<S>>,
    action: Option<Action<S>>,
}

impl<S> NodeBuilder<S> {
    /// Create a root node.
    pub fn root() -> Self {
        Self::with_kind(NodeKind::Root)
    }

    /// Create a literal node matching `text`.
    pub fn literal(text: impl Into<String>) -> Self {
        Self::with_kind(NodeKind::Literal(text.into()))
    }

    /// Create an argument node binding its token under `name`.
    pub fn argument(name: impl Into<String>) -> Self {
        Self::with_kind(NodeKind::Argument(name.into()))
    }

    fn with_kind(kind: NodeKind) -> Self {
        Self {
            kind,
            children: Vec::new(),
            action: None,
        }
    }

    /// Attach a child. Insertion order is the tie-break order while parsing.
    pub fn then(mut self, child: NodeBuilder<S>) -> Self {
        self.children.push(child);
        self
    }

    /// Mark this node as executable.
    pub fn executes<F>(mut self, action: F) -> Self
    where
        F: Fn(&CommandContext<S>) -> ActionResult + Send + Sync + 'static,
    {
        self.action = Some(Box::new(action));
        self
    }

    /// Freeze the subtree.
    pub fn build(self) -> Node<S> {
        Node {
            kind: self.kind,
            children: self.children.into_iter().map(NodeBuilder::build).collect(),
            action: self.action,
        }
    }
}

/// Finalized, read-only grammar node.
pub struct Node<S> {
    kind: NodeKind,
    children: Vec<Node<S>>,
    action: Option<Action<S>>,
}

impl<S> Node<S> {
    pub fn kind(&self) -> &NodeKind {
        &self.kind
    }

    pub fn children(&self) -> &[Node<S>] {
        &self.children
    }

    pub fn action(&self) -> Option<&Action<S>> {
        self.action.as_ref()
    }

    /// Whether input may stop at this node.
    pub fn is_executable(&self) -> bool {
        self.action.is_some()
    }

    /// Pick the child matching `token`, returning its index.
    ///
    /// Every literal child is tried before any argument child; among
    /// arguments the first one inserted wins.
    pub(crate) fn match_child(&self, token: &str) -> Option<usize> {
        self.children
            .iter()
            .position(|child| matches!(&child.kind, NodeKind::Literal(text) if text == token))
            .or_else(|| {
                self.children
                    .iter()
                    .position(|child| matches!(child.kind, NodeKind::Argument(_)))
            })
    }

    /// Follow a path of child indices from this node.
    pub(crate) fn descend(&self, path: &[usize]) -> Option<&Node<S>> {
        path.iter()
            .try_fold(self, |node, &index| node.children.get(index))
    }

    /// One usage line per action-bearing node in this subtree, pre-order.
    ///
    /// Each line starts with `prefix` and appends one token per hop.
    pub fn usages(&self, prefix: &str) -> Vec<String> {
        let mut lines = Vec::new();
        self.collect_usages(prefix.to_string(), &mut lines);
        lines
    }

    fn collect_usages(&self, line: String, lines: &mut Vec<String>) {
        if self.is_executable() {
            lines.push(line.clone());
        }
        for child in &self.children {
            let next = match child.kind.usage_token() {
                Some(token) if line.is_empty() => token,
                Some(token) => format!("{line} {token}"),
                None => line.clone(),
            };
            child.collect_usages(next, lines);
        }
    }
}

impl<S> fmt::Debug for Node<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node")
            .field("kind", &self.kind)
            .field("executable", &self.is_executable())
            .field("children", &self.children)
            .finish()
    }
}
