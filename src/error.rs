//! Error types for the dispatch engine.
//!
//! Registration and parsing fail with typed errors built on `thiserror`, so
//! callers can match on the exact failure. Action bodies use anyhow for
//! flexible error handling; whatever they return is wrapped into an
//! [`ActionFault`] by the execution queue.
//!
//! ## Usage Examples
//!
//! Failing inside an action:
//! ```ignore
//! anyhow::bail!("Not permitted");
//! anyhow::ensure!(!message.is_empty(), "message must not be empty");
//! ```
//!
//! Adding context:
//! ```ignore
//! let name = ctx.args.require("statName")?;
//! ```

use thiserror::Error;

/// Result type returned by every command action.
pub type ActionResult = anyhow::Result<()>;

/// Failure of a `register` call. The registry is left untouched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    #[error("command name or alias `{0}` is already registered")]
    DuplicateName(String),
}

/// Failure to resolve an input line against the registered grammar.
///
/// Parse errors are reported synchronously to the submitter and the input
/// never reaches the execution queue.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("unknown command: {0}")]
    UnknownCommand(String),

    #[error("unexpected `{token}` at position {position} in command `{command}`")]
    NoMatchingNode {
        command: String,
        token: String,
        /// Zero-based index of the offending token after the command name.
        position: usize,
    },

    #[error("incomplete command `{command}`: `{input}` is not runnable")]
    IncompleteCommand { command: String, input: String },
}

/// Failure raised while running an action.
#[derive(Debug, Error)]
pub enum ActionFault {
    /// The action returned an error.
    #[error(transparent)]
    Failed(#[from] anyhow::Error),

    /// The action panicked; the payload message is kept when it is a string.
    #[error("action panicked: {0}")]
    Panicked(String),
}
