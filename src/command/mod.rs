//! Command grammar - trees, registry and parsing.
//!
//! # Architecture
//!
//! - `node.rs` - [`NodeBuilder`] for assembling trees, [`Node`] for the frozen result
//! - `context.rs` - [`CommandContext`], bound [`Arguments`] and [`CommandResult`]
//! - `registry.rs` - [`Command`] and name/alias lookup
//! - `dispatcher.rs` - input parsing into [`ParseResult`]
//!
//! # Defining a Command
//!
//! ```ignore
//! let echo = Command::new(
//!     "echo",
//!     NodeBuilder::root().then(
//!         NodeBuilder::literal("ping")
//!             .then(NodeBuilder::argument("message").executes(|c| { /* ... */ Ok(()) }))
//!             .executes(|c| { /* ... */ Ok(()) }),
//!     ),
//! );
//! dispatcher.register(echo)?;
//! ```

pub mod context;
pub mod dispatcher;
pub mod node;
pub mod registry;

pub use context::{Arguments, CommandContext, CommandResult};
pub use dispatcher::{CommandUsage, Dispatcher, ParseResult};
pub use node::{Action, Node, NodeBuilder, NodeKind};
pub use registry::{Command, Registry};
