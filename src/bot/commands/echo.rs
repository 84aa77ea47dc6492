//! Echo command - `echo ping` and `echo ping <message>`.

use crate::bot::CommandSource;
use crate::command::{Command, NodeBuilder};

pub fn command() -> Command<CommandSource> {
    Command::new(
        "echo",
        NodeBuilder::root().then(
            NodeBuilder::literal("ping")
                .then(NodeBuilder::argument("message").executes(|c| {
                    info!("{}", c.args.require("message")?);
                    Ok(())
                }))
                .executes(|_| {
                    info!("Pong!");
                    Ok(())
                }),
        ),
    )
}
