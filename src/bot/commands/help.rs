//! Help command - logs every usage line.

use std::sync::Arc;

use anyhow::{Context, ensure};
use spin::Once;

use crate::bot::CommandSource;
use crate::command::{Command, CommandUsage, NodeBuilder};

/// Usage table filled in once every command has been registered.
pub type UsageTable = Arc<Once<Vec<CommandUsage>>>;

/// `help`: console only.
pub fn command(usages: UsageTable) -> Command<CommandSource> {
    Command::new(
        "help",
        NodeBuilder::<CommandSource>::root().executes(move |c| {
            ensure!(c.source.is_console(), "Not permitted");
            let table = usages.get().context("command list is not ready yet")?;
            for line in render(table) {
                info!("{}", line);
            }
            Ok(())
        }),
    )
    .with_aliases(["?"])
}

/// One `/name` header per command followed by its usage lines.
pub fn render(table: &[CommandUsage]) -> Vec<String> {
    table
        .iter()
        .flat_map(|usage| {
            std::iter::once(format!("/{}", usage.command_name))
                .chain(usage.usage_lines.iter().map(|line| format!("  /{}", line)))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_headers_and_lines() {
        let table = vec![
            CommandUsage {
                command_name: "echo".into(),
                usage_lines: vec!["echo ping".into(), "echo ping <message>".into()],
            },
            CommandUsage {
                command_name: "exit".into(),
                usage_lines: vec!["exit".into()],
            },
        ];
        assert_eq!(
            render(&table),
            ["/echo", "  /echo ping", "  /echo ping <message>", "/exit", "  /exit"]
        );
    }
}
