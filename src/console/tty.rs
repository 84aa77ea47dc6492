//! Interactive operator prompt.
//!
//! Reads lines with a rustyline editor (history kept in memory only),
//! submits them as [`CommandSource::Console`] and waits for the queue to
//! run them before prompting again. Parse errors are logged and the
//! prompt continues. Ctrl-C, Ctrl-D or a successful `exit` end the loop.

use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;

use crate::bot::{CommandSource, ShutdownSignal};
use crate::config::SharedConfig;
use crate::engine::Engine;

pub fn run(
    engine: &Engine<CommandSource>,
    config: &SharedConfig,
    shutdown: &ShutdownSignal,
) -> anyhow::Result<()> {
    let mut editor = DefaultEditor::new()?;
    println!("[tty] started. Type 'help' for commands.");

    while !shutdown.is_requested() {
        // Re-read each time so `reload` can change the prompt.
        let prompt = config.read().prompt.clone();
        match editor.readline(&prompt) {
            Ok(line) => {
                if line.trim().is_empty() {
                    continue;
                }
                let _ = editor.add_history_entry(line.as_str());
                handle_line(engine, &line);
            }
            Err(ReadlineError::Interrupted | ReadlineError::Eof) => break,
            Err(err) => return Err(err.into()),
        }
    }

    Ok(())
}

fn handle_line(engine: &Engine<CommandSource>, line: &str) {
    match engine.submit(line, CommandSource::Console) {
        Ok(_) => engine.wait_idle(),
        Err(err) => error!("{}", err),
    }
}
