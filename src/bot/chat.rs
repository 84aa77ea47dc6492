//! Chat message intake.
//!
//! Chat messages only become commands when they start with the configured
//! trigger prefix; the rest of the message is the command line.

use super::source::CommandSource;
use crate::engine::{Accepted, Engine};
use crate::error::ParseError;

/// The command line carried by `content`, if it starts with `prefix`.
pub fn strip_prefix<'a>(content: &'a str, prefix: &str) -> Option<&'a str> {
    content.strip_prefix(prefix).filter(|line| !line.is_empty())
}

/// Submit a chat message on behalf of `source`.
///
/// Returns `None` for messages that are not commands. Parse failures are
/// logged as warnings and returned to the caller.
pub fn submit_message(
    engine: &Engine<CommandSource>,
    prefix: &str,
    content: &str,
    source: CommandSource,
) -> Option<Result<Accepted, ParseError>> {
    let line = strip_prefix(content, prefix)?;
    let result = engine.submit(line, source);
    if let Err(err) = &result {
        warn!("Ignoring chat command: {}", err);
    }
    Some(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command::NodeBuilder;
    use crate::config::Config;

    #[test]
    fn prefix_is_required() {
        assert_eq!(strip_prefix("!echo ping", "!"), Some("echo ping"));
        assert_eq!(strip_prefix("echo ping", "!"), None);
        assert_eq!(strip_prefix("!", "!"), None);
    }

    #[test]
    fn only_prefixed_messages_are_queued() {
        let mut engine = Engine::new(&Config::default());
        engine
            .register_command(
                "ping",
                Vec::<String>::new(),
                NodeBuilder::root().executes(|_| Ok(())),
            )
            .unwrap();
        let author = CommandSource::chat("1", "someone#0001");

        assert!(submit_message(&engine, "!", "hello there", author.clone()).is_none());
        assert!(matches!(
            submit_message(&engine, "!", "!nope", author.clone()),
            Some(Err(ParseError::UnknownCommand(_)))
        ));
        assert!(matches!(
            submit_message(&engine, "!", "!ping", author),
            Some(Ok(_))
        ));
        assert_eq!(engine.pending(), 1);
    }
}
