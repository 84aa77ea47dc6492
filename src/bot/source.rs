//! Who issued a command.

use std::fmt;

/// A chat user, as far as commands care.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatAuthor {
    pub id: String,
    /// Display tag, e.g. `name#1234`.
    pub tag: String,
}

/// Origin of a submitted line. Only actions look at the variant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandSource {
    /// The local operator prompt.
    Console,
    /// A chat message author.
    Chat(ChatAuthor),
}

impl CommandSource {
    pub fn chat(id: impl Into<String>, tag: impl Into<String>) -> Self {
        CommandSource::Chat(ChatAuthor {
            id: id.into(),
            tag: tag.into(),
        })
    }

    pub fn name(&self) -> &str {
        match self {
            CommandSource::Console => "Console",
            CommandSource::Chat(author) => &author.tag,
        }
    }

    /// Mention markup for chat authors.
    pub fn mention(&self) -> Option<String> {
        match self {
            CommandSource::Console => None,
            CommandSource::Chat(author) => Some(format!("<@!{}>", author.id)),
        }
    }

    pub fn is_console(&self) -> bool {
        matches!(self, CommandSource::Console)
    }
}

impl fmt::Display for CommandSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
