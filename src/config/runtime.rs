//! Runtime configuration constants.

pub const TICKS_PER_SEC: u64 = 100; // 10ms per tick
pub const PROMPT: &str = "> ";
pub const CHAT_PREFIX: &str = "!";
pub const DEFAULT_LOG_LEVEL: &str = "info";
