//! Host configuration.
//!
//! Defaults live in [`runtime`]; [`Config::from_env`] applies overrides from
//! the environment:
//!
//! - `LOG` - `error`, `warn`, `info`, `debug` or `trace` (anything else disables logging)
//! - `CMDTREE_TICK_MS` - execution queue tick interval in milliseconds
//! - `CMDTREE_PROMPT` - console prompt
//! - `CMDTREE_CHAT_PREFIX` - trigger prefix for chat messages

pub mod runtime;

use std::env;
use std::sync::Arc;
use std::time::Duration;

use log::LevelFilter;
use spin::RwLock;

/// Configuration shared between the host and commands that reload it.
pub type SharedConfig = Arc<RwLock<Config>>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub tick_interval: Duration,
    pub prompt: String,
    pub chat_prefix: String,
    pub log_level: LevelFilter,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tick_interval: Duration::from_millis(1000 / runtime::TICKS_PER_SEC),
            prompt: runtime::PROMPT.to_string(),
            chat_prefix: runtime::CHAT_PREFIX.to_string(),
            log_level: parse_level(runtime::DEFAULT_LOG_LEVEL),
        }
    }
}

impl Config {
    /// Defaults overridden by whatever the environment sets.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self {
            log_level: log_level_from_lookup(&lookup),
            ..Self::default()
        };

        if let Some(ms) = lookup("CMDTREE_TICK_MS") {
            match ms.trim().parse::<u64>() {
                Ok(ms) if ms > 0 => config.tick_interval = Duration::from_millis(ms),
                _ => warn!("Ignoring invalid CMDTREE_TICK_MS '{}'", ms),
            }
        }
        if let Some(prompt) = lookup("CMDTREE_PROMPT") {
            config.prompt = prompt;
        }
        if let Some(prefix) = lookup("CMDTREE_CHAT_PREFIX").filter(|p| !p.is_empty()) {
            config.chat_prefix = prefix;
        }

        config
    }
}

/// Only the log level from the environment.
///
/// Resolved before the logger exists, so reading it never logs.
pub fn log_level_from_env() -> LevelFilter {
    log_level_from_lookup(|key| env::var(key).ok())
}

fn log_level_from_lookup(lookup: impl Fn(&str) -> Option<String>) -> LevelFilter {
    lookup("LOG")
        .map(|level| parse_level(&level))
        .unwrap_or_else(|| parse_level(runtime::DEFAULT_LOG_LEVEL))
}

/// Map a `LOG` value to a level filter.
pub fn parse_level(level: &str) -> LevelFilter {
    match level {
        "error" => LevelFilter::Error,
        "warn" => LevelFilter::Warn,
        "info" => LevelFilter::Info,
        "debug" => LevelFilter::Debug,
        "trace" => LevelFilter::Trace,
        _ => LevelFilter::Off,
    }
}
