//! Logger implementation for the log crate.

use std::fmt::{self, Display};
use std::time::Instant;

use anyhow::anyhow;
use log::{Level, LevelFilter, Log, Metadata, Record};

lazy_static::lazy_static! {
    static ref START: Instant = Instant::now();
}

pub struct SimpleLogger;

#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorCode {
    Red = 31,
    Green = 32,
    Yellow = 33,
    Cyan = 36,
    BrightBlack = 90,
}

impl Display for ColorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\u{1B}[{}m", *self as u8)
    }
}

impl ColorCode {
    pub fn for_level(level: Level) -> Self {
        match level {
            Level::Error => ColorCode::Red,
            Level::Warn => ColorCode::Yellow,
            Level::Info => ColorCode::Green,
            Level::Debug => ColorCode::Cyan,
            Level::Trace => ColorCode::BrightBlack,
        }
    }
}

impl Log for SimpleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let file = record.file().unwrap_or("none");
        let line = record.line().unwrap_or(0);
        let args = record.args();
        let color = ColorCode::for_level(record.level());
        let color_reset = "\u{1B}[0m";
        let secs = START.elapsed().as_secs_f64();

        // [time file:line] message
        eprintln!("[{secs:.5} {file}:{line}] {color}{args}{color_reset}");
    }

    fn flush(&self) {}
}

/// Install the logger with the given level.
pub fn init(level: LevelFilter) -> anyhow::Result<()> {
    lazy_static::initialize(&START);
    log::set_logger(&SimpleLogger).map_err(|e| anyhow!("failed to install logger: {e}"))?;
    log::set_max_level(level);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn color_escape_sequences() {
        assert_eq!(ColorCode::Red.to_string(), "\u{1B}[31m");
        assert_eq!(ColorCode::for_level(Level::Trace), ColorCode::BrightBlack);
    }
}
