#![cfg(feature = "std")]

use std::env;
use log::{self, LevelFilter, Metadata, Record};

/// Environment variable holding the log level (`error` .. `trace`, or `off`).
pub const LOG_ENV: &str = "SNAKES_LOG";

struct SimpleLogger;

impl log::Log for SimpleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    // stderr, so game output and JSON on stdout stay clean
    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            eprintln!("{} - {}", record.level(), record.args());
        }
    }

    fn flush(&self) {}
}

static LOGGER: SimpleLogger = SimpleLogger;

fn level_from(value: Option<String>, default: LevelFilter) -> LevelFilter {
    value
        .and_then(|lvl| lvl.parse().ok())
        .unwrap_or(default)
}

/// Initialize logging with a level taken from the `SNAKES_LOG` environment variable.
/// Falls back to `default` if the variable is not set or invalid.
pub fn init_logging(default: LevelFilter) {
    let level = level_from(env::var(LOG_ENV).ok(), default);
    let _ = log::set_logger(&LOGGER).map(|()| log::set_max_level(level));
}
