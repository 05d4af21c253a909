use std::env;

use log::{LevelFilter, Log, Metadata, Record};

/// Writes every enabled record to stderr so it stays out of the way of the map.
struct StderrLogger;

static LOGGER: StderrLogger = StderrLogger;

impl Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        eprintln!("[{:<5}] {}: {}", record.level(), record.target(), record.args());
    }

    fn flush(&self) {}
}

/// Install the stderr logger. `TREASUREHUNT_LOG` picks the level (`off`, `error`, ...,
/// `trace`); anything unparsable falls back to `info`.
pub fn init_logging() {
    let level = match env::var("TREASUREHUNT_LOG") {
        Ok(lvl) => lvl.parse().unwrap_or(LevelFilter::Info),
        Err(_) => LevelFilter::Info,
    };
    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(level);
    }
}
