//! Console Logger
//!
//! `log` backend for the browser. Lines go to the devtools console on wasm32
//! (stderr elsewhere) and the most recent ones are kept in a circular buffer
//! so the UI can show them without opening devtools.

use std::collections::VecDeque;
use std::sync::{Mutex, OnceLock};

use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError};

/// Default number of lines kept in memory
pub const DEFAULT_CAPACITY: usize = 200;

static LOGGER: OnceLock<ConsoleLogger> = OnceLock::new();

/// Logger with a bounded in-memory history
pub struct ConsoleLogger {
    level: LevelFilter,
    capacity: usize,
    lines: Mutex<VecDeque<String>>,
}

impl ConsoleLogger {
    pub fn new(level: LevelFilter, capacity: usize) -> Self {
        Self {
            level,
            capacity: capacity.max(1),
            lines: Mutex::new(VecDeque::with_capacity(capacity.max(1))),
        }
    }

    /// Append a line, evicting the oldest one when full
    fn push_line(&self, line: String) {
        let Ok(mut lines) = self.lines.lock() else { return };
        if lines.len() == self.capacity {
            lines.pop_front();
        }
        lines.push_back(line);
    }

    /// Snapshot of buffered lines, oldest first
    pub fn lines(&self) -> Vec<String> {
        self.lines
            .lock()
            .map(|lines| lines.iter().cloned().collect())
            .unwrap_or_default()
    }
}

fn format_line(record: &Record) -> String {
    format!(
        "{} [{} {}] {}",
        chrono::Utc::now().format("%H:%M:%S%.3f"),
        record.level(),
        record.target(),
        record.args()
    )
}

#[cfg(target_arch = "wasm32")]
fn emit(level: Level, line: &str) {
    let value = wasm_bindgen::JsValue::from_str(line);
    match level {
        Level::Error => web_sys::console::error_1(&value),
        Level::Warn => web_sys::console::warn_1(&value),
        Level::Info => web_sys::console::info_1(&value),
        Level::Debug | Level::Trace => web_sys::console::debug_1(&value),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn emit(_level: Level, line: &str) {
    eprintln!("{line}");
}

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = format_line(record);
        emit(record.level(), &line);
        self.push_line(line);
    }

    fn flush(&self) {}
}

/// Install the global logger. Calling it twice returns the `log` error.
pub fn init_logger(level: LevelFilter, capacity: usize) -> Result<(), SetLoggerError> {
    let logger = LOGGER.get_or_init(|| ConsoleLogger::new(level, capacity));
    log::set_logger(logger)?;
    log::set_max_level(level);
    Ok(())
}

/// Recent log lines from the installed logger, oldest first
pub fn recent_lines() -> Vec<String> {
    LOGGER.get().map(ConsoleLogger::lines).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record_line(logger: &ConsoleLogger, level: Level, msg: &str) {
        logger.log(
            &Record::builder()
                .args(format_args!("{}", msg))
                .level(level)
                .target("test")
                .build(),
        );
    }

    #[test]
    fn test_buffer_evicts_oldest() {
        let logger = ConsoleLogger::new(LevelFilter::Trace, 2);
        record_line(&logger, Level::Info, "one");
        record_line(&logger, Level::Info, "two");
        record_line(&logger, Level::Info, "three");

        let lines = logger.lines();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].ends_with("two"));
        assert!(lines[1].ends_with("three"));
    }

    #[test]
    fn test_level_filter() {
        let logger = ConsoleLogger::new(LevelFilter::Warn, 10);
        record_line(&logger, Level::Debug, "hidden");
        record_line(&logger, Level::Error, "shown");

        let lines = logger.lines();
        assert_eq!(lines.len(), 1);
        assert!(lines[0].contains("[ERROR test] shown"));
    }

    #[test]
    fn test_zero_capacity_keeps_one() {
        let logger = ConsoleLogger::new(LevelFilter::Info, 0);
        record_line(&logger, Level::Info, "a");
        record_line(&logger, Level::Info, "b");
        assert_eq!(logger.lines().len(), 1);
    }
}
