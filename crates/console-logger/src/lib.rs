//! Console Logger
//!
//! `log` backend for the browser: every record goes to the devtools console
//! (stderr off-wasm) and the last `capacity` lines stay in a circular buffer
//! so the page can show or dump them.

use std::collections::VecDeque;
use std::sync::{Mutex, OnceLock};

use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError};

static LOGGER: OnceLock<ConsoleLogger> = OnceLock::new();

pub struct ConsoleLogger {
    level: LevelFilter,
    capacity: usize,
    lines: Mutex<VecDeque<String>>,
}

impl ConsoleLogger {
    pub fn new(level: LevelFilter, capacity: usize) -> Self {
        Self {
            level,
            capacity,
            lines: Mutex::new(VecDeque::with_capacity(capacity)),
        }
    }

    /// Buffered lines, oldest first
    pub fn lines(&self) -> Vec<String> {
        match self.lines.lock() {
            Ok(lines) => lines.iter().cloned().collect(),
            Err(_) => Vec::new(),
        }
    }

    fn push(&self, line: String) {
        if self.capacity == 0 {
            return;
        }
        if let Ok(mut lines) = self.lines.lock() {
            while lines.len() >= self.capacity {
                lines.pop_front();
            }
            lines.push_back(line);
        }
    }
}

fn format_line(record: &Record) -> String {
    format!(
        "{} {:<5} {}: {}",
        chrono::Local::now().format("%H:%M:%S"),
        record.level(),
        record.target(),
        record.args()
    )
}

#[cfg(target_arch = "wasm32")]
fn emit(level: Level, line: &str) {
    use wasm_bindgen::JsValue;
    let value = JsValue::from_str(line);
    match level {
        Level::Error => web_sys::console::error_1(&value),
        Level::Warn => web_sys::console::warn_1(&value),
        Level::Info => web_sys::console::info_1(&value),
        Level::Debug | Level::Trace => web_sys::console::debug_1(&value),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn emit(_level: Level, line: &str) {
    eprintln!("{}", line);
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
        self.push(line);
    }

    fn flush(&self) {}
}

/// Install the global logger. Fails if a logger is already set.
pub fn init(level: LevelFilter, capacity: usize) -> Result<(), SetLoggerError> {
    let logger = LOGGER.get_or_init(|| ConsoleLogger::new(level, capacity));
    log::set_logger(logger)?;
    log::set_max_level(level);
    Ok(())
}

/// Recent lines from the global logger (empty before `init`)
pub fn recent_lines() -> Vec<String> {
    LOGGER.get().map(ConsoleLogger::lines).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record_at(logger: &ConsoleLogger, level: Level, msg: &str) {
        logger.log(
            &Record::builder()
                .level(level)
                .target("recipe_box")
                .args(format_args!("{}", msg))
                .build(),
        );
    }

    #[test]
    fn test_ring_keeps_most_recent_lines() {
        let logger = ConsoleLogger::new(LevelFilter::Trace, 2);
        record_at(&logger, Level::Info, "one");
        record_at(&logger, Level::Info, "two");
        record_at(&logger, Level::Warn, "three");

        let lines = logger.lines();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].ends_with("INFO  recipe_box: two"));
        assert!(lines[1].ends_with("WARN  recipe_box: three"));
    }

    #[test]
    fn test_level_filter_drops_verbose_records() {
        let logger = ConsoleLogger::new(LevelFilter::Warn, 10);
        record_at(&logger, Level::Debug, "noise");
        record_at(&logger, Level::Error, "boom");
        assert_eq!(logger.lines().len(), 1);
        assert!(logger.lines()[0].contains("boom"));
    }

    #[test]
    fn test_recent_lines_reads_installed_logger() {
        init(LevelFilter::Info, 5).unwrap();
        log::info!(target: "recipe_box", "list cleared");
        let lines = recent_lines();
        assert!(lines.last().unwrap().ends_with("INFO  recipe_box: list cleared"));
        assert!(lines.len() <= 5);
    }

    #[test]
    fn test_zero_capacity_buffers_nothing() {
        let logger = ConsoleLogger::new(LevelFilter::Info, 0);
        record_at(&logger, Level::Info, "hello");
        assert!(logger.lines().is_empty());
    }
}
