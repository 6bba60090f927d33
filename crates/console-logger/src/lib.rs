//! Console Logger
//!
//! `log` backend for the browser: every record goes to the matching
//! `console.*` method and the most recent lines are kept in a ring buffer.

use std::collections::VecDeque;
use std::sync::{Mutex, OnceLock};

use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError};

/// Default number of lines kept in history
pub const DEFAULT_CAPACITY: usize = 200;

static LOGGER: OnceLock<ConsoleLogger> = OnceLock::new();

pub struct ConsoleLogger {
    level: LevelFilter,
    capacity: usize,
    history: Mutex<VecDeque<String>>,
}

impl ConsoleLogger {
    pub fn new(level: LevelFilter, capacity: usize) -> Self {
        Self {
            level,
            capacity,
            history: Mutex::new(VecDeque::with_capacity(capacity)),
        }
    }

    fn remember(&self, line: String) {
        if self.capacity == 0 {
            return;
        }
        if let Ok(mut history) = self.history.lock() {
            if history.len() == self.capacity {
                history.pop_front();
            }
            history.push_back(line);
        }
    }

    /// Oldest first
    pub fn lines(&self) -> Vec<String> {
        self.history
            .lock()
            .map(|h| h.iter().cloned().collect())
            .unwrap_or_default()
    }
}

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = format_line(record.level(), record.target(), &record.args().to_string());
        #[cfg(target_arch = "wasm32")]
        emit(record.level(), &line);
        self.remember(line);
    }

    fn flush(&self) {}
}

/// `[LEVEL target] message`
pub fn format_line(level: Level, target: &str, message: &str) -> String {
    format!("[{} {}] {}", level, target, message)
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

/// Install the logger once per page. Later calls keep the first logger.
pub fn init(level: LevelFilter, capacity: usize) -> Result<(), SetLoggerError> {
    let logger = LOGGER.get_or_init(|| ConsoleLogger::new(level, capacity));
    log::set_logger(logger)?;
    log::set_max_level(logger.level);
    Ok(())
}

/// Recent lines written through the installed logger
pub fn history() -> Vec<String> {
    LOGGER.get().map(ConsoleLogger::lines).unwrap_or_default()
}
