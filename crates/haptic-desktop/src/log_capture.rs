//! Log capture module - keeps recent log lines for the control panel.
//!
//! The panel owns the terminal in raw mode, so nothing may be printed while
//! it runs. This `log::Log` implementation stores lines in a bounded buffer
//! the panel reads on every frame instead.

use std::collections::VecDeque;
use std::sync::Mutex;

use log::{Level, LevelFilter, Log, Metadata, Record};

/// Maximum number of captured lines
pub const LOG_LINES_CAPACITY: usize = 100;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LogLine {
    pub level: Level,
    pub target: String,
    pub message: String,
}

/// Logger that captures to a bounded buffer.
pub struct CaptureLogger {
    max_level: Level,
    lines: Mutex<VecDeque<LogLine>>,
}

impl CaptureLogger {
    pub const fn new(max_level: Level) -> Self {
        Self {
            max_level,
            lines: Mutex::new(VecDeque::new()),
        }
    }

    /// Newest first
    pub fn recent(&self, count: usize) -> Vec<LogLine> {
        self.lines
            .lock()
            .ok()
            .map(|lines| lines.iter().rev().take(count).cloned().collect())
            .unwrap_or_default()
    }
}

impl Log for CaptureLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.max_level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        if let Ok(mut lines) = self.lines.lock() {
            if lines.len() >= LOG_LINES_CAPACITY {
                lines.pop_front();
            }
            lines.push_back(LogLine {
                level: record.level(),
                target: record.target().to_string(),
                message: format!("{}", record.args()),
            });
        }
    }

    fn flush(&self) {}
}

/// Global logger instance. Filtering is left to `log::set_max_level`.
static LOGGER: CaptureLogger = CaptureLogger::new(Level::Trace);

/// Install the capturing logger. Calling it again keeps the first logger
/// and its level.
pub fn init(max_level: LevelFilter) {
    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(max_level);
    }
}

/// Most recent captured lines, newest first.
pub fn recent_log_lines(count: usize) -> Vec<LogLine> {
    LOGGER.recent(count)
}
