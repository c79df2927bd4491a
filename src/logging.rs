//! A small `log` backend for command-line hosts.
//!
//! The library itself only emits records through the `log` facade. Hosts
//! that want to see them (such as the `monotable` binary) can install a
//! [`StderrLogger`], which prints one line per record:
//!
//! ```text
//! [12:04:31] DEBUG    computed column widths [10, 5] src/table.rs:159
//! ```

use std::io::{self, Write};
use std::sync::Mutex;

use log::{LevelFilter, Log, Metadata, Record, SetLoggerError};
use time::{OffsetDateTime, format_description::OwnedFormatItem};

use crate::sync::lock_recover;

/// Line-oriented logger writing to stderr (or any other writer).
///
/// The writer is guarded by a mutex, so records from several threads never
/// interleave within a line.
pub struct StderrLogger {
    level: LevelFilter,
    show_time: bool,
    show_level: bool,
    show_path: bool,
    time_format: OwnedFormatItem,
    writer: Mutex<Box<dyn Write + Send>>,
}

impl StderrLogger {
    /// Create a logger at `Info` level writing to stderr.
    #[must_use]
    pub fn new() -> Self {
        Self::with_writer(Box::new(io::stderr()))
    }

    /// Create a logger writing to `writer`.
    #[must_use]
    pub fn with_writer(writer: Box<dyn Write + Send>) -> Self {
        let time_format = time::format_description::parse_owned::<2>("[hour]:[minute]:[second]")
            .unwrap_or_else(|_| OwnedFormatItem::Literal(Vec::<u8>::new().into_boxed_slice()));
        Self {
            level: LevelFilter::Info,
            show_time: true,
            show_level: true,
            show_path: false,
            time_format,
            writer: Mutex::new(writer),
        }
    }

    /// Set the minimum log level.
    #[must_use]
    pub fn level(mut self, level: LevelFilter) -> Self {
        self.level = level;
        self
    }

    /// Enable or disable timestamps.
    #[must_use]
    pub fn show_time(mut self, show: bool) -> Self {
        self.show_time = show;
        self
    }

    /// Enable or disable the level column.
    #[must_use]
    pub fn show_level(mut self, show: bool) -> Self {
        self.show_level = show;
        self
    }

    /// Enable or disable the source location suffix.
    #[must_use]
    pub fn show_path(mut self, show: bool) -> Self {
        self.show_path = show;
        self
    }

    /// Override the timestamp format (a `time` format description, printed
    /// inside square brackets). Invalid descriptions are ignored.
    #[must_use]
    pub fn time_format(mut self, format: &str) -> Self {
        if let Ok(parsed) = time::format_description::parse_owned::<2>(format) {
            self.time_format = parsed;
        }
        self
    }

    /// Install as the global logger.
    ///
    /// # Errors
    ///
    /// Fails if another logger has already been installed.
    pub fn init(self) -> Result<(), SetLoggerError> {
        log::set_max_level(self.level);
        log::set_boxed_logger(Box::new(self))
    }

    fn format_time(&self) -> String {
        let now = OffsetDateTime::now_local().unwrap_or_else(|_| OffsetDateTime::now_utc());
        now.format(&self.time_format)
            .unwrap_or_else(|_| now.to_string())
    }

    fn format_record(&self, record: &Record<'_>) -> String {
        let mut line = String::new();

        if self.show_time {
            line.push_str(&format!("[{}] ", self.format_time()));
        }

        if self.show_level {
            let level_name = record.level().to_string();
            line.push_str(&format!("{level_name:<8} "));
        }

        line.push_str(&record.args().to_string());

        if self.show_path
            && let Some(path) = record.file()
        {
            line.push(' ');
            line.push_str(path);
            if let Some(line_no) = record.line() {
                line.push_str(&format!(":{line_no}"));
            }
        }

        line
    }
}

impl Default for StderrLogger {
    fn default() -> Self {
        Self::new()
    }
}

impl Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record<'_>) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let line = self.format_record(record);
        let mut writer = lock_recover(&self.writer);
        // A logger has nowhere to report its own write failures.
        let _ = writeln!(writer, "{line}");
    }

    fn flush(&self) {
        let _ = lock_recover(&self.writer).flush();
    }
}
