//! Plain text file driver

use super::file::LogFile;
use super::registry::{self, DriverOptions, FILE_PATH_OPTION, TIME_FORMAT_OPTION};
use crate::core::log_entry::sanitize;
use crate::core::{Driver, LogEntry, LogLevel, Result, TimestampFormat};
use std::path::{Path, PathBuf};

/// Registry name of the text file driver
pub const TEXT_FILE_DRIVER_NAME: &str = "text_file";

/// Appends one human-readable line per entry:
///
/// ```text
/// <timestamp> [<LEVEL>] <message> {k=v, k=v} (txn: <id>)
/// ```
///
/// The attribute and transaction suffixes appear only when present.
pub struct TextFileDriver {
    file: LogFile,
    min_level: LogLevel,
    timestamp_format: TimestampFormat,
}

impl TextFileDriver {
    pub fn new(path: impl Into<PathBuf>) -> Result<Self> {
        Ok(Self {
            file: LogFile::open(path, TEXT_FILE_DRIVER_NAME)?,
            min_level: LogLevel::Debug,
            timestamp_format: TimestampFormat::Iso8601Millis,
        })
    }

    /// Build from registry options.
    ///
    /// `file_path` is required. `min_level` and `time_format` (a strftime
    /// string) are ignored when they have the wrong type or do not parse.
    pub fn from_options(options: &DriverOptions) -> Result<Self> {
        let path = registry::required_string_option(options, FILE_PATH_OPTION, TEXT_FILE_DRIVER_NAME)?;
        let mut driver = Self::new(path)?;

        if let Some(level) = registry::min_level_option(options) {
            driver.min_level = level;
        }

        if let Some(format) = registry::string_option(options, TIME_FORMAT_OPTION)
            .and_then(TimestampFormat::parse_custom)
        {
            driver.timestamp_format = format;
        }

        Ok(driver)
    }

    #[must_use]
    pub fn with_min_level(mut self, level: LogLevel) -> Self {
        self.min_level = level;
        self
    }

    #[must_use]
    pub fn with_timestamp_format(mut self, format: TimestampFormat) -> Self {
        self.timestamp_format = format;
        self
    }

    pub fn min_level(&self) -> LogLevel {
        self.min_level
    }

    pub fn path(&self) -> &Path {
        self.file.path()
    }

    pub fn is_closed(&self) -> bool {
        self.file.is_closed()
    }

    fn format_line(&self, entry: &LogEntry) -> String {
        let mut line = format!(
            "{} [{}] {}",
            self.timestamp_format.format(&entry.timestamp),
            entry.level.to_str(),
            sanitize(&entry.message)
        );

        if let Some(attrs) = entry.attributes() {
            let pairs: Vec<String> = attrs
                .iter()
                .map(|(k, v)| format!("{}={}", sanitize(k), sanitize(v)))
                .collect();
            line.push_str(" {");
            line.push_str(&pairs.join(", "));
            line.push('}');
        }

        if let Some(id) = entry.transaction_id() {
            line.push_str(" (txn: ");
            line.push_str(&sanitize(id));
            line.push(')');
        }

        line.push('\n');
        line
    }
}

impl Driver for TextFileDriver {
    fn log(&self, entry: &LogEntry) -> Result<()> {
        if entry.level < self.min_level {
            return Ok(());
        }

        let line = self.format_line(entry);
        self.file.write_record(|buf| {
            buf.extend_from_slice(line.as_bytes());
            Ok(())
        })
    }

    fn close(&self) -> Result<()> {
        self.file.close()
    }

    fn name(&self) -> &str {
        TEXT_FILE_DRIVER_NAME
    }
}
