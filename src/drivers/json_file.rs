//! JSON file driver for structured logging

use super::file::LogFile;
use super::registry::{self, DriverOptions, FILE_PATH_OPTION};
use crate::core::{Attributes, Driver, LogEntry, LogLevel, Result, TimestampFormat};
use serde::Serialize;
use std::path::{Path, PathBuf};

/// Registry name of the JSON file driver
pub const JSON_FILE_DRIVER_NAME: &str = "json_file";

/// One line of the JSON log file
#[derive(Serialize)]
struct JsonRecord<'a> {
    timestamp: String,
    level: &'static str,
    message: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    attributes: Option<&'a Attributes>,
    #[serde(skip_serializing_if = "Option::is_none")]
    transaction_id: Option<&'a str>,
}

impl<'a> From<&'a LogEntry> for JsonRecord<'a> {
    fn from(entry: &'a LogEntry) -> Self {
        Self {
            timestamp: TimestampFormat::Iso8601Millis.format(&entry.timestamp),
            level: entry.level.to_str(),
            message: &entry.message,
            attributes: entry.attributes(),
            transaction_id: entry.transaction_id(),
        }
    }
}

/// Writes each entry as a single-line JSON object (JSONL), appending to
/// the target file.
///
/// Fields: `timestamp` (ISO 8601, milliseconds), `level`, `message`, and
/// `attributes` / `transaction_id` when present.
pub struct JsonFileDriver {
    file: LogFile,
    min_level: LogLevel,
}

impl JsonFileDriver {
    /// Open `path` for appending with the default `Debug` threshold
    pub fn new(path: impl Into<PathBuf>) -> Result<Self> {
        Ok(Self {
            file: LogFile::open(path, JSON_FILE_DRIVER_NAME)?,
            min_level: LogLevel::Debug,
        })
    }

    /// Build from registry options.
    ///
    /// `file_path` is required; an unparseable `min_level` is ignored.
    pub fn from_options(options: &DriverOptions) -> Result<Self> {
        let path = registry::required_string_option(options, FILE_PATH_OPTION, JSON_FILE_DRIVER_NAME)?;
        let mut driver = Self::new(path)?;

        if let Some(level) = registry::min_level_option(options) {
            driver.min_level = level;
        }

        Ok(driver)
    }

    #[must_use]
    pub fn with_min_level(mut self, level: LogLevel) -> Self {
        self.min_level = level;
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
}

impl Driver for JsonFileDriver {
    fn log(&self, entry: &LogEntry) -> Result<()> {
        if entry.level < self.min_level {
            return Ok(());
        }

        let record = JsonRecord::from(entry);
        self.file.write_record(|buf| {
            serde_json::to_writer(&mut *buf, &record)?;
            buf.push(b'\n');
            Ok(())
        })
    }

    fn close(&self) -> Result<()> {
        self.file.close()
    }

    fn name(&self) -> &str {
        JSON_FILE_DRIVER_NAME
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::LoggerError;
    use serde_json::{json, Value};
    use std::fs;
    use tempfile::tempdir;

    fn read_lines(path: &Path) -> Vec<Value> {
        fs::read_to_string(path)
            .expect("read log file")
            .lines()
            .map(|line| serde_json::from_str(line).expect("valid JSON line"))
            .collect()
    }

    #[test]
    fn test_json_driver_fields() -> Result<()> {
        let dir = tempdir()?;
        let path = dir.path().join("test.jsonl");
        let driver = JsonFileDriver::new(&path)?;

        let mut attrs = Attributes::new();
        attrs.insert("key".to_string(), "value".to_string());
        let entry = LogEntry::new(LogLevel::Info, "message with attrs")
            .with_attributes(attrs)
            .with_transaction_id("tx-123");

        driver.log(&entry)?;
        driver.close()?;

        let lines = read_lines(&path);
        assert_eq!(lines.len(), 1);
        let line = &lines[0];
        assert_eq!(line["level"], "INFO");
        assert_eq!(line["message"], "message with attrs");
        assert_eq!(line["attributes"], json!({"key": "value"}));
        assert_eq!(line["transaction_id"], "tx-123");

        let timestamp = line["timestamp"].as_str().unwrap();
        assert!(chrono::DateTime::parse_from_rfc3339(timestamp).is_ok());
        assert_eq!(timestamp.len(), "2025-01-08T10:30:45.123Z".len());
        Ok(())
    }

    #[test]
    fn test_optional_fields_are_omitted() -> Result<()> {
        let dir = tempdir()?;
        let path = dir.path().join("plain.jsonl");
        let driver = JsonFileDriver::new(&path)?;

        let entry = LogEntry::new(LogLevel::Debug, "plain").with_attributes(Attributes::new());
        driver.log(&entry)?;

        let line = &read_lines(&path)[0];
        let object = line.as_object().unwrap();
        assert!(!object.contains_key("attributes"));
        assert!(!object.contains_key("transaction_id"));
        Ok(())
    }

    #[test]
    fn test_min_level_from_options() -> Result<()> {
        let dir = tempdir()?;
        let path = dir.path().join("min_level.jsonl");
        let mut options = DriverOptions::new();
        options.insert("file_path".to_string(), json!(path.to_str().unwrap()));
        options.insert("min_level".to_string(), json!("warning"));

        let driver = JsonFileDriver::from_options(&options)?;
        assert_eq!(driver.min_level(), LogLevel::Warning);

        for level in LogLevel::ALL {
            driver.log(&LogEntry::new(level, format!("{} message", level)))?;
        }

        let levels: Vec<String> = read_lines(&path)
            .iter()
            .map(|line| line["level"].as_str().unwrap().to_string())
            .collect();
        assert_eq!(levels, vec!["WARNING", "ERROR"]);
        Ok(())
    }

    #[test]
    fn test_invalid_min_level_keeps_default() -> Result<()> {
        let dir = tempdir()?;
        let mut options = DriverOptions::new();
        options.insert(
            "file_path".to_string(),
            json!(dir.path().join("x.jsonl").to_str().unwrap()),
        );
        options.insert("min_level".to_string(), json!("invalid"));

        let driver = JsonFileDriver::from_options(&options)?;
        assert_eq!(driver.min_level(), LogLevel::Debug);
        Ok(())
    }

    #[test]
    fn test_missing_file_path() {
        let err = JsonFileDriver::from_options(&DriverOptions::new()).err().unwrap();
        assert!(matches!(err, LoggerError::InvalidConfiguration { .. }));

        let mut options = DriverOptions::new();
        options.insert("file_path".to_string(), json!(""));
        assert!(JsonFileDriver::from_options(&options).is_err());
    }

    #[test]
    fn test_log_after_close() -> Result<()> {
        let dir = tempdir()?;
        let path = dir.path().join("closed.jsonl");
        let driver = JsonFileDriver::new(&path)?;

        driver.close()?;
        driver.close()?;

        let err = driver
            .log(&LogEntry::new(LogLevel::Error, "too late"))
            .unwrap_err();
        assert!(matches!(err, LoggerError::DriverClosed { .. }));
        assert_eq!(fs::read_to_string(&path)?, "");
        Ok(())
    }

    #[test]
    fn test_below_threshold_after_close_is_noop() -> Result<()> {
        let dir = tempdir()?;
        let driver = JsonFileDriver::new(dir.path().join("quiet.jsonl"))?
            .with_min_level(LogLevel::Error);
        driver.close()?;

        driver.log(&LogEntry::new(LogLevel::Info, "filtered"))?;
        Ok(())
    }
}
