//! Console driver implementation

use super::registry::{self, DriverOptions, COLORIZED_OPTION, TIME_FORMAT_OPTION};
use crate::core::log_entry::sanitize;
use crate::core::{Driver, LogEntry, LogLevel, LoggerError, Result, TimestampFormat};
use colored::Colorize;
use parking_lot::Mutex;
use std::io::{self, Write};

/// Registry name of the console driver
pub const CONSOLE_DRIVER_NAME: &str = "console";

/// Destination for one of the console driver's two channels
enum Stream {
    Stdout,
    Stderr,
    Writer(Mutex<Box<dyn Write + Send>>),
}

impl Stream {
    fn write_line(&self, line: &str) -> io::Result<()> {
        match self {
            Stream::Stdout => writeln!(io::stdout().lock(), "{}", line),
            Stream::Stderr => writeln!(io::stderr().lock(), "{}", line),
            Stream::Writer(writer) => writeln!(writer.lock(), "{}", line),
        }
    }

    fn flush(&self) -> io::Result<()> {
        match self {
            Stream::Stdout => io::stdout().flush(),
            Stream::Stderr => io::stderr().flush(),
            Stream::Writer(writer) => writer.lock().flush(),
        }
    }
}

/// Writes entries to the terminal.
///
/// `Error` entries go to stderr, everything else to stdout. Lines look like
///
/// ```text
/// <timestamp> [<LEVEL>] (tx: <id>) [k=v, ...] <message>
/// ```
///
/// with the transaction and attribute parts present only when set.
pub struct ConsoleDriver {
    min_level: LogLevel,
    use_colors: bool,
    timestamp_format: TimestampFormat,
    stdout: Stream,
    stderr: Stream,
}

impl ConsoleDriver {
    pub fn new() -> Self {
        Self {
            min_level: LogLevel::Debug,
            use_colors: true,
            timestamp_format: TimestampFormat::Rfc3339,
            stdout: Stream::Stdout,
            stderr: Stream::Stderr,
        }
    }

    /// Build from registry options: `min_level`, `time_format` (strftime)
    /// and `colorized`. Invalid values are ignored and never fail.
    pub fn from_options(options: &DriverOptions) -> Result<Self> {
        let mut driver = Self::new();

        if let Some(level) = registry::min_level_option(options) {
            driver.min_level = level;
        }

        if let Some(format) = registry::string_option(options, TIME_FORMAT_OPTION)
            .and_then(TimestampFormat::parse_custom)
        {
            driver.timestamp_format = format;
        }

        if let Some(colorized) = registry::bool_option(options, COLORIZED_OPTION) {
            driver.use_colors = colorized;
        }

        Ok(driver)
    }

    #[must_use]
    pub fn with_min_level(mut self, level: LogLevel) -> Self {
        self.min_level = level;
        self
    }

    #[must_use]
    pub fn with_colors(mut self, use_colors: bool) -> Self {
        self.use_colors = use_colors;
        self
    }

    /// Set the timestamp format for this driver
    ///
    /// # Examples
    ///
    /// ```
    /// use driver_logger_system::drivers::ConsoleDriver;
    /// use driver_logger_system::TimestampFormat;
    ///
    /// let driver = ConsoleDriver::new()
    ///     .with_timestamp_format(TimestampFormat::Iso8601Millis);
    /// ```
    #[must_use]
    pub fn with_timestamp_format(mut self, format: TimestampFormat) -> Self {
        self.timestamp_format = format;
        self
    }

    /// Replace stdout and stderr with arbitrary writers
    #[must_use]
    pub fn with_writers<O, E>(mut self, stdout: O, stderr: E) -> Self
    where
        O: Write + Send + 'static,
        E: Write + Send + 'static,
    {
        self.stdout = Stream::Writer(Mutex::new(Box::new(stdout) as Box<dyn Write + Send>));
        self.stderr = Stream::Writer(Mutex::new(Box::new(stderr) as Box<dyn Write + Send>));
        self
    }

    pub fn min_level(&self) -> LogLevel {
        self.min_level
    }

    fn format_line(&self, entry: &LogEntry) -> String {
        let level_str = if self.use_colors {
            entry
                .level
                .to_str()
                .color(entry.level.color_code())
                .to_string()
        } else {
            entry.level.to_str().to_string()
        };

        let mut line = format!(
            "{} [{}]",
            self.timestamp_format.format(&entry.timestamp),
            level_str
        );

        if let Some(id) = entry.transaction_id() {
            line.push_str(&format!(" (tx: {})", sanitize(id)));
        }

        if let Some(attrs) = entry.attributes() {
            let pairs: Vec<String> = attrs
                .iter()
                .map(|(k, v)| format!("{}={}", sanitize(k), sanitize(v)))
                .collect();
            line.push_str(&format!(" [{}]", pairs.join(", ")));
        }

        line.push(' ');
        line.push_str(&sanitize(&entry.message));
        line
    }
}

impl Default for ConsoleDriver {
    fn default() -> Self {
        Self::new()
    }
}

impl Driver for ConsoleDriver {
    fn log(&self, entry: &LogEntry) -> Result<()> {
        if entry.level < self.min_level {
            return Ok(());
        }

        let line = self.format_line(entry);

        // Route Error to stderr, others to stdout
        let (stream, target) = if entry.level >= LogLevel::Error {
            (&self.stderr, "stderr")
        } else {
            (&self.stdout, "stdout")
        };

        stream.write_line(&line).map_err(|e| {
            LoggerError::io_operation("writing log entry", format!("cannot write to {}", target), e)
        })
    }

    fn close(&self) -> Result<()> {
        // Flush both streams since we write to both
        self.stdout.flush()?;
        self.stderr.flush()?;
        Ok(())
    }

    fn name(&self) -> &str {
        CONSOLE_DRIVER_NAME
    }
}
