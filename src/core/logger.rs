//! Main logger implementation

use super::{
    driver::Driver,
    error::{LoggerError, Result},
    log_entry::{Attributes, LogEntry},
    log_level::LogLevel,
    metrics::LoggerMetrics,
    transaction::Transaction,
};
use std::any::Any;
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::sync::atomic::{AtomicBool, Ordering};

/// Leveled logging operations shared by [`Logger`] and [`Transaction`].
///
/// Only [`LeveledLogger::log`] is required; the per-level helpers forward to
/// it. Every call builds exactly one [`LogEntry`] and hands it to all drivers.
pub trait LeveledLogger {
    /// Log a message at an explicit level with optional attributes
    fn log(
        &self,
        level: LogLevel,
        message: impl Into<String>,
        attributes: Option<Attributes>,
    ) -> Result<()>;

    #[inline]
    fn debug(&self, message: impl Into<String>) -> Result<()> {
        self.log(LogLevel::Debug, message, None)
    }

    #[inline]
    fn info(&self, message: impl Into<String>) -> Result<()> {
        self.log(LogLevel::Info, message, None)
    }

    #[inline]
    fn warning(&self, message: impl Into<String>) -> Result<()> {
        self.log(LogLevel::Warning, message, None)
    }

    #[inline]
    fn error(&self, message: impl Into<String>) -> Result<()> {
        self.log(LogLevel::Error, message, None)
    }

    fn debug_with_attrs(&self, message: impl Into<String>, attributes: Attributes) -> Result<()> {
        self.log(LogLevel::Debug, message, Some(attributes))
    }

    fn info_with_attrs(&self, message: impl Into<String>, attributes: Attributes) -> Result<()> {
        self.log(LogLevel::Info, message, Some(attributes))
    }

    fn warning_with_attrs(
        &self,
        message: impl Into<String>,
        attributes: Attributes,
    ) -> Result<()> {
        self.log(LogLevel::Warning, message, Some(attributes))
    }

    fn error_with_attrs(&self, message: impl Into<String>, attributes: Attributes) -> Result<()> {
        self.log(LogLevel::Error, message, Some(attributes))
    }
}

/// Fans each logging call out to a fixed, ordered list of drivers.
///
/// The logger does no level filtering of its own; each driver applies its
/// own threshold. Dispatch is synchronous on the calling thread and never
/// stops early: every driver sees every entry even if an earlier one failed
/// or panicked.
///
/// A `Logger` is `Send + Sync` and can be shared through `Arc` or scoped
/// threads. It adds no lock of its own, so entries from one thread reach
/// the drivers in call order while entries from different threads
/// interleave in no defined order. Drivers with mutable state serialize it
/// themselves.
pub struct Logger {
    drivers: Vec<Box<dyn Driver>>,
    metrics: LoggerMetrics,
    closed: AtomicBool,
}

impl Logger {
    /// Create a logger that dispatches to `drivers` in the given order
    #[must_use]
    pub fn new(drivers: Vec<Box<dyn Driver>>) -> Self {
        Self {
            drivers,
            metrics: LoggerMetrics::new(),
            closed: AtomicBool::new(false),
        }
    }

    /// Create a builder for Logger
    ///
    /// # Example
    /// ```
    /// use driver_logger_system::prelude::*;
    ///
    /// let logger = Logger::builder()
    ///     .driver(ConsoleDriver::new().with_min_level(LogLevel::Info))
    ///     .build();
    /// assert_eq!(logger.driver_count(), 1);
    /// ```
    #[must_use]
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder::new()
    }

    /// Start a transaction whose entries all carry `id`
    pub fn transaction(&self, id: impl Into<String>) -> Transaction<'_> {
        Transaction::new(id.into(), self)
    }

    pub fn driver_count(&self) -> usize {
        self.drivers.len()
    }

    /// Names of the attached drivers, in dispatch order
    pub fn driver_names(&self) -> Vec<&str> {
        self.drivers.iter().map(|driver| driver.name()).collect()
    }

    pub fn metrics(&self) -> &LoggerMetrics {
        &self.metrics
    }

    pub fn is_closed(&self) -> bool {
        self.closed.load(Ordering::Acquire)
    }

    /// Close every driver, in construction order.
    ///
    /// All drivers are closed even if some fail. Only the first call does
    /// anything; later calls return `Ok(())` without touching the drivers.
    pub fn close(&self) -> Result<()> {
        if self.closed.swap(true, Ordering::AcqRel) {
            return Ok(());
        }

        let failures = self.for_each_driver(|driver| driver.close());
        match LoggerError::collect(failures) {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    /// Hand one entry to every driver, in order
    pub(crate) fn dispatch(&self, entry: &LogEntry) -> Result<()> {
        self.metrics.record_dispatched();

        let failures = self.for_each_driver(|driver| driver.log(entry));
        match LoggerError::collect(failures) {
            Some(err) => {
                self.metrics.record_failed_dispatch();
                Err(err)
            }
            None => Ok(()),
        }
    }

    /// Run `op` against every driver with per-driver panic isolation
    fn for_each_driver<F>(&self, op: F) -> Vec<LoggerError>
    where
        F: Fn(&dyn Driver) -> Result<()>,
    {
        let mut failures = Vec::new();

        for (idx, driver) in self.drivers.iter().enumerate() {
            let result = catch_unwind(AssertUnwindSafe(|| op(driver.as_ref())));

            match result {
                Ok(Ok(())) => {}
                Ok(Err(e)) => {
                    self.metrics.record_driver_failure();
                    failures.push(e);
                }
                Err(panic_info) => {
                    self.metrics.record_driver_failure();
                    self.metrics.record_driver_panic();
                    failures.push(LoggerError::DriverPanicked {
                        index: idx,
                        message: panic_message(panic_info.as_ref()),
                    });
                }
            }
        }

        failures
    }
}

impl LeveledLogger for Logger {
    fn log(
        &self,
        level: LogLevel,
        message: impl Into<String>,
        attributes: Option<Attributes>,
    ) -> Result<()> {
        let mut entry = LogEntry::new(level, message);
        entry.attributes = attributes;
        self.dispatch(&entry)
    }
}

fn panic_message(panic_info: &(dyn Any + Send)) -> String {
    if let Some(s) = panic_info.downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = panic_info.downcast_ref::<String>() {
        s.clone()
    } else {
        "Unknown panic".to_string()
    }
}

/// Builder for constructing a Logger with a fluent API
///
/// # Example
/// ```
/// use driver_logger_system::prelude::*;
///
/// let logger = Logger::builder()
///     .driver(ConsoleDriver::new())
///     .build();
/// logger.info("ready").unwrap();
/// ```
#[derive(Default)]
pub struct LoggerBuilder {
    drivers: Vec<Box<dyn Driver>>,
}

impl LoggerBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a driver; drivers receive entries in the order they are added
    #[must_use = "builder methods return a new value"]
    pub fn driver<D: Driver + 'static>(mut self, driver: D) -> Self {
        self.drivers.push(Box::new(driver));
        self
    }

    /// Append an already boxed driver, e.g. one built through the registry
    #[must_use = "builder methods return a new value"]
    pub fn boxed_driver(mut self, driver: Box<dyn Driver>) -> Self {
        self.drivers.push(driver);
        self
    }

    pub fn build(self) -> Logger {
        Logger::new(self.drivers)
    }
}
