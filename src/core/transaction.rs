//! Transaction-scoped logging

use super::{
    error::Result,
    log_entry::{Attributes, LogEntry},
    log_level::LogLevel,
    logger::{LeveledLogger, Logger},
};

/// A view over a [`Logger`] that tags every entry with one identifier.
///
/// A transaction owns nothing: it borrows the logger's drivers and has no
/// close operation. Any number of transactions may be live at once; their
/// entries are told apart only by the `transaction_id` field.
///
/// # Example
/// ```
/// use driver_logger_system::prelude::*;
///
/// let logger = Logger::builder().build();
/// let tx = logger.transaction("request-123");
/// tx.info("Processing request").unwrap();
/// assert_eq!(tx.id(), "request-123");
/// ```
#[derive(Clone)]
pub struct Transaction<'a> {
    id: String,
    logger: &'a Logger,
}

impl<'a> Transaction<'a> {
    pub(crate) fn new(id: String, logger: &'a Logger) -> Self {
        Self { id, logger }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn logger(&self) -> &'a Logger {
        self.logger
    }
}

impl LeveledLogger for Transaction<'_> {
    fn log(
        &self,
        level: LogLevel,
        message: impl Into<String>,
        attributes: Option<Attributes>,
    ) -> Result<()> {
        let mut entry = LogEntry::new(level, message).with_transaction_id(self.id.as_str());
        entry.attributes = attributes;
        self.logger.dispatch(&entry)
    }
}
