//! Core logger types and traits

pub mod driver;
pub mod error;
pub mod log_entry;
pub mod log_level;
pub mod logger;
pub mod metrics;
pub mod timestamp;
pub mod transaction;

pub use driver::Driver;
pub use error::{LoggerError, Result};
pub use log_entry::{Attributes, LogEntry};
pub use log_level::LogLevel;
pub use logger::{LeveledLogger, Logger, LoggerBuilder};
pub use metrics::LoggerMetrics;
pub use timestamp::TimestampFormat;
pub use transaction::Transaction;
