//! # Driver Logger System
//!
//! A structured logging core that fans each entry out to a set of pluggable
//! output drivers.
//!
//! ## Features
//!
//! - **Pluggable Drivers**: Console, JSON file, plain text file, or your own
//!   type implementing [`Driver`]
//! - **Driver Registry**: Build drivers by name from untyped options
//! - **Transactions**: Tag a group of entries with a correlation id
//! - **Error Aggregation**: One failing driver never silences the others
//!
//! ## Example
//!
//! ```
//! use driver_logger_system::prelude::*;
//!
//! # fn main() -> Result<()> {
//! let dir = tempfile::tempdir()?;
//! let logger = Logger::builder()
//!     .driver(JsonFileDriver::new(dir.path().join("app.jsonl"))?.with_min_level(LogLevel::Info))
//!     .build();
//!
//! logger.info("service started")?;
//!
//! let tx = logger.transaction("req-42");
//! tx.warning("slow upstream")?;
//!
//! logger.close()?;
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod core;
pub mod drivers;
pub mod macros;

pub mod prelude {
    pub use crate::config::{DriverConfig, LoggingConfig};
    pub use crate::core::{
        Attributes, Driver, LeveledLogger, LogEntry, LogLevel, Logger, LoggerBuilder, LoggerError,
        LoggerMetrics, Result, TimestampFormat, Transaction,
    };
    pub use crate::drivers::{DriverConstructor, DriverOptions};

    #[cfg(feature = "console")]
    pub use crate::drivers::ConsoleDriver;
    #[cfg(feature = "file")]
    pub use crate::drivers::{JsonFileDriver, TextFileDriver};
}

pub use config::{DriverConfig, LoggingConfig};
pub use core::{
    Attributes, Driver, LeveledLogger, LogEntry, LogLevel, Logger, LoggerBuilder, LoggerError,
    LoggerMetrics, Result, TimestampFormat, Transaction,
};

#[cfg(feature = "console")]
pub use drivers::ConsoleDriver;
#[cfg(feature = "file")]
pub use drivers::{JsonFileDriver, TextFileDriver};
