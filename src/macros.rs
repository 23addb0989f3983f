//! Logging macros for ergonomic log message formatting.
//!
//! Each macro formats its arguments like `format!` and logs through
//! [`LeveledLogger::log`](crate::core::LeveledLogger::log), so it works on a
//! [`Logger`](crate::core::Logger) and a
//! [`Transaction`](crate::core::Transaction) alike. The expression evaluates
//! to the call's `Result<()>`.
//!
//! # Examples
//!
//! ```
//! use driver_logger_system::prelude::*;
//! use driver_logger_system::info;
//!
//! let logger = Logger::builder().build();
//!
//! // Basic logging
//! info!(logger, "Server started").unwrap();
//!
//! // With format arguments
//! let port = 8080;
//! info!(logger, "Server listening on port {}", port).unwrap();
//!
//! // Inside a transaction
//! let tx = logger.transaction("req-7");
//! info!(tx, "User {} performed action: {}", 42, "login").unwrap();
//! ```

/// Log a formatted message at an explicit level.
///
/// # Examples
///
/// ```
/// # use driver_logger_system::prelude::*;
/// # let logger = Logger::builder().build();
/// use driver_logger_system::log;
/// log!(logger, LogLevel::Info, "Simple message").unwrap();
/// log!(logger, LogLevel::Error, "Error code: {}", 500).unwrap();
/// ```
#[macro_export]
macro_rules! log {
    ($logger:expr, $level:expr, $($arg:tt)+) => {
        {
            use $crate::core::LeveledLogger as _;
            $logger.log($level, format!($($arg)+), None)
        }
    };
}

/// Log a debug-level message.
///
/// ```
/// # use driver_logger_system::prelude::*;
/// # let logger = Logger::builder().build();
/// use driver_logger_system::debug;
/// debug!(logger, "Counter value: {}", 10).unwrap();
/// ```
#[macro_export]
macro_rules! debug {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::core::LogLevel::Debug, $($arg)+)
    };
}

/// Log an info-level message.
#[macro_export]
macro_rules! info {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::core::LogLevel::Info, $($arg)+)
    };
}

/// Log a warning-level message.
///
/// ```
/// # use driver_logger_system::prelude::*;
/// # let logger = Logger::builder().build();
/// use driver_logger_system::warning;
/// warning!(logger, "Retry attempt {} of {}", 3, 5).unwrap();
/// ```
#[macro_export]
macro_rules! warning {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::core::LogLevel::Warning, $($arg)+)
    };
}

/// Log an error-level message.
#[macro_export]
macro_rules! error {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::core::LogLevel::Error, $($arg)+)
    };
}
