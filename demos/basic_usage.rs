//! Basic logger usage example
//!
//! Demonstrates console logging at every level, per-driver thresholds,
//! attributes and transactions.
//!
//! Run with: cargo run --example basic_usage

use driver_logger_system::prelude::*;
use driver_logger_system::info;

fn main() -> Result<()> {
    println!("=== Driver Logger System - Basic Usage Example ===\n");

    let logger = Logger::builder().driver(ConsoleDriver::new()).build();

    println!("1. Logging at different levels:");
    logger.debug("This is a debug message")?;
    logger.info("This is an info message")?;
    logger.warning("This is a warning message")?;
    logger.error("This is an error message (stderr)")?;

    println!("\n2. A driver with a higher threshold:");
    let quiet = Logger::builder()
        .driver(ConsoleDriver::new().with_min_level(LogLevel::Warning))
        .build();
    quiet.debug("Debug message (hidden)")?;
    quiet.info("Info message (hidden)")?;
    quiet.warning("Warning message (visible)")?;

    println!("\n3. Attributes and formatting macros:");
    let mut attrs = Attributes::new();
    attrs.insert("user".to_string(), "alice".to_string());
    attrs.insert("action".to_string(), "login".to_string());
    logger.info_with_attrs("User signed in", attrs)?;
    info!(logger, "Listening on port {}", 8080)?;

    println!("\n4. Transactions:");
    let tx = logger.transaction("req-1001");
    tx.info("Request received")?;
    tx.warning("Cache miss")?;
    tx.info("Request completed")?;

    logger.close()?;
    quiet.close()?;

    println!("\n=== Example completed successfully! ===");

    Ok(())
}
