//! File logging example
//!
//! Demonstrates logging to the console, a JSON lines file and a plain text
//! file at the same time, each with its own threshold.
//!
//! Run with: cargo run --example file_logging

use driver_logger_system::prelude::*;

fn main() -> Result<()> {
    println!("=== Driver Logger System - File Logging Example ===\n");

    let logger = Logger::builder()
        .driver(ConsoleDriver::new().with_min_level(LogLevel::Info))
        .driver(JsonFileDriver::new("logs/application.jsonl")?)
        .driver(
            TextFileDriver::new("logs/application.log")?
                .with_min_level(LogLevel::Warning)
                .with_timestamp_format(TimestampFormat::Custom("%Y-%m-%d %H:%M:%S".to_string())),
        )
        .build();

    println!("1. Logging to console and files:");
    logger.info("Application started")?;
    logger.debug("Loading configuration...")?;
    logger.warning("Using default settings for some options")?;
    logger.error("Failed to load optional plugin")?;

    println!("\n2. Performing some operations:");
    for i in 1..=5 {
        let tx = logger.transaction(format!("job-{}", i));
        tx.info(format!("Processing item {}/5", i))?;
        if i == 3 {
            let mut attrs = Attributes::new();
            attrs.insert("elapsed_ms".to_string(), "1250".to_string());
            tx.warning_with_attrs("Item took longer than expected", attrs)?;
        }
    }

    logger.info("All operations completed")?;

    let metrics = logger.metrics();
    println!(
        "\nDispatched {} entries, {} failed",
        metrics.total_dispatched(),
        metrics.failed_dispatches()
    );

    logger.close()?;

    println!("\n=== Example completed successfully! ===");
    println!("Check 'logs/application.jsonl' and 'logs/application.log'");

    Ok(())
}
