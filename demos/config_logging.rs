//! Configuration-driven logging example
//!
//! Builds a logger from a JSON configuration through the driver registry,
//! including a custom driver registered at startup.
//!
//! Run with: cargo run --example config_logging

use driver_logger_system::drivers::registry;
use driver_logger_system::prelude::*;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Counts entries instead of writing them anywhere
struct CountingDriver {
    seen: AtomicUsize,
}

impl Driver for CountingDriver {
    fn log(&self, _entry: &LogEntry) -> Result<()> {
        self.seen.fetch_add(1, Ordering::Relaxed);
        Ok(())
    }

    fn close(&self) -> Result<()> {
        println!("counting driver saw {} entries", self.seen.load(Ordering::Relaxed));
        Ok(())
    }

    fn name(&self) -> &str {
        "counting"
    }
}

const CONFIG: &str = r#"{
    "default_level": "info",
    "drivers": [
        { "type": "console", "min_level": "debug", "options": { "colorized": true } },
        { "type": "text_file", "options": { "file_path": "logs/config_demo.log" } },
        { "type": "counting" }
    ]
}"#;

fn main() -> Result<()> {
    println!("=== Driver Logger System - Config Logging Example ===\n");

    registry::register("counting", |_options: &DriverOptions| {
        Ok(Box::new(CountingDriver {
            seen: AtomicUsize::new(0),
        }) as Box<dyn Driver>)
    });
    println!("Registered drivers: {:?}\n", registry::registered_names());

    let config = LoggingConfig::from_json_str(CONFIG)?;
    config.save_to_file("logs/logging.json")?;

    let logger = config.build_logger()?;
    println!("Logger drivers: {:?}\n", logger.driver_names());

    logger.debug("Only the console shows this")?;
    logger.info("Every driver sees this")?;
    logger.transaction("batch-7").warning("Batch retried")?;

    logger.close()?;

    println!("\n=== Example completed successfully! ===");
    println!("Configuration written to 'logs/logging.json'");

    Ok(())
}
