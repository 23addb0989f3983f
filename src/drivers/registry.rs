//! Name-keyed driver constructor registry
//!
//! Lets configuration build drivers by name without knowing their concrete
//! types. The table lives for the whole process; the built-in drivers are
//! registered the first time it is touched, and registrations are never
//! removed.

use crate::core::{Driver, LogLevel, LoggerError, Result};
use parking_lot::RwLock;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::{Arc, OnceLock};

/// Untyped driver options, keyed by option name
pub type DriverOptions = HashMap<String, Value>;

/// Builds a driver from its options
pub type DriverConstructor =
    Arc<dyn Fn(&DriverOptions) -> Result<Box<dyn Driver>> + Send + Sync>;

pub const MIN_LEVEL_OPTION: &str = "min_level";
pub const FILE_PATH_OPTION: &str = "file_path";
pub const TIME_FORMAT_OPTION: &str = "time_format";
pub const COLORIZED_OPTION: &str = "colorized";

static REGISTRY: OnceLock<RwLock<HashMap<String, DriverConstructor>>> = OnceLock::new();

fn registry() -> &'static RwLock<HashMap<String, DriverConstructor>> {
    REGISTRY.get_or_init(|| {
        let mut table = HashMap::new();
        register_builtin(&mut table);
        RwLock::new(table)
    })
}

#[allow(unused_variables)]
fn register_builtin(table: &mut HashMap<String, DriverConstructor>) {
    #[cfg(feature = "console")]
    {
        use super::console::{ConsoleDriver, CONSOLE_DRIVER_NAME};
        table.insert(
            CONSOLE_DRIVER_NAME.to_string(),
            Arc::new(|options: &DriverOptions| boxed(ConsoleDriver::from_options(options))),
        );
    }

    #[cfg(feature = "file")]
    {
        use super::json_file::{JsonFileDriver, JSON_FILE_DRIVER_NAME};
        use super::text_file::{TextFileDriver, TEXT_FILE_DRIVER_NAME};
        table.insert(
            JSON_FILE_DRIVER_NAME.to_string(),
            Arc::new(|options: &DriverOptions| boxed(JsonFileDriver::from_options(options))),
        );
        table.insert(
            TEXT_FILE_DRIVER_NAME.to_string(),
            Arc::new(|options: &DriverOptions| boxed(TextFileDriver::from_options(options))),
        );
    }
}

#[cfg(any(feature = "console", feature = "file"))]
fn boxed<D: Driver + 'static>(driver: Result<D>) -> Result<Box<dyn Driver>> {
    driver.map(|d| Box::new(d) as Box<dyn Driver>)
}

/// Register a constructor under `name`.
///
/// A later registration under the same name replaces the earlier one.
///
/// # Example
/// ```
/// use driver_logger_system::core::{Driver, LogEntry, Result};
/// use driver_logger_system::drivers::registry::{self, DriverOptions};
///
/// struct NullDriver;
///
/// impl Driver for NullDriver {
///     fn log(&self, _entry: &LogEntry) -> Result<()> { Ok(()) }
///     fn close(&self) -> Result<()> { Ok(()) }
///     fn name(&self) -> &str { "null" }
/// }
///
/// registry::register("null", |_options: &DriverOptions| {
///     Ok(Box::new(NullDriver) as Box<dyn Driver>)
/// });
/// let driver = registry::create("null", &DriverOptions::new()).unwrap();
/// assert_eq!(driver.name(), "null");
/// ```
pub fn register<F>(name: impl Into<String>, constructor: F)
where
    F: Fn(&DriverOptions) -> Result<Box<dyn Driver>> + Send + Sync + 'static,
{
    registry().write().insert(name.into(), Arc::new(constructor));
}

/// Build the driver registered under `name`.
///
/// Unknown names fail with [`LoggerError::DriverNotFound`]; anything the
/// constructor returns is passed through unchanged.
pub fn create(name: &str, options: &DriverOptions) -> Result<Box<dyn Driver>> {
    // Clone the constructor out so it runs without the table lock held
    let constructor = registry()
        .read()
        .get(name)
        .cloned()
        .ok_or_else(|| LoggerError::DriverNotFound(name.to_string()))?;

    constructor(options)
}

pub fn is_registered(name: &str) -> bool {
    registry().read().contains_key(name)
}

/// All registered driver names, sorted
pub fn registered_names() -> Vec<String> {
    let mut names: Vec<String> = registry().read().keys().cloned().collect();
    names.sort();
    names
}

/// String option; values of any other type are treated as absent
pub fn string_option<'a>(options: &'a DriverOptions, key: &str) -> Option<&'a str> {
    options.get(key).and_then(Value::as_str)
}

/// Boolean option; values of any other type are treated as absent
pub fn bool_option(options: &DriverOptions, key: &str) -> Option<bool> {
    options.get(key).and_then(Value::as_bool)
}

/// `min_level` option; missing or unparseable values yield `None` so the
/// driver keeps its default threshold
pub fn min_level_option(options: &DriverOptions) -> Option<LogLevel> {
    string_option(options, MIN_LEVEL_OPTION).and_then(|level| level.parse().ok())
}

/// Non-empty string option the driver cannot be built without
pub fn required_string_option<'a>(
    options: &'a DriverOptions,
    key: &str,
    component: &str,
) -> Result<&'a str> {
    match string_option(options, key) {
        Some(value) if !value.is_empty() => Ok(value),
        _ => Err(LoggerError::config(component, format!("{} is required", key))),
    }
}
