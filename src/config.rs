//! Configuration-driven logger construction
//!
//! A [`LoggingConfig`] lists drivers by registry name together with their
//! options, and builds a [`Logger`] through the driver registry. Documents
//! are YAML or JSON:
//!
//! ```yaml
//! default_level: info
//! drivers:
//!   - type: console
//!     min_level: info
//!   - type: text_file
//!     min_level: debug
//!     options:
//!       file_path: logs/app.log
//! ```
//!
//! ```json
//! {
//!   "default_level": "info",
//!   "drivers": [
//!     { "type": "console", "min_level": "info" },
//!     { "type": "text_file", "min_level": "debug",
//!       "options": { "file_path": "logs/app.log" } }
//!   ]
//! }
//! ```

use crate::core::{Driver, Logger, LoggerError, Result};
use crate::drivers::registry::{self, DriverOptions, MIN_LEVEL_OPTION};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};

/// Environment variable naming the configuration file for [`LoggingConfig::load_default`]
pub const CONFIG_PATH_ENV: &str = "LOGGING_CONFIG_PATH";

/// Locations searched, in order, when [`CONFIG_PATH_ENV`] is unset
pub const DEFAULT_CONFIG_LOCATIONS: [&str; 2] = ["config/logging.json", "/etc/logging/config.json"];

/// Logger configuration.
///
/// `default_level` is the threshold for every driver entry that sets no
/// `min_level` of its own, either on the entry or inside its `options`.
/// Without it such drivers keep their built-in default of debug.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Threshold for drivers that set no `min_level` of their own
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_level: Option<String>,

    #[serde(default)]
    pub drivers: Vec<DriverConfig>,
}

/// One driver entry: registry name, threshold and driver-specific options
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DriverConfig {
    #[serde(rename = "type")]
    pub driver_type: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_level: Option<String>,

    #[serde(default, skip_serializing_if = "DriverOptions::is_empty")]
    pub options: DriverOptions,
}

impl DriverConfig {
    pub fn new(driver_type: impl Into<String>) -> Self {
        Self {
            driver_type: driver_type.into(),
            min_level: None,
            options: DriverOptions::new(),
        }
    }

    #[must_use]
    pub fn with_min_level(mut self, level: impl Into<String>) -> Self {
        self.min_level = Some(level.into());
        self
    }

    #[must_use]
    pub fn with_option(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.options.insert(key.into(), value.into());
        self
    }

    /// Options handed to the constructor.
    ///
    /// An explicit `min_level` inside `options` wins over the entry's
    /// `min_level`, which wins over the config-wide default.
    pub fn resolved_options(&self, default_level: Option<&str>) -> DriverOptions {
        let mut options = self.options.clone();
        if !options.contains_key(MIN_LEVEL_OPTION) {
            let level = self
                .min_level
                .as_deref()
                .filter(|level| !level.is_empty())
                .or(default_level);
            if let Some(level) = level {
                options.insert(MIN_LEVEL_OPTION.to_string(), Value::from(level));
            }
        }
        options
    }

    fn create(&self, default_level: Option<&str>) -> Result<Box<dyn Driver>> {
        registry::create(&self.driver_type, &self.resolved_options(default_level)).map_err(
            |source| LoggerError::DriverCreation {
                driver: self.driver_type.clone(),
                source: Box::new(source),
            },
        )
    }
}

impl LoggingConfig {
    /// A single console driver logging everything at debug and above
    pub fn default_console() -> Self {
        Self {
            default_level: Some("info".to_string()),
            drivers: vec![DriverConfig::new("console").with_min_level("debug")],
        }
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        serde_json::from_str(json)
            .map_err(|e| LoggerError::config("logging config", format!("invalid document: {}", e)))
    }

    /// Parse a YAML document. JSON is valid YAML and parses here too.
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        serde_yaml::from_str(yaml)
            .map_err(|e| LoggerError::config("logging config", format!("invalid document: {}", e)))
    }

    /// Read a configuration file.
    ///
    /// A `.json` file is parsed as JSON; anything else as YAML, which also
    /// accepts JSON content.
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            LoggerError::io_operation(
                "reading logging config",
                format!("cannot read '{}'", path.display()),
                e,
            )
        })?;

        match Format::of(path) {
            Format::Json => Self::from_json_str(&content),
            Format::Yaml => Self::from_yaml_str(&content),
        }
    }

    /// Load from `$LOGGING_CONFIG_PATH`, else the first existing default
    /// location, else [`LoggingConfig::default_console`].
    pub fn load_default() -> Result<Self> {
        if let Some(path) = std::env::var_os(CONFIG_PATH_ENV).filter(|p| !p.is_empty()) {
            return Self::load_from_file(PathBuf::from(path));
        }

        for location in DEFAULT_CONFIG_LOCATIONS {
            if Path::new(location).is_file() {
                return Self::load_from_file(location);
            }
        }

        Ok(Self::default_console())
    }

    /// Write the configuration, creating parent directories as needed.
    ///
    /// `.yaml` and `.yml` paths get YAML; everything else pretty-printed JSON.
    pub fn save_to_file(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        if let Some(dir) = path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
            fs::create_dir_all(dir).map_err(|e| {
                LoggerError::io_operation(
                    "creating config directory",
                    format!("cannot create '{}'", dir.display()),
                    e,
                )
            })?;
        }

        let document = if has_yaml_extension(path) {
            serde_yaml::to_string(self)?
        } else {
            let mut json = serde_json::to_string_pretty(self)?;
            json.push('\n');
            json
        };
        fs::write(path, document).map_err(|e| {
            LoggerError::io_operation(
                "writing logging config",
                format!("cannot write '{}'", path.display()),
                e,
            )
        })
    }

    /// Build every configured driver through the registry, in order.
    ///
    /// On the first failure the drivers built so far are closed and the
    /// error is returned as [`LoggerError::DriverCreation`].
    pub fn build_logger(&self) -> Result<Logger> {
        let default_level = self.default_level.as_deref();
        let mut drivers: Vec<Box<dyn Driver>> = Vec::with_capacity(self.drivers.len());

        for driver_config in &self.drivers {
            match driver_config.create(default_level) {
                Ok(driver) => drivers.push(driver),
                Err(err) => {
                    for built in &drivers {
                        if let Err(close_err) = built.close() {
                            eprintln!(
                                "[LOGGER ERROR] Failed to close driver '{}' after configuration error: {}",
                                built.name(),
                                close_err
                            );
                        }
                    }
                    return Err(err);
                }
            }
        }

        Ok(Logger::new(drivers))
    }
}

enum Format {
    Json,
    Yaml,
}

impl Format {
    fn of(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => Format::Json,
            _ => Format::Yaml,
        }
    }
}

fn has_yaml_extension(path: &Path) -> bool {
    matches!(
        path.extension().and_then(|ext| ext.to_str()),
        Some(ext) if ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml")
    )
}
