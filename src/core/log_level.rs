//! Log level definitions

use super::error::LoggerError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[derive(Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum LogLevel {
    #[default]
    Debug = 0,
    Info = 1,
    Warning = 2,
    Error = 3,
}

impl LogLevel {
    /// All levels, lowest severity first
    pub const ALL: [LogLevel; 4] = [
        LogLevel::Debug,
        LogLevel::Info,
        LogLevel::Warning,
        LogLevel::Error,
    ];

    pub fn to_str(&self) -> &'static str {
        match self {
            LogLevel::Debug => "DEBUG",
            LogLevel::Info => "INFO",
            LogLevel::Warning => "WARNING",
            LogLevel::Error => "ERROR",
        }
    }

    pub fn from_u8(value: u8) -> Option<Self> {
        match value {
            0 => Some(LogLevel::Debug),
            1 => Some(LogLevel::Info),
            2 => Some(LogLevel::Warning),
            3 => Some(LogLevel::Error),
            _ => None,
        }
    }

    /// Format a raw numeric level.
    ///
    /// Out-of-range values render as `UNKNOWN(<value>)`. That form is
    /// diagnostic only and does not parse back.
    pub fn format_raw(value: u8) -> String {
        match Self::from_u8(value) {
            Some(level) => level.to_str().to_string(),
            None => format!("UNKNOWN({})", value),
        }
    }

    #[cfg(feature = "console")]
    pub fn color_code(&self) -> colored::Color {
        use colored::Color::*;
        match self {
            LogLevel::Debug => Blue,
            LogLevel::Info => Green,
            LogLevel::Warning => Yellow,
            LogLevel::Error => Red,
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_str())
    }
}

impl FromStr for LogLevel {
    type Err = LoggerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "DEBUG" => Ok(LogLevel::Debug),
            "INFO" => Ok(LogLevel::Info),
            "WARNING" | "WARN" => Ok(LogLevel::Warning),
            "ERROR" | "ERR" => Ok(LogLevel::Error),
            _ => Err(LoggerError::InvalidLevel(s.to_string())),
        }
    }
}
