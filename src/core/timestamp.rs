//! Timestamp formatting utilities
//!
//! Provides the timestamp formats drivers render entries with: RFC 3339 at
//! second precision, ISO 8601 with milliseconds, and custom strftime strings.

use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::Write;

/// Timestamp format options
///
/// # Examples
///
/// ```
/// use driver_logger_system::core::TimestampFormat;
/// use chrono::Utc;
///
/// let format = TimestampFormat::Iso8601Millis;
/// let timestamp = format.format(&Utc::now());
/// assert!(timestamp.ends_with('Z'));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimestampFormat {
    /// RFC 3339 at second precision: `2025-01-08T10:30:45Z`
    Rfc3339,

    /// ISO 8601 with milliseconds and zone designator: `2025-01-08T10:30:45.123Z`
    ///
    /// Used by the file drivers.
    #[default]
    Iso8601Millis,

    /// Custom strftime format, validated by [`TimestampFormat::parse_custom`]
    Custom(String),
}

impl TimestampFormat {
    /// Build a custom format, rejecting strings chrono cannot render.
    ///
    /// ```
    /// use driver_logger_system::core::TimestampFormat;
    ///
    /// assert!(TimestampFormat::parse_custom("%d/%b/%Y:%H:%M:%S %z").is_some());
    /// assert!(TimestampFormat::parse_custom("%Y-%").is_none());
    /// ```
    pub fn parse_custom(format_str: &str) -> Option<Self> {
        if format_str.is_empty() {
            return None;
        }
        let invalid = StrftimeItems::new(format_str).any(|item| matches!(item, Item::Error));
        if invalid {
            None
        } else {
            Some(TimestampFormat::Custom(format_str.to_string()))
        }
    }

    #[must_use]
    pub fn format(&self, datetime: &DateTime<Utc>) -> String {
        match self {
            TimestampFormat::Rfc3339 => datetime.to_rfc3339_opts(SecondsFormat::Secs, true),
            TimestampFormat::Iso8601Millis => {
                datetime.to_rfc3339_opts(SecondsFormat::Millis, true)
            }
            TimestampFormat::Custom(format_str) => {
                let mut out = String::new();
                // A format chrono refuses to render falls back to RFC 3339
                if write!(out, "{}", datetime.format(format_str)).is_err() {
                    return datetime.to_rfc3339_opts(SecondsFormat::Secs, true);
                }
                out
            }
        }
    }
}
