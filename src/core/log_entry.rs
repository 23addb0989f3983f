//! Log entry structure

use super::log_level::LogLevel;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Key-value metadata attached to a single entry.
///
/// Keys iterate in sorted order so every driver renders them the same way.
pub type Attributes = BTreeMap<String, String>;

/// One log record, built once per logging call just before dispatch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogEntry {
    pub timestamp: DateTime<Utc>,
    pub level: LogLevel,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attributes: Option<Attributes>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transaction_id: Option<String>,
}

impl LogEntry {
    pub fn new(level: LogLevel, message: impl Into<String>) -> Self {
        Self {
            timestamp: Utc::now(),
            level,
            message: message.into(),
            attributes: None,
            transaction_id: None,
        }
    }

    pub fn with_attributes(mut self, attributes: Attributes) -> Self {
        self.attributes = Some(attributes);
        self
    }

    /// An empty identifier means "no transaction" and is stored as `None`.
    pub fn with_transaction_id(mut self, transaction_id: impl Into<String>) -> Self {
        let id = transaction_id.into();
        self.transaction_id = if id.is_empty() { None } else { Some(id) };
        self
    }

    /// Attributes worth rendering; `None` when absent or empty.
    pub fn attributes(&self) -> Option<&Attributes> {
        self.attributes.as_ref().filter(|attrs| !attrs.is_empty())
    }

    pub fn transaction_id(&self) -> Option<&str> {
        self.transaction_id.as_deref()
    }
}

/// Escape control characters so one entry always renders as one line.
pub(crate) fn sanitize(text: &str) -> String {
    text.replace('\n', "\\n")
        .replace('\r', "\\r")
        .replace('\t', "\\t")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_transaction_id_means_none() {
        let entry = LogEntry::new(LogLevel::Info, "msg").with_transaction_id("");
        assert_eq!(entry.transaction_id(), None);

        let entry = LogEntry::new(LogLevel::Info, "msg").with_transaction_id("tx-1");
        assert_eq!(entry.transaction_id(), Some("tx-1"));
    }

    #[test]
    fn test_empty_attributes_are_hidden() {
        let entry = LogEntry::new(LogLevel::Info, "msg").with_attributes(Attributes::new());
        assert!(entry.attributes().is_none());
    }

    #[test]
    fn test_sanitize() {
        assert_eq!(sanitize("a\nb\tc\rd"), "a\\nb\\tc\\rd");
    }
}
