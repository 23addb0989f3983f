//! Error types for the logger system

pub type Result<T> = std::result::Result<T, LoggerError>;

#[derive(Debug, thiserror::Error)]
pub enum LoggerError {
    /// Level text that matches neither a canonical name nor an alias
    #[error("unrecognized log level: '{0}'")]
    InvalidLevel(String),

    /// No constructor registered under the requested driver name
    #[error("driver not found: '{0}'")]
    DriverNotFound(String),

    /// Invalid configuration with details
    #[error("Invalid configuration for {component}: {message}")]
    InvalidConfiguration { component: String, message: String },

    /// IO error with context
    #[error("IO error while {operation}: {message}")]
    IoOperation {
        operation: String,
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Generic IO error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// YAML serialization error
    #[error("YAML error: {0}")]
    YamlError(#[from] serde_yaml::Error),

    /// A driver named in configuration could not be built
    #[error("failed to create driver '{driver}': {source}")]
    DriverCreation {
        driver: String,
        #[source]
        source: Box<LoggerError>,
    },

    /// A driver was asked to process an entry after it released its resources
    #[error("driver '{driver}' is closed")]
    DriverClosed { driver: String },

    /// A driver panicked while processing an entry or closing
    #[error("driver #{index} panicked: {message}")]
    DriverPanicked { index: usize, message: String },

    /// More than one driver failed during a single dispatch
    #[error("{} drivers failed: {}", .0.len(), join_errors(.0))]
    DriverFailures(Vec<LoggerError>),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

fn join_errors(errors: &[LoggerError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

impl LoggerError {
    /// Create an IO operation error with context
    pub fn io_operation(
        operation: impl Into<String>,
        message: impl Into<String>,
        source: std::io::Error,
    ) -> Self {
        LoggerError::IoOperation {
            operation: operation.into(),
            message: message.into(),
            source,
        }
    }

    /// Create an invalid configuration error
    pub fn config(component: impl Into<String>, message: impl Into<String>) -> Self {
        LoggerError::InvalidConfiguration {
            component: component.into(),
            message: message.into(),
        }
    }

    /// Create a closed-driver error
    pub fn driver_closed(driver: impl Into<String>) -> Self {
        LoggerError::DriverClosed {
            driver: driver.into(),
        }
    }

    /// Create a generic error
    pub fn other<S: Into<String>>(msg: S) -> Self {
        LoggerError::Other(msg.into())
    }

    /// Collapse the failures of one dispatch into a single error.
    ///
    /// Returns `None` when nothing failed and the sole error unchanged when
    /// exactly one driver failed.
    pub(crate) fn collect(mut errors: Vec<LoggerError>) -> Option<Self> {
        match errors.len() {
            0 => None,
            1 => errors.pop(),
            _ => Some(LoggerError::DriverFailures(errors)),
        }
    }

    /// Errors carried by this value, flattening an aggregate.
    pub fn failures(&self) -> Vec<&LoggerError> {
        match self {
            LoggerError::DriverFailures(errors) => errors.iter().collect(),
            other => vec![other],
        }
    }

    /// The last failure encountered, in dispatch order.
    pub fn last_failure(&self) -> &LoggerError {
        match self {
            LoggerError::DriverFailures(errors) => errors.last().unwrap_or(self),
            other => other,
        }
    }
}
