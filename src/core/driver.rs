//! Driver trait for log output backends

use super::{error::Result, log_entry::LogEntry};

/// An output backend that renders and persists or displays log entries.
///
/// Each driver applies its own minimum level; an entry below it is a no-op
/// that returns `Ok(())`. Methods take `&self` so a driver can be shared
/// across threads; any mutable state must be guarded by the driver itself.
pub trait Driver: Send + Sync {
    /// Process one entry.
    fn log(&self, entry: &LogEntry) -> Result<()>;

    /// Release resources. Closing an already closed driver is a no-op.
    fn close(&self) -> Result<()>;

    fn name(&self) -> &str;
}
