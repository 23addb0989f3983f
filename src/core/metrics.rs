//! Logger metrics for observability
//!
//! Counters describing dispatch health: how many entries were fanned out,
//! how many of them hit at least one failing driver, and how many
//! individual driver failures and panics occurred.

use std::sync::atomic::{AtomicU64, Ordering};

/// Metrics for logger observability
///
/// # Example
///
/// ```
/// use driver_logger_system::LoggerMetrics;
///
/// let metrics = LoggerMetrics::new();
///
/// metrics.record_dispatched();
/// metrics.record_failed_dispatch();
///
/// assert_eq!(metrics.total_dispatched(), 1);
/// assert_eq!(metrics.failed_dispatches(), 1);
/// ```
#[derive(Debug, Default)]
pub struct LoggerMetrics {
    /// Number of entries handed to the driver list
    total_dispatched: AtomicU64,

    /// Number of entries for which at least one driver failed
    failed_dispatches: AtomicU64,

    /// Number of individual driver failures, panics included
    driver_failures: AtomicU64,

    /// Number of driver panics caught during dispatch or close
    driver_panics: AtomicU64,
}

impl LoggerMetrics {
    /// Create a new metrics instance with all counters at zero
    pub const fn new() -> Self {
        Self {
            total_dispatched: AtomicU64::new(0),
            failed_dispatches: AtomicU64::new(0),
            driver_failures: AtomicU64::new(0),
            driver_panics: AtomicU64::new(0),
        }
    }

    #[inline]
    pub fn total_dispatched(&self) -> u64 {
        self.total_dispatched.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn failed_dispatches(&self) -> u64 {
        self.failed_dispatches.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn driver_failures(&self) -> u64 {
        self.driver_failures.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn driver_panics(&self) -> u64 {
        self.driver_panics.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn record_dispatched(&self) -> u64 {
        self.total_dispatched.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn record_failed_dispatch(&self) -> u64 {
        self.failed_dispatches.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn record_driver_failure(&self) -> u64 {
        self.driver_failures.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn record_driver_panic(&self) -> u64 {
        self.driver_panics.fetch_add(1, Ordering::Relaxed)
    }

    /// Share of dispatched entries that hit a failing driver, as a
    /// percentage (0.0 - 100.0). Returns 0.0 before anything is dispatched.
    pub fn failure_rate(&self) -> f64 {
        let total = self.total_dispatched();
        if total == 0 {
            return 0.0;
        }
        (self.failed_dispatches() as f64 / total as f64) * 100.0
    }

    /// Reset all counters to zero
    pub fn reset(&self) {
        self.total_dispatched.store(0, Ordering::Relaxed);
        self.failed_dispatches.store(0, Ordering::Relaxed);
        self.driver_failures.store(0, Ordering::Relaxed);
        self.driver_panics.store(0, Ordering::Relaxed);
    }
}
