//! Logger diagnostics counters
//!
//! Tracks how many calls were emitted versus gated out, and how often the
//! best-effort paths (call-site resolution, argument serialization, sink
//! writes) had to degrade.

use std::sync::atomic::{AtomicU64, Ordering};

/// Counters for logger diagnostics
///
/// # Example
///
/// ```
/// use stacklog::LoggerMetrics;
///
/// let metrics = LoggerMetrics::new();
///
/// metrics.record_logged();
/// metrics.record_suppressed();
///
/// assert_eq!(metrics.total_logged(), 1);
/// assert_eq!(metrics.suppressed_count(), 1);
/// ```
#[derive(Debug)]
pub struct LoggerMetrics {
    /// Lines dispatched to the sink (or dropped only for lack of a sink)
    total_logged: AtomicU64,

    /// Calls gated out by the minimum level
    suppressed_count: AtomicU64,

    /// Dispatches whose current call-site stayed fully unresolved
    unresolved_call_sites: AtomicU64,

    /// Arguments whose serialization failed and were omitted
    stringify_failures: AtomicU64,

    /// Lines the sink rejected
    sink_failures: AtomicU64,
}

impl LoggerMetrics {
    /// Create a new metrics instance with all counters at zero
    pub const fn new() -> Self {
        Self {
            total_logged: AtomicU64::new(0),
            suppressed_count: AtomicU64::new(0),
            unresolved_call_sites: AtomicU64::new(0),
            stringify_failures: AtomicU64::new(0),
            sink_failures: AtomicU64::new(0),
        }
    }

    /// Get the total number of dispatched lines
    #[inline]
    pub fn total_logged(&self) -> u64 {
        self.total_logged.load(Ordering::Relaxed)
    }

    /// Get the number of level-gated calls
    #[inline]
    pub fn suppressed_count(&self) -> u64 {
        self.suppressed_count.load(Ordering::Relaxed)
    }

    /// Get the number of fully unresolved call-sites
    #[inline]
    pub fn unresolved_call_sites(&self) -> u64 {
        self.unresolved_call_sites.load(Ordering::Relaxed)
    }

    /// Get the number of omitted arguments
    #[inline]
    pub fn stringify_failures(&self) -> u64 {
        self.stringify_failures.load(Ordering::Relaxed)
    }

    /// Get the number of sink write failures
    #[inline]
    pub fn sink_failures(&self) -> u64 {
        self.sink_failures.load(Ordering::Relaxed)
    }

    /// Record a dispatched line
    #[inline]
    pub fn record_logged(&self) -> u64 {
        self.total_logged.fetch_add(1, Ordering::Relaxed)
    }

    /// Record a level-gated call
    #[inline]
    pub fn record_suppressed(&self) -> u64 {
        self.suppressed_count.fetch_add(1, Ordering::Relaxed)
    }

    /// Record a dispatch with a fully unresolved call-site
    #[inline]
    pub fn record_unresolved(&self) -> u64 {
        self.unresolved_call_sites.fetch_add(1, Ordering::Relaxed)
    }

    /// Record an omitted argument
    #[inline]
    pub fn record_stringify_failure(&self) -> u64 {
        self.stringify_failures.fetch_add(1, Ordering::Relaxed)
    }

    /// Record a sink write failure
    #[inline]
    pub fn record_sink_failure(&self) -> u64 {
        self.sink_failures.fetch_add(1, Ordering::Relaxed)
    }

    /// Share of calls gated out, as a percentage (0.0 - 100.0)
    ///
    /// Returns 0.0 if no calls have been seen.
    pub fn suppression_rate(&self) -> f64 {
        let suppressed = self.suppressed_count() as f64;
        let total = self.total_logged() as f64 + suppressed;
        if total == 0.0 {
            0.0
        } else {
            (suppressed / total) * 100.0
        }
    }

    /// Reset all counters to zero
    pub fn reset(&self) {
        self.total_logged.store(0, Ordering::Relaxed);
        self.suppressed_count.store(0, Ordering::Relaxed);
        self.unresolved_call_sites.store(0, Ordering::Relaxed);
        self.stringify_failures.store(0, Ordering::Relaxed);
        self.sink_failures.store(0, Ordering::Relaxed);
    }
}

impl Default for LoggerMetrics {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for LoggerMetrics {
    /// Create a snapshot of the current counter values
    fn clone(&self) -> Self {
        Self {
            total_logged: AtomicU64::new(self.total_logged()),
            suppressed_count: AtomicU64::new(self.suppressed_count()),
            unresolved_call_sites: AtomicU64::new(self.unresolved_call_sites()),
            stringify_failures: AtomicU64::new(self.stringify_failures()),
            sink_failures: AtomicU64::new(self.sink_failures()),
        }
    }
}
