//! Sink trait for routing finished log lines

use super::{error::Result, log_level::LogLevel};

/// Receives a finished, formatted line tagged with its level.
///
/// A sink with no channel for the given level must return `Ok(())` without
/// doing anything; the dispatcher makes no routing decision of its own.
pub trait Sink: Send + Sync {
    fn route(&mut self, level: LogLevel, line: &str) -> Result<()>;
    fn flush(&mut self) -> Result<()>;
    fn name(&self) -> &str;
}
