//! Main logger implementation

use super::{
    call_site::{self, CallerDetails},
    error::{LoggerError, Result},
    log_level::LogLevel,
    log_value::LogValue,
    metrics::LoggerMetrics,
    safe_stringify::safe_stringify,
    sink::Sink,
    stack_capture::{BacktraceCapture, StackCapture},
    timestamp,
};
use parking_lot::RwLock;

/// Substring identifying this crate's own frames in a captured trace.
///
/// The call-site scan skips trace lines containing this marker; preset
/// traces used with `FixedCapture` should tag their logger frames with it.
pub const FRAME_MARKER: &str = env!("CARGO_PKG_NAME");

/// Indentation width for composite arguments embedded in a line.
const STRINGIFY_INDENT: usize = 2;

pub struct Logger {
    min_level: RwLock<LogLevel>,
    default_level: RwLock<LogLevel>,
    sink: RwLock<Option<Box<dyn Sink>>>,
    capture: Box<dyn StackCapture>,
    /// Diagnostics counters (suppressed calls, degraded paths, etc.)
    metrics: LoggerMetrics,
}

impl Logger {
    /// Create a logger with the stock defaults: minimum level `debug`,
    /// default level `info`, native backtrace capture, no sink.
    #[must_use]
    pub fn new() -> Self {
        Self {
            min_level: RwLock::new(LogLevel::Debug),
            default_level: RwLock::new(LogLevel::Info),
            sink: RwLock::new(None),
            capture: Box::new(BacktraceCapture::new()),
            metrics: LoggerMetrics::new(),
        }
    }

    /// Set the gate and the bare-call level in one step.
    ///
    /// The default level falls back to `min_level` when omitted.
    pub fn setup(&self, min_level: LogLevel, default_level: Option<LogLevel>) {
        *self.default_level.write() = default_level.unwrap_or(min_level);
        *self.min_level.write() = min_level;
    }

    pub fn set_min_level(&self, level: LogLevel) {
        *self.min_level.write() = level;
    }

    pub fn set_default_level(&self, level: LogLevel) {
        *self.default_level.write() = level;
    }

    pub fn min_level(&self) -> LogLevel {
        *self.min_level.read()
    }

    pub fn default_level(&self) -> LogLevel {
        *self.default_level.read()
    }

    /// Replace the output sink.
    pub fn set_sink(&self, sink: Box<dyn Sink>) {
        *self.sink.write() = Some(sink);
    }

    /// Format and dispatch one record at `level`.
    ///
    /// Returns `Err` only when stack capture itself produced nothing; every
    /// other failure degrades (unresolved fields, omitted arguments, sink
    /// errors reported through diagnostics).
    pub fn log(&self, level: LogLevel, args: &[LogValue]) -> Result<()> {
        if level < *self.min_level.read() {
            self.metrics.record_suppressed();
            return Ok(());
        }

        let details = self.resolve_call_sites()?;
        if details.current.is_unset() {
            self.metrics.record_unresolved();
        }

        let line = self.compose_line(&details, args);
        self.dispatch(level, &line);
        Ok(())
    }

    /// The bare call: dispatch at the configured default level.
    pub fn log_default(&self, args: &[LogValue]) -> Result<()> {
        let level = *self.default_level.read();
        self.log(level, args)
    }

    fn resolve_call_sites(&self) -> Result<CallerDetails> {
        let trace = self
            .capture
            .capture()
            .filter(|trace| !trace.is_empty())
            .ok_or(LoggerError::TraceUnavailable)?;
        Ok(call_site::resolve(&trace, FRAME_MARKER))
    }

    fn compose_line(&self, details: &CallerDetails, args: &[LogValue]) -> String {
        let mut output = format!("[{}] ", timestamp::now_iso8601());

        if let Some(file) = &details.current.file {
            output.push_str(file);
            output.push(':');
        }
        match details.current.line {
            Some(line) => output.push_str(&line.to_string()),
            None => output.push('1'),
        }

        if let Some(file) = &details.caller.file {
            output.push_str(" (called by ");
            output.push_str(file);
            output.push(':');
            match details.caller.line {
                Some(line) => output.push_str(&line.to_string()),
                None => output.push('1'),
            }
            output.push(')');
        }

        for arg in args {
            if arg.is_composite() {
                match safe_stringify(arg, STRINGIFY_INDENT) {
                    Some(text) => {
                        output.push(' ');
                        output.push_str(&text);
                    }
                    None => {
                        self.metrics.record_stringify_failure();
                    }
                }
            } else {
                output.push(' ');
                output.push_str(&arg.to_string());
            }
        }

        output
    }

    fn dispatch(&self, level: LogLevel, line: &str) {
        let mut sink = self.sink.write();
        if let Some(sink) = sink.as_mut() {
            if let Err(e) = sink.route(level, line) {
                self.metrics.record_sink_failure();
                eprintln!("[LOGGER ERROR] Sink '{}' failed: {}", sink.name(), e);
                return;
            }
        }
        self.metrics.record_logged();
    }

    /// Get the logger diagnostics counters
    ///
    /// # Example
    ///
    /// ```
    /// use stacklog::Logger;
    ///
    /// let logger = Logger::new();
    ///
    /// // After logging operations...
    /// let metrics = logger.metrics();
    /// println!("Logged: {}", metrics.total_logged());
    /// println!("Suppressed: {}", metrics.suppressed_count());
    /// ```
    pub fn metrics(&self) -> &LoggerMetrics {
        &self.metrics
    }

    pub fn flush(&self) -> Result<()> {
        let mut sink = self.sink.write();
        if let Some(sink) = sink.as_mut() {
            sink.flush()?;
        }
        Ok(())
    }

    #[inline]
    pub fn trace(&self, args: &[LogValue]) -> Result<()> {
        self.log(LogLevel::Trace, args)
    }

    #[inline]
    pub fn debug(&self, args: &[LogValue]) -> Result<()> {
        self.log(LogLevel::Debug, args)
    }

    #[inline]
    pub fn info(&self, args: &[LogValue]) -> Result<()> {
        self.log(LogLevel::Info, args)
    }

    #[inline]
    pub fn warning(&self, args: &[LogValue]) -> Result<()> {
        self.log(LogLevel::Warning, args)
    }

    #[inline]
    pub fn error(&self, args: &[LogValue]) -> Result<()> {
        self.log(LogLevel::Error, args)
    }

    #[inline]
    pub fn fatal(&self, args: &[LogValue]) -> Result<()> {
        self.log(LogLevel::Fatal, args)
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for constructing Logger with a fluent API
///
/// # Example
/// ```
/// use stacklog::prelude::*;
///
/// let logger = Logger::builder()
///     .min_level(LogLevel::Info)
///     .default_level(LogLevel::Info)
///     .sink(MemorySink::new())
///     .build();
/// ```
pub struct LoggerBuilder {
    min_level: LogLevel,
    default_level: LogLevel,
    sink: Option<Box<dyn Sink>>,
    capture: Option<Box<dyn StackCapture>>,
}

impl LoggerBuilder {
    /// Create a new builder with default values
    pub fn new() -> Self {
        Self {
            min_level: LogLevel::Debug,
            default_level: LogLevel::Info,
            sink: None,
            capture: None,
        }
    }

    /// Set the minimum level a call must rank at to be dispatched
    #[must_use = "builder methods return a new value"]
    pub fn min_level(mut self, level: LogLevel) -> Self {
        self.min_level = level;
        self
    }

    /// Set the level used by the bare call
    #[must_use = "builder methods return a new value"]
    pub fn default_level(mut self, level: LogLevel) -> Self {
        self.default_level = level;
        self
    }

    /// Set the output sink
    #[must_use = "builder methods return a new value"]
    pub fn sink<S: Sink + 'static>(mut self, sink: S) -> Self {
        self.sink = Some(Box::new(sink));
        self
    }

    /// Replace the stack capture collaborator
    ///
    /// Useful for deterministic call-site resolution in tests.
    #[must_use = "builder methods return a new value"]
    pub fn capture<C: StackCapture + 'static>(mut self, capture: C) -> Self {
        self.capture = Some(Box::new(capture));
        self
    }

    /// Build the Logger
    pub fn build(self) -> Logger {
        Logger {
            min_level: RwLock::new(self.min_level),
            default_level: RwLock::new(self.default_level),
            sink: RwLock::new(self.sink),
            capture: self
                .capture
                .unwrap_or_else(|| Box::new(BacktraceCapture::new())),
            metrics: LoggerMetrics::new(),
        }
    }
}

impl Default for LoggerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl Logger {
    /// Create a builder for Logger
    ///
    /// # Example
    /// ```
    /// use stacklog::prelude::*;
    ///
    /// let logger = Logger::builder()
    ///     .min_level(LogLevel::Trace)
    ///     .build();
    /// ```
    #[must_use]
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder::new()
    }
}
