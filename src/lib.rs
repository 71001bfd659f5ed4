//! # stacklog
//!
//! A call-site logger that resolves the current and calling source
//! locations from captured stack traces and emits single-line records
//! with cycle-safe JSON rendering of structured arguments.
//!
//! ## Features
//!
//! - **Call-Site Resolution**: Each record names the file and line it was
//!   emitted from, and the file and line of its caller
//! - **Cycle-Safe Values**: Arrays and objects are rendered as JSON with
//!   repeated composites elided, so self-referential data never loops
//! - **Level Gating**: Records below the configured minimum level are
//!   suppressed before any formatting work happens
//! - **Pluggable Sinks**: Routing by level to console channels, memory
//!   buffers, or custom sinks
//! - **Thread Safe**: Designed for concurrent environments

pub mod core;
pub mod macros;
pub mod sinks;

pub mod prelude {
    pub use crate::core::{
        BacktraceCapture, CallSite, CallerDetails, FixedCapture, LogLevel, LogValue, Logger,
        LoggerBuilder, LoggerError, LoggerMetrics, Result, SharedArray, SharedObject, Sink,
        StackCapture, FRAME_MARKER,
    };
    #[cfg(feature = "console")]
    pub use crate::sinks::{Channel, ConsoleSink};
    pub use crate::sinks::MemorySink;
}

pub use crate::core::{
    iso8601, now_iso8601, parse_frame_line, resolve, safe_stringify, BacktraceCapture, CallSite,
    CallerDetails, FixedCapture, LogLevel, LogValue, Logger, LoggerBuilder, LoggerError,
    LoggerMetrics, Result, SharedArray, SharedObject, Sink, StackCapture, FRAME_MARKER,
};
#[cfg(feature = "console")]
pub use sinks::{Channel, ConsoleSink};
pub use sinks::MemorySink;
