//! Core logger types and traits

pub mod call_site;
pub mod error;
pub mod log_level;
pub mod log_value;
pub mod logger;
pub mod metrics;
pub mod safe_stringify;
pub mod sink;
pub mod stack_capture;
pub mod timestamp;

pub use call_site::{parse_frame_line, resolve, CallSite, CallerDetails};
pub use error::{LoggerError, Result};
pub use log_level::LogLevel;
pub use log_value::{LogValue, SharedArray, SharedObject};
pub use logger::{Logger, LoggerBuilder, FRAME_MARKER};
pub use metrics::LoggerMetrics;
pub use safe_stringify::safe_stringify;
pub use sink::Sink;
pub use stack_capture::{BacktraceCapture, FixedCapture, StackCapture};
pub use timestamp::{iso8601, now_iso8601};
