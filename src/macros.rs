//! Logging macros for variadic argument lists.
//!
//! Each argument is converted through `LogValue::from`, so scalars,
//! strings, and prebuilt `LogValue` composites can be mixed freely. The
//! macros forward the logger's `Result`; the only possible error is a
//! failed stack capture.
//!
//! # Examples
//!
//! ```
//! use stacklog::prelude::*;
//! use stacklog::info;
//!
//! let logger = Logger::new();
//!
//! let _ = info!(logger, "Server started");
//!
//! let port = 8080;
//! let _ = info!(logger, "Listening on port", port);
//!
//! let _ = info!(logger, "Session", LogValue::object([("user", LogValue::from("alice"))]));
//! ```

/// Log an argument list at an explicit level.
///
/// # Examples
///
/// ```
/// # use stacklog::prelude::*;
/// # let logger = Logger::new();
/// use stacklog::log;
/// let _ = log!(logger, LogLevel::Info, "Simple message");
/// let _ = log!(logger, LogLevel::Error, "Error code:", 500);
/// ```
#[macro_export]
macro_rules! log {
    ($logger:expr, $level:expr $(, $arg:expr)* $(,)?) => {
        $logger.log($level, &[$($crate::LogValue::from($arg)),*])
    };
}

/// Log at the configured default level (the bare call).
///
/// # Examples
///
/// ```
/// # use stacklog::prelude::*;
/// # let logger = Logger::new();
/// use stacklog::stacklog;
/// let _ = stacklog!(logger, "Dispatched at the default level");
/// ```
#[macro_export]
macro_rules! stacklog {
    ($logger:expr $(, $arg:expr)* $(,)?) => {
        $logger.log_default(&[$($crate::LogValue::from($arg)),*])
    };
}

/// Log a trace-level argument list.
///
/// # Examples
///
/// ```
/// # use stacklog::prelude::*;
/// # let logger = Logger::new();
/// # logger.set_min_level(LogLevel::Trace);
/// use stacklog::trace;
/// let _ = trace!(logger, "Entering calculate()");
/// let _ = trace!(logger, "Value:", 42);
/// ```
#[macro_export]
macro_rules! trace {
    ($logger:expr $(, $arg:expr)* $(,)?) => {
        $crate::log!($logger, $crate::LogLevel::Trace $(, $arg)*)
    };
}

/// Log a debug-level argument list.
///
/// # Examples
///
/// ```
/// # use stacklog::prelude::*;
/// # let logger = Logger::new();
/// use stacklog::debug;
/// let _ = debug!(logger, "Counter:", 10);
/// ```
#[macro_export]
macro_rules! debug {
    ($logger:expr $(, $arg:expr)* $(,)?) => {
        $crate::log!($logger, $crate::LogLevel::Debug $(, $arg)*)
    };
}

/// Log an info-level argument list.
///
/// # Examples
///
/// ```
/// # use stacklog::prelude::*;
/// # let logger = Logger::new();
/// use stacklog::info;
/// let _ = info!(logger, "Application started");
/// ```
#[macro_export]
macro_rules! info {
    ($logger:expr $(, $arg:expr)* $(,)?) => {
        $crate::log!($logger, $crate::LogLevel::Info $(, $arg)*)
    };
}

/// Log a warning-level argument list.
///
/// # Examples
///
/// ```
/// # use stacklog::prelude::*;
/// # let logger = Logger::new();
/// use stacklog::warning;
/// let _ = warning!(logger, "Low disk space");
/// ```
#[macro_export]
macro_rules! warning {
    ($logger:expr $(, $arg:expr)* $(,)?) => {
        $crate::log!($logger, $crate::LogLevel::Warning $(, $arg)*)
    };
}

/// Log an error-level argument list.
///
/// # Examples
///
/// ```
/// # use stacklog::prelude::*;
/// # let logger = Logger::new();
/// use stacklog::error;
/// let _ = error!(logger, "Failed to connect");
/// ```
#[macro_export]
macro_rules! error {
    ($logger:expr $(, $arg:expr)* $(,)?) => {
        $crate::log!($logger, $crate::LogLevel::Error $(, $arg)*)
    };
}

/// Log a fatal-level argument list.
///
/// # Examples
///
/// ```
/// # use stacklog::prelude::*;
/// # let logger = Logger::new();
/// use stacklog::fatal;
/// let _ = fatal!(logger, "Critical system failure");
/// ```
#[macro_export]
macro_rules! fatal {
    ($logger:expr $(, $arg:expr)* $(,)?) => {
        $crate::log!($logger, $crate::LogLevel::Fatal $(, $arg)*)
    };
}
