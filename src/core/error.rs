//! Error types for the logging helper

pub type Result<T> = std::result::Result<T, LoggerError>;

#[derive(Debug, thiserror::Error)]
pub enum LoggerError {
    /// Stack capture produced no trace at all
    #[error("Stack capture unavailable: cannot resolve call sites")]
    TraceUnavailable,

    /// Generic IO error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// Unknown level name
    #[error("Invalid log level: '{0}'")]
    InvalidLevel(String),

    /// Sink rejected a formatted line
    #[error("Sink '{name}' failed: {message}")]
    SinkFailure { name: String, message: String },

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl LoggerError {
    /// Create a sink failure error
    pub fn sink(name: impl Into<String>, message: impl Into<String>) -> Self {
        LoggerError::SinkFailure {
            name: name.into(),
            message: message.into(),
        }
    }

    /// Create an invalid level error
    pub fn invalid_level(name: impl Into<String>) -> Self {
        LoggerError::InvalidLevel(name.into())
    }

    /// Create a generic error
    pub fn other<S: Into<String>>(msg: S) -> Self {
        LoggerError::Other(msg.into())
    }
}
