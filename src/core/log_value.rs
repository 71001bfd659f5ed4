//! Argument value model for log calls
//!
//! Scalars are stored inline. Arrays and objects hold shared handles
//! (`Arc<RwLock<..>>`) so values are cheap to clone, safe to move across
//! threads, and able to express reference cycles; the safe stringifier
//! recognizes a repeated handle by pointer identity and elides it instead
//! of descending forever.

use parking_lot::RwLock;
use std::fmt;
use std::sync::Arc;

/// Shared handle to an array value
pub type SharedArray = Arc<RwLock<Vec<LogValue>>>;

/// Shared handle to an object value (insertion-ordered entries)
pub type SharedObject = Arc<RwLock<Vec<(String, LogValue)>>>;

/// Value type for log call arguments
#[derive(Debug, Clone)]
pub enum LogValue {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    String(String),
    Array(SharedArray),
    Object(SharedObject),
}

impl LogValue {
    /// Build an array value from items
    pub fn array<I>(items: I) -> Self
    where
        I: IntoIterator<Item = LogValue>,
    {
        LogValue::Array(Arc::new(RwLock::new(items.into_iter().collect())))
    }

    /// Build an object value; entry order is preserved
    pub fn object<K, I>(entries: I) -> Self
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, LogValue)>,
    {
        LogValue::Object(Arc::new(RwLock::new(
            entries.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        )))
    }

    /// Whether this value is an array or object
    #[must_use]
    pub fn is_composite(&self) -> bool {
        matches!(self, LogValue::Array(_) | LogValue::Object(_))
    }

    /// Borrow the shared handle of an array value
    pub fn as_array_handle(&self) -> Option<&SharedArray> {
        match self {
            LogValue::Array(handle) => Some(handle),
            _ => None,
        }
    }

    /// Borrow the shared handle of an object value
    pub fn as_object_handle(&self) -> Option<&SharedObject> {
        match self {
            LogValue::Object(handle) => Some(handle),
            _ => None,
        }
    }
}

impl fmt::Display for LogValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogValue::Null => write!(f, "null"),
            LogValue::Bool(b) => write!(f, "{}", b),
            LogValue::Int(i) => write!(f, "{}", i),
            LogValue::Float(fl) => write!(f, "{}", fl),
            LogValue::String(s) => write!(f, "{}", s),
            composite => {
                let text = crate::core::safe_stringify::safe_stringify(composite, 0)
                    .unwrap_or_else(|| "null".to_string());
                write!(f, "{}", text)
            }
        }
    }
}

impl From<String> for LogValue {
    fn from(s: String) -> Self {
        LogValue::String(s)
    }
}

impl From<&str> for LogValue {
    fn from(s: &str) -> Self {
        LogValue::String(s.to_string())
    }
}

impl From<i64> for LogValue {
    fn from(i: i64) -> Self {
        LogValue::Int(i)
    }
}

impl From<i32> for LogValue {
    fn from(i: i32) -> Self {
        LogValue::Int(i as i64)
    }
}

impl From<u32> for LogValue {
    fn from(i: u32) -> Self {
        LogValue::Int(i as i64)
    }
}

impl From<f64> for LogValue {
    fn from(f: f64) -> Self {
        LogValue::Float(f)
    }
}

impl From<bool> for LogValue {
    fn from(b: bool) -> Self {
        LogValue::Bool(b)
    }
}

impl From<serde_json::Value> for LogValue {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => LogValue::Null,
            serde_json::Value::Bool(b) => LogValue::Bool(b),
            serde_json::Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    LogValue::Int(i)
                } else {
                    LogValue::Float(n.as_f64().unwrap_or(f64::NAN))
                }
            }
            serde_json::Value::String(s) => LogValue::String(s),
            serde_json::Value::Array(items) => {
                LogValue::array(items.into_iter().map(LogValue::from))
            }
            serde_json::Value::Object(map) => {
                LogValue::object(map.into_iter().map(|(k, v)| (k, LogValue::from(v))))
            }
        }
    }
}
