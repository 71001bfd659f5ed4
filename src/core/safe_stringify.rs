//! Cycle-safe value serialization
//!
//! JSON rendering that never fails the log call: composite handles already
//! seen in this traversal are elided (key dropped inside objects, `null`
//! inside arrays), and any other failure becomes `None` for the whole value.
//! Identity is the handle's pointer address, so a value repeated across
//! sibling branches is also elided after its first occurrence.

use crate::core::log_value::LogValue;
use serde::Serialize;
use std::collections::HashSet;
use std::sync::Arc;

/// Nesting depth past which serialization of the value is abandoned.
const MAX_DEPTH: usize = 128;

enum Snapshot {
    Rendered(serde_json::Value),
    Elided,
}

/// Serialize a value for embedding in a log line.
///
/// `spaces` is the indentation width per nesting level; `0` renders
/// compactly. Returns `None` when the value cannot be serialized at all;
/// cyclic or repeated composites inside it are elided, not failures.
#[must_use]
pub fn safe_stringify(value: &LogValue, spaces: usize) -> Option<String> {
    let mut visited = HashSet::new();
    match snapshot(value, &mut visited, 0)? {
        Snapshot::Rendered(json) => render(&json, spaces),
        Snapshot::Elided => None,
    }
}

fn snapshot(value: &LogValue, visited: &mut HashSet<usize>, depth: usize) -> Option<Snapshot> {
    if depth > MAX_DEPTH {
        return None;
    }

    let json = match value {
        LogValue::Null => serde_json::Value::Null,
        LogValue::Bool(b) => serde_json::Value::Bool(*b),
        LogValue::Int(i) => serde_json::Value::Number((*i).into()),
        LogValue::Float(f) => serde_json::Number::from_f64(*f)
            .map(serde_json::Value::Number)
            .unwrap_or(serde_json::Value::Null),
        LogValue::String(s) => serde_json::Value::String(s.clone()),
        LogValue::Array(handle) => {
            if !visited.insert(Arc::as_ptr(handle) as usize) {
                return Some(Snapshot::Elided);
            }
            let items = handle.read();
            let mut out = Vec::with_capacity(items.len());
            for item in items.iter() {
                match snapshot(item, visited, depth + 1)? {
                    Snapshot::Rendered(v) => out.push(v),
                    // a repeated handle keeps its slot as null
                    Snapshot::Elided => out.push(serde_json::Value::Null),
                }
            }
            serde_json::Value::Array(out)
        }
        LogValue::Object(handle) => {
            if !visited.insert(Arc::as_ptr(handle) as usize) {
                return Some(Snapshot::Elided);
            }
            let entries = handle.read();
            let mut out = serde_json::Map::new();
            for (key, item) in entries.iter() {
                match snapshot(item, visited, depth + 1)? {
                    Snapshot::Rendered(v) => {
                        out.insert(key.clone(), v);
                    }
                    // a repeated handle drops its key entirely
                    Snapshot::Elided => {}
                }
            }
            serde_json::Value::Object(out)
        }
    };

    Some(Snapshot::Rendered(json))
}

fn render(json: &serde_json::Value, spaces: usize) -> Option<String> {
    if spaces == 0 {
        return serde_json::to_string(json).ok();
    }

    let indent = vec![b' '; spaces];
    let formatter = serde_json::ser::PrettyFormatter::with_indent(&indent);
    let mut out = Vec::new();
    let mut ser = serde_json::Serializer::with_formatter(&mut out, formatter);
    json.serialize(&mut ser).ok()?;
    String::from_utf8(out).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scalar_values() {
        assert_eq!(safe_stringify(&LogValue::from(42), 2).unwrap(), "42");
        assert_eq!(safe_stringify(&LogValue::from(true), 0).unwrap(), "true");
        assert_eq!(
            safe_stringify(&LogValue::from("hi"), 0).unwrap(),
            "\"hi\""
        );
        assert_eq!(safe_stringify(&LogValue::Null, 0).unwrap(), "null");
    }

    #[test]
    fn test_object_indented() {
        let value = LogValue::object([("a", LogValue::from(1))]);
        assert_eq!(
            safe_stringify(&value, 2).unwrap(),
            "{\n  \"a\": 1\n}"
        );
    }

    #[test]
    fn test_object_compact() {
        let value = LogValue::object([("a", LogValue::from(1))]);
        assert_eq!(safe_stringify(&value, 0).unwrap(), "{\"a\":1}");
    }

    #[test]
    fn test_wider_indent() {
        let value = LogValue::object([("a", LogValue::from(1))]);
        assert_eq!(
            safe_stringify(&value, 4).unwrap(),
            "{\n    \"a\": 1\n}"
        );
    }

    #[test]
    fn test_self_referential_object_elided() {
        let value = LogValue::object([("a", LogValue::from(1))]);
        if let Some(handle) = value.as_object_handle() {
            handle.write().push(("me".to_string(), value.clone()));
        }

        let text = safe_stringify(&value, 2).unwrap();
        assert!(text.contains("\"a\": 1"));
        assert!(!text.contains("me"));
    }

    #[test]
    fn test_nested_self_reference_elided() {
        let root = LogValue::object([("id", LogValue::from(7))]);
        let child = LogValue::object([("parent", root.clone())]);
        if let Some(handle) = root.as_object_handle() {
            handle.write().push(("child".to_string(), child));
        }

        let text = safe_stringify(&root, 2).unwrap();
        assert!(text.contains("\"id\": 7"));
        assert!(text.contains("\"child\""));
        assert!(!text.contains("parent"));
    }

    #[test]
    fn test_array_cycle_becomes_null() {
        let value = LogValue::array([LogValue::from(1)]);
        if let Some(handle) = value.as_array_handle() {
            handle.write().push(value.clone());
        }

        let text = safe_stringify(&value, 0).unwrap();
        assert_eq!(text, "[1,null]");
    }

    #[test]
    fn test_repeated_handle_elided_after_first() {
        let shared = LogValue::object([("x", LogValue::from(1))]);
        let root = LogValue::object([("a", shared.clone()), ("b", shared)]);

        let text = safe_stringify(&root, 0).unwrap();
        assert_eq!(text, "{\"a\":{\"x\":1}}");
    }

    #[test]
    fn test_non_finite_floats_become_null() {
        assert_eq!(safe_stringify(&LogValue::from(f64::NAN), 0).unwrap(), "null");
        assert_eq!(
            safe_stringify(&LogValue::from(f64::INFINITY), 0).unwrap(),
            "null"
        );
    }

    #[test]
    fn test_depth_cap() {
        let mut value = LogValue::from(1);
        for _ in 0..200 {
            value = LogValue::object([("inner", value)]);
        }
        assert!(safe_stringify(&value, 2).is_none());
    }

    #[test]
    fn test_empty_composites() {
        let arr = LogValue::array(std::iter::empty());
        let obj = LogValue::object(std::iter::empty::<(&str, LogValue)>());

        assert_eq!(safe_stringify(&arr, 2).unwrap(), "[]");
        assert_eq!(safe_stringify(&obj, 2).unwrap(), "{}");
    }
}
