//! In-memory sink
//!
//! Records every routed line behind a shared buffer; clones share the same
//! buffer, so a handle kept outside the logger observes what was dispatched.
//! This is the collaborator the test suites inspect.

use crate::core::{LogLevel, Result, Sink};
use parking_lot::Mutex;
use std::sync::Arc;

#[derive(Clone, Default)]
pub struct MemorySink {
    records: Arc<Mutex<Vec<(LogLevel, String)>>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything routed so far
    pub fn records(&self) -> Vec<(LogLevel, String)> {
        self.records.lock().clone()
    }

    /// Lines recorded at one level
    pub fn lines_at(&self, level: LogLevel) -> Vec<String> {
        self.records
            .lock()
            .iter()
            .filter(|(recorded, _)| *recorded == level)
            .map(|(_, line)| line.clone())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.records.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.lock().is_empty()
    }

    pub fn clear(&self) {
        self.records.lock().clear();
    }
}

impl Sink for MemorySink {
    fn route(&mut self, level: LogLevel, line: &str) -> Result<()> {
        self.records.lock().push((level, line.to_string()));
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        Ok(())
    }

    fn name(&self) -> &str {
        "memory"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_records_routed_lines() {
        let mut sink = MemorySink::new();
        sink.route(LogLevel::Info, "first").unwrap();
        sink.route(LogLevel::Error, "second").unwrap();

        assert_eq!(sink.len(), 2);
        assert_eq!(sink.records()[1], (LogLevel::Error, "second".to_string()));
    }

    #[test]
    fn test_clones_share_the_buffer() {
        let mut sink = MemorySink::new();
        let observer = sink.clone();

        sink.route(LogLevel::Debug, "shared").unwrap();

        assert_eq!(observer.len(), 1);
        assert_eq!(observer.lines_at(LogLevel::Debug), vec!["shared"]);
    }

    #[test]
    fn test_lines_at_filters_by_level() {
        let mut sink = MemorySink::new();
        sink.route(LogLevel::Info, "a").unwrap();
        sink.route(LogLevel::Warning, "b").unwrap();
        sink.route(LogLevel::Info, "c").unwrap();

        assert_eq!(sink.lines_at(LogLevel::Info), vec!["a", "c"]);
        assert!(sink.lines_at(LogLevel::Fatal).is_empty());
    }

    #[test]
    fn test_clear() {
        let mut sink = MemorySink::new();
        sink.route(LogLevel::Info, "gone soon").unwrap();
        sink.clear();
        assert!(sink.is_empty());
    }
}
