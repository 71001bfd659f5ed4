//! Stack capture collaborators
//!
//! The logger never inspects the stack directly; it asks a capture
//! collaborator for trace text and feeds that to the call-site resolver.
//! Swapping the collaborator makes call-site behavior fully deterministic
//! in tests.

use backtrace::Backtrace;

/// Produces the raw trace text the call-site resolver scans.
///
/// One frame per line, innermost first. Line 0 is treated as the capture
/// point by the resolver. Return `None` when no trace can be produced at
/// all; the logger treats that as its only hard failure.
pub trait StackCapture: Send + Sync {
    fn capture(&self) -> Option<String>;
}

/// Captures the native backtrace, rendering each resolved symbol as
/// `    at name (file:line:col)` and degrading to partial shapes when
/// symbol information is missing.
#[derive(Debug, Default, Clone, Copy)]
pub struct BacktraceCapture;

impl BacktraceCapture {
    pub fn new() -> Self {
        Self
    }
}

impl StackCapture for BacktraceCapture {
    fn capture(&self) -> Option<String> {
        let bt = Backtrace::new();
        let mut lines = Vec::new();
        for frame in bt.frames() {
            let symbols = frame.symbols();
            if symbols.is_empty() {
                lines.push("    at <unresolved>".to_string());
                continue;
            }
            for symbol in symbols {
                lines.push(format_symbol(symbol));
            }
        }

        if lines.is_empty() {
            None
        } else {
            Some(lines.join("\n"))
        }
    }
}

fn format_symbol(symbol: &backtrace::BacktraceSymbol) -> String {
    let name = symbol.name().map(|n| n.to_string());
    let file = symbol.filename().map(|p| p.display().to_string());

    match (name, file, symbol.lineno()) {
        (Some(name), Some(file), Some(line)) => match symbol.colno() {
            Some(col) => format!("    at {} ({}:{}:{})", name, file, line, col),
            None => format!("    at {} ({}:{})", name, file, line),
        },
        (Some(name), _, _) => format!("    at {}", name),
        (None, Some(file), Some(line)) => format!("    at {}:{}", file, line),
        _ => "    at <unresolved>".to_string(),
    }
}

/// Capture that returns preset trace text; the deterministic collaborator
/// for tests, benches, and demos.
#[derive(Debug, Clone)]
pub struct FixedCapture {
    trace: Option<String>,
}

impl FixedCapture {
    pub fn new(trace: impl Into<String>) -> Self {
        Self {
            trace: Some(trace.into()),
        }
    }

    /// A capture that produces nothing, like an environment without
    /// backtrace support.
    pub fn unavailable() -> Self {
        Self { trace: None }
    }
}

impl StackCapture for FixedCapture {
    fn capture(&self) -> Option<String> {
        self.trace.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_capture_returns_preset_text() {
        let capture = FixedCapture::new("Error\n    at main (src/main.rs:3:1)");
        let trace = capture.capture().unwrap();
        assert!(trace.contains("main.rs:3"));
    }

    #[test]
    fn test_fixed_capture_unavailable() {
        let capture = FixedCapture::unavailable();
        assert!(capture.capture().is_none());
    }

    #[test]
    fn test_backtrace_capture_produces_frames() {
        let capture = BacktraceCapture::new();
        let trace = capture.capture().expect("test environment has frames");
        assert!(trace.contains('\n'));
        assert!(trace.contains("at "));
    }
}
