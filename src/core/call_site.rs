//! Call-site resolution from captured stack traces
//!
//! Recovers the immediate call-site of a log call (and its caller) by
//! scanning free-form trace text for the first frames outside the logging
//! crate. The frame shapes handled are `at name (file:line:col)`,
//! `name@file:line`, `at file:line`, and a bare `file:line`.
//!
//! This is a best-effort diagnostic: the parse depends on the trace format
//! of the capture backend and degrades to unset fields, never to an error.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

/// Frame-line pattern. The first alternative covers the prefixed shapes
/// (`@`, `(`, or ` at ` before the path); the second is an anchored bare
/// `file:line` that rejects `@` so prefixed shapes keep winning the
/// leftmost match.
const FRAME_PATTERN: &str =
    r"(?:[@(]| at )([^(]+?):([0-9:]+)(?:\)|$)|^\s*([^()\s@]+?):([0-9:]+)$";

static FRAME_RE: OnceLock<Regex> = OnceLock::new();

fn frame_regex() -> &'static Regex {
    FRAME_RE.get_or_init(|| Regex::new(FRAME_PATTERN).expect("frame pattern compiles"))
}

/// A source location recovered from one frame line.
///
/// Fields stay unset when the line does not parse; formatting falls back
/// to line 1 and omits the file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CallSite {
    pub file: Option<String>,
    pub line: Option<u32>,
}

impl CallSite {
    /// True when neither field was recovered
    #[must_use]
    pub fn is_unset(&self) -> bool {
        self.file.is_none() && self.line.is_none()
    }
}

/// The log call's own location plus the location of whatever called it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CallerDetails {
    pub current: CallSite,
    pub caller: CallSite,
}

/// Parse one frame line into a `CallSite`.
///
/// The line number is the portion of the position group before the first
/// `:` (the column, when present, is dropped). The file is the last path
/// segment with any trailing `?query` stripped; an empty segment counts
/// as unset.
#[must_use]
pub fn parse_frame_line(line: &str) -> CallSite {
    let mut site = CallSite::default();
    let caps = match frame_regex().captures(line) {
        Some(caps) => caps,
        None => return site,
    };

    let path = caps.get(1).or_else(|| caps.get(3)).map(|m| m.as_str());
    let position = caps.get(2).or_else(|| caps.get(4)).map(|m| m.as_str());

    if let Some(position) = position {
        site.line = position.split(':').next().and_then(|n| n.parse().ok());
    }
    if let Some(path) = path {
        let segment = path
            .rsplit(['/', '\\'])
            .next()
            .unwrap_or(path)
            .split('?')
            .next()
            .unwrap_or("");
        if !segment.is_empty() {
            site.file = Some(segment.to_string());
        }
    }

    site
}

/// Scan a captured trace for the first two frames outside the logging
/// crate.
///
/// Line 0 is the capture point and is always skipped. A frame belongs to
/// the logging crate while its text contains `marker`; the first line
/// without the marker after at least one marked line is the immediate
/// caller of the logger (`current`), and the line after that one is its
/// own caller. When the scan runs off the end the last line stands in as
/// `current` and the caller stays unknown — the log call was the
/// outermost frame.
#[must_use]
pub fn resolve(trace: &str, marker: &str) -> CallerDetails {
    let lines: Vec<&str> = trace.split('\n').collect();
    let mut details = CallerDetails::default();

    let mut in_package = false;
    let mut stop = None;
    for (i, line) in lines.iter().enumerate().skip(1) {
        if line.contains(marker) {
            in_package = true;
            continue;
        }
        if in_package {
            stop = Some(i);
            break;
        }
    }

    match stop {
        Some(i) => {
            details.current = parse_frame_line(lines[i]);
            if let Some(next) = lines.get(i + 1) {
                details.caller = parse_frame_line(next);
            }
        }
        None if lines.len() > 1 => {
            // never left the crate's frames (or never saw them): best
            // effort on the outermost line, caller unknown
            if let Some(last) = lines.last() {
                details.current = parse_frame_line(last);
            }
        }
        None => {}
    }

    details
}
