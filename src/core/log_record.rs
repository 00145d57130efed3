//! Per-call log record and call site capture

use super::log_level::LogLevel;
use chrono::{DateTime, Local};
use std::fmt;
use std::panic::Location;
use std::path::Path;

/// Source location of a logging call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CallSite {
    pub file: &'static str,
    pub line: u32,
}

impl CallSite {
    pub const fn new(file: &'static str, line: u32) -> Self {
        Self { file, line }
    }

    /// Capture the location of the caller.
    ///
    /// Every forwarding function between the user's call expression and this
    /// one must itself be `#[track_caller]`, otherwise the forwarding frame is
    /// reported instead.
    #[track_caller]
    #[inline]
    pub fn caller() -> Self {
        Location::caller().into()
    }

    /// Base name of the source file, e.g. `main.rs` for `src/bin/main.rs`.
    pub fn file_name(&self) -> &'static str {
        Path::new(self.file)
            .file_name()
            .and_then(|name| name.to_str())
            .unwrap_or(self.file)
    }
}

impl From<&'static Location<'static>> for CallSite {
    fn from(location: &'static Location<'static>) -> Self {
        Self::new(location.file(), location.line())
    }
}

impl fmt::Display for CallSite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.file_name(), self.line)
    }
}

/// One logging call, built when the call passes the level check and dropped
/// once its lines are written.
#[derive(Debug, Clone)]
pub struct LogRecord<'a> {
    pub level: LogLevel,
    pub message: &'a str,
    pub call_site: CallSite,
    pub timestamp: DateTime<Local>,
}

impl<'a> LogRecord<'a> {
    /// Build a record stamped with the current local time.
    pub fn new(level: LogLevel, message: &'a str, call_site: CallSite) -> Self {
        Self::with_timestamp(level, message, call_site, Local::now())
    }

    pub fn with_timestamp(
        level: LogLevel,
        message: &'a str,
        call_site: CallSite,
        timestamp: DateTime<Local>,
    ) -> Self {
        Self {
            level,
            message,
            call_site,
            timestamp,
        }
    }

    /// Lines of the message, split on `\r\n`, `\n` or a lone `\r`.
    ///
    /// Always yields line breaks plus one lines: `""` is one empty line and a
    /// trailing break ends the message with an empty line, so `"a\n"` is
    /// `["a", ""]` and is written as a two-line message.
    pub fn lines(&self) -> Lines<'a> {
        Lines {
            rest: Some(self.message),
        }
    }

    /// Number of lines `lines()` yields.
    pub fn line_count(&self) -> usize {
        self.lines().count()
    }
}

/// Iterator over the lines of a message, see [`LogRecord::lines`].
#[derive(Debug, Clone)]
pub struct Lines<'a> {
    rest: Option<&'a str>,
}

impl<'a> Iterator for Lines<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        let rest = self.rest?;
        match rest.find(['\r', '\n']) {
            Some(pos) => {
                let skip = if rest[pos..].starts_with("\r\n") { 2 } else { 1 };
                self.rest = Some(&rest[pos + skip..]);
                Some(&rest[..pos])
            }
            None => {
                self.rest = None;
                Some(rest)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(message: &str) -> LogRecord<'_> {
        LogRecord::new(LogLevel::Info, message, CallSite::new("src/lib.rs", 1))
    }

    #[test]
    fn test_call_site_file_name() {
        assert_eq!(CallSite::new("src/core/logger.rs", 10).file_name(), "logger.rs");
        assert_eq!(CallSite::new("main.rs", 3).file_name(), "main.rs");
        assert_eq!(CallSite::new("tests/a.rs", 42).to_string(), "a.rs:42");
    }

    #[test]
    fn test_call_site_caller() {
        let expected_line = line!() + 1;
        let site = CallSite::caller();
        assert_eq!(site.line, expected_line);
        assert_eq!(site.file_name(), "log_record.rs");
    }

    #[track_caller]
    fn forwarded() -> CallSite {
        CallSite::caller()
    }

    #[test]
    fn test_call_site_through_forwarding_frame() {
        let expected_line = line!() + 1;
        let site = forwarded();
        assert_eq!(site.line, expected_line);
    }

    #[test]
    fn test_single_line() {
        let rec = record("hello");
        assert_eq!(rec.lines().collect::<Vec<_>>(), vec!["hello"]);
        assert_eq!(rec.line_count(), 1);
    }

    #[test]
    fn test_empty_message_is_one_line() {
        let rec = record("");
        assert_eq!(rec.lines().collect::<Vec<_>>(), vec![""]);
        assert_eq!(rec.line_count(), 1);
    }

    #[test]
    fn test_lone_carriage_return_breaks_line() {
        let rec = record("x\ry");
        assert_eq!(rec.lines().collect::<Vec<_>>(), vec!["x", "y"]);
        assert_eq!(rec.line_count(), 2);

        let rec = record("a\r\nb\rc\nd\r");
        assert_eq!(rec.lines().collect::<Vec<_>>(), vec!["a", "b", "c", "d", ""]);
        assert_eq!(rec.line_count(), 5);
    }

    #[test]
    fn test_trailing_break_adds_empty_line() {
        let rec = record("a\n");
        assert_eq!(rec.lines().collect::<Vec<_>>(), vec!["a", ""]);
        assert_eq!(rec.line_count(), 2);
    }

    #[test]
    fn test_multi_line() {
        let rec = record("a\nb\r\nc\n");
        assert_eq!(rec.lines().collect::<Vec<_>>(), vec!["a", "b", "c", ""]);
        assert_eq!(rec.line_count(), 4);
    }
}
