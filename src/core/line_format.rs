//! Console line layout
//!
//! Each line of a message is written as
//!
//! ```text
//! INFO  2020-12-14T12:18:40.3925130-05:00 \ (main.rs:31) Messages can be split over
//! INFO  2020-12-14T12:18:40.3925130-05:00 / (main.rs:31) multiple lines.
//! ```
//!
//! The level label is padded to five columns and the continuation marker
//! shows where a line sits within its message, so message text always starts
//! in the same column.

use super::log_record::LogRecord;
use super::timestamp::TimestampFormat;
use colored::Colorize;
use std::fmt::Write as _;

/// Position of a line within a (possibly multi-line) message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Continuation {
    /// The message has exactly one line: `>`
    Single,
    /// First line of a multi-line message: `\`
    First,
    /// Any line between the first and the last: `|`
    Middle,
    /// Last line of a multi-line message: `/`
    Last,
}

impl Continuation {
    /// Marker for the zero-based line `index` of a message with `total` lines.
    pub fn for_line(index: usize, total: usize) -> Self {
        if total <= 1 {
            Continuation::Single
        } else if index == 0 {
            Continuation::First
        } else if index + 1 >= total {
            Continuation::Last
        } else {
            Continuation::Middle
        }
    }

    pub fn as_char(&self) -> char {
        match self {
            Continuation::Single => '>',
            Continuation::First => '\\',
            Continuation::Middle => '|',
            Continuation::Last => '/',
        }
    }
}

/// Renders log records into console lines.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LineFormatter {
    pub timestamp_format: TimestampFormat,
    pub use_colors: bool,
}

impl LineFormatter {
    pub fn new(timestamp_format: TimestampFormat, use_colors: bool) -> Self {
        Self {
            timestamp_format,
            use_colors,
        }
    }

    fn level_label(&self, record: &LogRecord<'_>) -> String {
        let label = format!("{:<5}", record.level.to_str());
        if self.use_colors {
            label.color(record.level.color()).to_string()
        } else {
            label
        }
    }

    /// Append every line of `record` to `out`, each terminated by `\n`, and
    /// return the number of lines appended.
    ///
    /// The label and timestamp are rendered once and shared by all lines.
    /// `show_location` adds `(<file>:<line>) ` in front of the text.
    pub fn write_record(&self, record: &LogRecord<'_>, show_location: bool, out: &mut String) -> usize {
        let label = self.level_label(record);
        let timestamp = self.timestamp_format.format(&record.timestamp);
        let total = record.line_count();

        for (index, text) in record.lines().enumerate() {
            let marker = Continuation::for_line(index, total).as_char();
            // Writing into a String cannot fail
            let _ = if show_location {
                writeln!(out, "{} {} {} ({}) {}", label, timestamp, marker, record.call_site, text)
            } else {
                writeln!(out, "{} {} {} {}", label, timestamp, marker, text)
            };
        }

        total
    }

    /// Render `record` into a fresh string.
    pub fn format_record(&self, record: &LogRecord<'_>, show_location: bool) -> String {
        let mut out = String::with_capacity(record.message.len() + 64 * record.line_count());
        self.write_record(record, show_location, &mut out);
        out
    }
}
