//! Timestamp formatting utilities
//!
//! The built-in formats render local time as ISO 8601 with its UTC offset,
//! so lines written on machines in different time zones can still be ordered.

use chrono::{DateTime, Local, TimeZone, Timelike};
use serde::{Deserialize, Serialize};

/// Timestamp format options
///
/// # Examples
///
/// ```
/// use log_console::core::TimestampFormat;
/// use chrono::Local;
///
/// let timestamp = TimestampFormat::RoundTrip.format(&Local::now());
/// // Output: "2020-12-14T12:17:16.3803730-05:00"
/// assert_eq!(timestamp.len(), 33);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimestampFormat {
    /// ISO 8601 with 100ns ticks and offset: `2020-12-14T12:17:16.3803730-05:00`
    ///
    /// This is the default format.
    #[default]
    RoundTrip,

    /// ISO 8601 with milliseconds and offset: `2020-12-14T12:17:16.380-05:00`
    Millis,

    /// ISO 8601 with microseconds and offset: `2020-12-14T12:17:16.380373-05:00`
    Micros,

    /// Custom strftime format
    ///
    /// Rendered as given. Unlike the other variants it carries no offset
    /// unless the format string includes one (`%z` or `%:z`), so lines may no
    /// longer be ISO 8601 timestamps.
    ///
    /// ```
    /// use log_console::core::TimestampFormat;
    ///
    /// let format = TimestampFormat::Custom("%d/%b/%Y:%H:%M:%S %z".to_string());
    /// ```
    Custom(String),
}

impl TimestampFormat {
    #[must_use]
    pub fn format<Tz>(&self, datetime: &DateTime<Tz>) -> String
    where
        Tz: TimeZone,
        Tz::Offset: std::fmt::Display,
    {
        match self {
            TimestampFormat::RoundTrip => {
                // chrono has no 7-digit fraction; leap seconds carry nanos >= 1e9
                let ticks = (datetime.nanosecond() % 1_000_000_000) / 100;
                format!(
                    "{}.{:07}{}",
                    datetime.format("%Y-%m-%dT%H:%M:%S"),
                    ticks,
                    datetime.format("%:z")
                )
            }
            TimestampFormat::Millis => datetime.format("%Y-%m-%dT%H:%M:%S%.3f%:z").to_string(),
            TimestampFormat::Micros => datetime.format("%Y-%m-%dT%H:%M:%S%.6f%:z").to_string(),
            TimestampFormat::Custom(format_str) => datetime.format(format_str).to_string(),
        }
    }

    /// Format the current local time
    #[must_use]
    pub fn now(&self) -> String {
        self.format(&Local::now())
    }
}
