//! Log level definitions

use super::error::LoggerError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Severity of a log message, ordered from most severe to most verbose.
///
/// The discriminant is the level's rank. A message is shown when its rank is
/// less than or equal to the rank of the engine's current threshold, so
/// `Fatal` is shown at every threshold and `Trace` only at `Trace`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[derive(Default)]
pub enum LogLevel {
    /// An irrecoverable problem has occurred
    Fatal = 0,
    /// A serious issue has occurred, but the program can keep running
    Error = 1,
    /// An issue occurred that might cause a larger problem later on
    Warn = 2,
    /// A normal, noteworthy application milestone
    #[default]
    Info = 3,
    /// Something that might be interesting while debugging
    Debug = 4,
    /// Fine-grained debugging detail
    Trace = 5,
}

impl LogLevel {
    /// Every level, from most severe to most verbose.
    pub const ALL: [LogLevel; 6] = [
        LogLevel::Fatal,
        LogLevel::Error,
        LogLevel::Warn,
        LogLevel::Info,
        LogLevel::Debug,
        LogLevel::Trace,
    ];

    pub fn to_str(&self) -> &'static str {
        match self {
            LogLevel::Fatal => "FATAL",
            LogLevel::Error => "ERROR",
            LogLevel::Warn => "WARN",
            LogLevel::Info => "INFO",
            LogLevel::Debug => "DEBUG",
            LogLevel::Trace => "TRACE",
        }
    }

    #[inline]
    pub fn rank(&self) -> u8 {
        *self as u8
    }

    /// Whether a message at this level passes the given threshold.
    #[inline]
    pub fn is_enabled_at(&self, threshold: LogLevel) -> bool {
        self.rank() <= threshold.rank()
    }

    /// Whether a threshold is verbose enough to annotate lines with their
    /// source location (`Debug` and `Trace`).
    #[inline]
    pub fn shows_location(&self) -> bool {
        self.rank() >= LogLevel::Debug.rank()
    }

    pub fn color(&self) -> colored::Color {
        use colored::Color::*;
        match self {
            LogLevel::Fatal => BrightRed,
            LogLevel::Error => Red,
            LogLevel::Warn => Yellow,
            LogLevel::Info => Green,
            LogLevel::Debug => Blue,
            LogLevel::Trace => BrightBlack,
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // `pad` keeps width/alignment flags working, e.g. `{:<5}`
        f.pad(self.to_str())
    }
}

impl FromStr for LogLevel {
    type Err = LoggerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "FATAL" => Ok(LogLevel::Fatal),
            "ERROR" => Ok(LogLevel::Error),
            "WARN" | "WARNING" => Ok(LogLevel::Warn),
            "INFO" => Ok(LogLevel::Info),
            "DEBUG" => Ok(LogLevel::Debug),
            "TRACE" => Ok(LogLevel::Trace),
            _ => Err(LoggerError::invalid_level(s)),
        }
    }
}

impl TryFrom<u8> for LogLevel {
    type Error = LoggerError;

    fn try_from(rank: u8) -> Result<Self, LoggerError> {
        LogLevel::ALL
            .get(usize::from(rank))
            .copied()
            .ok_or_else(|| LoggerError::invalid_level(rank.to_string()))
    }
}
