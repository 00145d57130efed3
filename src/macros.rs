//! Logging macros for ergonomic log message formatting.
//!
//! These macros provide a convenient interface for logging with automatic
//! string formatting, similar to `println!` and `format!`. The reported
//! source location is the macro invocation.
//!
//! Without an engine they log through the process-wide engine and panic if
//! the console write fails. With `engine =>` in front they log through that
//! engine and evaluate to its `Result<usize>`.
//!
//! # Examples
//!
//! ```
//! use log_console::prelude::*;
//! use log_console::{info, warn};
//!
//! // Global engine
//! info!("Server started");
//! let port = 8080;
//! info!("Server listening on port {}", port);
//!
//! // Explicit engine
//! let engine = LogEngine::new();
//! let lines = warn!(engine => "Retry attempt {} of {}", 3, 5)?;
//! assert_eq!(lines, 1);
//! # Ok::<(), LoggerError>(())
//! ```

/// Log a message at an explicit level.
///
/// ```
/// use log_console::{log, LogLevel};
/// log!(LogLevel::Info, "Simple message");
/// log!(LogLevel::Error, "Error code: {}", 500);
/// ```
#[macro_export]
macro_rules! log {
    ($engine:expr => $level:expr, $($arg:tt)+) => {
        $engine.emit($level, &::std::format!($($arg)+), $crate::CallSite::caller())
    };
    ($level:expr, $($arg:tt)+) => {
        $crate::global::emit($level, &::std::format!($($arg)+))
    };
}

/// Log a fatal-level message.
///
/// ```
/// use log_console::fatal;
/// fatal!("Unable to recover from error: {}", "disk full");
/// ```
#[macro_export]
macro_rules! fatal {
    ($engine:expr => $($arg:tt)+) => {
        $crate::log!($engine => $crate::LogLevel::Fatal, $($arg)+)
    };
    ($($arg:tt)+) => {
        $crate::log!($crate::LogLevel::Fatal, $($arg)+)
    };
}

/// Log an error-level message.
#[macro_export]
macro_rules! error {
    ($engine:expr => $($arg:tt)+) => {
        $crate::log!($engine => $crate::LogLevel::Error, $($arg)+)
    };
    ($($arg:tt)+) => {
        $crate::log!($crate::LogLevel::Error, $($arg)+)
    };
}

/// Log a warning-level message.
#[macro_export]
macro_rules! warn {
    ($engine:expr => $($arg:tt)+) => {
        $crate::log!($engine => $crate::LogLevel::Warn, $($arg)+)
    };
    ($($arg:tt)+) => {
        $crate::log!($crate::LogLevel::Warn, $($arg)+)
    };
}

/// Log an info-level message.
#[macro_export]
macro_rules! info {
    ($engine:expr => $($arg:tt)+) => {
        $crate::log!($engine => $crate::LogLevel::Info, $($arg)+)
    };
    ($($arg:tt)+) => {
        $crate::log!($crate::LogLevel::Info, $($arg)+)
    };
}

/// Log a debug-level message.
#[macro_export]
macro_rules! debug {
    ($engine:expr => $($arg:tt)+) => {
        $crate::log!($engine => $crate::LogLevel::Debug, $($arg)+)
    };
    ($($arg:tt)+) => {
        $crate::log!($crate::LogLevel::Debug, $($arg)+)
    };
}

/// Log a trace-level message.
///
/// ```
/// use log_console::{trace, LogEngine, LogLevel};
/// let engine = LogEngine::builder().level(LogLevel::Trace).build();
/// trace!(engine => "Entering function: calculate()").unwrap();
/// trace!(engine => "Variable value: {}", 42).unwrap();
/// ```
#[macro_export]
macro_rules! trace {
    ($engine:expr => $($arg:tt)+) => {
        $crate::log!($engine => $crate::LogLevel::Trace, $($arg)+)
    };
    ($($arg:tt)+) => {
        $crate::log!($crate::LogLevel::Trace, $($arg)+)
    };
}

#[cfg(test)]
mod tests {
    use crate::core::test_support::captured_engine;
    use crate::core::{LogEngine, LogLevel};

    fn engine(level: LogLevel) -> LogEngine {
        LogEngine::builder()
            .level(level)
            .build_with_writer(Box::new(std::io::sink()))
    }

    #[test]
    fn test_log_macro() {
        let engine = engine(LogLevel::Info);
        assert_eq!(log!(engine => LogLevel::Info, "Test message").unwrap(), 1);
        assert_eq!(log!(engine => LogLevel::Info, "Formatted: {}\n{}", 42, 43).unwrap(), 2);
        assert_eq!(log!(engine => LogLevel::Debug, "Hidden").unwrap(), 0);
        assert_eq!(engine.total_lines_logged(), 3);
    }

    #[test]
    fn test_level_macros() {
        let engine = engine(LogLevel::Trace);
        trace!(engine => "Trace message").unwrap();
        debug!(engine => "Count: {}", 5).unwrap();
        info!(engine => "Items: {}", 100).unwrap();
        warn!(engine => "Retry {} of {}", 1, 3).unwrap();
        error!(engine => "Code: {}", 500).unwrap();
        fatal!(engine => "Critical failure: {}", "system").unwrap();
        assert_eq!(engine.total_lines_logged(), 6);
    }

    #[test]
    fn test_macro_reports_invocation_site() {
        let (engine, out) = captured_engine(LogLevel::Trace);

        let info_line = line!() + 1;
        info!(engine => "at {}", "info").unwrap();
        let log_line = line!() + 1;
        log!(engine => LogLevel::Warn, "at log").unwrap();
        let fatal_line = line!() + 1;
        fatal!(&engine => "at fatal").unwrap();

        for (line, text) in [(info_line, "at info"), (log_line, "at log"), (fatal_line, "at fatal")] {
            let expected = format!("(macros.rs:{}) {}", line, text);
            assert!(out.line_ending_with(text).ends_with(&expected), "{}", out.text());
        }
    }

    #[test]
    fn test_macro_with_reference_engine() {
        let engine = engine(LogLevel::Warn);
        let handle = &engine;
        assert_eq!(info!(handle => "filtered").unwrap(), 0);
        assert_eq!(error!(handle => "shown").unwrap(), 1);
    }
}
