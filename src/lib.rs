//! # Log Console
//!
//! A small, thread-safe console logger.
//!
//! ## Features
//!
//! - **Leveled**: `Fatal`, `Error`, `Warn`, `Info`, `Debug` and `Trace`, with a
//!   threshold that can change at runtime
//! - **Multi-line aware**: every line of a message gets the level and
//!   timestamp, plus a marker showing where it sits in the message
//! - **Source locations**: at `Debug` and `Trace` each line names the file and
//!   line of the logging call
//! - **Thread Safe**: concurrent messages are never interleaved
//!
//! ```text
//! INFO  2020-12-14T12:18:40.3551830-05:00 > The default log level is Info
//! INFO  2020-12-14T12:18:40.3925130-05:00 \ (main.rs:31) Messages can be split over
//! INFO  2020-12-14T12:18:40.3925130-05:00 / (main.rs:31) multiple lines.
//! ```

pub mod core;
pub mod global;
pub mod macros;

pub mod prelude {
    pub use crate::core::{
        CallSite, LogEngine, LogEngineBuilder, LogLevel, LoggerError, Result, TimestampFormat,
    };
    pub use crate::global::global;
}

pub use self::core::{
    CallSite, Continuation, LineFormatter, LogEngine, LogEngineBuilder, LogLevel, LogRecord,
    LoggerError, Result, TimestampFormat,
};
pub use global::{
    get_log_level, get_total_num_lines_logged, global, log, log_debug, log_error, log_fatal,
    log_info, log_trace, log_warn, reset, set_log_level,
};
