//! Core logger types

pub mod error;
pub mod line_format;
pub mod log_level;
pub mod log_record;
pub mod logger;
pub mod timestamp;

#[cfg(test)]
pub(crate) mod test_support;

pub use error::{LoggerError, Result};
pub use line_format::{Continuation, LineFormatter};
pub use log_level::LogLevel;
pub use log_record::{CallSite, LogRecord};
pub use logger::{LogEngine, LogEngineBuilder};
pub use timestamp::TimestampFormat;
