//! The logging engine

use super::{
    error::{LoggerError, Result},
    line_format::LineFormatter,
    log_level::LogLevel,
    log_record::{CallSite, LogRecord},
    timestamp::TimestampFormat,
};
use parking_lot::Mutex;
use std::fmt;
use std::io::{self, Write};

/// State guarded by the engine lock.
struct EngineState {
    level: LogLevel,
    total_lines: u64,
    writer: Box<dyn Write + Send>,
}

/// A console logger with a runtime-adjustable threshold.
///
/// One lock guards the threshold, the line counter and the console. An emit
/// call holds it from the level check until the counter is updated, so the
/// lines of concurrent messages never interleave and the counter always
/// matches what was written.
///
/// The lock is not reentrant: a thread must not log through an engine while
/// it is already inside one of that engine's calls.
///
/// # Example
///
/// ```
/// use log_console::prelude::*;
///
/// let engine = LogEngine::new();
/// engine.info("server started")?;
/// engine.trace("not shown at the default level")?;
/// assert_eq!(engine.total_lines_logged(), 1);
/// # Ok::<(), LoggerError>(())
/// ```
pub struct LogEngine {
    state: Mutex<EngineState>,
    formatter: LineFormatter,
}

impl LogEngine {
    /// Create an engine writing to stdout at the default level (`Info`).
    #[must_use]
    pub fn new() -> Self {
        Self::builder().build()
    }

    #[must_use]
    pub fn builder() -> LogEngineBuilder {
        LogEngineBuilder::new()
    }

    pub(crate) fn with_writer(
        level: LogLevel,
        formatter: LineFormatter,
        writer: Box<dyn Write + Send>,
    ) -> Self {
        Self {
            state: Mutex::new(EngineState {
                level,
                total_lines: 0,
                writer,
            }),
            formatter,
        }
    }

    pub fn set_level(&self, level: LogLevel) {
        self.state.lock().level = level;
    }

    /// Current threshold.
    ///
    /// Takes the engine lock, so the value is ordered with respect to every
    /// emit and `set_level` call.
    pub fn level(&self) -> LogLevel {
        self.state.lock().level
    }

    /// Number of lines written since creation or the last `reset()`.
    pub fn total_lines_logged(&self) -> u64 {
        self.state.lock().total_lines
    }

    /// Restore the default level and zero the line counter.
    pub fn reset(&self) {
        let mut state = self.state.lock();
        state.level = LogLevel::default();
        state.total_lines = 0;
    }

    /// Whether a message at `level` would currently be written.
    pub fn is_enabled(&self, level: LogLevel) -> bool {
        level.is_enabled_at(self.level())
    }

    /// Write `message` at `level`, attributed to `call_site`.
    ///
    /// Returns the number of lines written: zero when the level is filtered
    /// out, otherwise one per line of the message.
    ///
    /// All lines of the message go out in one write. If that write fails the
    /// error is returned and the counter is left unchanged, even though a
    /// prefix of the output may already have reached the console.
    pub fn emit(&self, level: LogLevel, message: &str, call_site: CallSite) -> Result<usize> {
        let mut state = self.state.lock();

        if !level.is_enabled_at(state.level) {
            return Ok(0);
        }

        let record = LogRecord::new(level, message, call_site);
        let show_location = state.level.shows_location();
        let output = self.formatter.format_record(&record, show_location);
        let lines = record.line_count();

        Self::write_out(&mut *state.writer, output.as_bytes(), lines)?;

        state.total_lines += lines as u64;
        Ok(lines)
    }

    fn write_out(writer: &mut dyn Write, bytes: &[u8], lines: usize) -> Result<()> {
        writer
            .write_all(bytes)
            .and_then(|()| writer.flush())
            .map_err(|e| {
                LoggerError::io_operation(
                    "writing to console",
                    format!("{} line(s) not written", lines),
                    e,
                )
            })
    }

    /// Log `message` at an explicit level.
    #[track_caller]
    #[inline]
    pub fn log(&self, level: LogLevel, message: impl AsRef<str>) -> Result<usize> {
        self.emit(level, message.as_ref(), CallSite::caller())
    }

    /// Log an irrecoverable problem.
    #[track_caller]
    #[inline]
    pub fn fatal(&self, message: impl AsRef<str>) -> Result<usize> {
        self.emit(LogLevel::Fatal, message.as_ref(), CallSite::caller())
    }

    /// Log a serious issue the program can keep running after.
    #[track_caller]
    #[inline]
    pub fn error(&self, message: impl AsRef<str>) -> Result<usize> {
        self.emit(LogLevel::Error, message.as_ref(), CallSite::caller())
    }

    /// Log an issue that might cause a larger problem later on.
    #[track_caller]
    #[inline]
    pub fn warn(&self, message: impl AsRef<str>) -> Result<usize> {
        self.emit(LogLevel::Warn, message.as_ref(), CallSite::caller())
    }

    /// Log a normal, noteworthy application milestone.
    #[track_caller]
    #[inline]
    pub fn info(&self, message: impl AsRef<str>) -> Result<usize> {
        self.emit(LogLevel::Info, message.as_ref(), CallSite::caller())
    }

    /// Log something that might be interesting while debugging.
    #[track_caller]
    #[inline]
    pub fn debug(&self, message: impl AsRef<str>) -> Result<usize> {
        self.emit(LogLevel::Debug, message.as_ref(), CallSite::caller())
    }

    /// Log fine-grained debugging detail.
    #[track_caller]
    #[inline]
    pub fn trace(&self, message: impl AsRef<str>) -> Result<usize> {
        self.emit(LogLevel::Trace, message.as_ref(), CallSite::caller())
    }
}

impl Default for LogEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for LogEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.state.lock();
        f.debug_struct("LogEngine")
            .field("level", &state.level)
            .field("total_lines", &state.total_lines)
            .field("formatter", &self.formatter)
            .finish_non_exhaustive()
    }
}

/// Builder for constructing a [`LogEngine`] with a fluent API
///
/// # Example
/// ```
/// use log_console::prelude::*;
///
/// let engine = LogEngine::builder()
///     .level(LogLevel::Debug)
///     .timestamp_format(TimestampFormat::Micros)
///     .colors(false)
///     .build();
/// assert_eq!(engine.level(), LogLevel::Debug);
/// ```
#[derive(Debug, Clone, Default)]
pub struct LogEngineBuilder {
    level: LogLevel,
    timestamp_format: TimestampFormat,
    use_colors: bool,
}

impl LogEngineBuilder {
    /// Create a new builder with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the initial threshold. `reset()` still restores `Info`.
    #[must_use = "builder methods return a new value"]
    pub fn level(mut self, level: LogLevel) -> Self {
        self.level = level;
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn timestamp_format(mut self, format: TimestampFormat) -> Self {
        self.timestamp_format = format;
        self
    }

    /// Color the level label. Off by default.
    #[must_use = "builder methods return a new value"]
    pub fn colors(mut self, use_colors: bool) -> Self {
        self.use_colors = use_colors;
        self
    }

    /// Build an engine writing to stdout
    pub fn build(self) -> LogEngine {
        LogEngine::with_writer(
            self.level,
            LineFormatter::new(self.timestamp_format, self.use_colors),
            Box::new(io::stdout()),
        )
    }

    #[cfg(test)]
    pub(crate) fn build_with_writer(self, writer: Box<dyn Write + Send>) -> LogEngine {
        LogEngine::with_writer(
            self.level,
            LineFormatter::new(self.timestamp_format, self.use_colors),
            writer,
        )
    }
}
