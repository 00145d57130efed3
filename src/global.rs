//! Process-wide engine
//!
//! A single [`LogEngine`] created on first use and shared by the whole
//! process. The emitting functions here treat a failed console write the way
//! `println!` does: they panic. Use the [`LogEngine`] methods directly when
//! the `Result` is wanted.
//!
//! Tests that count lines should build their own engine instead; the global
//! one is shared by every thread of the test binary.

use crate::core::{CallSite, LogEngine, LogLevel};
use std::sync::OnceLock;

static ENGINE: OnceLock<LogEngine> = OnceLock::new();

/// The process-wide engine, created with default settings on first use.
pub fn global() -> &'static LogEngine {
    ENGINE.get_or_init(LogEngine::new)
}

/// Install `engine` as the process-wide engine.
///
/// Fails, handing the engine back, if the global engine was already created
/// (explicitly or by an earlier logging call).
pub fn init(engine: LogEngine) -> Result<(), LogEngine> {
    ENGINE.set(engine)
}

/// Emit through the global engine, panicking if the console write fails.
#[doc(hidden)]
#[track_caller]
pub fn emit(level: LogLevel, message: &str) {
    let call_site = CallSite::caller();
    if let Err(e) = global().emit(level, message, call_site) {
        panic!("failed printing to console: {}", e);
    }
}

#[track_caller]
pub fn log(level: LogLevel, message: impl AsRef<str>) {
    emit(level, message.as_ref());
}

#[track_caller]
pub fn log_fatal(message: impl AsRef<str>) {
    emit(LogLevel::Fatal, message.as_ref());
}

#[track_caller]
pub fn log_error(message: impl AsRef<str>) {
    emit(LogLevel::Error, message.as_ref());
}

#[track_caller]
pub fn log_warn(message: impl AsRef<str>) {
    emit(LogLevel::Warn, message.as_ref());
}

#[track_caller]
pub fn log_info(message: impl AsRef<str>) {
    emit(LogLevel::Info, message.as_ref());
}

#[track_caller]
pub fn log_debug(message: impl AsRef<str>) {
    emit(LogLevel::Debug, message.as_ref());
}

#[track_caller]
pub fn log_trace(message: impl AsRef<str>) {
    emit(LogLevel::Trace, message.as_ref());
}

pub fn set_log_level(level: LogLevel) {
    global().set_level(level);
}

pub fn get_log_level() -> LogLevel {
    global().level()
}

pub fn get_total_num_lines_logged() -> u64 {
    global().total_lines_logged()
}

/// Restore the global engine's default level and zero its line counter.
pub fn reset() {
    global().reset();
}
