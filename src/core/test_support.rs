//! Helpers shared by the unit tests

use super::{LogEngine, LogLevel};
use parking_lot::Mutex;
use std::io::{self, Write};
use std::sync::Arc;

/// Writer that keeps everything written to it.
#[derive(Clone, Default)]
pub(crate) struct Captured(Arc<Mutex<Vec<u8>>>);

impl Captured {
    pub(crate) fn text(&self) -> String {
        String::from_utf8(self.0.lock().clone()).expect("utf-8 output")
    }

    pub(crate) fn lines(&self) -> Vec<String> {
        self.text().lines().map(String::from).collect()
    }

    /// The line whose text ends with `suffix`.
    pub(crate) fn line_ending_with(&self, suffix: &str) -> String {
        self.lines()
            .into_iter()
            .find(|line| line.ends_with(suffix))
            .unwrap_or_else(|| panic!("no line ending with {:?} in:\n{}", suffix, self.text()))
    }
}

impl Write for Captured {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

pub(crate) fn captured_engine(level: LogLevel) -> (LogEngine, Captured) {
    let out = Captured::default();
    let engine = LogEngine::builder()
        .level(level)
        .build_with_writer(Box::new(out.clone()));
    (engine, out)
}

/// Split an output line into label, timestamp, marker and remainder.
pub(crate) fn fields(line: &str) -> (String, String, char, String) {
    let label = line[..5].to_string();
    let rest = &line[6..];
    let (timestamp, rest) = rest.split_once(' ').expect("timestamp");
    let mut chars = rest.chars();
    let marker = chars.next().expect("marker");
    let text = chars.as_str().strip_prefix(' ').expect("space after marker");
    (label, timestamp.to_string(), marker, text.to_string())
}
