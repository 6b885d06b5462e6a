//! crates/logging-sink/src/writer.rs
//! A [`LogSink`] over any [`io::Write`] implementor.

use std::io;
use std::sync::Mutex;

use logging::{LogSink, Severity};

use crate::line_mode::LineMode;

/// Streams composed records into a writer, one lock acquisition per record.
///
/// The record text and its terminator are assembled into a single buffer
/// before the write, so concurrent records never interleave mid-line. The
/// severity is not rendered; filtering already happened upstream and the
/// record text carries everything the facade composed.
#[derive(Debug)]
pub struct WriterSink<W> {
    writer: Mutex<W>,
    line_mode: LineMode,
}

impl<W: io::Write> WriterSink<W> {
    /// Creates a sink that terminates each record with a newline.
    pub fn new(writer: W) -> Self {
        Self::with_line_mode(writer, LineMode::WithNewline)
    }

    /// Creates a sink with an explicit [`LineMode`].
    pub fn with_line_mode(writer: W, line_mode: LineMode) -> Self {
        Self {
            writer: Mutex::new(writer),
            line_mode,
        }
    }

    /// The configured line mode.
    #[must_use]
    pub const fn line_mode(&self) -> LineMode {
        self.line_mode
    }

    /// Flushes the underlying writer.
    pub fn flush(&self) -> io::Result<()> {
        let mut writer = self.writer.lock().unwrap_or_else(|err| err.into_inner());
        writer.flush()
    }

    /// Consumes the sink and returns the writer.
    pub fn into_inner(self) -> W {
        self.writer
            .into_inner()
            .unwrap_or_else(|err| err.into_inner())
    }
}

impl<W: io::Write + Send> LogSink for WriterSink<W> {
    fn write(&self, _severity: Severity, message: &str) {
        let mut buffer = Vec::with_capacity(message.len() + 1);
        buffer.extend_from_slice(message.as_bytes());
        buffer.extend_from_slice(self.line_mode.terminator());
        let mut writer = self.writer.lock().unwrap_or_else(|err| err.into_inner());
        // A failed diagnostic write must not fail the application.
        let _ = writer.write_all(&buffer);
    }
}
