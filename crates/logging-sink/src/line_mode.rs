//! crates/logging-sink/src/line_mode.rs
//! Record termination policy for writer-backed sinks.

/// Controls whether a sink appends a newline after each record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineMode {
    /// Terminate every record with `\n`. The default: one record per line.
    #[default]
    WithNewline,
    /// Write records verbatim, with no terminator.
    WithoutNewline,
}

impl LineMode {
    /// The byte suffix this mode appends to each record.
    #[must_use]
    pub const fn terminator(self) -> &'static [u8] {
        match self {
            Self::WithNewline => b"\n",
            Self::WithoutNewline => b"",
        }
    }
}
