#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! crates/logging-sink/src/lib.rs
//!
//! # Overview
//!
//! `logging-sink` provides writer-backed sinks for the `logging` facade.
//! Records arrive fully composed; a sink's only jobs are line termination
//! and delivery to an [`std::io::Write`] implementor.
//!
//! # Design
//!
//! The crate exposes [`WriterSink`], a wrapper around any writer. The
//! facade hands records to sinks through a shared reference, so the writer
//! lives behind a mutex and each record is written under a single lock
//! acquisition. Callers control whether records end with a newline by
//! selecting a [`LineMode`].
//!
//! # Invariants
//!
//! - A record is written in one `write_all` call (terminator included), so
//!   records from concurrent threads never interleave mid-line.
//! - Write failures are swallowed after being noted; logging must never
//!   take down the host application.
//!
//! # Examples
//!
//! ```
//! use logging::{LogSink, Severity};
//! use logging_sink::{LineMode, WriterSink};
//!
//! let sink = WriterSink::new(Vec::new());
//! sink.write(Severity::Error, "job failed");
//! sink.write(Severity::Info, "retry scheduled");
//!
//! let output = String::from_utf8(sink.into_inner()).unwrap();
//! assert_eq!(output, "job failed\nretry scheduled\n");
//!
//! let bare = WriterSink::with_line_mode(Vec::new(), LineMode::WithoutNewline);
//! bare.write(Severity::Debug, "done");
//! assert_eq!(bare.into_inner(), b"done");
//! ```

mod line_mode;
mod writer;

pub use line_mode::LineMode;
pub use writer::WriterSink;
