//! crates/logging/src/lib.rs
//! Call-site-aware logging facade.
//!
//! # Overview
//!
//! This crate composes log records that carry their call site: each record
//! is prefixed with a depth-derived indent, an `Owner.function` label
//! resolved from the thread's frame registry, and optionally the current
//! session identity. Severity filtering happens before any of that work:
//! an inactive level costs one integer comparison and produces nothing.
//!
//! # Architecture
//!
//! [`Logger`] is the single entry-point type. It owns three collaborators
//! behind traits - a [`LogSink`] that receives composed records, an
//! optional [`IdentityProvider`] for `UID:` prefixes, and a
//! [`ThresholdSource`] consulted exactly once for the severity threshold.
//! Call-site data comes from the `callstack` crate's scope registry; this
//! crate never inspects the runtime stack.
//!
//! # Examples
//!
//! ```
//! use std::sync::Arc;
//! use callstack::{CallFrame, ScopeGuard};
//! use logging::{Logger, Severity};
//! use test_support::RecordingSink;
//!
//! let sink = Arc::new(RecordingSink::default());
//! let logger = Logger::new(sink.clone(), Arc::new(Severity::Debug));
//!
//! let _scope = ScopeGuard::enter(CallFrame::method("Cart", "checkout"));
//! logger.debug("starting checkout").unwrap();
//! assert!(logger.info("never stored").unwrap().is_none());
//! assert_eq!(sink.records().len(), 1);
//! ```

#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

mod collaborators;
mod dump;
mod facade;
mod format;
mod severity;
#[cfg(feature = "tracing")]
mod tracing_bridge;

pub use collaborators::{IdentityProvider, LogSink, QuerySource, ThresholdSource};
pub use dump::{DumpValue, ToDump};
pub use facade::Logger;
pub use severity::{MessageOrLevel, ParseSeverityError, Severity, resolve_rank};
#[cfg(feature = "tracing")]
pub use tracing_bridge::TracingSink;
