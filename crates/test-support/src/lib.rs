#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! crates/test-support/src/lib.rs
//! Shared test doubles for the sitelog workspace.
//!
//! Every collaborator trait the facade consumes has an in-memory fake
//! here: a recording sink, a fixed identity, a counting threshold source,
//! and a scripted query source. Tests assert on captured records instead
//! of real output.

use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use logging::{IdentityProvider, LogSink, QuerySource, Severity, ThresholdSource};

/// A [`LogSink`] that captures every record it receives.
#[derive(Debug, Default)]
pub struct RecordingSink {
    records: Mutex<Vec<(Severity, String)>>,
}

impl RecordingSink {
    /// Returns a copy of all captured `(severity, record)` pairs, in
    /// arrival order.
    pub fn records(&self) -> Vec<(Severity, String)> {
        self.records
            .lock()
            .unwrap_or_else(|err| err.into_inner())
            .clone()
    }

    /// Returns just the record text, in arrival order.
    pub fn messages(&self) -> Vec<String> {
        self.records()
            .into_iter()
            .map(|(_, message)| message)
            .collect()
    }

    /// Discards everything captured so far.
    pub fn clear(&self) {
        self.records
            .lock()
            .unwrap_or_else(|err| err.into_inner())
            .clear();
    }
}

impl LogSink for RecordingSink {
    fn write(&self, severity: Severity, message: &str) {
        self.records
            .lock()
            .unwrap_or_else(|err| err.into_inner())
            .push((severity, message.to_owned()));
    }
}

/// An [`IdentityProvider`] with fixed id and username values.
#[derive(Debug, Default, Clone)]
pub struct StaticIdentity {
    /// The value returned for the user id, if any.
    pub user_id: Option<String>,
    /// The value returned for the username, if any.
    pub username: Option<String>,
}

impl StaticIdentity {
    /// A logged-in identity with both fields set.
    #[must_use]
    pub fn logged_in(user_id: &str, username: &str) -> Self {
        Self {
            user_id: Some(user_id.to_owned()),
            username: Some(username.to_owned()),
        }
    }
}

impl IdentityProvider for StaticIdentity {
    fn current_user_id(&self) -> Option<String> {
        self.user_id.clone()
    }

    fn current_username(&self) -> Option<String> {
        self.username.clone()
    }
}

/// A [`ThresholdSource`] that returns a fixed rank and counts how many
/// times it was consulted.
#[derive(Debug)]
pub struct CountingThreshold {
    rank: u8,
    consults: AtomicUsize,
}

impl CountingThreshold {
    /// Creates a source that always reports `rank`.
    #[must_use]
    pub const fn new(rank: u8) -> Self {
        Self {
            rank,
            consults: AtomicUsize::new(0),
        }
    }

    /// How many times [`ThresholdSource::threshold`] has been called.
    pub fn consults(&self) -> usize {
        self.consults.load(Ordering::SeqCst)
    }
}

impl ThresholdSource for CountingThreshold {
    fn threshold(&self) -> u8 {
        self.consults.fetch_add(1, Ordering::SeqCst);
        self.rank
    }
}

/// A [`QuerySource`] scripted with a fixed statement.
#[derive(Debug, Clone)]
pub struct ScriptedQueries {
    /// The statement reported as most recently executed.
    pub last: String,
}

impl ScriptedQueries {
    /// Creates a source reporting `statement`.
    #[must_use]
    pub fn new(statement: &str) -> Self {
        Self {
            last: statement.to_owned(),
        }
    }
}

impl QuerySource for ScriptedQueries {
    fn last_query_text(&self) -> String {
        self.last.clone()
    }
}
