//! crates/logging/src/collaborators.rs
//! External collaborator interfaces consumed by the facade.
//!
//! The facade formats and filters; everything that touches the outside
//! world - where lines end up, who the current user is, where the threshold
//! comes from, which SQL statement ran last - arrives through these traits.
//! Implementations live with the surrounding application (or in the
//! `logging-sink` and `test-support` crates).

use crate::severity::Severity;

/// Destination for fully formatted log lines.
///
/// The facade hands over the resolved severity and the complete line and
/// ignores whatever the sink does with them; a sink failure must not corrupt
/// the string the facade returns to its caller.
pub trait LogSink: Send + Sync {
    /// Accepts one formatted record.
    fn write(&self, severity: Severity, message: &str);
}

/// Supplies the identity of the current session user, when one exists.
///
/// Consulted only for entry points that request identity prefixing. Both
/// lookups may return `None`; the formatter substitutes an empty marker
/// rather than failing.
pub trait IdentityProvider: Send + Sync {
    /// Returns the current user id, if a session is active.
    fn current_user_id(&self) -> Option<String>;

    /// Returns the current username, if a session is active.
    fn current_username(&self) -> Option<String>;
}

/// Supplies the process-wide severity threshold.
///
/// Read once on the first filter check and cached for the remaining life of
/// the [`Logger`](crate::Logger); there is no invalidation, matching
/// set-once-at-startup configuration semantics.
pub trait ThresholdSource: Send + Sync {
    /// Returns the threshold rank records are filtered against.
    fn threshold(&self) -> u8;
}

/// Supplies the text of the most recently executed database query.
///
/// Only consulted by query logging; passed per call rather than stored so
/// the facade holds no database handles.
pub trait QuerySource {
    /// Returns the last executed query text.
    fn last_query_text(&self) -> String;
}

impl ThresholdSource for u8 {
    fn threshold(&self) -> u8 {
        *self
    }
}

impl ThresholdSource for Severity {
    fn threshold(&self) -> u8 {
        self.rank()
    }
}
