//! crates/logging/src/facade.rs
//! The public logging entry points.
//!
//! Every entry point follows the same control flow: gate on severity first
//! (an inactive level returns `Ok(None)` without touching the frame
//! registry or the sink), then resolve the caller and indent, compose the
//! record, hand it to the sink, and return the composed string so callers
//! can embed it in further messages. No entry point alters program control
//! flow or business values; the exit-wrapping [`end_fn`](Logger::end_fn)
//! exists precisely to pass its value through unchanged.

use std::error::Error;
use std::sync::{Arc, OnceLock};
use std::time::Instant;

use callstack::{CallerSpec, StackUnderflow, capture_chain, indent, resolve_spec};

use crate::collaborators::{IdentityProvider, LogSink, QuerySource, ThresholdSource};
use crate::dump::ToDump;
use crate::format;
use crate::severity::{MessageOrLevel, Severity};

/// Call-site-aware logging facade.
///
/// A `Logger` owns its collaborators and a lazily cached severity
/// threshold: the [`ThresholdSource`] is consulted exactly once, on the
/// first filter check, and the resulting rank is reused for the life of the
/// logger. Applications construct one logger per process.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use callstack::{CallFrame, ScopeGuard};
/// use logging::{Logger, Severity};
/// use test_support::RecordingSink;
///
/// let sink = Arc::new(RecordingSink::default());
/// let logger = Logger::new(sink.clone(), Arc::new(Severity::All));
///
/// let _scope = ScopeGuard::enter(CallFrame::method("Widget", "render"));
/// let line = logger.error("failed").unwrap().unwrap();
/// assert!(line.contains("Widget.render"));
/// assert!(line.ends_with("failed"));
/// ```
pub struct Logger {
    sink: Arc<dyn LogSink>,
    identity: Option<Arc<dyn IdentityProvider>>,
    threshold_source: Arc<dyn ThresholdSource>,
    threshold: OnceLock<u8>,
    started: Instant,
}

impl Logger {
    /// Creates a logger over a sink and a threshold source.
    #[must_use]
    pub fn new(sink: Arc<dyn LogSink>, threshold: Arc<dyn ThresholdSource>) -> Self {
        Self {
            sink,
            identity: None,
            threshold_source: threshold,
            threshold: OnceLock::new(),
            started: Instant::now(),
        }
    }

    /// Attaches a session identity provider for identity-prefixed records.
    #[must_use]
    pub fn with_identity(mut self, identity: Arc<dyn IdentityProvider>) -> Self {
        self.identity = Some(identity);
        self
    }

    /// Returns the cached threshold rank, consulting the source on first
    /// use.
    pub fn threshold(&self) -> u8 {
        *self
            .threshold
            .get_or_init(|| self.threshold_source.threshold())
    }

    /// Reports whether records at `severity` pass the configured threshold.
    pub fn is_active(&self, severity: Severity) -> bool {
        severity.is_active(self.threshold())
    }

    fn rank_active(&self, rank: u8) -> bool {
        rank <= self.threshold()
    }

    /// Maps a compat-shim rank to a loggable severity: `0` is the silence
    /// threshold, never a record level, and non-canonical ranks clamp to
    /// `All`. Returns `None` when nothing should be written.
    fn compat_severity(&self, rank: u8) -> Option<Severity> {
        if rank == 0 || !self.rank_active(rank) {
            return None;
        }
        Some(match rank {
            1 => Severity::Error,
            2 => Severity::Debug,
            3 => Severity::Info,
            _ => Severity::All,
        })
    }

    fn identity_provider(&self) -> Option<&dyn IdentityProvider> {
        self.identity.as_deref()
    }

    /// The generic record path every labelled entry point funnels through.
    ///
    /// `caller` is a skip depth or a pre-captured frame; when facade calls
    /// are wrapped in further helper layers, each layer adds one to the
    /// skip depth. On an active level the composed record is written to the
    /// sink and returned; an inactive level produces neither.
    pub fn log_message(
        &self,
        severity: Severity,
        message: &str,
        caller: impl Into<CallerSpec>,
        log_user: bool,
    ) -> Result<Option<String>, StackUnderflow> {
        if !self.is_active(severity) {
            return Ok(None);
        }
        let frame = resolve_spec(caller.into())?;
        let identity = if log_user {
            format::identity_prefix(self.identity_provider())
        } else {
            String::new()
        };
        let line = format::compose(&indent(), &frame.label(), &identity, message);
        self.sink.write(severity, &line);
        Ok(Some(line))
    }

    /// Logs `message` at the default Debug level, without identity.
    pub fn log(&self, message: &str) -> Result<Option<String>, StackUnderflow> {
        self.log_message(Severity::Debug, message, 0_usize, false)
    }

    /// Logs `message` at an explicit severity, without identity.
    pub fn log_at(
        &self,
        severity: Severity,
        message: &str,
    ) -> Result<Option<String>, StackUnderflow> {
        self.log_message(severity, message, 0_usize, false)
    }

    /// Logs an error record, identity prefix on.
    pub fn error(&self, message: &str) -> Result<Option<String>, StackUnderflow> {
        self.error_with(message, true)
    }

    /// Logs an error record with an explicit identity-prefix choice.
    pub fn error_with(
        &self,
        message: &str,
        log_user: bool,
    ) -> Result<Option<String>, StackUnderflow> {
        self.log_message(Severity::Error, message, 0_usize, log_user)
    }

    /// Logs an error built from `error` and its cause chain, prefixed by a
    /// context message.
    pub fn exception(
        &self,
        error: &dyn Error,
        message: &str,
    ) -> Result<Option<String>, StackUnderflow> {
        self.error(&format::exception_text(message, error))
    }

    /// Logs a debug record. Identity prefixing defaults off here - debug
    /// records are assumed high-volume.
    pub fn debug(&self, message: &str) -> Result<Option<String>, StackUnderflow> {
        self.debug_with(message, false)
    }

    /// Logs a debug record with an explicit identity-prefix choice.
    pub fn debug_with(
        &self,
        message: &str,
        log_user: bool,
    ) -> Result<Option<String>, StackUnderflow> {
        self.log_message(Severity::Debug, message, 0_usize, log_user)
    }

    /// Logs an info record, identity prefix on.
    pub fn info(&self, message: &str) -> Result<Option<String>, StackUnderflow> {
        self.info_with(message, true)
    }

    /// Logs an info record with an explicit identity-prefix choice.
    pub fn info_with(
        &self,
        message: &str,
        log_user: bool,
    ) -> Result<Option<String>, StackUnderflow> {
        self.log_message(Severity::Info, message, 0_usize, log_user)
    }

    /// Logs a warning: an info-level record with a `WARNING ` message
    /// prefix.
    pub fn warn(&self, message: &str) -> Result<Option<String>, StackUnderflow> {
        self.warn_with(message, true)
    }

    /// Logs a warning with an explicit identity-prefix choice.
    pub fn warn_with(
        &self,
        message: &str,
        log_user: bool,
    ) -> Result<Option<String>, StackUnderflow> {
        self.log_message(Severity::Info, &format!("WARNING {message}"), 0_usize, log_user)
    }

    /// Logs the current session's username (and id prefix) with an optional
    /// trailing message.
    pub fn user(&self, message: &str) -> Result<Option<String>, StackUnderflow> {
        let username = self
            .identity_provider()
            .and_then(IdentityProvider::current_username)
            .unwrap_or_default();
        self.log_message(
            Severity::Info,
            &format!("USERNAME:{username} {message}"),
            0_usize,
            true,
        )
    }

    /// Logs a structured dump of `value`.
    ///
    /// Simple sequences flatten to a quoted, comma-joined list; nested or
    /// keyed values render as a full recursive listing of public data
    /// fields.
    pub fn dump<T: ToDump + ?Sized>(
        &self,
        value: &T,
        message: &str,
        severity: Severity,
    ) -> Result<Option<String>, StackUnderflow> {
        if !self.is_active(severity) {
            return Ok(None);
        }
        let record = format::dump_record(message, &value.to_dump().render());
        self.log_message(severity, &record, 0_usize, false)
    }

    /// Logs `value` as a quoted, comma-joined list of its leaves.
    pub fn flat<T: ToDump + ?Sized>(
        &self,
        value: &T,
        message: &str,
        severity: Severity,
    ) -> Result<Option<String>, StackUnderflow> {
        if !self.is_active(severity) {
            return Ok(None);
        }
        let record = format::flat_record(message, &value.to_dump().render_flat());
        self.log_message(severity, &record, 0_usize, false)
    }

    /// Logs a `START:` record for the innermost registered scope.
    ///
    /// With `dump_args` the record includes the argument values the scope
    /// registered (the opt-in expensive path) and the frame's file/line. A
    /// non-empty `message` is logged as a second, labelled record from the
    /// same captured frame.
    pub fn start_fn(
        &self,
        dump_args: bool,
        message: &str,
        severity: Severity,
    ) -> Result<Option<String>, StackUnderflow> {
        if !self.is_active(severity) {
            return Ok(None);
        }
        let frame = resolve_spec(CallerSpec::Depth(0))?;
        let line = format!("{}{}", indent(), format::start_record(&frame, dump_args));
        self.sink.write(severity, &line);
        if !message.is_empty() {
            self.log_message(severity, message, frame, false)?;
        }
        Ok(Some(line))
    }

    /// Logs an `END:` record and passes `result` through unchanged.
    ///
    /// The passthrough holds for every input and every threshold: whether
    /// or not a record is written, the caller gets its value back. A frame
    /// registry underflow here is a scope-accounting bug in the calling
    /// code; it skips the write (asserting in debug builds) rather than
    /// losing the value.
    pub fn end_fn<T: ToDump>(&self, result: T, message: &str, severity: Severity) -> T {
        if self.is_active(severity) {
            match resolve_spec(CallerSpec::Depth(0)) {
                Ok(frame) => {
                    let record =
                        format::end_record(&frame.label(), message, &result.to_dump().render());
                    self.sink.write(severity, &format!("{}{record}", indent()));
                }
                Err(underflow) => {
                    debug_assert!(false, "end_fn outside a registered scope: {underflow}");
                }
            }
        }
        result
    }

    /// Logs the caller-pair record at the default Debug level.
    pub fn caller(&self) -> Result<Option<String>, StackUnderflow> {
        self.caller_at(Severity::Debug, "")
    }

    /// Logs `current was called by parent() message` at `severity`.
    pub fn caller_at(
        &self,
        severity: Severity,
        message: &str,
    ) -> Result<Option<String>, StackUnderflow> {
        if !self.is_active(severity) {
            return Ok(None);
        }
        let current = resolve_spec(CallerSpec::Depth(0))?;
        let parent = resolve_spec(CallerSpec::Depth(1))?;
        let line = format!(
            "{}{}",
            indent(),
            format::caller_pair(&current.label(), &parent.label(), message)
        );
        self.sink.write(severity, &line);
        Ok(Some(line))
    }

    /// Compatibility shim: a single argument that resolves to a severity is
    /// the level (with an empty message), anything else is the message at
    /// the default Debug level.
    pub fn caller_compat(&self, arg: &str) -> Result<Option<String>, StackUnderflow> {
        match MessageOrLevel::classify(arg) {
            MessageOrLevel::Level(rank) => match self.compat_severity(rank) {
                Some(severity) => self.caller_at(severity, ""),
                None => Ok(None),
            },
            MessageOrLevel::Message(message) => self.caller_at(Severity::Debug, message),
        }
    }

    /// Logs the full backtrace block at the default Debug level.
    pub fn backtrace(&self) -> Result<Option<Vec<String>>, StackUnderflow> {
        self.backtrace_at(Severity::Debug, "")
    }

    /// Logs one line per registered scope, oldest caller first, each with
    /// its file and line; returns the bare labels.
    pub fn backtrace_at(
        &self,
        severity: Severity,
        message: &str,
    ) -> Result<Option<Vec<String>>, StackUnderflow> {
        if !self.is_active(severity) {
            return Ok(None);
        }
        let chain = capture_chain();
        let (mut block, labels) = format::backtrace_block(&chain);
        if !message.is_empty() {
            block.push(' ');
            block.push_str(message);
        }
        self.log_message(severity, &block, 0_usize, false)?;
        Ok(Some(labels))
    }

    /// Compatibility shim for [`backtrace_at`](Self::backtrace_at) argument
    /// sniffing.
    pub fn backtrace_compat(&self, arg: &str) -> Result<Option<Vec<String>>, StackUnderflow> {
        match MessageOrLevel::classify(arg) {
            MessageOrLevel::Level(rank) => match self.compat_severity(rank) {
                Some(severity) => self.backtrace_at(severity, ""),
                None => Ok(None),
            },
            MessageOrLevel::Message(message) => self.backtrace_at(Severity::Debug, message),
        }
    }

    /// Logs elapsed execution time since the logger was constructed, at the
    /// default Debug level.
    pub fn elapsed(&self) -> Result<Option<String>, StackUnderflow> {
        self.elapsed_at(Severity::Debug, "")
    }

    /// Logs elapsed execution time at `severity`.
    pub fn elapsed_at(
        &self,
        severity: Severity,
        message: &str,
    ) -> Result<Option<String>, StackUnderflow> {
        if !self.is_active(severity) {
            return Ok(None);
        }
        let record = format::elapsed_record(self.started.elapsed(), message);
        self.log_message(severity, &record, 0_usize, false)
    }

    /// Compatibility shim for [`elapsed_at`](Self::elapsed_at) argument
    /// sniffing.
    pub fn elapsed_compat(&self, arg: &str) -> Result<Option<String>, StackUnderflow> {
        match MessageOrLevel::classify(arg) {
            MessageOrLevel::Level(rank) => match self.compat_severity(rank) {
                Some(severity) => self.elapsed_at(severity, ""),
                None => Ok(None),
            },
            MessageOrLevel::Message(message) => self.elapsed_at(Severity::Debug, message),
        }
    }

    /// Logs the most recently executed query from `source`.
    pub fn last_query(
        &self,
        source: &dyn QuerySource,
        message: &str,
        severity: Severity,
    ) -> Result<Option<String>, StackUnderflow> {
        if !self.is_active(severity) {
            return Ok(None);
        }
        let record = format::query_record(message, &source.last_query_text());
        self.log_message(severity, &record, 0_usize, false)
    }
}

impl std::fmt::Debug for Logger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Logger")
            .field("threshold", &self.threshold.get())
            .field("has_identity", &self.identity.is_some())
            .finish_non_exhaustive()
    }
}
