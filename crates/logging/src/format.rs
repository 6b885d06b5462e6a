//! crates/logging/src/format.rs
//! Pure record-composition helpers. No I/O happens here.

use std::error::Error;
use std::fmt::Write as _;
use std::time::Duration;

use callstack::{CallChain, CallFrame};

use crate::collaborators::IdentityProvider;

/// Composes the base record: indent, caller label, optional identity
/// prefix, then the message body.
#[must_use]
pub(crate) fn compose(indent: &str, label: &str, identity: &str, message: &str) -> String {
    format!("{indent}{label} {identity}{message}")
}

/// Renders the `"UID:<id> "` identity prefix.
///
/// A missing provider or an anonymous session renders an empty id rather
/// than failing; identity enrichment must never make a logging call fall
/// over.
#[must_use]
pub(crate) fn identity_prefix(provider: Option<&dyn IdentityProvider>) -> String {
    let id = provider
        .and_then(IdentityProvider::current_user_id)
        .unwrap_or_default();
    format!("UID:{id} ")
}

/// Renders an error together with its full cause chain, prefixed by a
/// caller-supplied context message.
#[must_use]
pub(crate) fn exception_text(message: &str, error: &dyn Error) -> String {
    let mut text = format!("{message} - {error}");
    let mut cause = error.source();
    while let Some(inner) = cause {
        let _ = write!(text, "; caused by: {inner}");
        cause = inner.source();
    }
    text
}

/// Renders a function-entry record.
///
/// Argument values and the file/line suffix only appear when the scope
/// opted into argument dumping; the suffix points at the frame's
/// construction site, which by convention is the top of the function.
#[must_use]
pub(crate) fn start_record(frame: &CallFrame, dump_args: bool) -> String {
    let mut args = String::new();
    let mut suffix = String::new();
    if dump_args {
        if let Some(values) = frame.args() {
            args = values
                .iter()
                .map(|value| format!("'{value}'"))
                .collect::<Vec<_>>()
                .join(", ");
        }
        suffix = format!("  : {} ({}) ", frame.file(), frame.line());
    }
    format!("START: {}({args}){suffix}", frame.label())
}

/// Renders a function-exit record.
#[must_use]
pub(crate) fn end_record(label: &str, message: &str, result: &str) -> String {
    format!("END: {label}() {message} {result}")
}

/// Renders the two-frame caller-pair record.
#[must_use]
pub(crate) fn caller_pair(current: &str, parent: &str, message: &str) -> String {
    format!("{current} was called by {parent}() {message}")
}

/// Renders the backtrace block and collects the bare frame labels.
///
/// The block lists one line per frame, oldest caller first, each carrying
/// the frame's file and line; the returned labels omit the location so
/// callers can post-process them.
#[must_use]
pub(crate) fn backtrace_block(chain: &CallChain) -> (String, Vec<String>) {
    let labels: Vec<String> = chain.iter().map(CallFrame::label).collect();
    let lines: Vec<String> = chain
        .iter()
        .map(|frame| format!("{} ({} - {})", frame.label(), frame.file(), frame.line()))
        .collect();
    let block = format!("Backtrace: \n   {}", lines.join(",\n   "));
    (block, labels)
}

/// Renders a last-query record.
#[must_use]
pub(crate) fn query_record(message: &str, query: &str) -> String {
    format!("{message} - SQL QUERY: {query}")
}

/// Renders an elapsed-execution-time record.
#[must_use]
pub(crate) fn elapsed_record(elapsed: Duration, message: &str) -> String {
    format!(
        "Elapsed execution time: {:.6}s.  {message}",
        elapsed.as_secs_f64()
    )
}

/// Renders a structured-dump record.
#[must_use]
pub(crate) fn dump_record(message: &str, rendering: &str) -> String {
    format!("{message} - dump:  {rendering}")
}

/// Renders a flattened-list record.
#[must_use]
pub(crate) fn flat_record(message: &str, rendering: &str) -> String {
    format!("{message} - list:  {rendering}")
}
