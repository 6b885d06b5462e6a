//! Integration tests for severity filtering.
//!
//! These tests verify that the configured threshold gates every entry
//! point, that filtering happens before any call-site work, and that the
//! threshold source is consulted exactly once per logger.

use std::sync::Arc;

use callstack::{CallFrame, ScopeGuard};
use logging::{Logger, Severity, resolve_rank};
use test_support::{CountingThreshold, RecordingSink};

fn logger_at(rank: u8) -> (Arc<RecordingSink>, Logger) {
    let sink = Arc::new(RecordingSink::default());
    let logger = Logger::new(sink.clone(), Arc::new(rank));
    (sink, logger)
}

// ============================================================================
// Threshold Gate Tests
// ============================================================================

/// Verifies a record at or below the threshold rank is written.
#[test]
fn active_level_produces_a_record() {
    let (sink, logger) = logger_at(Severity::Debug.rank());
    let _scope = ScopeGuard::enter(CallFrame::method("Cart", "checkout"));

    let line = logger.debug("starting").unwrap();
    assert!(line.is_some());
    assert_eq!(sink.records().len(), 1);
    assert_eq!(sink.records()[0].0, Severity::Debug);
}

/// Verifies a record above the threshold rank produces nothing at all.
#[test]
fn inactive_level_produces_nothing() {
    let (sink, logger) = logger_at(Severity::Debug.rank());
    let _scope = ScopeGuard::enter(CallFrame::method("Cart", "checkout"));

    assert!(logger.info("too chatty").unwrap().is_none());
    assert!(sink.records().is_empty());
}

/// Verifies an `Off` threshold suppresses even error records.
#[test]
fn off_threshold_suppresses_errors() {
    let (sink, logger) = logger_at(Severity::Off.rank());
    let _scope = ScopeGuard::enter(CallFrame::method("Cart", "checkout"));

    assert!(logger.error("broken").unwrap().is_none());
    assert!(sink.records().is_empty());
}

/// Verifies an `All` threshold admits every severity.
#[test]
fn all_threshold_admits_everything() {
    let (sink, logger) = logger_at(Severity::All.rank());
    let _scope = ScopeGuard::enter(CallFrame::method("Cart", "checkout"));

    logger.error("e").unwrap();
    logger.debug("d").unwrap();
    logger.info("i").unwrap();
    assert_eq!(sink.records().len(), 3);
}

/// Verifies an inactive call never touches the frame registry: filtering
/// with an empty registry must not underflow.
#[test]
fn inactive_call_skips_caller_resolution() {
    let (sink, logger) = logger_at(Severity::Off.rank());

    assert!(logger.debug("no scope registered").unwrap().is_none());
    assert!(sink.records().is_empty());
}

// ============================================================================
// Threshold Caching Tests
// ============================================================================

/// Verifies the threshold source is consulted once, on first use, and the
/// rank is reused afterwards.
#[test]
fn threshold_source_is_consulted_once() {
    let sink = Arc::new(RecordingSink::default());
    let source = Arc::new(CountingThreshold::new(Severity::All.rank()));
    let logger = Logger::new(sink, source.clone());
    let _scope = ScopeGuard::enter(CallFrame::method("Cart", "checkout"));

    assert_eq!(source.consults(), 0);
    logger.debug("one").unwrap();
    logger.info("two").unwrap();
    logger.error("three").unwrap();
    assert_eq!(source.consults(), 1);
}

// ============================================================================
// Level Specifier Tests
// ============================================================================

/// Verifies canonical names map to the fixed rank table.
#[test]
fn canonical_names_resolve_to_ranks() {
    assert_eq!(resolve_rank("off"), Some(0));
    assert_eq!(resolve_rank("error"), Some(1));
    assert_eq!(resolve_rank("debug"), Some(2));
    assert_eq!(resolve_rank("info"), Some(3));
    assert_eq!(resolve_rank("all"), Some(4));
}

/// Verifies numeric specifiers pass through without clamping.
#[test]
fn numeric_specifiers_pass_through() {
    assert_eq!(resolve_rank("0"), Some(0));
    assert_eq!(resolve_rank("4"), Some(4));
    assert_eq!(resolve_rank("7"), Some(7));
}

/// Verifies unknown names resolve to nothing instead of a fallback rank.
#[test]
fn unknown_names_resolve_to_none() {
    assert_eq!(resolve_rank("verbose"), None);
    assert_eq!(resolve_rank("ERROR"), None);
    assert_eq!(resolve_rank(""), None);
}

/// Verifies a non-canonical numeric rank acts as a working threshold: a
/// threshold above `All` still admits everything.
#[test]
fn oversized_numeric_threshold_admits_everything() {
    let (sink, logger) = logger_at(9);
    let _scope = ScopeGuard::enter(CallFrame::method("Cart", "checkout"));

    logger.info("admitted").unwrap();
    assert_eq!(sink.records().len(), 1);
}
