//! Integration tests for variable dumping.
//!
//! These tests verify the flatten rule: sequences of plain leaves render
//! as a quoted comma-joined list, while nested or keyed payloads get the
//! full recursive listing of public data fields.

use std::collections::BTreeMap;
use std::sync::Arc;

use callstack::{CallFrame, ScopeGuard};
use logging::{DumpValue, Logger, Severity, ToDump};
use test_support::RecordingSink;

fn verbose_logger() -> (Arc<RecordingSink>, Logger) {
    let sink = Arc::new(RecordingSink::default());
    let logger = Logger::new(sink.clone(), Arc::new(Severity::All));
    (sink, logger)
}

struct Order {
    id: u32,
    total_cents: u32,
    lines: Vec<String>,
}

impl ToDump for Order {
    fn to_dump(&self) -> DumpValue {
        DumpValue::Record(vec![
            ("id".to_owned(), self.id.to_dump()),
            ("total_cents".to_owned(), self.total_cents.to_dump()),
            ("lines".to_owned(), self.lines.to_dump()),
        ])
    }
}

// ============================================================================
// Flatten Rule Tests
// ============================================================================

/// Verifies a sequence of plain leaves flattens to a quoted list.
#[test]
fn simple_sequence_flattens() {
    let (sink, logger) = verbose_logger();
    let _scope = ScopeGuard::enter(CallFrame::method("Cart", "items"));

    logger.dump(&vec![1, 2, 3], "ids", Severity::Debug).unwrap();
    assert_eq!(sink.messages()[0], "Cart.items ids - dump:  '1', '2', '3'");
}

/// Verifies a nested sequence falls back to the recursive listing.
#[test]
fn nested_sequence_renders_recursively() {
    let (sink, logger) = verbose_logger();
    let _scope = ScopeGuard::enter(CallFrame::method("Cart", "items"));

    logger
        .dump(&vec![vec![1, 2], vec![3]], "grid", Severity::Debug)
        .unwrap();
    let message = &sink.messages()[0];
    assert!(message.starts_with("Cart.items grid - dump:  (\n"));
    assert!(message.contains("[0] => (\n"));
    assert!(message.contains("[1] => 2\n"));
}

/// Verifies a struct dump lists its public data fields in declaration
/// order.
#[test]
fn struct_dump_lists_fields() {
    let (sink, logger) = verbose_logger();
    let _scope = ScopeGuard::enter(CallFrame::method("Orders", "inspect"));
    let order = Order {
        id: 7,
        total_cents: 1299,
        lines: vec!["tea".to_owned(), "mug".to_owned()],
    };

    logger.dump(&order, "loaded", Severity::Debug).unwrap();
    let message = &sink.messages()[0];
    assert!(message.contains("[id] => 7\n"));
    assert!(message.contains("[total_cents] => 1299\n"));
    assert!(message.contains("[lines] => "));
}

/// Verifies keyed maps render as records, never as flat lists.
#[test]
fn map_dump_renders_keys() {
    let (sink, logger) = verbose_logger();
    let _scope = ScopeGuard::enter(CallFrame::method("Config", "show"));
    let mut settings = BTreeMap::new();
    settings.insert("retries".to_owned(), 3);
    settings.insert("timeout".to_owned(), 30);

    logger.dump(&settings, "active", Severity::Debug).unwrap();
    assert_eq!(
        sink.messages()[0],
        "Config.show active - dump:  (\n    [retries] => 3\n    [timeout] => 30\n)"
    );
}

/// Verifies a scalar dump renders the value bare.
#[test]
fn scalar_dump_renders_bare() {
    let (sink, logger) = verbose_logger();
    let _scope = ScopeGuard::enter(CallFrame::method("Cart", "total"));

    logger.dump(&1299_u32, "cents", Severity::Debug).unwrap();
    assert_eq!(sink.messages()[0], "Cart.total cents - dump:  1299");
}

// ============================================================================
// Forced Flat Tests
// ============================================================================

/// Verifies `flat` quotes every leaf even through nesting.
#[test]
fn flat_walks_nested_leaves() {
    let (sink, logger) = verbose_logger();
    let _scope = ScopeGuard::enter(CallFrame::method("Cart", "items"));

    logger
        .flat(&vec![vec![1, 2], vec![3]], "leaves", Severity::Debug)
        .unwrap();
    assert_eq!(
        sink.messages()[0],
        "Cart.items leaves - list:  '1', '2', '3'"
    );
}

/// Verifies an inactive dump builds no rendering and writes nothing.
#[test]
fn inactive_dump_is_free() {
    let sink = Arc::new(RecordingSink::default());
    let logger = Logger::new(sink.clone(), Arc::new(Severity::Error));

    assert!(
        logger
            .dump(&vec![1, 2, 3], "ids", Severity::Debug)
            .unwrap()
            .is_none()
    );
    assert!(sink.records().is_empty());
}
