//! crates/logging/src/tracing_bridge.rs
//! Optional bridge that forwards records to the `tracing` ecosystem.
//!
//! Enabled with the `tracing` feature. The bridge is a [`LogSink`] like any
//! other: pre-composed record text arrives as the event message, and the
//! severity maps onto the closest `tracing` level.

use crate::collaborators::LogSink;
use crate::severity::Severity;

/// A [`LogSink`] that emits every record as a `tracing` event.
///
/// Severity maps as follows: `Error` to `ERROR`, `Debug` to `DEBUG`, `Info`
/// to `INFO`, and `All` to `TRACE`. `Off` records never reach a sink, so
/// the bridge drops them defensively.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl TracingSink {
    /// Creates the bridge sink.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl LogSink for TracingSink {
    fn write(&self, severity: Severity, message: &str) {
        match severity {
            Severity::Off => {}
            Severity::Error => tracing::error!(target: "sitelog", "{message}"),
            Severity::Debug => tracing::debug!(target: "sitelog", "{message}"),
            Severity::Info => tracing::info!(target: "sitelog", "{message}"),
            Severity::All => tracing::trace!(target: "sitelog", "{message}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// The bridge is a unit type and trivially constructible.
    #[test]
    fn constructs() {
        let sink = TracingSink::new();
        sink.write(Severity::Off, "dropped");
    }

    /// Records forward as events while a subscriber is installed.
    #[test]
    fn forwards_under_subscriber() {
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::level_filters::LevelFilter::TRACE)
            .with_test_writer()
            .finish();
        tracing::subscriber::with_default(subscriber, || {
            let sink = TracingSink::new();
            sink.write(Severity::Error, "bridged error");
            sink.write(Severity::All, "bridged trace");
        });
    }
}
