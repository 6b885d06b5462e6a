#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! crates/callstack/src/lib.rs
//!
//! # Overview
//!
//! `callstack` records which application function is currently executing so
//! that log lines can be attributed to their real call site. Rust offers no
//! runtime stack introspection, so the crate keeps an explicit per-thread
//! **frame registry** instead. A function that wants to appear in log
//! attributions registers a
//! [`CallFrame`] on entry through the RAII [`ScopeGuard`]; dropping the guard
//! unregisters it.
//!
//! # Design
//!
//! - [`CallFrame`] describes one scope: optional owner type, call operator,
//!   function name, source location, and (opt-in) rendered argument values.
//! - [`ScopeGuard`] pushes a frame onto the thread-local registry and pops it
//!   on drop, so unwinding panics restore the registry as well.
//! - [`resolve_caller`] reads the registry by skip depth: `0` is the scope
//!   issuing the logging call, `1` its caller, and so on.
//! - [`CallerSpec`] lets callers hand over either a skip depth or a frame
//!   they already captured, avoiding a second registry walk when one call
//!   must be reported twice (entry and exit pairing).
//! - [`capture_chain`] snapshots the whole registry for backtrace rendering.
//!
//! # Invariants
//!
//! - The registry never contains frames belonging to the logging machinery
//!   itself; only application scopes register.
//! - Every wrapper layer a caller inserts between the real call site and a
//!   depth-based lookup must add exactly one to the skip count. Getting this
//!   wrong attributes log lines to the wrong function, which is why a
//!   too-deep skip fails with [`StackUnderflow`] instead of degrading to a
//!   made-up label.
//!
//! # Examples
//!
//! ```
//! use callstack::{CallFrame, ScopeGuard, resolve_caller};
//!
//! fn render() -> String {
//!     let _scope = ScopeGuard::enter(CallFrame::method("Widget", "render"));
//!     resolve_caller(0).map(|frame| frame.label()).unwrap_or_default()
//! }
//!
//! assert_eq!(render(), "Widget.render");
//! ```

mod chain;
mod frame;
mod indent;
mod registry;

pub use chain::CallChain;
pub use frame::{CallFrame, CallOperator};
pub use indent::{indent, indent_with};
pub use registry::{
    CallerSpec, ScopeGuard, StackUnderflow, capture_chain, depth, resolve_caller, resolve_spec,
};
