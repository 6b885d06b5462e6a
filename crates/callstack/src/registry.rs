//! crates/callstack/src/registry.rs
//! Thread-local frame registry backing caller resolution.

use std::cell::RefCell;

use crate::chain::CallChain;
use crate::frame::CallFrame;

thread_local! {
    static FRAMES: RefCell<Vec<CallFrame>> = const { RefCell::new(Vec::new()) };
}

/// Error returned when a caller lookup asks for a deeper frame than the
/// registry holds.
///
/// This is a contract violation in the calling code's skip accounting, not a
/// runtime condition to paper over: resolving it to some substitute label
/// would silently blame the wrong function, so the lookup fails instead.
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
#[error("requested caller depth {requested} exceeds recorded stack depth {available}")]
pub struct StackUnderflow {
    /// The skip depth the caller asked for.
    pub requested: usize,
    /// How many scopes were actually registered on this thread.
    pub available: usize,
}

/// Either a skip depth to resolve against the registry, or a frame the
/// caller already captured.
///
/// Passing a captured frame avoids re-walking the registry when the same
/// call must be reported more than once, such as logging both the entry and
/// the exit of one function from a single capture.
#[derive(Clone, Debug)]
pub enum CallerSpec {
    /// Resolve the caller `skip` levels below the innermost registered scope.
    Depth(usize),
    /// Use this frame directly without touching the registry.
    Frame(CallFrame),
}

impl From<usize> for CallerSpec {
    fn from(skip: usize) -> Self {
        Self::Depth(skip)
    }
}

impl From<CallFrame> for CallerSpec {
    fn from(frame: CallFrame) -> Self {
        Self::Frame(frame)
    }
}

/// RAII registration of one application scope.
///
/// Construct the guard on function entry and keep it alive for the duration
/// of the scope; dropping it (including during unwinding) removes the frame
/// again. The guard must be bound to a named variable - an unnamed `_`
/// binding drops immediately and registers nothing.
///
/// # Examples
///
/// ```
/// use callstack::{CallFrame, ScopeGuard, depth};
///
/// assert_eq!(depth(), 0);
/// {
///     let _scope = ScopeGuard::enter(CallFrame::method("Widget", "render"));
///     assert_eq!(depth(), 1);
/// }
/// assert_eq!(depth(), 0);
/// ```
#[must_use = "dropping the guard immediately unregisters the scope"]
#[derive(Debug)]
pub struct ScopeGuard {
    frame: CallFrame,
}

impl ScopeGuard {
    /// Registers `frame` as the innermost scope of the current thread.
    pub fn enter(frame: CallFrame) -> Self {
        FRAMES.with(|frames| frames.borrow_mut().push(frame.clone()));
        Self { frame }
    }

    /// Registers `frame` with rendered argument values attached.
    ///
    /// This is the opt-in expensive path: the arguments are carried on the
    /// frame so entry-record logging can print them without any further
    /// capture work.
    pub fn enter_with_args(frame: CallFrame, args: Vec<String>) -> Self {
        Self::enter(frame.with_args(args))
    }

    /// Returns the frame this guard registered.
    #[must_use]
    pub fn frame(&self) -> &CallFrame {
        &self.frame
    }
}

impl Drop for ScopeGuard {
    fn drop(&mut self) {
        FRAMES.with(|frames| {
            frames.borrow_mut().pop();
        });
    }
}

/// Returns the number of scopes currently registered on this thread.
#[must_use]
pub fn depth() -> usize {
    FRAMES.with(|frames| frames.borrow().len())
}

/// Resolves the caller `skip` levels below the innermost registered scope.
///
/// `skip == 0` names the scope issuing the logging call; `1` names its
/// caller. Every wrapper a caller inserts between the real call site and
/// this lookup must add exactly one to `skip` - the "+1 per indirection
/// layer" contract. A depth past the registry fails with [`StackUnderflow`].
///
/// # Examples
///
/// ```
/// use callstack::{CallFrame, ScopeGuard, resolve_caller};
///
/// let _outer = ScopeGuard::enter(CallFrame::method("Controller", "index"));
/// let _inner = ScopeGuard::enter(CallFrame::method("Widget", "render"));
///
/// assert_eq!(resolve_caller(0).unwrap().label(), "Widget.render");
/// assert_eq!(resolve_caller(1).unwrap().label(), "Controller.index");
/// assert!(resolve_caller(2).is_err());
/// ```
pub fn resolve_caller(skip: usize) -> Result<CallFrame, StackUnderflow> {
    FRAMES.with(|frames| {
        let frames = frames.borrow();
        let available = frames.len();
        available
            .checked_sub(skip + 1)
            .and_then(|index| frames.get(index).cloned())
            .ok_or(StackUnderflow {
                requested: skip,
                available,
            })
    })
}

/// Resolves a [`CallerSpec`] to a concrete frame.
///
/// A pre-captured frame is returned as-is; a depth is resolved through
/// [`resolve_caller`].
pub fn resolve_spec(spec: CallerSpec) -> Result<CallFrame, StackUnderflow> {
    match spec {
        CallerSpec::Depth(skip) => resolve_caller(skip),
        CallerSpec::Frame(frame) => Ok(frame),
    }
}

/// Snapshots every registered scope, oldest caller first.
///
/// The registry machinery itself contributes no frames, so the last entry of
/// the chain is the application scope that requested the capture.
#[must_use]
pub fn capture_chain() -> CallChain {
    FRAMES.with(|frames| CallChain::new(frames.borrow().clone()))
}
