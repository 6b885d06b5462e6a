//! crates/callstack/src/indent.rs
//! Visual nesting indicator derived from registry depth.

use crate::registry::depth;

/// Default depth offset applied by [`indent`].
///
/// Chosen so the two outermost application scopes render flush-left and
/// deeper nesting indents one unit per level.
pub(crate) const DEFAULT_OFFSET: i32 = -2;

/// Renders the default indent: one space per registered scope beyond the
/// first two.
///
/// Purely cosmetic - the indent never affects control flow, only log
/// readability.
///
/// # Examples
///
/// ```
/// use callstack::{CallFrame, ScopeGuard, indent};
///
/// let _a = ScopeGuard::enter(CallFrame::function("a"));
/// let _b = ScopeGuard::enter(CallFrame::function("b"));
/// assert_eq!(indent(), "");
///
/// let _c = ScopeGuard::enter(CallFrame::function("c"));
/// assert_eq!(indent(), " ");
/// ```
#[must_use]
pub fn indent() -> String {
    indent_with(" ", DEFAULT_OFFSET)
}

/// Renders `unit` repeated `max(0, depth() + depth_offset)` times.
///
/// `depth()` counts the scopes currently registered on this thread. A
/// negative offset that exceeds the depth clamps to an empty string.
#[must_use]
pub fn indent_with(unit: &str, depth_offset: i32) -> String {
    let signed = i64::from(depth_offset) + depth() as i64;
    let count = usize::try_from(signed).unwrap_or(0);
    unit.repeat(count)
}
