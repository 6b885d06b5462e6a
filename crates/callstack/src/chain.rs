//! crates/callstack/src/chain.rs
//! Ordered snapshot of every registered scope, for backtrace rendering.

use crate::frame::CallFrame;

/// An ordered sequence of [`CallFrame`] values, oldest caller first.
///
/// A chain is only produced by [`capture_chain`](crate::capture_chain) and is
/// consumed immediately by backtrace rendering; it is never stored. The
/// registry machinery contributes no frames of its own, so the most recent
/// entry is always the application scope that requested the capture.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CallChain {
    frames: Vec<CallFrame>,
}

impl CallChain {
    pub(crate) fn new(frames: Vec<CallFrame>) -> Self {
        Self { frames }
    }

    /// Returns the number of frames in the chain.
    #[must_use]
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    /// Reports whether no scopes were registered at capture time.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Iterates the frames, oldest caller first.
    pub fn iter(&self) -> std::slice::Iter<'_, CallFrame> {
        self.frames.iter()
    }

    /// Borrows the frames as a slice, oldest caller first.
    #[must_use]
    pub fn as_slice(&self) -> &[CallFrame] {
        &self.frames
    }
}

impl IntoIterator for CallChain {
    type Item = CallFrame;
    type IntoIter = std::vec::IntoIter<CallFrame>;

    fn into_iter(self) -> Self::IntoIter {
        self.frames.into_iter()
    }
}

impl<'a> IntoIterator for &'a CallChain {
    type Item = &'a CallFrame;
    type IntoIter = std::slice::Iter<'a, CallFrame>;

    fn into_iter(self) -> Self::IntoIter {
        self.frames.iter()
    }
}
