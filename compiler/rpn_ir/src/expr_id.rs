//! Expression IDs for the flat expression tree.

use std::fmt;

/// Index into an [`ExprArena`](crate::ExprArena).
///
/// Four bytes, `Copy`, and O(1) to compare. Children of an operation are
/// stored as `ExprId`s rather than boxed nodes.
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
#[repr(transparent)]
pub struct ExprId(u32);

impl ExprId {
    /// Create a new `ExprId`.
    #[inline]
    pub const fn new(index: u32) -> Self {
        ExprId(index)
    }

    /// Get the index into the arena.
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Debug for ExprId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ExprId({})", self.0)
    }
}
