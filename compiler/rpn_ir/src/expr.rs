//! Expression nodes.

use smallvec::SmallVec;

use crate::{ExprId, OpKind};

/// Operand list of an operation, in the order the tree builder popped them.
///
/// Operand 0 is the node written immediately before the operator. No
/// operation takes more than four operands, so the list never spills.
pub type Operands = SmallVec<[ExprId; 4]>;

/// A node of the expression tree.
///
/// Nodes are immutable once the arena is frozen. An `Operation` always
/// carries exactly `op.arity()` operands; the tree builder guarantees it.
#[derive(Clone, Debug, PartialEq)]
pub enum Expr {
    /// A name looked up in the environment at evaluation time.
    Variable(String),
    /// A numeric literal.
    Constant(f64),
    /// An operation applied to its operands.
    Operation { op: OpKind, operands: Operands },
}

impl Expr {
    /// The variable name, if this node is a `Variable`.
    #[inline]
    pub fn as_variable(&self) -> Option<&str> {
        match self {
            Expr::Variable(name) => Some(name),
            _ => None,
        }
    }
}

/// Format a number the way values and constants are printed.
///
/// Whole numbers keep a trailing `.0` so numbers never look like integers
/// (`5.0`, `0.25`, `-3.5`, `inf`, `NaN`).
pub fn format_number(n: f64) -> String {
    format!("{n:?}")
}
