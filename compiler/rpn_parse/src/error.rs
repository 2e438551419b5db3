//! Parse error types.

use thiserror::Error;

/// Why a program could not be turned into a single tree.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ParseError {
    /// An operator needs more operands than the working stack holds.
    #[error(
        "stack underflow: `{symbol}` at token {position} takes {expected} operands, stack holds {found}"
    )]
    StackUnderflow {
        /// The operator token as written.
        symbol: String,
        /// Zero-based index of the operator among the program's tokens.
        position: usize,
        /// The operator's arity.
        expected: usize,
        /// Nodes available when the operator was reached.
        found: usize,
    },

    /// The program contains no tokens.
    #[error("stack underflow: program is empty")]
    EmptyProgram,

    /// More than one tree is left after the last token.
    #[error("malformed program: {count} expressions left on the stack, expected 1")]
    UnconsumedOperands {
        /// Number of nodes left on the working stack.
        count: usize,
    },
}

impl ParseError {
    /// Whether the error is a stack underflow (including an empty program).
    pub fn is_underflow(&self) -> bool {
        matches!(self, Self::StackUnderflow { .. } | Self::EmptyProgram)
    }
}
