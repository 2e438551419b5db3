//! The working-stack tree builder.

use rpn_ir::{DispatchTable, Expr, ExprArena, ExprId, Operands, Program, SharedArena};
use tracing::{debug, trace};

use crate::ParseError;

/// Incremental tree builder.
///
/// Feed tokens with [`push_token`](Self::push_token) and take the finished
/// program with [`finish`](Self::finish). [`crate::parse`] drives it over a
/// whole program text.
pub struct TreeBuilder<'a> {
    dispatch: &'a DispatchTable,
    arena: ExprArena,
    /// Finished subtrees not yet claimed by an operator.
    stack: Vec<ExprId>,
    /// Index of the next token.
    position: usize,
}

impl<'a> TreeBuilder<'a> {
    /// Create a builder. `source_len` sizes the arena up front.
    pub fn new(dispatch: &'a DispatchTable, source_len: usize) -> Self {
        TreeBuilder {
            dispatch,
            arena: ExprArena::with_capacity(source_len),
            stack: Vec::new(),
            position: 0,
        }
    }

    /// Number of subtrees currently on the working stack.
    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    /// Consume one token.
    ///
    /// Operators pop `arity` subtrees; the first one popped (the one
    /// written last) becomes operand 0. Numbers become constants and
    /// everything else becomes a variable.
    pub fn push_token(&mut self, token: &str) -> Result<(), ParseError> {
        let position = self.position;
        self.position += 1;

        let expr = if let Some(op) = self.dispatch.lookup(token) {
            let arity = op.arity();
            if self.stack.len() < arity {
                return Err(ParseError::StackUnderflow {
                    symbol: token.to_string(),
                    position,
                    expected: arity,
                    found: self.stack.len(),
                });
            }
            let split = self.stack.len() - arity;
            let operands: Operands = self.stack.drain(split..).rev().collect();
            trace!(position, token, ?op, ?operands, "operation");
            Expr::Operation { op, operands }
        } else if let Ok(value) = token.parse::<f64>() {
            trace!(position, token, value, "constant");
            Expr::Constant(value)
        } else {
            trace!(position, token, "variable");
            Expr::Variable(token.to_string())
        };

        let id = self.arena.alloc_expr(expr);
        self.stack.push(id);
        Ok(())
    }

    /// Finish building. Exactly one subtree must remain.
    pub fn finish(self) -> Result<Program, ParseError> {
        match self.stack.as_slice() {
            [] => Err(ParseError::EmptyProgram),
            [root] => {
                debug!(
                    tokens = self.position,
                    nodes = self.arena.len(),
                    "built expression tree"
                );
                Ok(Program::new(SharedArena::new(self.arena), *root))
            }
            leftover => Err(ParseError::UnconsumedOperands {
                count: leftover.len(),
            }),
        }
    }
}
