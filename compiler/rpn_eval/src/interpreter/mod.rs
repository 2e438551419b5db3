//! Tree-walking interpreter.
//!
//! `eval(ExprId)` is the single recursive entry point. Variables and
//! constants are handled inline; operations go through `eval_operation`,
//! which evaluates all operands of pure kinds and hands the rest to the
//! stateful helpers in `crate::exec`:
//!
//! - `exec::bindings` - `alloc`, `valloc`, `setq`, `setv`
//! - `exec::control` - `progN`, `if`, `while`, `for`
//! - `exec::call` - `defsub`, `call`, `print`
//!
//! # Arena Threading
//!
//! The interpreter always evaluates against one arena, the one the node
//! being evaluated belongs to. A deferred value carries the arena it was
//! defined in; `call` swaps that arena in for the duration of the body
//! and restores the caller's afterwards. The environment is never
//! swapped, which is what makes subroutines dynamically scoped.

mod builder;

pub use builder::InterpreterBuilder;

use rpn_ir::{Expr, ExprArena, ExprId, OpKind, Program, SharedArena};
use smallvec::SmallVec;

use crate::errors::{
    arity_mismatch, budget_exceeded, missing_variable, not_a_variable, not_an_expression,
};
use crate::eval_mode::ModeState;
use crate::operators::evaluate_pure;
use crate::print_handler::SharedPrintHandler;
use crate::stack::ensure_sufficient_stack;
use crate::{EvalError, EvalResult, Environment, Value};

/// Interpreter state for one or more evaluations over a borrowed environment.
pub struct Interpreter<'env> {
    /// Arena of the node currently being evaluated.
    pub(crate) arena: SharedArena,
    pub(crate) env: &'env mut Environment,
    pub(crate) print_handler: SharedPrintHandler,
    pub(crate) mode_state: ModeState,
}

impl<'env> Interpreter<'env> {
    /// Create an interpreter with default settings (unbounded, stdout).
    pub fn new(env: &'env mut Environment) -> Self {
        InterpreterBuilder::new().build(env)
    }

    /// Evaluate a whole program against the interpreter's environment.
    ///
    /// Several programs may be run in turn on one interpreter; bindings
    /// made by one are visible to the next.
    #[tracing::instrument(level = "debug", skip_all, fields(nodes = program.arena().len()))]
    pub fn eval_program(&mut self, program: &Program) -> EvalResult {
        let result = self.eval_in_arena(program.arena().clone(), program.root());
        tracing::debug!(
            steps = self.mode_state.steps(),
            ok = result.is_ok(),
            "evaluation finished"
        );
        result
    }

    /// Evaluate a node of the current arena.
    pub fn eval(&mut self, id: ExprId) -> EvalResult {
        ensure_sufficient_stack(|| self.eval_inner(id))
    }

    /// Nodes evaluated so far by this interpreter.
    pub fn steps(&self) -> u64 {
        self.mode_state.steps()
    }

    /// The environment being evaluated against.
    pub fn env(&self) -> &Environment {
        self.env
    }

    fn eval_inner(&mut self, id: ExprId) -> EvalResult {
        self.mode_state
            .check_budget()
            .map_err(|exceeded| budget_exceeded(exceeded.budget))?;

        let Some(expr) = self.arena.get(id) else {
            return Err(not_an_expression(id));
        };
        match expr {
            Expr::Variable(name) => self
                .env
                .lookup(name)
                .ok_or_else(|| missing_variable(name)),
            Expr::Constant(value) => Ok(Value::Number(*value)),
            Expr::Operation { op, operands } => {
                let op = *op;
                let operands = operands.clone();
                tracing::trace!(?id, ?op, pure = op.is_pure(), "eval operation");
                self.eval_operation(op, &operands)
                    .map_err(|e| e.in_operation(op))
            }
        }
    }

    fn eval_operation(&mut self, op: OpKind, operands: &[ExprId]) -> EvalResult {
        match op {
            OpKind::Add
            | OpKind::Sub
            | OpKind::Mul
            | OpKind::Div
            | OpKind::Pow
            | OpKind::Mod
            | OpKind::Reciprocal
            | OpKind::Abs
            | OpKind::Eq
            | OpKind::NotEq
            | OpKind::Gt
            | OpKind::GtEq
            | OpKind::Lt
            | OpKind::LtEq => {
                let args = operands
                    .iter()
                    .map(|&operand| self.eval(operand))
                    .collect::<Result<SmallVec<[Value; 2]>, EvalError>>()?;
                evaluate_pure(op, &args)
            }
            OpKind::Alloc => {
                let [target] = operands_of::<1>(op, operands)?;
                self.eval_alloc(target)
            }
            OpKind::AllocArray => {
                let [target, count] = operands_of::<2>(op, operands)?;
                self.eval_alloc_array(target, count)
            }
            OpKind::Assign => {
                let [target, value] = operands_of::<2>(op, operands)?;
                self.eval_assign(target, value)
            }
            OpKind::ArraySet => {
                let [array, index, value] = operands_of::<3>(op, operands)?;
                self.eval_array_set(array, index, value)
            }
            OpKind::Prog2 => {
                let seq: [ExprId; 2] = operands_of(op, operands)?;
                self.eval_sequence(&seq)
            }
            OpKind::Prog3 => {
                let seq: [ExprId; 3] = operands_of(op, operands)?;
                self.eval_sequence(&seq)
            }
            OpKind::Prog4 => {
                let seq: [ExprId; 4] = operands_of(op, operands)?;
                self.eval_sequence(&seq)
            }
            OpKind::If => {
                let [cond, then_branch, else_branch] = operands_of::<3>(op, operands)?;
                self.eval_if(cond, then_branch, else_branch)
            }
            OpKind::While => {
                let [cond, body] = operands_of::<2>(op, operands)?;
                self.eval_while(cond, body)
            }
            OpKind::For => {
                let [index, start, end, body] = operands_of::<4>(op, operands)?;
                self.eval_for(index, start, end, body)
            }
            OpKind::DefSub => {
                let [target, body] = operands_of::<2>(op, operands)?;
                self.eval_defsub(target, body)
            }
            OpKind::Call => {
                let [target] = operands_of::<1>(op, operands)?;
                self.eval_call(target)
            }
            OpKind::Print => {
                let [value] = operands_of::<1>(op, operands)?;
                self.eval_print(value)
            }
            OpKind::Nop => {
                operands_of::<0>(op, operands)?;
                Ok(Value::Nop)
            }
        }
    }

    /// Evaluate `id` as a node of `arena`, restoring the current arena after.
    pub(crate) fn eval_in_arena(&mut self, arena: SharedArena, id: ExprId) -> EvalResult {
        let caller = std::mem::replace(&mut self.arena, arena);
        let result = self.eval(id);
        self.arena = caller;
        result
    }

    /// The name of a node that must be a variable (binding targets).
    pub(crate) fn variable_name(&self, op: OpKind, id: ExprId) -> Result<String, EvalError> {
        let Some(expr) = self.arena.get(id) else {
            return Err(not_an_expression(id));
        };
        expr.as_variable()
            .map(str::to_owned)
            .ok_or_else(|| not_a_variable(op, self.arena.display(id).to_string()))
    }
}

/// Destructure an operand list into exactly `N` operands.
fn operands_of<const N: usize>(
    op: OpKind,
    operands: &[ExprId],
) -> Result<[ExprId; N], EvalError> {
    <[ExprId; N]>::try_from(operands).map_err(|_| arity_mismatch(op, operands.len()))
}

/// An empty arena, used before the first program is evaluated.
pub(crate) fn empty_arena() -> SharedArena {
    SharedArena::new(ExprArena::new())
}
