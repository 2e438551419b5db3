//! Sequencing and control flow: `progN`, `if`, `while`, `for`.
//!
//! Loops that never run their body return the body itself, unevaluated,
//! as a `LoopBody` deferred value. Loops that do run return the value of
//! the last pass.

use rpn_ir::{ExprId, OpKind};
use tracing::debug;

use crate::errors::condition_not_bool;
use crate::interpreter::Interpreter;
use crate::operators::coerce_integer;
use crate::{DeferredTag, DeferredValue, EvalError, EvalResult, Value};

impl Interpreter<'_> {
    /// `e1 .. eN progN`: evaluate every operand for effect.
    ///
    /// Operands run in stored order, so the expression written last runs
    /// first, and the value of the one written first (run last) is the
    /// result.
    pub(crate) fn eval_sequence(&mut self, operands: &[ExprId]) -> EvalResult {
        let mut result = Value::Nop;
        for &operand in operands {
            result = self.eval(operand)?;
        }
        Ok(result)
    }

    /// `no yes cond if`: evaluate exactly one branch.
    pub(crate) fn eval_if(
        &mut self,
        cond: ExprId,
        then_branch: ExprId,
        else_branch: ExprId,
    ) -> EvalResult {
        if self.eval_condition(cond)? {
            self.eval(then_branch)
        } else {
            self.eval(else_branch)
        }
    }

    /// `body cond while`: run `body` while `cond` holds.
    ///
    /// The condition is evaluated once up front to check that it is a
    /// boolean, then again before every pass.
    pub(crate) fn eval_while(&mut self, cond: ExprId, body: ExprId) -> EvalResult {
        self.eval_condition(cond)?;

        let mut last = None;
        let mut passes: u64 = 0;
        while self.eval_condition(cond)? {
            last = Some(self.eval(body)?);
            passes += 1;
        }
        debug!(passes, "while finished");
        Ok(last.unwrap_or_else(|| self.unevaluated(body)))
    }

    /// `body end start i for`: run `body` with `i` bound to each integer
    /// in `start..end`.
    pub(crate) fn eval_for(
        &mut self,
        index: ExprId,
        start: ExprId,
        end: ExprId,
        body: ExprId,
    ) -> EvalResult {
        let name = self.variable_name(OpKind::For, index)?;
        let start = self.eval(start)?;
        let start = coerce_integer(&start)?;
        let end = self.eval(end)?;
        let end = coerce_integer(&end)?;

        let mut last = None;
        for i in start..end {
            self.env.bind(name.as_str(), Value::Number(i as f64));
            last = Some(self.eval(body)?);
        }
        debug!(start, end, "for finished");
        Ok(last.unwrap_or_else(|| self.unevaluated(body)))
    }

    fn eval_condition(&mut self, cond: ExprId) -> Result<bool, EvalError> {
        match self.eval(cond)? {
            Value::Bool(b) => Ok(b),
            other => Err(condition_not_bool(&other)),
        }
    }

    /// A loop body that never ran, returned as a value.
    fn unevaluated(&self, body: ExprId) -> Value {
        Value::Deferred(DeferredValue::new(
            self.arena.clone(),
            body,
            DeferredTag::LoopBody,
        ))
    }
}
