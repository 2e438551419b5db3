//! Subroutines and output: `defsub`, `call`, `print`.

use rpn_ir::{ExprId, OpKind};

use crate::errors::not_a_subroutine;
use crate::interpreter::Interpreter;
use crate::{DeferredTag, DeferredValue, EvalResult, Value};

impl Interpreter<'_> {
    /// `expr f defsub`: bind `f` to `expr` without evaluating it.
    pub(crate) fn eval_defsub(&mut self, target: ExprId, body: ExprId) -> EvalResult {
        let name = self.variable_name(OpKind::DefSub, target)?;
        let subroutine = Value::Deferred(DeferredValue::new(
            self.arena.clone(),
            body,
            DeferredTag::Subroutine,
        ));
        self.env.bind(name, subroutine.clone());
        Ok(subroutine)
    }

    /// `f call`: evaluate the subroutine bound to `f` now.
    ///
    /// The body sees the environment as it is at call time, not as it was
    /// when the subroutine was defined.
    pub(crate) fn eval_call(&mut self, target: ExprId) -> EvalResult {
        match self.eval(target)? {
            Value::Deferred(deferred) if deferred.is_subroutine() => {
                tracing::trace!(body = ?deferred.body(), "call");
                self.eval_in_arena(deferred.arena().clone(), deferred.body())
            }
            other => Err(not_a_subroutine(&other)),
        }
    }

    /// `expr print`: write the value of `expr` and return it.
    pub(crate) fn eval_print(&mut self, value: ExprId) -> EvalResult {
        let value = self.eval(value)?;
        self.print_handler.println(&value.to_string());
        Ok(value)
    }
}
