//! `alloc`, `valloc`, `setq`, `setv`.

use rpn_ir::{ExprId, OpKind};

use crate::errors::{
    array_too_large, index_out_of_range, missing_variable, negative_index, negative_length,
    not_an_array,
};
use crate::interpreter::Interpreter;
use crate::operators::{coerce_integer, expect_number};
use crate::{ArrayRef, EvalResult, Value, MAX_ARRAY_LEN};

impl Interpreter<'_> {
    /// `x alloc`: bind `x` to 0.
    pub(crate) fn eval_alloc(&mut self, target: ExprId) -> EvalResult {
        let name = self.variable_name(OpKind::Alloc, target)?;
        self.env.bind(name, Value::Number(0.0));
        Ok(Value::Number(0.0))
    }

    /// `n arr valloc`: bind `arr` to a fresh array of `n` zeros.
    ///
    /// Counts above [`MAX_ARRAY_LEN`], or ones the allocator refuses, fail
    /// with an Index-category error.
    pub(crate) fn eval_alloc_array(&mut self, target: ExprId, count: ExprId) -> EvalResult {
        let count = self.eval(count)?;
        let len = coerce_integer(&count)?;
        let len = usize::try_from(len).map_err(|_| negative_length(len))?;
        if len > MAX_ARRAY_LEN {
            return Err(array_too_large(len, MAX_ARRAY_LEN));
        }
        let name = self.variable_name(OpKind::AllocArray, target)?;

        let array = ArrayRef::try_zeroed(len)
            .map(Value::Array)
            .ok_or_else(|| array_too_large(len, MAX_ARRAY_LEN))?;
        self.env.bind(name, array.clone());
        Ok(array)
    }

    /// `expr x setq`: bind `x` to the value of `expr`, then read it back.
    pub(crate) fn eval_assign(&mut self, target: ExprId, value: ExprId) -> EvalResult {
        let value = self.eval(value)?;
        let name = self.variable_name(OpKind::Assign, target)?;
        self.env.bind(name.as_str(), value);
        self.env.lookup(&name).ok_or_else(|| missing_variable(&name))
    }

    /// `expr n arr setv`: overwrite element `n` of array `arr` in place.
    ///
    /// Evaluates `expr`, then `n`, then `arr`. Returns the mutated array.
    pub(crate) fn eval_array_set(&mut self, array: ExprId, index: ExprId, value: ExprId) -> EvalResult {
        let value = self.eval(value)?;
        let element = expect_number(&value)?;

        let index = self.eval(index)?;
        let index = coerce_integer(&index)?;
        let slot = usize::try_from(index).map_err(|_| negative_index(index))?;

        let target = self.eval(array)?;
        let Value::Array(handle) = &target else {
            return Err(not_an_array(&target));
        };
        if !handle.set(slot, element) {
            return Err(index_out_of_range(index, handle.len()));
        }
        Ok(target)
    }
}
