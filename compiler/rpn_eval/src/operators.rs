//! Pure operator implementations.
//!
//! Arithmetic and comparison kinds are plain functions of their evaluated
//! operands. Dispatch is a direct `match` on `OpKind`: the operator set is
//! closed, so there is no trait object per operator.

use std::cmp::Ordering;

use rpn_ir::OpKind;

use crate::errors::{
    arity_mismatch, division_by_zero, integer_out_of_range, modulo_by_zero, not_an_integer,
    reciprocal_of_zero, type_mismatch, zero_to_negative_power,
};
use crate::{EvalError, EvalResult, Value};

/// Apply a pure operation to its evaluated operands (in stored order).
pub fn evaluate_pure(op: OpKind, args: &[Value]) -> EvalResult {
    match args {
        [x] => evaluate_unary(op, x),
        [x, y] => evaluate_binary(op, x, y),
        _ => Err(arity_mismatch(op, args.len())),
    }
}

/// Evaluate a binary operation: `x` is operand 0 (written last), so
/// `y x -` computes `x - y`.
pub fn evaluate_binary(op: OpKind, x: &Value, y: &Value) -> EvalResult {
    match op {
        OpKind::Eq => Ok(Value::Bool(values_equal(x, y))),
        OpKind::NotEq => Ok(Value::Bool(!values_equal(x, y))),
        _ => eval_number_binary(op, expect_number(x)?, expect_number(y)?),
    }
}

/// Evaluate a unary operation.
pub fn evaluate_unary(op: OpKind, x: &Value) -> EvalResult {
    let n = expect_number(x)?;
    match op {
        OpKind::Reciprocal if n == 0.0 => Err(reciprocal_of_zero()),
        OpKind::Reciprocal => Ok(Value::Number(1.0 / n)),
        OpKind::Abs => Ok(Value::Number(n.abs())),
        _ => Err(arity_mismatch(op, 1)),
    }
}

fn eval_number_binary(op: OpKind, a: f64, b: f64) -> EvalResult {
    match op {
        OpKind::Add => Ok(Value::Number(a + b)),
        OpKind::Sub => Ok(Value::Number(a - b)),
        OpKind::Mul => Ok(Value::Number(a * b)),
        OpKind::Div if b == 0.0 => Err(division_by_zero()),
        OpKind::Div => Ok(Value::Number(a / b)),
        OpKind::Pow if a == 0.0 && b < 0.0 => Err(zero_to_negative_power()),
        OpKind::Pow => Ok(Value::Number(a.powf(b))),
        OpKind::Mod if b == 0.0 => Err(modulo_by_zero()),
        OpKind::Mod => Ok(Value::Number(floored_mod(a, b))),
        // Use partial_cmp for IEEE 754 compliant comparisons (NaN compares false)
        OpKind::Gt => Ok(Value::Bool(a.partial_cmp(&b) == Some(Ordering::Greater))),
        OpKind::GtEq => Ok(Value::Bool(matches!(
            a.partial_cmp(&b),
            Some(Ordering::Greater | Ordering::Equal)
        ))),
        OpKind::Lt => Ok(Value::Bool(a.partial_cmp(&b) == Some(Ordering::Less))),
        OpKind::LtEq => Ok(Value::Bool(matches!(
            a.partial_cmp(&b),
            Some(Ordering::Less | Ordering::Equal)
        ))),
        _ => Err(arity_mismatch(op, 2)),
    }
}

/// Modulus whose result takes the sign of the divisor (`-7 % 3 == 2`).
fn floored_mod(a: f64, b: f64) -> f64 {
    let r = a % b;
    if r != 0.0 && (r < 0.0) != (b < 0.0) {
        r + b
    } else {
        r
    }
}

/// Values of different types are never equal.
fn values_equal(x: &Value, y: &Value) -> bool {
    x.same_type(y) && x == y
}

/// Require a number.
pub(crate) fn expect_number(value: &Value) -> Result<f64, EvalError> {
    value
        .as_number()
        .ok_or_else(|| type_mismatch("number", value))
}

/// Coerce a value to an integer without truncating.
///
/// Whole-valued numbers (including `3.0`) convert; fractional or
/// non-finite numbers fail with a type error rather than being rounded.
/// Whole numbers outside the `i64` range fail instead of saturating.
pub fn coerce_integer(value: &Value) -> Result<i64, EvalError> {
    let n = expect_number(value)?;
    if !n.is_finite() || n.fract() != 0.0 {
        return Err(not_an_integer(n));
    }
    if !(-I64_LIMIT..I64_LIMIT).contains(&n) {
        return Err(integer_out_of_range(n));
    }
    Ok(n as i64)
}

/// 2^63, exactly representable; `i64` covers `[-2^63, 2^63)`.
const I64_LIMIT: f64 = 9_223_372_036_854_775_808.0;
