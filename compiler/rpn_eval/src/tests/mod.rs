//! Evaluator tests grouped by operation family.
//!
//! Programs are written as source text and parsed with the standard
//! dispatch table, so operand order is exercised exactly as users write it.

mod bindings_tests;
mod operators_tests;

use rpn_parse::parse_standard;

use crate::{buffer_handler, Environment, EvalError, EvalResult, InterpreterBuilder, Value};

/// Evaluate `text` against `env`, capturing printed output.
pub(crate) fn eval_with(text: &str, env: &mut Environment) -> (EvalResult, String) {
    let program = match parse_standard(text) {
        Ok(program) => program,
        Err(e) => panic!("failed to parse {text:?}: {e}"),
    };
    let output = buffer_handler();
    let result = InterpreterBuilder::new()
        .print_handler(output.clone())
        .build(env)
        .eval_program(&program);
    (result, output.get_output())
}

/// Evaluate `text` in `env`, expecting success.
pub(crate) fn eval_ok(text: &str, env: &mut Environment) -> Value {
    match eval_with(text, env).0 {
        Ok(value) => value,
        Err(e) => panic!("{text:?} failed: {e}"),
    }
}

/// Evaluate `text` in `env`, expecting failure.
pub(crate) fn eval_err(text: &str, env: &mut Environment) -> EvalError {
    match eval_with(text, env).0 {
        Ok(value) => panic!("{text:?} evaluated to {value}, expected an error"),
        Err(e) => e,
    }
}

/// Evaluate `text` in a fresh environment.
pub(crate) fn eval_fresh(text: &str) -> EvalResult {
    eval_with(text, &mut Environment::new()).0
}

/// An environment with `true` and `false` bound, since the language has
/// no boolean literals.
pub(crate) fn env_with_bools() -> Environment {
    let mut env = Environment::new();
    env.bind("true", Value::Bool(true));
    env.bind("false", Value::Bool(false));
    env
}
