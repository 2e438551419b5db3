//! RPN Eval - tree-walking evaluator for parsed RPN programs.
//!
//! # Architecture
//!
//! - `Interpreter`: recursive evaluator over a borrowed `Environment`
//! - `evaluate_pure`: direct enum-based dispatch for arithmetic and comparison
//! - `exec`: binding, control-flow, and subroutine kinds
//! - `Value`: numbers, booleans, shared arrays, deferred expressions, `nop`
//!
//! Evaluation is single-threaded and strictly sequential. All state lives
//! in the caller's `Environment`, which persists across evaluations.

mod environment;
pub mod errors;
mod eval_mode;
mod exec;
pub mod interpreter;
mod operators;
mod print_handler;
mod stack;
mod value;

pub use environment::Environment;
pub use errors::{ErrorCategory, EvalError, EvalErrorKind, EvalResult};
pub use eval_mode::{BudgetExceeded, EvalMode, ModeState};
pub use interpreter::{Interpreter, InterpreterBuilder};
pub use operators::{coerce_integer, evaluate_binary, evaluate_pure, evaluate_unary};
pub use print_handler::{
    buffer_handler, silent_handler, stdout_handler, BufferPrintHandler, PrintHandlerImpl,
    SharedPrintHandler,
};
pub use stack::ensure_sufficient_stack;
pub use value::{ArrayRef, DeferredTag, DeferredValue, Value, MAX_ARRAY_LEN};

use rpn_ir::Program;

/// Evaluate `program` against `env` with default settings.
///
/// `print` writes to stdout. Bindings made by the program stay in `env`.
pub fn evaluate(program: &Program, env: &mut Environment) -> EvalResult {
    Interpreter::new(env).eval_program(program)
}

#[cfg(test)]
mod tests;
