//! RPN - a postfix expression interpreter.
//!
//! Programs are whitespace-separated tokens in reverse Polish order. They
//! are parsed into an expression tree and evaluated against a mutable
//! [`Environment`] that outlives the evaluation:
//!
//! ```
//! use rpn::{run, Environment, Value};
//!
//! let mut env = Environment::new();
//! env.bind("x", Value::Number(3.0));
//! assert_eq!(run("2 3 + x * 6 -", &mut env), Ok(Value::Number(-9.0)));
//! ```
//!
//! The pieces are re-exported for callers that need more control: parse
//! once and evaluate many times, register extra operator symbols, capture
//! printed output, or bound the number of evaluation steps.

use std::sync::Once;

use thiserror::Error;

pub use rpn_eval::{
    buffer_handler, evaluate, silent_handler, stdout_handler, ArrayRef, DeferredTag,
    DeferredValue, Environment, ErrorCategory, EvalError, EvalErrorKind, EvalMode, EvalResult,
    Interpreter, InterpreterBuilder, SharedPrintHandler, Value, MAX_ARRAY_LEN,
};
pub use rpn_ir::{DispatchTable, Expr, ExprArena, ExprId, OpKind, Program, SharedArena};
pub use rpn_parse::{parse, parse_standard, ParseError};

/// Either phase of running a program failed.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum RunError {
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error(transparent)]
    Eval(#[from] EvalError),
}

/// Parse `text` with the standard operators and evaluate it against `env`.
///
/// `print` writes to stdout.
pub fn run(text: &str, env: &mut Environment) -> Result<Value, RunError> {
    let program = parse_standard(text)?;
    Ok(evaluate(&program, env)?)
}

/// Parse `text` with `dispatch` and evaluate it on an existing interpreter.
///
/// The interpreter's environment, print handler, and step budget carry
/// over between calls.
pub fn run_with(
    text: &str,
    dispatch: &DispatchTable,
    interpreter: &mut Interpreter<'_>,
) -> Result<Value, RunError> {
    let program = parse(text, dispatch)?;
    tracing::debug!(nodes = program.arena().len(), "parsed");
    Ok(interpreter.eval_program(&program)?)
}

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debug output.
///
/// Safe to call multiple times. Enable with `RUST_LOG=rpn_eval=debug` or
/// `RUST_LOG=rpn_parse=trace`.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        // Only initialize if RUST_LOG is set
        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true))
                .with(filter)
                .init();
        }
    });
}
