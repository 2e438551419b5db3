//! `InterpreterBuilder` for creating interpreters with non-default settings.

use super::{empty_arena, Interpreter};
use crate::eval_mode::{EvalMode, ModeState};
use crate::{stdout_handler, Environment, SharedPrintHandler};

/// Builder for [`Interpreter`].
///
/// ```text
/// let output = buffer_handler();
/// let mut interpreter = InterpreterBuilder::new()
///     .mode(EvalMode::Bounded { budget: 10_000 })
///     .print_handler(output.clone())
///     .build(&mut env);
/// ```
#[derive(Default)]
pub struct InterpreterBuilder {
    mode: EvalMode,
    print_handler: Option<SharedPrintHandler>,
}

impl InterpreterBuilder {
    /// Create a builder with the default `Interpret` mode and stdout output.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the evaluation mode.
    #[must_use]
    pub fn mode(mut self, mode: EvalMode) -> Self {
        self.mode = mode;
        self
    }

    /// Set where `print` writes. Default is stdout.
    #[must_use]
    pub fn print_handler(mut self, handler: SharedPrintHandler) -> Self {
        self.print_handler = Some(handler);
        self
    }

    /// Build an interpreter over `env`.
    pub fn build(self, env: &mut Environment) -> Interpreter<'_> {
        Interpreter {
            arena: empty_arena(),
            env,
            print_handler: self.print_handler.unwrap_or_else(stdout_handler),
            mode_state: ModeState::new(&self.mode),
        }
    }
}
