//! Evaluation modes.
//!
//! Programs may loop forever; that is a property of the language. Callers
//! that need a bound pick `EvalMode::Bounded`, which charges one step per
//! node evaluated and aborts once the budget is spent.

/// Evaluation policy, chosen when the interpreter is built.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum EvalMode {
    /// No limit on evaluation steps.
    #[default]
    Interpret,
    /// Abort after `budget` node evaluations.
    Bounded {
        /// Maximum number of node evaluations.
        budget: u64,
    },
}

impl EvalMode {
    /// The step budget, or `None` when unbounded.
    #[inline]
    pub fn step_budget(&self) -> Option<u64> {
        match self {
            Self::Interpret => None,
            Self::Bounded { budget } => Some(*budget),
        }
    }
}

/// Per-mode mutable state kept by the interpreter.
#[derive(Debug)]
pub struct ModeState {
    /// Nodes evaluated so far.
    steps: u64,
    budget: Option<u64>,
}

impl ModeState {
    /// Create state for the given mode.
    pub fn new(mode: &EvalMode) -> Self {
        ModeState {
            steps: 0,
            budget: mode.step_budget(),
        }
    }

    /// Charge one step.
    ///
    /// Always `Ok` when unbounded; steps are still counted.
    #[inline]
    pub fn check_budget(&mut self) -> Result<(), BudgetExceeded> {
        self.steps = self.steps.saturating_add(1);
        match self.budget {
            Some(budget) if self.steps > budget => Err(BudgetExceeded {
                budget,
                steps: self.steps,
            }),
            _ => Ok(()),
        }
    }

    /// Nodes evaluated so far.
    #[inline]
    pub fn steps(&self) -> u64 {
        self.steps
    }
}

/// Returned when a bounded evaluation runs out of steps.
#[derive(Debug, PartialEq, Eq)]
pub struct BudgetExceeded {
    /// The configured budget.
    pub budget: u64,
    /// Steps taken, including the one that failed.
    pub steps: u64,
}
