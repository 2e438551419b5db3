//! Evaluation errors.
//!
//! `EvalErrorKind` carries the structured data of each failure. Factory
//! functions (e.g. `division_by_zero()`) are the public way to build an
//! `EvalError`; they fill in both `kind` and `message`.
//!
//! Every error aborts the evaluation that raised it. There is no recovery
//! and no partial result.

use std::fmt;

use rpn_ir::{ExprId, OpKind};
use thiserror::Error;

use crate::Value;

/// Result of evaluation.
pub type EvalResult = Result<Value, EvalError>;

/// Typed error category.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum EvalErrorKind {
    // Access
    #[error("cannot find variable `{name}` in the environment")]
    MissingVariable { name: String },

    // Tree shape
    #[error("operand {id:?} is not an expression")]
    NotAnExpression { id: ExprId },
    #[error("`{op}` expects {expected} operands, found {found}")]
    ArityMismatch {
        op: &'static str,
        expected: usize,
        found: usize,
    },
    #[error("`{op}` needs a variable, found `{found}`")]
    NotAVariable { op: &'static str, found: String },

    // Targets
    #[error("{got} is not an array")]
    NotAnArray { got: &'static str },
    #[error("can only call expressions defined by defsub, found {got}")]
    NotASubroutine { got: &'static str },

    // Arithmetic
    #[error("division by zero")]
    DivisionByZero,
    #[error("modulus by zero")]
    ModuloByZero,
    #[error("reciprocal of zero")]
    ReciprocalOfZero,
    #[error("zero cannot be raised to a negative power")]
    ZeroToNegativePower,

    // Indexing
    #[error("index {index} is out of range for an array of length {len}")]
    IndexOutOfRange { index: i64, len: usize },
    #[error("index {index} must not be negative")]
    NegativeIndex { index: i64 },
    #[error("array length {len} must not be negative")]
    NegativeLength { len: i64 },
    #[error("array length {len} exceeds the maximum of {max}")]
    ArrayTooLarge { len: usize, max: usize },

    // Types
    #[error("condition must be a boolean, got {got}")]
    ConditionNotBool { got: &'static str },
    #[error("{value} is not an integer")]
    NotAnInteger { value: f64 },
    #[error("{value} is outside the integer range")]
    IntegerOutOfRange { value: f64 },
    #[error("type mismatch: expected {expected}, got {got}")]
    TypeMismatch {
        expected: &'static str,
        got: &'static str,
    },

    // Limits
    #[error("step budget of {budget} exceeded")]
    BudgetExceeded { budget: u64 },
}

/// Coarse error category: what kind of mistake the program made.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    MissingVariable,
    NotAnExpression,
    NotAnArray,
    NotAVariable,
    Subroutine,
    Arithmetic,
    Index,
    Type,
    /// Only raised in bounded evaluation mode.
    Budget,
}

impl EvalErrorKind {
    /// The category this kind belongs to.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::MissingVariable { .. } => ErrorCategory::MissingVariable,
            Self::NotAnExpression { .. } | Self::ArityMismatch { .. } => {
                ErrorCategory::NotAnExpression
            }
            Self::NotAVariable { .. } => ErrorCategory::NotAVariable,
            Self::NotAnArray { .. } => ErrorCategory::NotAnArray,
            Self::NotASubroutine { .. } => ErrorCategory::Subroutine,
            Self::DivisionByZero
            | Self::ModuloByZero
            | Self::ReciprocalOfZero
            | Self::ZeroToNegativePower => ErrorCategory::Arithmetic,
            Self::IndexOutOfRange { .. }
            | Self::NegativeIndex { .. }
            | Self::NegativeLength { .. }
            | Self::ArrayTooLarge { .. } => ErrorCategory::Index,
            Self::ConditionNotBool { .. }
            | Self::NotAnInteger { .. }
            | Self::IntegerOutOfRange { .. }
            | Self::TypeMismatch { .. } => ErrorCategory::Type,
            Self::BudgetExceeded { .. } => ErrorCategory::Budget,
        }
    }
}

/// Evaluation error.
#[derive(Clone, Debug, PartialEq)]
pub struct EvalError {
    /// Structured error category.
    pub kind: EvalErrorKind,
    /// Human-readable error message; equals `kind.to_string()`.
    pub message: String,
    /// Symbol of the innermost operation the error escaped from.
    pub operation: Option<&'static str>,
}

impl EvalError {
    /// Create an error from a structured kind.
    pub fn from_kind(kind: EvalErrorKind) -> Self {
        let message = kind.to_string();
        EvalError {
            kind,
            message,
            operation: None,
        }
    }

    /// The coarse category of this error.
    #[inline]
    pub fn category(&self) -> ErrorCategory {
        self.kind.category()
    }

    /// Record the operation the error escaped from, unless an inner
    /// operation already claimed it.
    #[must_use]
    pub fn in_operation(mut self, op: OpKind) -> Self {
        if self.operation.is_none() {
            self.operation = Some(op.symbol());
        }
        self
    }
}

impl fmt::Display for EvalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)?;
        if let Some(op) = self.operation {
            write!(f, " (in `{op}`)")?;
        }
        Ok(())
    }
}

impl std::error::Error for EvalError {}

impl From<EvalErrorKind> for EvalError {
    fn from(kind: EvalErrorKind) -> Self {
        EvalError::from_kind(kind)
    }
}

// Access

#[cold]
pub fn missing_variable(name: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::MissingVariable {
        name: name.to_string(),
    })
}

// Tree shape

#[cold]
pub fn not_an_expression(id: ExprId) -> EvalError {
    EvalError::from_kind(EvalErrorKind::NotAnExpression { id })
}

#[cold]
pub fn arity_mismatch(op: OpKind, found: usize) -> EvalError {
    EvalError::from_kind(EvalErrorKind::ArityMismatch {
        op: op.symbol(),
        expected: op.arity(),
        found,
    })
}

/// `found` is the offending operand rendered as a tree.
#[cold]
pub fn not_a_variable(op: OpKind, found: impl Into<String>) -> EvalError {
    EvalError::from_kind(EvalErrorKind::NotAVariable {
        op: op.symbol(),
        found: found.into(),
    })
}

// Targets

#[cold]
pub fn not_an_array(got: &Value) -> EvalError {
    EvalError::from_kind(EvalErrorKind::NotAnArray {
        got: got.type_name(),
    })
}

#[cold]
pub fn not_a_subroutine(got: &Value) -> EvalError {
    EvalError::from_kind(EvalErrorKind::NotASubroutine {
        got: got.type_name(),
    })
}

// Arithmetic

#[cold]
pub fn division_by_zero() -> EvalError {
    EvalError::from_kind(EvalErrorKind::DivisionByZero)
}

#[cold]
pub fn modulo_by_zero() -> EvalError {
    EvalError::from_kind(EvalErrorKind::ModuloByZero)
}

#[cold]
pub fn reciprocal_of_zero() -> EvalError {
    EvalError::from_kind(EvalErrorKind::ReciprocalOfZero)
}

#[cold]
pub fn zero_to_negative_power() -> EvalError {
    EvalError::from_kind(EvalErrorKind::ZeroToNegativePower)
}

// Indexing

#[cold]
pub fn index_out_of_range(index: i64, len: usize) -> EvalError {
    EvalError::from_kind(EvalErrorKind::IndexOutOfRange { index, len })
}

#[cold]
pub fn negative_index(index: i64) -> EvalError {
    EvalError::from_kind(EvalErrorKind::NegativeIndex { index })
}

#[cold]
pub fn negative_length(len: i64) -> EvalError {
    EvalError::from_kind(EvalErrorKind::NegativeLength { len })
}

#[cold]
pub fn array_too_large(len: usize, max: usize) -> EvalError {
    EvalError::from_kind(EvalErrorKind::ArrayTooLarge { len, max })
}

// Types

#[cold]
pub fn condition_not_bool(got: &Value) -> EvalError {
    EvalError::from_kind(EvalErrorKind::ConditionNotBool {
        got: got.type_name(),
    })
}

#[cold]
pub fn not_an_integer(value: f64) -> EvalError {
    EvalError::from_kind(EvalErrorKind::NotAnInteger { value })
}

#[cold]
pub fn integer_out_of_range(value: f64) -> EvalError {
    EvalError::from_kind(EvalErrorKind::IntegerOutOfRange { value })
}

#[cold]
pub fn type_mismatch(expected: &'static str, got: &Value) -> EvalError {
    EvalError::from_kind(EvalErrorKind::TypeMismatch {
        expected,
        got: got.type_name(),
    })
}

// Limits

#[cold]
pub fn budget_exceeded(budget: u64) -> EvalError {
    EvalError::from_kind(EvalErrorKind::BudgetExceeded { budget })
}
