//! Evaluation rules for the stateful operation kinds.
//!
//! These kinds do not simply evaluate every operand: they bind variables,
//! mutate arrays, pick which operands run and how often, or hold operands
//! back unevaluated. Each submodule adds methods to `Interpreter`.
//!
//! Operands arrive in stored order: operand 0 is the one written
//! immediately before the operator.

mod bindings;
mod call;
mod control;
