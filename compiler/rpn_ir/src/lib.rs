//! RPN IR - expression tree types for the postfix interpreter.
//!
//! This crate contains the data structures shared by the tree builder and
//! the evaluator:
//! - `ExprId` indices into a flat `ExprArena`
//! - `Expr` nodes (variable, constant, operation)
//! - `OpKind`, the closed set of operation kinds with their arities
//! - `DispatchTable`, the token-to-operation mapping used while parsing
//! - `Program`, a built tree ready for evaluation
//!
//! # Design Philosophy
//!
//! - **Flatten Everything**: no `Box<Expr>`, children are `ExprId` indices
//! - **Immutable Once Built**: the arena is frozen into a `SharedArena`
//!   when parsing finishes; evaluation never mutates nodes
//! - **Closed Dispatch**: every operation is an `OpKind` variant, so the
//!   evaluator's `match` is exhaustive

mod arena;
mod dispatch;
mod expr;
mod expr_id;
mod op_kind;

pub use arena::{ExprArena, Program, SharedArena, TreeDisplay};
pub use dispatch::DispatchTable;
pub use expr::{format_number, Expr, Operands};
pub use expr_id::ExprId;
pub use op_kind::OpKind;
