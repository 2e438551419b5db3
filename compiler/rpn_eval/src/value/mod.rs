//! Runtime values.
//!
//! The value set is deliberately small: numbers, booleans, number arrays,
//! deferred expressions, and the `nop` sentinel. Arrays are the only values
//! with reference semantics (see [`ArrayRef`]).

mod array;

use std::fmt;

use rpn_ir::{format_number, ExprId, SharedArena};

pub use array::{ArrayRef, MAX_ARRAY_LEN};

/// What a deferred expression was produced by.
///
/// `call` only accepts `Subroutine`; the tag is what tells a subroutine
/// apart from any other value that happens to hold an expression.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum DeferredTag {
    /// Stored by `defsub`, invocable with `call`.
    Subroutine,
    /// Returned by `while`/`for` when the body never ran.
    LoopBody,
}

/// An unevaluated expression held as a value.
///
/// Carries its own arena so the expression stays valid after the program
/// that defined it has been dropped.
#[derive(Clone, Debug)]
pub struct DeferredValue {
    arena: SharedArena,
    body: ExprId,
    tag: DeferredTag,
}

impl DeferredValue {
    /// Wrap `body` (a node of `arena`) without evaluating it.
    pub fn new(arena: SharedArena, body: ExprId, tag: DeferredTag) -> Self {
        DeferredValue { arena, body, tag }
    }

    /// The arena the body belongs to.
    #[inline]
    pub fn arena(&self) -> &SharedArena {
        &self.arena
    }

    /// The wrapped node.
    #[inline]
    pub fn body(&self) -> ExprId {
        self.body
    }

    #[inline]
    pub fn tag(&self) -> DeferredTag {
        self.tag
    }

    /// Whether `call` may invoke this value.
    #[inline]
    pub fn is_subroutine(&self) -> bool {
        self.tag == DeferredTag::Subroutine
    }
}

impl PartialEq for DeferredValue {
    fn eq(&self, other: &Self) -> bool {
        self.tag == other.tag && self.body == other.body && self.arena.ptr_eq(&other.arena)
    }
}

/// Runtime value.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    /// Real number.
    Number(f64),
    /// Result of a comparison; the only valid `if`/`while` condition.
    Bool(bool),
    /// Shared, fixed-length, mutable array of numbers.
    Array(ArrayRef),
    /// Unevaluated expression.
    Deferred(DeferredValue),
    /// Result of `nop`.
    Nop,
}

impl Value {
    /// Create a fresh array of `len` zeros.
    pub fn zeroed_array(len: usize) -> Self {
        Value::Array(ArrayRef::zeroed(len))
    }

    /// Create an array holding `values`.
    pub fn array(values: Vec<f64>) -> Self {
        Value::Array(ArrayRef::from_vec(values))
    }

    /// Human-readable type name, used in error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Number(_) => "number",
            Value::Bool(_) => "boolean",
            Value::Array(_) => "array",
            Value::Deferred(d) => match d.tag {
                DeferredTag::Subroutine => "subroutine",
                DeferredTag::LoopBody => "unevaluated expression",
            },
            Value::Nop => "nop",
        }
    }

    #[inline]
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    #[inline]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    #[inline]
    pub fn as_array(&self) -> Option<&ArrayRef> {
        match self {
            Value::Array(a) => Some(a),
            _ => None,
        }
    }

    #[inline]
    pub fn as_deferred(&self) -> Option<&DeferredValue> {
        match self {
            Value::Deferred(d) => Some(d),
            _ => None,
        }
    }

    /// Whether the two values have the same variant.
    pub fn same_type(&self, other: &Value) -> bool {
        std::mem::discriminant(self) == std::mem::discriminant(other)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Number(n) => f.write_str(&format_number(*n)),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Array(a) => write!(f, "{a}"),
            Value::Deferred(d) => {
                let label = match d.tag {
                    DeferredTag::Subroutine => "subroutine",
                    DeferredTag::LoopBody => "unevaluated",
                };
                write!(f, "<{label} {}>", d.arena.display(d.body))
            }
            Value::Nop => f.write_str("nop"),
        }
    }
}
