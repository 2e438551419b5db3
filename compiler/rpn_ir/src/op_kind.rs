//! Operation kinds.
//!
//! The set of operations is fixed, so it is modelled as a closed enum rather
//! than a trait hierarchy. Adding a variant forces every `match` over
//! `OpKind` (arity, symbol, evaluation) to be revisited.

/// Every operation the interpreter understands.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum OpKind {
    // Arithmetic
    Add,
    Sub,
    Mul,
    Div,
    Pow,
    Mod,
    Reciprocal,
    Abs,

    // Comparison
    Eq,
    NotEq,
    Gt,
    GtEq,
    Lt,
    LtEq,

    // Bindings
    Alloc,
    AllocArray,
    Assign,
    ArraySet,

    // Sequencing
    Prog2,
    Prog3,
    Prog4,

    // Control flow
    If,
    While,
    For,

    // Subroutines
    DefSub,
    Call,

    // Utilities
    Print,
    Nop,
}

impl OpKind {
    /// All operation kinds, in dispatch-table order.
    pub const ALL: [OpKind; 28] = [
        OpKind::Add,
        OpKind::Mul,
        OpKind::Pow,
        OpKind::Sub,
        OpKind::Div,
        OpKind::Mod,
        OpKind::Reciprocal,
        OpKind::Abs,
        OpKind::Eq,
        OpKind::NotEq,
        OpKind::Gt,
        OpKind::GtEq,
        OpKind::Lt,
        OpKind::LtEq,
        OpKind::Alloc,
        OpKind::AllocArray,
        OpKind::Assign,
        OpKind::ArraySet,
        OpKind::Prog2,
        OpKind::Prog3,
        OpKind::Prog4,
        OpKind::If,
        OpKind::While,
        OpKind::For,
        OpKind::DefSub,
        OpKind::Call,
        OpKind::Print,
        OpKind::Nop,
    ];

    /// Number of operands the tree builder pops for this operation.
    pub const fn arity(self) -> usize {
        match self {
            Self::Nop => 0,
            Self::Reciprocal | Self::Abs | Self::Alloc | Self::Call | Self::Print => 1,
            Self::Add
            | Self::Sub
            | Self::Mul
            | Self::Div
            | Self::Pow
            | Self::Mod
            | Self::Eq
            | Self::NotEq
            | Self::Gt
            | Self::GtEq
            | Self::Lt
            | Self::LtEq
            | Self::AllocArray
            | Self::Assign
            | Self::Prog2
            | Self::While
            | Self::DefSub => 2,
            Self::ArraySet | Self::Prog3 | Self::If => 3,
            Self::Prog4 | Self::For => 4,
        }
    }

    /// Returns the source-level token for this operation.
    ///
    /// Used by the standard dispatch table and in error messages.
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Pow => "**",
            Self::Mod => "%",
            Self::Reciprocal => "1/",
            Self::Abs => "abs",
            Self::Eq => "=",
            Self::NotEq => "!=",
            Self::Gt => ">",
            Self::GtEq => ">=",
            Self::Lt => "<",
            Self::LtEq => "<=",
            Self::Alloc => "alloc",
            Self::AllocArray => "valloc",
            Self::Assign => "setq",
            Self::ArraySet => "setv",
            Self::Prog2 => "prog2",
            Self::Prog3 => "prog3",
            Self::Prog4 => "prog4",
            Self::If => "if",
            Self::While => "while",
            Self::For => "for",
            Self::DefSub => "defsub",
            Self::Call => "call",
            Self::Print => "print",
            Self::Nop => "nop",
        }
    }

    /// Whether this operation is a pure function of its evaluated operands.
    ///
    /// Pure kinds evaluate every operand and then combine the results.
    /// The rest read or write the environment directly and decide for
    /// themselves which operands to evaluate, and when.
    pub const fn is_pure(self) -> bool {
        matches!(
            self,
            Self::Add
                | Self::Sub
                | Self::Mul
                | Self::Div
                | Self::Pow
                | Self::Mod
                | Self::Reciprocal
                | Self::Abs
                | Self::Eq
                | Self::NotEq
                | Self::Gt
                | Self::GtEq
                | Self::Lt
                | Self::LtEq
        )
    }
}
