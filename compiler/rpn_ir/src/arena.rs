//! Arena storage for expression trees.
//!
//! - Contiguous storage for all nodes of one program
//! - Children reference each other through `ExprId`
//! - Frozen into a `SharedArena` once the tree builder is done

use std::fmt;
use std::sync::Arc;

use crate::{format_number, Expr, ExprId};

/// Contiguous storage for all expressions of a program.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ExprArena {
    /// All expressions (indexed by `ExprId`).
    exprs: Vec<Expr>,
}

impl ExprArena {
    /// Create a new empty arena.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create with capacity estimated from the program text.
    ///
    /// Every node comes from one token, and tokens are at least two bytes
    /// apart counting the separating whitespace.
    pub fn with_capacity(source_len: usize) -> Self {
        ExprArena {
            exprs: Vec::with_capacity(source_len / 2 + 1),
        }
    }

    /// Allocate expression, return ID.
    #[inline]
    pub fn alloc_expr(&mut self, expr: Expr) -> ExprId {
        let id = ExprId::new(self.exprs.len() as u32);
        self.exprs.push(expr);
        id
    }

    /// Get expression by ID, or `None` if `id` does not address a node.
    #[inline]
    pub fn get(&self, id: ExprId) -> Option<&Expr> {
        self.exprs.get(id.index())
    }

    /// Get number of expressions.
    #[inline]
    pub fn len(&self) -> usize {
        self.exprs.len()
    }

    /// Check if the arena holds no expressions.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.exprs.is_empty()
    }

    /// Render the subtree rooted at `id` in prefix form, e.g. `(+ x 3.0)`.
    pub fn display(&self, id: ExprId) -> TreeDisplay<'_> {
        TreeDisplay { arena: self, id }
    }

    fn write_tree(&self, id: ExprId, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.get(id) {
            None => write!(f, "<invalid {id:?}>"),
            Some(Expr::Variable(name)) => f.write_str(name),
            Some(Expr::Constant(value)) => f.write_str(&format_number(*value)),
            Some(Expr::Operation { op, operands }) => {
                write!(f, "({}", op.symbol())?;
                for &operand in operands {
                    f.write_str(" ")?;
                    self.write_tree(operand, f)?;
                }
                f.write_str(")")
            }
        }
    }
}

/// Prefix rendering of a subtree. Created by [`ExprArena::display`].
pub struct TreeDisplay<'a> {
    arena: &'a ExprArena,
    id: ExprId,
}

impl fmt::Display for TreeDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.arena.write_tree(self.id, f)
    }
}

/// Shared, immutable reference to a finished arena.
///
/// Deferred values keep the arena they were defined in alive, so a
/// subroutine defined by one program can be called from another program
/// evaluated against the same environment.
#[derive(Clone, Debug, PartialEq)]
pub struct SharedArena(Arc<ExprArena>);

impl SharedArena {
    /// Freeze an arena.
    pub fn new(arena: ExprArena) -> Self {
        SharedArena(Arc::new(arena))
    }

    /// Whether two handles refer to the same arena allocation.
    pub fn ptr_eq(&self, other: &SharedArena) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl std::ops::Deref for SharedArena {
    type Target = ExprArena;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

/// A parsed program: a frozen arena and the root of its single tree.
#[derive(Clone, Debug)]
pub struct Program {
    arena: SharedArena,
    root: ExprId,
}

impl Program {
    /// Create a program from a frozen arena and its root node.
    pub fn new(arena: SharedArena, root: ExprId) -> Self {
        Program { arena, root }
    }

    /// The arena holding every node of the program.
    #[inline]
    pub fn arena(&self) -> &SharedArena {
        &self.arena
    }

    /// The root node.
    #[inline]
    pub fn root(&self) -> ExprId {
        self.root
    }

    /// The root node's expression.
    pub fn root_expr(&self) -> Option<&Expr> {
        self.arena.get(self.root)
    }
}

impl fmt::Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.arena.write_tree(self.root, f)
    }
}
