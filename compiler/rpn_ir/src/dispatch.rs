//! Token-to-operation dispatch.
//!
//! Consulted only while building the tree. A token found here is an
//! operator; anything else is a numeric literal or a variable name.

use rustc_hash::FxHashMap;

use crate::OpKind;

/// Mapping from operator token to operation kind.
///
/// The arity of each entry is `OpKind::arity`, so the table cannot
/// disagree with the evaluator about how many operands an operation has.
#[derive(Clone, Debug, Default)]
pub struct DispatchTable {
    ops: FxHashMap<String, OpKind>,
}

impl DispatchTable {
    /// Create a table with no operators registered.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Create the standard table: every `OpKind` under its own symbol.
    pub fn standard() -> Self {
        let mut table = Self::empty();
        for op in OpKind::ALL {
            table.register(op.symbol(), op);
        }
        table
    }

    /// Register `symbol` as a token for `op`.
    ///
    /// Registering an existing symbol replaces its operation and returns
    /// the previous one.
    pub fn register(&mut self, symbol: impl Into<String>, op: OpKind) -> Option<OpKind> {
        self.ops.insert(symbol.into(), op)
    }

    /// Look up a token.
    #[inline]
    pub fn lookup(&self, token: &str) -> Option<OpKind> {
        self.ops.get(token).copied()
    }

    /// Whether `token` is a registered operator.
    #[inline]
    pub fn contains(&self, token: &str) -> bool {
        self.ops.contains_key(token)
    }

    /// Number of registered symbols.
    pub fn len(&self) -> usize {
        self.ops.len()
    }

    /// Check if no symbols are registered.
    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }

    /// Iterate over `(symbol, op)` pairs in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, OpKind)> {
        self.ops.iter().map(|(symbol, op)| (symbol.as_str(), *op))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn standard_table_covers_every_kind() {
        let table = DispatchTable::standard();
        assert_eq!(table.len(), OpKind::ALL.len());
        for op in OpKind::ALL {
            assert_eq!(table.lookup(op.symbol()), Some(op));
        }
    }

    #[test]
    fn unknown_tokens_are_not_operators() {
        let table = DispatchTable::standard();
        assert_eq!(table.lookup("x"), None);
        assert_eq!(table.lookup("3.5"), None);
        assert!(!table.contains("1"));
        assert!(table.contains("1/"));
    }

    #[test]
    fn register_adds_alias() {
        let mut table = DispatchTable::standard();
        assert_eq!(table.register("sub", OpKind::Sub), None);
        assert_eq!(table.lookup("sub"), Some(OpKind::Sub));
        assert_eq!(table.lookup("-"), Some(OpKind::Sub));
    }

    #[test]
    fn register_replaces_existing_symbol() {
        let mut table = DispatchTable::standard();
        assert_eq!(table.register("+", OpKind::Mul), Some(OpKind::Add));
        assert_eq!(table.lookup("+"), Some(OpKind::Mul));
    }

    #[test]
    fn empty_table_has_no_operators() {
        let table = DispatchTable::empty();
        assert!(table.is_empty());
        assert_eq!(table.iter().count(), 0);
    }
}
