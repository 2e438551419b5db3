//! RPN Parse - builds expression trees from postfix programs.
//!
//! A program is a sequence of whitespace-separated tokens. Each token is an
//! operator from the [`DispatchTable`], a number, or (by elimination) a
//! variable name. Tokens are folded left to right over a working stack of
//! finished nodes; an operator pops its operands and pushes the operation.
//!
//! ```text
//! "3 5 -"   =>   (- 5.0 3.0)   =>   2.0 when evaluated
//! ```

mod builder;
mod error;

pub use builder::TreeBuilder;
pub use error::ParseError;

use rpn_ir::{DispatchTable, Program};

/// Parse `text` into a program using `dispatch` to recognize operators.
///
/// Fails if an operator lacks operands, if the program is empty, or if more
/// than one tree is left once every token is consumed.
pub fn parse(text: &str, dispatch: &DispatchTable) -> Result<Program, ParseError> {
    let mut builder = TreeBuilder::new(dispatch, text.len());
    for token in text.split_ascii_whitespace() {
        builder.push_token(token)?;
    }
    builder.finish()
}

/// Parse `text` with the standard dispatch table.
pub fn parse_standard(text: &str) -> Result<Program, ParseError> {
    parse(text, &DispatchTable::standard())
}
