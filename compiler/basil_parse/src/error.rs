//! Parse errors and the fixed "Expected ..." wordings.

use std::fmt;

use basil_ir::Span;

/// What may start a statement.
pub(crate) const STATEMENT_START: &str = "'return', 'continue', 'break', 'var', 'if', 'for', \
     'while', 'func', int, float, identifier, '+', '-', '(', '[' or 'not'";

/// What may start an expression.
pub(crate) const EXPR_START: &str =
    "'var', 'if', 'for', 'while', 'func', int, float, identifier, '+', '-', '(', '[' or 'not'";

/// What may start a comparison.
pub(crate) const COMP_EXPR_START: &str =
    "int, float, identifier, '+', '-', '(', '[', 'if', 'for', 'while', 'func' or 'not'";

/// What may start an atom.
pub(crate) const ATOM_START: &str =
    "int, float, identifier, '+', '-', '(', '[', 'if', 'for', 'while' or 'func'";

pub(crate) const CALL_ARGS_START: &str = "')', 'var', 'if', 'for', 'while', 'func', int, \
     float, identifier, '+', '-', '(', '[' or 'not'";

pub(crate) const LIST_ELEMENTS_START: &str = "']', 'var', 'if', 'for', 'while', 'func', int, \
     float, identifier, '+', '-', '(', '[' or 'not'";

/// What may follow a complete top-level statement other than a newline.
pub(crate) const TRAILING_OPERATOR: &str =
    "'+', '-', '*', '/', '^', '==', '!=', '<', '>', '<=', '>=', 'and' or 'or'";

/// A syntax error: the span of the offending token and the full message.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParseError {
    pub span: Span,
    pub message: String,
}

impl ParseError {
    #[cold]
    pub fn new(span: Span, message: impl Into<String>) -> Self {
        ParseError {
            span,
            message: message.into(),
        }
    }

    /// `Expected <what>` at `span`.
    #[cold]
    pub fn expected(span: Span, what: &str) -> Self {
        Self::new(span, format!("Expected {what}"))
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for ParseError {}
