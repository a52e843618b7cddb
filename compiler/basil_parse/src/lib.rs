//! Recursive descent parser for Basil.
//!
//! Turns a [`TokenList`] into one [`Node`] tree rooted at a
//! [`NodeKind::Block`](basil_ir::NodeKind::Block) of statements. Binary
//! operator levels fold left in loops; everything else recurses, guarded by
//! [`basil_stack::ensure_sufficient_stack`].
//!
//! Parsing stops at the first error. The `progress` module decides which
//! error gets reported; `snapshot` holds the one place the parser
//! backtracks.

mod cursor;
mod error;
mod grammar;
mod progress;
mod snapshot;

pub use cursor::Cursor;
pub use error::ParseError;
pub use snapshot::ParserSnapshot;

use basil_ir::{Keyword, Node, Span, Token, TokenKind, TokenList};

/// Parser state.
pub struct Parser<'a> {
    cursor: Cursor<'a>,
}

impl<'a> Parser<'a> {
    pub fn new(tokens: &'a TokenList) -> Self {
        Parser {
            cursor: Cursor::new(tokens),
        }
    }

    /// Parse a whole program: a statement list that must end at `Eof`.
    pub fn parse_program(&mut self) -> Result<Node, ParseError> {
        let program = self.statements()?;
        if !self.is_at_end() {
            return Err(ParseError::expected(
                self.current_span(),
                error::TRAILING_OPERATOR,
            ));
        }
        Ok(program)
    }

    // Cursor delegation.

    #[inline]
    fn current(&self) -> &'a Token {
        self.cursor.current()
    }

    #[inline]
    fn current_kind(&self) -> &'a TokenKind {
        self.cursor.current_kind()
    }

    #[inline]
    fn current_span(&self) -> Span {
        self.cursor.current_span()
    }

    #[inline]
    fn position(&self) -> usize {
        self.cursor.position()
    }

    #[inline]
    fn is_at_end(&self) -> bool {
        self.cursor.is_at_end()
    }

    #[inline]
    fn check(&self, kind: &TokenKind) -> bool {
        self.cursor.check(kind)
    }

    #[inline]
    fn check_keyword(&self, kw: Keyword) -> bool {
        self.cursor.check_keyword(kw)
    }

    #[inline]
    fn advance(&mut self) -> &'a Token {
        self.cursor.advance()
    }

    #[inline]
    fn skip_newlines(&mut self) -> usize {
        self.cursor.skip_newlines()
    }

    #[inline]
    fn expect(&mut self, kind: &TokenKind, what: &str) -> Result<&'a Token, ParseError> {
        self.cursor.expect(kind, what)
    }

    #[inline]
    fn expect_keyword(&mut self, kw: Keyword, what: &str) -> Result<&'a Token, ParseError> {
        self.cursor.expect_keyword(kw, what)
    }

    #[inline]
    fn expect_ident(&mut self, what: &str) -> Result<String, ParseError> {
        self.cursor.expect_ident(what)
    }
}

/// Parse a token stream into a program.
#[tracing::instrument(level = "debug", skip_all, fields(tokens = tokens.len()))]
pub fn parse(tokens: &TokenList) -> Result<Node, ParseError> {
    Parser::new(tokens).parse_program()
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests;
