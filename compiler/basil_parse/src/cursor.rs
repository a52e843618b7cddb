//! Token cursor for navigating the token stream.
//!
//! Provides low-level token access, lookahead, and consumption methods.
//! The cursor never moves past the final `Eof`, so `current()` is always a
//! real token.

use basil_ir::{Keyword, Span, Token, TokenKind, TokenList};
use tracing::trace;

use crate::ParseError;

/// Stand-in for a token list that lacks its terminating `Eof`.
static EOF_TOKEN: Token = Token {
    kind: TokenKind::Eof,
    span: Span::DUMMY,
};

/// Cursor for navigating tokens.
pub struct Cursor<'a> {
    tokens: &'a [Token],
    pos: usize,
}

impl<'a> Cursor<'a> {
    /// Create a new cursor at the start of the token stream.
    pub fn new(tokens: &'a TokenList) -> Self {
        Cursor {
            tokens: tokens.as_slice(),
            pos: 0,
        }
    }

    /// Current index into the token stream.
    ///
    /// Comparing positions before and after a sub-parse tells whether it
    /// consumed anything.
    #[inline]
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Move the cursor directly. Used by snapshot restore.
    pub fn set_position(&mut self, pos: usize) {
        debug_assert!(
            pos <= self.tokens.len(),
            "cursor position {} out of bounds (max {})",
            pos,
            self.tokens.len()
        );
        self.pos = pos;
    }

    #[inline]
    pub fn current(&self) -> &'a Token {
        self.tokens
            .get(self.pos)
            .or_else(|| self.tokens.last())
            .unwrap_or(&EOF_TOKEN)
    }

    #[inline]
    pub fn current_kind(&self) -> &'a TokenKind {
        &self.current().kind
    }

    #[inline]
    pub fn current_span(&self) -> Span {
        self.current().span
    }

    #[inline]
    pub fn is_at_end(&self) -> bool {
        matches!(self.current_kind(), TokenKind::Eof)
    }

    /// Whether the current token has the same kind as `kind`, ignoring any
    /// literal payload.
    #[inline]
    pub fn check(&self, kind: &TokenKind) -> bool {
        std::mem::discriminant(self.current_kind()) == std::mem::discriminant(kind)
    }

    #[inline]
    pub fn check_keyword(&self, kw: Keyword) -> bool {
        self.current_kind().is_keyword(kw)
    }

    /// Consume the current token and return it. `Eof` is never consumed.
    pub fn advance(&mut self) -> &'a Token {
        let token = self.current();
        trace!(
            pos = self.pos,
            kind = token.kind.display_name(),
            span_start = token.span.start,
            span_end = token.span.end,
            "advance"
        );
        if !self.is_at_end() {
            self.pos += 1;
        }
        token
    }

    /// Consume every consecutive newline and return how many there were.
    pub fn skip_newlines(&mut self) -> usize {
        let mut count = 0;
        while self.check(&TokenKind::Newline) {
            self.advance();
            count += 1;
        }
        count
    }

    /// Consume a token of kind `kind`, or fail with "Expected `what`".
    pub fn expect(&mut self, kind: &TokenKind, what: &str) -> Result<&'a Token, ParseError> {
        if self.check(kind) {
            Ok(self.advance())
        } else {
            Err(self.make_expect_error(what))
        }
    }

    pub fn expect_keyword(&mut self, kw: Keyword, what: &str) -> Result<&'a Token, ParseError> {
        if self.check_keyword(kw) {
            Ok(self.advance())
        } else {
            Err(self.make_expect_error(what))
        }
    }

    /// Consume an identifier and return its name.
    pub fn expect_ident(&mut self, what: &str) -> Result<String, ParseError> {
        if let TokenKind::Ident(name) = self.current_kind() {
            self.advance();
            Ok(name.clone())
        } else {
            Err(self.make_expect_error(what))
        }
    }

    #[cold]
    #[inline(never)]
    fn make_expect_error(&self, what: &str) -> ParseError {
        ParseError::expected(self.current_span(), what)
    }
}
