//! Atoms: literals, names, parenthesized expressions, list literals, and
//! the keyword-led compound expressions.

use basil_ir::{Keyword, Node, NodeKind, TokenKind};

use crate::error::{ATOM_START, LIST_ELEMENTS_START};
use crate::{ParseError, Parser};

impl Parser<'_> {
    pub(super) fn atom(&mut self) -> Result<Node, ParseError> {
        let token = self.current();
        match &token.kind {
            TokenKind::Int(_) | TokenKind::Float(_) => {
                self.advance();
                let value = token.kind.number_value().unwrap_or_default();
                Ok(Node::new(NodeKind::Number(value), token.span))
            }
            TokenKind::Str(text) => {
                self.advance();
                Ok(Node::new(NodeKind::Str(text.clone()), token.span))
            }
            TokenKind::Ident(name) => {
                self.advance();
                Ok(Node::new(NodeKind::VarAccess(name.clone()), token.span))
            }
            TokenKind::LParen => {
                let open = self.advance().span;
                let inner = self.expr()?;
                let close = self.expect(&TokenKind::RParen, "')'")?.span;
                // No node of its own, but the span takes in both parens.
                Ok(Node {
                    span: open.merge(close),
                    ..inner
                })
            }
            TokenKind::LBracket => self.list_expr(),
            TokenKind::Keyword(Keyword::If) => self.if_expr(),
            TokenKind::Keyword(Keyword::For) => self.for_expr(),
            TokenKind::Keyword(Keyword::While) => self.while_expr(),
            TokenKind::Keyword(Keyword::Func) => self.func_def(),
            _ => Err(ParseError::expected(token.span, ATOM_START)),
        }
    }

    /// `'[' (expr (',' expr)*)? ']'`
    fn list_expr(&mut self) -> Result<Node, ParseError> {
        let open = self.advance().span;
        let mut elements = Vec::new();

        let close = if self.check(&TokenKind::RBracket) {
            self.advance().span
        } else {
            elements.push(self.with_fallback(LIST_ELEMENTS_START, Self::expr)?);
            while self.check(&TokenKind::Comma) {
                self.advance();
                elements.push(self.expr()?);
            }
            self.expect(&TokenKind::RBracket, "',' or ']'")?.span
        };

        Ok(Node::new(NodeKind::List(elements), open.merge(close)))
    }
}
