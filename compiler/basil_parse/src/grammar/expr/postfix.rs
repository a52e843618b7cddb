//! Call suffix: `call : atom ('(' (expr (',' expr)*)? ')')?`

use basil_ir::{Node, NodeKind, TokenKind};

use crate::error::CALL_ARGS_START;
use crate::{ParseError, Parser};

impl Parser<'_> {
    pub(super) fn call(&mut self) -> Result<Node, ParseError> {
        let callee = self.atom()?;
        if !self.check(&TokenKind::LParen) {
            return Ok(callee);
        }
        self.advance();

        let mut args = Vec::new();
        let close = if self.check(&TokenKind::RParen) {
            self.advance().span
        } else {
            args.push(self.with_fallback(CALL_ARGS_START, Self::expr)?);
            while self.check(&TokenKind::Comma) {
                self.advance();
                args.push(self.expr()?);
            }
            self.expect(&TokenKind::RParen, "',' or ')'")?.span
        };

        let span = callee.span.merge(close);
        Ok(Node::new(
            NodeKind::Call {
                callee: Box::new(callee),
                args,
            },
            span,
        ))
    }
}
