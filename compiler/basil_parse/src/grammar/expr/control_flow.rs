//! `if`, `for` and `while`.
//!
//! ```text
//! if_expr    : 'if' expr 'then' (statement if_tail? | NEWLINE statements ('end'|elif|else))
//! for_expr   : 'for' IDENT '=' expr 'to' expr ('step' expr)? 'then' body
//! while_expr : 'while' expr 'then' body
//! body       : statement | NEWLINE statements 'end'
//! ```
//!
//! A body written on the same line is a single statement whose value the
//! construct produces. A body starting on the next line is a block closed by
//! `end` (or, for `if`, by the next `elif` / `else`).

use basil_ir::{ElseCase, IfCase, Keyword, Node, NodeKind, Span, TokenKind};

use crate::{ParseError, Parser};

/// A parsed body, whether it was a block, and where it ended.
struct Body {
    node: Node,
    is_block: bool,
    end: Span,
}

impl Parser<'_> {
    pub(super) fn if_expr(&mut self) -> Result<Node, ParseError> {
        let start = self.advance().span;
        let mut cases = Vec::new();
        let (else_case, end) = self.if_cases(&mut cases)?;
        Ok(Node::new(
            NodeKind::If { cases, else_case },
            start.merge(end),
        ))
    }

    /// One `if`/`elif` arm, its keyword already consumed, and everything
    /// after it.
    fn if_cases(
        &mut self,
        cases: &mut Vec<IfCase>,
    ) -> Result<(Option<ElseCase>, Span), ParseError> {
        let condition = self.expr()?;
        self.expect_keyword(Keyword::Then, "'then'")?;

        if self.check(&TokenKind::Newline) {
            self.advance();
            let body = self.statements()?;
            cases.push(IfCase {
                condition,
                body,
                is_block: true,
            });

            if self.check_keyword(Keyword::End) {
                let end = self.advance().span;
                return Ok((None, end));
            }
            if self.check_keyword(Keyword::Elif) {
                self.advance();
                return self.if_cases(cases);
            }
            if self.check_keyword(Keyword::Else) {
                return self.else_case();
            }
            return Err(ParseError::expected(
                self.current_span(),
                "'end', 'elif' or 'else'",
            ));
        }

        let body = self.statement()?;
        let end = body.span;
        cases.push(IfCase {
            condition,
            body,
            is_block: false,
        });

        if self.check_keyword(Keyword::Elif) {
            self.advance();
            return self.if_cases(cases);
        }
        if self.check_keyword(Keyword::Else) {
            return self.else_case();
        }
        Ok((None, end))
    }

    fn else_case(&mut self) -> Result<(Option<ElseCase>, Span), ParseError> {
        self.advance();
        let body = if self.check(&TokenKind::Newline) {
            self.advance();
            let node = self.statements()?;
            let end = self.expect_keyword(Keyword::End, "'end'")?.span;
            Body {
                node,
                is_block: true,
                end,
            }
        } else {
            let node = self.statement()?;
            let end = node.span;
            Body {
                node,
                is_block: false,
                end,
            }
        };
        Ok((
            Some(ElseCase {
                body: Box::new(body.node),
                is_block: body.is_block,
            }),
            body.end,
        ))
    }

    pub(super) fn for_expr(&mut self) -> Result<Node, ParseError> {
        let start = self.advance().span;
        let var_name = self.expect_ident("identifier")?;
        self.expect(&TokenKind::Eq, "'='")?;
        let start_value = self.expr()?;
        self.expect_keyword(Keyword::To, "'to'")?;
        let end_value = self.expr()?;
        let step = if self.check_keyword(Keyword::Step) {
            self.advance();
            Some(Box::new(self.expr()?))
        } else {
            None
        };
        self.expect_keyword(Keyword::Then, "'then'")?;
        let body = self.loop_body()?;

        Ok(Node::new(
            NodeKind::For {
                var_name,
                start: Box::new(start_value),
                end: Box::new(end_value),
                step,
                body: Box::new(body.node),
                is_block: body.is_block,
            },
            start.merge(body.end),
        ))
    }

    pub(super) fn while_expr(&mut self) -> Result<Node, ParseError> {
        let start = self.advance().span;
        let condition = self.expr()?;
        self.expect_keyword(Keyword::Then, "'then'")?;
        let body = self.loop_body()?;

        Ok(Node::new(
            NodeKind::While {
                condition: Box::new(condition),
                body: Box::new(body.node),
                is_block: body.is_block,
            },
            start.merge(body.end),
        ))
    }

    fn loop_body(&mut self) -> Result<Body, ParseError> {
        if self.check(&TokenKind::Newline) {
            self.advance();
            let node = self.statements()?;
            let end = self.expect_keyword(Keyword::End, "'end'")?.span;
            return Ok(Body {
                node,
                is_block: true,
                end,
            });
        }
        let node = self.statement()?;
        let end = node.span;
        Ok(Body {
            node,
            is_block: false,
            end,
        })
    }
}
