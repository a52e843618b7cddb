//! Function definitions.
//!
//! ```text
//! func_def : 'func' IDENT? '(' (IDENT (',' IDENT)*)? ')' ('->' expr | NEWLINE statements 'end')
//! ```

use basil_ir::{Keyword, Node, NodeKind, TokenKind};

use crate::{ParseError, Parser};

impl Parser<'_> {
    pub(super) fn func_def(&mut self) -> Result<Node, ParseError> {
        let start = self.advance().span;

        let name = if let TokenKind::Ident(name) = self.current_kind() {
            self.advance();
            self.expect(&TokenKind::LParen, "'('")?;
            Some(name.clone())
        } else {
            self.expect(&TokenKind::LParen, "identifier or '('")?;
            None
        };

        let params = self.params()?;

        if self.check(&TokenKind::Arrow) {
            self.advance();
            let body = self.expr()?;
            let span = start.merge(body.span);
            return Ok(Node::new(
                NodeKind::FuncDef {
                    name,
                    params,
                    body: Box::new(body),
                    is_expr_body: true,
                },
                span,
            ));
        }

        self.expect(&TokenKind::Newline, "'->' or newline")?;
        let body = self.statements()?;
        let end = self.expect_keyword(Keyword::End, "'end'")?.span;
        Ok(Node::new(
            NodeKind::FuncDef {
                name,
                params,
                body: Box::new(body),
                is_expr_body: false,
            },
            start.merge(end),
        ))
    }

    /// Parameter names up to and including the closing `)`.
    fn params(&mut self) -> Result<Vec<String>, ParseError> {
        let mut params = Vec::new();
        let TokenKind::Ident(first) = self.current_kind() else {
            self.expect(&TokenKind::RParen, "identifier or ')'")?;
            return Ok(params);
        };
        self.advance();
        params.push(first.clone());

        while self.check(&TokenKind::Comma) {
            self.advance();
            params.push(self.expect_ident("identifier")?);
        }
        self.expect(&TokenKind::RParen, "',' or ')'")?;
        Ok(params)
    }
}
