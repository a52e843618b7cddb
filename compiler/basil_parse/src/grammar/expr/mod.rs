//! Expression parsing.
//!
//! Lowest to highest precedence:
//!
//! ```text
//! expr       : 'var' IDENTIFIER '=' expr | comp_expr (('and'|'or') comp_expr)*
//! comp_expr  : 'not' comp_expr | arith_expr ((==|!=|<|>|<=|>=) arith_expr)*
//! arith_expr : term ((+|-) term)*
//! term       : factor ((*|/) factor)*
//! factor     : (+|-) factor | power
//! power      : call ('^' factor)*
//! ```
//!
//! `^` takes a `factor` on its right, which makes it right-associative and
//! lets `2 ^ -1` parse.

mod control_flow;
mod function;
mod operators;
mod postfix;
mod primary;

use basil_ir::{BinaryOp, Keyword, Node, NodeKind, Span, TokenKind, UnaryOp};
use basil_stack::ensure_sufficient_stack;

use crate::error::{COMP_EXPR_START, EXPR_START};
use crate::{ParseError, Parser};

impl Parser<'_> {
    pub(crate) fn expr(&mut self) -> Result<Node, ParseError> {
        ensure_sufficient_stack(|| self.expr_inner())
    }

    fn expr_inner(&mut self) -> Result<Node, ParseError> {
        if self.check_keyword(Keyword::Var) {
            let start = self.advance().span;
            let name = self.expect_ident("identifier")?;
            self.expect(&TokenKind::Eq, "'='")?;
            let value = self.expr()?;
            let span = start.merge(value.span);
            return Ok(Node::new(
                NodeKind::VarAssign {
                    name,
                    value: Box::new(value),
                },
                span,
            ));
        }

        self.with_fallback(EXPR_START, |p| {
            p.binary_chain(Self::comp_expr, Self::match_logical_op)
        })
    }

    fn comp_expr(&mut self) -> Result<Node, ParseError> {
        if self.check_keyword(Keyword::Not) {
            let start = self.advance().span;
            let operand = ensure_sufficient_stack(|| self.comp_expr())?;
            return Ok(unary(UnaryOp::Not, start, operand));
        }

        self.with_fallback(COMP_EXPR_START, |p| {
            p.binary_chain(Self::arith_expr, Self::match_comparison_op)
        })
    }

    fn arith_expr(&mut self) -> Result<Node, ParseError> {
        self.binary_chain(Self::term, Self::match_additive_op)
    }

    fn term(&mut self) -> Result<Node, ParseError> {
        self.binary_chain(Self::factor, Self::match_multiplicative_op)
    }

    fn factor(&mut self) -> Result<Node, ParseError> {
        if let Some(op) = self.match_sign_op() {
            let start = self.advance().span;
            let operand = ensure_sufficient_stack(|| self.factor())?;
            return Ok(unary(op, start, operand));
        }
        self.power()
    }

    fn power(&mut self) -> Result<Node, ParseError> {
        let mut left = self.call()?;
        while self.check(&TokenKind::Caret) {
            self.advance();
            let right = self.factor()?;
            left = binary(left, BinaryOp::Pow, right);
        }
        Ok(left)
    }

    /// `operand (op operand)*`, folded left.
    fn binary_chain(
        &mut self,
        operand: fn(&mut Self) -> Result<Node, ParseError>,
        matcher: fn(&Self) -> Option<BinaryOp>,
    ) -> Result<Node, ParseError> {
        let mut left = operand(self)?;
        while let Some(op) = matcher(self) {
            self.advance();
            let right = operand(self)?;
            left = binary(left, op, right);
        }
        Ok(left)
    }

    /// Whether the current token can begin an expression.
    pub(crate) fn can_start_expr(&self) -> bool {
        match self.current_kind() {
            TokenKind::Int(_)
            | TokenKind::Float(_)
            | TokenKind::Str(_)
            | TokenKind::Ident(_)
            | TokenKind::Plus
            | TokenKind::Minus
            | TokenKind::LParen
            | TokenKind::LBracket => true,
            TokenKind::Keyword(kw) => matches!(
                kw,
                Keyword::Var
                    | Keyword::Not
                    | Keyword::If
                    | Keyword::For
                    | Keyword::While
                    | Keyword::Func
            ),
            _ => false,
        }
    }
}

fn binary(left: Node, op: BinaryOp, right: Node) -> Node {
    let span = left.span.merge(right.span);
    Node::new(
        NodeKind::BinaryOp {
            left: Box::new(left),
            op,
            right: Box::new(right),
        },
        span,
    )
}

fn unary(op: UnaryOp, op_span: Span, operand: Node) -> Node {
    let span = op_span.merge(operand.span);
    Node::new(
        NodeKind::UnaryOp {
            op,
            operand: Box::new(operand),
        },
        span,
    )
}
