//! Operator matching helpers.
//!
//! Each returns the operator at the current token for one precedence level,
//! without consuming it.

use basil_ir::{BinaryOp, Keyword, TokenKind, UnaryOp};

use crate::Parser;

impl Parser<'_> {
    pub(super) fn match_logical_op(&self) -> Option<BinaryOp> {
        match self.current_kind() {
            TokenKind::Keyword(Keyword::And) => Some(BinaryOp::And),
            TokenKind::Keyword(Keyword::Or) => Some(BinaryOp::Or),
            _ => None,
        }
    }

    pub(super) fn match_comparison_op(&self) -> Option<BinaryOp> {
        match self.current_kind() {
            TokenKind::EqEq => Some(BinaryOp::Eq),
            TokenKind::NotEq => Some(BinaryOp::NotEq),
            TokenKind::Lt => Some(BinaryOp::Lt),
            TokenKind::Gt => Some(BinaryOp::Gt),
            TokenKind::LtEq => Some(BinaryOp::LtEq),
            TokenKind::GtEq => Some(BinaryOp::GtEq),
            _ => None,
        }
    }

    pub(super) fn match_additive_op(&self) -> Option<BinaryOp> {
        match self.current_kind() {
            TokenKind::Plus => Some(BinaryOp::Add),
            TokenKind::Minus => Some(BinaryOp::Sub),
            _ => None,
        }
    }

    pub(super) fn match_multiplicative_op(&self) -> Option<BinaryOp> {
        match self.current_kind() {
            TokenKind::Star => Some(BinaryOp::Mul),
            TokenKind::Slash => Some(BinaryOp::Div),
            _ => None,
        }
    }

    /// Prefix `+` / `-`.
    pub(super) fn match_sign_op(&self) -> Option<UnaryOp> {
        match self.current_kind() {
            TokenKind::Plus => Some(UnaryOp::Pos),
            TokenKind::Minus => Some(UnaryOp::Neg),
            _ => None,
        }
    }
}
