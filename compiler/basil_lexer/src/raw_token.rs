//! Raw Token Definition
//!
//! The logos-derived scanner output, before literal payloads are cooked
//! into [`TokenKind`](basil_ir::TokenKind)s.

use logos::Logos;

#[derive(Logos, Debug, Clone, Copy, PartialEq)]
#[logos(skip r"[ \t\r]+")] // Skip horizontal whitespace
pub(crate) enum RawToken {
    #[token("\n")]
    #[token(";")]
    Newline,

    #[regex(r"[0-9]+")]
    Int,
    // At most one decimal point: `1.2.3` is `1.2` followed by a stray `.`
    #[regex(r"[0-9]+\.[0-9]*")]
    Float,

    #[regex(r"[A-Za-z_][A-Za-z0-9_]*")]
    Word,

    #[regex(r#""([^"\\]|\\(.|\n))*""#)]
    Str,
    // Opening quote with no closing one before end of input
    #[regex(r#""([^"\\]|\\(.|\n))*\\?"#)]
    UnterminatedStr,

    #[token("+")]
    Plus,
    #[token("-")]
    Minus,
    #[token("->")]
    Arrow,
    #[token("*")]
    Star,
    #[token("/")]
    Slash,
    #[token("^")]
    Caret,
    #[token("=")]
    Eq,
    #[token("==")]
    EqEq,
    #[token("!=")]
    NotEq,
    /// `!` not followed by `=`
    #[token("!")]
    Bang,
    #[token("<")]
    Lt,
    #[token("<=")]
    LtEq,
    #[token(">")]
    Gt,
    #[token(">=")]
    GtEq,
    #[token(",")]
    Comma,
    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[token("[")]
    LBracket,
    #[token("]")]
    RBracket,
}
