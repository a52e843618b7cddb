//! Lexer error types.
//!
//! The lexer stops at the first error. The driver turns the error into a
//! positioned diagnostic; the lexer itself only records where and what.

use std::fmt;

use basil_ir::Span;

#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct LexError {
    pub span: Span,
    pub kind: LexErrorKind,
}

#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub enum LexErrorKind {
    /// A character that starts no token.
    IllegalCharacter(char),
    /// `!` without the `=` that must follow it.
    ExpectedEqualsAfterBang,
    /// Missing closing `"`.
    UnterminatedString,
    /// Escape other than `\n`, `\t`, `\"`, `\\`.
    InvalidEscape(char),
}

impl LexError {
    #[cold]
    pub fn illegal_character(span: Span, ch: char) -> Self {
        LexError {
            span,
            kind: LexErrorKind::IllegalCharacter(ch),
        }
    }

    #[cold]
    pub fn expected_equals_after_bang(span: Span) -> Self {
        LexError {
            span,
            kind: LexErrorKind::ExpectedEqualsAfterBang,
        }
    }

    #[cold]
    pub fn unterminated_string(span: Span) -> Self {
        LexError {
            span,
            kind: LexErrorKind::UnterminatedString,
        }
    }

    #[cold]
    pub fn invalid_escape(span: Span, ch: char) -> Self {
        LexError {
            span,
            kind: LexErrorKind::InvalidEscape(ch),
        }
    }

    /// Whether the error is about a character that can never start a token,
    /// as opposed to a sequence that needed a particular continuation.
    pub fn is_illegal_character(&self) -> bool {
        matches!(
            self.kind,
            LexErrorKind::IllegalCharacter(_) | LexErrorKind::InvalidEscape(_)
        )
    }
}

/// The detail text that follows the diagnostic title.
impl fmt::Display for LexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            LexErrorKind::IllegalCharacter(ch) => write!(f, "'{ch}'"),
            LexErrorKind::ExpectedEqualsAfterBang => write!(f, "'=' (after '!')"),
            LexErrorKind::UnterminatedString => write!(f, "'\"' (to close string)"),
            LexErrorKind::InvalidEscape(ch) => write!(f, "'\\{ch}' (unknown escape)"),
        }
    }
}

impl std::error::Error for LexError {}
