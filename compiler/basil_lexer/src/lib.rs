//! Lexer for Basil using logos.
//!
//! [`tokenize`] makes one left-to-right pass over the source. Logos does the
//! scanning (longest match, so `==` beats `=` and `->` beats `-`); this
//! crate then cooks each raw token into a [`TokenKind`] carrying its literal
//! payload, resolving keywords and string escapes along the way.
//!
//! `;` and line breaks both become [`TokenKind::Newline`]. Consecutive
//! newlines are kept; the parser decides what they separate. The first
//! error ends lexing.

mod cook_escape;
pub mod lex_error;
mod raw_token;

use basil_ir::{Keyword, SourceFile, Span, Token, TokenKind, TokenList};
use logos::Logos;
use tracing::trace;

pub use lex_error::{LexError, LexErrorKind};
use raw_token::RawToken;

/// Lex `source` into tokens ending in exactly one `Eof`.
#[tracing::instrument(level = "debug", skip_all, fields(source = source.name()))]
pub fn tokenize(source: &SourceFile) -> Result<TokenList, LexError> {
    let text = source.text();
    let mut tokens = TokenList::new();
    let mut lexer = RawToken::lexer(text);

    while let Some(result) = lexer.next() {
        let range = lexer.span();
        let span = to_span(&range);
        let Ok(raw) = result else {
            return Err(illegal_character_at(text, range.start));
        };
        let kind = cook(raw, lexer.slice(), span, text)?;
        trace!(?kind, %span, "token");
        tokens.push(Token::new(kind, span));
    }

    tokens.push(Token::new(TokenKind::Eof, Span::point(source.end_offset())));
    Ok(tokens)
}

/// Turn one raw token into its final kind.
fn cook(raw: RawToken, slice: &str, span: Span, text: &str) -> Result<TokenKind, LexError> {
    let kind = match raw {
        RawToken::Newline => TokenKind::Newline,
        RawToken::Int => match slice.parse::<u64>() {
            Ok(n) => TokenKind::Int(n),
            // Wider than u64: keep the magnitude as a double.
            Err(_) => TokenKind::float(slice.parse::<f64>().unwrap_or(f64::INFINITY)),
        },
        RawToken::Float => TokenKind::float(slice.parse::<f64>().unwrap_or(f64::NAN)),
        RawToken::Word => match Keyword::lookup(slice) {
            Some(kw) => TokenKind::Keyword(kw),
            None => TokenKind::Ident(slice.to_owned()),
        },
        RawToken::Str => {
            let content = &slice[1..slice.len() - 1];
            TokenKind::Str(cook_escape::unescape_string(content, span.start + 1)?)
        }
        RawToken::UnterminatedStr => return Err(LexError::unterminated_string(span)),
        RawToken::Bang => {
            // Cover the character that should have been `=`.
            let next = text[span.end as usize..]
                .chars()
                .next()
                .map_or(0, char::len_utf8);
            let end = span.end + u32::try_from(next).unwrap_or(0);
            return Err(LexError::expected_equals_after_bang(Span::new(
                span.start, end,
            )));
        }
        RawToken::Plus => TokenKind::Plus,
        RawToken::Minus => TokenKind::Minus,
        RawToken::Arrow => TokenKind::Arrow,
        RawToken::Star => TokenKind::Star,
        RawToken::Slash => TokenKind::Slash,
        RawToken::Caret => TokenKind::Caret,
        RawToken::Eq => TokenKind::Eq,
        RawToken::EqEq => TokenKind::EqEq,
        RawToken::NotEq => TokenKind::NotEq,
        RawToken::Lt => TokenKind::Lt,
        RawToken::LtEq => TokenKind::LtEq,
        RawToken::Gt => TokenKind::Gt,
        RawToken::GtEq => TokenKind::GtEq,
        RawToken::Comma => TokenKind::Comma,
        RawToken::LParen => TokenKind::LParen,
        RawToken::RParen => TokenKind::RParen,
        RawToken::LBracket => TokenKind::LBracket,
        RawToken::RBracket => TokenKind::RBracket,
    };
    Ok(kind)
}

/// Error for the single character at `offset` that starts no token.
fn illegal_character_at(text: &str, offset: usize) -> LexError {
    let ch = text[offset..].chars().next().unwrap_or('\u{FFFD}');
    LexError::illegal_character(to_span(&(offset..offset + ch.len_utf8())), ch)
}

#[allow(
    clippy::cast_possible_truncation,
    reason = "source files are bounded by u32::MAX bytes"
)]
fn to_span(range: &std::ops::Range<usize>) -> Span {
    Span::new(range.start as u32, range.end as u32)
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests;
