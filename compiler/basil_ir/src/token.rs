//! Token types produced by the lexer.
//!
//! Literal payloads live inside [`TokenKind`] so the parser never has to
//! look back into the source text. Float literals are stored as bits to
//! keep `Eq`/`Hash` derivable.

use std::fmt;

use crate::Span;

/// A token with its span in the source.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
}

impl Token {
    #[inline]
    pub fn new(kind: TokenKind, span: Span) -> Self {
        Token { kind, span }
    }
}

impl fmt::Debug for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} @ {}", self.kind, self.span)
    }
}

/// Reserved words.
///
/// An identifier run becomes a keyword only when the whole run matches,
/// so `variable` and `end_x` stay identifiers.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Keyword {
    Var,
    And,
    Or,
    Not,
    If,
    Then,
    Elif,
    Else,
    For,
    To,
    Step,
    While,
    Func,
    End,
    Return,
    Continue,
    Break,
}

impl Keyword {
    /// Exact-match keyword lookup.
    pub fn lookup(word: &str) -> Option<Keyword> {
        let kw = match word {
            "var" => Keyword::Var,
            "and" => Keyword::And,
            "or" => Keyword::Or,
            "not" => Keyword::Not,
            "if" => Keyword::If,
            "then" => Keyword::Then,
            "elif" => Keyword::Elif,
            "else" => Keyword::Else,
            "for" => Keyword::For,
            "to" => Keyword::To,
            "step" => Keyword::Step,
            "while" => Keyword::While,
            "func" => Keyword::Func,
            "end" => Keyword::End,
            "return" => Keyword::Return,
            "continue" => Keyword::Continue,
            "break" => Keyword::Break,
            _ => return None,
        };
        Some(kw)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Keyword::Var => "var",
            Keyword::And => "and",
            Keyword::Or => "or",
            Keyword::Not => "not",
            Keyword::If => "if",
            Keyword::Then => "then",
            Keyword::Elif => "elif",
            Keyword::Else => "else",
            Keyword::For => "for",
            Keyword::To => "to",
            Keyword::Step => "step",
            Keyword::While => "while",
            Keyword::Func => "func",
            Keyword::End => "end",
            Keyword::Return => "return",
            Keyword::Continue => "continue",
            Keyword::Break => "break",
        }
    }
}

/// Token kinds.
#[derive(Clone, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// Integer literal: `42`
    Int(u64),
    /// Float literal: `3.5`, `1.` (stored as bits)
    Float(u64),
    /// String literal with escapes already resolved.
    Str(String),
    Ident(String),
    Keyword(Keyword),

    Plus,
    Minus,
    Star,
    Slash,
    Caret,
    /// `=`
    Eq,
    /// `==`
    EqEq,
    /// `!=`
    NotEq,
    Lt,
    Gt,
    LtEq,
    GtEq,
    /// `->`
    Arrow,
    Comma,
    LParen,
    RParen,
    LBracket,
    RBracket,
    /// `;` or a line break.
    Newline,

    Eof,
}

impl TokenKind {
    pub fn float(value: f64) -> TokenKind {
        TokenKind::Float(value.to_bits())
    }

    /// Numeric value of an `Int` or `Float` literal.
    #[allow(
        clippy::cast_precision_loss,
        reason = "all numbers are doubles at runtime"
    )]
    pub fn number_value(&self) -> Option<f64> {
        match self {
            TokenKind::Int(n) => Some(*n as f64),
            TokenKind::Float(bits) => Some(f64::from_bits(*bits)),
            _ => None,
        }
    }

    #[inline]
    pub fn is_keyword(&self, kw: Keyword) -> bool {
        matches!(self, TokenKind::Keyword(k) if *k == kw)
    }

    /// Name used in "Expected ..." messages.
    pub fn display_name(&self) -> &'static str {
        match self {
            TokenKind::Int(_) => "int",
            TokenKind::Float(_) => "float",
            TokenKind::Str(_) => "string",
            TokenKind::Ident(_) => "identifier",
            TokenKind::Keyword(kw) => kw.as_str(),
            TokenKind::Plus => "'+'",
            TokenKind::Minus => "'-'",
            TokenKind::Star => "'*'",
            TokenKind::Slash => "'/'",
            TokenKind::Caret => "'^'",
            TokenKind::Eq => "'='",
            TokenKind::EqEq => "'=='",
            TokenKind::NotEq => "'!='",
            TokenKind::Lt => "'<'",
            TokenKind::Gt => "'>'",
            TokenKind::LtEq => "'<='",
            TokenKind::GtEq => "'>='",
            TokenKind::Arrow => "'->'",
            TokenKind::Comma => "','",
            TokenKind::LParen => "'('",
            TokenKind::RParen => "')'",
            TokenKind::LBracket => "'['",
            TokenKind::RBracket => "']'",
            TokenKind::Newline => "newline",
            TokenKind::Eof => "end of input",
        }
    }
}

impl fmt::Debug for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenKind::Int(n) => write!(f, "INT:{n}"),
            TokenKind::Float(bits) => write!(f, "FLOAT:{:?}", f64::from_bits(*bits)),
            TokenKind::Str(s) => write!(f, "STRING:{s:?}"),
            TokenKind::Ident(name) => write!(f, "IDENTIFIER:{name}"),
            TokenKind::Keyword(kw) => write!(f, "KEYWORD:{}", kw.as_str()),
            TokenKind::Plus => write!(f, "PLUS"),
            TokenKind::Minus => write!(f, "MINUS"),
            TokenKind::Star => write!(f, "MUL"),
            TokenKind::Slash => write!(f, "DIV"),
            TokenKind::Caret => write!(f, "POW"),
            TokenKind::Eq => write!(f, "EQ"),
            TokenKind::EqEq => write!(f, "EE"),
            TokenKind::NotEq => write!(f, "NE"),
            TokenKind::Lt => write!(f, "LT"),
            TokenKind::Gt => write!(f, "GT"),
            TokenKind::LtEq => write!(f, "LTE"),
            TokenKind::GtEq => write!(f, "GTE"),
            TokenKind::Arrow => write!(f, "ARROW"),
            TokenKind::Comma => write!(f, "COMMA"),
            TokenKind::LParen => write!(f, "LPAREN"),
            TokenKind::RParen => write!(f, "RPAREN"),
            TokenKind::LBracket => write!(f, "LSQUARE"),
            TokenKind::RBracket => write!(f, "RSQUARE"),
            TokenKind::Newline => write!(f, "NEWLINE"),
            TokenKind::Eof => write!(f, "EOF"),
        }
    }
}

/// Lexer output: tokens in source order, terminated by exactly one `Eof`.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct TokenList {
    tokens: Vec<Token>,
}

impl TokenList {
    #[inline]
    pub fn new() -> Self {
        TokenList { tokens: Vec::new() }
    }

    #[inline]
    pub fn push(&mut self, token: Token) {
        self.tokens.push(token);
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<&Token> {
        self.tokens.get(index)
    }

    #[inline]
    pub fn as_slice(&self) -> &[Token] {
        &self.tokens
    }

    pub fn iter(&self) -> impl Iterator<Item = &Token> {
        self.tokens.iter()
    }

    /// Kinds only, for assertions and `--tokens` output.
    pub fn kinds(&self) -> Vec<TokenKind> {
        self.tokens.iter().map(|t| t.kind.clone()).collect()
    }
}

impl fmt::Debug for TokenList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.tokens.iter().map(|t| &t.kind)).finish()
    }
}

impl<'a> IntoIterator for &'a TokenList {
    type Item = &'a Token;
    type IntoIter = std::slice::Iter<'a, Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.iter()
    }
}

#[cfg(test)]
mod tests;
