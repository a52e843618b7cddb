//! Basil IR - shared data for every stage of the interpreter
//!
//! - [`Span`] byte ranges and the [`SourceFile`] they index into
//! - [`Position`] line/column resolution for diagnostics
//! - [`Token`], [`TokenKind`] and [`TokenList`] produced by the lexer
//! - the [`ast`] consumed by the interpreter
//!
//! Nothing here performs lexing, parsing, or evaluation. The types are
//! plain data so that every crate above can depend on them without cycles.

/// Compile-time assertion that a type has a specific size.
///
/// Used to keep frequently copied types from silently growing.
#[macro_export]
macro_rules! static_assert_size {
    ($ty:ty, $size:expr) => {
        const _: [(); $size] = [(); ::std::mem::size_of::<$ty>()];
    };
}

pub mod ast;
mod source;
mod span;
mod token;

pub use ast::{BinaryOp, ElseCase, IfCase, Node, NodeKind, UnaryOp};
pub use source::{LineOffsetTable, Position, SourceFile};
pub use span::Span;
pub use token::{Keyword, Token, TokenKind, TokenList};
