//! Diagnostic reporting for the Basil pipeline.
//!
//! Every stage reports failures as values. The lexer, parser and evaluator
//! each have their own typed error; all of them convert into one
//! [`Diagnostic`], which knows how to render itself:
//!
//! ```text
//! Traceback (most recent call last):
//!  File <stdin>, line 1, in <program>
//!  File <stdin>, line 1, in half
//! Runtime Error: Division by zero
//!
//! func half(x) -> x / 0
//!                     ^
//! ```
//!
//! Plain text comes from [`Diagnostic::render`]; the
//! [`emitter::TerminalEmitter`] adds ANSI colors.

mod diagnostic;
pub mod emitter;
mod excerpt;

pub use diagnostic::{Diagnostic, DiagnosticKind, TraceFrame};
pub use excerpt::caret_excerpt;
