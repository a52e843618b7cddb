//! Stage errors to diagnostics.
//!
//! Each pipeline stage reports failure with its own typed error and knows
//! nothing about source files. This module pairs those errors with the
//! [`SourceFile`] they came from to build a renderable [`Diagnostic`].

mod eval;
mod lex;
mod parse;

use basil_diagnostic::Diagnostic;
use basil_ir::SourceFile;

/// Conversion of a stage error into a positioned diagnostic.
pub trait IntoDiagnostic {
    fn into_diagnostic(&self, source: &SourceFile) -> Diagnostic;
}
