use basil_diagnostic::{Diagnostic, DiagnosticKind};
use basil_ir::SourceFile;
use basil_lexer::LexError;

use super::IntoDiagnostic;

impl IntoDiagnostic for LexError {
    #[cold]
    fn into_diagnostic(&self, source: &SourceFile) -> Diagnostic {
        let kind = if self.is_illegal_character() {
            DiagnosticKind::IllegalCharacter
        } else {
            DiagnosticKind::ExpectedCharacter
        };
        Diagnostic::new(kind, self.to_string(), self.span, source)
    }
}
