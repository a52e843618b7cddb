use basil_diagnostic::Diagnostic;
use basil_ir::SourceFile;
use basil_parse::ParseError;

use super::IntoDiagnostic;

impl IntoDiagnostic for ParseError {
    #[cold]
    fn into_diagnostic(&self, source: &SourceFile) -> Diagnostic {
        Diagnostic::syntax(self.message.as_str(), self.span, source)
    }
}
