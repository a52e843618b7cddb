use basil_diagnostic::{Diagnostic, DiagnosticKind, TraceFrame};
use basil_eval::EvalError;
use basil_ir::SourceFile;

use super::IntoDiagnostic;

impl IntoDiagnostic for EvalError {
    /// Runtime errors carry their traceback. Internal errors (the call
    /// depth limit) are reported at the failing call without one.
    #[cold]
    fn into_diagnostic(&self, source: &SourceFile) -> Diagnostic {
        if self.is_internal() {
            return Diagnostic::new(
                DiagnosticKind::Internal,
                self.message.as_str(),
                self.span,
                source,
            );
        }
        let frames = self
            .backtrace
            .frames()
            .iter()
            .map(|frame| TraceFrame::new(frame.context_name.as_str(), frame.span))
            .collect();
        Diagnostic::runtime(self.message.as_str(), self.span, source).with_traceback(frames)
    }
}
