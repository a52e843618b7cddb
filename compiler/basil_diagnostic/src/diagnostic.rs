use std::fmt;

use basil_ir::{SourceFile, Span};

use crate::excerpt::caret_excerpt;

/// Which stage failed, and the title printed before the message.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum DiagnosticKind {
    /// A character that starts no token.
    IllegalCharacter,
    /// A character sequence that needed a specific follow-up (`!` without `=`,
    /// a string without its closing quote, an unknown escape).
    ExpectedCharacter,
    InvalidSyntax,
    Runtime,
    /// A failure of the interpreter itself rather than of the program.
    Internal,
}

impl DiagnosticKind {
    pub fn title(self) -> &'static str {
        match self {
            DiagnosticKind::IllegalCharacter => "Illegal Character",
            DiagnosticKind::ExpectedCharacter => "Expected Character",
            DiagnosticKind::InvalidSyntax => "Invalid Syntax",
            DiagnosticKind::Runtime => "Runtime Error",
            DiagnosticKind::Internal => "Internal Error",
        }
    }
}

impl fmt::Display for DiagnosticKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

/// One line of a runtime traceback.
///
/// `span` is where execution was inside `context_name`: the failing node for
/// the innermost frame, the call expression for every outer one.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TraceFrame {
    pub context_name: String,
    pub span: Span,
}

impl TraceFrame {
    pub fn new(context_name: impl Into<String>, span: Span) -> Self {
        TraceFrame {
            context_name: context_name.into(),
            span,
        }
    }
}

/// A positioned, renderable failure.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Diagnostic {
    pub kind: DiagnosticKind,
    pub message: String,
    pub span: Span,
    pub source: SourceFile,
    /// Outermost frame first. Empty for anything but runtime errors.
    pub traceback: Vec<TraceFrame>,
}

impl Diagnostic {
    #[cold]
    pub fn new(
        kind: DiagnosticKind,
        message: impl Into<String>,
        span: Span,
        source: &SourceFile,
    ) -> Self {
        Diagnostic {
            kind,
            message: message.into(),
            span,
            source: source.clone(),
            traceback: Vec::new(),
        }
    }

    #[cold]
    pub fn runtime(message: impl Into<String>, span: Span, source: &SourceFile) -> Self {
        Self::new(DiagnosticKind::Runtime, message, span, source)
    }

    #[cold]
    pub fn syntax(message: impl Into<String>, span: Span, source: &SourceFile) -> Self {
        Self::new(DiagnosticKind::InvalidSyntax, message, span, source)
    }

    #[cold]
    pub fn internal(message: impl Into<String>, source: &SourceFile) -> Self {
        Self::new(
            DiagnosticKind::Internal,
            message,
            Span::point(source.end_offset()),
            source,
        )
    }

    #[must_use]
    pub fn with_traceback(mut self, frames: Vec<TraceFrame>) -> Self {
        self.traceback = frames;
        self
    }

    /// `Runtime Error: Division by zero`
    pub fn header(&self) -> String {
        format!("{}: {}", self.kind.title(), self.message)
    }

    /// 1-based line of the start of the primary span.
    pub fn line_number(&self) -> u32 {
        self.source.position(self.span.start).line + 1
    }

    /// ` File <stdin>, line 1, in <program>` per frame, outermost first.
    pub fn traceback_lines(&self) -> Vec<String> {
        self.traceback
            .iter()
            .map(|frame| {
                let line = self.source.position(frame.span.start).line + 1;
                format!(
                    " File {}, line {line}, in {}",
                    self.source.name(),
                    frame.context_name
                )
            })
            .collect()
    }

    /// Plain-text rendering.
    ///
    /// Runtime errors lead with the traceback; everything else leads with
    /// the header and the file/line location.
    pub fn render(&self) -> String {
        let mut out = String::new();
        if self.kind == DiagnosticKind::Runtime {
            out.push_str("Traceback (most recent call last):\n");
            for line in self.traceback_lines() {
                out.push_str(&line);
                out.push('\n');
            }
            out.push_str(&self.header());
        } else {
            out.push_str(&self.header());
            out.push('\n');
            out.push_str(&format!(
                "File {}, line {}",
                self.source.name(),
                self.line_number()
            ));
        }
        out.push_str("\n\n");
        out.push_str(&caret_excerpt(&self.source, self.span));
        out
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

impl std::error::Error for Diagnostic {}

#[cfg(test)]
mod tests;
