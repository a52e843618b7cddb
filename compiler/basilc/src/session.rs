//! The pipeline: source text to value or diagnostic.

use basil_diagnostic::Diagnostic;
use basil_eval::{global_environment, stdio_handler, Environment, Interpreter, SharedIoHandler, Value};
use basil_ir::{Node, SourceFile, TokenList};
use tracing::debug;

use crate::problem::IntoDiagnostic;

/// What one run produced: the last statement's value, or the diagnostic
/// that stopped it. Exactly one of the two is set, except that a program
/// ending in a top-level `break`, `continue` or `return` has neither.
pub type RunOutcome = (Option<Value>, Option<Diagnostic>);

/// Lex `source`.
pub fn lex(source: &SourceFile) -> Result<TokenList, Diagnostic> {
    debug!(source = source.name(), "lex");
    basil_lexer::tokenize(source).map_err(|err| err.into_diagnostic(source))
}

/// Lex and parse `source`.
pub fn parse(source: &SourceFile) -> Result<Node, Diagnostic> {
    let tokens = lex(source)?;
    debug!(tokens = tokens.len(), "parse");
    basil_parse::parse(&tokens).map_err(|err| err.into_diagnostic(source))
}

/// A global environment and I/O handler shared by successive runs.
///
/// The REPL keeps one session so `var x = 1` on one line is visible on the
/// next. Functions defined in one run stay callable in later ones.
pub struct Session {
    globals: Environment,
    io: SharedIoHandler,
    max_call_depth: Option<usize>,
}

impl Session {
    /// A session on the console.
    pub fn new() -> Self {
        Self::with_io(stdio_handler())
    }

    pub fn with_io(io: SharedIoHandler) -> Self {
        Session {
            globals: global_environment(),
            io,
            max_call_depth: Some(basil_eval::DEFAULT_MAX_CALL_DEPTH),
        }
    }

    /// `None` removes the call depth limit.
    #[must_use]
    pub fn with_max_call_depth(mut self, max_depth: Option<usize>) -> Self {
        self.max_call_depth = max_depth;
        self
    }

    pub fn globals(&self) -> &Environment {
        &self.globals
    }

    pub fn io(&self) -> &SharedIoHandler {
        &self.io
    }

    /// Run `text` against this session's globals.
    pub fn run(&mut self, source_name: &str, text: &str) -> RunOutcome {
        let source = SourceFile::new(source_name, text);
        let program = match parse(&source) {
            Ok(program) => program,
            Err(diagnostic) => return (None, Some(diagnostic)),
        };

        debug!("eval");
        let mut interpreter = Interpreter::builder()
            .globals(self.globals.clone())
            .io_handler(self.io.clone())
            .max_call_depth(self.max_call_depth)
            .build();
        match interpreter.run(&program) {
            Ok(value) => (value, None),
            Err(err) => (None, Some(err.into_diagnostic(&source))),
        }
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}
