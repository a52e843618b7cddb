//! Basil driver.
//!
//! [`run`] is the whole pipeline in one call: lex, parse and evaluate a
//! source text against a fresh global environment. [`Session`] does the
//! same against an environment that persists between calls, which is what
//! the REPL uses. The `basil` binary wraps both.
//!
//! Nothing here prints. Callers get values and [`Diagnostic`]s back and
//! decide how to show them.

mod error;
mod problem;
mod session;
mod tracing_setup;

pub use basil_diagnostic::Diagnostic;
pub use basil_eval::Value;
pub use error::DriverError;
pub use problem::IntoDiagnostic;
pub use session::{lex, parse, RunOutcome, Session};
pub use tracing_setup::{init_tracing, TraceFormat};

/// Run `text` as a complete program named `source_name`.
///
/// Returns the value of the last statement, or the diagnostic that stopped
/// the run. Output from `print` goes to the console.
pub fn run(source_name: &str, text: &str) -> RunOutcome {
    Session::new().run(source_name, text)
}
