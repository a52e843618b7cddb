//! Tree-walking interpreter for Basil.
//!
//! # Architecture
//!
//! - [`Value`]: closed enum of runtime values; operators match on operand
//!   pairs
//! - [`Environment`]: `Rc` chain of scopes, captured by closures
//! - [`Interpreter`]: evaluates a parsed [`Node`](basil_ir::Node) tree,
//!   threading `break`/`continue`/`return` and errors through
//!   [`ControlAction`]
//! - [`CallStack`]: live call frames, snapshotted into an
//!   [`EvalBacktrace`] when an error is raised
//! - [`BuiltinKind`]: the built-in functions bound in every
//!   [`global_environment`]
//! - [`IoHandlerImpl`]: where `print`, `input` and `clear` go

mod builtins;
mod diagnostics;
mod environment;
mod errors;
pub mod interpreter;
mod io_handler;
mod value;

pub use builtins::{global_environment, BuiltinKind};
pub use diagnostics::{CallFrame, CallStack, PROGRAM_CONTEXT};
pub use environment::{Environment, LocalScope, Scope};
pub use errors::{
    BacktraceFrame, ControlAction, EvalBacktrace, EvalError, EvalErrorKind, EvalResult,
};
pub use interpreter::{Interpreter, InterpreterBuilder, DEFAULT_MAX_CALL_DEPTH};
pub use io_handler::{
    buffer_handler, scripted_handler, stdio_handler, BufferHandler, IoHandlerImpl,
    SharedIoHandler, StdioHandler,
};
pub use value::{FunctionValue, Value, MAX_STRING_LEN};

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests;
