//! `InterpreterBuilder` for configuring an [`Interpreter`].

use super::{Interpreter, DEFAULT_MAX_CALL_DEPTH};
use crate::diagnostics::CallStack;
use crate::{global_environment, stdio_handler, Environment, SharedIoHandler};

/// Builder for [`Interpreter`].
///
/// ```text
/// let interpreter = InterpreterBuilder::new()
///     .globals(session_env)
///     .io_handler(buffer_handler())
///     .build();
/// ```
pub struct InterpreterBuilder {
    globals: Option<Environment>,
    io: Option<SharedIoHandler>,
    max_call_depth: Option<usize>,
}

impl InterpreterBuilder {
    pub fn new() -> Self {
        InterpreterBuilder {
            globals: None,
            io: None,
            max_call_depth: Some(DEFAULT_MAX_CALL_DEPTH),
        }
    }

    /// Evaluate in `globals` instead of a fresh [`global_environment`].
    #[must_use]
    pub fn globals(mut self, globals: Environment) -> Self {
        self.globals = Some(globals);
        self
    }

    /// Route `print`, `input` and `clear`. Defaults to the console.
    #[must_use]
    pub fn io_handler(mut self, io: SharedIoHandler) -> Self {
        self.io = Some(io);
        self
    }

    /// `None` removes the limit.
    #[must_use]
    pub fn max_call_depth(mut self, max_depth: Option<usize>) -> Self {
        self.max_call_depth = max_depth;
        self
    }

    pub fn build(self) -> Interpreter {
        let globals = self.globals.unwrap_or_else(global_environment);
        Interpreter {
            env: globals.clone(),
            globals,
            call_stack: CallStack::new(self.max_call_depth),
            io: self.io.unwrap_or_else(stdio_handler),
        }
    }
}

impl Default for InterpreterBuilder {
    fn default() -> Self {
        Self::new()
    }
}
