//! RAII guard for entering a call.
//!
//! [`Interpreter::enter_call`] pushes a call frame and switches to the
//! callee's environment. Dropping the returned [`ScopedCall`] pops the
//! frame and switches back, on every exit path including `?`.

use std::mem;
use std::ops::{Deref, DerefMut};

use super::Interpreter;
use crate::diagnostics::CallFrame;
use crate::{Environment, EvalError};

pub(super) struct ScopedCall<'guard> {
    interpreter: &'guard mut Interpreter,
    saved_env: Environment,
}

impl Drop for ScopedCall<'_> {
    fn drop(&mut self) {
        mem::swap(&mut self.interpreter.env, &mut self.saved_env);
        self.interpreter.call_stack.pop();
    }
}

impl Deref for ScopedCall<'_> {
    type Target = Interpreter;

    fn deref(&self) -> &Self::Target {
        self.interpreter
    }
}

impl DerefMut for ScopedCall<'_> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.interpreter
    }
}

impl Interpreter {
    /// Push `frame` and evaluate in `env` until the guard is dropped.
    ///
    /// Fails without entering when the call depth limit is reached.
    pub(super) fn enter_call(
        &mut self,
        frame: CallFrame,
        env: Environment,
    ) -> Result<ScopedCall<'_>, EvalError> {
        self.call_stack.push(frame)?;
        let saved_env = mem::replace(&mut self.env, env);
        Ok(ScopedCall {
            interpreter: self,
            saved_env,
        })
    }
}
