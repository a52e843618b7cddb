//! Call tracking for runtime tracebacks.
//!
//! `CallStack` records one `CallFrame` per active call. When an error is
//! raised the interpreter snapshots it into an [`EvalBacktrace`], which the
//! driver renders as `File ..., line ..., in ...` lines.

use basil_ir::Span;

use crate::errors::{recursion_limit_exceeded, BacktraceFrame, EvalBacktrace, EvalError};

/// Name of the outermost context.
pub const PROGRAM_CONTEXT: &str = "<program>";

/// A single frame in the live call stack.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CallFrame {
    /// Function name, `<anonymous>` for unnamed functions.
    pub name: String,
    /// The call expression in the caller.
    pub call_span: Span,
}

impl CallFrame {
    pub fn new(name: impl Into<String>, call_span: Span) -> Self {
        CallFrame {
            name: name.into(),
            call_span,
        }
    }
}

/// Live call stack for the interpreter.
///
/// ```text
/// stack.push(CallFrame::new("add", call.span))?;
/// // ... evaluate the body ...
/// stack.pop();
/// ```
#[derive(Clone, Debug)]
pub struct CallStack {
    frames: Vec<CallFrame>,
    max_depth: Option<usize>,
}

impl CallStack {
    /// `max_depth` of `None` means unlimited.
    pub fn new(max_depth: Option<usize>) -> Self {
        CallStack {
            frames: Vec::new(),
            max_depth,
        }
    }

    /// Push a call frame, checking the depth limit. The frame is not pushed
    /// on overflow.
    pub fn push(&mut self, frame: CallFrame) -> Result<(), EvalError> {
        if let Some(max) = self.max_depth {
            if self.frames.len() >= max {
                return Err(recursion_limit_exceeded(max, frame.call_span));
            }
        }
        self.frames.push(frame);
        Ok(())
    }

    pub fn pop(&mut self) {
        debug_assert!(
            !self.frames.is_empty(),
            "CallStack::pop() called on empty stack"
        );
        self.frames.pop();
    }

    #[inline]
    pub fn depth(&self) -> usize {
        self.frames.len()
    }

    /// Snapshot the stack for an error at `error_span`.
    ///
    /// Each frame is reported in the context of its caller: the program
    /// context holds the first call, each function holds the next call it
    /// made, and the innermost context holds the error itself.
    pub fn capture(&self, error_span: Span) -> EvalBacktrace {
        let mut frames = Vec::with_capacity(self.frames.len() + 1);
        let mut context = PROGRAM_CONTEXT;
        for frame in &self.frames {
            frames.push(BacktraceFrame {
                context_name: context.to_owned(),
                span: frame.call_span,
            });
            context = &frame.name;
        }
        frames.push(BacktraceFrame {
            context_name: context.to_owned(),
            span: error_span,
        });
        EvalBacktrace::new(frames)
    }
}

impl Default for CallStack {
    fn default() -> Self {
        Self::new(None)
    }
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests;
