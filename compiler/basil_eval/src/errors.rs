//! Runtime errors and control signals.
//!
//! Every runtime failure is an [`EvalError`] built by one of the `#[cold]`
//! factories below. It travels up the evaluator inside
//! [`ControlAction::Error`] alongside the non-error signals (`break`,
//! `continue`, `return`), so a single `?` forwards all of them.

use std::fmt;

use basil_ir::Span;

use crate::value::MAX_STRING_LEN;
use crate::Value;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum EvalErrorKind {
    /// A failure of the running program.
    Runtime,
    /// A limit of the interpreter itself, such as call depth.
    Internal,
}

/// One line of a runtime traceback.
///
/// `span` is where execution was inside `context_name` when the error
/// happened: the call expression for an outer frame, the failing node for
/// the innermost.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BacktraceFrame {
    pub context_name: String,
    pub span: Span,
}

/// Snapshot of the call stack at an error site, outermost frame first.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EvalBacktrace {
    frames: Vec<BacktraceFrame>,
}

impl EvalBacktrace {
    pub fn new(frames: Vec<BacktraceFrame>) -> Self {
        EvalBacktrace { frames }
    }

    pub fn frames(&self) -> &[BacktraceFrame] {
        &self.frames
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EvalError {
    pub kind: EvalErrorKind,
    pub message: String,
    /// The node the error is attributed to.
    pub span: Span,
    /// Filled in by the interpreter where the error is raised.
    pub backtrace: EvalBacktrace,
}

impl EvalError {
    #[cold]
    pub fn new(message: impl Into<String>, span: Span) -> Self {
        EvalError {
            kind: EvalErrorKind::Runtime,
            message: message.into(),
            span,
            backtrace: EvalBacktrace::default(),
        }
    }

    #[must_use]
    pub fn with_backtrace(mut self, backtrace: EvalBacktrace) -> Self {
        self.backtrace = backtrace;
        self
    }

    pub fn is_internal(&self) -> bool {
        self.kind == EvalErrorKind::Internal
    }
}

impl fmt::Display for EvalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for EvalError {}

/// Anything that stops normal evaluation of a node.
///
/// Errors dominate: nothing that consumes `Break`, `Continue` or `Return`
/// ever swallows an `Error`.
#[derive(Debug)]
pub enum ControlAction {
    Error(Box<EvalError>),
    Break,
    Continue,
    Return(Value),
}

impl From<EvalError> for ControlAction {
    #[cold]
    fn from(err: EvalError) -> Self {
        ControlAction::Error(Box::new(err))
    }
}

pub type EvalResult = Result<Value, ControlAction>;

#[cold]
pub(crate) fn undefined_variable(name: &str, span: Span) -> EvalError {
    EvalError::new(format!("'{name}' is not defined"), span)
}

#[cold]
pub(crate) fn illegal_operation(span: Span) -> EvalError {
    EvalError::new("Illegal operation", span)
}

#[cold]
pub(crate) fn division_by_zero(span: Span) -> EvalError {
    EvalError::new("Division by zero", span)
}

#[cold]
pub(crate) fn element_not_removable(span: Span) -> EvalError {
    EvalError::new(
        "Element at this index could not be removed from list because index is out of bounds",
        span,
    )
}

#[cold]
pub(crate) fn element_not_retrievable(span: Span) -> EvalError {
    EvalError::new(
        "Element at this index could not be retrieved from list because index is out of bounds",
        span,
    )
}

#[cold]
pub(crate) fn string_too_long(span: Span) -> EvalError {
    EvalError::new(
        format!("String repetition would exceed {MAX_STRING_LEN} bytes"),
        span,
    )
}

/// Arity mismatch. The count is `args - params`, so it is negative when
/// too few were passed.
#[cold]
pub(crate) fn wrong_arg_count(name: &str, params: usize, args: usize, span: Span) -> EvalError {
    let message = if args > params {
        format!("{} too many args passed into '{name}'", args - params)
    } else {
        format!("-{} too few args passed into '{name}'", params - args)
    };
    EvalError::new(message, span)
}

#[cold]
pub(crate) fn first_argument_must_be_list(span: Span) -> EvalError {
    EvalError::new("First argument must be list", span)
}

#[cold]
pub(crate) fn second_argument_must_be_number(span: Span) -> EvalError {
    EvalError::new("Second argument must be number", span)
}

#[cold]
pub(crate) fn second_argument_must_be_list(span: Span) -> EvalError {
    EvalError::new("Second argument must be list", span)
}

#[cold]
pub(crate) fn recursion_limit_exceeded(max_depth: usize, span: Span) -> EvalError {
    EvalError {
        kind: EvalErrorKind::Internal,
        ..EvalError::new(
            format!("Maximum call depth of {max_depth} exceeded"),
            span,
        )
    }
}
