//! Tree-walking interpreter.
//!
//! [`Interpreter::eval`] maps a [`Node`] to a [`Value`]. Anything that
//! interrupts normal flow (an error, `break`, `continue`, `return`) comes
//! back as a [`ControlAction`] in the `Err` slot, so every child
//! evaluation is a `?` and nothing is evaluated after a sibling fails.
//!
//! - `control_flow` - `if`, `for`, `while`
//! - `function_call` - function definitions and calls
//! - `scope_guard` - call frame and environment switching

mod builder;
mod control_flow;
mod function_call;
mod scope_guard;

pub use builder::InterpreterBuilder;

use basil_ir::{Node, NodeKind, Span};
use basil_stack::ensure_sufficient_stack;

use crate::diagnostics::CallStack;
use crate::errors::{
    division_by_zero, element_not_removable, element_not_retrievable, illegal_operation,
    string_too_long, undefined_variable,
};
use crate::io_handler::{IoHandlerImpl, SharedIoHandler};
use crate::value::{binary_op, unary_op, OpError};
use crate::{ControlAction, Environment, EvalError, EvalResult, Value};

/// Calls nested deeper than this fail with an internal error.
pub const DEFAULT_MAX_CALL_DEPTH: usize = 1000;

pub struct Interpreter {
    /// The environment new bindings go into. Swapped for the duration of a
    /// call.
    env: Environment,
    /// The top-level environment, kept so a session can reuse it.
    globals: Environment,
    call_stack: CallStack,
    io: SharedIoHandler,
}

impl Interpreter {
    /// An interpreter over a fresh global environment, talking to the
    /// console.
    pub fn new() -> Self {
        InterpreterBuilder::new().build()
    }

    pub fn builder() -> InterpreterBuilder {
        InterpreterBuilder::new()
    }

    pub fn globals(&self) -> &Environment {
        &self.globals
    }

    pub fn io(&self) -> &IoHandlerImpl {
        &self.io
    }

    /// Evaluate a whole program.
    ///
    /// The program's value is the value of its last statement. A `return`,
    /// `break` or `continue` that reaches the top level ends the program
    /// without a value.
    #[tracing::instrument(level = "debug", skip_all)]
    pub fn run(&mut self, program: &Node) -> Result<Option<Value>, EvalError> {
        match self.eval(program) {
            Ok(Value::List(values)) if program.as_block().is_some() => {
                let last = values.borrow().last().cloned();
                Ok(last)
            }
            Ok(value) => Ok(Some(value)),
            Err(ControlAction::Error(err)) => Err(*err),
            Err(ControlAction::Break | ControlAction::Continue | ControlAction::Return(_)) => {
                Ok(None)
            }
        }
    }

    /// Evaluate one node.
    pub fn eval(&mut self, node: &Node) -> EvalResult {
        ensure_sufficient_stack(|| self.eval_inner(node))
    }

    fn eval_inner(&mut self, node: &Node) -> EvalResult {
        match &node.kind {
            NodeKind::Number(n) => Ok(Value::Number(*n)),
            NodeKind::Str(s) => Ok(Value::string(s.as_str())),
            NodeKind::List(elements) => {
                let mut values = Vec::with_capacity(elements.len());
                for element in elements {
                    values.push(self.eval(element)?);
                }
                Ok(Value::list(values))
            }
            NodeKind::VarAccess(name) => {
                let found = self.env.borrow().lookup(name);
                found.ok_or_else(|| self.raise(undefined_variable(name, node.span)))
            }
            NodeKind::VarAssign { name, value } => {
                let value = self.eval(value)?;
                self.env.borrow_mut().define(name.as_str(), value.clone());
                Ok(value)
            }
            NodeKind::BinaryOp { left, op, right } => {
                let lhs = self.eval(left)?;
                let rhs = self.eval(right)?;
                binary_op(&lhs, *op, &rhs).map_err(|e| self.op_error(e, node.span, right.span))
            }
            NodeKind::UnaryOp { op, operand } => {
                let value = self.eval(operand)?;
                unary_op(*op, &value).map_err(|e| self.op_error(e, node.span, operand.span))
            }
            NodeKind::If { cases, else_case } => self.eval_if(cases, else_case.as_ref()),
            NodeKind::For {
                var_name,
                start,
                end,
                step,
                body,
                is_block,
            } => self.eval_for(var_name, start, end, step.as_deref(), body, *is_block),
            NodeKind::While {
                condition,
                body,
                is_block,
            } => self.eval_while(condition, body, *is_block),
            NodeKind::FuncDef {
                name,
                params,
                body,
                is_expr_body,
            } => Ok(self.define_function(name.as_deref(), params, body, *is_expr_body)),
            NodeKind::Call { callee, args } => self.eval_call(callee, args, node.span),
            NodeKind::Return(value) => {
                let value = match value {
                    Some(value) => self.eval(value)?,
                    None => Value::NULL,
                };
                Err(ControlAction::Return(value))
            }
            NodeKind::Break => Err(ControlAction::Break),
            NodeKind::Continue => Err(ControlAction::Continue),
            NodeKind::Block(stmts) => {
                let mut values = Vec::with_capacity(stmts.len());
                for stmt in stmts {
                    values.push(self.eval(stmt)?);
                }
                Ok(Value::list(values))
            }
        }
    }

    /// Attach the current call stack to `err`.
    #[cold]
    fn raise(&self, err: EvalError) -> ControlAction {
        let backtrace = self.call_stack.capture(err.span);
        err.with_backtrace(backtrace).into()
    }

    /// Blame an operator failure on the right node: the whole expression
    /// for a type mismatch, the right operand for a bad divisor or index.
    #[cold]
    fn op_error(&self, err: OpError, expr_span: Span, operand_span: Span) -> ControlAction {
        let err = match err {
            OpError::Illegal => illegal_operation(expr_span),
            OpError::DivisionByZero => division_by_zero(operand_span),
            OpError::RemoveOutOfBounds => element_not_removable(operand_span),
            OpError::RetrieveOutOfBounds => element_not_retrievable(operand_span),
            OpError::StringTooLong => string_too_long(operand_span),
        };
        self.raise(err)
    }
}

impl Default for Interpreter {
    fn default() -> Self {
        Self::new()
    }
}
