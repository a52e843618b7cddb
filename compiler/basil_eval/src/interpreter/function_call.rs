//! Function definitions and calls.

use std::rc::Rc;

use basil_ir::{Node, Span};
use smallvec::SmallVec;

use super::Interpreter;
use crate::diagnostics::CallFrame;
use crate::errors::{illegal_operation, wrong_arg_count};
use crate::{
    BuiltinKind, ControlAction, Environment, EvalResult, FunctionValue, LocalScope, Scope, Value,
};

impl Interpreter {
    /// Build a closure over the current environment, binding it when named.
    pub(super) fn define_function(
        &mut self,
        name: Option<&str>,
        params: &[String],
        body: &Node,
        is_expr_body: bool,
    ) -> Value {
        let func = Value::Function(Rc::new(FunctionValue {
            name: name.map(str::to_owned),
            params: params.to_vec(),
            body: body.clone(),
            is_expr_body,
            env: self.env.clone(),
        }));
        if let Some(name) = name {
            self.env.borrow_mut().define(name, func.clone());
        }
        func
    }

    /// Callee first, then arguments left to right. The first failure stops
    /// evaluation.
    pub(super) fn eval_call(&mut self, callee: &Node, args: &[Node], span: Span) -> EvalResult {
        let callee = self.eval(callee)?;
        let mut values: SmallVec<[Value; 4]> = SmallVec::with_capacity(args.len());
        for arg in args {
            values.push(self.eval(arg)?);
        }

        match &callee {
            Value::Function(func) => self.call_function(func, &values, span),
            Value::BuiltIn(kind) => self.call_builtin_in_frame(*kind, &values, span),
            _ => Err(self.raise(illegal_operation(span))),
        }
    }

    /// Run a user function in a fresh scope whose parent is the scope it
    /// was defined in.
    ///
    /// Once the call is over the frame is released unless something that
    /// outlives the call still refers to it.
    #[tracing::instrument(level = "debug", skip_all, fields(name = func.display_name()))]
    fn call_function(&mut self, func: &FunctionValue, args: &[Value], span: Span) -> EvalResult {
        let frame_env = LocalScope::new(Scope::with_parent(func.env.clone()));
        let result = self.eval_function_body(func, args, span, frame_env.clone());
        frame_env.release_if_unreachable();
        result
    }

    fn eval_function_body(
        &mut self,
        func: &FunctionValue,
        args: &[Value],
        span: Span,
        env: Environment,
    ) -> EvalResult {
        let name = func.display_name();
        let mut scoped = self.enter_call(CallFrame::new(name, span), env)?;

        if args.len() != func.params.len() {
            let err = wrong_arg_count(name, func.params.len(), args.len(), span);
            return Err(scoped.raise(err));
        }
        {
            let mut scope = scoped.env.borrow_mut();
            for (param, arg) in func.params.iter().zip(args) {
                scope.define(param.as_str(), arg.clone());
            }
        }

        match scoped.eval(&func.body) {
            Ok(value) if func.is_expr_body => Ok(value),
            Ok(_) | Err(ControlAction::Break | ControlAction::Continue) => Ok(Value::NULL),
            Err(ControlAction::Return(value)) => Ok(value),
            Err(err @ ControlAction::Error(_)) => Err(err),
        }
    }

    #[tracing::instrument(level = "debug", skip_all, fields(name = kind.name()))]
    fn call_builtin_in_frame(&mut self, kind: BuiltinKind, args: &[Value], span: Span) -> EvalResult {
        let env = self.env.clone();
        let scoped = self.enter_call(CallFrame::new(kind.name(), span), env)?;
        scoped.call_builtin(kind, args, span).map_err(|err| scoped.raise(err))
    }
}
