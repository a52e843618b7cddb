//! Built-in functions and the global environment.
//!
//! Built-ins are a closed set, so they are a plain enum and a call is a
//! match over `(kind, args)`. A built-in is called exactly like a user
//! function: it gets a call frame and its arity is checked against
//! [`BuiltinKind::params`].

use std::f64::consts::PI;

use basil_ir::Span;

use crate::errors::{
    element_not_removable, first_argument_must_be_list, second_argument_must_be_list,
    second_argument_must_be_number, wrong_arg_count,
};
use crate::value::resolve_index;
use crate::{Environment, EvalError, Interpreter, LocalScope, Scope, Value};

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum BuiltinKind {
    Print,
    Input,
    Clear,
    IsNumber,
    IsStr,
    IsList,
    IsFunc,
    Append,
    Pop,
    Extend,
}

impl BuiltinKind {
    pub const ALL: [BuiltinKind; 10] = [
        BuiltinKind::Print,
        BuiltinKind::Input,
        BuiltinKind::Clear,
        BuiltinKind::IsNumber,
        BuiltinKind::IsStr,
        BuiltinKind::IsList,
        BuiltinKind::IsFunc,
        BuiltinKind::Append,
        BuiltinKind::Pop,
        BuiltinKind::Extend,
    ];

    /// The global name the built-in is bound to.
    pub fn name(self) -> &'static str {
        match self {
            BuiltinKind::Print => "print",
            BuiltinKind::Input => "input",
            BuiltinKind::Clear => "clear",
            BuiltinKind::IsNumber => "is_number",
            BuiltinKind::IsStr => "is_str",
            BuiltinKind::IsList => "is_list",
            BuiltinKind::IsFunc => "is_func",
            BuiltinKind::Append => "append",
            BuiltinKind::Pop => "pop",
            BuiltinKind::Extend => "extend",
        }
    }

    pub fn params(self) -> &'static [&'static str] {
        match self {
            BuiltinKind::Input | BuiltinKind::Clear => &[],
            BuiltinKind::Print
            | BuiltinKind::IsNumber
            | BuiltinKind::IsStr
            | BuiltinKind::IsList
            | BuiltinKind::IsFunc => &["value"],
            BuiltinKind::Append => &["list", "value"],
            BuiltinKind::Pop => &["list", "index"],
            BuiltinKind::Extend => &["list_1", "list_2"],
        }
    }
}

/// A fresh top-level environment: the constants and every built-in.
pub fn global_environment() -> Environment {
    let mut scope = Scope::new();
    scope.define("NULL", Value::NULL);
    scope.define("False", Value::bool(false));
    scope.define("True", Value::bool(true));
    scope.define("PI", Value::Number(PI));
    for kind in BuiltinKind::ALL {
        scope.define(kind.name(), Value::BuiltIn(kind));
    }
    LocalScope::new(scope)
}

impl Interpreter {
    /// Run a built-in. Errors are attributed to `span`, the call
    /// expression.
    pub(crate) fn call_builtin(
        &self,
        kind: BuiltinKind,
        args: &[Value],
        span: Span,
    ) -> Result<Value, EvalError> {
        match (kind, args) {
            (BuiltinKind::Print, [value]) => {
                let text = value.to_string();
                self.io().println(&text);
                Ok(Value::string(text))
            }
            (BuiltinKind::Input, []) => {
                let line = self.io().read_line().unwrap_or_default();
                Ok(Value::string(line))
            }
            (BuiltinKind::Clear, []) => {
                self.io().clear_screen();
                Ok(Value::NULL)
            }
            (BuiltinKind::IsNumber, [value]) => Ok(Value::bool(matches!(value, Value::Number(_)))),
            (BuiltinKind::IsStr, [value]) => Ok(Value::bool(matches!(value, Value::Str(_)))),
            (BuiltinKind::IsList, [value]) => Ok(Value::bool(matches!(value, Value::List(_)))),
            (BuiltinKind::IsFunc, [value]) => Ok(Value::bool(matches!(
                value,
                Value::Function(_) | Value::BuiltIn(_)
            ))),
            (BuiltinKind::Append, [list, value]) => {
                let Value::List(items) = list else {
                    return Err(first_argument_must_be_list(span));
                };
                items.borrow_mut().push(value.clone());
                Ok(list.clone())
            }
            (BuiltinKind::Pop, [list, index]) => {
                let Value::List(items) = list else {
                    return Err(first_argument_must_be_list(span));
                };
                let Value::Number(index) = index else {
                    return Err(second_argument_must_be_number(span));
                };
                let mut items = items.borrow_mut();
                match resolve_index(items.len(), *index) {
                    Some(i) => Ok(items.remove(i)),
                    None => Err(element_not_removable(span)),
                }
            }
            (BuiltinKind::Extend, [list_1, list_2]) => {
                let Value::List(dest) = list_1 else {
                    return Err(first_argument_must_be_list(span));
                };
                let Value::List(src) = list_2 else {
                    return Err(second_argument_must_be_list(span));
                };
                // `extend(a, a)` doubles `a`; copy out before borrowing mutably.
                let extra = src.borrow().clone();
                dest.borrow_mut().extend(extra);
                Ok(list_1.clone())
            }
            (kind, args) => Err(wrong_arg_count(
                kind.name(),
                kind.params().len(),
                args.len(),
                span,
            )),
        }
    }
}
