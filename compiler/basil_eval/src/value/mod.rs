//! Runtime values.
//!
//! `Value` is a closed enum; every operator is a match over operand pairs
//! (see `operators`). Cloning a value is shallow: a `List` clone shares its
//! elements vector, so `append`/`pop`/`extend` through one binding are seen
//! through every other. The list operators themselves always build a new
//! vector.

mod operators;

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use basil_ir::Node;

pub use operators::MAX_STRING_LEN;
pub(crate) use operators::{binary_op, resolve_index, unary_op, OpError};

use crate::{BuiltinKind, Environment};

#[derive(Clone, Debug)]
pub enum Value {
    Number(f64),
    Str(Rc<str>),
    List(Rc<RefCell<Vec<Value>>>),
    Function(Rc<FunctionValue>),
    BuiltIn(BuiltinKind),
}

impl Value {
    /// The language has no separate null; it is the number zero.
    pub const NULL: Value = Value::Number(0.0);

    #[inline]
    pub fn bool(b: bool) -> Value {
        Value::Number(if b { 1.0 } else { 0.0 })
    }

    pub fn string(s: impl Into<Rc<str>>) -> Value {
        Value::Str(s.into())
    }

    pub fn list(elements: Vec<Value>) -> Value {
        Value::List(Rc::new(RefCell::new(elements)))
    }

    /// Zero, the empty string, and nothing else is false.
    pub fn is_truthy(&self) -> bool {
        match self {
            Value::Number(n) => *n != 0.0,
            Value::Str(s) => !s.is_empty(),
            Value::List(_) | Value::Function(_) | Value::BuiltIn(_) => true,
        }
    }

    /// Source form: strings quoted and escaped, lists of reprs. For
    /// numbers, strings and lists this lexes and parses back to an equal
    /// value.
    pub fn repr(&self) -> String {
        match self {
            Value::Str(s) => {
                let mut out = String::with_capacity(s.len() + 2);
                out.push('"');
                for ch in s.chars() {
                    match ch {
                        '"' => out.push_str("\\\""),
                        '\\' => out.push_str("\\\\"),
                        '\n' => out.push_str("\\n"),
                        '\t' => out.push_str("\\t"),
                        _ => out.push(ch),
                    }
                }
                out.push('"');
                out
            }
            Value::List(items) => {
                let items: Vec<String> = items.borrow().iter().map(Value::repr).collect();
                format!("[{}]", items.join(", "))
            }
            _ => self.to_string(),
        }
    }
}

/// Display form, as `print` writes it.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Number(n) => write!(f, "{n}"),
            Value::Str(s) => f.write_str(s),
            Value::List(items) => {
                f.write_str("[")?;
                for (i, item) in items.borrow().iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{item}")?;
                }
                f.write_str("]")
            }
            Value::Function(func) => write!(f, "<function {}>", func.display_name()),
            Value::BuiltIn(kind) => write!(f, "<built-in function {}>", kind.name()),
        }
    }
}

/// Structural for data, identity for functions.
impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Number(a), Value::Number(b)) => a == b,
            (Value::Str(a), Value::Str(b)) => a == b,
            (Value::List(a), Value::List(b)) => Rc::ptr_eq(a, b) || *a.borrow() == *b.borrow(),
            (Value::Function(a), Value::Function(b)) => Rc::ptr_eq(a, b),
            (Value::BuiltIn(a), Value::BuiltIn(b)) => a == b,
            _ => false,
        }
    }
}

/// A user-defined function and the environment it closes over.
pub struct FunctionValue {
    pub name: Option<String>,
    pub params: Vec<String>,
    pub body: Node,
    /// `-> expr` bodies produce their value; block bodies produce null
    /// unless they `return`.
    pub is_expr_body: bool,
    pub env: Environment,
}

impl FunctionValue {
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or("<anonymous>")
    }
}

impl fmt::Debug for FunctionValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FunctionValue")
            .field("name", &self.display_name())
            .field("params", &self.params)
            .field("is_expr_body", &self.is_expr_body)
            .finish_non_exhaustive()
    }
}
