//! Binary and unary operators over value pairs.
//!
//! Operators know nothing about spans. They report what went wrong as an
//! [`OpError`]; the interpreter decides which node the error is attributed
//! to.

use basil_ir::{BinaryOp, UnaryOp};

use super::Value;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) enum OpError {
    /// Operand types the operator does not accept. Blamed on the whole
    /// expression.
    Illegal,
    /// Blamed on the divisor.
    DivisionByZero,
    /// `list - index` with a bad index. Blamed on the index.
    RemoveOutOfBounds,
    /// `list / index` with a bad index. Blamed on the index.
    RetrieveOutOfBounds,
    /// `string * count` whose result would exceed [`MAX_STRING_LEN`].
    /// Blamed on the count.
    StringTooLong,
}

/// Longest string, in bytes, that `*` will build.
pub const MAX_STRING_LEN: usize = 1 << 30;

pub(crate) fn binary_op(left: &Value, op: BinaryOp, right: &Value) -> Result<Value, OpError> {
    match (left, right) {
        (Value::Number(a), Value::Number(b)) => number_op(*a, op, *b),
        (Value::Str(a), Value::Str(b)) if op == BinaryOp::Add => {
            Ok(Value::string(format!("{a}{b}")))
        }
        (Value::Str(s), Value::Number(n)) if op == BinaryOp::Mul => repeat(s, *n),
        (Value::List(items), _) => list_op(&items.borrow(), op, right),
        _ => Err(OpError::Illegal),
    }
}

pub(crate) fn unary_op(op: UnaryOp, operand: &Value) -> Result<Value, OpError> {
    match (op, operand) {
        (UnaryOp::Pos, value) => Ok(value.clone()),
        (UnaryOp::Neg, Value::Number(n)) => Ok(Value::Number(-n)),
        (UnaryOp::Not, Value::Number(n)) => Ok(Value::bool(*n == 0.0)),
        _ => Err(OpError::Illegal),
    }
}

#[allow(clippy::float_cmp, reason = "`==` on numbers is exact comparison")]
fn number_op(a: f64, op: BinaryOp, b: f64) -> Result<Value, OpError> {
    let value = match op {
        BinaryOp::Add => Value::Number(a + b),
        BinaryOp::Sub => Value::Number(a - b),
        BinaryOp::Mul => Value::Number(a * b),
        BinaryOp::Div => {
            if b == 0.0 {
                return Err(OpError::DivisionByZero);
            }
            Value::Number(a / b)
        }
        BinaryOp::Pow => Value::Number(a.powf(b)),
        BinaryOp::Eq => Value::bool(a == b),
        BinaryOp::NotEq => Value::bool(a != b),
        BinaryOp::Lt => Value::bool(a < b),
        BinaryOp::Gt => Value::bool(a > b),
        BinaryOp::LtEq => Value::bool(a <= b),
        BinaryOp::GtEq => Value::bool(a >= b),
        BinaryOp::And => Value::bool(a != 0.0 && b != 0.0),
        BinaryOp::Or => Value::bool(a != 0.0 || b != 0.0),
    };
    Ok(value)
}

#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    reason = "count is checked to be a non-negative integer first; the cast saturates"
)]
fn repeat(s: &str, count: f64) -> Result<Value, OpError> {
    if count < 0.0 || count.fract() != 0.0 || !count.is_finite() {
        return Err(OpError::Illegal);
    }
    let count = count as usize;
    match s.len().checked_mul(count) {
        Some(len) if len <= MAX_STRING_LEN => Ok(Value::string(s.repeat(count))),
        _ => Err(OpError::StringTooLong),
    }
}

/// `+` appends, `-` removes, `*` concatenates, `/` indexes. Each builds a
/// new list; the operand list is untouched.
fn list_op(items: &[Value], op: BinaryOp, right: &Value) -> Result<Value, OpError> {
    match (op, right) {
        (BinaryOp::Add, value) => {
            let mut new_items = items.to_vec();
            new_items.push(value.clone());
            Ok(Value::list(new_items))
        }
        (BinaryOp::Sub, Value::Number(index)) => {
            let index = resolve_index(items.len(), *index).ok_or(OpError::RemoveOutOfBounds)?;
            let mut new_items = items.to_vec();
            new_items.remove(index);
            Ok(Value::list(new_items))
        }
        (BinaryOp::Mul, Value::List(other)) => {
            let mut new_items = items.to_vec();
            new_items.extend(other.borrow().iter().cloned());
            Ok(Value::list(new_items))
        }
        (BinaryOp::Div, Value::Number(index)) => {
            let index = resolve_index(items.len(), *index).ok_or(OpError::RetrieveOutOfBounds)?;
            Ok(items[index].clone())
        }
        _ => Err(OpError::Illegal),
    }
}

/// Map a user index onto `0..len`. Negative indices count from the end;
/// fractional or out-of-range indices give `None`.
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_precision_loss,
    clippy::cast_sign_loss,
    reason = "index is checked to be an integer within 0..len first"
)]
pub(crate) fn resolve_index(len: usize, index: f64) -> Option<usize> {
    if index.fract() != 0.0 || !index.is_finite() {
        return None;
    }
    let len_f = len as f64;
    let index = if index < 0.0 { index + len_f } else { index };
    if index < 0.0 || index >= len_f {
        return None;
    }
    Some(index as usize)
}
