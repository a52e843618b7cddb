//! `if`, `for` and `while`.
//!
//! Loops consume `break` and `continue` and forward everything else. An
//! inline body contributes its value to the loop's result list; a block
//! body makes the whole loop evaluate to null, and its statement values are
//! dropped as soon as each iteration ends.

use basil_ir::{ElseCase, IfCase, Node};

use super::Interpreter;
use crate::errors::illegal_operation;
use crate::{ControlAction, EvalResult, Value};

impl Interpreter {
    pub(super) fn eval_if(&mut self, cases: &[IfCase], else_case: Option<&ElseCase>) -> EvalResult {
        for case in cases {
            if self.eval(&case.condition)?.is_truthy() {
                return self.eval_body(&case.body, case.is_block);
            }
        }
        match else_case {
            Some(else_case) => self.eval_body(&else_case.body, else_case.is_block),
            None => Ok(Value::NULL),
        }
    }

    /// A block body runs its statements one by one without collecting
    /// their values.
    fn eval_body(&mut self, body: &Node, is_block: bool) -> EvalResult {
        if !is_block {
            return self.eval(body);
        }
        match body.as_block() {
            Some(stmts) => {
                for stmt in stmts {
                    self.eval(stmt)?;
                }
            }
            None => {
                self.eval(body)?;
            }
        }
        Ok(Value::NULL)
    }

    /// `start`, `end` and `step` are evaluated once. The counter lives
    /// outside the environment: the body may reassign the loop variable,
    /// but the next iteration rebinds it from the counter.
    pub(super) fn eval_for(
        &mut self,
        var_name: &str,
        start: &Node,
        end: &Node,
        step: Option<&Node>,
        body: &Node,
        is_block: bool,
    ) -> EvalResult {
        let start = self.number_operand(start)?;
        let end = self.number_operand(end)?;
        let step = match step {
            Some(step) => self.number_operand(step)?,
            None => 1.0,
        };
        let in_range = |i: f64| if step >= 0.0 { i < end } else { i > end };

        let mut values = LoopValues::new(is_block);
        let mut counter = start;
        while in_range(counter) {
            self.env.borrow_mut().define(var_name, Value::Number(counter));
            counter += step;
            match self.eval_body(body, is_block) {
                Ok(value) => values.push(value),
                Err(ControlAction::Continue) => {}
                Err(ControlAction::Break) => break,
                Err(other) => return Err(other),
            }
        }
        Ok(values.finish())
    }

    pub(super) fn eval_while(&mut self, condition: &Node, body: &Node, is_block: bool) -> EvalResult {
        let mut values = LoopValues::new(is_block);
        while self.eval(condition)?.is_truthy() {
            match self.eval_body(body, is_block) {
                Ok(value) => values.push(value),
                Err(ControlAction::Continue) => {}
                Err(ControlAction::Break) => break,
                Err(other) => return Err(other),
            }
        }
        Ok(values.finish())
    }

    /// A `for` bound, which must be a number.
    fn number_operand(&mut self, node: &Node) -> Result<f64, ControlAction> {
        match self.eval(node)? {
            Value::Number(n) => Ok(n),
            _ => Err(self.raise(illegal_operation(node.span))),
        }
    }
}

/// What a loop has produced so far.
enum LoopValues {
    /// Block body: the loop is null, so nothing is kept.
    Discard,
    Collect(Vec<Value>),
}

impl LoopValues {
    fn new(is_block: bool) -> Self {
        if is_block {
            LoopValues::Discard
        } else {
            LoopValues::Collect(Vec::new())
        }
    }

    fn push(&mut self, value: Value) {
        if let LoopValues::Collect(values) = self {
            values.push(value);
        }
    }

    fn finish(self) -> Value {
        match self {
            LoopValues::Discard => Value::NULL,
            LoopValues::Collect(values) => Value::list(values),
        }
    }
}
