use pretty_assertions::assert_eq;

use super::{eval_display, eval_err, eval_ok, run_with_input, span_text};
use crate::Value;

#[test]
fn print_writes_display_form_and_echoes() {
    let (result, output) = run_with_input(r#"print([1, "two", 3.5])"#, &[]);
    assert_eq!(result.unwrap(), Some(Value::string("[1, two, 3.5]")));
    assert_eq!(output, "[1, two, 3.5]\n");
}

#[test]
fn input_reads_scripted_lines() {
    let (result, _) = run_with_input("[input(), input(), input()]", &["first", "second"]);
    assert_eq!(
        result.unwrap().unwrap().to_string(),
        "[first, second, ]"
    );
}

#[test]
fn clear_discards_buffered_output() {
    let (result, output) = run_with_input("print(1)\nclear()\nprint(2)", &[]);
    assert_eq!(result.unwrap(), Some(Value::string("2")));
    assert_eq!(output, "2\n");
}

#[test]
fn type_predicates() {
    assert_eq!(eval_display("[is_number(1), is_number(\"1\")]"), "[1, 0]");
    assert_eq!(eval_display("[is_str(\"\"), is_str([])]"), "[1, 0]");
    assert_eq!(eval_display("[is_list([]), is_list(0)]"), "[1, 0]");
    assert_eq!(
        eval_display("func f() -> 0\n[is_func(f), is_func(print), is_func(0)]"),
        "[1, 1, 0]"
    );
}

#[test]
fn constants() {
    assert_eq!(eval_display("[NULL, True, False]"), "[0, 1, 0]");
    assert_eq!(eval_ok("PI"), Value::Number(std::f64::consts::PI));
}

#[test]
fn builtins_display_their_name() {
    assert_eq!(eval_display("append"), "<built-in function append>");
}

#[test]
fn append_mutates_shared_list() {
    let source = "var a = [1]\nvar b = a\nappend(b, 2)\na";
    assert_eq!(eval_display(source), "[1, 2]");
}

#[test]
fn pop_removes_and_returns() {
    let source = "var a = [1, 2, 3]\nvar x = pop(a, -1)\n[x, a]";
    assert_eq!(eval_display(source), "[3, [1, 2]]");
}

#[test]
fn extend_mutates_first_list() {
    let source = "var a = [1]\nextend(a, [2, 3])\nextend(a, a)\na";
    assert_eq!(eval_display(source), "[1, 2, 3, 1, 2, 3]");
}

#[test]
fn argument_type_errors() {
    assert_eq!(eval_err("append(1, 2)").message, "First argument must be list");
    assert_eq!(eval_err("pop([1], \"0\")").message, "Second argument must be number");
    assert_eq!(eval_err("extend([1], 2)").message, "Second argument must be list");
}

#[test]
fn pop_out_of_bounds_spans_the_call() {
    let source = "pop([], 0)";
    let err = eval_err(source);
    assert_eq!(
        err.message,
        "Element at this index could not be removed from list because index is out of bounds"
    );
    assert_eq!(span_text(source, err.span), source);
    let contexts: Vec<&str> = err
        .backtrace
        .frames()
        .iter()
        .map(|f| f.context_name.as_str())
        .collect();
    assert_eq!(contexts, vec!["<program>", "pop"]);
}

#[test]
fn builtin_arity() {
    assert_eq!(eval_err("print()").message, "-1 too few args passed into 'print'");
    assert_eq!(eval_err("input(1)").message, "1 too many args passed into 'input'");
}
