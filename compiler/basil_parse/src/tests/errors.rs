use basil_ir::Span;
use pretty_assertions::assert_eq;

use super::parse_err;

const STATEMENT: &str = "Expected 'return', 'continue', 'break', 'var', 'if', 'for', 'while', \
                         'func', int, float, identifier, '+', '-', '(', '[' or 'not'";
const ATOM: &str =
    "Expected int, float, identifier, '+', '-', '(', '[', 'if', 'for', 'while' or 'func'";

fn message(source: &str) -> String {
    parse_err(source).message
}

#[test]
fn empty_program() {
    let err = parse_err("");
    assert_eq!(err.message, STATEMENT);
    assert_eq!(err.span, Span::point(0));
}

#[test]
fn unknown_statement_start() {
    assert_eq!(message(")"), STATEMENT);
}

#[test]
fn trailing_tokens_want_an_operator() {
    let err = parse_err("1 2");
    assert_eq!(
        err.message,
        "Expected '+', '-', '*', '/', '^', '==', '!=', '<', '>', '<=', '>=', 'and' or 'or'"
    );
    assert_eq!(err.span, Span::new(2, 3));
}

#[test]
fn error_after_progress_is_kept() {
    let err = parse_err("1 + )");
    assert_eq!(err.message, ATOM);
    assert_eq!(err.span, Span::new(4, 5));
    assert_eq!(message("+"), ATOM);
}

#[test]
fn not_without_operand() {
    assert_eq!(
        message("not"),
        "Expected int, float, identifier, '+', '-', '(', '[', 'if', 'for', 'while', 'func' or 'not'"
    );
}

#[test]
fn var_assignment_errors() {
    assert_eq!(message("var 1 = 2"), "Expected identifier");
    assert_eq!(message("var x 2"), "Expected '='");
}

#[test]
fn unclosed_paren_points_at_eof() {
    let err = parse_err("(1 + 2");
    assert_eq!(err.message, "Expected ')'");
    assert_eq!(err.span, Span::point(6));
}

#[test]
fn call_argument_errors() {
    assert_eq!(message("f(1 2)"), "Expected ',' or ')'");
    assert_eq!(
        message("f(])"),
        "Expected ')', 'var', 'if', 'for', 'while', 'func', int, float, identifier, '+', '-', \
         '(', '[' or 'not'"
    );
}

#[test]
fn list_element_errors() {
    assert_eq!(message("[1 2]"), "Expected ',' or ']'");
    assert_eq!(
        message("[)"),
        "Expected ']', 'var', 'if', 'for', 'while', 'func', int, float, identifier, '+', '-', \
         '(', '[' or 'not'"
    );
}

#[test]
fn if_errors() {
    assert_eq!(message("if 1 2"), "Expected 'then'");
    assert_eq!(message("if 1 then\n  2\n"), "Expected 'end', 'elif' or 'else'");
    assert_eq!(message("if 1 then 2 else\n  3\n"), "Expected 'end'");
}

#[test]
fn for_errors() {
    assert_eq!(message("for 1"), "Expected identifier");
    assert_eq!(message("for i 1"), "Expected '='");
    assert_eq!(message("for i = 1 10"), "Expected 'to'");
    assert_eq!(message("for i = 1 to 10 i"), "Expected 'then'");
}

#[test]
fn while_block_needs_end() {
    let err = parse_err("while 1 then\n  2");
    assert_eq!(err.message, "Expected 'end'");
    assert_eq!(err.span, Span::point(16));
}

#[test]
fn func_errors() {
    assert_eq!(message("func 1"), "Expected identifier or '('");
    assert_eq!(message("func f 1"), "Expected '('");
    assert_eq!(message("func (1)"), "Expected identifier or ')'");
    assert_eq!(message("func (a b)"), "Expected ',' or ')'");
    assert_eq!(message("func (a,)"), "Expected identifier");
    assert_eq!(message("func (a) a"), "Expected '->' or newline");
}

#[test]
fn failed_statement_after_newline_is_rewound() {
    // The second line is abandoned as a statement, so the complaint is
    // about what follows the first.
    let err = parse_err("1\nvar = 3");
    assert_eq!(
        err.message,
        "Expected '+', '-', '*', '/', '^', '==', '!=', '<', '>', '<=', '>=', 'and' or 'or'"
    );
    assert_eq!(err.span, Span::new(2, 5));
}
