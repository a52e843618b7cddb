use basil_ir::{NodeKind, Span};
use pretty_assertions::assert_eq;
use proptest::prelude::*;

use super::{parse_ok, render};

#[test]
fn multiplication_binds_tighter_than_addition() {
    assert_eq!(render("1 + 2 * 3"), "{(1 + (2 * 3))}");
    assert_eq!(render("(1 + 2) * 3"), "{((1 + 2) * 3)}");
}

#[test]
fn same_level_operators_fold_left() {
    assert_eq!(render("1 - 2 - 3"), "{((1 - 2) - 3)}");
    assert_eq!(render("8 / 4 / 2"), "{((8 / 4) / 2)}");
}

#[test]
fn power_is_right_associative() {
    assert_eq!(render("2 ^ 3 ^ 2"), "{(2 ^ (3 ^ 2))}");
}

#[test]
fn power_accepts_signed_exponent() {
    assert_eq!(render("2 ^ -1"), "{(2 ^ (- 1))}");
}

#[test]
fn sign_applies_to_whole_power() {
    assert_eq!(render("-2 ^ 2"), "{(- (2 ^ 2))}");
    assert_eq!(render("--1"), "{(- (- 1))}");
}

#[test]
fn var_assignment_is_right_associative() {
    assert_eq!(render("var a = var b = 5"), "{(var a (var b 5))}");
}

#[test]
fn not_covers_the_comparison() {
    assert_eq!(render("not 1 == 2"), "{(not (1 == 2))}");
}

#[test]
fn logical_operators_are_lowest() {
    assert_eq!(
        render("1 < 2 and 3 >= 4 or 0"),
        "{(((1 < 2) and (3 >= 4)) or 0)}"
    );
}

#[test]
fn calls() {
    assert_eq!(render("f()"), "{(call f)}");
    assert_eq!(render("f(1, x + 1)"), "{(call f 1 (x + 1))}");
    assert_eq!(
        render("(func (a) -> a)(1)"),
        "{(call (func <anonymous> (a) a) 1)}"
    );
}

#[test]
fn list_literals() {
    assert_eq!(render("[]"), "{[]}");
    assert_eq!(render(r#"[1, [2], "s"]"#), r#"{[1, [2], "s"]}"#);
}

#[test]
fn inline_if_chain() {
    assert_eq!(
        render("if x then 1 elif y then 2 else 3"),
        "{(if [x 1] [y 2] [else 3])}"
    );
}

#[test]
fn block_if_with_else() {
    let program = parse_ok("if x then\n  1\n  2\nelse\n  3\nend");
    assert_eq!(program.to_string(), "{(if [x {1; 2}] [else {3}])}");

    let NodeKind::If { cases, else_case } = &program.as_block().unwrap()[0].kind else {
        panic!("expected if");
    };
    assert!(cases[0].is_block);
    assert!(else_case.as_ref().unwrap().is_block);
}

#[test]
fn if_else_tree_clones_equal() {
    let program = parse_ok("if x then 1 else if y then 2 else 3");
    let copy = program.clone();
    assert_eq!(copy, program);

    let NodeKind::If { else_case, .. } = &copy.as_block().unwrap()[0].kind else {
        panic!("expected if");
    };
    let nested = &else_case.as_ref().unwrap().body;
    assert!(matches!(nested.kind, NodeKind::If { .. }));
    assert_eq!(nested.to_string(), "(if [y 2] [else 3])");
}

#[test]
fn block_if_with_elif_chain() {
    assert_eq!(
        render("if a then\n1\nelif b then\n2\nelif c then 3"),
        "{(if [a {1}] [b {2}] [c 3])}"
    );
}

#[test]
fn for_with_step() {
    assert_eq!(
        render("for i = 1 to 10 step 2 then i"),
        "{(for i 1 10 step 2 i)}"
    );
    let program = parse_ok("for i = 0 to 3 then\n  i\nend");
    let NodeKind::For { step, is_block, .. } = &program.as_block().unwrap()[0].kind else {
        panic!("expected for");
    };
    assert!(step.is_none());
    assert!(*is_block);
}

#[test]
fn while_block() {
    assert_eq!(
        render("while x then\n  var x = x - 1\nend"),
        "{(while x {(var x (x - 1))})}"
    );
}

#[test]
fn loop_control_statements() {
    assert_eq!(render("while 1 then break"), "{(while 1 (break))}");
    assert_eq!(
        render("for i = 0 to 2 then\ncontinue\nend"),
        "{(for i 0 2 {(continue)})}"
    );
}

#[test]
fn named_block_function() {
    assert_eq!(
        render("func add(a, b)\n  return a + b\nend"),
        "{(func add (a b) {(return (a + b))})}"
    );
}

#[test]
fn bare_return() {
    assert_eq!(render("func f()\n  return\nend"), "{(func f () {(return)})}");
}

#[test]
fn expression_body_is_flagged() {
    let program = parse_ok("func (x) -> x * 2");
    let NodeKind::FuncDef {
        name, is_expr_body, ..
    } = &program.as_block().unwrap()[0].kind
    else {
        panic!("expected func");
    };
    assert_eq!(*name, None);
    assert!(*is_expr_body);
}

#[test]
fn separators_and_blank_lines() {
    assert_eq!(render("\n1;;2\n\n"), "{1; 2}");
}

#[test]
fn node_spans_cover_their_text() {
    let program = parse_ok("var abc = 1 + 22");
    let assign = &program.as_block().unwrap()[0];
    assert_eq!(assign.span, Span::new(0, 16));
    let NodeKind::VarAssign { value, .. } = &assign.kind else {
        panic!("expected assignment");
    };
    assert_eq!(value.span, Span::new(10, 16));

    assert_eq!(parse_ok("f(1)").as_block().unwrap()[0].span, Span::new(0, 4));
    assert_eq!(parse_ok("[1]").as_block().unwrap()[0].span, Span::new(0, 3));
    assert_eq!(parse_ok("1\n22").span, Span::new(0, 4));
}

#[test]
fn parenthesized_expression_span_includes_parens() {
    let program = parse_ok("(a + b) * 2");
    let NodeKind::BinaryOp { left, .. } = &program.as_block().unwrap()[0].kind else {
        panic!("expected binary op");
    };
    assert_eq!(left.span, Span::new(0, 7));
    assert_eq!(left.to_string(), "(a + b)");
    assert_eq!(parse_ok("((1))").as_block().unwrap()[0].span, Span::new(0, 5));
}

#[test]
fn block_if_span_includes_end() {
    let program = parse_ok("if 1 then\n2\nend");
    assert_eq!(program.as_block().unwrap()[0].span, Span::new(0, 15));
}

#[test]
fn deep_nesting_does_not_overflow() {
    let depth = 2_000;
    let source = format!("{}1{}", "(".repeat(depth), ")".repeat(depth));
    assert_eq!(render(&source), "{1}");
}

proptest! {
    #[test]
    fn additive_chains_fold_left(
        first in 0u32..1000,
        rest in prop::collection::vec((prop::bool::ANY, 0u32..1000), 0..8),
    ) {
        let mut source = first.to_string();
        let mut expected = first.to_string();
        for (plus, n) in &rest {
            let op = if *plus { "+" } else { "-" };
            source = format!("{source} {op} {n}");
            expected = format!("({expected} {op} {n})");
        }
        prop_assert_eq!(render(&source), format!("{{{expected}}}"));
    }
}
