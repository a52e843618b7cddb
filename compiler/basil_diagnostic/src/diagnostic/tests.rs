use pretty_assertions::assert_eq;

use super::*;

#[test]
fn syntax_error_renders_location_then_excerpt() {
    let source = SourceFile::new("<stdin>", "4 *");
    let diag = Diagnostic::syntax("Expected int or float", Span::point(3), &source);
    assert_eq!(
        diag.render(),
        "Invalid Syntax: Expected int or float\nFile <stdin>, line 1\n\n4 *\n   ^"
    );
}

#[test]
fn runtime_error_renders_traceback_outermost_first() {
    let source = SourceFile::new("demo.bsl", "func f(x) -> x / 0\nf(1)");
    let diag = Diagnostic::runtime("Division by zero", Span::new(17, 18), &source)
        .with_traceback(vec![
            TraceFrame::new("<program>", Span::new(19, 23)),
            TraceFrame::new("f", Span::new(17, 18)),
        ]);
    assert_eq!(
        diag.render(),
        "Traceback (most recent call last):\n \
         File demo.bsl, line 2, in <program>\n \
         File demo.bsl, line 1, in f\n\
         Runtime Error: Division by zero\n\n\
         func f(x) -> x / 0\n                 ^"
    );
}

#[test]
fn kind_titles() {
    assert_eq!(DiagnosticKind::IllegalCharacter.to_string(), "Illegal Character");
    assert_eq!(DiagnosticKind::ExpectedCharacter.title(), "Expected Character");
    assert_eq!(DiagnosticKind::Internal.title(), "Internal Error");
}

#[test]
fn internal_points_at_end_of_source() {
    let source = SourceFile::new("<stdin>", "abc");
    let diag = Diagnostic::internal("stack exhausted", &source);
    assert_eq!(diag.span, Span::point(3));
    assert_eq!(diag.header(), "Internal Error: stack exhausted");
}

#[test]
fn line_number_is_one_based() {
    let source = SourceFile::new("<stdin>", "1\n2\n@");
    let diag = Diagnostic::new(
        DiagnosticKind::IllegalCharacter,
        "'@'",
        Span::new(4, 5),
        &source,
    );
    assert_eq!(diag.line_number(), 3);
}
