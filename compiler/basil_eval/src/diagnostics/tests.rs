use pretty_assertions::assert_eq;

use super::*;

#[test]
fn empty_stack_captures_program_frame() {
    let stack = CallStack::default();
    let backtrace = stack.capture(Span::new(4, 5));
    assert_eq!(
        backtrace.frames(),
        &[BacktraceFrame {
            context_name: "<program>".into(),
            span: Span::new(4, 5),
        }]
    );
}

#[test]
fn frames_are_reported_in_caller_context() {
    let mut stack = CallStack::default();
    stack.push(CallFrame::new("outer", Span::new(0, 7))).unwrap();
    stack.push(CallFrame::new("inner", Span::new(20, 27))).unwrap();

    let names: Vec<_> = stack
        .capture(Span::new(40, 41))
        .frames()
        .iter()
        .map(|f| (f.context_name.clone(), f.span))
        .collect();
    assert_eq!(
        names,
        vec![
            ("<program>".to_string(), Span::new(0, 7)),
            ("outer".to_string(), Span::new(20, 27)),
            ("inner".to_string(), Span::new(40, 41)),
        ]
    );
}

#[test]
fn push_pop_tracks_depth() {
    let mut stack = CallStack::default();
    stack.push(CallFrame::new("f", Span::DUMMY)).unwrap();
    assert_eq!(stack.depth(), 1);
    stack.pop();
    assert_eq!(stack.depth(), 0);
}

#[test]
fn depth_limit_is_enforced() {
    let mut stack = CallStack::new(Some(2));
    stack.push(CallFrame::new("f", Span::DUMMY)).unwrap();
    stack.push(CallFrame::new("f", Span::DUMMY)).unwrap();

    let err = stack.push(CallFrame::new("f", Span::new(3, 6))).unwrap_err();
    assert!(err.is_internal());
    assert_eq!(err.span, Span::new(3, 6));
    assert_eq!(stack.depth(), 2);
}
