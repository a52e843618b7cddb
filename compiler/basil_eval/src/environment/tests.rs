use std::rc::Rc;

use basil_ir::{Node, NodeKind, Span};
use pretty_assertions::assert_eq;

use super::*;
use crate::FunctionValue;

#[test]
fn define_and_lookup() {
    let mut scope = Scope::new();
    scope.define("x", Value::Number(42.0));
    assert_eq!(scope.lookup("x"), Some(Value::Number(42.0)));
    assert_eq!(scope.lookup("y"), None);
}

#[test]
fn lookup_walks_parents() {
    let global = Environment::default();
    global.borrow_mut().define("x", Value::Number(1.0));
    let middle = LocalScope::new(Scope::with_parent(global.clone()));
    let inner = Scope::with_parent(middle);

    assert_eq!(inner.lookup("x"), Some(Value::Number(1.0)));
    assert_eq!(inner.lookup("y"), None);
}

#[test]
fn inner_binding_shadows_outer() {
    let global = Environment::default();
    global.borrow_mut().define("x", Value::Number(1.0));
    let mut inner = Scope::with_parent(global.clone());
    inner.define("x", Value::Number(2.0));

    assert_eq!(inner.lookup("x"), Some(Value::Number(2.0)));
    assert_eq!(global.borrow().lookup("x"), Some(Value::Number(1.0)));
}

#[test]
fn parent_updates_are_visible_through_shared_handle() {
    let global = Environment::default();
    let inner = Scope::with_parent(global.clone());
    global.borrow_mut().define("late", Value::Number(7.0));
    assert_eq!(inner.lookup("late"), Some(Value::Number(7.0)));
}

#[test]
fn handles_compare_by_identity() {
    let a = Environment::default();
    let b = a.clone();
    let c = Environment::default();
    assert!(a.ptr_eq(&b));
    assert!(!a.ptr_eq(&c));
}

/// A named function bound in the frame it captures.
fn bind_self_capturing(frame: &Environment, name: &str) -> Value {
    let func = Value::Function(Rc::new(FunctionValue {
        name: Some(name.to_owned()),
        params: Vec::new(),
        body: Node::new(NodeKind::Number(1.0), Span::DUMMY),
        is_expr_body: true,
        env: frame.clone(),
    }));
    frame.borrow_mut().define(name, func.clone());
    func
}

#[test]
fn finished_frame_with_local_functions_is_freed() {
    let global = Environment::default();
    let frame = LocalScope::new(Scope::with_parent(global));
    drop(bind_self_capturing(&frame, "f"));
    drop(bind_self_capturing(&frame, "g"));
    let alias = frame.borrow().lookup("f").unwrap();
    frame.borrow_mut().define("alias", alias);
    let weak = Rc::downgrade(&frame.0);

    frame.release_if_unreachable();
    drop(frame);
    assert!(weak.upgrade().is_none());
}

#[test]
fn escaped_function_keeps_its_frame() {
    let global = Environment::default();
    let frame = LocalScope::new(Scope::with_parent(global));
    frame.borrow_mut().define("n", Value::Number(5.0));
    let escaped = bind_self_capturing(&frame, "f");

    frame.release_if_unreachable();
    drop(frame);

    let Value::Function(func) = &escaped else {
        unreachable!()
    };
    assert_eq!(func.env.borrow().lookup("n"), Some(Value::Number(5.0)));
    assert!(func.env.borrow().lookup("f").is_some());
}

#[test]
fn frame_shared_with_a_live_child_is_kept() {
    let frame = LocalScope::new(Scope::new());
    frame.borrow_mut().define("n", Value::Number(1.0));
    drop(bind_self_capturing(&frame, "f"));
    let child = LocalScope::new(Scope::with_parent(frame.clone()));

    frame.release_if_unreachable();
    assert_eq!(child.borrow().lookup("n"), Some(Value::Number(1.0)));
}
