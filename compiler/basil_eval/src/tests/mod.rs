mod builtins_tests;

use basil_ir::{Node, SourceFile, Span};

use crate::{scripted_handler, EvalError, Interpreter, Value};

fn parse_source(source: &str) -> Node {
    let tokens = basil_lexer::tokenize(&SourceFile::new("<test>", source)).unwrap();
    basil_parse::parse(&tokens).unwrap()
}

/// Run `source` with `input` queued for `input()`. Returns the program
/// result and everything printed.
fn run_with_input(source: &str, input: &[&str]) -> (Result<Option<Value>, EvalError>, String) {
    let program = parse_source(source);
    let io = scripted_handler(input.iter().copied());
    let mut interpreter = Interpreter::builder().io_handler(io.clone()).build();
    let result = interpreter.run(&program);
    (result, io.get_output())
}

fn eval_ok(source: &str) -> Value {
    match run_with_input(source, &[]).0 {
        Ok(Some(value)) => value,
        Ok(None) => panic!("{source:?} produced no value"),
        Err(err) => panic!("{source:?} failed: {err} at {:?}", err.span),
    }
}

/// Display form of the program result.
fn eval_display(source: &str) -> String {
    eval_ok(source).to_string()
}

fn eval_err(source: &str) -> EvalError {
    match run_with_input(source, &[]).0 {
        Ok(value) => panic!("expected {source:?} to fail, got {value:?}"),
        Err(err) => err,
    }
}

/// The source text an error span covers.
fn span_text(source: &str, span: Span) -> &str {
    &source[span.to_range()]
}
