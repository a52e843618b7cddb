mod errors;
mod parser;

use basil_ir::{Node, SourceFile};

use crate::{parse, ParseError};

fn try_parse_source(source: &str) -> Result<Node, ParseError> {
    let tokens = basil_lexer::tokenize(&SourceFile::new("<test>", source)).unwrap();
    parse(&tokens)
}

fn parse_ok(source: &str) -> Node {
    match try_parse_source(source) {
        Ok(node) => node,
        Err(err) => panic!("parse of {source:?} failed: {err} at {:?}", err.span),
    }
}

/// S-expression form of the whole program.
fn render(source: &str) -> String {
    parse_ok(source).to_string()
}

fn parse_err(source: &str) -> ParseError {
    match try_parse_source(source) {
        Ok(node) => panic!("expected {source:?} to fail, got {node}"),
        Err(err) => err,
    }
}
