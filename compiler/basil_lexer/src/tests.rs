use pretty_assertions::assert_eq;
use proptest::prelude::*;

use super::*;

fn lex(text: &str) -> Result<TokenList, LexError> {
    tokenize(&SourceFile::new("<stdin>", text))
}

fn kinds(text: &str) -> Vec<TokenKind> {
    lex(text).unwrap().kinds()
}

fn ident(name: &str) -> TokenKind {
    TokenKind::Ident(name.to_string())
}

#[test]
fn arithmetic_expression() {
    assert_eq!(
        kinds("-10 * 3 + (2 + 1.0) / 4"),
        vec![
            TokenKind::Minus,
            TokenKind::Int(10),
            TokenKind::Star,
            TokenKind::Int(3),
            TokenKind::Plus,
            TokenKind::LParen,
            TokenKind::Int(2),
            TokenKind::Plus,
            TokenKind::float(1.0),
            TokenKind::RParen,
            TokenKind::Slash,
            TokenKind::Int(4),
            TokenKind::Eof,
        ]
    );
}

#[test]
fn empty_source_is_just_eof() {
    let tokens = lex("").unwrap();
    assert_eq!(tokens.kinds(), vec![TokenKind::Eof]);
    assert_eq!(tokens.get(0).unwrap().span, Span::point(0));
}

#[test]
fn eof_sits_at_final_offset() {
    let tokens = lex("1 + 2  ").unwrap();
    assert_eq!(tokens.as_slice().last().unwrap().span, Span::point(7));
}

#[test]
fn keywords_require_the_whole_word() {
    assert_eq!(
        kinds("var variable end_x end"),
        vec![
            TokenKind::Keyword(Keyword::Var),
            ident("variable"),
            ident("end_x"),
            TokenKind::Keyword(Keyword::End),
            TokenKind::Eof,
        ]
    );
}

#[test]
fn two_char_operators_fall_back_to_one_char() {
    assert_eq!(
        kinds("== = != <= < >= > -> -"),
        vec![
            TokenKind::EqEq,
            TokenKind::Eq,
            TokenKind::NotEq,
            TokenKind::LtEq,
            TokenKind::Lt,
            TokenKind::GtEq,
            TokenKind::Gt,
            TokenKind::Arrow,
            TokenKind::Minus,
            TokenKind::Eof,
        ]
    );
}

#[test]
fn semicolon_and_newline_are_both_newline_and_not_collapsed() {
    assert_eq!(
        kinds("1;\n\n2"),
        vec![
            TokenKind::Int(1),
            TokenKind::Newline,
            TokenKind::Newline,
            TokenKind::Newline,
            TokenKind::Int(2),
            TokenKind::Eof,
        ]
    );
}

#[test]
fn number_consumes_at_most_one_dot() {
    let err = lex("1.2.3").unwrap_err();
    assert_eq!(err.kind, LexErrorKind::IllegalCharacter('.'));
    assert_eq!(err.span, Span::new(3, 4));
}

#[test]
fn trailing_dot_makes_a_float() {
    assert_eq!(kinds("1."), vec![TokenKind::float(1.0), TokenKind::Eof]);
}

#[test]
fn number_spans() {
    let tokens = lex("12 3.75").unwrap();
    assert_eq!(tokens.get(0).unwrap().span, Span::new(0, 2));
    assert_eq!(tokens.get(1).unwrap().span, Span::new(3, 7));
}

#[test]
fn string_escapes_are_resolved() {
    assert_eq!(
        kinds(r#""text \"x\"""#),
        vec![TokenKind::Str("text \"x\"".into()), TokenKind::Eof]
    );
    assert_eq!(
        kinds(r#""a\nb\tc\\""#),
        vec![TokenKind::Str("a\nb\tc\\".into()), TokenKind::Eof]
    );
}

#[test]
fn string_span_includes_quotes() {
    let tokens = lex(r#"var s = "Text""#).unwrap();
    assert_eq!(tokens.get(3).unwrap().span, Span::new(8, 14));
}

#[test]
fn unterminated_string_spans_to_end() {
    let err = lex(r#"var s = "abc"#).unwrap_err();
    assert_eq!(err.kind, LexErrorKind::UnterminatedString);
    assert_eq!(err.span, Span::new(8, 12));
}

#[test]
fn unterminated_string_ending_in_backslash() {
    let err = lex(r#""abc\"#).unwrap_err();
    assert_eq!(err.kind, LexErrorKind::UnterminatedString);
}

#[test]
fn unknown_escape_is_an_error() {
    let err = lex(r#""a\qb""#).unwrap_err();
    assert_eq!(err.kind, LexErrorKind::InvalidEscape('q'));
    assert_eq!(err.span, Span::new(2, 4));
    assert!(err.is_illegal_character());
}

#[test]
fn illegal_character_has_exact_span() {
    let err = lex("1 + @").unwrap_err();
    assert_eq!(err.kind, LexErrorKind::IllegalCharacter('@'));
    assert_eq!(err.span, Span::new(4, 5));
    assert_eq!(err.to_string(), "'@'");
}

#[test]
fn illegal_multibyte_character() {
    let err = lex("x = é").unwrap_err();
    assert_eq!(err.kind, LexErrorKind::IllegalCharacter('é'));
    assert_eq!(err.span, Span::new(4, 6));
}

#[test]
fn bang_needs_equals() {
    let err = lex("1 ! 2").unwrap_err();
    assert_eq!(err.kind, LexErrorKind::ExpectedEqualsAfterBang);
    assert_eq!(err.span, Span::new(2, 4));
    assert_eq!(err.to_string(), "'=' (after '!')");
    assert!(!err.is_illegal_character());
}

#[test]
fn lists_and_calls() {
    assert_eq!(
        kinds("append([1], f(x))"),
        vec![
            ident("append"),
            TokenKind::LParen,
            TokenKind::LBracket,
            TokenKind::Int(1),
            TokenKind::RBracket,
            TokenKind::Comma,
            ident("f"),
            TokenKind::LParen,
            ident("x"),
            TokenKind::RParen,
            TokenKind::RParen,
            TokenKind::Eof,
        ]
    );
}

#[test]
fn power_and_tabs() {
    assert_eq!(
        kinds("2\t^\t8"),
        vec![
            TokenKind::Int(2),
            TokenKind::Caret,
            TokenKind::Int(8),
            TokenKind::Eof
        ]
    );
}

proptest! {
    #[test]
    fn integer_literals_lex_to_their_value(n in 0u64..1_000_000_000) {
        prop_assert_eq!(kinds(&n.to_string()), vec![TokenKind::Int(n), TokenKind::Eof]);
    }

    #[test]
    fn identifiers_lex_as_one_token(name in "[a-z_][a-z0-9_]{0,12}") {
        let expected = match Keyword::lookup(&name) {
            Some(kw) => TokenKind::Keyword(kw),
            None => TokenKind::Ident(name.clone()),
        };
        prop_assert_eq!(kinds(&name), vec![expected, TokenKind::Eof]);
    }

    #[test]
    fn printable_strings_survive_lexing(body in "[a-zA-Z0-9 ,.!?]{0,20}") {
        let text = format!("\"{body}\"");
        prop_assert_eq!(kinds(&text), vec![TokenKind::Str(body), TokenKind::Eof]);
    }
}
