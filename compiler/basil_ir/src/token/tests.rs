use pretty_assertions::assert_eq;

use super::*;

#[test]
fn keyword_lookup_is_exact() {
    assert_eq!(Keyword::lookup("var"), Some(Keyword::Var));
    assert_eq!(Keyword::lookup("elif"), Some(Keyword::Elif));
    assert_eq!(Keyword::lookup("variable"), None);
    assert_eq!(Keyword::lookup("End"), None);
}

#[test]
fn keyword_round_trips_through_as_str() {
    for word in [
        "var", "and", "or", "not", "if", "then", "elif", "else", "for", "to", "step", "while",
        "func", "end", "return", "continue", "break",
    ] {
        let kw = Keyword::lookup(word);
        assert_eq!(kw.map(Keyword::as_str), Some(word));
    }
}

#[test]
fn number_value_of_literals() {
    assert_eq!(TokenKind::Int(42).number_value(), Some(42.0));
    assert_eq!(TokenKind::float(1.5).number_value(), Some(1.5));
    assert_eq!(TokenKind::Plus.number_value(), None);
}

#[test]
fn debug_uses_token_type_names() {
    let mut list = TokenList::new();
    list.push(Token::new(TokenKind::Int(1), Span::new(0, 1)));
    list.push(Token::new(TokenKind::Plus, Span::new(2, 3)));
    list.push(Token::new(TokenKind::float(2.5), Span::new(4, 7)));
    list.push(Token::new(TokenKind::Eof, Span::point(7)));
    assert_eq!(format!("{list:?}"), "[INT:1, PLUS, FLOAT:2.5, EOF]");
    assert_eq!(list.len(), 4);
}

#[test]
fn is_keyword_matches_only_that_keyword() {
    let kind = TokenKind::Keyword(Keyword::Then);
    assert!(kind.is_keyword(Keyword::Then));
    assert!(!kind.is_keyword(Keyword::Else));
    assert!(!TokenKind::Ident("then".into()).is_keyword(Keyword::Then));
}
