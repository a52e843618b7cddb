use pretty_assertions::assert_eq;

use super::*;

#[test]
fn advance_moves_column_then_wraps_on_newline() {
    let mut pos = Position::default();
    pos.advance('a');
    pos.advance('b');
    assert_eq!(
        pos,
        Position {
            offset: 2,
            line: 0,
            column: 2
        }
    );
    pos.advance('\n');
    assert_eq!(
        pos,
        Position {
            offset: 3,
            line: 1,
            column: 0
        }
    );
}

#[test]
fn advance_counts_bytes_for_offset_and_chars_for_column() {
    let mut pos = Position::default();
    pos.advance('é');
    assert_eq!(pos.offset, 2);
    assert_eq!(pos.column, 1);
}

#[test]
fn line_table_finds_line_of_each_offset() {
    let table = LineOffsetTable::build("var a = 1\nvar b = 2\n\nb");
    assert_eq!(table.line_index(0), 0);
    assert_eq!(table.line_index(9), 0);
    assert_eq!(table.line_index(10), 1);
    assert_eq!(table.line_index(20), 2);
    assert_eq!(table.line_index(21), 3);
    assert_eq!(table.line_start(3), Some(21));
    assert_eq!(table.line_start(4), None);
}

#[test]
fn position_resolves_line_and_column() {
    let file = SourceFile::new("<stdin>", "var x = 1\n  x + y");
    assert_eq!(
        file.position(16),
        Position {
            offset: 16,
            line: 1,
            column: 6
        }
    );
}

#[test]
fn position_clamps_past_end() {
    let file = SourceFile::new("<stdin>", "1 +");
    assert_eq!(file.position(99).offset, 3);
    assert_eq!(file.position(99).column, 3);
}

#[test]
fn line_text_strips_terminators() {
    let file = SourceFile::new("script.bsl", "first\r\nsecond\nthird");
    assert_eq!(file.line_text(0), "first");
    assert_eq!(file.line_text(1), "second");
    assert_eq!(file.line_text(2), "third");
    assert_eq!(file.line_text(3), "");
}

#[test]
fn slice_returns_span_text() {
    let file = SourceFile::new("<stdin>", "add(1, 3)");
    assert_eq!(file.slice(Span::new(0, 3)), "add");
    assert_eq!(file.name(), "<stdin>");
}
