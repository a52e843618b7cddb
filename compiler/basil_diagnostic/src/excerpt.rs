//! Caret excerpts: the offending source lines with `^` under the span.

use basil_ir::{SourceFile, Span};

/// Render every line `span` touches, each followed by a caret run.
///
/// The first line's carets start at the span's column and the last line's
/// stop at its end column; lines in between are underlined fully. A
/// zero-width span still gets one caret. Tabs print as single spaces so
/// carets stay aligned with character columns.
pub fn caret_excerpt(source: &SourceFile, span: Span) -> String {
    let (start, mut end) = source.span_positions(span);

    // A span that ends right after a newline ends on the previous line.
    if end.line > start.line && end.column == 0 {
        end.line -= 1;
        end.column = char_count(source.line_text(end.line));
    }

    let mut lines = Vec::new();
    for line in start.line..=end.line {
        let text = source.line_text(line);
        let col_start = if line == start.line { start.column } else { 0 };
        let col_end = if line == end.line {
            end.column
        } else {
            char_count(text)
        };
        let width = col_end.saturating_sub(col_start).max(1);

        lines.push(text.replace('\t', " "));
        lines.push(format!(
            "{}{}",
            " ".repeat(col_start as usize),
            "^".repeat(width as usize)
        ));
    }
    lines.join("\n")
}

fn char_count(text: &str) -> u32 {
    u32::try_from(text.chars().count()).unwrap_or(u32::MAX)
}
