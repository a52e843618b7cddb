//! Source text and line/column resolution.
//!
//! A [`SourceFile`] owns the name shown in diagnostics (`<stdin>`, a file
//! path) together with the text. Offsets become [`Position`]s through a
//! pre-computed [`LineOffsetTable`], so rendering a traceback with many
//! frames does not rescan the text once per frame.

use std::fmt;
use std::rc::Rc;

use crate::Span;

/// A resolved location: byte offset plus 0-based line and column.
///
/// Columns count characters, not bytes.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
pub struct Position {
    pub offset: u32,
    pub line: u32,
    pub column: u32,
}

impl Position {
    /// Step past `ch`.
    ///
    /// The offset always grows. A newline moves to column 0 of the next
    /// line; any other character moves one column right.
    #[allow(
        clippy::cast_possible_truncation,
        reason = "len_utf8 is at most 4"
    )]
    pub fn advance(&mut self, ch: char) {
        self.offset += ch.len_utf8() as u32;
        if ch == '\n' {
            self.line += 1;
            self.column = 0;
        } else {
            self.column += 1;
        }
    }
}

/// Byte offset of every line start, for O(log L) line lookup.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LineOffsetTable {
    /// `offsets[0] == 0`; `offsets[n]` is the byte after the `n`th newline.
    offsets: Vec<u32>,
}

impl LineOffsetTable {
    #[allow(
        clippy::cast_possible_truncation,
        reason = "source files are bounded by u32::MAX bytes"
    )]
    pub fn build(text: &str) -> Self {
        let mut offsets = vec![0u32];
        for (i, byte) in text.bytes().enumerate() {
            if byte == b'\n' {
                offsets.push((i + 1) as u32);
            }
        }
        LineOffsetTable { offsets }
    }

    /// 0-based line containing `offset`.
    #[allow(
        clippy::cast_possible_truncation,
        reason = "line count is bounded by the byte count"
    )]
    pub fn line_index(&self, offset: u32) -> u32 {
        let idx = match self.offsets.binary_search(&offset) {
            Ok(exact) => exact,
            Err(insert) => insert.saturating_sub(1),
        };
        idx as u32
    }

    /// Byte offset where 0-based `line` starts.
    pub fn line_start(&self, line: u32) -> Option<u32> {
        self.offsets.get(line as usize).copied()
    }
}

/// Named source text, cheap to clone.
#[derive(Clone, PartialEq, Eq)]
pub struct SourceFile {
    name: Rc<str>,
    text: Rc<str>,
    lines: Rc<LineOffsetTable>,
}

impl SourceFile {
    pub fn new(name: impl Into<Rc<str>>, text: impl Into<Rc<str>>) -> Self {
        let text = text.into();
        let lines = Rc::new(LineOffsetTable::build(&text));
        SourceFile {
            name: name.into(),
            text,
            lines,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Length of the text in bytes, as a span offset.
    pub fn end_offset(&self) -> u32 {
        u32::try_from(self.text.len()).unwrap_or(u32::MAX)
    }

    /// Resolve a byte offset to line and column.
    ///
    /// Offsets past the end clamp to the end of the text.
    pub fn position(&self, offset: u32) -> Position {
        let offset = offset.min(self.end_offset());
        let line = self.lines.line_index(offset);
        let line_start = self.lines.line_start(line).unwrap_or(0);
        let mut pos = Position {
            offset: line_start,
            line,
            column: 0,
        };
        let slice = self
            .text
            .get(line_start as usize..offset as usize)
            .unwrap_or_default();
        for ch in slice.chars() {
            pos.advance(ch);
        }
        pos
    }

    /// Start and end positions of `span`.
    pub fn span_positions(&self, span: Span) -> (Position, Position) {
        (self.position(span.start), self.position(span.end))
    }

    /// Text of 0-based `line`, without its trailing newline.
    pub fn line_text(&self, line: u32) -> &str {
        let Some(start) = self.lines.line_start(line) else {
            return "";
        };
        let end = self
            .lines
            .line_start(line + 1)
            .map_or(self.text.len(), |next| next as usize);
        self.text
            .get(start as usize..end)
            .unwrap_or_default()
            .trim_end_matches(['\n', '\r'])
    }

    /// The source text covered by `span`.
    pub fn slice(&self, span: Span) -> &str {
        self.text.get(span.to_range()).unwrap_or_default()
    }
}

impl fmt::Debug for SourceFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SourceFile")
            .field("name", &self.name)
            .field("len", &self.text.len())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests;
