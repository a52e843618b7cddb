//! Parser snapshots for speculative parsing.
//!
//! The grammar is LL(1) almost everywhere. The one exception is a newline
//! inside a statement list: it either separates two statements or ends the
//! list (`end`, `elif`, `else`, or anything else the enclosing production
//! handles). [`Parser::try_parse`] settles that by attempting a statement
//! and rolling back if it fails.
//!
//! Prefer a plain token check whenever one token of lookahead decides.

use tracing::trace;

use crate::{ParseError, Parser};

/// Saved parser position.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ParserSnapshot {
    cursor_pos: usize,
}

impl Parser<'_> {
    pub fn snapshot(&self) -> ParserSnapshot {
        ParserSnapshot {
            cursor_pos: self.position(),
        }
    }

    pub fn restore(&mut self, snapshot: ParserSnapshot) {
        trace!(from = self.position(), to = snapshot.cursor_pos, "restore");
        self.cursor.set_position(snapshot.cursor_pos);
    }

    /// Run `parse` speculatively.
    ///
    /// On success the tokens stay consumed. On failure the parser is rewound
    /// to where it started, the error is discarded and `None` is returned.
    pub fn try_parse<T>(
        &mut self,
        parse: impl FnOnce(&mut Self) -> Result<T, ParseError>,
    ) -> Option<T> {
        let snapshot = self.snapshot();
        match parse(self) {
            Ok(value) => Some(value),
            Err(_) => {
                self.restore(snapshot);
                None
            }
        }
    }
}
