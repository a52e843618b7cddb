//! Progress tracking for error selection.
//!
//! When a production fails, the error worth reporting is the one from the
//! alternative that got furthest. A sub-parse that failed without consuming
//! anything says little about what went wrong, so the enclosing production
//! replaces its error with a list of everything that could have started
//! there. A sub-parse that consumed tokens keeps its own, more specific,
//! error.

use crate::{ParseError, Parser};

/// Indicates whether parsing made progress (consumed tokens).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Progress {
    /// Parser consumed one or more tokens before the result.
    Made,
    /// Parser did not consume any tokens.
    None,
}

impl Progress {
    /// Progress between two cursor positions.
    pub fn between(before: usize, after: usize) -> Self {
        if after > before {
            Progress::Made
        } else {
            Progress::None
        }
    }

    pub fn made(self) -> bool {
        matches!(self, Progress::Made)
    }
}

impl Parser<'_> {
    /// Run `parse`; if it fails without consuming anything, report
    /// "Expected `expected`" at the current token instead.
    pub(crate) fn with_fallback<T>(
        &mut self,
        expected: &str,
        parse: impl FnOnce(&mut Self) -> Result<T, ParseError>,
    ) -> Result<T, ParseError> {
        let before = self.position();
        parse(self).map_err(|err| {
            if Progress::between(before, self.position()).made() {
                err
            } else {
                ParseError::expected(self.current_span(), expected)
            }
        })
    }
}
