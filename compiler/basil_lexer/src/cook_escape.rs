//! Escape processing for string literals.
//!
//! Valid escapes: `\n` `\t` `\"` `\\`. Anything else is an error spanning
//! the backslash and the escaped character.

use basil_ir::Span;

use crate::lex_error::LexError;

#[inline]
fn resolve_escape(c: char) -> Option<char> {
    match c {
        'n' => Some('\n'),
        't' => Some('\t'),
        '"' => Some('"'),
        '\\' => Some('\\'),
        _ => None,
    }
}

/// Unescape a string literal's content (between the `"`s).
///
/// `base_offset` is the byte offset of `content` in the source, used to
/// position escape errors.
#[allow(
    clippy::cast_possible_truncation,
    reason = "source offsets are bounded by u32::MAX"
)]
pub(crate) fn unescape_string(content: &str, base_offset: u32) -> Result<String, LexError> {
    if !content.contains('\\') {
        return Ok(content.to_owned());
    }

    let mut result = String::with_capacity(content.len());
    let mut chars = content.char_indices();

    while let Some((i, c)) = chars.next() {
        if c != '\\' {
            result.push(c);
            continue;
        }
        // The raw-token regex guarantees a character follows every backslash
        // inside a terminated string.
        let Some((j, esc)) = chars.next() else {
            let at = base_offset + i as u32;
            return Err(LexError::unterminated_string(Span::new(at, at + 1)));
        };
        match resolve_escape(esc) {
            Some(resolved) => result.push(resolved),
            None => {
                let start = base_offset + i as u32;
                let end = base_offset + (j + esc.len_utf8()) as u32;
                return Err(LexError::invalid_escape(Span::new(start, end), esc));
            }
        }
    }

    Ok(result)
}
