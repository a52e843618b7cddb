//! Grammar productions.
//!
//! Statement-level rules live here; expressions are in [`expr`].
//!
//! ```text
//! statements : NEWLINE* statement (NEWLINE+ statement)* NEWLINE*
//! statement  : 'return' expr? | 'continue' | 'break' | expr
//! ```

mod expr;

use basil_ir::{Keyword, Node, NodeKind};

use crate::error::STATEMENT_START;
use crate::{ParseError, Parser};

impl Parser<'_> {
    /// A newline-separated statement list, as a `Block`.
    ///
    /// At least one statement is required. After each run of newlines the
    /// next statement is attempted speculatively; if it fails, the list ends
    /// just after the newlines and the caller sees whatever token stopped it.
    pub(crate) fn statements(&mut self) -> Result<Node, ParseError> {
        self.skip_newlines();
        let first = self.statement()?;
        let start = first.span;
        let mut end = first.span;
        let mut stmts = vec![first];

        while self.skip_newlines() > 0 {
            let Some(stmt) = self.try_parse(Self::statement) else {
                break;
            };
            end = stmt.span;
            stmts.push(stmt);
        }

        Ok(Node::new(NodeKind::Block(stmts), start.merge(end)))
    }

    pub(crate) fn statement(&mut self) -> Result<Node, ParseError> {
        let start = self.current_span();

        if self.check_keyword(Keyword::Return) {
            self.advance();
            let value = if self.can_start_expr() {
                Some(Box::new(self.expr()?))
            } else {
                None
            };
            let span = value.as_ref().map_or(start, |v| start.merge(v.span));
            return Ok(Node::new(NodeKind::Return(value), span));
        }

        if self.check_keyword(Keyword::Continue) {
            self.advance();
            return Ok(Node::new(NodeKind::Continue, start));
        }

        if self.check_keyword(Keyword::Break) {
            self.advance();
            return Ok(Node::new(NodeKind::Break, start));
        }

        self.with_fallback(STATEMENT_START, Self::expr)
    }
}
