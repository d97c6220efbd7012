//! Comment Interleaver
//!
//! Comments live outside the tree, ordered by position. Before each
//! statement, word or closing token the printer flushes every comment
//! positioned before it: a comment that starts its own line gets a line
//! of its own, anything else trails the code already on the line.
//!
//! Trailing comments on consecutive one-line statements are aligned to
//! one column past the longest statement of the run.

use std::io::{self, Write};

use crate::ast::{Comment, Pos, Stmt};

use super::sink::ByteCounter;
use super::Printer;

#[derive(Debug, Clone, Copy)]
pub(super) struct CommentQueue<'f> {
    pending: &'f [Comment],
}

impl<'f> CommentQueue<'f> {
    pub fn new(comments: &'f [Comment]) -> Self {
        Self { pending: comments }
    }

    fn peek(&self) -> Option<&'f Comment> {
        self.pending.first()
    }

    fn pop(&mut self) {
        if !self.pending.is_empty() {
            self.pending = &self.pending[1..];
        }
    }

    /// Whether a comment sits after `pos`, before `npos` (if set) and no
    /// later than `nline`, i.e. trails the code starting at `pos`.
    pub fn has_inline(&self, pos: Pos, npos: Pos, nline: Pos) -> bool {
        for c in self.pending {
            if c.hash > nline {
                return false;
            }
            if c.hash > pos && (!npos.is_valid() || c.hash < npos) {
                return true;
            }
        }
        false
    }
}

/// Alignment shared by a run of statements with trailing comments.
#[derive(Debug, Default)]
pub(super) struct AlignRun {
    /// Longest rendered statement in the run
    width: usize,
    /// Statements of the run not yet printed
    remaining: usize,
}

impl<'f, W: Write> Printer<'f, W> {
    /// Flush comments positioned before `pos`, or all of them when `pos`
    /// is unset.
    pub(super) fn comments_up_to(&mut self, pos: Pos) -> io::Result<()> {
        while let Some(c) = self.comments.peek() {
            if pos.is_valid() && c.hash >= pos {
                break;
            }
            self.comments.pop();
            if self.lines.index() == 0 {
                // first thing in the file
            } else if c.hash >= self.lines.next() {
                self.newlines(c.hash)?;
            } else {
                self.spaces(self.comment_padding + 1)?;
                // padding is computed for one comment at a time
                self.comment_padding = 0;
            }
            self.lines.advance_to(c.hash);
            self.write_byte(b'#')?;
            self.write_str(&c.text)?;
        }
        Ok(())
    }

    /// Called right after `stmts[i]` is printed: set the padding for its
    /// trailing comment, if any.
    pub(super) fn align_trailing_comment(
        &mut self,
        stmts: &'f [Stmt],
        i: usize,
        spans_lines: bool,
        run: &mut AlignRun,
    ) -> io::Result<()> {
        let s = &stmts[i];
        let npos = stmts.get(i + 1).map_or(Pos::NONE, Stmt::pos);
        if spans_lines || !self.comments.has_inline(s.pos(), npos, self.lines.next()) {
            *run = AlignRun::default();
            self.comment_padding = 0;
            return Ok(());
        }
        if run.remaining == 0 {
            *run = self.measure_run(&stmts[i..])?;
            if run.remaining <= 1 {
                // nothing to align with
                *run = AlignRun::default();
                self.comment_padding = 0;
                return Ok(());
            }
        }
        self.comment_padding = run.width.saturating_sub(self.stmt_len(s)?);
        run.remaining -= 1;
        Ok(())
    }

    /// Look ahead from the statement just printed through the following
    /// ones that each sit on the next line, fit on it, and carry a
    /// trailing comment.
    fn measure_run(&mut self, follow: &'f [Stmt]) -> io::Result<AlignRun> {
        let mut ahead = self.lines;
        let mut run = AlignRun::default();
        for (j, s) in follow.iter().enumerate() {
            let pos = s.pos();
            let npos = follow.get(j + 1).map_or(Pos::NONE, Stmt::pos);
            if ahead.is_past(pos) || !self.comments.has_inline(pos, npos, ahead.next()) {
                break;
            }
            if j > 0 && s.end() > ahead.next() {
                break;
            }
            run.width = run.width.max(self.stmt_len(s)?);
            run.remaining += 1;
            ahead.inc_line();
        }
        tracing::trace!(width = run.width, len = run.remaining, "trailing comment run");
        Ok(run)
    }

    /// Rendered length of a statement, measured by a second printer that
    /// writes into a counter.
    pub(super) fn stmt_len(&self, s: &'f Stmt) -> io::Result<usize> {
        let mut counter = ByteCounter::default();
        let mut p = Printer::measuring(&mut counter, self.file);
        p.lines.advance_to(s.pos());
        p.stmt(s)?;
        drop(p);
        Ok(counter.count())
    }
}
