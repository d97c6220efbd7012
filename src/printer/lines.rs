//! Position/Line Tracker
//!
//! Walks the table of line-start offsets alongside the traversal. The
//! tracker only ever moves forward; `next()` is the position of the
//! newline ending the current line, so any position greater than it sits
//! on a later line.

use crate::ast::Pos;

#[derive(Debug, Clone, Copy)]
pub(crate) struct LineTracker<'f> {
    lines: &'f [usize],
    index: usize,
    next: Pos,
}

impl<'f> LineTracker<'f> {
    pub fn new(lines: &'f [usize]) -> Self {
        Self {
            lines,
            index: 0,
            next: Pos::NONE,
        }
    }

    /// How many line starts have been consumed. Zero means nothing has
    /// been printed yet.
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn next(&self) -> Pos {
        self.next
    }

    /// True when `pos` lies past the line currently being printed.
    pub fn is_past(&self, pos: Pos) -> bool {
        pos > self.next
    }

    /// Start of line `index` in the table, as a position.
    pub fn line_start(&self, index: usize) -> Option<Pos> {
        self.lines.get(index).map(|&off| Pos(off))
    }

    pub fn inc_line(&mut self) {
        self.index += 1;
        self.next = self.line_start(self.index).unwrap_or(Pos::MAX);
    }

    /// Move forward until the current line contains `pos`.
    pub fn advance_to(&mut self, pos: Pos) {
        while self.next < pos {
            self.inc_line();
        }
    }
}
