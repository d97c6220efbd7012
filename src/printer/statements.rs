//! Statements and statement lists
//!
//! A list keeps the author's choice between `;` and a line break: a
//! statement positioned on a later line starts a new line (keeping at
//! most one blank line), one on the same line follows a `; `.

use std::io::{self, Write};

use crate::ast::{Assign, Command, Pos, Redirect, Stmt};

use super::comments::AlignRun;
use super::Printer;

impl<'f, W: Write> Printer<'f, W> {
    pub(super) fn stmt(&mut self, s: &'f Stmt) -> io::Result<()> {
        if s.negated {
            self.spaced_string("!", true)?;
        }
        self.assigns(&s.assigns)?;
        let start_redirs = self.command(&s.cmd, &s.redirs)?;
        let mut any_newline = false;
        for r in &s.redirs[start_redirs..] {
            if self.lines.is_past(r.op_pos) {
                self.bslash_newline()?;
                if !any_newline {
                    self.indent.increase();
                    any_newline = true;
                }
                self.indent()?;
            }
            self.comments_and_separate(r.op_pos)?;
            if self.want_space {
                self.write_byte(b' ')?;
            }
            self.redirect(r)?;
            if r.op.is_heredoc() {
                self.hdocs.push(r);
            }
        }
        if any_newline {
            self.indent.decrease();
        }
        if s.background {
            self.write_str(" &")?;
        }
        Ok(())
    }

    /// `[n]op word`; heredoc bodies are queued by the caller.
    pub(super) fn redirect(&mut self, r: &'f Redirect) -> io::Result<()> {
        if let Some(n) = &r.n {
            self.write_str(&n.value)?;
        }
        self.write_str(r.op.as_str())?;
        self.want_space = true;
        self.word(&r.word)
    }

    pub(super) fn stmts(&mut self, stmts: &'f [Stmt]) -> io::Result<()> {
        match stmts {
            [] => return Ok(()),
            [s] => return self.single_stmt(s),
            _ => {}
        }
        let mut run = AlignRun::default();
        let mut any_newline = false;
        for (i, s) in stmts.iter().enumerate() {
            let pos = s.pos();
            self.comments_up_to(pos)?;
            if self.lines.index() == 0 {
                // start of the file
            } else if self.lines.is_past(pos) {
                self.newlines(pos)?;
                any_newline = true;
            } else if i > 0 {
                let sep = if stmts[i - 1].background { " " } else { "; " };
                self.write_str(sep)?;
                self.want_space = false;
            }
            self.lines.advance_to(pos);
            let spans_lines = s.end() > self.lines.next();
            self.stmt(s)?;
            self.align_trailing_comment(stmts, i, spans_lines, &mut run)?;
        }
        if any_newline {
            self.want_newline = true;
        }
        Ok(())
    }

    fn single_stmt(&mut self, s: &'f Stmt) -> io::Result<()> {
        let pos = s.pos();
        self.comments_up_to(pos)?;
        if !self.lines.is_past(pos) {
            return self.stmt(s);
        }
        if self.lines.index() > 0 {
            self.newlines(pos)?;
        } else {
            self.lines.advance_to(pos);
        }
        self.stmt(s)?;
        self.want_newline = true;
        Ok(())
    }

    /// Statements of a nested region, one indentation level deeper. A lone
    /// statement that stays on the opening line while the closing token is
    /// on a later one is moved to its own line.
    pub(super) fn nested_stmts(&mut self, stmts: &'f [Stmt], closing: Pos) -> io::Result<()> {
        self.indent.increase();
        if let [s] = stmts {
            if self.lines.is_past(closing) && s.end() <= self.lines.next() {
                self.newline(Pos::NONE)?;
                self.indent()?;
            }
        }
        self.stmts(stmts)?;
        self.indent.decrease();
        Ok(())
    }

    pub(super) fn assigns(&mut self, assigns: &'f [Assign]) -> io::Result<()> {
        let mut any_newline = false;
        for a in assigns {
            if self.lines.is_past(a.pos()) {
                self.bslash_newline()?;
                if !any_newline {
                    self.indent.increase();
                    any_newline = true;
                }
                self.indent()?;
            } else if self.want_space {
                self.space()?;
            }
            if let Some(name) = &a.name {
                self.write_str(&name.value)?;
                if a.append {
                    self.write_byte(b'+')?;
                }
                self.write_byte(b'=')?;
            }
            self.word(&a.value)?;
            self.want_space = true;
        }
        if any_newline {
            self.indent.decrease();
        }
        Ok(())
    }
}

/// A region whose first statement opens with `(` needs a space after an
/// enclosing `(` so the two do not read as `((`.
pub(super) fn starts_with_lparen(s: &Stmt) -> bool {
    match &s.cmd {
        Command::Subshell(_) => true,
        Command::Binary(x) => starts_with_lparen(&x.x),
        _ => false,
    }
}
