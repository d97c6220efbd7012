//! Format-preserving Printer
//!
//! Renders a syntax tree back to shell source, replaying the positions
//! recorded by the parser to decide where lines break, where blank lines
//! stay, where comments go and when heredoc bodies are written.
//!
//! The work is split by concern:
//!   lines      - which source line the traversal is on
//!   indent     - nesting depth, only counting levels that were used
//!   comments   - interleaving and aligning comments
//!   heredoc    - deferring heredoc bodies to the end of their line
//!   word       - word parts
//!   arithmetic - arithmetic and `[[ ]]` expressions
//!   command    - each command kind
//!   statements - statements, lists and their separators

pub mod config;
pub mod errors;
pub mod sink;

mod arithmetic;
mod command;
mod comments;
mod heredoc;
mod indent;
mod lines;
mod statements;
mod word;

pub use config::{fprint, Config};
pub use errors::{PrintError, PrintResult};

use std::io::{self, Write};

use crate::ast::{File, Pos};

use comments::CommentQueue;
use heredoc::HeredocQueue;
use indent::IndentStack;
use lines::LineTracker;

/// Transient render state for one print call. Borrows the tree for the
/// duration of the call and is dropped afterwards.
pub(crate) struct Printer<'f, W> {
    out: W,
    file: &'f File,
    config: Config,

    want_space: bool,
    want_newline: bool,

    /// Extra spaces before the next trailing comment
    comment_padding: usize,
    /// Whether the right side of the binary command being printed is
    /// itself a binary command
    nested_binary: bool,

    lines: LineTracker<'f>,
    indent: IndentStack,
    comments: CommentQueue<'f>,
    hdocs: HeredocQueue<'f>,
}

impl<'f, W: Write> Printer<'f, W> {
    pub(crate) fn new(out: W, file: &'f File, config: Config) -> Self {
        Self {
            out,
            file,
            config,
            want_space: false,
            want_newline: false,
            comment_padding: 0,
            nested_binary: false,
            lines: LineTracker::new(&file.lines),
            indent: IndentStack::default(),
            comments: CommentQueue::new(&file.comments),
            hdocs: HeredocQueue::default(),
        }
    }

    /// A printer that ignores comments, used to measure statements.
    fn measuring(out: W, file: &'f File) -> Self {
        let mut p = Self::new(out, file, Config::default());
        p.comments = CommentQueue::new(&[]);
        p
    }

    /// Render the whole file: statements, leftover comments, final newline.
    pub(crate) fn file(&mut self) -> io::Result<()> {
        let file = self.file;
        self.stmts(&file.stmts)?;
        self.comments_up_to(Pos::NONE)?;
        self.newline(Pos::NONE)
    }

    fn write_byte(&mut self, b: u8) -> io::Result<()> {
        self.out.write_all(&[b])
    }

    fn write_str(&mut self, s: &str) -> io::Result<()> {
        self.out.write_all(s.as_bytes())
    }

    fn space(&mut self) -> io::Result<()> {
        self.write_byte(b' ')?;
        self.want_space = false;
        Ok(())
    }

    fn spaces(&mut self, n: usize) -> io::Result<()> {
        for _ in 0..n {
            self.write_byte(b' ')?;
        }
        Ok(())
    }

    fn tabs(&mut self, n: usize) -> io::Result<()> {
        for _ in 0..n {
            self.write_byte(b'\t')?;
        }
        Ok(())
    }

    /// ` \` line continuation
    fn bslash_newline(&mut self) -> io::Result<()> {
        self.write_str(" \\\n")?;
        self.want_space = false;
        self.lines.inc_line();
        Ok(())
    }

    fn spaced_string(&mut self, s: &str, space_after: bool) -> io::Result<()> {
        if self.want_space {
            self.write_byte(b' ')?;
        }
        self.write_str(s)?;
        self.want_space = space_after;
        Ok(())
    }

    /// Keyword that opens a body (`then`, `do`): on its own line if the
    /// list before it ended with a newline, else after `; `. The keyword's
    /// own position only advances the line tracker, so `if a\nthen`
    /// prints as `if a; then`.
    fn semi_or_newline(&mut self, s: &str, pos: Pos) -> io::Result<()> {
        if self.want_newline {
            self.newline(pos)?;
            self.indent()?;
        } else {
            self.write_str("; ")?;
        }
        self.lines.advance_to(pos);
        self.write_str(s)?;
        self.want_space = true;
        Ok(())
    }

    fn indent(&mut self) -> io::Result<()> {
        let level = self.indent.mark_used();
        match self.config.spaces {
            0 => self.tabs(level),
            n => self.spaces(n * level),
        }
    }

    /// Newline plus at most one preserved blank line, then indentation.
    fn newlines(&mut self, pos: Pos) -> io::Result<()> {
        self.newline(pos)?;
        if self.lines.is_past(pos) {
            self.write_byte(b'\n')?;
            self.lines.inc_line();
        }
        self.indent()
    }

    fn comments_and_separate(&mut self, pos: Pos) -> io::Result<()> {
        self.comments_up_to(pos)?;
        if self.want_newline || self.lines.is_past(pos) {
            self.newlines(pos)?;
        }
        Ok(())
    }

    /// Closing token that needs no `;` before it, such as `)`.
    fn sep_tok(&mut self, s: &str, pos: Pos) -> io::Result<()> {
        self.indent.raise();
        self.comments_up_to(pos)?;
        self.indent.lower();
        if self.want_newline || self.lines.is_past(pos) {
            self.newlines(pos)?;
        }
        self.write_str(s)?;
        self.want_space = true;
        Ok(())
    }

    /// Reserved word such as `fi` or `done`; falls back to `; word` when it
    /// stays on the current line and `fallback` is set.
    fn semi_rsrv(&mut self, s: &str, pos: Pos, fallback: bool) -> io::Result<()> {
        self.indent.raise();
        self.comments_up_to(pos)?;
        self.indent.lower();
        if self.want_newline || self.lines.is_past(pos) {
            self.newlines(pos)?;
        } else if fallback {
            self.write_str("; ")?;
        } else if self.want_space {
            self.write_byte(b' ')?;
        }
        self.write_str(s)?;
        self.want_space = true;
        Ok(())
    }
}
