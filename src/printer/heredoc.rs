//! Heredoc Deferral Queue
//!
//! Heredoc bodies cannot be printed where their operator appears; they
//! follow the newline that ends the command line. Bodies are queued in
//! operator order and drained by the next newline.

use std::io::{self, Write};

use crate::ast::{Pos, Redirect, Word, WordPart};

use super::Printer;

#[derive(Debug, Default)]
pub(crate) struct HeredocQueue<'f> {
    pending: Vec<&'f Redirect>,
}

impl<'f> HeredocQueue<'f> {
    pub fn push(&mut self, r: &'f Redirect) {
        self.pending.push(r);
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    pub fn take(&mut self) -> Vec<&'f Redirect> {
        std::mem::take(&mut self.pending)
    }
}

impl<'f, W: Write> Printer<'f, W> {
    /// Write a line break, then every pending heredoc body followed by
    /// its delimiter line.
    pub(super) fn newline(&mut self, pos: Pos) -> io::Result<()> {
        self.want_newline = false;
        self.want_space = false;
        self.write_byte(b'\n')?;
        if self.lines.is_past(pos) {
            self.lines.inc_line();
        }
        let pending = self.hdocs.take();
        if !pending.is_empty() {
            tracing::trace!(count = pending.len(), "draining heredoc bodies");
        }
        for r in pending {
            if let Some(body) = &r.hdoc {
                self.word(body)?;
                self.lines.advance_to(body.end() + 1);
            }
            self.unquoted_word(&r.word)?;
            self.write_byte(b'\n')?;
            self.lines.inc_line();
            self.want_space = false;
        }
        Ok(())
    }

    /// The delimiter as it must appear on its closing line: quoting
    /// removed, a leading backslash dropped.
    fn unquoted_word(&mut self, w: &'f Word) -> io::Result<()> {
        for wp in &w.parts {
            match wp {
                WordPart::SglQuoted(x) => self.write_str(&x.value)?,
                WordPart::DblQuoted(x) => {
                    for qp in &x.parts {
                        self.word_part(qp)?;
                    }
                }
                WordPart::Lit(x) => {
                    let value = x.value.strip_prefix('\\').unwrap_or(&x.value);
                    self.write_str(value)?;
                }
                _ => self.word_part(wp)?,
            }
        }
        Ok(())
    }
}
