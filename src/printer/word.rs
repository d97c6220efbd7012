//! Word rendering
//!
//! Literal and quoted text is written exactly as recorded; substitutions
//! recurse into the statement printer.

use std::io::{self, Write};

use crate::ast::{ParamExp, Pos, Word, WordPart};

use super::statements::starts_with_lparen;
use super::Printer;

impl<'f, W: Write> Printer<'f, W> {
    pub(super) fn word(&mut self, w: &'f Word) -> io::Result<()> {
        for wp in &w.parts {
            self.word_part(wp)?;
        }
        Ok(())
    }

    pub(super) fn word_part(&mut self, wp: &'f WordPart) -> io::Result<()> {
        match wp {
            WordPart::Lit(x) => self.write_str(&x.value)?,
            WordPart::SglQuoted(x) => {
                if x.dollar {
                    self.write_byte(b'$')?;
                }
                self.write_byte(b'\'')?;
                self.write_str(&x.value)?;
                self.write_byte(b'\'')?;
                self.lines.advance_to(wp.end());
            }
            WordPart::DblQuoted(x) => {
                if x.dollar {
                    self.write_byte(b'$')?;
                }
                self.write_byte(b'"')?;
                for (i, n) in x.parts.iter().enumerate() {
                    self.word_part(n)?;
                    if i == x.parts.len() - 1 {
                        self.lines.advance_to(n.end());
                    }
                }
                self.write_byte(b'"')?;
            }
            WordPart::CmdSubst(x) => {
                self.lines.advance_to(x.left);
                self.write_str("$(")?;
                self.want_space = x.stmts.first().map_or(false, starts_with_lparen);
                self.nested_stmts(&x.stmts, x.right)?;
                self.sep_tok(")", x.right)?;
            }
            WordPart::ParamExp(x) => self.param_exp(x)?,
            WordPart::ArithmExp(x) => {
                self.write_str("$((")?;
                self.arithm(&x.x, false, false)?;
                self.write_str("))")?;
            }
            WordPart::ArrayExpr(x) => {
                self.want_space = false;
                self.write_byte(b'(')?;
                self.word_join(&x.list, false)?;
                self.sep_tok(")", x.rparen)?;
            }
            WordPart::ExtGlob(x) => {
                self.want_space = false;
                self.write_str(x.op.as_str())?;
                self.write_str(&x.pattern.value)?;
                self.write_byte(b')')?;
            }
            WordPart::ProcSubst(x) => {
                // keep `<(` from fusing with a preceding `<` or `<<`
                if self.want_space {
                    self.space()?;
                }
                self.write_str(x.op.as_str())?;
                self.nested_stmts(&x.stmts, Pos::NONE)?;
                self.write_byte(b')')?;
            }
        }
        self.want_space = true;
        Ok(())
    }

    fn param_exp(&mut self, x: &'f ParamExp) -> io::Result<()> {
        if x.short {
            self.write_byte(b'$')?;
            return self.write_str(&x.param.value);
        }
        self.write_str("${")?;
        if x.length {
            self.write_byte(b'#')?;
        }
        self.write_str(&x.param.value)?;
        if let Some(index) = &x.index {
            self.write_byte(b'[')?;
            self.word(index)?;
            self.write_byte(b']')?;
        }
        if let Some(repl) = &x.repl {
            if repl.all {
                self.write_byte(b'/')?;
            }
            self.write_byte(b'/')?;
            self.word(&repl.orig)?;
            self.write_byte(b'/')?;
            self.word(&repl.with)?;
        } else if let Some(exp) = &x.exp {
            self.write_str(exp.op.as_str())?;
            self.word(&exp.word)?;
        }
        self.write_byte(b'}')
    }

    /// Words separated by spaces. A word positioned on a later line is
    /// moved there, after ` \` when `backslash` is set, and the wrapped
    /// words are indented one level.
    pub(super) fn word_join(&mut self, ws: &'f [Word], backslash: bool) -> io::Result<()> {
        let mut any_newline = false;
        for w in ws {
            let pos = w.pos();
            if self.lines.is_past(pos) {
                self.comments_up_to(pos)?;
                if backslash {
                    self.bslash_newline()?;
                } else {
                    self.write_byte(b'\n')?;
                    self.lines.inc_line();
                }
                if !any_newline {
                    self.indent.increase();
                    any_newline = true;
                }
                self.indent()?;
            } else if self.want_space {
                self.space()?;
            }
            self.word(w)?;
        }
        if any_newline {
            self.indent.decrease();
        }
        Ok(())
    }
}
