//! Command rendering
//!
//! One arm per command kind. Keywords that open a body (`then`, `do`)
//! and closing keywords (`fi`, `done`, `esac`, `}`) follow the line the
//! author put them on, falling back to `; ` when they shared a line.

use std::io::{self, Write};

use crate::ast::{
    BinaryCmd, CaseClause, Command, ForClause, IfClause, Loop, Pos, Redirect, WhileClause,
};

use super::statements::starts_with_lparen;
use super::Printer;

impl<'f, W: Write> Printer<'f, W> {
    /// Print a command. Returns how many of the statement's redirects were
    /// printed inline, between the call's first and second argument.
    pub(super) fn command(&mut self, cmd: &'f Command, redirs: &'f [Redirect]) -> io::Result<usize> {
        let mut start_redirs = 0;
        match cmd {
            Command::Call(x) => {
                if x.args.len() <= 1 {
                    self.word_join(&x.args, true)?;
                    return Ok(0);
                }
                self.word_join(&x.args[..1], true)?;
                let second = x.args[1].pos();
                for r in redirs {
                    if r.pos() > second || r.op.is_heredoc() {
                        break;
                    }
                    if self.want_space {
                        self.space()?;
                    }
                    self.redirect(r)?;
                    start_redirs += 1;
                }
                self.word_join(&x.args[1..], true)?;
            }
            Command::Block(x) => {
                self.spaced_string("{", true)?;
                self.nested_stmts(&x.stmts, x.rbrace)?;
                self.semi_rsrv("}", x.rbrace, true)?;
            }
            Command::If(x) => self.if_clause(x)?,
            Command::Subshell(x) => {
                self.spaced_string("(", false)?;
                self.want_space = x.stmts.first().map_or(false, starts_with_lparen);
                self.nested_stmts(&x.stmts, x.rparen)?;
                self.sep_tok(")", x.rparen)?;
            }
            Command::While(x) => self.while_clause("while", x)?,
            Command::Until(x) => self.while_clause("until", x)?,
            Command::For(x) => self.for_clause(x)?,
            Command::Binary(x) => self.binary_cmd(x)?,
            Command::Func(x) => {
                if x.bash_style {
                    self.write_str("function ")?;
                }
                self.write_str(&x.name.value)?;
                self.write_str("() ")?;
                self.lines.advance_to(x.body.pos());
                self.stmt(&x.body)?;
            }
            Command::Case(x) => self.case_clause(x)?,
            Command::Arithm(x) => {
                if self.want_space {
                    self.space()?;
                }
                self.write_str("((")?;
                self.arithm(&x.x, false, false)?;
                self.write_str("))")?;
            }
            Command::Test(x) => {
                self.spaced_string("[[", true)?;
                self.space()?;
                self.arithm(&x.x, false, true)?;
                self.spaced_string("]]", true)?;
            }
            Command::Decl(x) => {
                let name = if x.variant.is_empty() { "declare" } else { x.variant.as_str() };
                self.spaced_string(name, true)?;
                for w in &x.opts {
                    self.write_byte(b' ')?;
                    self.word(w)?;
                }
                self.assigns(&x.assigns)?;
            }
            Command::Eval(x) => {
                self.spaced_string("eval", true)?;
                if let Some(s) = &x.stmt {
                    self.stmt(s)?;
                }
            }
            Command::Coproc(x) => {
                self.spaced_string("coproc", true)?;
                if let Some(name) = &x.name {
                    self.write_byte(b' ')?;
                    self.write_str(&name.value)?;
                }
                self.stmt(&x.stmt)?;
            }
            Command::Let(x) => {
                self.spaced_string("let", true)?;
                for e in &x.exprs {
                    self.space()?;
                    self.arithm(e, true, false)?;
                }
            }
        }
        Ok(start_redirs)
    }

    fn if_clause(&mut self, x: &'f IfClause) -> io::Result<()> {
        self.spaced_string("if", true)?;
        self.nested_stmts(&x.cond_stmts, Pos::NONE)?;
        self.semi_or_newline("then", x.then_pos)?;
        self.nested_stmts(&x.then_stmts, Pos::NONE)?;
        for el in &x.elifs {
            self.semi_rsrv("elif", el.elif_pos, true)?;
            self.nested_stmts(&el.cond_stmts, Pos::NONE)?;
            self.semi_or_newline("then", el.then_pos)?;
            self.nested_stmts(&el.then_stmts, Pos::NONE)?;
        }
        if !x.else_stmts.is_empty() {
            self.semi_rsrv("else", x.else_pos, true)?;
            self.nested_stmts(&x.else_stmts, Pos::NONE)?;
        } else if x.else_pos.is_valid() {
            self.lines.advance_to(x.else_pos);
        }
        self.semi_rsrv("fi", x.fi, true)
    }

    fn while_clause(&mut self, keyword: &str, x: &'f WhileClause) -> io::Result<()> {
        self.spaced_string(keyword, true)?;
        self.nested_stmts(&x.cond_stmts, Pos::NONE)?;
        self.semi_or_newline("do", x.do_pos)?;
        self.nested_stmts(&x.do_stmts, Pos::NONE)?;
        self.semi_rsrv("done", x.done, true)
    }

    fn for_clause(&mut self, x: &'f ForClause) -> io::Result<()> {
        self.spaced_string("for ", true)?;
        match &x.loop_ {
            Loop::WordIter(it) => {
                self.write_str(&it.name.value)?;
                if !it.list.is_empty() {
                    self.write_str(" in")?;
                    self.word_join(&it.list, true)?;
                }
            }
            Loop::CStyle(c) => {
                self.write_str("((")?;
                if c.init.is_none() {
                    self.write_byte(b' ')?;
                }
                self.arithm_opt(c.init.as_ref())?;
                self.write_str("; ")?;
                self.arithm_opt(c.cond.as_ref())?;
                self.write_str("; ")?;
                self.arithm_opt(c.post.as_ref())?;
                self.write_str("))")?;
            }
        }
        self.semi_or_newline("do", x.do_pos)?;
        self.nested_stmts(&x.do_stmts, Pos::NONE)?;
        self.semi_rsrv("done", x.done, true)
    }

    /// `x op y`. Only the outermost binary command of a chain indents its
    /// wrapped right-hand sides, so `a && b && c` indents once.
    fn binary_cmd(&mut self, x: &'f BinaryCmd) -> io::Result<()> {
        self.stmt(&x.x)?;
        let indent = !self.nested_binary;
        if indent {
            self.indent.increase();
        }
        self.nested_binary = matches!(x.y.cmd, Command::Binary(_));
        if self.hdocs.is_empty() && self.lines.is_past(x.y.pos()) {
            self.bslash_newline()?;
            self.indent()?;
        }
        self.spaced_string(x.op.as_str(), true)?;
        self.lines.advance_to(x.y.pos());
        self.stmt(&x.y)?;
        if indent {
            self.indent.decrease();
        }
        self.nested_binary = false;
        Ok(())
    }

    fn case_clause(&mut self, x: &'f CaseClause) -> io::Result<()> {
        self.spaced_string("case ", true)?;
        self.word(&x.word)?;
        self.write_str(" in")?;
        self.indent.increase();
        for arm in &x.arms {
            let first = arm.patterns.first().map_or(arm.op_pos, |w| w.pos());
            self.comments_and_separate(first)?;
            for (i, w) in arm.patterns.iter().enumerate() {
                if i > 0 {
                    self.spaced_string("|", true)?;
                }
                if self.want_space {
                    self.write_byte(b' ')?;
                }
                self.word(w)?;
            }
            self.write_byte(b')')?;
            let sep = arm.stmts.len() > 1
                || arm.stmts.first().map_or(false, |s| self.lines.is_past(s.pos()));
            self.nested_stmts(&arm.stmts, Pos::NONE)?;
            self.indent.raise();
            if sep {
                self.sep_tok(arm.op.as_str(), arm.op_pos)?;
            } else {
                self.spaced_string(arm.op.as_str(), true)?;
            }
            self.lines.advance_to(arm.op_pos);
            self.indent.lower();
            if sep || arm.op_pos == x.esac {
                self.want_newline = true;
            }
        }
        self.indent.decrease();
        self.semi_rsrv("esac", x.esac, x.arms.is_empty())
    }
}
