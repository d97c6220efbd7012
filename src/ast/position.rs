//! Source Positions
//!
//! `Pos` is a byte offset plus one, so that zero can mean "unknown".
//! Nodes report where they start (`pos`) and the position just past
//! their last byte (`end`).

use serde::{Deserialize, Serialize};
use std::ops::Add;

use super::types::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Pos(pub usize);

impl Pos {
    /// Unknown or unset position
    pub const NONE: Pos = Pos(0);
    /// Past every real position
    pub const MAX: Pos = Pos(usize::MAX >> 1);

    /// Position of the byte at `offset`.
    pub fn from_offset(offset: usize) -> Self {
        Pos(offset + 1)
    }

    pub fn is_valid(self) -> bool {
        self.0 > 0
    }
}

impl Add<usize> for Pos {
    type Output = Pos;

    fn add(self, rhs: usize) -> Pos {
        Pos(self.0.saturating_add(rhs))
    }
}

/// Byte offsets at which each line of `src` starts.
pub fn lines_of(src: &str) -> Vec<usize> {
    let mut lines = vec![0];
    lines.extend(
        src.bytes()
            .enumerate()
            .filter(|&(_, b)| b == b'\n')
            .map(|(i, _)| i + 1),
    );
    lines
}

// =============================================================================
// NODE EXTENTS
// =============================================================================

impl Stmt {
    pub fn pos(&self) -> Pos {
        self.position
    }

    /// End of the statement proper; heredoc bodies are not included.
    pub fn end(&self) -> Pos {
        let mut end = if self.negated { self.position + 1 } else { self.position };
        end = end.max(self.cmd.end());
        if let Some(a) = self.assigns.last() {
            end = end.max(a.end());
        }
        if let Some(r) = self.redirs.last() {
            end = end.max(r.end());
        }
        end
    }
}

impl Assign {
    pub fn pos(&self) -> Pos {
        match &self.name {
            Some(name) => name.value_pos,
            None => self.value.pos(),
        }
    }

    pub fn end(&self) -> Pos {
        if !self.value.parts.is_empty() {
            return self.value.end();
        }
        match &self.name {
            Some(name) => name.end() + if self.append { 2 } else { 1 },
            None => Pos::NONE,
        }
    }
}

impl Redirect {
    pub fn pos(&self) -> Pos {
        match &self.n {
            Some(n) => n.value_pos,
            None => self.op_pos,
        }
    }

    pub fn end(&self) -> Pos {
        self.word.end()
    }
}

impl Command {
    pub fn end(&self) -> Pos {
        match self {
            Command::Call(x) => x.args.last().map_or(Pos::NONE, Word::end),
            Command::Block(x) => x.rbrace + 1,
            Command::If(x) => x.fi + 2,
            Command::Subshell(x) => x.rparen + 1,
            Command::While(x) | Command::Until(x) => x.done + 4,
            Command::For(x) => x.done + 4,
            Command::Binary(x) => x.y.end(),
            Command::Func(x) => x.body.end(),
            Command::Case(x) => x.esac + 4,
            Command::Arithm(x) => x.right + 2,
            Command::Test(x) => x.right + 2,
            Command::Decl(x) => {
                let keyword = if x.variant.is_empty() { "declare" } else { x.variant.as_str() };
                let mut end = x.position + keyword.len();
                if let Some(w) = x.opts.last() {
                    end = end.max(w.end());
                }
                if let Some(a) = x.assigns.last() {
                    end = end.max(a.end());
                }
                end
            }
            Command::Eval(x) => match &x.stmt {
                Some(s) => s.end(),
                None => x.eval_pos + 4,
            },
            Command::Coproc(x) => x.stmt.end(),
            Command::Let(x) => x.exprs.last().map_or(x.let_pos + 3, ArithmExpr::end),
        }
    }
}

impl Word {
    pub fn pos(&self) -> Pos {
        self.parts.first().map_or(Pos::NONE, WordPart::pos)
    }

    pub fn end(&self) -> Pos {
        self.parts.last().map_or(Pos::NONE, WordPart::end)
    }
}

impl Lit {
    pub fn end(&self) -> Pos {
        self.value_pos + self.value.len()
    }
}

impl WordPart {
    pub fn pos(&self) -> Pos {
        match self {
            WordPart::Lit(x) => x.value_pos,
            WordPart::SglQuoted(x) => x.quote_pos,
            WordPart::DblQuoted(x) => x.quote_pos,
            WordPart::CmdSubst(x) => x.left,
            WordPart::ParamExp(x) => x.dollar,
            WordPart::ArithmExp(x) => x.left,
            WordPart::ArrayExpr(x) => x.lparen,
            WordPart::ExtGlob(x) => x.op_pos,
            WordPart::ProcSubst(x) => x.op_pos,
        }
    }

    pub fn end(&self) -> Pos {
        match self {
            WordPart::Lit(x) => x.end(),
            WordPart::SglQuoted(x) => x.quote_pos + x.value.len() + 2 + usize::from(x.dollar),
            WordPart::DblQuoted(x) => match x.parts.last() {
                Some(last) => last.end() + 1,
                None => x.quote_pos + 2 + usize::from(x.dollar),
            },
            WordPart::CmdSubst(x) => x.right + 1,
            WordPart::ParamExp(x) if x.short => x.param.end(),
            WordPart::ParamExp(x) => x.rbrace + 1,
            WordPart::ArithmExp(x) => x.right + 2,
            WordPart::ArrayExpr(x) => x.rparen + 1,
            WordPart::ExtGlob(x) => x.pattern.end() + 1,
            WordPart::ProcSubst(x) => x.rparen + 1,
        }
    }
}

impl ArithmExpr {
    pub fn pos(&self) -> Pos {
        match self {
            ArithmExpr::Word(w) => w.pos(),
            ArithmExpr::Binary(x) => x.x.pos(),
            ArithmExpr::Unary(x) if x.post => x.x.pos(),
            ArithmExpr::Unary(x) => x.op_pos,
            ArithmExpr::Paren(x) => x.lparen,
        }
    }

    pub fn end(&self) -> Pos {
        match self {
            ArithmExpr::Word(w) => w.end(),
            ArithmExpr::Binary(x) => x.y.end(),
            ArithmExpr::Unary(x) if x.post => x.op_pos + x.op.as_str().len(),
            ArithmExpr::Unary(x) => x.x.end(),
            ArithmExpr::Paren(x) => x.rparen + 1,
        }
    }
}
