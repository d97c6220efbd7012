//! Arithmetic and test expressions
//!
//! Two layouts: compact (`i=i+1`, used by `let`) and spaced
//! (`i = i + 1`, everywhere else). Inside `[[ ]]` a unary test operator
//! is followed by a space: `-f file`.

use std::io::{self, Write};

use crate::ast::{ArithmExpr, BinaryOperator};

use super::Printer;

impl<'f, W: Write> Printer<'f, W> {
    pub(super) fn arithm(&mut self, expr: &'f ArithmExpr, compact: bool, test: bool) -> io::Result<()> {
        self.want_space = false;
        match expr {
            ArithmExpr::Word(w) => self.word(w),
            ArithmExpr::Binary(x) => {
                self.arithm(&x.x, compact, test)?;
                if compact {
                    self.write_str(x.op.as_str())?;
                } else {
                    if x.op != BinaryOperator::Comma {
                        self.write_byte(b' ')?;
                    }
                    self.write_str(x.op.as_str())?;
                    self.space()?;
                }
                self.arithm(&x.y, compact, test)
            }
            ArithmExpr::Unary(x) => {
                if x.post {
                    self.arithm(&x.x, compact, test)?;
                    self.write_str(x.op.as_str())
                } else {
                    self.write_str(x.op.as_str())?;
                    if test {
                        self.space()?;
                    }
                    self.arithm(&x.x, compact, test)
                }
            }
            ArithmExpr::Paren(x) => {
                self.write_byte(b'(')?;
                self.arithm(&x.x, false, test)?;
                self.write_byte(b')')
            }
        }
    }

    /// A clause of a C-style `for` header, spaced like any other
    /// arithmetic; `let` is the only compact context. A missing clause
    /// prints as nothing.
    pub(super) fn arithm_opt(&mut self, expr: Option<&'f ArithmExpr>) -> io::Result<()> {
        match expr {
            Some(x) => self.arithm(x, false, false),
            None => {
                self.want_space = false;
                Ok(())
            }
        }
    }
}
