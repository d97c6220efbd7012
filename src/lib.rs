//! bash-printer - A format-preserving shell syntax tree printer
//!
//! Renders a parsed shell program back to source text, keeping the
//! author's line structure: blank lines, comments, heredoc bodies and
//! line continuations stay where they were, while indentation is
//! normalized.

pub mod ast;
pub mod input;
pub mod printer;

pub use ast::operators::*;
pub use ast::types::*;
pub use ast::{lines_of, Pos};
pub use printer::{fprint, Config, PrintError, PrintResult};
