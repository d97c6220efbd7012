//! Printer configuration and entry points.

use std::io::{BufWriter, Write};

use serde::{Deserialize, Serialize};

use crate::ast::File;

use super::errors::PrintResult;
use super::Printer;

/// Output layout options.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Spaces per indentation level; zero indents with tabs.
    pub spaces: usize,
}

impl Config {
    pub fn tabs() -> Self {
        Self { spaces: 0 }
    }

    pub fn with_spaces(spaces: usize) -> Self {
        Self { spaces }
    }

    /// Render `file` to `w`. Output is buffered and flushed before
    /// returning; a failed write aborts the render.
    pub fn fprint<W: Write>(&self, w: W, file: &File) -> PrintResult<()> {
        let span = tracing::debug_span!(
            "print",
            stmts = file.stmts.len(),
            comments = file.comments.len(),
            lines = file.lines.len(),
            spaces = self.spaces,
        );
        let _enter = span.enter();

        let mut out = BufWriter::new(w);
        Printer::new(&mut out, file, *self).file()?;
        out.flush()?;
        tracing::debug!("print finished");
        Ok(())
    }

    /// Render `file` into a string.
    pub fn sprint(&self, file: &File) -> PrintResult<String> {
        let mut buf = Vec::new();
        self.fprint(&mut buf, file)?;
        Ok(String::from_utf8_lossy(&buf).into_owned())
    }
}

/// Render `file` to `w` with the default configuration (tab indentation).
pub fn fprint<W: Write>(w: W, file: &File) -> PrintResult<()> {
    Config::default().fprint(w, file)
}
