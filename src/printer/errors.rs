//! Printer Errors
//!
//! The printer trusts its input tree, so the only failure it can report
//! is the output sink refusing a write.

use std::io;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PrintError {
    /// The underlying writer failed; rendering stopped at that point.
    #[error(transparent)]
    Io(#[from] io::Error),
}

pub type PrintResult<T> = Result<T, PrintError>;
