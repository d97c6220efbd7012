//! Syntax Tree Types for Bash
//!
//! This module defines the position-annotated tree handed to the printer.
//! Producing it (lexing, parsing) happens elsewhere; the printer only reads it.

pub mod operators;
pub mod position;
pub mod types;

pub use operators::*;
pub use position::{lines_of, Pos};
pub use types::*;
