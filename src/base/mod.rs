//! Foundation types shared by the walker, parser and classifier.
//!
//! - [`Position`] - 1-based line/column of a call site
//! - [`constants`] - sentinel values exchanged with the host compiler
//!
//! This module has NO dependencies on other apidoc modules.

pub mod constants;
mod position;

pub use position::Position;
