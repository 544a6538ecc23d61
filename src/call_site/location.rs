//! Opaque interceptable location token.

use std::fmt;
use std::sync::Arc;

use crate::base::Position;

/// Identifies the exact source position of a call site for later rewriting.
///
/// The classifier never inspects the token; it is carried through to the
/// generator unchanged.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct InterceptableLocation {
    version: u32,
    file_path: Arc<str>,
    position: Position,
}

impl InterceptableLocation {
    pub const CURRENT_VERSION: u32 = 1;

    pub fn new(file_path: impl Into<Arc<str>>, position: Position) -> Self {
        Self {
            version: Self::CURRENT_VERSION,
            file_path: file_path.into(),
            position,
        }
    }

    pub fn version(&self) -> u32 {
        self.version
    }

    pub fn file_path(&self) -> &str {
        &self.file_path
    }

    pub fn position(&self) -> Position {
        self.position
    }

    /// Location as `path(line,column)`, the form compilers use in diagnostics.
    pub fn display_location(&self) -> String {
        format!("{}({})", self.file_path, self.position)
    }
}

impl fmt::Display for InterceptableLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display_location())
    }
}
