//! Error types for call-site classification.

use thiserror::Error;

/// Errors raised while reading or classifying a registration call site.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClassifyError {
    /// No known overload takes this many arguments.
    #[error("Unsupported argument count: {0} (expected 0, 1 or 2)")]
    UnsupportedArgumentCount(usize),

    /// The call text has no argument list.
    #[error("Missing argument list in call: {0}")]
    MissingArgumentList(String),

    /// Parentheses, brackets or braces do not balance.
    #[error("Unbalanced argument list in call: {0}")]
    UnbalancedArgumentList(String),
}
