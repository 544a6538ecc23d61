//! Sentinel values shared with the host compiler.

/// Documentation text the compiler returns for a declaration whose doc tag
/// exists but carries nothing.
pub const EMPTY_DOCUMENT: &str = "<doc />";

/// Name of the OpenAPI registration entry point whose call sites are classified.
pub const ADD_OPENAPI_METHOD: &str = "AddOpenApi";

/// Returns true when raw documentation text carries no usable content.
pub fn is_absent_documentation(raw: &str) -> bool {
    let trimmed = raw.trim();
    trimmed.is_empty() || trimmed == EMPTY_DOCUMENT
}
