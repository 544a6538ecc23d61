//! Host compiler boundary: the declaration graph and its raw documentation.
//!
//! ## Key Types
//!
//! - [`Compilation`] — root of the declaration graph
//! - [`TypeSymbol`] / [`MemberSymbol`] — declarations the walker visits
//! - [`DocumentationSource`] — raw XML documentation per declaration
//! - [`ids`] — stable documentation comment IDs

pub mod ids;
mod model;
mod source;

pub use model::{
    Accessibility, Compilation, MemberKind, MemberSymbol, NamespaceSymbol, SymbolKind, SymbolRef,
    TypeKind, TypeSymbol,
};
pub use source::{DocumentationSource, InMemoryDocumentationSource};
