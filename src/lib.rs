//! # apidoc-base
//!
//! Extracts XML documentation comments from the public surface of a compiled
//! assembly and classifies OpenAPI registration call sites.
//!
//! ## Module Structure (dependency order)
//!
//! ```text
//! collect    → Aggregation: (type id, member id?, record) entries
//!   ↓
//! surface    → Public surface walker (types, properties, methods)
//!   ↓
//! docs       → XML documentation comment parser, cref resolution
//!   ↓
//! symbols    → Host symbol model, documentation ids, documentation sources
//!   ↓
//! base       → Primitives (Position, documentation sentinels)
//!
//! call_site  → Logos lexer, argument shapes, overload classification
//! ```

// ============================================================================
// MODULES (dependency order: base → symbols → docs → surface → collect)
// ============================================================================

/// Foundation types: Position, constants
pub mod base;

/// Symbol model: compilation, namespaces, types, members, documentation ids
pub mod symbols;

/// Documentation comments: XML parsing, inline rendering, cref display names
pub mod docs;

/// Public surface discovery
pub mod surface;

/// Documentation aggregation, sequential and parallel
pub mod collect;

/// OpenAPI registration call sites: lexing and overload classification
pub mod call_site;

// Re-export the pipeline entry points
pub use call_site::{
    AddOpenApiInvocation, Argument, CallSite, ClassifyError, InterceptableLocation,
    OverloadVariant, classify,
};
pub use collect::{
    CollectOptions, Collected, DocumentationRecord, SurfaceEntry, collect, collect_parallel,
};
pub use docs::{ParseOptions, XmlComment};
pub use surface::{PublicSurface, walk};

// Re-export foundation types
pub use base::Position;
pub use symbols::{Compilation, DocumentationSource, InMemoryDocumentationSource};
