//! Documentation aggregation over the public surface.
//!
//! ```text
//! walk(compilation)            ← public types, properties, methods
//!     │
//!     ▼
//! documentation_xml(symbol)    ← raw, already-expanded XML
//!     │   skip: absent, "<doc />", constructors
//!     ▼
//! docs::parse(xml)             ← XmlComment
//!     │   properties: attach declared type
//!     ▼
//! SurfaceEntry(type_id, member_id?, record)
//! ```

mod options;
mod record;


use rayon::prelude::*;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, trace};

use crate::base::constants::is_absent_documentation;
use crate::docs;
use crate::surface::{self, PublicSurface};
use crate::symbols::{Compilation, DocumentationSource, SymbolKind, SymbolRef};

pub use options::CollectOptions;
pub use record::{Collected, DocumentationRecord, SurfaceEntry};

/// A symbol queued for documentation, in emission order.
struct Candidate<'a> {
    type_id: &'a str,
    member_id: Option<&'a str>,
    symbol: SymbolRef<'a>,
    value_type: Option<&'a str>,
}

fn candidates<'s>(surface: &'s PublicSurface<'_>) -> Vec<Candidate<'s>> {
    let types = surface.types.iter().map(|ty| Candidate {
        type_id: &ty.id,
        member_id: None,
        symbol: ty.symbol_ref(),
        value_type: None,
    });
    let members = surface
        .properties
        .iter()
        .chain(surface.methods.iter())
        .map(|member| Candidate {
            type_id: &member.containing_type,
            member_id: Some(&member.id),
            symbol: member.symbol_ref(),
            value_type: member.symbol.value_type().map(|ty| &**ty),
        });
    types.chain(members).collect()
}

/// Fetch, filter and parse the documentation of one symbol.
fn document<S: DocumentationSource + ?Sized>(
    candidate: &Candidate<'_>,
    source: &S,
    options: &CollectOptions,
) -> Option<SurfaceEntry> {
    let symbol = candidate.symbol;
    if symbol.kind == SymbolKind::Constructor && options.skip_constructors {
        trace!(id = symbol.id, "skipping constructor");
        return None;
    }

    let xml = source.documentation_xml(symbol, options.culture.as_deref())?;
    if is_absent_documentation(&xml) {
        trace!(id = symbol.id, kind = symbol.kind.display(), "no documentation");
        return None;
    }

    let Some(comment) = docs::parse(&xml, &options.parse) else {
        trace!(id = symbol.id, "documentation carried no content");
        return None;
    };

    let record = match (symbol.kind, candidate.value_type) {
        (SymbolKind::Property, Some(ty)) => DocumentationRecord::for_property(comment, ty),
        _ => DocumentationRecord::new(comment),
    };

    Some(SurfaceEntry {
        type_id: candidate.type_id.to_string(),
        member_id: candidate.member_id.map(str::to_string),
        record,
    })
}

/// Collect documentation for the public surface of `compilation`.
///
/// Entries are emitted for types, then properties, then methods, each group
/// in discovery order. Cancellation is checked before every symbol; a
/// cancelled pass returns a strict prefix of the full output.
pub fn collect<S: DocumentationSource + ?Sized>(
    compilation: &Compilation,
    source: &S,
    options: &CollectOptions,
    cancel: &CancellationToken,
) -> Collected {
    let surface = surface::walk(compilation, cancel);
    if !surface.is_complete() {
        return Collected::default();
    }

    let mut entries = Vec::new();
    for candidate in candidates(&surface) {
        if cancel.is_cancelled() {
            debug!(emitted = entries.len(), "documentation collection cancelled");
            return Collected {
                entries,
                complete: false,
            };
        }
        entries.extend(document(&candidate, source, options));
    }

    info!(
        assembly = %compilation.assembly_name,
        symbols = surface.len(),
        entries = entries.len(),
        "collected documentation"
    );
    Collected {
        entries,
        complete: true,
    }
}

/// Like [`collect`], but fetches and parses symbols on the rayon pool.
///
/// Output order matches [`collect`]. Symbols that observed cancellation cut
/// the output at the first such symbol, so the prefix guarantee still holds.
pub fn collect_parallel<S: DocumentationSource + Sync + ?Sized>(
    compilation: &Compilation,
    source: &S,
    options: &CollectOptions,
    cancel: &CancellationToken,
) -> Collected {
    let surface = surface::walk(compilation, cancel);
    if !surface.is_complete() {
        return Collected::default();
    }

    let outcomes: Vec<Option<Option<SurfaceEntry>>> = candidates(&surface)
        .par_iter()
        .map(|candidate| {
            if cancel.is_cancelled() {
                None
            } else {
                Some(document(candidate, source, options))
            }
        })
        .collect();

    let mut entries = Vec::new();
    for outcome in outcomes {
        match outcome {
            Some(entry) => entries.extend(entry),
            None => {
                debug!(emitted = entries.len(), "parallel documentation collection cancelled");
                return Collected {
                    entries,
                    complete: false,
                };
            }
        }
    }

    info!(
        assembly = %compilation.assembly_name,
        symbols = surface.len(),
        entries = entries.len(),
        "collected documentation in parallel"
    );
    Collected {
        entries,
        complete: true,
    }
}
