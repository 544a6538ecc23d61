//! Public surface discovery.
//!
//! Walks a [`Compilation`](crate::symbols::Compilation) and yields the
//! externally visible types, properties and methods in a stable order. The
//! walker never looks at documentation text.

mod walker;


use std::sync::Arc;

use crate::symbols::{MemberSymbol, SymbolKind, SymbolRef, TypeSymbol};

pub use walker::walk;

/// A public type, identified by its documentation ID.
#[derive(Clone, Debug)]
pub struct SurfaceType<'a> {
    /// `T:` documentation ID.
    pub id: Arc<str>,
    /// Qualified metadata name without the `T:` prefix.
    pub qualified_name: Arc<str>,
    pub symbol: &'a TypeSymbol,
}

impl<'a> SurfaceType<'a> {
    pub fn symbol_ref(&self) -> SymbolRef<'_> {
        SymbolRef::new(&self.id, SymbolKind::Type)
    }
}

/// A public member of a public type.
#[derive(Clone, Debug)]
pub struct SurfaceMember<'a> {
    /// Documentation ID of the containing type.
    pub containing_type: Arc<str>,
    /// Documentation ID of the member.
    pub id: Arc<str>,
    pub symbol: &'a MemberSymbol,
}

impl<'a> SurfaceMember<'a> {
    pub fn kind(&self) -> SymbolKind {
        self.symbol.symbol_kind()
    }

    pub fn symbol_ref(&self) -> SymbolRef<'_> {
        SymbolRef::new(&self.id, self.kind())
    }
}

/// The three ordered surface sequences.
#[derive(Clone, Debug, Default)]
pub struct PublicSurface<'a> {
    pub types: Vec<SurfaceType<'a>>,
    pub properties: Vec<SurfaceMember<'a>>,
    /// Methods and constructors, in declaration order.
    pub methods: Vec<SurfaceMember<'a>>,
    pub(crate) complete: bool,
}

impl<'a> PublicSurface<'a> {
    /// False when the walk was cancelled before visiting every declaration.
    pub fn is_complete(&self) -> bool {
        self.complete
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty() && self.properties.is_empty() && self.methods.is_empty()
    }

    pub fn len(&self) -> usize {
        self.types.len() + self.properties.len() + self.methods.len()
    }
}
