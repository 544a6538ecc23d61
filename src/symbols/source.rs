//! Raw documentation retrieval.

use std::sync::Arc;

use rustc_hash::FxHashMap;

use super::model::SymbolRef;

/// Supplies the raw XML documentation attached to a declaration.
///
/// The returned text must already have `inheritdoc` and `include`
/// directives expanded. `None` means the declaration carries no
/// documentation, which is not an error.
pub trait DocumentationSource {
    fn documentation_xml(&self, symbol: SymbolRef<'_>, culture: Option<&str>) -> Option<String>;
}

impl<T: DocumentationSource + ?Sized> DocumentationSource for &T {
    fn documentation_xml(&self, symbol: SymbolRef<'_>, culture: Option<&str>) -> Option<String> {
        (**self).documentation_xml(symbol, culture)
    }
}

/// Documentation keyed by documentation ID, with optional per-culture overrides.
#[derive(Clone, Debug, Default)]
pub struct InMemoryDocumentationSource {
    invariant: FxHashMap<Arc<str>, String>,
    localized: FxHashMap<(Arc<str>, Arc<str>), String>,
}

impl InMemoryDocumentationSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register culture-invariant documentation for an ID.
    pub fn insert(&mut self, id: impl Into<Arc<str>>, xml: impl Into<String>) {
        self.invariant.insert(id.into(), xml.into());
    }

    /// Register documentation that only applies to one culture.
    pub fn insert_localized(
        &mut self,
        culture: impl Into<Arc<str>>,
        id: impl Into<Arc<str>>,
        xml: impl Into<String>,
    ) {
        self.localized
            .insert((culture.into(), id.into()), xml.into());
    }

    pub fn with(mut self, id: impl Into<Arc<str>>, xml: impl Into<String>) -> Self {
        self.insert(id, xml);
        self
    }

    pub fn len(&self) -> usize {
        self.invariant.len() + self.localized.len()
    }

    pub fn is_empty(&self) -> bool {
        self.invariant.is_empty() && self.localized.is_empty()
    }
}

impl DocumentationSource for InMemoryDocumentationSource {
    fn documentation_xml(&self, symbol: SymbolRef<'_>, culture: Option<&str>) -> Option<String> {
        if let Some(culture) = culture {
            let key = (Arc::<str>::from(culture), Arc::<str>::from(symbol.id));
            if let Some(xml) = self.localized.get(&key) {
                return Some(xml.clone());
            }
        }
        self.invariant.get(symbol.id).cloned()
    }
}
